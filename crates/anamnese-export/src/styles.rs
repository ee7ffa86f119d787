use serde::{Deserialize, Serialize};

/// Fonts, sizes and margins of the generated summary document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentStyles {
    pub body_font: String,
    pub heading_font: String,

    /// Body text size in points.
    pub body_size: usize,
    pub heading1_size: usize,
    pub heading2_size: usize,
    pub heading3_size: usize,

    /// Uniform page margin in inches.
    pub margin_inches: f64,
}

impl Default for DocumentStyles {
    /// A4 clinical printout: compact body text and a 1.5 cm margin.
    fn default() -> Self {
        Self {
            body_font: "Calibri".to_string(),
            heading_font: "Calibri".to_string(),
            body_size: 11,
            heading1_size: 16,
            heading2_size: 13,
            heading3_size: 11,
            margin_inches: 0.59,
        }
    }
}

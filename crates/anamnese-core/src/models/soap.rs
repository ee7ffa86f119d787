use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[ts(export)]
pub enum SoapPlanCategory {
    Diagnostic,
    Therapeutic,
    FollowUp,
    Education,
    Administrative,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SoapAssessmentItem {
    pub id: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SoapPlanItem {
    pub id: String,
    pub text: String,
    pub category: SoapPlanCategory,
    /// Ids of the [`SoapAssessmentItem`]s this plan addresses.
    pub linked_assessments: Vec<String>,
}

/// Subjective block of a SOAP note. Risk scores are not stored here; see
/// [`crate::models::risk::RiskAssessments`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SoapSubjective {
    pub identification: String,
    pub complaint_and_history: String,
    pub systems_review: String,
    pub physiological_history: String,
    pub pathological_history: String,
    pub medications: String,
    pub family_history: String,
    pub habits: String,
    pub socioeconomic: String,
    pub vaccination: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SoapData {
    pub subjective: SoapSubjective,
    pub objective: String,
    pub assessments: Vec<SoapAssessmentItem>,
    pub plans: Vec<SoapPlanItem>,
}

impl Default for SoapData {
    /// A fresh note starts with one empty problem and one diagnostic plan
    /// linked to it.
    fn default() -> Self {
        Self {
            subjective: SoapSubjective::default(),
            objective: String::new(),
            assessments: vec![SoapAssessmentItem {
                id: "1".to_string(),
                text: String::new(),
            }],
            plans: vec![SoapPlanItem {
                id: "1".to_string(),
                text: String::new(),
                category: SoapPlanCategory::Diagnostic,
                linked_assessments: vec!["1".to_string()],
            }],
        }
    }
}

impl SoapData {
    /// Plans that reference the given assessment id.
    pub fn plans_for(&self, assessment_id: &str) -> Vec<&SoapPlanItem> {
        self.plans
            .iter()
            .filter(|p| p.linked_assessments.iter().any(|id| id == assessment_id))
            .collect()
    }
}

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("unknown patient type: {0}")]
    UnknownPatientType(String),

    #[error("unknown pediatric sub-type: {0}")]
    UnknownPediatricSubType(String),
}

use thiserror::Error;

use crate::scoring::QuestionId;

#[derive(Debug, Error)]
pub enum InstrumentError {
    #[error("{points} is not an allowed answer for {question} (allowed: {allowed:?})")]
    InvalidPoints {
        question: QuestionId,
        points: u8,
        allowed: &'static [u8],
    },

    #[error("unknown question: {0}")]
    UnknownQuestion(String),
}

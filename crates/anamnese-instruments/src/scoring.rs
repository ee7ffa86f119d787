use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

use crate::error::InstrumentError;

/// Identifier of one IVCF-20 item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum QuestionId {
    Q1,
    Q2,
    Q3,
    Q4,
    Q5,
    Q6,
    Q7,
    Q8,
    Q9,
    Q10,
    Q11,
    Q12,
    Q13,
    Q14,
    Q15,
    Q16,
    Q17,
    Q18,
    Q19,
    Q20,
}

impl QuestionId {
    pub const ALL: [QuestionId; 20] = [
        QuestionId::Q1,
        QuestionId::Q2,
        QuestionId::Q3,
        QuestionId::Q4,
        QuestionId::Q5,
        QuestionId::Q6,
        QuestionId::Q7,
        QuestionId::Q8,
        QuestionId::Q9,
        QuestionId::Q10,
        QuestionId::Q11,
        QuestionId::Q12,
        QuestionId::Q13,
        QuestionId::Q14,
        QuestionId::Q15,
        QuestionId::Q16,
        QuestionId::Q17,
        QuestionId::Q18,
        QuestionId::Q19,
        QuestionId::Q20,
    ];

    /// 1-based item number as printed on the form.
    pub fn number(self) -> u8 {
        self as u8 + 1
    }

    fn index(self) -> usize {
        self as usize
    }

    /// Point values a respondent can be awarded on this item. 0 is always
    /// the "no" answer.
    pub fn allowed_points(self) -> &'static [u8] {
        match self {
            QuestionId::Q1 => &[0, 1, 3],
            QuestionId::Q2 | QuestionId::Q7 | QuestionId::Q8 | QuestionId::Q12 | QuestionId::Q13 => {
                &[0, 1]
            }
            QuestionId::Q3 | QuestionId::Q4 | QuestionId::Q5 | QuestionId::Q20 => &[0, 4],
            QuestionId::Q6 => &[0, 6],
            QuestionId::Q9
            | QuestionId::Q10
            | QuestionId::Q11
            | QuestionId::Q14
            | QuestionId::Q15
            | QuestionId::Q16
            | QuestionId::Q17
            | QuestionId::Q18
            | QuestionId::Q19 => &[0, 2],
        }
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "q{}", self.number())
    }
}

impl FromStr for QuestionId {
    type Err = InstrumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        trimmed
            .strip_prefix('q')
            .or_else(|| trimmed.strip_prefix('Q'))
            .and_then(|n| n.parse::<usize>().ok())
            .and_then(|n| n.checked_sub(1))
            .and_then(|i| QuestionId::ALL.get(i).copied())
            .ok_or_else(|| InstrumentError::UnknownQuestion(s.to_string()))
    }
}

/// Raw points per item. Unanswered items hold 0, the most favorable answer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrailtyAnswers {
    points: [u8; 20],
}

impl FrailtyAnswers {
    /// Build answers from raw per-item points without checking them against
    /// the allowed values. Use [`FrailtyAnswers::validate`] to audit.
    pub fn from_points(points: [u8; 20]) -> Self {
        Self { points }
    }

    pub fn get(&self, question: QuestionId) -> u8 {
        self.points[question.index()]
    }

    /// Record an answer. Values outside the item's allowed set are rejected
    /// and leave the answers unchanged.
    pub fn set(&mut self, question: QuestionId, points: u8) -> Result<(), InstrumentError> {
        let allowed = question.allowed_points();
        if !allowed.contains(&points) {
            return Err(InstrumentError::InvalidPoints {
                question,
                points,
                allowed,
            });
        }
        self.points[question.index()] = points;
        Ok(())
    }

    /// Write the q1 age seed. Seed points come from
    /// [`age_seed_points`](crate::instruments::ivcf20::age_seed_points), which
    /// only yields q1 options.
    pub(crate) fn seed_age(&mut self, points: u8) {
        debug_assert!(QuestionId::Q1.allowed_points().contains(&points));
        self.points[QuestionId::Q1.index()] = points;
    }

    /// Every item whose raw value is not one of its allowed points.
    pub fn validate(&self) -> Vec<ValidationError> {
        QuestionId::ALL
            .iter()
            .filter(|q| !q.allowed_points().contains(&self.get(**q)))
            .map(|&q| ValidationError::new(q, self.get(q), q.allowed_points()))
            .collect()
    }
}

/// One selectable answer to a question.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AnswerOption {
    pub label: String,
    pub points: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Question {
    pub id: QuestionId,
    pub prompt: String,
    pub options: Vec<AnswerOption>,
}

/// A group of questions presented together, one per wizard page.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Domain {
    pub id: String,
    pub name: String,
    pub questions: Vec<Question>,
    pub description: Option<String>,
}

/// Items summed together before contributing to the total. When `cap` is
/// set, the group's contribution never exceeds it.
#[derive(Debug, Clone, Copy)]
pub struct ScoringGroup {
    pub questions: &'static [QuestionId],
    pub cap: Option<u8>,
}

impl ScoringGroup {
    pub const fn summed(questions: &'static [QuestionId]) -> Self {
        Self {
            questions,
            cap: None,
        }
    }

    pub const fn capped(questions: &'static [QuestionId], cap: u8) -> Self {
        Self {
            questions,
            cap: Some(cap),
        }
    }

    pub fn subtotal(&self, answers: &FrailtyAnswers) -> u8 {
        let raw = self
            .questions
            .iter()
            .fold(0u8, |acc, q| acc.saturating_add(answers.get(*q)));
        match self.cap {
            Some(cap) => raw.min(cap),
            None => raw,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, TS, Error)]
#[ts(export)]
#[error("{message}")]
pub struct ValidationError {
    pub question: QuestionId,
    pub value: u8,
    pub allowed: Vec<u8>,
    pub message: String,
}

impl ValidationError {
    pub fn new(question: QuestionId, value: u8, allowed: &[u8]) -> Self {
        Self {
            question,
            value,
            allowed: allowed.to_vec(),
            message: format!("{question}: {value} is not one of the allowed points {allowed:?}"),
        }
    }
}

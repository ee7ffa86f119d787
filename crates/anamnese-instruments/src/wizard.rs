//! Step-by-step IVCF-20 session.
//!
//! The session owns the answers while the questionnaire is open. Nothing is
//! written to the caller's record until [`Ivcf20Session::apply`], which hands
//! back the final result and ends the session.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::InstrumentError;
use crate::instruments::ivcf20::{age_seed_points, compute_frailty, FrailtyResult};
use crate::scoring::QuestionId::{self, *};
use crate::scoring::FrailtyAnswers;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[ts(export)]
pub enum WizardStep {
    Intro,
    AgeHealth,
    Adl,
    CognitionHumor,
    Mobility,
    Communication,
    Comorbidities,
    Result,
}

impl WizardStep {
    pub const ALL: [WizardStep; 8] = [
        WizardStep::Intro,
        WizardStep::AgeHealth,
        WizardStep::Adl,
        WizardStep::CognitionHumor,
        WizardStep::Mobility,
        WizardStep::Communication,
        WizardStep::Comorbidities,
        WizardStep::Result,
    ];

    fn position(self) -> usize {
        self as usize
    }

    pub fn next(self) -> Option<WizardStep> {
        Self::ALL.get(self.position() + 1).copied()
    }

    pub fn previous(self) -> Option<WizardStep> {
        self.position().checked_sub(1).map(|i| Self::ALL[i])
    }

    /// Items answered on this page. Empty for the intro and result pages.
    pub fn questions(self) -> &'static [QuestionId] {
        match self {
            WizardStep::Intro | WizardStep::Result => &[],
            WizardStep::AgeHealth => &[Q1, Q2],
            WizardStep::Adl => &[Q3, Q4, Q5, Q6],
            WizardStep::CognitionHumor => &[Q7, Q8, Q9, Q10, Q11],
            WizardStep::Mobility => &[Q12, Q13, Q14, Q15, Q16],
            WizardStep::Communication => &[Q17, Q18, Q19],
            WizardStep::Comorbidities => &[Q20],
        }
    }

    /// Matching [`crate::scoring::Domain::id`] for question pages.
    pub fn domain_id(self) -> Option<&'static str> {
        match self {
            WizardStep::Intro | WizardStep::Result => None,
            WizardStep::AgeHealth => Some("age_health"),
            WizardStep::Adl => Some("adl"),
            WizardStep::CognitionHumor => Some("cognition_humor"),
            WizardStep::Mobility => Some("mobility"),
            WizardStep::Communication => Some("communication"),
            WizardStep::Comorbidities => Some("comorbidities"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Ivcf20Session {
    step: WizardStep,
    answers: FrailtyAnswers,
}

impl Ivcf20Session {
    /// Start a fresh session with q1 seeded from the patient's age text.
    pub fn open(default_age: &str) -> Self {
        let mut session = Self {
            step: WizardStep::Intro,
            answers: FrailtyAnswers::default(),
        };
        session.reseed(default_age);
        session
    }

    /// Show a dismissed session again: back to the intro with q1 reseeded.
    /// Answers given before dismissal are kept.
    pub fn reopen(&mut self, default_age: &str) {
        self.step = WizardStep::Intro;
        self.reseed(default_age);
    }

    fn reseed(&mut self, default_age: &str) {
        self.answers.seed_age(age_seed_points(default_age));
    }

    pub fn current_step(&self) -> WizardStep {
        self.step
    }

    pub fn answers(&self) -> &FrailtyAnswers {
        &self.answers
    }

    /// Advance one page. No-op on the result page.
    pub fn next(&mut self) {
        if let Some(step) = self.step.next() {
            self.step = step;
        }
    }

    /// Go back one page. No-op on the intro page.
    pub fn previous(&mut self) {
        if let Some(step) = self.step.previous() {
            self.step = step;
        }
    }

    /// From the result page, return to the first question page keeping all
    /// answers. No-op elsewhere.
    pub fn go_to_review(&mut self) {
        if self.step == WizardStep::Result {
            self.step = WizardStep::AgeHealth;
        }
    }

    pub fn set_answer(&mut self, question: QuestionId, points: u8) -> Result<(), InstrumentError> {
        self.answers.set(question, points)
    }

    pub fn compute_result(&self) -> FrailtyResult {
        compute_frailty(&self.answers)
    }

    /// Confirm the assessment. Consumes the session.
    pub fn apply(self) -> FrailtyResult {
        self.compute_result()
    }
}

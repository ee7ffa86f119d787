//! anamnese-instruments
//!
//! Clinical screening instruments administered during the intake. Pure logic,
//! no I/O. Defines each instrument's domains, questions and allowed points,
//! its scoring rules, and the wizard that walks a respondent through it.

pub mod error;
pub mod instruments;
pub mod scoring;
pub mod wizard;

use scoring::{Domain, FrailtyAnswers, Question, QuestionId, ScoringGroup, ValidationError};

/// Trait implemented by each screening instrument.
pub trait Instrument: Send + Sync {
    /// Unique identifier for this instrument (e.g., "ivcf20").
    fn id(&self) -> &str;

    /// Human-readable name (e.g., "IVCF-20").
    fn name(&self) -> &str;

    /// The domains and questions, in the order they are asked.
    fn domains(&self) -> &[Domain];

    /// How item points combine into the total.
    fn scoring_groups(&self) -> &[ScoringGroup];

    fn question(&self, id: QuestionId) -> Option<&Question> {
        self.domains()
            .iter()
            .flat_map(|d| &d.questions)
            .find(|q| q.id == id)
    }

    /// Check every answered value against the question's options.
    fn validate_answers(&self, answers: &FrailtyAnswers) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        for question in self.domains().iter().flat_map(|d| &d.questions) {
            let value = answers.get(question.id);
            if !question.options.iter().any(|o| o.points == value) {
                let allowed: Vec<u8> = question.options.iter().map(|o| o.points).collect();
                let mut error = ValidationError::new(question.id, value, &allowed);
                error.message = format!("{}: {}", self.name(), error.message);
                errors.push(error);
            }
        }
        errors
    }

    /// Sum of every scoring group's (capped) subtotal.
    fn total_score(&self, answers: &FrailtyAnswers) -> u8 {
        self.scoring_groups()
            .iter()
            .fold(0u8, |acc, g| acc.saturating_add(g.subtotal(answers)))
    }

    /// Format answers as structured text, listing only the items that scored.
    fn to_structured_input(&self, answers: &FrailtyAnswers) -> String {
        let mut output = format!("## {}\n\n", self.name());
        for domain in self.domains() {
            let scored: Vec<&Question> = domain
                .questions
                .iter()
                .filter(|q| answers.get(q.id) > 0)
                .collect();
            if scored.is_empty() {
                continue;
            }
            output.push_str(&format!("### {}\n", domain.name));
            for question in scored {
                output.push_str(&format!(
                    "- {} ({} pts)\n",
                    question.prompt,
                    answers.get(question.id)
                ));
            }
            output.push('\n');
        }
        output
    }
}

/// Return all registered instruments.
pub fn all_instruments() -> Vec<Box<dyn Instrument>> {
    vec![Box::new(instruments::ivcf20::Ivcf20)]
}

/// Look up an instrument by ID.
pub fn get_instrument(id: &str) -> Option<Box<dyn Instrument>> {
    all_instruments().into_iter().find(|i| i.id() == id)
}

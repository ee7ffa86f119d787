use serde::{Deserialize, Serialize};
use ts_rs::TS;

use anamnese_core::models::risk::{FrailtyAssessment, FrailtyLevel};
use anamnese_core::numeric::first_digit_run;

use crate::scoring::QuestionId::*;
use crate::scoring::{AnswerOption, Domain, FrailtyAnswers, Question, QuestionId, ScoringGroup};
use crate::Instrument;

pub const INSTRUMENT_ID: &str = "ivcf20";

/// Age assumed for seeding q1 when the age text has no digits.
const UNPARSABLE_SEED_AGE: u32 = 60;

/// Lowest total classified as moderate vulnerability. Also the threshold
/// for a formal comprehensive geriatric assessment.
const MODERATE_THRESHOLD: u8 = 7;
const HIGH_THRESHOLD: u8 = 15;

/// Official scoring: instrumental ADL (q3–q5) caps at 4, aerobic capacity
/// (q14) at 2, and multiple comorbidity (q20) at 4.
static SCORING_GROUPS: [ScoringGroup; 12] = [
    ScoringGroup::summed(&[Q1]),
    ScoringGroup::summed(&[Q2]),
    ScoringGroup::capped(&[Q3, Q4, Q5], 4),
    ScoringGroup::summed(&[Q6]),
    ScoringGroup::summed(&[Q7, Q8, Q9]),
    ScoringGroup::summed(&[Q10, Q11]),
    ScoringGroup::summed(&[Q12, Q13]),
    ScoringGroup::capped(&[Q14], 2),
    ScoringGroup::summed(&[Q15, Q16]),
    ScoringGroup::summed(&[Q17]),
    ScoringGroup::summed(&[Q18, Q19]),
    ScoringGroup::capped(&[Q20], 4),
];

/// IVCF-20: Índice de Vulnerabilidade Clínico-Funcional.
/// 20 items over age/self-rated health, daily-living activities,
/// cognition and mood, mobility, continence and communication, and multiple
/// comorbidity. Total 0–40: 0–6 low, 7–14 moderate, 15+ high vulnerability.
pub struct Ivcf20;

impl Instrument for Ivcf20 {
    fn id(&self) -> &str {
        INSTRUMENT_ID
    }

    fn name(&self) -> &str {
        "IVCF-20"
    }

    fn domains(&self) -> &[Domain] {
        static DOMAINS: std::sync::LazyLock<Vec<Domain>> = std::sync::LazyLock::new(|| {
            vec![
                Domain {
                    id: "age_health".to_string(),
                    name: "Age and Self-Perceived Health".to_string(),
                    questions: vec![
                        Question {
                            id: Q1,
                            prompt: "What is your age?".to_string(),
                            options: vec![
                                option("60-74 years", 0),
                                option("75-84 years", 1),
                                option("85 years or older", 3),
                            ],
                        },
                        Question {
                            id: Q2,
                            prompt: "Compared with other people your age, would you say your health is:"
                                .to_string(),
                            options: vec![
                                option("Excellent, very good or good", 0),
                                option("Fair or poor", 1),
                            ],
                        },
                    ],
                    description: None,
                },
                Domain {
                    id: "adl".to_string(),
                    name: "Activities of Daily Living".to_string(),
                    questions: vec![
                        yes_no(Q3, "Because of health or physical condition, stopped shopping?", 4),
                        yes_no(
                            Q4,
                            "Because of health or physical condition, stopped managing money or paying bills?",
                            4,
                        ),
                        yes_no(
                            Q5,
                            "Because of health or physical condition, stopped doing light housework?",
                            4,
                        ),
                        yes_no(Q6, "Stopped bathing alone?", 6),
                    ],
                    description: Some(
                        "Instrumental ADL items 3, 4 and 5 score at most 4 points combined".to_string(),
                    ),
                },
                Domain {
                    id: "cognition_humor".to_string(),
                    name: "Cognition and Mood".to_string(),
                    questions: vec![
                        yes_no(Q7, "Has a relative or friend said you are becoming forgetful?", 1),
                        yes_no(Q8, "Has this forgetfulness been getting worse in recent months?", 1),
                        yes_no(Q9, "Does the forgetfulness prevent any everyday activity?", 2),
                        yes_no(Q10, "In the last month, felt discouraged, sad or hopeless?", 2),
                        yes_no(Q11, "In the last month, lost interest or pleasure in activities?", 2),
                    ],
                    description: None,
                },
                Domain {
                    id: "mobility".to_string(),
                    name: "Mobility".to_string(),
                    questions: vec![
                        yes_no(Q12, "Unable to raise the arms above shoulder level?", 1),
                        yes_no(Q13, "Unable to handle or hold small objects?", 1),
                        Question {
                            id: Q14,
                            prompt: "Unintentional weight loss, BMI below 22, calf below 31 cm, or 4 m gait above 5 s?"
                                .to_string(),
                            options: vec![option("No", 0), option("Yes, any of the conditions", 2)],
                        },
                        yes_no(Q15, "Does difficulty walking prevent any everyday activity?", 2),
                        yes_no(Q16, "Two or more falls in the last year?", 2),
                    ],
                    description: Some("Aerobic capacity (item 14) scores at most 2 points".to_string()),
                },
                Domain {
                    id: "communication".to_string(),
                    name: "Continence and Communication".to_string(),
                    questions: vec![
                        yes_no(Q17, "Involuntary loss of urine or feces?", 2),
                        yes_no(Q18, "Does a vision problem prevent any everyday activity?", 2),
                        yes_no(Q19, "Does a hearing problem prevent any everyday activity?", 2),
                    ],
                    description: None,
                },
                Domain {
                    id: "comorbidities".to_string(),
                    name: "Multiple Comorbidity".to_string(),
                    questions: vec![Question {
                        id: Q20,
                        prompt: "Five or more chronic diseases, five or more daily medications, or a hospital admission in the last 6 months?"
                            .to_string(),
                        options: vec![option("No", 0), option("Yes", 4)],
                    }],
                    description: Some("Multiple comorbidity (item 20) scores at most 4 points".to_string()),
                },
            ]
        });
        &DOMAINS
    }

    fn scoring_groups(&self) -> &[ScoringGroup] {
        &SCORING_GROUPS
    }
}

fn option(label: &str, points: u8) -> AnswerOption {
    AnswerOption {
        label: format!("{label} ({points})"),
        points,
    }
}

fn yes_no(id: QuestionId, prompt: &str, yes_points: u8) -> Question {
    Question {
        id,
        prompt: prompt.to_string(),
        options: vec![option("No", 0), option("Yes", yes_points)],
    }
}

/// Derived IVCF-20 outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FrailtyResult {
    pub total_score: u8,
    pub level: FrailtyLevel,
    pub result_text: String,
}

impl FrailtyResult {
    /// A total of 7 or more formally indicates a comprehensive geriatric
    /// assessment.
    pub fn geriatric_assessment_indicated(&self) -> bool {
        self.total_score >= MODERATE_THRESHOLD
    }

    pub fn into_assessment(self) -> FrailtyAssessment {
        FrailtyAssessment {
            score: self.total_score,
            result_text: self.result_text,
            level: self.level,
        }
    }
}

/// Score and classify a set of answers. Unanswered items count as 0.
pub fn compute_frailty(answers: &FrailtyAnswers) -> FrailtyResult {
    let total_score = Ivcf20.total_score(answers);
    let level = classify(total_score);
    FrailtyResult {
        total_score,
        level,
        result_text: result_text(level).to_string(),
    }
}

pub fn classify(total_score: u8) -> FrailtyLevel {
    if total_score >= HIGH_THRESHOLD {
        FrailtyLevel::High
    } else if total_score >= MODERATE_THRESHOLD {
        FrailtyLevel::Moderate
    } else {
        FrailtyLevel::Low
    }
}

pub fn result_text(level: FrailtyLevel) -> &'static str {
    match level {
        FrailtyLevel::Low => "Low clinical-functional vulnerability",
        FrailtyLevel::Moderate => {
            "Moderate vulnerability (comprehensive geriatric assessment indicated)"
        }
        FrailtyLevel::High => "High clinical-functional vulnerability (frail elder)",
    }
}

/// Points for q1 derived from the patient's age text: 85+ → 3, 75–84 → 1,
/// otherwise 0. Text without digits is treated as age 60.
pub fn age_seed_points(age_text: &str) -> u8 {
    let age = first_digit_run(age_text).unwrap_or(UNPARSABLE_SEED_AGE);
    if age >= 85 {
        3
    } else if age >= 75 {
        1
    } else {
        0
    }
}

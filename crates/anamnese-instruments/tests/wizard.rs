use anamnese_core::models::risk::FrailtyLevel;
use anamnese_instruments::scoring::QuestionId;
use anamnese_instruments::wizard::{Ivcf20Session, WizardStep};

#[test]
fn opens_on_intro_with_seeded_age() {
    let session = Ivcf20Session::open("86 anos");
    assert_eq!(session.current_step(), WizardStep::Intro);
    assert_eq!(session.answers().get(QuestionId::Q1), 3);

    assert_eq!(Ivcf20Session::open("76 anos").answers().get(QuestionId::Q1), 1);
    assert_eq!(Ivcf20Session::open("70 anos").answers().get(QuestionId::Q1), 0);
}

#[test]
fn next_walks_every_step_then_stops() {
    let mut session = Ivcf20Session::open("80");
    let mut visited = vec![session.current_step()];
    for _ in 0..10 {
        session.next();
        if visited.last() != Some(&session.current_step()) {
            visited.push(session.current_step());
        }
    }
    assert_eq!(visited, WizardStep::ALL.to_vec());
    assert_eq!(session.current_step(), WizardStep::Result);
}

#[test]
fn previous_stops_at_intro() {
    let mut session = Ivcf20Session::open("80");
    session.previous();
    assert_eq!(session.current_step(), WizardStep::Intro);

    session.next();
    session.next();
    session.previous();
    assert_eq!(session.current_step(), WizardStep::AgeHealth);
}

#[test]
fn review_only_from_result_and_keeps_answers() {
    let mut session = Ivcf20Session::open("80");
    session.next();
    session.next();
    session.go_to_review();
    assert_eq!(session.current_step(), WizardStep::Adl);

    session.set_answer(QuestionId::Q6, 6).unwrap();
    while session.current_step() != WizardStep::Result {
        session.next();
    }
    session.go_to_review();
    assert_eq!(session.current_step(), WizardStep::AgeHealth);
    assert_eq!(session.answers().get(QuestionId::Q6), 6);
}

#[test]
fn reopen_resets_step_and_reseeds_age() {
    let mut session = Ivcf20Session::open("70 anos");
    session.set_answer(QuestionId::Q17, 2).unwrap();
    session.next();
    session.next();

    session.reopen("90 anos");
    assert_eq!(session.current_step(), WizardStep::Intro);
    assert_eq!(session.answers().get(QuestionId::Q1), 3);
    assert_eq!(session.answers().get(QuestionId::Q17), 2);
}

#[test]
fn age_seed_is_always_a_valid_q1_option() {
    for age in ["", "sem idade", "60", "75 anos", "85", "102 anos", "99999999999"] {
        let mut session = Ivcf20Session::open(age);
        assert!(session.answers().validate().is_empty(), "seed for {age:?}");
        session.reopen(age);
        assert!(session.answers().validate().is_empty(), "reseed for {age:?}");
    }
    assert_eq!(Ivcf20Session::open("").answers().get(QuestionId::Q1), 0);
}

#[test]
fn invalid_answer_is_rejected() {
    let mut session = Ivcf20Session::open("70");
    assert!(session.set_answer(QuestionId::Q20, 3).is_err());
    assert_eq!(session.answers().get(QuestionId::Q20), 0);
}

#[test]
fn step_questions_cover_every_item_once() {
    let mut seen: Vec<QuestionId> = WizardStep::ALL
        .iter()
        .flat_map(|s| s.questions().iter().copied())
        .collect();
    seen.sort();
    assert_eq!(seen, QuestionId::ALL.to_vec());
    assert!(WizardStep::Intro.questions().is_empty());
    assert_eq!(WizardStep::Comorbidities.domain_id(), Some("comorbidities"));
}

#[test]
fn eighty_six_year_old_who_stopped_bathing_alone() {
    let mut session = Ivcf20Session::open("86 anos");
    session.next();
    session.next();
    session.set_answer(QuestionId::Q6, 6).unwrap();
    while session.current_step() != WizardStep::Result {
        session.next();
    }

    let result = session.apply();
    assert_eq!(result.total_score, 9);
    assert_eq!(result.level, FrailtyLevel::Moderate);
    assert!(result.result_text.contains("comprehensive geriatric assessment indicated"));

    let assessment = result.into_assessment();
    assert_eq!(assessment.score, 9);
    assert_eq!(assessment.level, FrailtyLevel::Moderate);
}

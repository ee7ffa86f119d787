use anamnese_core::draft_keys::DEFAULT_DRAFT_KEY;
use anamnese_core::models::patient::{PatientType, PediatricSubType};
use anamnese_core::models::record::ClinicalRecord;
use anamnese_core::models::risk::{FrailtyAssessment, FrailtyLevel};
use anamnese_storage::error::StorageError;
use anamnese_storage::{DraftStore, FileDraftStore, MemoryDraftStore};

fn sample_record() -> ClinicalRecord {
    let mut record = ClinicalRecord::new(PatientType::Geriatric, None);
    record.identification.name = "Maria".to_string();
    record.identification.age = "86 anos".to_string();
    record.chief_complaint = "Quedas frequentes".to_string();
    record.physical_exam.vital_signs.blood_pressure = "130/80".to_string();
    record.record_frailty(FrailtyAssessment {
        score: 9,
        result_text: "Moderate vulnerability".to_string(),
        level: FrailtyLevel::Moderate,
    });
    record
}

#[test]
fn missing_draft_loads_as_none() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileDraftStore::new(dir.path(), DEFAULT_DRAFT_KEY).unwrap();
    assert!(store.load().unwrap().is_none());
}

#[test]
fn save_then_load_returns_the_same_record() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileDraftStore::new(dir.path(), DEFAULT_DRAFT_KEY).unwrap();
    let record = sample_record();

    store.save(&record).unwrap();

    assert!(store.path().ends_with("drafts/medhist_draft_v4.json"));
    assert!(store.path().exists());
    assert_eq!(store.load().unwrap(), Some(record));
}

#[test]
fn save_leaves_no_temp_file() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileDraftStore::new(dir.path(), "draft-a").unwrap();
    store.save(&sample_record()).unwrap();

    let names: Vec<String> = std::fs::read_dir(dir.path().join("drafts"))
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["draft-a.json".to_string()]);
}

#[test]
fn save_overwrites_previous_draft() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileDraftStore::new(dir.path(), DEFAULT_DRAFT_KEY).unwrap();
    store.save(&sample_record()).unwrap();

    let replacement = ClinicalRecord::new(PatientType::Pediatric, Some(PediatricSubType::Infant));
    store.save(&replacement).unwrap();

    assert_eq!(store.load().unwrap(), Some(replacement));
}

#[test]
fn document_is_enveloped() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileDraftStore::new(dir.path(), DEFAULT_DRAFT_KEY).unwrap();
    store.save(&sample_record()).unwrap();

    let json: serde_json::Value =
        serde_json::from_slice(&std::fs::read(store.path()).unwrap()).unwrap();
    assert_eq!(json["schema_version"], 1);
    assert!(json["saved_at"].is_string());
    assert_eq!(json["record"]["patient_type"], "GERIATRIC");
    assert_eq!(json["record"]["chief_complaint"], "Quedas frequentes");
}

#[test]
fn bare_record_is_accepted() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileDraftStore::new(dir.path(), DEFAULT_DRAFT_KEY).unwrap();
    let record = sample_record();

    std::fs::create_dir_all(dir.path().join("drafts")).unwrap();
    std::fs::write(store.path(), serde_json::to_vec(&record).unwrap()).unwrap();

    assert_eq!(store.load().unwrap(), Some(record));
}

#[test]
fn newer_schema_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileDraftStore::new(dir.path(), DEFAULT_DRAFT_KEY).unwrap();
    let document = serde_json::json!({
        "schema_version": 99,
        "saved_at": "2026-01-01T00:00:00Z",
        "record": {},
    });

    std::fs::create_dir_all(dir.path().join("drafts")).unwrap();
    std::fs::write(store.path(), document.to_string()).unwrap();

    assert!(matches!(
        store.load(),
        Err(StorageError::UnsupportedVersion {
            found: 99,
            supported: 1
        })
    ));
}

#[test]
fn malformed_draft_is_a_serialization_error() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileDraftStore::new(dir.path(), DEFAULT_DRAFT_KEY).unwrap();

    std::fs::create_dir_all(dir.path().join("drafts")).unwrap();
    std::fs::write(store.path(), b"{ not json").unwrap();

    assert!(matches!(store.load(), Err(StorageError::Serialization(_))));
}

#[test]
fn clear_removes_draft_and_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileDraftStore::new(dir.path(), DEFAULT_DRAFT_KEY).unwrap();
    store.save(&sample_record()).unwrap();

    store.clear().unwrap();
    assert!(store.load().unwrap().is_none());
    store.clear().unwrap();
}

#[test]
fn keys_are_isolated() {
    let dir = tempfile::tempdir().unwrap();
    let first = FileDraftStore::new(dir.path(), "first").unwrap();
    let second = FileDraftStore::new(dir.path(), "second").unwrap();

    first.save(&sample_record()).unwrap();
    assert!(second.load().unwrap().is_none());
}

#[test]
fn unsafe_keys_are_rejected() {
    let dir = tempfile::tempdir().unwrap();
    for key in ["", "../escape", "a/b", "with space"] {
        assert!(matches!(
            FileDraftStore::new(dir.path(), key),
            Err(StorageError::InvalidKey(_))
        ));
    }
}

#[test]
fn summary_docx_is_written_under_exports() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileDraftStore::new(dir.path(), DEFAULT_DRAFT_KEY).unwrap();

    let path = store.save_summary_docx(b"PK").unwrap();

    assert!(path.ends_with("exports/medhist_draft_v4/summary.docx"));
    assert_eq!(std::fs::read(path).unwrap(), b"PK");
}

#[test]
fn memory_store_round_trip() {
    let store = MemoryDraftStore::new();
    assert!(store.load().unwrap().is_none());

    let record = sample_record();
    store.save(&record).unwrap();
    assert_eq!(store.load().unwrap(), Some(record));

    store.clear().unwrap();
    assert!(store.load().unwrap().is_none());
}

#[test]
fn stores_are_usable_as_trait_objects() {
    let dir = tempfile::tempdir().unwrap();
    let stores: Vec<Box<dyn DraftStore>> = vec![
        Box::new(MemoryDraftStore::new()),
        Box::new(FileDraftStore::new(dir.path(), DEFAULT_DRAFT_KEY).unwrap()),
    ];
    for store in &stores {
        let record = ClinicalRecord::new(PatientType::Soap, None);
        store.save(&record).unwrap();
        let loaded = store.load().unwrap().unwrap();
        assert!(loaded.soap.is_some());
    }
}

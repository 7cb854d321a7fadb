//! Integration tests for program storage.
//!
//! Exercises: demo program → ProgramStore (save/list/load) → SpaceCalculator,
//! checking that a stored program reproduces identical results.

use std::fs;

use spaceplan_core::demo::demo_program;
use spaceplan_core::persistence::{
    from_json_str, load_from_path, safe_file_stem, save_to_path, to_json_string,
    PersistenceError, ProgramStore,
};
use spaceplan_logic::calculator::SpaceCalculator;
use spaceplan_logic::remote::RemoteWorkAnalyzer;
use spaceplan_logic::standards::{keys, SpaceStandard};

#[test]
fn roundtrip_reproduces_identical_report() {
    let mut program = demo_program();
    program.circulation_factor = 0.3333333333333333;
    program.custom_standards.insert(
        keys::HUDDLE_ROOM.into(),
        SpaceStandard::new("Huddle", 72.5, "Compact huddle"),
    );

    let json = to_json_string(&program).unwrap();
    let loaded = from_json_str(&json).unwrap();
    assert_eq!(loaded, program);

    let before = SpaceCalculator::new(&program).calculate_totals();
    let after = SpaceCalculator::new(&loaded).calculate_totals();
    assert_eq!(before, after);
    assert_eq!(
        serde_json::to_string(&before).unwrap(),
        serde_json::to_string(&after).unwrap()
    );

    let a = RemoteWorkAnalyzer::new(&program).analyze_scenarios();
    let b = RemoteWorkAnalyzer::new(&loaded).analyze_scenarios();
    assert_eq!(a, b);
}

#[test]
fn store_save_load_and_list() {
    let dir = tempfile::tempdir().unwrap();
    let store = ProgramStore::open(dir.path().join("programs")).unwrap();
    assert!(store.dir().is_dir());
    assert!(store.list().unwrap().is_empty());

    let program = demo_program();
    let path = store.save(&program, Some("acme.json")).unwrap();
    assert!(path.ends_with("acme.json"));

    let loaded = store.load("acme.json").unwrap();
    assert_eq!(loaded, program);

    let listing = store.list().unwrap();
    assert_eq!(listing.len(), 1);
    assert_eq!(listing[0].filename, "acme.json");
    assert_eq!(listing[0].company_name, "Acme Technologies Inc.");
    assert_eq!(listing[0].location, "Denver, Colorado");
    assert_eq!(listing[0].date_created, program.date_created);
}

#[test]
fn store_generates_filename_from_company() {
    let dir = tempfile::tempdir().unwrap();
    let store = ProgramStore::open(dir.path()).unwrap();
    let path = store.save(&demo_program(), None).unwrap();

    let name = path.file_name().unwrap().to_str().unwrap().to_string();
    let stem = safe_file_stem("Acme Technologies Inc.");
    assert!(name.starts_with(&format!("{stem}_")), "{name}");
    assert!(name.ends_with(".json"));
    assert!(store.load(&name).is_ok());
}

#[test]
fn list_skips_unreadable_and_foreign_files() {
    let dir = tempfile::tempdir().unwrap();
    let store = ProgramStore::open(dir.path()).unwrap();
    store.save(&demo_program(), Some("b.json")).unwrap();
    store.save(&demo_program(), Some("a.json")).unwrap();
    fs::write(dir.path().join("broken.json"), "{ not json").unwrap();
    fs::write(dir.path().join("notes.txt"), "hello").unwrap();

    let names: Vec<String> = store.list().unwrap().into_iter().map(|s| s.filename).collect();
    assert_eq!(names, vec!["a.json", "b.json"]);
}

#[test]
fn missing_file_reports_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let store = ProgramStore::open(dir.path()).unwrap();
    let err = store.load("ghost.json").unwrap_err();
    assert!(matches!(err, PersistenceError::NotFound(_)));
}

#[test]
fn path_helpers_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("direct.json");
    let program = demo_program();
    save_to_path(&path, &program).unwrap();
    assert_eq!(load_from_path(&path).unwrap(), program);
}

#[test]
fn invalid_document_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.json");
    fs::write(
        &path,
        r#"{"company_name": "Bad", "departments": [{"name": "X", "standard_workstations": -3}]}"#,
    )
    .unwrap();
    assert!(matches!(
        load_from_path(&path).unwrap_err(),
        PersistenceError::Json(_)
    ));
}

//! Integration tests for the prompt library
//!
//! These tests drive the public API the way the Neovim plugin does:
//! - A file-backed store that survives restarts
//! - Command dispatch for CRUD, filtering and import/export
//! - Recovery from corrupt storage

use std::cell::RefCell;
use std::fs;
use std::rc::Rc;

use promptbook_core::commands::dispatch;
use promptbook_core::notify::Severity;
use promptbook_core::samples::sample_prompts;
use promptbook_core::ui::RecordingUi;
use promptbook_core::{App, Config, Prompt};
use serde_json::json;
use tempfile::{tempdir, TempDir};

fn config(dir: &TempDir) -> Config {
    Config {
        data_dir: Some(dir.path().join("data")),
        export_dir: Some(dir.path().join("exports")),
        ..Config::default()
    }
}

fn open(config: &Config) -> (App, Rc<RefCell<RecordingUi>>) {
    let ui = Rc::new(RefCell::new(RecordingUi::new()));
    let app = App::from_config(config, Box::new(Rc::clone(&ui))).expect("app opens");
    (app, ui)
}

#[test]
fn test_first_run_seeds_samples_on_disk() {
    let dir = tempdir().unwrap();
    let config = config(&dir);

    let (app, _) = open(&config);
    assert_eq!(app.prompts(), sample_prompts().as_slice());

    let raw = fs::read_to_string(dir.path().join("data").join("aiPrompts.json")).unwrap();
    let stored: Vec<Prompt> = serde_json::from_str(&raw).unwrap();
    assert_eq!(stored, sample_prompts());
}

#[test]
fn test_changes_survive_restart() {
    let dir = tempdir().unwrap();
    let config = config(&dir);

    let created_id = {
        let (mut app, ui) = open(&config);
        ui.borrow_mut().answer([true]);

        dispatch(&mut app, "prompts.new", json!({})).unwrap();
        let result = dispatch(
            &mut app,
            "prompts.submit",
            json!({"title": "Standup", "text": "Summarise my day", "category": "Business", "tags": "work"}),
        )
        .unwrap();

        dispatch(&mut app, "prompts.edit", json!({"id": "3"})).unwrap();
        dispatch(
            &mut app,
            "prompts.submit",
            json!({"title": "Client Email", "text": "Ask for more time", "category": "Business", "tags": ""}),
        )
        .unwrap();

        dispatch(&mut app, "prompts.delete", json!({"id": "5"})).unwrap();
        result["id"].as_str().unwrap().to_string()
    };

    let (app, _) = open(&config);
    let ids: Vec<&str> = app.prompts().iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, [created_id.as_str(), "1", "2", "3", "4"]);
    assert_eq!(app.find("3").unwrap().title, "Client Email");
    assert!(app.find("3").unwrap().tags.is_empty());
}

#[test]
fn test_corrupt_store_recovers_with_samples() {
    let dir = tempdir().unwrap();
    let config = config(&dir);
    fs::create_dir_all(dir.path().join("data")).unwrap();
    fs::write(dir.path().join("data").join("aiPrompts.json"), "{{{{").unwrap();

    let (app, ui) = open(&config);

    assert_eq!(app.prompts().len(), 5);
    assert!(ui.borrow().toasts.is_empty());
    let raw = fs::read_to_string(dir.path().join("data").join("aiPrompts.json")).unwrap();
    assert!(serde_json::from_str::<Vec<Prompt>>(&raw).is_ok());
}

#[test]
fn test_search_is_case_insensitive_over_samples() {
    let dir = tempdir().unwrap();
    let (mut app, _) = open(&config(&dir));

    let result = dispatch(&mut app, "prompts.filter", json!({"search": "PYTHON"})).unwrap();
    let cards = result["view"]["cards"].as_array().unwrap();
    assert_eq!(cards.len(), 1);
    assert_eq!(cards[0]["title"], "Python Code Debugger");
}

#[test]
fn test_export_import_round_trip_doubles_count() {
    let dir = tempdir().unwrap();
    let (mut app, ui) = open(&config(&dir));
    ui.borrow_mut().answer([true]);

    let exported = dispatch(&mut app, "prompts.export", json!({})).unwrap();
    let path = exported["path"].as_str().unwrap().to_string();
    assert!(path.starts_with(dir.path().join("exports").to_str().unwrap()));

    dispatch(&mut app, "prompts.import", json!({"path": path})).unwrap();

    assert_eq!(app.prompts().len(), 10);
    let first: Vec<&str> = app.prompts()[..5].iter().map(|p| p.id.as_str()).collect();
    assert_eq!(first, ["1", "2", "3", "4", "5"]);
}

#[test]
fn test_import_without_valid_records_changes_nothing() {
    let dir = tempdir().unwrap();
    let (mut app, ui) = open(&config(&dir));
    let file = dir.path().join("bad.json");
    fs::write(&file, r#"[{"title":"x"}]"#).unwrap();

    let result = dispatch(&mut app, "prompts.import", json!({"path": file})).unwrap();

    assert_eq!(result["imported"], 0);
    assert_eq!(app.prompts().len(), 5);
    assert_eq!(
        ui.borrow().messages(Severity::Error),
        ["Import failed: No valid prompts found in the file"]
    );
}

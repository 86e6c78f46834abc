use std::io::Cursor;
use std::path::Path;

use tempfile::tempdir;

use crate::config::UiSettings;
use crate::playlist::PlaylistStore;

use super::menu::{Choice, parse_choice};
use super::session;

fn run_script(store: &mut PlaylistStore, script: &str) -> String {
    let mut input = Cursor::new(script.to_string());
    let mut out: Vec<u8> = Vec::new();
    session::run(&mut input, &mut out, store, &UiSettings::default()).unwrap();
    String::from_utf8(out).unwrap()
}

fn open_in(dir: &Path, name: &str) -> PlaylistStore {
    PlaylistStore::open(name, dir).unwrap()
}

#[test]
fn parse_choice_maps_every_menu_entry() {
    assert_eq!(parse_choice("1"), Some(Choice::Add));
    assert_eq!(parse_choice("2"), Some(Choice::Remove));
    assert_eq!(parse_choice("3"), Some(Choice::Display));
    assert_eq!(parse_choice("4"), Some(Choice::Edit));
    assert_eq!(parse_choice("5"), Some(Choice::Save));
    assert_eq!(parse_choice("6"), Some(Choice::Delete));
    assert_eq!(parse_choice("7"), Some(Choice::Search));
    assert_eq!(parse_choice("8"), Some(Choice::Sort));
    assert_eq!(parse_choice("9"), Some(Choice::Shuffle));
    assert_eq!(parse_choice(" 10 "), Some(Choice::Quit));
    assert_eq!(parse_choice("0"), Some(Choice::QuitFarewell));

    assert_eq!(parse_choice("11"), None);
    assert_eq!(parse_choice("add"), None);
    assert_eq!(parse_choice(""), None);
}

#[test]
fn add_display_save_exit_session() {
    let dir = tempdir().unwrap();
    let mut store = open_in(dir.path(), "demo");

    let out = run_script(
        &mut store,
        "1\nImagine\nJohn Lennon\n3:03\n3\n5\n10\n",
    );

    assert!(out.contains("Added: Imagine by John Lennon (3:03)"));
    assert!(out.contains("1. Imagine by John Lennon (3:03)"));
    assert!(out.contains("Playlist saved to"));

    let contents = std::fs::read_to_string(store.path()).unwrap();
    assert_eq!(contents, "Imagine,John Lennon,3:03\n");
}

#[test]
fn invalid_choice_reprompts_without_state_change() {
    let dir = tempdir().unwrap();
    let mut store = open_in(dir.path(), "demo");

    let out = run_script(&mut store, "42\n0\n");

    assert!(out.contains("Invalid choice. Try again."));
    assert!(out.contains(&UiSettings::default().farewell_text));
    assert!(store.is_empty());
    assert!(!store.is_dirty());
}

#[test]
fn quit_with_unsaved_changes_prints_a_note() {
    let dir = tempdir().unwrap();
    let mut store = open_in(dir.path(), "demo");

    let out = run_script(&mut store, "1\nImagine\nJohn Lennon\n3:03\n10\n");

    assert!(out.contains("Note: unsaved changes were discarded."));
    assert!(store.is_dirty());
}

#[test]
fn plain_exit_skips_the_farewell_message() {
    let dir = tempdir().unwrap();
    let mut store = open_in(dir.path(), "demo");

    let out = run_script(&mut store, "10\n");
    assert!(!out.contains(&UiSettings::default().farewell_text));
}

#[test]
fn delete_flow_requires_a_yes_answer() {
    let dir = tempdir().unwrap();
    let mut store = open_in(dir.path(), "demo");
    store.add("Imagine", "John Lennon", "3:03").unwrap();
    store.save().unwrap();

    let out = run_script(&mut store, "6\nno\n10\n");
    assert!(out.contains("Deletion cancelled."));
    assert!(store.backing_file_exists());

    let out = run_script(&mut store, "6\nYES\n10\n");
    assert!(out.contains("Playlist deleted."));
    assert!(!store.backing_file_exists());
    assert!(store.is_empty());
}

#[test]
fn delete_without_backing_file_skips_the_confirmation_prompt() {
    let dir = tempdir().unwrap();
    let mut store = open_in(dir.path(), "never-saved");

    let out = run_script(&mut store, "6\n10\n");

    assert!(out.contains("No playlist file to delete."));
    assert!(!out.contains("Are you absolutely sure"));
    // The "10" answer must still reach the menu, not the confirmation.
    assert!(!out.contains("Invalid choice."));
}

#[test]
fn edit_flow_keeps_fields_left_empty() {
    let dir = tempdir().unwrap();
    let mut store = open_in(dir.path(), "demo");
    store.add("Yesterday", "Unknown", "2:05").unwrap();

    let out = run_script(&mut store, "4\nyesterday\n\nThe Beatles\n\n10\n");

    assert!(out.contains("Editing: Yesterday by Unknown (2:05)"));
    assert!(out.contains("Updated: Yesterday by The Beatles (2:05)"));
}

#[test]
fn search_and_sort_flows_report_results_and_errors() {
    let dir = tempdir().unwrap();
    let mut store = open_in(dir.path(), "demo");
    store.add("Yesterday", "The Beatles", "2:05").unwrap();
    store.add("Imagine", "John Lennon", "3:03").unwrap();

    let out = run_script(&mut store, "7\nlennon\n8\nalbum\n8\ntitle\n10\n");

    assert!(out.contains("Search results:"));
    assert!(out.contains("  Imagine by John Lennon (3:03)"));
    assert!(out.contains("unknown sort key"));
    assert!(out.contains("Playlist sorted."));
    assert_eq!(store.songs()[0].title, "Imagine");
}

#[test]
fn end_of_input_ends_the_session_cleanly() {
    let dir = tempdir().unwrap();
    let mut store = open_in(dir.path(), "demo");
    let out = run_script(&mut store, "");
    assert!(out.contains("Options:"));
}

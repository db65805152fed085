use shadow_notes::error::{ApiError, NoteError};
use shadow_notes::tooling::cli::NoteCommands;
use tempfile::TempDir;

use crate::integration::support::{add, list_json, note, registered};

fn view(number: u64, key: Option<&str>) -> shadow_notes::tooling::cli::Commands {
    note(NoteCommands::View {
        number,
        key: key.map(str::to_string),
    })
}

#[test]
fn add_then_list_numbers_notes_from_one() {
    let dir = TempDir::new().unwrap();
    let ctx = registered(dir.path(), "alice");

    assert_eq!(ctx.execute(&add("first", None, &[])).unwrap(), "Note #1 added");
    assert_eq!(
        ctx.execute(&add("second", Some("k1"), &[])).unwrap(),
        "Note #2 added (locked)"
    );

    let listed = list_json(&ctx);
    assert_eq!(listed["total"], 2);
    assert_eq!(listed["notes"][0]["number"], 1);
    assert_eq!(listed["notes"][0]["content"], "first");
    assert_eq!(listed["notes"][1]["locked"], true);
    assert!(listed["notes"][1]["content"].is_null());
}

#[test]
fn empty_content_is_rejected() {
    let dir = TempDir::new().unwrap();
    let ctx = registered(dir.path(), "alice");

    let err = ctx.execute(&add("", None, &[])).unwrap_err();
    assert!(matches!(err, ApiError::Notes(NoteError::EmptyContent)));
    assert_eq!(list_json(&ctx)["total"], 0);
}

#[test]
fn locked_note_requires_its_key() {
    let dir = TempDir::new().unwrap();
    let ctx = registered(dir.path(), "alice");
    ctx.execute(&add("Diary entry", Some("k1"), &[])).unwrap();

    let err = ctx.execute(&view(1, None)).unwrap_err();
    assert!(matches!(err, ApiError::Notes(NoteError::KeyRequired)));

    let err = ctx.execute(&view(1, Some("nope"))).unwrap_err();
    assert!(matches!(err, ApiError::Notes(NoteError::WrongKey)));

    let output = ctx.execute(&view(1, Some("k1"))).unwrap();
    assert!(output.starts_with("Note #1 (locked)"));
    assert!(output.ends_with("Diary entry"));
}

#[test]
fn view_out_of_range_reports_one_based_number() {
    let dir = TempDir::new().unwrap();
    let ctx = registered(dir.path(), "alice");
    ctx.execute(&add("only", None, &[])).unwrap();

    let err = ctx.execute(&view(3, None)).unwrap_err();
    assert_eq!(err.to_string(), "Invalid note number: 3 (you have 1 note(s))");
}

#[test]
fn search_skips_locked_notes() {
    let dir = TempDir::new().unwrap();
    let ctx = registered(dir.path(), "alice");
    ctx.execute(&add("Learn Python basics", None, &["coding"]))
        .unwrap();
    ctx.execute(&add("Python is fun", Some("k1"), &[])).unwrap();
    ctx.execute(&add("Groceries", None, &["python-shop"])).unwrap();

    let output = ctx
        .execute(&note(NoteCommands::Search {
            keyword: "python".to_string(),
            tags: false,
            format: "json".to_string(),
        }))
        .unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(parsed["total"], 1);
    assert_eq!(parsed["results"][0]["number"], 1);

    let output = ctx
        .execute(&note(NoteCommands::Search {
            keyword: "python".to_string(),
            tags: true,
            format: "json".to_string(),
        }))
        .unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(parsed["total"], 2);
    assert_eq!(parsed["results"][1]["number"], 3);
}

#[test]
fn remove_lock_then_view_without_key() {
    let dir = TempDir::new().unwrap();
    let ctx = registered(dir.path(), "alice");
    ctx.execute(&add("Diary entry", Some("k1"), &[])).unwrap();

    let edit = note(NoteCommands::Edit {
        number: 1,
        content: None,
        new_lock: None,
        remove_lock: true,
        tags: vec![],
        clear_tags: false,
        key: Some("k1".to_string()),
    });
    assert_eq!(ctx.execute(&edit).unwrap(), "Note #1 updated");

    let output = ctx.execute(&view(1, None)).unwrap();
    assert!(output.ends_with("Diary entry"));
    assert_eq!(list_json(&ctx)["notes"][0]["locked"], false);
}

#[test]
fn edit_without_changes_is_a_no_op() {
    let dir = TempDir::new().unwrap();
    let ctx = registered(dir.path(), "alice");
    ctx.execute(&add("keep", None, &["a"])).unwrap();

    let edit = note(NoteCommands::Edit {
        number: 1,
        content: None,
        new_lock: None,
        remove_lock: false,
        tags: vec![],
        clear_tags: false,
        key: None,
    });
    assert_eq!(ctx.execute(&edit).unwrap(), "Nothing to change.");
    assert_eq!(list_json(&ctx)["notes"][0]["tags"][0], "a");
}

#[test]
fn edit_replaces_content_and_clears_tags() {
    let dir = TempDir::new().unwrap();
    let ctx = registered(dir.path(), "alice");
    ctx.execute(&add("draft", None, &["a", "b"])).unwrap();

    let edit = note(NoteCommands::Edit {
        number: 1,
        content: Some("final".to_string()),
        new_lock: Some("k2".to_string()),
        remove_lock: false,
        tags: vec![],
        clear_tags: true,
        key: None,
    });
    assert_eq!(ctx.execute(&edit).unwrap(), "Note #1 updated (locked)");

    let output = ctx.execute(&view(1, Some("k2"))).unwrap();
    assert!(output.ends_with("final"));
    assert_eq!(list_json(&ctx)["notes"][0]["tags"], serde_json::json!([]));
}

#[test]
fn delete_requires_force_without_a_terminal() {
    let dir = TempDir::new().unwrap();
    let ctx = registered(dir.path(), "alice");
    ctx.execute(&add("a", None, &[])).unwrap();

    let err = ctx
        .execute(&note(NoteCommands::Delete {
            number: 1,
            key: None,
            force: false,
        }))
        .unwrap_err();
    assert!(matches!(err, ApiError::Cancelled(_)));
    assert_eq!(list_json(&ctx)["total"], 1);
}

#[test]
fn delete_shifts_later_notes_down() {
    let dir = TempDir::new().unwrap();
    let ctx = registered(dir.path(), "alice");
    for content in ["a", "b", "c"] {
        ctx.execute(&add(content, None, &[])).unwrap();
    }

    let output = ctx
        .execute(&note(NoteCommands::Delete {
            number: 2,
            key: None,
            force: true,
        }))
        .unwrap();
    assert_eq!(output, "Note #2 deleted");

    let listed = list_json(&ctx);
    assert_eq!(listed["total"], 2);
    assert_eq!(listed["notes"][1]["number"], 2);
    assert_eq!(listed["notes"][1]["content"], "c");
}

#[test]
fn delete_locked_note_with_wrong_key_keeps_it() {
    let dir = TempDir::new().unwrap();
    let ctx = registered(dir.path(), "alice");
    ctx.execute(&add("secret", Some("k1"), &[])).unwrap();

    let err = ctx
        .execute(&note(NoteCommands::Delete {
            number: 1,
            key: Some("bad".to_string()),
            force: true,
        }))
        .unwrap_err();
    assert!(matches!(err, ApiError::Notes(NoteError::WrongKey)));
    assert_eq!(list_json(&ctx)["total"], 1);
}

#[test]
fn favorites_and_tags() {
    let dir = TempDir::new().unwrap();
    let ctx = registered(dir.path(), "alice");
    ctx.execute(&add("one", None, &["Work"])).unwrap();
    ctx.execute(&add("two", Some("k"), &["work"])).unwrap();

    assert_eq!(
        ctx.execute(&note(NoteCommands::Favorite { number: 2 })).unwrap(),
        "Note #2 marked as favorite"
    );

    let favorites = ctx
        .execute(&note(NoteCommands::Favorites {
            format: "json".to_string(),
        }))
        .unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&favorites).unwrap();
    assert_eq!(parsed["total"], 1);
    assert_eq!(parsed["notes"][0]["number"], 2);

    let tagged = ctx
        .execute(&note(NoteCommands::Tagged {
            tag: "work".to_string(),
            format: "json".to_string(),
        }))
        .unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&tagged).unwrap();
    assert_eq!(parsed["total"], 1);
    assert_eq!(parsed["notes"][0]["content"], "one");

    assert_eq!(
        ctx.execute(&note(NoteCommands::Favorite { number: 2 })).unwrap(),
        "Note #2 removed from favorites"
    );
}

#[test]
fn export_then_import_into_another_account() {
    let dir = TempDir::new().unwrap();
    let alice = registered(dir.path(), "alice");
    alice
        .execute(&add("Meeting notes", None, &["work"]))
        .unwrap();
    alice.execute(&add("Diary", Some("k1"), &[])).unwrap();

    let file = dir.path().join("export.json");
    let output = alice
        .execute(&note(NoteCommands::Export {
            file: Some(file.clone()),
            include_locked: false,
        }))
        .unwrap();
    assert!(output.starts_with("Exported 1 note(s)"));

    let exported: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&file).unwrap()).unwrap();
    assert_eq!(exported[0]["content"], "Meeting notes");
    assert_eq!(exported[0]["tags"][0], "work");

    let bob = registered(dir.path(), "bob");
    assert_eq!(
        bob.execute(&note(NoteCommands::Import { file })).unwrap(),
        "Imported 1 note(s)"
    );
    let listed = list_json(&bob);
    assert_eq!(listed["notes"][0]["content"], "Meeting notes");
    assert_eq!(listed["notes"][0]["locked"], false);
}

#[test]
fn import_reports_skipped_records() {
    let dir = TempDir::new().unwrap();
    let ctx = registered(dir.path(), "alice");
    let file = dir.path().join("in.json");
    std::fs::write(
        &file,
        r#"[{"content": "kept", "tags": ["x"]}, {"content": ""}, {"tags": ["y"]}]"#,
    )
    .unwrap();

    let output = ctx.execute(&note(NoteCommands::Import { file })).unwrap();
    assert_eq!(output, "Imported 1 note(s) (2 skipped without content)");
}

#[test]
fn import_of_malformed_file_adds_nothing() {
    let dir = TempDir::new().unwrap();
    let ctx = registered(dir.path(), "alice");
    let file = dir.path().join("bad.json");
    std::fs::write(&file, r#"{"content": "not an array"}"#).unwrap();

    let err = ctx.execute(&note(NoteCommands::Import { file })).unwrap_err();
    assert!(matches!(err, ApiError::Notes(NoteError::Format(_))));
    assert_eq!(list_json(&ctx)["total"], 0);
}

#[test]
fn export_with_nothing_eligible_fails() {
    let dir = TempDir::new().unwrap();
    let ctx = registered(dir.path(), "alice");
    ctx.execute(&add("locked", Some("k"), &[])).unwrap();

    let err = ctx
        .execute(&note(NoteCommands::Export {
            file: Some(dir.path().join("out.json")),
            include_locked: false,
        }))
        .unwrap_err();
    assert!(matches!(err, ApiError::Notes(NoteError::NothingToExport)));
}

#[test]
fn notes_are_isolated_per_user() {
    let dir = TempDir::new().unwrap();
    let alice = registered(dir.path(), "alice");
    let bob = registered(dir.path(), "bob");
    alice.execute(&add("alice only", None, &[])).unwrap();

    assert_eq!(list_json(&alice)["total"], 1);
    assert_eq!(list_json(&bob)["total"], 0);
}

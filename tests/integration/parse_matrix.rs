use clap::{CommandFactory, Parser};
use shadow_notes::tooling::cli::{Cli, Commands, NoteCommands};

#[test]
fn parse_valid_command_matrix() {
    let cases: Vec<Vec<&str>> = vec![
        vec!["shadow-notes", "register", "alice"],
        vec!["shadow-notes", "--user", "alice", "--password", "pw1234", "login"],
        vec!["shadow-notes", "note", "add", "hello", "--tag", "a", "--tag", "b"],
        vec!["shadow-notes", "note", "add", "secret", "--lock-key", "k1"],
        vec!["shadow-notes", "note", "list", "--hide-locked", "--format", "json"],
        vec!["shadow-notes", "note", "view", "1", "--key", "k1"],
        vec!["shadow-notes", "note", "edit", "2", "--content", "new", "--new-lock", "k2"],
        vec!["shadow-notes", "note", "edit", "2", "--remove-lock", "--clear-tags"],
        vec!["shadow-notes", "note", "delete", "3", "--force"],
        vec!["shadow-notes", "note", "search", "python", "--tags"],
        vec!["shadow-notes", "note", "tagged", "work", "--format", "json"],
        vec!["shadow-notes", "note", "favorite", "1"],
        vec!["shadow-notes", "note", "favorites"],
        vec!["shadow-notes", "note", "stats", "--format", "json"],
        vec!["shadow-notes", "note", "export", "out.json", "--include-locked"],
        vec!["shadow-notes", "note", "export"],
        vec!["shadow-notes", "note", "import", "in.json"],
        vec!["shadow-notes", "account", "info", "--format", "json"],
        vec!["shadow-notes", "account", "profile", "--email", "a@b.c"],
        vec!["shadow-notes", "account", "password", "--new-password", "longer1"],
        vec!["shadow-notes", "account", "delete", "--force"],
        vec!["shadow-notes", "backup", "--dir", "/tmp/b"],
        vec!["shadow-notes", "note", "list", "--data-dir", "/tmp/d", "--log-level", "debug"],
    ];

    for args in cases {
        let parsed = Cli::try_parse_from(args.clone());
        assert!(parsed.is_ok(), "expected valid parse for args: {args:?}");
    }
}

#[test]
fn parse_rejects_note_number_zero() {
    for sub in ["view", "delete", "favorite"] {
        let parsed = Cli::try_parse_from(["shadow-notes", "note", sub, "0"]);
        assert!(parsed.is_err(), "expected {sub} 0 to be rejected");
    }
}

#[test]
fn parse_rejects_conflicting_edit_flags() {
    let lock_conflict = Cli::try_parse_from([
        "shadow-notes",
        "note",
        "edit",
        "1",
        "--new-lock",
        "k",
        "--remove-lock",
    ]);
    assert!(lock_conflict.is_err());

    let tag_conflict = Cli::try_parse_from([
        "shadow-notes",
        "note",
        "edit",
        "1",
        "--tag",
        "a",
        "--clear-tags",
    ]);
    assert!(tag_conflict.is_err());
}

#[test]
fn parse_requires_note_content() {
    assert!(Cli::try_parse_from(["shadow-notes", "note", "add"]).is_err());
}

#[test]
fn parse_maps_one_based_numbers_and_repeated_tags() {
    let cli = Cli::try_parse_from([
        "shadow-notes",
        "note",
        "edit",
        "4",
        "--tag",
        "x",
        "--tag",
        "y",
    ])
    .unwrap();
    match cli.command {
        Commands::Note {
            command: NoteCommands::Edit { number, tags, .. },
        } => {
            assert_eq!(number, 4);
            assert_eq!(tags, vec!["x".to_string(), "y".to_string()]);
        }
        _ => panic!("expected note edit"),
    }
}

#[test]
fn top_level_help_lists_commands() {
    let mut command = Cli::command();
    let mut output = Vec::new();
    command.write_long_help(&mut output).unwrap();
    let output = String::from_utf8(output).unwrap();
    for token in ["register", "login", "note", "account", "backup", "--data-dir"] {
        assert!(output.contains(token), "help is missing {token}");
    }
}

#[test]
fn cli_definition_is_consistent() {
    Cli::command().debug_assert();
}

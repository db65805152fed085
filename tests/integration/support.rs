use shadow_notes::config::NotesConfig;
use shadow_notes::tooling::cli::{CliContext, Commands, NoteCommands};
use std::path::Path;

pub const PASSWORD: &str = "hunter22";

/// Non-interactive context over `dir` with default configuration
pub fn context(dir: &Path) -> CliContext {
    context_with(dir, NotesConfig::default())
}

pub fn context_with(dir: &Path, config: NotesConfig) -> CliContext {
    CliContext::from_config(config, Some(dir.to_path_buf())).unwrap()
}

/// Register `username` and return a context signed in as them
pub fn registered(dir: &Path, username: &str) -> CliContext {
    context(dir)
        .with_credentials(None, Some(PASSWORD.to_string()))
        .execute(&Commands::Register {
            username: username.to_string(),
        })
        .unwrap();
    signed_in(dir, username)
}

pub fn signed_in(dir: &Path, username: &str) -> CliContext {
    context(dir).with_credentials(Some(username.to_string()), Some(PASSWORD.to_string()))
}

pub fn note(command: NoteCommands) -> Commands {
    Commands::Note { command }
}

pub fn add(content: &str, lock_key: Option<&str>, tags: &[&str]) -> Commands {
    note(NoteCommands::Add {
        content: content.to_string(),
        lock_key: lock_key.map(str::to_string),
        tags: tags.iter().map(|t| t.to_string()).collect(),
    })
}

pub fn list_json(ctx: &CliContext) -> serde_json::Value {
    let output = ctx
        .execute(&note(NoteCommands::List {
            hide_locked: false,
            format: "json".to_string(),
        }))
        .unwrap();
    serde_json::from_str(&output).unwrap()
}

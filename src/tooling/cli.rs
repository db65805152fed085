//! CLI Tooling
//!
//! Command-line interface over the account and note repositories. Every
//! command returns its output as a string so it can be driven from tests.
//! Note numbers on the command line are 1-based.

use crate::account::{canonical_username, UserRecord, UserRepository};
use crate::config::{ConfigLoader, NotesConfig, StoragePaths};
use crate::error::{AccountError, ApiError, NoteError};
use crate::notes::{sanitize_filename, Note, NoteEdit, NoteRepository, NoteStatistics};
use crate::store::JsonFileStore;
use clap::{Parser, Subcommand};
use comfy_table::presets::UTF8_FULL;
use comfy_table::Table;
use owo_colors::OwoColorize;
use serde_json::json;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;
use tracing::{info, warn};

/// Preview shown in place of a locked note's content
pub const LOCKED_PREVIEW: &str = "[Locked note]";

/// Shadow Notes - personal notes with per-note lock keys
#[derive(Parser)]
#[command(name = "shadow-notes")]
#[command(about = "Personal notes with optional per-note lock keys")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Directory holding users.json and notes.json
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Configuration file path (overrides default config loading)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Account to act as
    #[arg(long, env = "SHADOW_USER", global = true)]
    pub user: Option<String>,

    /// Account password (prompted for when omitted on a terminal)
    #[arg(long, env = "SHADOW_PASSWORD", hide_env_values = true, global = true)]
    pub password: Option<String>,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long, global = true)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file, file+stderr, both)
    #[arg(long, global = true)]
    pub log_output: Option<String>,

    /// Log file path (if output includes "file")
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create an account
    Register {
        /// Username (letters, digits, underscore)
        username: String,
    },
    /// Sign in and record the login
    Login,
    /// Manage notes
    Note {
        #[command(subcommand)]
        command: NoteCommands,
    },
    /// Manage the signed-in account
    Account {
        #[command(subcommand)]
        command: AccountCommands,
    },
    /// Copy the users and notes documents into the backup directory
    Backup {
        /// Backup directory (default: <data-dir>/backups)
        #[arg(long)]
        dir: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
pub enum NoteCommands {
    /// Add a note
    Add {
        /// Note text
        content: String,
        /// Protect the note with a key
        #[arg(long)]
        lock_key: Option<String>,
        /// Tag to attach (repeatable)
        #[arg(long = "tag")]
        tags: Vec<String>,
    },
    /// List notes
    List {
        /// Leave locked notes out of the listing
        #[arg(long)]
        hide_locked: bool,
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Show a note's content
    View {
        /// Note number
        #[arg(value_parser = clap::value_parser!(u64).range(1..))]
        number: u64,
        /// Lock key for a locked note
        #[arg(long)]
        key: Option<String>,
    },
    /// Change a note's content, lock, or tags
    Edit {
        /// Note number
        #[arg(value_parser = clap::value_parser!(u64).range(1..))]
        number: u64,
        /// Replacement content
        #[arg(long)]
        content: Option<String>,
        /// Lock the note with a new key
        #[arg(long, conflicts_with = "remove_lock")]
        new_lock: Option<String>,
        /// Remove the note's lock
        #[arg(long)]
        remove_lock: bool,
        /// Replacement tag (repeatable)
        #[arg(long = "tag", conflicts_with = "clear_tags")]
        tags: Vec<String>,
        /// Remove all tags
        #[arg(long)]
        clear_tags: bool,
        /// Current lock key for a locked note
        #[arg(long)]
        key: Option<String>,
    },
    /// Delete a note
    Delete {
        /// Note number
        #[arg(value_parser = clap::value_parser!(u64).range(1..))]
        number: u64,
        /// Lock key for a locked note
        #[arg(long)]
        key: Option<String>,
        /// Skip confirmation
        #[arg(long)]
        force: bool,
    },
    /// Search unlocked notes by keyword
    Search {
        keyword: String,
        /// Also match tags
        #[arg(long)]
        tags: bool,
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// List unlocked notes carrying a tag
    Tagged {
        tag: String,
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Toggle a note's favorite flag
    Favorite {
        /// Note number
        #[arg(value_parser = clap::value_parser!(u64).range(1..))]
        number: u64,
    },
    /// List favorite notes
    Favorites {
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Show note counts
    Stats {
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Export notes to a JSON file
    Export {
        /// Destination (default: <user>_notes_export.json)
        file: Option<PathBuf>,
        /// Also export locked notes, in the clear
        #[arg(long)]
        include_locked: bool,
    },
    /// Import notes from a JSON file
    Import {
        file: PathBuf,
    },
}

#[derive(Subcommand)]
pub enum AccountCommands {
    /// Show account details
    Info {
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Update profile fields
    Profile {
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        bio: Option<String>,
    },
    /// Change the account password
    Password {
        /// New password (prompted for when omitted on a terminal)
        #[arg(long)]
        new_password: Option<String>,
    },
    /// Delete the account and all of its notes
    Delete {
        /// Skip confirmation
        #[arg(long)]
        force: bool,
    },
}

/// Credentials that passed verification
struct Session {
    username: String,
    password: String,
}

/// CLI context for executing commands
pub struct CliContext {
    config: NotesConfig,
    paths: StoragePaths,
    users_store: Arc<JsonFileStore<UserRecord>>,
    notes_store: Arc<JsonFileStore<Vec<Note>>>,
    users: UserRepository,
    notes: NoteRepository,
    user: Option<String>,
    password: Option<String>,
    interactive: bool,
}

impl CliContext {
    /// Load configuration and open the stores
    pub fn new(data_dir: Option<PathBuf>, config_path: Option<PathBuf>) -> Result<Self, ApiError> {
        let config = ConfigLoader::load(config_path.as_deref())?;
        Self::from_config(config, data_dir)
    }

    /// Open the stores described by an already loaded configuration
    pub fn from_config(config: NotesConfig, data_dir: Option<PathBuf>) -> Result<Self, ApiError> {
        let paths = config.storage.resolve_paths(data_dir)?;
        std::fs::create_dir_all(&paths.data_dir).map_err(|e| {
            ApiError::ConfigError(format!(
                "Failed to create data directory {}: {}",
                paths.data_dir.display(),
                e
            ))
        })?;

        let users_store: Arc<JsonFileStore<UserRecord>> =
            Arc::new(JsonFileStore::new(&paths.users_file));
        let notes_store: Arc<JsonFileStore<Vec<Note>>> =
            Arc::new(JsonFileStore::new(&paths.notes_file));
        let users = UserRepository::new(users_store.clone(), config.accounts);
        let notes = NoteRepository::new(notes_store.clone());

        info!(data_dir = %paths.data_dir.display(), "stores opened");
        Ok(Self {
            config,
            paths,
            users_store,
            notes_store,
            users,
            notes,
            user: None,
            password: None,
            interactive: false,
        })
    }

    /// Credentials from flags or environment
    pub fn with_credentials(mut self, user: Option<String>, password: Option<String>) -> Self {
        self.user = user;
        self.password = password;
        self
    }

    /// Allow prompting on the terminal for missing input
    pub fn with_interactive(mut self, interactive: bool) -> Self {
        self.interactive = interactive;
        self
    }

    pub fn paths(&self) -> &StoragePaths {
        &self.paths
    }

    pub fn notes(&self) -> &NoteRepository {
        &self.notes
    }

    pub fn users(&self) -> &UserRepository {
        &self.users
    }

    /// Execute a command
    pub fn execute(&self, command: &Commands) -> Result<String, ApiError> {
        let started = Instant::now();
        let name = command_name(command);
        let result = match command {
            Commands::Register { username } => self.handle_register(username),
            Commands::Login => self.handle_login(),
            Commands::Note { command } => self.handle_note_command(command),
            Commands::Account { command } => self.handle_account_command(command),
            Commands::Backup { dir } => self.handle_backup(dir.clone()),
        };
        let duration_ms = started.elapsed().as_millis() as u64;
        match &result {
            Ok(_) => info!(command = %name, duration_ms, "command completed"),
            Err(e) => warn!(command = %name, duration_ms, error = %e, "command failed"),
        }
        result
    }

    fn handle_register(&self, username: &str) -> Result<String, ApiError> {
        let password = match &self.password {
            Some(p) => p.clone(),
            None if self.interactive => prompt_new_password("Password")?,
            None => return Err(missing_input("Password", "--password or SHADOW_PASSWORD")),
        };
        let name = self.users.register(username, &password)?;
        Ok(format!("Account '{}' created. Sign in with --user {}", name, name))
    }

    fn handle_login(&self) -> Result<String, ApiError> {
        let username = self.username()?;
        let password = self.account_password()?;
        let name = self.users.login(&username, &password)?;
        let stats = self.users.stats(&name)?;
        let total = self.notes.statistics(&name).total;
        Ok(format!(
            "Welcome, {}! Login #{}; you have {} note(s).",
            name, stats.login_count, total
        ))
    }

    fn handle_note_command(&self, command: &NoteCommands) -> Result<String, ApiError> {
        let session = self.authenticate()?;
        let user = session.username.as_str();
        match command {
            NoteCommands::Add {
                content,
                lock_key,
                tags,
            } => {
                let added = self
                    .notes
                    .add(user, content, lock_key.as_deref(), tags.clone())?;
                let locked = lock_key.as_deref().is_some_and(|k| !k.is_empty());
                Ok(format!(
                    "Note #{} added{}",
                    added.index + 1,
                    if locked { " (locked)" } else { "" }
                ))
            }
            NoteCommands::List {
                hide_locked,
                format,
            } => {
                let rows: Vec<(usize, Note)> = self
                    .notes
                    .list(user, true)
                    .into_iter()
                    .enumerate()
                    .filter(|(_, note)| !(*hide_locked && note.is_locked()))
                    .collect();
                match format.as_str() {
                    "json" => Ok(format_note_rows_json(&rows)),
                    "text" | _ => {
                        if rows.is_empty() {
                            return Ok("No notes yet.".to_string());
                        }
                        Ok(format!(
                            "{}\n\nTotal: {} note(s)",
                            format_note_rows_text(&rows, self.config.display.preview_length),
                            rows.len()
                        ))
                    }
                }
            }
            NoteCommands::View { number, key } => self.handle_note_view(user, *number, key.as_deref()),
            NoteCommands::Edit {
                number,
                content,
                new_lock,
                remove_lock,
                tags,
                clear_tags,
                key,
            } => {
                let edit = NoteEdit {
                    new_content: content.clone(),
                    new_lock: if *remove_lock {
                        Some(String::new())
                    } else {
                        new_lock.clone()
                    },
                    tags: if *clear_tags {
                        Some(Vec::new())
                    } else if tags.is_empty() {
                        None
                    } else {
                        Some(tags.clone())
                    },
                };
                if edit.is_empty() {
                    return Ok("Nothing to change.".to_string());
                }
                let index = index_of(*number);
                let updated = self.with_key(key.as_deref(), |k| {
                    self.notes.edit(user, index, edit.clone(), k)
                })?;
                Ok(format!(
                    "Note #{} updated{}",
                    number,
                    if updated.is_locked() { " (locked)" } else { "" }
                ))
            }
            NoteCommands::Delete { number, key, force } => {
                if !*force {
                    if !self.interactive {
                        return Err(ApiError::Cancelled(
                            "Refusing to delete without confirmation; pass --force".to_string(),
                        ));
                    }
                    if !confirm(&format!("Delete note #{}?", number))? {
                        return Ok("Deletion cancelled".to_string());
                    }
                }
                let index = index_of(*number);
                self.with_key(key.as_deref(), |k| self.notes.delete(user, index, k))?;
                Ok(format!("Note #{} deleted", number))
            }
            NoteCommands::Search {
                keyword,
                tags,
                format,
            } => {
                let found = self.notes.search(user, keyword, *tags);
                let total = found.len();
                let shown: Vec<(usize, Note)> = found
                    .into_iter()
                    .take(self.config.display.max_search_results)
                    .collect();
                match format.as_str() {
                    "json" => {
                        let results: Vec<_> = shown.iter().map(|(i, n)| note_json(*i, n)).collect();
                        let out = json!({
                            "keyword": keyword,
                            "total": total,
                            "results": results,
                        });
                        Ok(serde_json::to_string_pretty(&out).unwrap_or_else(|_| "{}".to_string()))
                    }
                    "text" | _ => {
                        if total == 0 {
                            return Ok(format!("No notes match '{}'", keyword));
                        }
                        let mut output = format!("Found {} note(s) matching '{}'", total, keyword);
                        if shown.len() < total {
                            output.push_str(&format!(" (showing first {})", shown.len()));
                        }
                        output.push_str("\n\n");
                        output.push_str(&format_note_rows_text(
                            &shown,
                            self.config.display.preview_length,
                        ));
                        Ok(output)
                    }
                }
            }
            NoteCommands::Tagged { tag, format } => {
                let rows = self.notes.by_tag(user, tag);
                self.format_rows(&rows, format, &format!("No notes tagged '{}'", tag))
            }
            NoteCommands::Favorite { number } => {
                let favorite = self.notes.toggle_favorite(user, index_of(*number))?;
                Ok(if favorite {
                    format!("Note #{} marked as favorite", number)
                } else {
                    format!("Note #{} removed from favorites", number)
                })
            }
            NoteCommands::Favorites { format } => {
                let rows = self.notes.favorites(user);
                self.format_rows(&rows, format, "No favorite notes")
            }
            NoteCommands::Stats { format } => {
                let stats = self.notes.statistics(user);
                match format.as_str() {
                    "json" => Ok(serde_json::to_string_pretty(&stats)
                        .unwrap_or_else(|_| "{}".to_string())),
                    "text" | _ => Ok(format_statistics_text(&stats)),
                }
            }
            NoteCommands::Export {
                file,
                include_locked,
            } => {
                let destination = file.clone().unwrap_or_else(|| {
                    PathBuf::from(sanitize_filename(&format!("{}_notes_export.json", user)))
                });
                let count = self.notes.export(user, &destination, *include_locked)?;
                let mut output = format!(
                    "Exported {} note(s) to {}",
                    count,
                    destination.display()
                );
                if *include_locked {
                    output.push_str("\nWarning: locked notes were written in the clear");
                }
                Ok(output)
            }
            NoteCommands::Import { file } => {
                let summary = self.notes.import(user, file)?;
                let mut output = format!("Imported {} note(s)", summary.imported);
                if summary.skipped > 0 {
                    output.push_str(&format!(" ({} skipped without content)", summary.skipped));
                }
                Ok(output)
            }
        }
    }

    fn handle_note_view(&self, user: &str, number: u64, key: Option<&str>) -> Result<String, ApiError> {
        let index = index_of(number);
        let content = self.with_key(key, |k| self.notes.view(user, index, k))?;
        let note = self.notes.get_by_index(user, index)?;
        let mut output = format!("Note #{}", number);
        if note.is_locked() {
            output.push_str(" (locked)");
        }
        if note.favorite {
            output.push_str(" *");
        }
        output.push_str(&format!(
            "\nCreated: {}\nUpdated: {}\n",
            note.created_at, note.updated_at
        ));
        if !note.tags.is_empty() {
            output.push_str(&format!("Tags: {}\n", note.tags.join(", ")));
        }
        output.push('\n');
        output.push_str(&content);
        Ok(output)
    }

    fn handle_account_command(&self, command: &AccountCommands) -> Result<String, ApiError> {
        let session = self.authenticate()?;
        let user = session.username.as_str();
        match command {
            AccountCommands::Info { format } => {
                let stats = self.users.stats(user)?;
                let notes = self.notes.statistics(user);
                match format.as_str() {
                    "json" => {
                        let out = json!({ "account": stats, "notes": notes });
                        Ok(serde_json::to_string_pretty(&out).unwrap_or_else(|_| "{}".to_string()))
                    }
                    "text" | _ => {
                        let mut output = format!("{}\n", "Account".bold().underline());
                        output.push_str(&format!("  Username: {}\n", stats.username));
                        output.push_str(&format!("  Created: {}\n", stats.created_at));
                        output.push_str(&format!(
                            "  Last login: {}\n",
                            stats.last_login.as_deref().unwrap_or("never")
                        ));
                        output.push_str(&format!("  Logins: {}\n", stats.login_count));
                        output.push_str(&format!(
                            "  Email: {}\n",
                            stats.email.as_deref().unwrap_or("-")
                        ));
                        output.push_str(&format!("  Bio: {}\n\n", stats.bio.as_deref().unwrap_or("-")));
                        output.push_str(&format_statistics_text(&notes));
                        Ok(output)
                    }
                }
            }
            AccountCommands::Profile { email, bio } => {
                if email.is_none() && bio.is_none() {
                    return Ok("Nothing to change.".to_string());
                }
                self.users.update_profile(user, email.clone(), bio.clone())?;
                Ok("Profile updated".to_string())
            }
            AccountCommands::Password { new_password } => {
                let new_password = match new_password {
                    Some(p) => p.clone(),
                    None if self.interactive => prompt_new_password("New password")?,
                    None => return Err(missing_input("New password", "--new-password")),
                };
                self.users
                    .change_password(user, &session.password, &new_password)?;
                Ok("Password changed".to_string())
            }
            AccountCommands::Delete { force } => {
                if !*force {
                    if !self.interactive {
                        return Err(ApiError::Cancelled(
                            "Refusing to delete the account without confirmation; pass --force"
                                .to_string(),
                        ));
                    }
                    if !confirm(&format!("Delete account '{}' and all of its notes?", user))? {
                        return Ok("Account deletion cancelled".to_string());
                    }
                }
                // Notes go first so a failed clear never leaves them behind
                // for whoever registers this name next
                let removed = self.notes.clear(user)?;
                self.users.delete(user, &session.password)?;
                Ok(format!(
                    "Account '{}' deleted ({} note(s) removed)",
                    user, removed
                ))
            }
        }
    }

    fn handle_backup(&self, dir: Option<PathBuf>) -> Result<String, ApiError> {
        let backup_dir = dir.unwrap_or_else(|| self.paths.backup_dir.clone());
        let written: Vec<PathBuf> = [
            self.users_store.backup(&backup_dir)?,
            self.notes_store.backup(&backup_dir)?,
        ]
        .into_iter()
        .flatten()
        .collect();
        if written.is_empty() {
            return Ok("Nothing to back up yet.".to_string());
        }
        let mut output = String::from("Backup created:\n");
        for path in &written {
            output.push_str(&format!("  {}\n", path.display()));
        }
        Ok(output)
    }

    /// Verify the configured credentials, prompting for missing ones
    fn authenticate(&self) -> Result<Session, ApiError> {
        let username = self.username()?;
        let password = self.account_password()?;
        if self.users.verify_password(&username, &password) {
            return Ok(Session {
                username: canonical_username(&username),
                password,
            });
        }
        if self.users.username_exists(&username) {
            Err(AccountError::WrongPassword.into())
        } else {
            Err(AccountError::UnknownUser.into())
        }
    }

    fn username(&self) -> Result<String, ApiError> {
        match &self.user {
            Some(u) => Ok(u.clone()),
            None if self.interactive => dialoguer::Input::<String>::new()
                .with_prompt("Username")
                .interact_text()
                .map_err(input_error),
            None => Err(missing_input("Username", "--user or SHADOW_USER")),
        }
    }

    fn account_password(&self) -> Result<String, ApiError> {
        match &self.password {
            Some(p) => Ok(p.clone()),
            None if self.interactive => prompt_secret("Password"),
            None => Err(missing_input("Password", "--password or SHADOW_PASSWORD")),
        }
    }

    /// Run a lock-gated operation, asking for the key once if it was missing
    fn with_key<R, F>(&self, key: Option<&str>, op: F) -> Result<R, ApiError>
    where
        F: Fn(Option<&str>) -> Result<R, NoteError>,
    {
        match op(key) {
            Err(NoteError::KeyRequired) if key.is_none() && self.interactive => {
                let entered = prompt_secret("Lock key")?;
                Ok(op(Some(&entered))?)
            }
            other => Ok(other?),
        }
    }

    fn format_rows(
        &self,
        rows: &[(usize, Note)],
        format: &str,
        empty_message: &str,
    ) -> Result<String, ApiError> {
        match format {
            "json" => Ok(format_note_rows_json(rows)),
            "text" | _ => {
                if rows.is_empty() {
                    return Ok(empty_message.to_string());
                }
                Ok(format_note_rows_text(rows, self.config.display.preview_length))
            }
        }
    }
}

/// 1-based note number to repository index
fn index_of(number: u64) -> usize {
    number.saturating_sub(1) as usize
}

fn input_error(e: dialoguer::Error) -> ApiError {
    ApiError::ConfigError(format!("Failed to get user input: {}", e))
}

fn missing_input(what: &str, hint: &str) -> ApiError {
    ApiError::ConfigError(format!("{} required: pass {}", what, hint))
}

fn prompt_secret(prompt: &str) -> Result<String, ApiError> {
    dialoguer::Password::new()
        .with_prompt(prompt)
        .interact()
        .map_err(input_error)
}

fn prompt_new_password(prompt: &str) -> Result<String, ApiError> {
    dialoguer::Password::new()
        .with_prompt(prompt)
        .with_confirmation("Repeat password", "Passwords do not match")
        .interact()
        .map_err(input_error)
}

fn confirm(prompt: &str) -> Result<bool, ApiError> {
    dialoguer::Confirm::new()
        .with_prompt(prompt)
        .default(false)
        .interact()
        .map_err(input_error)
}

/// Single-line preview of a note, at most `max_chars` characters plus an ellipsis
fn preview(note: &Note, max_chars: usize) -> String {
    if note.is_locked() {
        return LOCKED_PREVIEW.to_string();
    }
    let flat = note.content().split_whitespace().collect::<Vec<_>>().join(" ");
    if flat.chars().count() > max_chars {
        let cut: String = flat.chars().take(max_chars).collect();
        format!("{}...", cut)
    } else {
        flat
    }
}

/// Format (index, note) rows as a table
fn format_note_rows_text(rows: &[(usize, Note)], preview_length: usize) -> String {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["#", "Note", "Tags", "Fav", "Updated"]);
    for (index, note) in rows {
        table.add_row(vec![
            (index + 1).to_string(),
            preview(note, preview_length),
            note.tags.join(", "),
            if note.favorite { "*" } else { "" }.to_string(),
            note.updated_at.clone(),
        ]);
    }
    table.to_string()
}

/// Format (index, note) rows as JSON; locked notes carry no content
fn format_note_rows_json(rows: &[(usize, Note)]) -> String {
    let notes: Vec<_> = rows.iter().map(|(i, n)| note_json(*i, n)).collect();
    let out = json!({ "notes": notes, "total": rows.len() });
    serde_json::to_string_pretty(&out).unwrap_or_else(|_| "{}".to_string())
}

fn note_json(index: usize, note: &Note) -> serde_json::Value {
    let content = (!note.is_locked()).then(|| note.content());
    json!({
        "number": index + 1,
        "id": note.id,
        "locked": note.is_locked(),
        "favorite": note.favorite,
        "tags": note.tags,
        "created_at": note.created_at,
        "updated_at": note.updated_at,
        "content": content,
    })
}

fn format_statistics_text(stats: &NoteStatistics) -> String {
    let mut output = format!("{}\n", "Notes".bold().underline());
    output.push_str(&format!("  Total: {}\n", stats.total));
    output.push_str(&format!("  Locked: {}\n", stats.locked));
    output.push_str(&format!("  Unlocked: {}\n", stats.unlocked));
    output.push_str(&format!("  Favorites: {}\n", stats.favorites));
    output.push_str(&format!("  Unique tags: {}", stats.unique_tags));
    output
}

fn command_name(command: &Commands) -> String {
    match command {
        Commands::Register { .. } => "register".to_string(),
        Commands::Login => "login".to_string(),
        Commands::Note { command } => format!("note.{}", note_command_name(command)),
        Commands::Account { command } => format!("account.{}", account_command_name(command)),
        Commands::Backup { .. } => "backup".to_string(),
    }
}

fn note_command_name(command: &NoteCommands) -> &'static str {
    match command {
        NoteCommands::Add { .. } => "add",
        NoteCommands::List { .. } => "list",
        NoteCommands::View { .. } => "view",
        NoteCommands::Edit { .. } => "edit",
        NoteCommands::Delete { .. } => "delete",
        NoteCommands::Search { .. } => "search",
        NoteCommands::Tagged { .. } => "tagged",
        NoteCommands::Favorite { .. } => "favorite",
        NoteCommands::Favorites { .. } => "favorites",
        NoteCommands::Stats { .. } => "stats",
        NoteCommands::Export { .. } => "export",
        NoteCommands::Import { .. } => "import",
    }
}

fn account_command_name(command: &AccountCommands) -> &'static str {
    match command {
        AccountCommands::Info { .. } => "info",
        AccountCommands::Profile { .. } => "profile",
        AccountCommands::Password { .. } => "password",
        AccountCommands::Delete { .. } => "delete",
    }
}

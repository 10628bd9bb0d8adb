//! Command registry and dispatch system
//!
//! This module provides a static registry of commands that can be called from Lua.
//! Commands are registered as "prompts.action" (e.g., "prompts.list", "prompts.submit")
//! and dispatched to handler functions together with the plugin's [`App`].
//!
//! ## Adding a new command
//!
//! 1. Create handler function: `fn my_command(app: &mut App, args: Value) -> Result<Value>`
//! 2. Register in `REGISTRY`: `("prompts.action", my_command as CommandHandler)`
//! 3. Add tests for the command

use std::collections::HashMap;
use std::path::PathBuf;

use once_cell::sync::Lazy;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::app::{App, SubmitOutcome};
use crate::errors::{PromptError, Result};
use crate::filter::Query;
use crate::form::FormFields;
use crate::prompt::Category;
use crate::runtime;

/// Type alias for command handler functions
pub type CommandHandler = fn(&mut App, Value) -> Result<Value>;

/// Static command registry
///
/// Maps command names to handler functions. Initialized lazily on first access.
static REGISTRY: Lazy<HashMap<&'static str, CommandHandler>> = Lazy::new(|| {
    let mut map = HashMap::new();

    map.insert("prompts.list", list as CommandHandler);
    map.insert("prompts.get", get as CommandHandler);
    map.insert("prompts.categories", categories as CommandHandler);
    map.insert("prompts.new", new as CommandHandler);
    map.insert("prompts.edit", edit as CommandHandler);
    map.insert("prompts.cancel", cancel as CommandHandler);
    map.insert("prompts.submit", submit as CommandHandler);
    map.insert("prompts.delete", delete as CommandHandler);
    map.insert("prompts.filter", filter as CommandHandler);
    map.insert("prompts.export", export as CommandHandler);
    map.insert("prompts.import", import as CommandHandler);

    map
});

/// Dispatch a command by name
///
/// Looks up the command in the registry and executes it against `app`.
///
/// # Returns
/// Command result as JSON Value, or error if command not found
pub fn dispatch(app: &mut App, command: &str, args: Value) -> Result<Value> {
    match REGISTRY.get(command) {
        Some(handler) => handler(app, args),
        None => Err(PromptError::CommandNotFound(command.to_string())),
    }
}

/// List all available commands, sorted
pub fn list_commands() -> Vec<String> {
    let mut commands: Vec<String> = REGISTRY.keys().map(|&k| k.to_string()).collect();
    commands.sort();
    commands
}

/// Deserialize command arguments, treating `null` as `{}`
fn parse_args<T: DeserializeOwned>(command: &str, args: Value) -> Result<T> {
    let args = if args.is_null() { json!({}) } else { args };
    serde_json::from_value(args).map_err(|e| PromptError::InvalidArgs {
        command: command.to_string(),
        reason:  e.to_string(),
    })
}

#[derive(Debug, Deserialize)]
struct IdArgs {
    id: String,
}

#[derive(Debug, Deserialize)]
struct FilterArgs {
    search:   Option<String>,
    category: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ExportArgs {
    dir: Option<PathBuf>,
}

#[derive(Debug, Deserialize)]
struct ImportArgs {
    path: PathBuf,
}

fn view_json(app: &App) -> Result<Value> {
    Ok(serde_json::to_value(app.view())?)
}

fn form_json(app: &App) -> Result<Value> {
    Ok(serde_json::to_value(app.form().state())?)
}

// ============================================================================
// Handlers
// ============================================================================

/// `{ view }` for the current filter
fn list(app: &mut App, _args: Value) -> Result<Value> {
    Ok(json!({ "view": view_json(app)?, "query": app.query() }))
}

fn get(app: &mut App, args: Value) -> Result<Value> {
    let IdArgs { id } = parse_args("prompts.get", args)?;
    let prompt = app.find(&id).ok_or(PromptError::NotFound(id))?;
    Ok(serde_json::to_value(prompt)?)
}

fn categories(_app: &mut App, _args: Value) -> Result<Value> {
    let names: Vec<&str> = Category::ALL.iter().map(|c| c.as_str()).collect();
    Ok(json!(names))
}

fn new(app: &mut App, _args: Value) -> Result<Value> {
    app.open_create();
    form_json(app)
}

/// Opens the form on `id`; a missing prompt leaves the form as it was
fn edit(app: &mut App, args: Value) -> Result<Value> {
    let IdArgs { id } = parse_args("prompts.edit", args)?;
    let opened = app.open_edit(&id);
    Ok(json!({ "opened": opened, "form": form_json(app)? }))
}

fn cancel(app: &mut App, _args: Value) -> Result<Value> {
    app.close_form();
    form_json(app)
}

/// Returns `{ saved, id, form, view }`
fn submit(app: &mut App, args: Value) -> Result<Value> {
    let fields: FormFields = parse_args("prompts.submit", args)?;
    let (saved, id) = match app.submit(fields) {
        SubmitOutcome::Created(id) | SubmitOutcome::Updated(id) => (true, Some(id)),
        SubmitOutcome::Rejected | SubmitOutcome::Aborted => (false, None),
    };

    Ok(json!({
        "saved": saved,
        "id": id,
        "form": form_json(app)?,
        "view": view_json(app)?,
    }))
}

fn delete(app: &mut App, args: Value) -> Result<Value> {
    let IdArgs { id } = parse_args("prompts.delete", args)?;
    let deleted = app.delete(&id);
    Ok(json!({ "deleted": deleted, "view": view_json(app)? }))
}

/// Updates whichever of `search` / `category` is given
fn filter(app: &mut App, args: Value) -> Result<Value> {
    let FilterArgs { search, category } = parse_args("prompts.filter", args)?;
    let current = app.query().clone();
    let query = Query {
        search:   search.unwrap_or(current.search),
        category: category.unwrap_or(current.category),
    };
    let view = app.set_query(query);
    Ok(json!({ "view": view, "query": app.query() }))
}

fn export(app: &mut App, args: Value) -> Result<Value> {
    let ExportArgs { dir } = parse_args("prompts.export", args)?;
    let dir = dir.unwrap_or_else(|| app.export_dir().to_path_buf());
    let path = runtime::block_on(app.export_to(&dir));
    Ok(json!({ "exported": path.is_some(), "path": path }))
}

fn import(app: &mut App, args: Value) -> Result<Value> {
    let ImportArgs { path } = parse_args("prompts.import", args)?;
    let imported = runtime::block_on(app.import_file(&path));
    Ok(json!({ "imported": imported, "view": view_json(app)? }))
}

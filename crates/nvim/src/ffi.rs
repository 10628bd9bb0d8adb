//! FFI (Foreign Function Interface) layer for Lua ↔ Rust communication
//!
//! This module provides the boundary between Lua and Rust, handling:
//! - Plugin setup and the per-instance `App`
//! - Command dispatch
//! - Error conversion to Lua-friendly formats

use std::cell::RefCell;

use nvim_oxi::serde::{Deserializer, Serializer};
use nvim_oxi::{Dictionary, Object};
use promptbook_core::errors::{PromptError, Result};
use promptbook_core::{commands, App, Config};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::logging;
use crate::ui::NvimUi;

thread_local! {
    /// Neovim calls the plugin from its main thread only
    static APP: RefCell<Option<App>> = const { RefCell::new(None) };
}

/// Called from Lua as: `promptbook.setup(opts)`
///
/// Loads (or reloads) the library with the given configuration.
pub fn setup(config: Object) -> nvim_oxi::Result<Object> {
    let value = object_to_value(config)?;

    match setup_impl(value) {
        Ok(()) => Ok(Object::from(true)),
        Err(err) => Ok(create_error_object(&err)),
    }
}

/// Main FFI entry point for command execution
///
/// Called from Lua as: `promptbook.call(command, args)`
///
/// # Arguments
/// * `command` - Command name (e.g., "prompts.list")
/// * `args` - Command arguments as a Lua table
///
/// # Returns
/// Result as a Lua table, or an error table
pub fn call(command: String, args: Object) -> nvim_oxi::Result<Object> {
    let args_value = object_to_value(args)?;

    match with_app(|app| commands::dispatch(app, &command, args_value)) {
        Ok(result) => value_to_object(result),
        Err(err) => Ok(create_error_object(&err)),
    }
}

fn setup_impl(value: Value) -> Result<()> {
    let config = Config::from_value(value)?;
    start_logging(&config);

    let app = App::from_config(&config, Box::new(NvimUi))?;
    APP.with(|cell| {
        let mut slot = cell.try_borrow_mut().map_err(|_| busy())?;
        *slot = Some(app);
        Ok(())
    })
}

/// Run `f` against the app, creating it with default settings if `setup`
/// was never called
pub(crate) fn with_app<T>(f: impl FnOnce(&mut App) -> Result<T>) -> Result<T> {
    APP.with(|cell| {
        let mut slot = cell.try_borrow_mut().map_err(|_| busy())?;
        if slot.is_none() {
            let config = Config::default();
            start_logging(&config);
            *slot = Some(App::from_config(&config, Box::new(NvimUi))?);
        }

        match slot.as_mut() {
            Some(app) => f(app),
            None => Err(PromptError::Other("Prompt library is not initialized".into())),
        }
    })
}

/// A command re-entered the plugin while another one was still running
fn busy() -> PromptError {
    PromptError::Other("Prompt library is busy".into())
}

fn start_logging(config: &Config) {
    if let Err(e) = logging::init(config) {
        eprintln!("promptbook: logging disabled: {:#}", e);
    }
}

/// Convert nvim-oxi Object to serde_json::Value
///
/// Uses nvim-oxi's Deserializer to convert Object → serde types
fn object_to_value(obj: Object) -> nvim_oxi::Result<Value> {
    let deserializer = Deserializer::new(obj);
    Value::deserialize(deserializer).map_err(nvim_oxi::Error::Deserialize)
}

/// Convert serde_json::Value to nvim-oxi Object
///
/// Uses nvim-oxi's Serializer to convert serde types → Object
fn value_to_object(value: Value) -> nvim_oxi::Result<Object> {
    value
        .serialize(Serializer::new())
        .map_err(nvim_oxi::Error::Serialize)
}

/// Create a structured error object for Lua
///
/// Returns a Dictionary with fields:
/// - `error`: true (marker that this is an error response)
/// - `message`: user-friendly error message
/// - `category`: error category for logging/handling
fn create_error_object(err: &PromptError) -> Object {
    tracing::debug!(category = err.category(), "Command failed: {}", err);

    let error_dict = Dictionary::from_iter([
        ("error", Object::from(true)),
        ("message", Object::from(err.user_message())),
        ("category", Object::from(err.category())),
    ]);
    Object::from(error_dict)
}

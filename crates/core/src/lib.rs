//! promptbook-core: a personal prompt library
//!
//! Create, edit, delete, search, import and export a collection of text
//! prompts persisted locally as a single JSON document.
//!
//! ## Architecture
//!
//! - **App**: owned state (collection, store, form, filter) plus the host UI
//! - **Store**: one JSON array under one key of a key/value backend
//! - **Commands**: "prompts.*" registry the Neovim plugin dispatches into
//! - **Ui**: notifications and confirmations, injected by the host
//!
//! Nothing in this crate talks to Neovim; see the `promptbook_nvim` crate.

pub mod app;
pub mod commands;
pub mod config;
pub mod errors;
pub mod filter;
pub mod form;
pub mod library;
pub mod notify;
pub mod prompt;
pub mod render;
pub mod runtime;
pub mod samples;
pub mod store;
pub mod transfer;
pub mod ui;

pub use app::App;
pub use config::Config;
pub use errors::{PromptError, Result};
pub use prompt::{Category, Prompt};

//! promptbook.nvim: personal prompt library for Neovim
//!
//! Thin Neovim shell around `promptbook_core`:
//! - `setup(opts)` / `call(command, args)` exported to Lua
//! - Notifications via `vim.notify`, confirmations via `confirm()`
//! - `:PromptBook` shows the list in a scratch buffer
//!
//! The library name determines the exported symbol: promptbook ->
//! luaopen_promptbook

mod ffi;
mod logging;
mod ui;
mod view;

use nvim_oxi::api::{self, opts::CreateCommandOpts, types::CommandArgs};
use nvim_oxi::{Dictionary, Function, Object};

/// Register Neovim user commands
fn register_commands() -> nvim_oxi::Result<()> {
    let opts = CreateCommandOpts::builder()
        .desc("Show the prompt library")
        .build();

    api::create_user_command("PromptBook", |_args: CommandArgs| view::open_list(), &opts)?;
    Ok(())
}

/// Plugin entry point - called when Neovim loads the plugin
#[nvim_oxi::plugin]
fn promptbook() -> nvim_oxi::Result<Dictionary> {
    register_commands()?;

    let mut exports = Dictionary::new();

    exports.insert(
        "call",
        Function::<(String, Object), Object>::from_fn(|(command, args): (String, Object)| {
            ffi::call(command, args)
        }),
    );
    exports.insert(
        "setup",
        Function::<Object, Object>::from_fn(|config| ffi::setup(config)),
    );

    Ok(exports)
}

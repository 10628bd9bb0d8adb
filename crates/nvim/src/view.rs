//! `:PromptBook` list buffer
//!
//! Dumps the current (filtered) list into a scratch buffer. Richer UIs live
//! in Lua and use `promptbook.call("prompts.list")` instead.

use nvim_oxi::api;
use promptbook_core::notify::Toast;
use promptbook_core::ui::Ui;

use crate::ffi;
use crate::ui::NvimUi;

pub fn open_list() -> nvim_oxi::Result<()> {
    let lines = match ffi::with_app(|app| Ok(app.view().to_lines())) {
        Ok(lines) => lines,
        Err(err) => {
            NvimUi.notify(Toast::error(err.user_message()));
            return Ok(());
        },
    };

    let mut buf = api::create_buf(false, true)?;
    buf.set_lines(.., false, lines)?;
    api::set_current_buf(&buf)?;
    Ok(())
}

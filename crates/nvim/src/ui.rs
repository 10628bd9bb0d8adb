//! Neovim side of the core's `Ui` capability
//!
//! Toasts go through `vim.notify` (one call per toast, with the toast's
//! lifetime as timeout for notification plugins that honour it) and
//! confirmations through the blocking `confirm()` dialog.

use nvim_oxi::api::{self, types::LogLevel};
use nvim_oxi::{Array, Dictionary, Object};
use promptbook_core::notify::{Severity, Toast};
use promptbook_core::ui::Ui;

const TITLE: &str = "PromptBook";

#[derive(Debug, Default)]
pub struct NvimUi;

impl Ui for NvimUi {
    fn notify(&mut self, toast: Toast) {
        let level = match toast.severity {
            Severity::Info | Severity::Success => LogLevel::Info,
            Severity::Error => LogLevel::Error,
        };
        let opts = Dictionary::from_iter([
            ("title", Object::from(TITLE)),
            ("timeout", Object::from(toast.lifetime().as_millis() as i64)),
        ]);

        if let Err(e) = api::notify(&toast.message, level, &opts) {
            tracing::warn!("vim.notify failed: {}", e);
        }
    }

    fn confirm(&mut self, message: &str) -> bool {
        let args = Array::from_iter([
            Object::from(message),
            Object::from("&Yes\n&No"),
            Object::from(2),
        ]);

        match api::call_function::<_, i64>("confirm", args) {
            Ok(choice) => choice == 1,
            Err(e) => {
                tracing::warn!("confirm() failed: {}", e);
                false
            },
        }
    }
}

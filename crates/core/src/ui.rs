//! The capabilities the core needs from whatever hosts it
//!
//! Neovim implements [`Ui`] with `vim.notify` and `confirm()`; tests use
//! [`RecordingUi`] or the generated `MockUi`.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

#[cfg(test)]
use mockall::automock;

use crate::notify::{Severity, Toast};

#[cfg_attr(test, automock)]
pub trait Ui {
    /// Show a transient notification
    fn notify(&mut self, toast: Toast);

    /// Ask a yes/no question and block until the user answers
    fn confirm(&mut self, message: &str) -> bool;
}

/// Headless UI that keeps every toast and answers confirmations from a script
#[derive(Debug, Default)]
pub struct RecordingUi {
    pub toasts:    Vec<Toast>,
    pub questions: Vec<String>,
    answers:       VecDeque<bool>,
    fallback:      bool,
}

impl RecordingUi {
    /// Confirmations are declined unless answers are queued
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer every confirmation with `answer`
    pub fn always(answer: bool) -> Self {
        Self {
            fallback: answer,
            ..Self::default()
        }
    }

    /// Queue answers for the next confirmations, in order
    pub fn answer(&mut self, answers: impl IntoIterator<Item = bool>) {
        self.answers.extend(answers);
    }

    pub fn last_toast(&self) -> Option<&Toast> {
        self.toasts.last()
    }

    pub fn messages(&self, severity: Severity) -> Vec<&str> {
        self.toasts
            .iter()
            .filter(|t| t.severity == severity)
            .map(|t| t.message.as_str())
            .collect()
    }
}

impl Ui for RecordingUi {
    fn notify(&mut self, toast: Toast) {
        self.toasts.push(toast);
    }

    fn confirm(&mut self, message: &str) -> bool {
        self.questions.push(message.to_string());
        self.answers.pop_front().unwrap_or(self.fallback)
    }
}

/// Shared handle, so a caller can keep inspecting a UI it handed to an App
impl<U: Ui> Ui for Rc<RefCell<U>> {
    fn notify(&mut self, toast: Toast) {
        self.borrow_mut().notify(toast);
    }

    fn confirm(&mut self, message: &str) -> bool {
        self.borrow_mut().confirm(message)
    }
}

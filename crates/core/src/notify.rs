//! Transient status messages
//!
//! A [`Toast`] is one self-contained notification. Hosts show each toast on its
//! own for [`Toast::DISPLAY`] and then fade it out over [`Toast::FADE_OUT`];
//! toasts are never merged or queued behind each other.

use std::fmt;
use std::time::Duration;

use serde::Serialize;

/// Notification severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Success,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Severity::Info => "info",
            Severity::Success => "success",
            Severity::Error => "error",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Toast {
    pub message:  String,
    pub severity: Severity,
}

impl Toast {
    pub const DISPLAY: Duration = Duration::from_millis(3000);
    pub const FADE_OUT: Duration = Duration::from_millis(300);

    pub fn new(message: impl Into<String>, severity: Severity) -> Self {
        Self {
            message: message.into(),
            severity,
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, Severity::Info)
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, Severity::Success)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, Severity::Error)
    }

    /// How long the toast stays on screen, fade included
    pub fn lifetime(&self) -> Duration {
        Self::DISPLAY + Self::FADE_OUT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors_set_severity() {
        assert_eq!(Toast::info("a").severity, Severity::Info);
        assert_eq!(Toast::success("a").severity, Severity::Success);
        assert_eq!(Toast::error("a").severity, Severity::Error);
    }

    #[test]
    fn test_lifetime_includes_fade() {
        assert_eq!(Toast::info("x").lifetime(), Duration::from_millis(3300));
    }

    #[test]
    fn test_severity_serializes_lowercase() {
        let value = serde_json::to_value(Toast::success("done")).unwrap();
        assert_eq!(value["severity"], "success");
        assert_eq!(Severity::Error.to_string(), "error");
    }
}

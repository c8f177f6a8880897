//! Configuration errors and collected diagnostics.

use super::FieldPath;
use crate::log;
use owo_colors::OwoColorize;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading `unfurls.toml`.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file `{0}` not found (searched upward from the current directory)")]
    NotFound(PathBuf),

    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("Config file parsing error")]
    Toml(#[from] toml::de::Error),

    // Display already lists every diagnostic; no source chain
    #[error("{0}")]
    Diagnostics(ConfigDiagnostics),
}

/// How a diagnostic affects loading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Fails validation.
    Error,
    /// Printed, never fatal.
    Warning,
}

/// One finding about one config field.
#[derive(Debug, Clone)]
pub struct ConfigDiagnostic {
    pub severity: Severity,
    pub field: FieldPath,
    pub message: String,
    pub hint: Option<String>,
}

impl ConfigDiagnostic {
    pub fn new(severity: Severity, field: FieldPath, message: impl Into<String>) -> Self {
        Self {
            severity,
            field,
            message: message.into(),
            hint: None,
        }
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    #[inline]
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl fmt::Display for ConfigDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.field, self.message)?;
        if let Some(hint) = &self.hint {
            write!(f, "\n  {} {}", "hint:".yellow(), hint)?;
        }
        Ok(())
    }
}

/// Diagnostics collected over a whole config, so every problem is reported
/// at once instead of stopping at the first.
#[derive(Debug, Default)]
pub struct ConfigDiagnostics {
    items: Vec<ConfigDiagnostic>,
}

impl ConfigDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, diagnostic: ConfigDiagnostic) {
        self.items.push(diagnostic);
    }

    pub fn error(&mut self, field: FieldPath, message: impl Into<String>) {
        self.push(ConfigDiagnostic::new(Severity::Error, field, message));
    }

    pub fn error_with_hint(
        &mut self,
        field: FieldPath,
        message: impl Into<String>,
        hint: impl Into<String>,
    ) {
        self.push(ConfigDiagnostic::new(Severity::Error, field, message).with_hint(hint));
    }

    pub fn warn(&mut self, field: FieldPath, message: impl Into<String>) {
        self.push(ConfigDiagnostic::new(Severity::Warning, field, message));
    }

    pub fn errors(&self) -> impl Iterator<Item = &ConfigDiagnostic> {
        self.items.iter().filter(|d| d.is_error())
    }

    pub fn warnings(&self) -> impl Iterator<Item = &ConfigDiagnostic> {
        self.items.iter().filter(|d| !d.is_error())
    }

    pub fn has_errors(&self) -> bool {
        self.items.iter().any(ConfigDiagnostic::is_error)
    }

    pub fn error_count(&self) -> usize {
        self.errors().count()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn print_warnings(&self) {
        for warning in self.warnings() {
            log!("warning"; "{}", warning);
        }
    }

    /// `Err(self)` when any error was collected; warnings alone pass.
    pub fn into_result(self) -> Result<(), Self> {
        if self.has_errors() { Err(self) } else { Ok(()) }
    }
}

impl fmt::Display for ConfigDiagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", "config validation failed:".red().bold())?;
        for err in self.errors() {
            write!(f, "\n{} {}", "→".red(), err)?;
        }

        let count = self.error_count();
        if count > 1 {
            write!(f, "\n\n{}", format!("found {count} errors").dimmed())?;
        }
        Ok(())
    }
}

impl std::error::Error for ConfigDiagnostics {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error, ErrorKind};

    const URL: FieldPath = FieldPath::new("site.url");
    const OEMBED: FieldPath = FieldPath::new("unfurls.oembed");

    #[test]
    fn test_config_error_display() {
        let io_err = ConfigError::Io(
            PathBuf::from("unfurls.toml"),
            Error::new(ErrorKind::NotFound, "file not found"),
        );
        let display = format!("{io_err}");
        assert!(display.contains("IO error"));
        assert!(display.contains("unfurls.toml"));

        let missing = ConfigError::NotFound(PathBuf::from("site.toml"));
        assert!(format!("{missing}").contains("site.toml"));
    }

    #[test]
    fn test_warnings_alone_pass() {
        let mut diag = ConfigDiagnostics::new();
        diag.warn(OEMBED, "only a warning");

        assert!(!diag.is_empty());
        assert!(!diag.has_errors());
        assert_eq!(diag.warnings().count(), 1);
        assert!(diag.into_result().is_ok());
    }

    #[test]
    fn test_errors_fail() {
        let mut diag = ConfigDiagnostics::new();
        diag.warn(OEMBED, "warning");
        diag.error_with_hint(URL, "bad url", "use https://example.com");

        let err = diag.into_result().unwrap_err();
        assert_eq!(err.error_count(), 1);

        let first = err.errors().next().unwrap();
        assert_eq!(first.field, URL);
        assert_eq!(first.hint.as_deref(), Some("use https://example.com"));
    }

    #[test]
    fn test_display_lists_only_errors() {
        let mut diag = ConfigDiagnostics::new();
        diag.error(URL, "first");
        diag.error(OEMBED, "second");
        diag.warn(OEMBED, "not shown");

        let display = format!("{diag}");
        assert!(display.contains("site.url"));
        assert!(display.contains("second"));
        assert!(display.contains("found 2 errors"));
        assert!(!display.contains("not shown"));
    }
}

//! Scanner configuration.
//!
//! The comment leader (`//`) and the interpolation delimiters (`$"`, `{`, `}`) are fixed by the
//! language; only the indentation policy and the error mode vary.

use crate::diagnostics::ConfigError;

/// Scanner configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LexerConfig {
    /// Columns a tab advances the indentation by
    pub tab_width: usize,
    /// Whether a tab may appear in indentation at all
    pub tabs_allowed: bool,
    /// What the scanner does after reporting an error
    pub error_mode: ErrorMode,
}

/// Error handling policy of a scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorMode {
    /// Report the error, skip the rest of the physical line and keep scanning.
    Recover,
    /// Report the first error and stop.
    Fatal,
}

impl Default for LexerConfig {
    fn default() -> Self {
        Self {
            tab_width: 1,
            tabs_allowed: true,
            error_mode: ErrorMode::Recover,
        }
    }
}

impl LexerConfig {
    /// Create a new config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the tab width
    pub fn with_tab_width(mut self, width: usize) -> Self {
        self.tab_width = width;
        self
    }

    /// Allow or forbid tabs in indentation
    pub fn with_tabs_allowed(mut self, allowed: bool) -> Self {
        self.tabs_allowed = allowed;
        self
    }

    /// Set the error mode
    pub fn with_error_mode(mut self, mode: ErrorMode) -> Self {
        self.error_mode = mode;
        self
    }

    /// Check the configuration before a scan starts.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tab_width == 0 {
            return Err(ConfigError::ZeroTabWidth);
        }
        Ok(())
    }
}

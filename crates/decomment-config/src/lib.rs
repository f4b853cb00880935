//! Layered configuration for the decomment toolchain.
//!
//! [`Config`] is loaded with `ortho_config`, which merges, from lowest to
//! highest precedence: built-in defaults, the `.decomment.toml` file (or the
//! file named by `--config-path` / `DECOMMENT_CONFIG_PATH`), `DECOMMENT_*`
//! environment variables, and command-line flags.
//!
//! Retention patterns are only read from configuration files, as a list of
//! `{ pattern, flags }` tables:
//!
//! ```toml
//! keep_prefix = "!"
//! blank_lines_before = 1
//!
//! [[keep_patterns]]
//! pattern = "^ eslint"
//!
//! [[keep_patterns]]
//! pattern = "copyright"
//! flags = "i"
//! ```

mod defaults;
mod logging;

use decomment_syntax::RetentionPattern;
use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};

pub use defaults::{
    CONFIG_FILE_NAME, DEFAULT_BLANK_LINES, DEFAULT_LOG_FILTER, default_log_filter,
    default_log_filter_string, default_log_format,
};
pub use logging::LogFormat;

/// Flags consumed by the configuration loader rather than the command parser.
pub const CONFIG_CLI_FLAGS: &[&str] = &[
    "--config-path",
    "--log-filter",
    "--log-format",
    "--blank-lines-before",
    "--blank-lines-after",
    "--keep-prefix",
];

/// Resolved settings shared by every invocation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, OrthoConfig)]
#[ortho_config(prefix = "DECOMMENT_")]
pub struct Config {
    /// Tracing filter expression, for example `warn` or `decomment=debug`.
    #[ortho_config(default = default_log_filter_string())]
    log_filter: String,
    /// Log output format: `compact` or `json`.
    #[ortho_config(default = default_log_format())]
    log_format: LogFormat,
    /// Blank lines to remove above each removed comment line.
    #[ortho_config(default = DEFAULT_BLANK_LINES)]
    blank_lines_before: usize,
    /// Blank lines to remove below each removed comment line.
    #[ortho_config(default = DEFAULT_BLANK_LINES)]
    blank_lines_after: usize,
    /// Keep only comments whose text starts with this prefix.
    keep_prefix: Option<String>,
    /// Comments matching any of these patterns are kept.
    #[serde(default)]
    #[ortho_config(skip_cli, default = Vec::new(), merge_strategy = "replace")]
    keep_patterns: Vec<RetentionPattern>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_filter: default_log_filter_string(),
            log_format: default_log_format(),
            blank_lines_before: DEFAULT_BLANK_LINES,
            blank_lines_after: DEFAULT_BLANK_LINES,
            keep_prefix: None,
            keep_patterns: Vec::new(),
        }
    }
}

impl Config {
    /// Returns the tracing filter expression.
    #[must_use]
    pub fn log_filter(&self) -> &str {
        &self.log_filter
    }

    /// Returns the log output format.
    #[must_use]
    pub const fn log_format(&self) -> LogFormat {
        self.log_format
    }

    /// Returns the number of blank lines removed above a removed comment.
    #[must_use]
    pub const fn blank_lines_before(&self) -> usize {
        self.blank_lines_before
    }

    /// Returns the number of blank lines removed below a removed comment.
    #[must_use]
    pub const fn blank_lines_after(&self) -> usize {
        self.blank_lines_after
    }

    /// Returns the configured retention prefix, treating an empty value as
    /// unset.
    #[must_use]
    pub fn keep_prefix(&self) -> Option<&str> {
        self.keep_prefix.as_deref().filter(|prefix| !prefix.is_empty())
    }

    /// Returns the configured retention patterns.
    #[must_use]
    pub fn keep_patterns(&self) -> &[RetentionPattern] {
        &self.keep_patterns
    }

    /// Returns a copy with the log filter replaced.
    #[must_use]
    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = filter.into();
        self
    }

    /// Returns a copy with the retention prefix replaced.
    #[must_use]
    pub fn with_keep_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.keep_prefix = Some(prefix.into());
        self
    }

    /// Returns a copy with the retention patterns replaced.
    #[must_use]
    pub fn with_keep_patterns(mut self, patterns: Vec<RetentionPattern>) -> Self {
        self.keep_patterns = patterns;
        self
    }
}

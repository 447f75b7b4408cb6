//! Configuration management for routescan
//!
//! Settings are loaded from environment variables with defaults, then command-line
//! flags override individual fields before `validate()` runs.
//!
//! # Environment Variables
//!
//! - `ROUTESCAN_OUTPUT_DIR`: Report root directory - default: "data"
//! - `ROUTESCAN_INCLUDE_TESTS`: Scan `*.spec.*` / `*.test.*` files (true|false) - default: "false"
//! - `ROUTESCAN_EXTENSIONS`: Comma separated extension allow-list - default: ".js,.ts"
//! - `ROUTESCAN_QUERY_TAG`: Value prefix in the synthetic query string - default: "TAG"
//! - `ROUTESCAN_LOG_LEVEL`: Logging level - default: "info"
//!
//! # Example
//!
//! ```
//! use routescan::ScanConfig;
//!
//! let mut config = ScanConfig::for_root("./backend");
//! config.include_tests = true;
//! config.validate().expect("valid configuration");
//! ```

use crate::util::logging::try_parse_level;
use std::env;
use std::path::PathBuf;
use thiserror::Error;

const DEFAULT_OUTPUT_DIR: &str = "data";
pub const DEFAULT_EXTENSIONS: &[&str] = &[".js", ".ts"];
const DEFAULT_QUERY_TAG: &str = "TAG";
const DEFAULT_LOG_LEVEL: &str = "info";

/// Configuration errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("No source extensions configured. Pass --ext or set ROUTESCAN_EXTENSIONS")]
    NoExtensions,

    #[error("Invalid extension '{0}': expected a suffix such as .js")]
    InvalidExtension(String),

    #[error("Invalid query tag '{0}': must be non-empty and contain no '&', '=' or whitespace")]
    InvalidQueryTag(String),

    #[error("Invalid log level '{0}'. Valid levels: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid excluded directory '{0}'")]
    InvalidExclude(String),
}

/// Settings for one scan run
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// Directory tree to scan
    pub root: PathBuf,

    /// Reports land in `<output_dir>/<root folder name>/`
    pub output_dir: PathBuf,

    /// Keep `*.spec.<ext>` and `*.test.<ext>` files
    pub include_tests: bool,

    /// File suffixes to scan, each starting with '.'
    pub extensions: Vec<String>,

    /// Directory names skipped during the walk
    pub exclude_dirs: Vec<String>,

    /// Honor .gitignore and hidden-file rules while walking
    pub respect_gitignore: bool,

    /// Value prefix for the synthetic query string (`name=<tag>1`)
    pub query_tag: String,

    /// Logging level (trace, debug, info, warn, error)
    pub log_level: String,
}

impl Default for ScanConfig {
    /// Loads from `ROUTESCAN_*` environment variables, falling back to defaults.
    fn default() -> Self {
        let output_dir = env::var("ROUTESCAN_OUTPUT_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_OUTPUT_DIR));

        let include_tests = env::var("ROUTESCAN_INCLUDE_TESTS")
            .ok()
            .and_then(|v| v.parse::<bool>().ok())
            .unwrap_or(false);

        let extensions = env::var("ROUTESCAN_EXTENSIONS")
            .ok()
            .map(|v| parse_extension_list(&v))
            .unwrap_or_else(|| DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect());

        let query_tag =
            env::var("ROUTESCAN_QUERY_TAG").unwrap_or_else(|_| DEFAULT_QUERY_TAG.to_string());

        let log_level = env::var("ROUTESCAN_LOG_LEVEL")
            .unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string())
            .to_lowercase();

        Self {
            root: PathBuf::from("."),
            output_dir,
            include_tests,
            extensions,
            exclude_dirs: Vec::new(),
            respect_gitignore: false,
            query_tag,
            log_level,
        }
    }
}

impl ScanConfig {
    pub fn for_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Default::default()
        }
    }

    /// Replaces the extension allow-list, adding the leading '.' where missing.
    pub fn with_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.extensions = extensions
            .into_iter()
            .map(|e| normalize_extension(e.as_ref()))
            .collect();
        self
    }

    /// Validates the configuration
    ///
    /// Checks that:
    /// - At least one extension is configured and each is a plain suffix
    /// - The query tag can be embedded in a query string
    /// - The log level is known
    /// - Excluded directory names are non-empty
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.extensions.is_empty() {
            return Err(ConfigError::NoExtensions);
        }

        for ext in &self.extensions {
            let valid = ext.len() > 1
                && ext.starts_with('.')
                && !ext.contains(['/', '\\'])
                && !ext.chars().any(char::is_whitespace);
            if !valid {
                return Err(ConfigError::InvalidExtension(ext.clone()));
            }
        }

        if self.query_tag.is_empty()
            || self.query_tag.contains(['&', '='])
            || self.query_tag.chars().any(char::is_whitespace)
        {
            return Err(ConfigError::InvalidQueryTag(self.query_tag.clone()));
        }

        if try_parse_level(&self.log_level).is_none() {
            return Err(ConfigError::InvalidLogLevel(self.log_level.clone()));
        }

        if let Some(bad) = self
            .exclude_dirs
            .iter()
            .find(|d| d.trim().is_empty() || d.contains(['/', '\\']))
        {
            return Err(ConfigError::InvalidExclude(bad.clone()));
        }

        Ok(())
    }
}

fn normalize_extension(ext: &str) -> String {
    let ext = ext.trim();
    if ext.is_empty() || ext.starts_with('.') {
        ext.to_string()
    } else {
        format!(".{}", ext)
    }
}

fn parse_extension_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|e| !e.is_empty())
        .map(normalize_extension)
        .collect()
}

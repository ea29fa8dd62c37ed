//! Run configuration.
//!
//! Sources, lowest precedence first:
//! 1. Built-in defaults
//! 2. `~/.config/attachment_cleaner/attachment_cleaner.toml` (optional)
//! 3. `./attachment_cleaner.toml`, or the file passed explicitly
//! 4. `WPAC_*` environment variables, e.g. `WPAC_BASE_URL`, `WPAC_MODE`,
//!    `WPAC_RETENTION__MAX_AGE_DAYS`
//!
//! # Example
//!
//! ```toml
//! base_url = "https://example.org"
//! username = "editor"
//! mode = "dangerous"
//!
//! [retention]
//! max_age_days = 28
//! mime_type = "application/pdf"
//! slug_patterns = ["pew-news", "priory-diary", "service-list"]
//! ```

use attachment_cleaner_core::RetentionPolicy;
use attachment_cleaner_error::{CleanerError, CleanerResult, ConfigError};
use attachment_cleaner_wordpress::{
    Credentials, DEFAULT_MAX_PAGES, DEFAULT_PER_PAGE, DeleteMode,
};
use config::{Config, ConfigBuilder, Environment, File, builder::DefaultState};
use reqwest::Url;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::{debug, instrument};

const ENV_PREFIX: &str = "WPAC";
const CONFIG_NAME: &str = "attachment_cleaner";

/// Largest page size the WordPress REST API accepts.
const MAX_PER_PAGE: u32 = 100;

/// Longest retention age accepted, one century.
const MAX_AGE_DAYS: u32 = 36_500;

/// Everything a run needs to know about the site and the policy.
#[derive(Clone, PartialEq, Eq, Deserialize, derive_getters::Getters)]
pub struct CleanerConfig {
    /// Site root, e.g. `https://example.org`
    base_url: String,

    /// Account used for deletes
    #[serde(default)]
    username: Option<String>,

    /// Application password used for deletes
    #[serde(default)]
    #[getter(skip)]
    password: Option<String>,

    /// Mode flag; only `"dangerous"` enables live deletion
    #[serde(default)]
    mode: Option<String>,

    /// Append-only log destination
    #[serde(default = "default_log_file")]
    log_file: PathBuf,

    /// Items requested per page
    #[serde(default = "default_per_page")]
    per_page: u32,

    /// Upper bound on page requests
    #[serde(default = "default_max_pages")]
    max_pages: u32,

    /// Which uploads count as stale
    #[serde(default)]
    retention: RetentionPolicy,
}

fn default_log_file() -> PathBuf {
    PathBuf::from("attachment_cleaner.log")
}

fn default_per_page() -> u32 {
    DEFAULT_PER_PAGE
}

fn default_max_pages() -> u32 {
    DEFAULT_MAX_PAGES
}

impl std::fmt::Debug for CleanerConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CleanerConfig")
            .field("base_url", &self.base_url)
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .field("mode", &self.mode)
            .field("log_file", &self.log_file)
            .field("per_page", &self.per_page)
            .field("max_pages", &self.max_pages)
            .field("retention", &self.retention)
            .finish()
    }
}

impl CleanerConfig {
    /// Load configuration from all sources.
    ///
    /// `path` replaces `./attachment_cleaner.toml` and, unlike it, must exist.
    ///
    /// # Errors
    ///
    /// Returns an error if a source cannot be read, a value has the wrong
    /// type, or the result fails validation.
    #[instrument]
    pub fn load(path: Option<&Path>) -> CleanerResult<Self> {
        debug!("Loading configuration with precedence: env > file > home dir > defaults");

        let mut builder = Config::builder();

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config").join(CONFIG_NAME).join("attachment_cleaner.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        builder = match path {
            Some(path) => builder.add_source(File::from(path)),
            None => builder.add_source(File::with_name(CONFIG_NAME).required(false)),
        };

        Self::build(builder.add_source(Self::environment()))
    }

    /// Load configuration from a single file, ignoring every other source.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or fails
    /// validation.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> CleanerResult<Self> {
        Self::build(Config::builder().add_source(File::from(path.as_ref())))
    }

    /// Load configuration from an optional file overlaid with `vars`, which
    /// stand in for the process environment (`WPAC_*` keys).
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    #[instrument(skip(vars), fields(vars = vars.len()))]
    pub fn from_file_and_env(
        path: Option<&Path>,
        vars: HashMap<String, String>,
    ) -> CleanerResult<Self> {
        let mut builder = Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(File::from(path));
        }
        Self::build(builder.add_source(Self::environment().source(Some(vars))))
    }

    fn environment() -> Environment {
        Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
    }

    fn build(builder: ConfigBuilder<DefaultState>) -> CleanerResult<Self> {
        let config: Self = builder
            .build()
            .map_err(|e| {
                CleanerError::from(ConfigError::new(format!(
                    "Failed to build configuration: {}",
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                CleanerError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })?;

        config.validate()?;
        debug!(config = ?config, "Configuration loaded");
        Ok(config)
    }

    /// Check values the type system cannot.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] naming the first offending key.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.base_url.trim().is_empty() {
            return Err(ConfigError::new("base_url must not be empty"));
        }
        if let Err(e) = Url::parse(&self.base_url) {
            return Err(ConfigError::new(format!(
                "base_url must be an absolute URL, got {:?}: {}",
                self.base_url, e
            )));
        }
        if *self.retention.max_age_days() > MAX_AGE_DAYS {
            return Err(ConfigError::new(format!(
                "retention.max_age_days must be at most {}, got {}",
                MAX_AGE_DAYS,
                self.retention.max_age_days()
            )));
        }
        if !(1..=MAX_PER_PAGE).contains(&self.per_page) {
            return Err(ConfigError::new(format!(
                "per_page must be between 1 and {}, got {}",
                MAX_PER_PAGE, self.per_page
            )));
        }
        if self.max_pages == 0 {
            return Err(ConfigError::new("max_pages must be at least 1"));
        }
        if !self.delete_mode().is_dry_run() && self.credentials().is_none() {
            return Err(ConfigError::new(
                "username and password are required when mode is \"dangerous\"",
            ));
        }
        Ok(())
    }

    /// Deletion mode resolved from the `mode` flag.
    pub fn delete_mode(&self) -> DeleteMode {
        DeleteMode::from_flag(self.mode.as_deref())
    }

    /// Basic-auth credentials, when both parts are configured.
    pub fn credentials(&self) -> Option<Credentials> {
        match (&self.username, &self.password) {
            (Some(username), Some(password)) => Some(Credentials::new(username, password)),
            _ => None,
        }
    }
}

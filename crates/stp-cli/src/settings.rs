//! Settings file and environment overrides.
//!
//! Settings are stored in the platform-specific configuration folder:
//! - macOS: ~/Library/Application Support/com.skiptrace-prep.Skiptrace Prep/
//! - Windows: %APPDATA%/skiptrace-prep/Skiptrace Prep/config/
//! - Linux: ~/.config/skiptraceprep/

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use stp_map::{ColumnResolver, MATCH_CUTOFF, SynonymTable};
use stp_model::Role;
use stp_submit::ActorSettings;

const APP_QUALIFIER: &str = "com";
const APP_ORG: &str = "skiptrace-prep";
const APP_NAME: &str = "Skiptrace Prep";
const CONFIG_FILENAME: &str = "settings.toml";

/// Overrides `[apify].token`.
pub const TOKEN_ENV: &str = "SKIPTRACE_APIFY_TOKEN";
/// Overrides `[apify].actor_id`.
pub const ACTOR_ID_ENV: &str = "SKIPTRACE_APIFY_ACTOR_ID";

/// Everything read from `settings.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub apify: ActorSettings,
    pub resolver: ResolverSettings,
}

/// Column resolver tuning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverSettings {
    pub cutoff: f64,
    /// Role code (e.g. `UNIT`) to replacement synonym list.
    pub synonyms: BTreeMap<String, Vec<String>>,
}

impl Default for ResolverSettings {
    fn default() -> Self {
        Self {
            cutoff: MATCH_CUTOFF,
            synonyms: BTreeMap::new(),
        }
    }
}

impl ResolverSettings {
    /// Builds a resolver with the configured cutoff and synonym overrides.
    ///
    /// # Errors
    ///
    /// Returns an error when a synonym key does not name a role.
    pub fn build_resolver(&self) -> Result<ColumnResolver> {
        let mut overrides = Vec::with_capacity(self.synonyms.len());
        for (key, labels) in &self.synonyms {
            let role = Role::from_str(key)
                .with_context(|| format!("invalid [resolver.synonyms] key `{key}`"))?;
            overrides.push((role, labels.clone()));
        }
        let synonyms = SynonymTable::default().with_overrides(overrides);
        Ok(ColumnResolver::new(synonyms).with_cutoff(self.cutoff))
    }
}

impl Settings {
    /// Applies `SKIPTRACE_APIFY_*` overrides using the process environment.
    #[must_use]
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides_from(|key| std::env::var(key).ok())
    }

    /// Applies overrides from `lookup`; blank values are ignored.
    #[must_use]
    pub fn with_overrides_from<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_blank = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        if let Some(token) = non_blank(TOKEN_ENV) {
            tracing::debug!("token taken from environment");
            self.apify.token = Some(token);
        }
        if let Some(actor_id) = non_blank(ACTOR_ID_ENV) {
            tracing::debug!(%actor_id, "actor id taken from environment");
            self.apify.actor_id = Some(actor_id);
        }
        self
    }
}

/// Get the path to the default settings file.
///
/// Returns `None` if the platform-specific directory cannot be determined.
pub fn settings_path() -> Option<PathBuf> {
    ProjectDirs::from(APP_QUALIFIER, APP_ORG, APP_NAME)
        .map(|dirs| dirs.config_dir().join(CONFIG_FILENAME))
}

/// Parse settings from TOML text.
pub fn parse_settings(content: &str) -> Result<Settings> {
    let settings: Settings = toml::from_str(content).context("invalid settings file")?;
    Ok(settings)
}

/// Load settings, then apply environment overrides.
///
/// An explicit path must exist and parse. Without one, the default settings
/// file is optional: if it is missing or broken the defaults are used.
pub fn load_settings(explicit: Option<&Path>) -> Result<Settings> {
    let settings = match explicit {
        Some(path) => {
            let content = fs::read_to_string(path)
                .with_context(|| format!("failed to read settings file {}", path.display()))?;
            let settings = parse_settings(&content)
                .with_context(|| format!("failed to load {}", path.display()))?;
            tracing::info!(path = %path.display(), "loaded settings");
            settings
        }
        None => load_default_settings(),
    };
    Ok(settings.with_env_overrides())
}

fn load_default_settings() -> Settings {
    let Some(path) = settings_path() else {
        tracing::warn!("could not determine settings path, using defaults");
        return Settings::default();
    };

    match fs::read_to_string(&path) {
        Ok(content) => match parse_settings(&content) {
            Ok(settings) => {
                tracing::info!(path = %path.display(), "loaded settings");
                settings
            }
            Err(error) => {
                tracing::warn!(path = %path.display(), "{error:#}, using defaults");
                Settings::default()
            }
        },
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "no settings file, using defaults");
            Settings::default()
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), "failed to read settings file: {e}, using defaults");
            Settings::default()
        }
    }
}

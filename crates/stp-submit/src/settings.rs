//! Actor connection settings.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Default API host.
pub const DEFAULT_BASE_URL: &str = "https://api.apify.com";

/// Actor build tag to run.
pub const DEFAULT_BUILD: &str = "latest";

/// Run timeout passed to the actor, in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 300;

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_build() -> String {
    DEFAULT_BUILD.to_string()
}

const fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

/// Where and how to start the skip-trace actor.
///
/// `token` and `actor_id` are secrets supplied by configuration; they are
/// only checked when a run is started.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActorSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actor_id: Option<String>,

    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_build")]
    pub build: String,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ActorSettings {
    fn default() -> Self {
        Self {
            token: None,
            actor_id: None,
            base_url: default_base_url(),
            build: default_build(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl ActorSettings {
    pub fn new(token: impl Into<String>, actor_id: impl Into<String>) -> Self {
        Self {
            token: Some(token.into()),
            actor_id: Some(actor_id.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

// The token never appears in logs.
impl fmt::Debug for ActorSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActorSettings")
            .field("token", &self.token.as_ref().map(|_| "[REDACTED]"))
            .field("actor_id", &self.actor_id)
            .field("base_url", &self.base_url)
            .field("build", &self.build)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

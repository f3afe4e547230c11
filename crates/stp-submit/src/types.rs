//! Response types for the actor `runs` endpoint.

use serde::Deserialize;

/// Envelope of a successful run creation.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct RunEnvelope {
    pub data: RunData,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RunData {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    pub status_url: String,
}

/// A run the service accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunStarted {
    /// Where the run's progress can be checked.
    pub status_url: String,
    pub run_id: Option<String>,
    /// Initial run status, e.g. `READY`.
    pub status: Option<String>,
}

impl From<RunEnvelope> for RunStarted {
    fn from(envelope: RunEnvelope) -> Self {
        Self {
            status_url: envelope.data.status_url,
            run_id: envelope.data.id,
            status: envelope.data.status,
        }
    }
}

//! Blocking HTTP client for starting actor runs.

use reqwest::StatusCode;
use reqwest::Url;
use reqwest::blocking::multipart::{Form, Part};
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};

use stp_output::{CSV_CONTENT_TYPE, DEFAULT_OUTPUT_FILE_NAME};

use crate::error::{Result, SubmitError};
use crate::settings::ActorSettings;
use crate::types::{RunEnvelope, RunStarted};

/// Multipart field the actor reads its input file from.
const INPUT_FIELD: &str = "input";

/// User agent string for API requests.
const USER_AGENT_VALUE: &str = concat!("skiptrace-prep/", env!("CARGO_PKG_VERSION"));

/// Client for one configured actor.
#[derive(Debug, Clone)]
pub struct ActorClient {
    client: reqwest::blocking::Client,
    run_url: Url,
}

impl ActorClient {
    /// Creates a client, failing early when the token or actor id is missing.
    pub fn new(settings: &ActorSettings) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));

        let client = reqwest::blocking::Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| SubmitError::Network(format!("failed to create HTTP client: {e}")))?;

        Self::with_client(settings, client)
    }

    /// Creates a client around a preconfigured [`reqwest::blocking::Client`].
    pub fn with_client(settings: &ActorSettings, client: reqwest::blocking::Client) -> Result<Self> {
        let run_url = run_url(settings)?;
        Ok(Self { client, run_url })
    }

    /// Uploads a cleaned CSV under the default file name and starts a run.
    pub fn start_run(&self, csv: Vec<u8>) -> Result<RunStarted> {
        self.start_run_named(csv, DEFAULT_OUTPUT_FILE_NAME)
    }

    /// Uploads `csv` as `file_name` and starts a run.
    ///
    /// Only `201 Created` counts as success; any other status returns the raw
    /// response body in [`SubmitError::Rejected`]. No retries.
    pub fn start_run_named(&self, csv: Vec<u8>, file_name: &str) -> Result<RunStarted> {
        let size = csv.len();
        let part = Part::bytes(csv)
            .file_name(file_name.to_string())
            .mime_str(CSV_CONTENT_TYPE)?;
        let form = Form::new().part(INPUT_FIELD, part);

        tracing::info!(
            endpoint = %redacted_endpoint(&self.run_url),
            file_name,
            bytes = size,
            "starting actor run"
        );

        let response = self.client.post(self.run_url.clone()).multipart(form).send()?;
        let status = response.status();
        let body = response.text()?;

        if status != StatusCode::CREATED {
            tracing::warn!(status = status.as_u16(), "actor run rejected");
            return Err(SubmitError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        let envelope: RunEnvelope = serde_json::from_str(&body)?;
        let run = RunStarted::from(envelope);
        tracing::info!(
            run_id = run.run_id.as_deref().unwrap_or("-"),
            status_url = %run.status_url,
            "actor run started"
        );
        Ok(run)
    }

    /// Endpoint with query parameters; contains the token.
    pub fn run_url(&self) -> &Url {
        &self.run_url
    }
}

fn run_url(settings: &ActorSettings) -> Result<Url> {
    let token = settings
        .token
        .as_deref()
        .filter(|token| !token.trim().is_empty())
        .ok_or(SubmitError::MissingSetting("token"))?;
    let actor_id = settings
        .actor_id
        .as_deref()
        .map(str::trim)
        .filter(|actor_id| !actor_id.is_empty())
        .ok_or(SubmitError::MissingSetting("actor_id"))?;

    let endpoint = format!(
        "{}/v2/actors/{}/runs",
        settings.base_url.trim_end_matches('/'),
        actor_id
    );
    let timeout = settings.timeout_secs.to_string();
    Url::parse_with_params(
        &endpoint,
        [
            ("token", token),
            ("build", settings.build.as_str()),
            ("timeout", timeout.as_str()),
        ],
    )
    .map_err(|e| SubmitError::InvalidUrl(format!("{endpoint}: {e}")))
}

/// The endpoint without its query string, safe to log.
fn redacted_endpoint(url: &Url) -> String {
    let mut url = url.clone();
    url.set_query(None);
    url.to_string()
}

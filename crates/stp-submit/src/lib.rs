//! Skip-trace actor submission.
//!
//! Posts the cleaned CSV as a multipart file upload to the actor's `runs`
//! endpoint and returns the status URL of the started run.
//!
//! # Example
//!
//! ```ignore
//! use stp_submit::{ActorClient, ActorSettings};
//!
//! let settings = ActorSettings::new("my-token", "user~skip-trace");
//! let client = ActorClient::new(&settings)?;
//! let run = client.start_run(csv_bytes)?;
//! println!("status: {}", run.status_url);
//! ```

#![deny(unsafe_code)]

mod client;
mod error;
mod settings;
mod types;

pub use client::ActorClient;
pub use error::{Result, SubmitError};
pub use settings::{ActorSettings, DEFAULT_BASE_URL, DEFAULT_BUILD, DEFAULT_TIMEOUT_SECS};
pub use types::RunStarted;

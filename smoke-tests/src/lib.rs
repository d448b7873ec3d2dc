//! Smoke prober for the WhatsApp messaging HTTP API.
//!
//! Logs in once, then runs a fixed sequence of probes against the plan and
//! messaging endpoints, printing every JSON response to a human-readable
//! transcript. A failed login stops the run; a failed probe is reported and
//! the next probe runs anyway.
//!
//! ## Usage
//!
//! ```bash
//! # Start the messaging API on localhost:3000, then
//! cargo run -p smoke-tests
//!
//! # Point at another deployment
//! SMOKE_API_URL=https://api.example.com cargo run -p smoke-tests
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod observability;
pub mod payloads;
pub mod probe;
pub mod prober;
pub mod session;
pub mod transcript;

pub use client::ApiClient;
pub use config::Settings;
pub use error::SmokeError;
pub use probe::{Access, Probe};
pub use prober::{ProbeOutcome, Prober, RunOutcome};
pub use session::Session;
pub use transcript::Transcript;

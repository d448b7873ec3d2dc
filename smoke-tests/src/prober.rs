use crate::client::ApiClient;
use crate::config::Settings;
use crate::error::SmokeError;
use crate::probe::{standard_probes, Probe};
use crate::session::Session;
use crate::transcript::Transcript;
use serde_json::Value;
use std::io::Write;

/// Result of a single probe.
#[derive(Debug)]
pub struct ProbeOutcome {
    pub step: &'static str,
    pub path: &'static str,
    pub result: Result<Value, SmokeError>,
}

impl ProbeOutcome {
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

#[derive(Debug)]
pub enum RunOutcome {
    /// Login failed; no probe was issued.
    Aborted(SmokeError),
    /// Login succeeded and every probe ran, in order.
    Completed(Vec<ProbeOutcome>),
}

/// Logs in, then runs the probe sequence one call at a time.
pub struct Prober {
    settings: Settings,
    client: ApiClient,
}

impl Prober {
    pub fn new(settings: Settings) -> Self {
        let client = ApiClient::new(settings.clone());
        Self { settings, client }
    }

    /// Run the whole sequence, writing the transcript as it goes.
    ///
    /// Probe and login failures are reported in the outcome; `Err` is only
    /// returned when the transcript itself cannot be written.
    pub async fn run<W: Write>(
        &self,
        transcript: &mut Transcript<W>,
    ) -> Result<RunOutcome, SmokeError> {
        let probes = standard_probes(&self.settings)?;
        transcript.banner(&self.settings)?;

        tracing::info!(api_url = %self.client.base_url(), "Starting smoke run");

        transcript.step("1", "Logging in and capturing the JWT token")?;
        let session = match self.client.login().await {
            Ok(session) => session,
            Err(e) => {
                tracing::error!(error = %e, "Login failed, aborting run");
                transcript.error(&e)?;
                return Ok(RunOutcome::Aborted(e));
            }
        };
        transcript.success("Logged in. Token captured.")?;
        transcript.blank()?;

        let mut outcomes = Vec::with_capacity(probes.len());
        for probe in &probes {
            outcomes.push(self.attempt(probe, &session, transcript).await?);
        }

        let failed = outcomes.iter().filter(|o| !o.is_ok()).count();
        tracing::info!(probes = outcomes.len(), failed, "Smoke run finished");

        transcript.finished()?;
        Ok(RunOutcome::Completed(outcomes))
    }

    /// Issue one probe and report it; a failure here never stops the run.
    async fn attempt<W: Write>(
        &self,
        probe: &Probe,
        session: &Session,
        transcript: &mut Transcript<W>,
    ) -> Result<ProbeOutcome, SmokeError> {
        transcript.step(probe.step, probe.description)?;

        let result = self.client.send(probe, session).await;
        match &result {
            Ok(body) => {
                tracing::info!(method = %probe.method, path = probe.path, "Probe succeeded");
                transcript.json(body)?;
            }
            Err(e) => {
                tracing::warn!(method = %probe.method, path = probe.path, error = %e, "Probe failed");
                transcript.error(e)?;
            }
        }
        transcript.separator()?;

        Ok(ProbeOutcome {
            step: probe.step,
            path: probe.path,
            result,
        })
    }
}

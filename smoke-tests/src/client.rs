use crate::config::Settings;
use crate::error::SmokeError;
use crate::payloads::Credentials;
use crate::probe::{Access, Probe};
use crate::session::Session;
use reqwest::{Client, Response, StatusCode};
use secrecy::ExposeSecret;
use serde_json::Value;

/// Thin wrapper over `reqwest::Client` bound to one API base URL.
pub struct ApiClient {
    client: Client,
    settings: Settings,
}

impl ApiClient {
    pub fn new(settings: Settings) -> Self {
        Self {
            client: Client::new(),
            settings,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.settings.api_url
    }

    /// `POST /auth/login` with the configured credentials.
    ///
    /// Only a `200 OK` carrying a non-empty `token` yields a session.
    pub async fn login(&self) -> Result<Session, SmokeError> {
        let url = self.settings.endpoint("/auth/login");
        let credentials = Credentials {
            email: &self.settings.email,
            password: self.settings.password.expose_secret(),
        };

        let response = self
            .client
            .post(url.as_str())
            .json(&credentials)
            .send()
            .await?;

        let response = check_status(response)?;
        let status = response.status();
        if status != StatusCode::OK {
            let body = response.text().await?;
            return Err(SmokeError::UnexpectedLoginStatus { status, body });
        }

        let body = read_json(response).await?;
        Session::from_login_body(&body).ok_or(SmokeError::MissingToken)
    }

    /// Issue one probe and return its decoded JSON body.
    ///
    /// A non-2xx status is an error; its body is never read. Failures are
    /// returned, not logged; the prober reports them.
    pub async fn send(&self, probe: &Probe, session: &Session) -> Result<Value, SmokeError> {
        let url = self.settings.endpoint(probe.path);

        let mut request = self.client.request(probe.method.clone(), url.as_str());
        if probe.access == Access::Bearer {
            request = request.bearer_auth(session.token());
        }
        if !probe.query.is_empty() {
            request = request.query(&probe.query);
        }
        if let Some(body) = &probe.body {
            request = request.json(body);
        }

        let response = request.send().await?;

        read_json(check_status(response)?).await
    }
}

fn check_status(response: Response) -> Result<Response, SmokeError> {
    let status = response.status();
    tracing::debug!(status = %status, url = %response.url(), "Received response");

    if status.is_success() {
        Ok(response)
    } else {
        Err(SmokeError::Status {
            status,
            url: response.url().to_string(),
        })
    }
}

async fn read_json(response: Response) -> Result<Value, SmokeError> {
    let bytes = response.bytes().await?;
    Ok(serde_json::from_slice(&bytes)?)
}

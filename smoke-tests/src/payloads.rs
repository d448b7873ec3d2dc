//! Request bodies and query strings sent by the prober.

use serde::{Deserialize, Serialize};

/// Body of `POST /auth/login`.
#[derive(Serialize)]
pub struct Credentials<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

/// Body of `POST /messages/send`.
#[derive(Debug, Clone, Serialize)]
pub struct SendMessage {
    pub to: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media_url: Option<String>,
}

impl SendMessage {
    pub fn text(to: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            to: to.into(),
            message: message.into(),
            media_url: None,
        }
    }

    pub fn with_media(mut self, media_url: impl Into<String>) -> Self {
        self.media_url = Some(media_url.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchContact {
    pub to: String,
    pub message: String,
}

/// Body of `POST /messages/send-batch`. Contacts keep their order on the wire.
#[derive(Debug, Clone, Serialize)]
pub struct BatchSend {
    pub contacts: Vec<BatchContact>,
}

impl BatchSend {
    /// One entry per message, all addressed to `to`.
    pub fn to_one_recipient(to: &str, messages: &[String]) -> Self {
        Self {
            contacts: messages
                .iter()
                .map(|message| BatchContact {
                    to: to.to_string(),
                    message: message.clone(),
                })
                .collect(),
        }
    }
}

/// Optional filters for `GET /messages/history`.
///
/// Config keys are snake_case; `to_pairs` renders the API's wire names
/// (`startDate`, `endDate`, `status`, `number_to`).
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct HistoryFilter {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub status: Option<String>,
    pub number_to: Option<String>,
}

impl HistoryFilter {
    pub fn is_empty(&self) -> bool {
        self.start_date.is_none()
            && self.end_date.is_none()
            && self.status.is_none()
            && self.number_to.is_none()
    }

    /// Query pairs in wire form, absent filters skipped.
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        [
            ("startDate", &self.start_date),
            ("endDate", &self.end_date),
            ("status", &self.status),
            ("number_to", &self.number_to),
        ]
        .into_iter()
        .filter_map(|(key, value)| value.clone().map(|v| (key, v)))
        .collect()
    }
}

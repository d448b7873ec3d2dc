use crate::config::Settings;
use crate::error::SmokeError;
use crate::payloads::{BatchSend, SendMessage};
use reqwest::Method;
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Public,
    Bearer,
}

/// One isolated call against a single endpoint.
#[derive(Debug, Clone)]
pub struct Probe {
    /// Step label printed in the transcript header, e.g. `2.3`.
    pub step: &'static str,
    pub description: &'static str,
    pub method: Method,
    pub path: &'static str,
    pub access: Access,
    pub query: Vec<(&'static str, String)>,
    pub body: Option<Value>,
}

impl Probe {
    fn get(step: &'static str, description: &'static str, path: &'static str) -> Self {
        Self {
            step,
            description,
            method: Method::GET,
            path,
            access: Access::Bearer,
            query: Vec::new(),
            body: None,
        }
    }

    fn post(
        step: &'static str,
        description: &'static str,
        path: &'static str,
        body: Value,
    ) -> Self {
        Self {
            method: Method::POST,
            body: Some(body),
            ..Self::get(step, description, path)
        }
    }

    fn public(mut self) -> Self {
        self.access = Access::Public;
        self
    }

    fn with_query(mut self, query: Vec<(&'static str, String)>) -> Self {
        self.query = query;
        self
    }
}

/// The fixed probe sequence, in the order it runs.
pub fn standard_probes(settings: &Settings) -> Result<Vec<Probe>, SmokeError> {
    let text = SendMessage::text(&settings.recipient, &settings.text_message);
    let media = SendMessage::text(&settings.recipient, &settings.media_caption)
        .with_media(&settings.media_url);
    let batch = BatchSend::to_one_recipient(&settings.recipient, &settings.batch_messages);

    Ok(vec![
        Probe::get("2.1", "Listing available plans", "/plan/available").public(),
        Probe::get("2.2", "Checking current plan status", "/plan/status"),
        Probe::post(
            "2.3",
            "Sending plain text message",
            "/messages/send",
            serde_json::to_value(text)?,
        ),
        Probe::post(
            "2.4",
            "Sending message with image",
            "/messages/send",
            serde_json::to_value(media)?,
        ),
        Probe::post(
            "2.5",
            "Sending batch messages",
            "/messages/send-batch",
            serde_json::to_value(batch)?,
        ),
        Probe::get("2.6", "Querying message history", "/messages/history")
            .with_query(settings.history.to_pairs()),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequence_is_fixed() {
        let probes = standard_probes(&Settings::default()).unwrap();
        let routes: Vec<_> = probes
            .iter()
            .map(|p| (p.method.as_str(), p.path, p.access))
            .collect();

        assert_eq!(
            routes,
            vec![
                ("GET", "/plan/available", Access::Public),
                ("GET", "/plan/status", Access::Bearer),
                ("POST", "/messages/send", Access::Bearer),
                ("POST", "/messages/send", Access::Bearer),
                ("POST", "/messages/send-batch", Access::Bearer),
                ("GET", "/messages/history", Access::Bearer),
            ]
        );
    }

    #[test]
    fn only_media_probe_carries_media_url() {
        let settings = Settings::default();
        let probes = standard_probes(&settings).unwrap();

        let text = probes[2].body.as_ref().unwrap();
        let media = probes[3].body.as_ref().unwrap();

        assert!(text.get("media_url").is_none());
        assert_eq!(media["media_url"], settings.media_url.as_str());
        assert_eq!(media["to"], settings.recipient.as_str());
    }

    #[test]
    fn history_query_empty_by_default() {
        let probes = standard_probes(&Settings::default()).unwrap();
        assert!(probes[5].query.is_empty());
    }
}

//! Common test utilities for the prober integration tests.
#![allow(dead_code)]

use serde_json::json;
use smoke_tests::observability::init_test_tracing;
use smoke_tests::{Prober, RunOutcome, Settings, Transcript};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const TOKEN: &str = "abc";

/// Settings pointing at the mock service, everything else left at defaults.
pub fn settings_for(server: &MockServer) -> Settings {
    Settings {
        api_url: server.uri(),
        ..Settings::default()
    }
}

/// Mount a login endpoint that hands out `TOKEN`.
pub async fn mount_login(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "message": "Login successful",
            "token": TOKEN,
            "email": "test-user-1754071610@example.com"
        })))
        .expect(1)
        .mount(server)
        .await;
}

/// Mount every probe endpoint answering `200` with a `{"probe": <name>}` body.
///
/// Authenticated endpoints only match when the bearer token is present.
pub async fn mount_probes(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/plan/available"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "probe": "plans-available" })))
        .mount(server)
        .await;

    for (verb, route, name) in [
        ("GET", "/plan/status", "plan-status"),
        ("POST", "/messages/send", "message-sent"),
        ("POST", "/messages/send-batch", "batch-sent"),
        ("GET", "/messages/history", "history"),
    ] {
        Mock::given(method(verb))
            .and(path(route))
            .and(header("authorization", format!("Bearer {}", TOKEN).as_str()))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "probe": name })))
            .mount(server)
            .await;
    }
}

/// Run the prober against `settings` and return the outcome with the
/// uncolored transcript.
pub async fn run(settings: Settings) -> (RunOutcome, String) {
    init_test_tracing();

    let mut transcript = Transcript::new(Vec::new(), false);
    let outcome = Prober::new(settings)
        .run(&mut transcript)
        .await
        .expect("transcript buffer never fails");

    let text = String::from_utf8(transcript.into_inner()).expect("transcript is UTF-8");
    (outcome, text)
}

/// `(METHOD, path)` of every request the mock service saw, in arrival order.
pub async fn received_routes(server: &MockServer) -> Vec<(String, String)> {
    server
        .received_requests()
        .await
        .expect("request recording enabled")
        .iter()
        .map(|r| (r.method.to_string(), r.url.path().to_string()))
        .collect()
}

pub fn route(verb: &str, p: &str) -> (String, String) {
    (verb.to_string(), p.to_string())
}

/// The login call followed by the six probes.
pub fn full_sequence() -> Vec<(String, String)> {
    vec![
        route("POST", "/auth/login"),
        route("GET", "/plan/available"),
        route("GET", "/plan/status"),
        route("POST", "/messages/send"),
        route("POST", "/messages/send"),
        route("POST", "/messages/send-batch"),
        route("GET", "/messages/history"),
    ]
}

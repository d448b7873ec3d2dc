use secrecy::{ExposeSecret, Secret};
use serde_json::Value;

/// Bearer token captured from a successful login, reused for every
/// authenticated probe of the run.
#[derive(Debug)]
pub struct Session {
    token: Secret<String>,
}

impl Session {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: Secret::new(token.into()),
        }
    }

    /// Pull the token out of a login response body.
    ///
    /// Returns `None` unless `token` is present and a non-empty string.
    pub fn from_login_body(body: &Value) -> Option<Self> {
        body.get("token")
            .and_then(Value::as_str)
            .filter(|token| !token.is_empty())
            .map(Self::new)
    }

    pub fn token(&self) -> &str {
        self.token.expose_secret()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn token_read_from_login_body() {
        let body = json!({ "message": "ok", "token": "abc", "email": "a@b.c" });
        let session = Session::from_login_body(&body).unwrap();
        assert_eq!(session.token(), "abc");
    }

    #[test]
    fn missing_or_empty_token_rejected() {
        assert!(Session::from_login_body(&json!({ "message": "ok" })).is_none());
        assert!(Session::from_login_body(&json!({ "token": "" })).is_none());
        assert!(Session::from_login_body(&json!({ "token": null })).is_none());
        assert!(Session::from_login_body(&json!([1, 2])).is_none());
    }

    #[test]
    fn debug_does_not_leak_token() {
        let session = Session::new("very-secret-jwt");
        assert!(!format!("{:?}", session).contains("very-secret-jwt"));
    }
}

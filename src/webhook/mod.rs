//! Outbound webhook notification for filedrop.
//!
//! A single POST carrying an email address and a fixed preview string to
//! a configured endpoint; the raw JSON response is handed back to the
//! caller. No retry; the HTTP client's default timeout behavior applies.

use reqwest::Client;
use serde_json::{json, Value};

use crate::{FileDropError, Result};

/// Check an email address against the accepted shape.
///
/// Accepts `local@domain.tld`: exactly one `@`, a non-empty local part, a
/// dot in the domain with non-empty parts around it, and no whitespace.
/// No further RFC validation is attempted.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }

    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    !host.is_empty() && !tld.is_empty()
}

/// Webhook notifier bound to one endpoint.
pub struct WebhookNotifier {
    client: Client,
    endpoint: String,
    preview: String,
}

impl WebhookNotifier {
    /// Create a notifier for the given endpoint.
    pub fn new(endpoint: impl Into<String>, preview: impl Into<String>) -> Result<Self> {
        let endpoint = endpoint.into();
        url::Url::parse(&endpoint)
            .map_err(|e| FileDropError::Webhook(format!("invalid endpoint URL: {e}")))?;

        Ok(Self {
            client: Client::new(),
            endpoint,
            preview: preview.into(),
        })
    }

    /// Endpoint this notifier posts to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Send one notification carrying the given sender address.
    ///
    /// Returns the endpoint's JSON response verbatim.
    pub async fn send(&self, email: &str) -> Result<Value> {
        if !is_valid_email(email) {
            return Err(FileDropError::Validation(
                "invalid email address".to_string(),
            ));
        }

        let body = json!({
            "payload": {
                "sender": email,
                "preview": self.preview,
            },
            "out": "message",
        });

        let response = self
            .client
            .post(&self.endpoint)
            .query(&[("stream", "false")])
            .json(&body)
            .send()
            .await
            .map_err(|e| FileDropError::Webhook(format!("request failed: {e}")))?;

        if !response.status().is_success() {
            return Err(FileDropError::Webhook(format!(
                "HTTP error: {}",
                response.status()
            )));
        }

        response
            .json()
            .await
            .map_err(|e| FileDropError::Webhook(format!("invalid JSON response: {e}")))
    }
}

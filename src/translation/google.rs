//! Google web translation provider.
//!
//! Uses the free `translate_a/single` endpoint with auto-detected source
//! language, one paragraph per request. No credentials are involved; in
//! exchange the service is strictly best-effort.

use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;

use super::translator::{ProgressFn, REQUEST_TIMEOUT_SECS, Translator, report_progress};

const ENDPOINT: &str = "https://translate.googleapis.com/translate_a/single";

// The endpoint rejects clients without a browser-looking UA.
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

/// Best-effort translator over the public Google web endpoint.
///
/// If the HTTP client cannot be constructed the provider degrades to
/// passthrough: every call returns its input unchanged and no network is
/// attempted. Degradation is visible through [`Self::is_degraded`] but is
/// transparent to callers of `translate_many`.
#[derive(Debug)]
pub struct GoogleWebTranslator {
    client: Option<Client>,
}

impl GoogleWebTranslator {
    pub fn new() -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .user_agent(USER_AGENT)
            .build()
            .ok();
        Self { client }
    }

    /// Builds the provider in passthrough mode.
    pub const fn degraded() -> Self {
        Self { client: None }
    }

    /// Returns `true` if the provider is in passthrough mode.
    pub const fn is_degraded(&self) -> bool {
        self.client.is_none()
    }

    async fn translate_once(&self, text: &str, target: &str) -> String {
        if text.trim().is_empty() {
            return text.to_string();
        }
        let Some(client) = &self.client else {
            return text.to_string();
        };
        match request(client, text, target).await {
            Some(translated) if !translated.is_empty() => translated,
            _ => text.to_string(),
        }
    }
}

impl Default for GoogleWebTranslator {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Translator for GoogleWebTranslator {
    async fn translate_many(
        &self,
        texts: &[String],
        target: &str,
        on_progress: Option<ProgressFn<'_>>,
    ) -> Result<Vec<String>> {
        let total = texts.len();
        let mut results = Vec::with_capacity(total);
        for (done, text) in texts.iter().enumerate() {
            results.push(self.translate_once(text, target).await);
            report_progress(on_progress, done + 1, total);
        }
        Ok(results)
    }
}

async fn request(client: &Client, text: &str, target: &str) -> Option<String> {
    let response = client
        .get(ENDPOINT)
        .query(&[
            ("client", "gtx"),
            ("sl", "auto"),
            ("tl", target),
            ("dt", "t"),
            ("q", text),
        ])
        .send()
        .await
        .ok()?;
    let body: Value = response.json().await.ok()?;
    extract_translation(&body)
}

/// Extracts the translated text from the nested-array response shape
/// `[[["translated", "original", ...], ...], ...]`.
fn extract_translation(body: &Value) -> Option<String> {
    let sentences = body.get(0)?.as_array()?;
    let mut out = String::new();
    for sentence in sentences {
        if let Some(part) = sentence.get(0).and_then(Value::as_str) {
            out.push_str(part);
        }
    }
    if out.is_empty() { None } else { Some(out) }
}

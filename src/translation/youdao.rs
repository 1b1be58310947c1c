//! Youdao OpenAPI provider.
//!
//! Endpoint: `https://openapi.youdao.com/api`, `signType=v3`.
//! Signature: `SHA256(appKey + input + salt + curtime + appSecret)` where
//! `input` is the text itself for short texts and a truncated form
//! (first 10 chars + length + last 10 chars) beyond 20 characters.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use sha2::{Digest, Sha256};

use super::language;
use super::translator::{ProgressFn, REQUEST_TIMEOUT_SECS, Translator, random_salt, report_progress};

const ENDPOINT: &str = "https://openapi.youdao.com/api";

/// Translator backed by the Youdao OpenAPI (v3 signing).
#[derive(Debug)]
pub struct YoudaoTranslator {
    app_key: String,
    app_secret: String,
    client: Client,
}

#[derive(Debug, Deserialize)]
struct YoudaoResponse {
    #[serde(rename = "errorCode")]
    error_code: Option<String>,
    #[serde(default)]
    translation: Vec<String>,
}

impl YoudaoTranslator {
    pub fn new(app_key: String, app_secret: String) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .context("Failed to build HTTP client for the youdao provider")?;
        Ok(Self {
            app_key,
            app_secret,
            client,
        })
    }

    fn sign(&self, text: &str, salt: &str, curtime: &str) -> String {
        let raw = format!(
            "{}{}{}{}{}",
            self.app_key,
            signing_input(text),
            salt,
            curtime,
            self.app_secret
        );
        let mut hasher = Sha256::new();
        hasher.update(raw.as_bytes());
        hex::encode(hasher.finalize())
    }

    async fn translate_once(&self, text: &str, target: &str) -> String {
        if text.trim().is_empty() {
            return text.to_string();
        }
        let salt = random_salt();
        let curtime = unix_timestamp();
        let sign = self.sign(text, &salt, &curtime);
        let params = [
            ("q", text),
            ("from", "auto"),
            ("to", language::youdao_lang(target)),
            ("appKey", self.app_key.as_str()),
            ("salt", salt.as_str()),
            ("signType", "v3"),
            ("curtime", curtime.as_str()),
            ("sign", sign.as_str()),
        ];
        match self.request(&params).await {
            Some(translated) => translated,
            None => text.to_string(),
        }
    }

    async fn request(&self, params: &[(&str, &str)]) -> Option<String> {
        // .form sets application/x-www-form-urlencoded as required.
        let response = self
            .client
            .post(ENDPOINT)
            .form(params)
            .send()
            .await
            .ok()?;
        let body = response.text().await.ok()?;
        extract_translation(&body)
    }
}

#[async_trait]
impl Translator for YoudaoTranslator {
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

/// The `input` value of the v3 signature. Texts over 20 characters are
/// truncated to `first10 + length + last10`; counts are characters, not
/// bytes, so multi-byte text slices cleanly.
fn signing_input(text: &str) -> String {
    let count = text.chars().count();
    if count <= 20 {
        return text.to_string();
    }
    let head: String = text.chars().take(10).collect();
    let tail: String = text.chars().skip(count - 10).collect();
    format!("{head}{count}{tail}")
}

fn unix_timestamp() -> String {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or_else(|_| "0".to_string(), |d| d.as_secs().to_string())
}

/// Success requires `errorCode == "0"`; the result is the first entry of
/// the translation list.
fn extract_translation(body: &str) -> Option<String> {
    let response: YoudaoResponse = serde_json::from_str(body).ok()?;
    if response.error_code.as_deref() != Some("0") {
        return None;
    }
    let first = response.translation.into_iter().next()?;
    if first.is_empty() { None } else { Some(first) }
}

//! Baidu Trans API provider.
//!
//! Endpoint: `https://fanyi-api.baidu.com/api/trans/vip/translate`
//! Signature: `MD5(appid + q + salt + key)`, lowercase hex.

use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use md5::{Digest, Md5};
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;

use super::language;
use super::translator::{ProgressFn, REQUEST_TIMEOUT_SECS, Translator, random_salt, report_progress};

const ENDPOINT: &str = "https://fanyi-api.baidu.com/api/trans/vip/translate";

/// Translator backed by the Baidu Trans API.
#[derive(Debug)]
pub struct BaiduTranslator {
    appid: String,
    key: String,
    client: Client,
}

#[derive(Debug, Deserialize)]
struct BaiduResponse {
    // Presence alone marks the response as an error; the value is not
    // inspected and the vendor serializes it inconsistently anyway.
    error_code: Option<Value>,
    #[serde(default)]
    trans_result: Vec<TransResultItem>,
}

#[derive(Debug, Deserialize)]
struct TransResultItem {
    dst: Option<String>,
}

impl BaiduTranslator {
    pub fn new(appid: String, key: String) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .context("Failed to build HTTP client for the baidu provider")?;
        Ok(Self { appid, key, client })
    }

    fn sign(&self, text: &str, salt: &str) -> String {
        let raw = format!("{}{}{}{}", self.appid, text, salt, self.key);
        let mut hasher = Md5::new();
        hasher.update(raw.as_bytes());
        hex::encode(hasher.finalize())
    }

    async fn translate_once(&self, text: &str, target: &str) -> String {
        if text.trim().is_empty() {
            return text.to_string();
        }
        let salt = random_salt();
        let sign = self.sign(text, &salt);
        let params = [
            ("q", text),
            ("from", "auto"),
            ("to", language::baidu_lang(target)),
            ("appid", self.appid.as_str()),
            ("salt", salt.as_str()),
            ("sign", sign.as_str()),
        ];
        match self.request(&params).await {
            Some(translated) => translated,
            None => text.to_string(),
        }
    }

    async fn request(&self, params: &[(&str, &str)]) -> Option<String> {
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
impl Translator for BaiduTranslator {
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

/// Pulls the first translation out of a response body, or `None` for any
/// error shape (error indicator present, no results, empty destination).
fn extract_translation(body: &str) -> Option<String> {
    let response: BaiduResponse = serde_json::from_str(body).ok()?;
    if response.error_code.is_some() {
        return None;
    }
    let dst = response.trans_result.into_iter().next()?.dst?;
    if dst.is_empty() { None } else { Some(dst) }
}

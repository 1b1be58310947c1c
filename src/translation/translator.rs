//! The translator capability and provider construction.

use anyhow::{Result, bail};
use async_trait::async_trait;
use rand::Rng;

use crate::config::AppConfig;
use crate::ui::Style;

use super::baidu::BaiduTranslator;
use super::google::GoogleWebTranslator;
use super::youdao::YoudaoTranslator;

/// Seconds before a provider request is abandoned.
pub const REQUEST_TIMEOUT_SECS: u64 = 15;

/// Progress observer invoked after each item completes with `(done, total)`.
pub type ProgressFn<'a> = &'a (dyn Fn(usize, usize) + Send + Sync);

/// A translation backend.
///
/// All implementations share one contract:
///
/// - The output has the same length and order as the input.
/// - An item whose translation fails for any reason (network error, vendor
///   error response, empty upstream result) resolves to its own source text;
///   a single bad item never aborts the batch.
/// - An item that is empty after trimming is returned unchanged without
///   touching the network.
/// - `on_progress` is called once per completed item, whether the item
///   translated or fell back.
///
/// The `Err` branch of the return value is reserved for batch-level failures
/// outside per-item handling; the shipped providers return `Ok` under all
/// normal provider errors.
#[async_trait]
pub trait Translator: Send + Sync + std::fmt::Debug {
    async fn translate_many(
        &self,
        texts: &[String],
        target: &str,
        on_progress: Option<ProgressFn<'_>>,
    ) -> Result<Vec<String>>;
}

/// Constructs the provider selected by the configuration.
///
/// Credentials are checked here, before any batch starts; the provider
/// constructors themselves assume they are present.
pub fn build_translator(config: &AppConfig) -> Result<Box<dyn Translator>> {
    match config.provider.as_str() {
        "google" => {
            let provider = GoogleWebTranslator::new();
            if provider.is_degraded() {
                crate::warn!(
                    "{} google provider degraded to passthrough (HTTP client unavailable)",
                    Style::warning("Warning:")
                );
            }
            Ok(Box::new(provider))
        }
        "baidu" => {
            if config.baidu_appid.trim().is_empty() || config.baidu_key.trim().is_empty() {
                bail!(
                    "The baidu provider requires an AppID and key\n\n\
                     Run 'fanyi configure' to set baidu_appid and baidu_key."
                );
            }
            Ok(Box::new(BaiduTranslator::new(
                config.baidu_appid.clone(),
                config.baidu_key.clone(),
            )?))
        }
        "youdao" => {
            if config.youdao_app_key.trim().is_empty() || config.youdao_app_secret.trim().is_empty()
            {
                bail!(
                    "The youdao provider requires an AppKey and AppSecret\n\n\
                     Run 'fanyi configure' to set youdao_app_key and youdao_app_secret."
                );
            }
            Ok(Box::new(YoudaoTranslator::new(
                config.youdao_app_key.clone(),
                config.youdao_app_secret.clone(),
            )?))
        }
        other => bail!(
            "Unknown translation provider: '{other}'\n\n\
             Valid providers: google, baidu, youdao"
        ),
    }
}

/// Returns a random six-digit salt for request signing.
pub(crate) fn random_salt() -> String {
    rand::rng().random_range(100_000..=999_999).to_string()
}

/// Invokes the progress observer, if any.
pub(crate) fn report_progress(on_progress: Option<ProgressFn<'_>>, done: usize, total: usize) {
    if let Some(observer) = on_progress {
        observer(done, total);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn config_with(provider: &str) -> AppConfig {
        AppConfig {
            provider: provider.to_string(),
            ..AppConfig::default()
        }
    }

    #[test]
    fn test_build_google_needs_no_credentials() {
        assert!(build_translator(&config_with("google")).is_ok());
    }

    #[test]
    fn test_build_baidu_without_credentials_fails() {
        let result = build_translator(&config_with("baidu"));
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("AppID"));
    }

    #[test]
    fn test_build_youdao_without_credentials_fails() {
        let result = build_translator(&config_with("youdao"));
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("AppKey"));
    }

    #[test]
    fn test_build_baidu_with_credentials() {
        let config = AppConfig {
            provider: "baidu".to_string(),
            baidu_appid: "20240101000000001".to_string(),
            baidu_key: "secret".to_string(),
            ..AppConfig::default()
        };
        assert!(build_translator(&config).is_ok());
    }

    #[test]
    fn test_build_unknown_provider_fails() {
        let result = build_translator(&config_with("deepl"));
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("deepl"));
    }

    #[test]
    fn test_random_salt_is_six_digits() {
        for _ in 0..100 {
            let salt = random_salt();
            assert_eq!(salt.len(), 6);
            let value: u32 = salt.parse().unwrap();
            assert!((100_000..=999_999).contains(&value));
        }
    }
}

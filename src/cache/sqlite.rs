use anyhow::{Context, Result};
use rusqlite::Connection;
use sha2::{Digest, Sha256};
use std::path::PathBuf;

use crate::paths;

/// SQLite-backed cache of whole-document translations.
///
/// A cache entry covers one `(document, target language, provider)` triple;
/// the value is the ordered list of translated paragraphs.
pub struct CacheManager {
    db_path: PathBuf,
}

impl CacheManager {
    pub fn new() -> Result<Self> {
        let cache_dir = paths::cache_dir();

        std::fs::create_dir_all(&cache_dir).with_context(|| {
            format!("Failed to create cache directory: {}", cache_dir.display())
        })?;

        let db_path = cache_dir.join("translations.db");
        let manager = Self { db_path };

        manager.init_db()?;

        Ok(manager)
    }

    fn init_db(&self) -> Result<()> {
        let conn = self.connect()?;

        conn.execute(
            "CREATE TABLE IF NOT EXISTS translations (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                cache_key TEXT UNIQUE NOT NULL,
                source_text TEXT NOT NULL,
                translated_json TEXT NOT NULL,
                target_language TEXT NOT NULL,
                provider TEXT NOT NULL,
                created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP,
                accessed_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
            )",
            [],
        )
        .context("Failed to create translations table")?;

        conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_cache_key ON translations(cache_key)",
            [],
        )
        .context("Failed to create index")?;

        Ok(())
    }

    fn connect(&self) -> Result<Connection> {
        Connection::open(&self.db_path)
            .with_context(|| format!("Failed to open cache database: {}", self.db_path.display()))
    }

    /// Looks up the translated paragraphs for a document.
    pub fn get(
        &self,
        source_text: &str,
        target_language: &str,
        provider: &str,
    ) -> Result<Option<Vec<String>>> {
        let cache_key = cache_key(source_text, target_language, provider);
        let conn = self.connect()?;

        let mut stmt =
            conn.prepare("SELECT translated_json FROM translations WHERE cache_key = ?1")?;

        let raw: Option<String> = stmt.query_row([&cache_key], |row| row.get(0)).ok();

        let Some(raw) = raw else {
            return Ok(None);
        };

        conn.execute(
            "UPDATE translations SET accessed_at = CURRENT_TIMESTAMP WHERE cache_key = ?1",
            [&cache_key],
        )?;

        let paragraphs: Vec<String> =
            serde_json::from_str(&raw).context("Corrupt cache entry")?;
        Ok(Some(paragraphs))
    }

    /// Stores the translated paragraphs for a document.
    pub fn put(
        &self,
        source_text: &str,
        target_language: &str,
        provider: &str,
        translated: &[String],
    ) -> Result<()> {
        let cache_key = cache_key(source_text, target_language, provider);
        let translated_json =
            serde_json::to_string(translated).context("Failed to serialize translation")?;
        let conn = self.connect()?;

        conn.execute(
            "INSERT OR REPLACE INTO translations
             (cache_key, source_text, translated_json, target_language, provider)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            [
                cache_key.as_str(),
                source_text,
                translated_json.as_str(),
                target_language,
                provider,
            ],
        )
        .context("Failed to insert translation into cache")?;

        Ok(())
    }
}

/// Cache key over everything that affects the output.
fn cache_key(source_text: &str, target_language: &str, provider: &str) -> String {
    let input = serde_json::json!({
        "source_text": source_text,
        "target_language": target_language,
        "provider": provider,
    });

    let mut hasher = Sha256::new();
    hasher.update(input.to_string().as_bytes());
    hex::encode(hasher.finalize())
}

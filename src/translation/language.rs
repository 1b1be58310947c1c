//! Canonical language codes and per-provider code mapping.
//!
//! The application speaks its own small language vocabulary; each provider
//! has its own. The table below maps a canonical code to the code each
//! vendor API expects.

use anyhow::Result;

use crate::ui::Style;

/// One entry of the language table.
pub struct LanguageEntry {
    /// Human-readable display name.
    pub label: &'static str,
    /// Canonical code used throughout the application.
    pub code: &'static str,
    /// Code the Baidu Trans API expects.
    pub baidu: &'static str,
    /// Code the Youdao OpenAPI expects.
    pub youdao: &'static str,
}

/// Supported target languages: (label, canonical, baidu, youdao).
pub const LANGUAGES: &[LanguageEntry] = &[
    LanguageEntry {
        label: "Simplified Chinese",
        code: "zh-CN",
        baidu: "zh",
        youdao: "zh-CHS",
    },
    LanguageEntry {
        label: "Traditional Chinese",
        code: "zh-TW",
        baidu: "cht",
        youdao: "zh-CHT",
    },
    LanguageEntry {
        label: "English",
        code: "en",
        baidu: "en",
        youdao: "en",
    },
    LanguageEntry {
        label: "Japanese",
        code: "ja",
        baidu: "jp",
        youdao: "ja",
    },
    LanguageEntry {
        label: "Korean",
        code: "ko",
        baidu: "kor",
        youdao: "ko",
    },
    LanguageEntry {
        label: "French",
        code: "fr",
        baidu: "fra",
        youdao: "fr",
    },
    LanguageEntry {
        label: "German",
        code: "de",
        baidu: "de",
        youdao: "de",
    },
    LanguageEntry {
        label: "Spanish",
        code: "es",
        baidu: "spa",
        youdao: "es",
    },
    LanguageEntry {
        label: "Russian",
        code: "ru",
        baidu: "ru",
        youdao: "ru",
    },
    LanguageEntry {
        label: "Arabic",
        code: "ar",
        baidu: "ara",
        youdao: "ar",
    },
    LanguageEntry {
        label: "Italian",
        code: "it",
        baidu: "it",
        youdao: "it",
    },
    LanguageEntry {
        label: "Portuguese",
        code: "pt",
        baidu: "pt",
        youdao: "pt",
    },
];

/// Maps a canonical code to the Baidu code.
///
/// Unknown codes pass through unchanged so codes the table does not know
/// yet can still be sent to the vendor (which may reject them).
pub fn baidu_lang(canonical: &str) -> &str {
    LANGUAGES
        .iter()
        .find(|entry| entry.code == canonical)
        .map_or(canonical, |entry| entry.baidu)
}

/// Maps a canonical code to the Youdao code.
///
/// Same passthrough rule as [`baidu_lang`].
pub fn youdao_lang(canonical: &str) -> &str {
    LANGUAGES
        .iter()
        .find(|entry| entry.code == canonical)
        .map_or(canonical, |entry| entry.youdao)
}

/// Returns `true` if the canonical code is in the table.
pub fn is_known_language(canonical: &str) -> bool {
    LANGUAGES.iter().any(|entry| entry.code == canonical)
}

/// Prints the language table to stdout.
pub fn print_languages() {
    println!("{}", Style::header("Supported target languages"));
    for entry in LANGUAGES {
        println!(
            "  {:6} {}",
            Style::code(entry.code),
            Style::secondary(entry.label)
        );
    }
}

/// Validates that the given canonical language code is in the table.
///
/// # Errors
///
/// Returns an error if the language code is unknown. Used by interactive
/// selection; the mapping functions themselves never reject a code.
pub fn validate_language(lang: &str) -> Result<()> {
    if is_known_language(lang) {
        Ok(())
    } else {
        anyhow::bail!(
            "Invalid language code: '{lang}'\n\n\
             Valid language codes: zh-CN, en, ja, ko, fr, de, ...\n\
             Run 'fanyi languages' to see all supported codes."
        )
    }
}

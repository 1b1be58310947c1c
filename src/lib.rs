//! # fanyi - Document Paragraph Translation CLI
//!
//! `fanyi` is a command-line tool that loads a document, splits it into
//! paragraphs, and translates every paragraph through one of several
//! interchangeable translation providers.
//!
//! ## Features
//!
//! - **Paragraph batches**: documents are split on blank lines and translated
//!   paragraph by paragraph, with per-paragraph progress
//! - **Multiple providers**: the free Google web endpoint, the Baidu Trans API
//!   (MD5-signed), and the Youdao OpenAPI (SHA-256 v3 signing)
//! - **Failure isolation**: a paragraph that fails to translate falls back to
//!   its source text instead of aborting the batch
//! - **Caching**: avoid redundant API calls with SQLite-based caching
//!
//! ## Quick Start
//!
//! ```bash
//! # Translate a file to Simplified Chinese
//! fanyi --to zh-CN ./notes.txt
//!
//! # Translate from stdin
//! cat report.txt | fanyi --to en
//!
//! # Pick a provider for this run
//! fanyi --provider baidu ./notes.txt
//!
//! # Show source and translation together
//! fanyi --side-by-side ./notes.txt
//! ```
//!
//! ## Configuration
//!
//! Settings are stored in `~/.config/fanyi/config.toml`:
//!
//! ```toml
//! provider = "youdao"
//! to = "zh-CN"
//! youdao_app_key = "..."
//! youdao_app_secret = "..."
//! ```

/// Translation cache management using `SQLite`.
pub mod cache;

/// Command-line interface definitions and handlers.
pub mod cli;

/// Configuration file management and provider credentials.
pub mod config;

/// Document loading and paragraph splitting.
pub mod document;

/// File system utilities.
pub mod fs;

/// Global output configuration (quiet mode, colors, stderr/stdout routing).
pub mod output;

/// XDG-style path utilities for configuration and cache.
pub mod paths;

/// Translation providers, language codes, and the batch runner.
pub mod translation;

/// Terminal UI components (progress bar, colors).
pub mod ui;

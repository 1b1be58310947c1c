use anyhow::{Result, bail};
use std::io::{self, Write};

use crate::cache::CacheManager;
use crate::config::ConfigManager;
use crate::document::{DocumentReader, split_into_paragraphs};
use crate::fs::atomic_write;
use crate::translation::{
    BatchRunner, TranslateEvent, TranslateTask, build_translator, is_known_language,
};
use crate::ui::{BatchProgress, Style};

pub struct TranslateOptions {
    pub file: Option<String>,
    pub to: Option<String>,
    pub provider: Option<String>,
    pub side_by_side: bool,
    pub output: Option<String>,
    pub no_cache: bool,
}

pub async fn run_translate(options: TranslateOptions) -> Result<()> {
    let manager = ConfigManager::new();
    let mut config = manager.load_or_default();
    if let Some(provider) = &options.provider {
        config.provider = provider.clone();
    }
    let target = options.to.clone().unwrap_or_else(|| config.to.clone());

    if !is_known_language(&target) {
        // Unknown codes still go to the vendor; it gets to reject them.
        crate::warn!(
            "{} Unknown language code '{target}'; sending it to the provider as-is",
            Style::warning("Warning:")
        );
    }

    let text = DocumentReader::read(options.file.as_deref())?;
    let paragraphs = split_into_paragraphs(&text);
    if paragraphs.is_empty() {
        bail!("Error: Input is empty");
    }

    let source_text = paragraphs.join("\n\n");

    let cache_manager = CacheManager::new()?;
    if !options.no_cache
        && let Some(cached) = cache_manager.get(&source_text, &target, &config.provider)?
    {
        crate::status!("Using cached translation");
        return emit(&paragraphs, &cached, &options);
    }

    let translator = build_translator(&config)?;

    crate::status!(
        "Translating {} paragraphs to {} via {}",
        paragraphs.len(),
        Style::code(&target),
        Style::value(&config.provider)
    );

    let task = TranslateTask {
        paragraphs: paragraphs.clone(),
        target_lang: target.clone(),
    };
    let mut events = BatchRunner::new(task, translator).start();

    let progress = BatchProgress::new(paragraphs.len() as u64);
    let mut outcome = None;
    while let Some(event) = events.recv().await {
        match event {
            TranslateEvent::Progress { done, .. } => progress.set(done as u64),
            TranslateEvent::Completed(results) => outcome = Some(Ok(results)),
            TranslateEvent::Failed(message) => outcome = Some(Err(message)),
            TranslateEvent::Finished => {
                progress.finish();
                break;
            }
        }
    }

    let translated = match outcome {
        Some(Ok(translated)) => translated,
        Some(Err(message)) => bail!("Translation failed: {message}"),
        None => bail!("Translation worker exited without reporting a result"),
    };

    if !options.no_cache {
        cache_manager.put(&source_text, &target, &config.provider, &translated)?;
    }

    emit(&paragraphs, &translated, &options)
}

/// Renders the result document: translated paragraphs separated by blank
/// lines, or source/translation pairs when `side_by_side` is set.
fn render(source: &[String], translated: &[String], side_by_side: bool) -> String {
    let blocks: Vec<String> = if side_by_side {
        source
            .iter()
            .zip(translated.iter())
            .map(|(src, dst)| format!("{src}\n{dst}"))
            .collect()
    } else {
        translated.to_vec()
    };
    let mut rendered = blocks.join("\n\n");
    rendered.push('\n');
    rendered
}

fn emit(source: &[String], translated: &[String], options: &TranslateOptions) -> Result<()> {
    let rendered = render(source, translated, options.side_by_side);
    if let Some(path) = &options.output {
        atomic_write(path, &rendered)?;
        crate::status!(
            "{} Wrote translation to {}",
            Style::success("✓"),
            Style::secondary(path)
        );
    } else {
        print!("{rendered}");
        io::stdout().flush()?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paragraphs(items: &[&str]) -> Vec<String> {
        items.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_render_translation_only() {
        let source = paragraphs(&["Hello", "Good bye"]);
        let translated = paragraphs(&["你好", "再见"]);

        assert_eq!(render(&source, &translated, false), "你好\n\n再见\n");
    }

    #[test]
    fn test_render_side_by_side_pairs() {
        let source = paragraphs(&["Hello", "Good bye"]);
        let translated = paragraphs(&["你好", "再见"]);

        assert_eq!(
            render(&source, &translated, true),
            "Hello\n你好\n\nGood bye\n再见\n"
        );
    }

    #[test]
    fn test_render_single_paragraph() {
        let source = paragraphs(&["Hello"]);
        let translated = paragraphs(&["你好"]);

        assert_eq!(render(&source, &translated, false), "你好\n");
        assert_eq!(render(&source, &translated, true), "Hello\n你好\n");
    }
}

//! Configure command handler for provider selection and credentials.

use anyhow::Result;
use inquire::{Password, PasswordDisplayMode, Select, Text};

use crate::config::ConfigManager;
use crate::translation::LANGUAGES;
use crate::ui::{Style, handle_prompt_cancellation};

/// Providers, as (identifier, menu label).
const PROVIDERS: &[(&str, &str)] = &[
    ("google", "Google Web (no credentials)"),
    ("baidu", "Baidu Trans API (AppID / Key)"),
    ("youdao", "Youdao OpenAPI (AppKey / AppSecret)"),
];

/// Runs the configure command.
///
/// With `show`, prints the current configuration (credentials are only
/// reported as present or absent, never echoed); otherwise walks through
/// provider selection and credential entry interactively.
pub fn run_configure(show: bool) -> Result<()> {
    if show {
        print_config();
        return Ok(());
    }
    handle_prompt_cancellation(run_configure_inner)
}

fn print_config() {
    let manager = ConfigManager::new();
    let config = manager.load_or_default();

    println!("{}", Style::header("Current configuration"));
    println!(
        "  {}           {}",
        Style::label("provider"),
        Style::value(&config.provider)
    );
    println!("  {}                 {}", Style::label("to"), Style::code(&config.to));
    println!(
        "  {}        {}",
        Style::label("baidu_appid"),
        set_marker(&config.baidu_appid)
    );
    println!(
        "  {}          {}",
        Style::label("baidu_key"),
        set_marker(&config.baidu_key)
    );
    println!(
        "  {}     {}",
        Style::label("youdao_app_key"),
        set_marker(&config.youdao_app_key)
    );
    println!(
        "  {}  {}",
        Style::label("youdao_app_secret"),
        set_marker(&config.youdao_app_secret)
    );
    println!();
    println!(
        "{}",
        Style::secondary(format!("Config file: {}", manager.config_path().display()))
    );
}

fn set_marker(value: &str) -> String {
    if value.trim().is_empty() {
        Style::secondary("(not set)")
    } else {
        Style::success("(set)")
    }
}

fn run_configure_inner() -> Result<()> {
    let manager = ConfigManager::new();
    let mut config = manager.load_or_default();

    let provider = select_provider(&config.provider)?;
    config.provider = provider.clone();

    match provider.as_str() {
        "baidu" => {
            config.baidu_appid = prompt_identifier("Baidu AppID:", &config.baidu_appid)?;
            config.baidu_key = prompt_secret("Baidu key:", &config.baidu_key)?;
        }
        "youdao" => {
            config.youdao_app_key = prompt_identifier("Youdao AppKey:", &config.youdao_app_key)?;
            config.youdao_app_secret = prompt_secret("Youdao AppSecret:", &config.youdao_app_secret)?;
        }
        _ => {}
    }

    config.to = select_target_language(&config.to)?;

    manager.save(&config)?;

    println!();
    println!(
        "{} Configuration saved to {}",
        Style::success("✓"),
        Style::secondary(manager.config_path().display().to_string())
    );

    Ok(())
}

fn select_provider(current: &str) -> Result<String> {
    let options: Vec<&str> = PROVIDERS.iter().map(|(_, label)| *label).collect();
    let default_index = PROVIDERS
        .iter()
        .position(|(id, _)| *id == current)
        .unwrap_or(0);

    let selection = Select::new("Translation provider:", options)
        .with_starting_cursor(default_index)
        .prompt()?;

    let id = PROVIDERS
        .iter()
        .find(|(_, label)| *label == selection)
        .map_or(current, |(id, _)| *id);

    Ok(id.to_string())
}

fn prompt_identifier(message: &str, current: &str) -> Result<String> {
    let mut prompt = Text::new(message);
    if !current.is_empty() {
        prompt = prompt.with_default(current);
    }
    Ok(prompt.prompt()?.trim().to_string())
}

fn prompt_secret(message: &str, current: &str) -> Result<String> {
    let help = if current.is_empty() {
        "Stored in the config file only"
    } else {
        "Leave empty to keep the current value"
    };
    let entered = Password::new(message)
        .with_display_mode(PasswordDisplayMode::Masked)
        .without_confirmation()
        .with_help_message(help)
        .prompt()?;

    if entered.trim().is_empty() {
        Ok(current.to_string())
    } else {
        Ok(entered.trim().to_string())
    }
}

fn select_target_language(current: &str) -> Result<String> {
    let options: Vec<String> = LANGUAGES
        .iter()
        .map(|entry| format!("{} - {}", entry.code, entry.label))
        .collect();

    let default_index = LANGUAGES
        .iter()
        .position(|entry| entry.code == current)
        .unwrap_or(0);

    let selection = Select::new("Default target language:", options)
        .with_starting_cursor(default_index)
        .prompt()?;

    // Extract code from "code - Name" format
    let code = selection.split(" - ").next().unwrap_or(&selection);

    Ok(code.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_table_covers_all_backends() {
        let ids: Vec<&str> = PROVIDERS.iter().map(|(id, _)| *id).collect();
        assert_eq!(ids, vec!["google", "baidu", "youdao"]);
    }

    #[test]
    fn test_set_marker_never_echoes_value() {
        let marker = set_marker("super-secret-key");
        assert!(!marker.contains("super-secret-key"));
    }
}

//! `ideagen config` subcommands.

use std::collections::BTreeMap;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

use anyhow::{anyhow, Result};
use ideagen_core::{mask_key, ApiCredential, API_KEY_ENV};

use super::effective_settings;
use crate::cli::ConfigAction;
use crate::output;

pub async fn handle(action: ConfigAction) -> Result<()> {
    match action {
        ConfigAction::Api => configure_api(),
        ConfigAction::Show { api_key } => show(api_key.as_deref()),
    }
}

fn configure_api() -> Result<()> {
    output::header("Configure OpenAI");
    println!("  Chat Completions key used for idea generation");
    println!();

    if let Ok(current) = std::env::var(API_KEY_ENV) {
        if !current.trim().is_empty() {
            println!("  Current: {}", mask_key(current.trim()));
            println!();
        }
    }

    let key = prompt_api_key()?;
    if key.trim().is_empty() {
        output::warning("No key entered, cancelled.");
        return Ok(());
    }

    let config_path = crate::global_env_path()
        .ok_or_else(|| anyhow!("Could not find home directory"))?;
    if let Some(dir) = config_path.parent() {
        fs::create_dir_all(dir)?;
    }
    save_api_key(&config_path, API_KEY_ENV, key.trim())?;

    output::success(&format!("Saved {} to {}", API_KEY_ENV, config_path.display()));
    output::dim("ideagen reads this file on startup; variables already set in your shell take precedence.");
    Ok(())
}

fn prompt_api_key() -> Result<String> {
    use crossterm::{
        event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
        terminal,
    };

    println!("Enter API key for OpenAI:");
    print!("> ");
    io::stdout().flush()?;

    let mut key = String::new();
    terminal::enable_raw_mode()?;

    let outcome = (|| -> Result<Option<String>> {
        loop {
            if !event::poll(std::time::Duration::from_millis(100))? {
                continue;
            }
            let Event::Key(k) = event::read()? else {
                continue;
            };
            if k.kind != KeyEventKind::Press {
                continue;
            }
            match k.code {
                KeyCode::Enter => return Ok(Some(std::mem::take(&mut key))),
                KeyCode::Esc => return Ok(None),
                KeyCode::Backspace => {
                    if key.pop().is_some() {
                        print!("\x08 \x08");
                        io::stdout().flush()?;
                    }
                }
                KeyCode::Char('c') if k.modifiers.contains(KeyModifiers::CONTROL) => {
                    return Ok(None);
                }
                KeyCode::Char(c) => {
                    key.push(c);
                    print!("*");
                    io::stdout().flush()?;
                }
                _ => {}
            }
        }
    })();

    terminal::disable_raw_mode()?;
    println!();
    Ok(outcome?.unwrap_or_default())
}

fn save_api_key(path: &Path, env_var: &str, key: &str) -> Result<()> {
    let existing = if path.exists() {
        fs::read_to_string(path)?
    } else {
        String::new()
    };
    fs::write(path, upsert_export(&existing, env_var, key))?;
    Ok(())
}

/// Rewrite an env file so it contains `export {env_var}="{value}"`, keeping
/// other `export` lines and dropping anything else.
fn upsert_export(existing: &str, env_var: &str, value: &str) -> String {
    let mut config: BTreeMap<String, String> = existing
        .lines()
        .filter_map(|line| {
            let line = line.trim().strip_prefix("export ")?;
            let (key, value) = line.split_once('=')?;
            Some((key.trim().to_string(), value.trim().to_string()))
        })
        .collect();

    config.insert(env_var.to_string(), format!("\"{value}\""));

    let mut content = String::new();
    content.push_str("# ideagen configuration\n");
    content.push_str("# Loaded automatically by ideagen; can also be sourced: source ~/.ideagen/env\n\n");
    for (k, v) in &config {
        content.push_str(&format!("export {k}={v}\n"));
    }
    content
}

fn show(api_key: Option<&str>) -> Result<()> {
    let settings = effective_settings(None)?;
    let credential = ApiCredential::from_env(api_key);

    if output::is_json() {
        let data = serde_json::json!({
            "settings": settings,
            "api_key": {
                "source": credential.source(),
                "masked": credential.masked(),
            },
        });
        output::data("config", &data);
        return Ok(());
    }

    output::header("Effective settings");
    output::kv("model", &settings.model);
    output::kv("max_tokens", &settings.max_tokens.to_string());
    output::kv("endpoint", settings.endpoint());
    output::kv(
        "timeout",
        &settings
            .timeout_secs
            .map(|s| format!("{s}s"))
            .unwrap_or_else(|| "client default".to_string()),
    );
    output::kv("api_key", &credential.masked().unwrap_or_else(|| "(not set)".to_string()));
    match credential.key() {
        Some(_) => output::success(credential.source().describe()),
        None => output::warning(credential.source().describe()),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upsert_into_empty_file() {
        let content = upsert_export("", "OPENAI_API_KEY", "sk-new");
        assert!(content.starts_with("# ideagen configuration\n"));
        assert!(content.ends_with("export OPENAI_API_KEY=\"sk-new\"\n"));
    }

    #[test]
    fn test_upsert_replaces_existing_and_keeps_others() {
        let existing = "export IDEAGEN_MODEL=\"gpt-4o-mini\"\nexport OPENAI_API_KEY=\"sk-old\"\nstray line\n";
        let content = upsert_export(existing, "OPENAI_API_KEY", "sk-new");
        assert!(content.contains("export IDEAGEN_MODEL=\"gpt-4o-mini\"\n"));
        assert!(content.contains("export OPENAI_API_KEY=\"sk-new\"\n"));
        assert!(!content.contains("sk-old"));
        assert!(!content.contains("stray line"));
    }

    #[test]
    fn test_save_api_key_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("env");
        save_api_key(&path, "OPENAI_API_KEY", "sk-file").unwrap();
        save_api_key(&path, "OPENAI_API_KEY", "sk-file-2").unwrap();
        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content.matches("OPENAI_API_KEY").count(), 1);
        assert!(content.contains("sk-file-2"));
    }
}

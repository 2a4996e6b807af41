//! Config subcommands handler

use std::collections::HashSet;
use std::fs;
use std::io::{self, BufRead, Write};
use std::path::Path;

use anyhow::{Context, Result};

use qrcast::config::{migrate_config, MigrateResult};
use qrcast::theme::{ansi, current_theme};
use qrcast::Config;

/// Show the effective configuration as TOML.
#[cfg(not(tarpaulin_include))]
pub fn handle_show() -> Result<()> {
    let config = Config::load()?;
    let toml_str = toml::to_string_pretty(&config)?;
    println!("{}", current_theme().primary_text(&toml_str));
    Ok(())
}

/// Print the config file location, whether or not it exists.
pub fn handle_path() -> Result<()> {
    println!("{}", Config::config_path()?.display());
    Ok(())
}

/// Open the config file in `$EDITOR` (default `vi`), creating it first.
#[cfg(not(tarpaulin_include))]
pub fn handle_edit() -> Result<()> {
    let config_path = Config::config_path()?;
    let theme = current_theme();

    if !config_path.exists() {
        Config::default().save()?;
    }

    let editor = std::env::var("EDITOR").unwrap_or_else(|_| "vi".to_string());
    println!(
        "{}",
        theme.primary_text(&format!(
            "Opening {} with {}",
            config_path.display(),
            editor
        ))
    );

    let status = std::process::Command::new(&editor)
        .arg(&config_path)
        .status()
        .with_context(|| format!("Failed to open editor '{}'", editor))?;

    if status.success() {
        if let Err(e) = Config::load().and_then(|c| Ok(c.validate()?)) {
            println!("{}", theme.error_text(&format!("Warning: {:#}", e)));
        }
    }
    Ok(())
}

/// Add fields missing from the config file, creating it if needed.
///
/// Shows the added lines and asks before writing unless `yes` is set.
#[cfg(not(tarpaulin_include))]
pub fn handle_migrate(yes: bool) -> Result<()> {
    let theme = current_theme();
    let config_path = Config::config_path()?;
    let exists = config_path.exists();

    let content = if exists {
        fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read {}", config_path.display()))?
    } else {
        String::new()
    };
    let result = migrate_config(&content)?;

    if !result.has_changes() {
        println!("{}", theme.primary_text("Config is already up to date."));
        return Ok(());
    }

    println!("{}", theme.primary_text(&migrate_summary(&result, exists)));
    println!();
    for line in added_lines(&result, exists) {
        println!("{}+ {}{}", ansi::GREEN, line, ansi::RESET);
    }
    println!();

    let question = if exists {
        format!("Apply these changes to {}?", config_path.display())
    } else {
        format!("Create {}?", config_path.display())
    };
    if !yes && !prompt_confirmation(&question)? {
        println!("{}", theme.primary_text("No changes made."));
        return Ok(());
    }

    write_config(&config_path, &result.content)?;
    println!("{}", theme.success_text("Config written."));
    Ok(())
}

fn write_config(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))
}

fn migrate_summary(result: &MigrateResult, exists: bool) -> String {
    if !exists {
        return "Config file does not exist. Will create it with default settings.".to_string();
    }
    match result.sections_added.len() {
        0 => format!("Found {} missing field(s):", result.added_fields.len()),
        sections => format!(
            "Found {} missing field(s) in {} new section(s):",
            result.added_fields.len(),
            sections
        ),
    }
}

/// Lines of the migrated document that are new.
///
/// Section headers are included only for sections that did not exist.
/// For a new file every non-blank line is new.
fn added_lines(result: &MigrateResult, exists: bool) -> Vec<String> {
    let added: HashSet<&str> = result.added_fields.iter().map(String::as_str).collect();
    let new_sections: HashSet<&str> = result.sections_added.iter().map(String::as_str).collect();
    let mut section = String::new();
    let mut lines = Vec::new();

    for line in result.content.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        if let Some(name) = trimmed.strip_prefix('[').and_then(|s| s.strip_suffix(']')) {
            section = name.to_string();
            if !exists || new_sections.contains(name) {
                lines.push(line.to_string());
            }
            continue;
        }
        let key = trimmed.split('=').next().unwrap_or_default().trim();
        if !exists || added.contains(format!("{}.{}", section, key).as_str()) {
            lines.push(line.to_string());
        }
    }
    lines
}

/// Ask a yes/no question on stdin. Non-interactive stdin answers no.
fn prompt_confirmation(message: &str) -> Result<bool> {
    let theme = current_theme();

    if !atty::is(atty::Stream::Stdin) {
        println!(
            "{}",
            theme.secondary_text("Non-interactive mode: use --yes to apply changes automatically")
        );
        return Ok(false);
    }

    print!("{} [y/N] ", theme.primary_text(message));
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().lock().read_line(&mut input)?;

    let response = input.trim().to_lowercase();
    Ok(response == "y" || response == "yes")
}

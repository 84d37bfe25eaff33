//! Config command implementation.

use crate::cli::{ConfigAction, ConfigArgs};
use crate::commands::template::parse_platform;
use crate::config::{Config, OutputFormat};
use crate::error::Result;
use crate::output::Formatter;
use std::path::Path;

/// Execute the config command.
pub fn execute_config(
    args: ConfigArgs,
    config: &mut Config,
    config_path: &Path,
    formatter: &Formatter,
) -> Result<()> {
    match args.action {
        ConfigAction::Show => show_config(config, config_path, formatter),
        ConfigAction::SetPlatform { platform } => {
            set_platform(config, config_path, &platform, formatter)
        }
        ConfigAction::SetDedupe { enabled } => set_dedupe(config, config_path, enabled, formatter),
    }
}

/// Print the config path and contents.
fn show_config(config: &Config, config_path: &Path, formatter: &Formatter) -> Result<()> {
    match formatter.format() {
        OutputFormat::Json => {
            let value = serde_json::json!({
                "path": config_path.display().to_string(),
                "settings": config.settings,
                "templates": config.templates,
            });
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
        OutputFormat::Quiet => print!("{}", config.to_toml()?),
        OutputFormat::Text => {
            println!("{}", formatter.info(&format!("{}", config_path.display())));
            print!("{}", config.to_toml()?);
        }
    }
    Ok(())
}

/// Change the default platform.
fn set_platform(
    config: &mut Config,
    config_path: &Path,
    platform: &str,
    formatter: &Formatter,
) -> Result<()> {
    let platform = parse_platform(platform)?;
    config.set_platform(&platform);
    config.save_to(config_path)?;

    println!(
        "{}",
        formatter.success(&format!("Default platform set to '{}'", platform))
    );
    if config.session().template_for(&platform).is_none() {
        println!(
            "{}",
            formatter.warning(&format!(
                "'{}' has no template yet, add one with `hostrule template set {} ...`",
                platform, platform
            ))
        );
    }
    Ok(())
}

/// Change the default dedupe flag.
fn set_dedupe(
    config: &mut Config,
    config_path: &Path,
    enabled: bool,
    formatter: &Formatter,
) -> Result<()> {
    config.settings.dedupe = enabled;
    config.save_to(config_path)?;

    let state = if enabled { "enabled" } else { "disabled" };
    println!(
        "{}",
        formatter.success(&format!("Deduplication {} by default", state))
    );
    Ok(())
}

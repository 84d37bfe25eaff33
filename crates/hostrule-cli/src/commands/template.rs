//! Template command implementation.

use crate::cli::{TemplateAction, TemplateArgs};
use crate::commands::convert::read_template_file;
use crate::config::{Config, OutputFormat};
use crate::error::{CliError, Result};
use crate::output::{Formatter, TemplateRow, TemplateSource};
use hostrule_domain::{Platform, Template};
use std::path::{Path, PathBuf};
use tracing::info;

/// Execute the template command.
pub fn execute_template(
    args: TemplateArgs,
    config: &mut Config,
    config_path: &Path,
    formatter: &Formatter,
) -> Result<()> {
    match args.action {
        TemplateAction::List => list_templates(config, formatter),
        TemplateAction::Show { platform } => show_template(config, platform, formatter),
        TemplateAction::Set {
            platform,
            template,
            file,
        } => {
            let text = template_text(template, file)?;
            set_template(config, config_path, &platform, text, formatter)
        }
        TemplateAction::Reset { platform } => {
            reset_template(config, config_path, &platform, formatter)
        }
    }
}

/// Describe the active template of every listed platform.
pub fn template_rows(config: &Config) -> Vec<TemplateRow> {
    let session = config.session();

    config
        .platforms()
        .into_iter()
        .map(|platform| {
            let template = session.template_for(&platform);
            let source = match (&template, session.user_template(&platform)) {
                (None, _) => TemplateSource::Unset,
                (Some(active), Some(user)) if active == user => TemplateSource::User,
                (Some(_), _) => TemplateSource::BuiltIn,
            };
            TemplateRow {
                platform: platform.id().to_string(),
                source,
                template: template.map(|t| t.as_str().to_string()),
            }
        })
        .collect()
}

/// List all platforms and their templates.
fn list_templates(config: &Config, formatter: &Formatter) -> Result<()> {
    println!("{}", formatter.format_templates(&template_rows(config))?);
    Ok(())
}

/// Show the active template for one platform.
fn show_template(config: &Config, platform: Option<String>, formatter: &Formatter) -> Result<()> {
    let platform = platform
        .map(|id| parse_platform(&id))
        .transpose()?
        .unwrap_or_else(|| config.platform());

    match config.session().template_for(&platform) {
        Some(template) => println!("{}", template),
        None if formatter.format() == OutputFormat::Quiet => {}
        None => println!(
            "{}",
            formatter.warning(&format!("No template configured for '{}'", platform))
        ),
    }

    Ok(())
}

/// Store a user template.
fn set_template(
    config: &mut Config,
    config_path: &Path,
    platform: &str,
    text: String,
    formatter: &Formatter,
) -> Result<()> {
    let platform = parse_platform(platform)?;
    let template = Template::new(text.as_str());

    if !template.uses_ip() && !template.uses_host() {
        eprintln!(
            "{}",
            formatter.warning("Template contains neither ${ip} nor ${host}")
        );
    }

    let action = if config.templates.contains_key(platform.id()) {
        "Updated"
    } else {
        "Saved"
    };

    config.set_template(&platform, text);
    config.save_to(config_path)?;
    info!(platform = %platform, "Stored user template");

    println!(
        "{}",
        formatter.success(&format!("{} template for '{}'", action, platform))
    );
    Ok(())
}

/// Remove a user template.
fn reset_template(
    config: &mut Config,
    config_path: &Path,
    platform: &str,
    formatter: &Formatter,
) -> Result<()> {
    let platform = parse_platform(platform)?;

    if config.remove_template(&platform) {
        config.save_to(config_path)?;
        let restored = if platform.builtin_template().is_some() {
            "built-in restored"
        } else {
            "no template configured"
        };
        println!(
            "{}",
            formatter.success(&format!("Removed template for '{}' ({})", platform, restored))
        );
    } else {
        println!(
            "{}",
            formatter.warning(&format!("No user template stored for '{}'", platform))
        );
    }

    Ok(())
}

/// Resolve the template text from the positional argument or `--file`.
fn template_text(template: Option<String>, file: Option<PathBuf>) -> Result<String> {
    match (template, file) {
        (Some(text), None) => Ok(text),
        (None, Some(path)) => read_template_file(&path),
        _ => Err(CliError::InvalidInput(
            "Provide either template text or --file".to_string(),
        )),
    }
}

/// Parse a platform id given on the command line.
pub fn parse_platform(id: &str) -> Result<Platform> {
    id.parse::<Platform>().map_err(CliError::InvalidInput)
}

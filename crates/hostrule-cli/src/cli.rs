//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Hostrule - Convert hosts-file lines into proxy and DNS-spoof rules.
#[derive(Debug, Parser)]
#[command(name = "hostrule")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true, env = "HOSTRULE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Command to run (defaults to converting stdin)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum CliFormat {
    /// Plain text (default)
    Text,
    /// JSON format
    Json,
    /// Quiet format (rendered output only)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Convert hosts lines using a platform template
    Convert(ConvertArgs),

    /// Manage per-platform templates
    Template(TemplateArgs),

    /// Inspect and change persisted defaults
    Config(ConfigArgs),
}

/// Arguments for the convert command.
#[derive(Debug, Default, Parser)]
pub struct ConvertArgs {
    /// Input file (reads stdin when omitted or "-")
    pub input: Option<String>,

    /// Target platform (clash, charles, custom, or any id with a user template)
    #[arg(short, long)]
    pub platform: Option<String>,

    /// Template text, overrides the platform template
    #[arg(short, long, conflicts_with = "template_file")]
    pub template: Option<String>,

    /// Read the template from a file
    #[arg(long)]
    pub template_file: Option<PathBuf>,

    /// Drop repeated host/IP pairs
    #[arg(short, long, conflicts_with = "no_dedupe")]
    pub dedupe: bool,

    /// Keep repeated host/IP pairs even if the config enables dedupe
    #[arg(long)]
    pub no_dedupe: bool,

    /// Report line and duplicate counts
    #[arg(long)]
    pub stats: bool,
}

/// Arguments for template management.
#[derive(Debug, Parser)]
pub struct TemplateArgs {
    #[command(subcommand)]
    pub action: TemplateAction,
}

/// Template management actions.
#[derive(Debug, Subcommand)]
pub enum TemplateAction {
    /// List platforms and their active templates
    List,

    /// Show the active template for a platform
    Show {
        /// Platform id (defaults to the configured platform)
        platform: Option<String>,
    },

    /// Store a user template for a platform
    Set {
        /// Platform id
        platform: String,
        /// Template text
        #[arg(required_unless_present = "file", conflicts_with = "file")]
        template: Option<String>,
        /// Read the template from a file
        #[arg(short = 'F', long)]
        file: Option<PathBuf>,
    },

    /// Remove a user template, restoring the built-in
    Reset {
        /// Platform id
        platform: String,
    },
}

/// Arguments for config management.
#[derive(Debug, Parser)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Config management actions.
#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Show the configuration file path and contents
    Show,

    /// Set the default platform
    SetPlatform {
        /// Platform id
        platform: String,
    },

    /// Set the default dedupe flag
    SetDedupe {
        /// true/false, yes/no, on/off
        #[arg(action = clap::ArgAction::Set, value_parser = clap::builder::BoolishValueParser::new())]
        enabled: bool,
    },
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Text => crate::config::OutputFormat::Text,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_command_defaults_to_convert() {
        let cli = Cli::parse_from(["hostrule"]);
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_convert_command() {
        let cli = Cli::parse_from([
            "hostrule",
            "convert",
            "hosts.txt",
            "--platform",
            "charles",
            "--dedupe",
        ]);
        match cli.command {
            Some(Command::Convert(args)) => {
                assert_eq!(args.input.as_deref(), Some("hosts.txt"));
                assert_eq!(args.platform.as_deref(), Some("charles"));
                assert!(args.dedupe);
            }
            _ => panic!("Expected Convert command"),
        }
    }

    #[test]
    fn test_dedupe_flags_conflict() {
        let result = Cli::try_parse_from(["hostrule", "convert", "-d", "--no-dedupe"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_template_set_requires_text_or_file() {
        assert!(Cli::try_parse_from(["hostrule", "template", "set", "clash"]).is_err());

        let cli = Cli::parse_from(["hostrule", "template", "set", "clash", "${ip} ${host}"]);
        match cli.command {
            Some(Command::Template(TemplateArgs {
                action: TemplateAction::Set { template, .. },
            })) => assert_eq!(template.as_deref(), Some("${ip} ${host}")),
            _ => panic!("Expected template set"),
        }
    }

    #[test]
    fn test_set_dedupe_accepts_boolish() {
        let cli = Cli::parse_from(["hostrule", "config", "set-dedupe", "yes"]);
        match cli.command {
            Some(Command::Config(ConfigArgs {
                action: ConfigAction::SetDedupe { enabled },
            })) => assert!(enabled),
            _ => panic!("Expected config set-dedupe"),
        }
    }

    #[test]
    fn test_verbosity_count() {
        let cli = Cli::parse_from(["hostrule", "-vv", "template", "list"]);
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_format_conversion() {
        let format: crate::config::OutputFormat = CliFormat::Json.into();
        assert!(matches!(format, crate::config::OutputFormat::Json));
    }
}

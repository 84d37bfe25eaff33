//! Hostrule CLI - Convert hosts-file lines into platform rule snippets.

use clap::Parser;
use hostrule_cli::cli::ConvertArgs;
use hostrule_cli::commands;
use hostrule_cli::logging;
use hostrule_cli::{Cli, Command, Config, Formatter};
use tracing::{debug, warn};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> hostrule_cli::Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    logging::init_logging(cli.verbose);

    // Load or create config
    let config_path = match cli.config {
        Some(path) => path,
        None => Config::path()?,
    };
    let mut config = if config_path.exists() {
        Config::load_from(&config_path)?
    } else {
        let cfg = Config::default();
        if let Err(e) = cfg.save_to(&config_path) {
            warn!(path = %config_path.display(), error = %e, "Could not write default config");
        }
        cfg
    };
    debug!(path = %config_path.display(), "Using config");

    // Determine output format
    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);

    // Determine color setting
    let color_enabled = !cli.no_color && config.settings.color;

    // Create formatter
    let formatter = Formatter::new(format, color_enabled);

    // Handle commands
    match cli.command {
        None => commands::execute_convert(ConvertArgs::default(), &config, &formatter)?,
        Some(Command::Convert(args)) => commands::execute_convert(args, &config, &formatter)?,
        Some(Command::Template(args)) => {
            commands::execute_template(args, &mut config, &config_path, &formatter)?
        }
        Some(Command::Config(args)) => {
            commands::execute_config(args, &mut config, &config_path, &formatter)?
        }
    }

    Ok(())
}

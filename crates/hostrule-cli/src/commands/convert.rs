//! Convert command implementation.

use crate::cli::ConvertArgs;
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use hostrule_domain::{Conversion, Platform, Session, Template};
use hostrule_engine::{classify, convert_with_stats, ConversionStats};
use std::fs;
use std::io::{self, Read};
use std::path::Path;
use tracing::{debug, info};

/// Execute the convert command.
pub fn execute_convert(args: ConvertArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let input = read_input(args.input.as_deref())?;
    let session = session_for(&args, config);
    let template = explicit_template(&args)?;

    let Some((conversion, stats)) = convert_input(&input, &session, template) else {
        debug!("Blank input, nothing to convert");
        return Ok(());
    };

    if args.stats {
        eprintln!("{}", formatter.stats_line(&stats));
    }

    let stats = args.stats.then_some(&stats);
    if let Some(output) = formatter.format_conversion(&conversion, session.platform(), stats)? {
        println!("{}", output);
    }

    Ok(())
}

/// Apply command-line overrides to the configured session.
pub fn session_for(args: &ConvertArgs, config: &Config) -> Session {
    let mut session = config.session();

    if let Some(platform) = &args.platform {
        session = session.with_platform(Platform::parse(platform));
    }
    if args.dedupe {
        session = session.with_dedupe(true);
    } else if args.no_dedupe {
        session = session.with_dedupe(false);
    }

    session
}

/// Template given on the command line, which takes precedence over the session.
pub fn explicit_template(args: &ConvertArgs) -> Result<Option<Template>> {
    if let Some(text) = &args.template {
        return Ok(Some(Template::new(text.as_str())));
    }

    match &args.template_file {
        Some(path) => {
            let text = read_template_file(path)?;
            info!(path = %path.display(), "Using template from file");
            Ok(Some(Template::new(text)))
        }
        None => Ok(None),
    }
}

/// Run one conversion.
///
/// Blank input yields `None` so the caller prints nothing, the same as clearing the
/// input box in an interactive front end. Everything else goes through the core.
pub fn convert_input(
    input: &str,
    session: &Session,
    template: Option<Template>,
) -> Option<(Conversion, ConversionStats)> {
    if input.trim().is_empty() {
        return None;
    }

    let template = template.or_else(|| session.resolve_template());
    let records = classify(input);
    info!(
        platform = %session.platform(),
        dedupe = session.dedupe(),
        lines = records.len(),
        "Converting host entries"
    );

    Some(convert_with_stats(
        &records,
        template.as_ref(),
        session.dedupe(),
    ))
}

/// Read a template file, dropping one trailing line break added by editors.
pub fn read_template_file(path: &Path) -> Result<String> {
    let mut text = fs::read_to_string(path)?;
    if text.ends_with('\n') {
        text.pop();
        if text.ends_with('\r') {
            text.pop();
        }
    }
    Ok(text)
}

/// Read input from a file, or stdin for `None` / `-`.
fn read_input(input: Option<&str>) -> Result<String> {
    match input {
        None | Some("-") => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            debug!(bytes = buffer.len(), "Read input from stdin");
            Ok(buffer)
        }
        Some(path) => {
            let text = fs::read_to_string(path)?;
            debug!(path, bytes = text.len(), "Read input file");
            Ok(text)
        }
    }
}

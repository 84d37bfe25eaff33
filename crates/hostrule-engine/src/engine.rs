//! Rule engine: deduplication, template rendering and orchestration

use crate::classifier::classify;
use hostrule_domain::{Conversion, LineRecord, Session, Template};
use std::collections::HashSet;
use tracing::debug;

/// Counters describing one conversion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ConversionStats {
    /// Input lines (records) seen
    pub lines: usize,

    /// Records classified as host entries
    pub host_entries: usize,

    /// Host entries dropped as duplicates
    pub duplicates_dropped: usize,
}

/// Drop repeated `(host, ip)` mappings, keeping the first occurrence
///
/// Non-host lines are never dropped, even when their text repeats. Surviving
/// records keep their relative order.
pub fn dedupe(records: &[LineRecord]) -> Vec<&LineRecord> {
    let mut seen: HashSet<(&str, &str)> = HashSet::new();
    let mut survivors = Vec::with_capacity(records.len());

    for record in records {
        if let Some(entry) = &record.entry {
            if !seen.insert(entry.key()) {
                continue;
            }
        }
        survivors.push(record);
    }

    survivors
}

/// Render records through a template and join them with `\n`
///
/// Host entries are rendered, every other line is emitted verbatim.
pub fn render_lines<'a, I>(records: I, template: &Template) -> String
where
    I: IntoIterator<Item = &'a LineRecord>,
{
    records
        .into_iter()
        .map(|record| match &record.entry {
            Some(entry) => template.render(&entry.ip, &entry.host),
            None => record.original.clone(),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Convert classified records
///
/// The "no valid entries" check runs before the template check, so input without
/// host entries reports [`Conversion::NoValidEntries`] even when no template is set.
pub fn convert(records: &[LineRecord], template: Option<&Template>, dedupe: bool) -> Conversion {
    convert_with_stats(records, template, dedupe).0
}

/// Convert classified records and report what happened
pub fn convert_with_stats(
    records: &[LineRecord],
    template: Option<&Template>,
    dedupe_enabled: bool,
) -> (Conversion, ConversionStats) {
    let mut stats = ConversionStats {
        lines: records.len(),
        host_entries: records.iter().filter(|r| r.is_host_entry()).count(),
        duplicates_dropped: 0,
    };

    if stats.host_entries == 0 {
        debug!(lines = stats.lines, "No host entries in input");
        return (Conversion::NoValidEntries, stats);
    }

    let template = match template {
        Some(t) if !t.is_empty() => t,
        _ => {
            debug!(host_entries = stats.host_entries, "No template configured");
            return (Conversion::NoTemplateConfigured, stats);
        }
    };

    let output = if dedupe_enabled {
        let survivors = dedupe(records);
        stats.duplicates_dropped = records.len() - survivors.len();
        render_lines(survivors, template)
    } else {
        render_lines(records, template)
    };

    debug!(
        lines = stats.lines,
        host_entries = stats.host_entries,
        duplicates_dropped = stats.duplicates_dropped,
        "Rendered host entries"
    );

    (Conversion::Rendered(output), stats)
}

/// Classify text and convert it with the session's template and dedupe flag
///
/// This is the single call an interactive caller makes whenever the input text,
/// the selected platform, its template or the dedupe flag changes.
pub fn convert_text(text: &str, session: &Session) -> Conversion {
    let records = classify(text);
    let template = session.resolve_template();
    debug!(platform = %session.platform(), dedupe = session.dedupe(), "Converting input");
    convert(&records, template.as_ref(), session.dedupe())
}

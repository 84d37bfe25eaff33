//! Line classification: raw text into typed line records

use hostrule_domain::{HostEntry, LineRecord};
use regex::Regex;
use std::sync::LazyLock;

// Shape checks only. Groups are not range-checked, so "999.999.999.999" passes.
static IPV4_LITERAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{1,3}(\.[0-9]{1,3}){3}$").expect("valid IPv4 pattern"));

// Two to eight groups of 0-4 hex digits; repeated "::" is not rejected.
static IPV6_LITERAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9A-Fa-f]{0,4}:){1,7}[0-9A-Fa-f]{0,4}$").expect("valid IPv6 pattern")
});

/// Whether `token` has the shape of a dotted-quad IPv4 literal
pub fn is_ipv4_literal(token: &str) -> bool {
    IPV4_LITERAL.is_match(token)
}

/// Whether `token` has the shape of a colon-separated IPv6 literal
pub fn is_ipv6_literal(token: &str) -> bool {
    IPV6_LITERAL.is_match(token)
}

/// Whether `token` passes either IP grammar
pub fn is_ip_literal(token: &str) -> bool {
    is_ipv4_literal(token) || is_ipv6_literal(token)
}

/// Classify a single line (without its line break)
///
/// The line is a host entry when its trimmed text has at least two whitespace-separated
/// tokens and the first is an IP literal. Tokens after the hostname are ignored.
pub fn classify_line(line: &str) -> LineRecord {
    let mut tokens = line.split_whitespace();

    match (tokens.next(), tokens.next()) {
        (Some(ip), Some(host)) if is_ip_literal(ip) => {
            LineRecord::host(line, HostEntry::new(ip, host))
        }
        _ => LineRecord::verbatim(line),
    }
}

/// Classify raw input into one record per line
///
/// Input is split on `\n` without trimming the whole text first, so leading and
/// trailing blank lines each yield a verbatim empty record. Never fails.
///
/// # Examples
///
/// ```
/// use hostrule_engine::classify;
///
/// let records = classify("\n10.0.0.1 a.com\n");
/// assert_eq!(records.len(), 3);
/// assert!(records[1].is_host_entry());
/// ```
pub fn classify(text: &str) -> Vec<LineRecord> {
    text.split('\n').map(classify_line).collect()
}

//! Conversion module - the outcome of one conversion call

use std::fmt;

/// Text shown when the input holds no host entries
pub const NO_VALID_ENTRIES_MESSAGE: &str =
    "Unable to parse host entries from input, check the format";

/// Text shown when host entries exist but no template is available
pub const NO_TEMPLATE_MESSAGE: &str = "No conversion template configured, set one first";

/// Result of converting one input against one template
///
/// The two empty outcomes are ordinary values, not errors: callers display them
/// exactly like rendered output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Conversion {
    /// Rendered output lines joined with `\n`
    Rendered(String),

    /// The input produced zero host entries
    NoValidEntries,

    /// Host entries exist but the active template is empty or absent
    NoTemplateConfigured,
}

impl Conversion {
    /// Stable tag for machine-readable output
    pub fn status(&self) -> &'static str {
        match self {
            Conversion::Rendered(_) => "rendered",
            Conversion::NoValidEntries => "no_valid_entries",
            Conversion::NoTemplateConfigured => "no_template_configured",
        }
    }

    /// Whether this is a rendered result rather than a sentinel
    pub fn is_rendered(&self) -> bool {
        matches!(self, Conversion::Rendered(_))
    }

    /// Borrow the output text (rendered lines or sentinel message)
    pub fn as_text(&self) -> &str {
        match self {
            Conversion::Rendered(text) => text,
            Conversion::NoValidEntries => NO_VALID_ENTRIES_MESSAGE,
            Conversion::NoTemplateConfigured => NO_TEMPLATE_MESSAGE,
        }
    }

    /// Consume into the output text
    pub fn into_text(self) -> String {
        match self {
            Conversion::Rendered(text) => text,
            other => other.as_text().to_string(),
        }
    }
}

impl fmt::Display for Conversion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentinel_text() {
        assert_eq!(Conversion::NoValidEntries.to_string(), NO_VALID_ENTRIES_MESSAGE);
        assert_eq!(
            Conversion::NoTemplateConfigured.into_text(),
            NO_TEMPLATE_MESSAGE
        );
    }

    #[test]
    fn test_rendered_text() {
        let conversion = Conversion::Rendered("a\nb".to_string());
        assert!(conversion.is_rendered());
        assert_eq!(conversion.as_text(), "a\nb");
        assert_eq!(conversion.status(), "rendered");
    }

    #[test]
    fn test_status_tags() {
        assert_eq!(Conversion::NoValidEntries.status(), "no_valid_entries");
        assert_eq!(
            Conversion::NoTemplateConfigured.status(),
            "no_template_configured"
        );
        assert!(!Conversion::NoValidEntries.is_rendered());
    }
}

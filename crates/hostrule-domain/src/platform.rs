//! Platform module - conversion targets and their built-in templates

use crate::template::Template;
use std::fmt;

/// Built-in Clash rule line
pub const CLASH_TEMPLATE: &str = "${host}=${ip},";

/// Built-in Charles DNS-spoof block
pub const CHARLES_TEMPLATE: &str = "<dnsSpoof>
  <name>${host}</name>
  <address>${ip}</address>
  <enabled>true</enabled>
</dnsSpoof>";

/// Target platform a template renders for
///
/// Identifiers are matched case-insensitively. Any identifier that is not one of the
/// known platforms is kept as [`Platform::Other`] so user templates can be registered
/// for targets that ship no built-in.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Platform {
    /// Clash host rules
    #[default]
    Clash,

    /// Charles DNS spoofing
    Charles,

    /// Free-form user template, no built-in
    Custom,

    /// Any other identifier, no built-in
    Other(String),
}

impl Platform {
    /// Platforms that are always listed
    pub const KNOWN: [Platform; 3] = [Platform::Clash, Platform::Charles, Platform::Custom];

    /// Get the platform identifier
    pub fn id(&self) -> &str {
        match self {
            Platform::Clash => "clash",
            Platform::Charles => "charles",
            Platform::Custom => "custom",
            Platform::Other(id) => id,
        }
    }

    /// Parse a platform identifier
    ///
    /// Never fails: unknown identifiers become [`Platform::Other`] (lowercased).
    pub fn parse(s: &str) -> Self {
        let id = s.trim().to_lowercase();
        match id.as_str() {
            "clash" => Platform::Clash,
            "charles" => Platform::Charles,
            "custom" => Platform::Custom,
            _ => Platform::Other(id),
        }
    }

    /// The template shipped with this platform, if any
    pub fn builtin_template(&self) -> Option<Template> {
        match self {
            Platform::Clash => Some(Template::new(CLASH_TEMPLATE)),
            Platform::Charles => Some(Template::new(CHARLES_TEMPLATE)),
            Platform::Custom | Platform::Other(_) => None,
        }
    }
}

impl std::str::FromStr for Platform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() {
            return Err("Platform identifier cannot be empty".to_string());
        }
        Ok(Self::parse(s))
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_platforms() {
        assert_eq!(Platform::parse("clash"), Platform::Clash);
        assert_eq!(Platform::parse("Charles"), Platform::Charles);
        assert_eq!(Platform::parse(" CUSTOM "), Platform::Custom);
    }

    #[test]
    fn test_parse_future_platform() {
        let platform = Platform::parse("Surge");
        assert_eq!(platform, Platform::Other("surge".to_string()));
        assert_eq!(platform.id(), "surge");
        assert!(platform.builtin_template().is_none());
    }

    #[test]
    fn test_from_str_rejects_empty() {
        assert!("".parse::<Platform>().is_err());
        assert_eq!("clash".parse::<Platform>().unwrap(), Platform::Clash);
    }

    #[test]
    fn test_builtin_templates() {
        let clash = Platform::Clash.builtin_template().unwrap();
        assert_eq!(clash.render("1.2.3.4", "a.com"), "a.com=1.2.3.4,");

        let charles = Platform::Charles.builtin_template().unwrap();
        let rendered = charles.render("1.2.3.4", "a.com");
        assert!(rendered.starts_with("<dnsSpoof>\n"));
        assert!(rendered.contains("  <name>a.com</name>"));
        assert!(rendered.contains("  <address>1.2.3.4</address>"));

        assert!(Platform::Custom.builtin_template().is_none());
    }

    #[test]
    fn test_default_is_clash() {
        assert_eq!(Platform::default(), Platform::Clash);
    }
}

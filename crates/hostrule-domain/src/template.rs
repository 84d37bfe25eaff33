//! Template module - rule strings with `${ip}` / `${host}` placeholders

use std::fmt;

/// Placeholder replaced by the IP literal
pub const IP_PLACEHOLDER: &str = "${ip}";

/// Placeholder replaced by the hostname
pub const HOST_PLACEHOLDER: &str = "${host}";

/// A template defining one target platform's output line format
///
/// Substitution is literal: every occurrence of each placeholder is replaced,
/// there is no escaping and substituted values are never rescanned.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Template(String);

impl Template {
    /// Create a new template
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Get template as string
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// An empty template counts as "no template configured"
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether the template references `${ip}`
    pub fn uses_ip(&self) -> bool {
        self.0.contains(IP_PLACEHOLDER)
    }

    /// Whether the template references `${host}`
    pub fn uses_host(&self) -> bool {
        self.0.contains(HOST_PLACEHOLDER)
    }

    /// Render the template for one mapping
    ///
    /// `${ip}` is substituted first, then `${host}`. A classified IP literal holds only
    /// hex digits, `.` and `:`, so the first pass cannot produce a `${host}` token and the
    /// result does not depend on the pass order. A hostname containing `${ip}` is emitted
    /// as-is.
    ///
    /// # Examples
    ///
    /// ```
    /// use hostrule_domain::Template;
    ///
    /// let template = Template::new("${host}=${ip},");
    /// assert_eq!(template.render("1.2.3.4", "a.com"), "a.com=1.2.3.4,");
    /// ```
    pub fn render(&self, ip: &str, host: &str) -> String {
        self.0
            .replace(IP_PLACEHOLDER, ip)
            .replace(HOST_PLACEHOLDER, host)
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Template {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Template {
    fn from(value: String) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_replaces_every_occurrence() {
        let template = Template::new("${ip} ${host} ${ip} ${host}");
        assert_eq!(template.render("::1", "h"), "::1 h ::1 h");
    }

    #[test]
    fn test_render_placeholder_order_does_not_matter() {
        let forward = Template::new("${host}=${ip},");
        let reversed = Template::new("${ip}=${host},");
        assert_eq!(forward.render("1.2.3.4", "a.com"), "a.com=1.2.3.4,");
        assert_eq!(reversed.render("1.2.3.4", "a.com"), "1.2.3.4=a.com,");
    }

    #[test]
    fn test_render_without_placeholders() {
        let template = Template::new("static");
        assert_eq!(template.render("1.2.3.4", "a.com"), "static");
        assert!(!template.uses_ip());
        assert!(!template.uses_host());
    }

    #[test]
    fn test_substituted_host_is_not_rescanned() {
        let template = Template::new("${host}");
        assert_eq!(template.render("1.2.3.4", "${ip}"), "${ip}");
    }

    #[test]
    fn test_no_escaping() {
        let template = Template::new("$${ip}}");
        assert_eq!(template.render("1.2.3.4", "a"), "$1.2.3.4}");
    }

    #[test]
    fn test_empty_template() {
        assert!(Template::default().is_empty());
        assert!(!Template::new(" ").is_empty());
    }
}

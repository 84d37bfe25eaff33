//! Line record module - one classified line of hosts-style input

/// An IP-to-hostname mapping taken from a single input line
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HostEntry {
    /// The IP literal (first token of the line)
    pub ip: String,

    /// The hostname (second token of the line)
    pub host: String,
}

impl HostEntry {
    /// Create a new host entry
    pub fn new(ip: impl Into<String>, host: impl Into<String>) -> Self {
        Self {
            ip: ip.into(),
            host: host.into(),
        }
    }

    /// Dedup key: the `(host, ip)` pair identifying a logically duplicate mapping
    pub fn key(&self) -> (&str, &str) {
        (self.host.as_str(), self.ip.as_str())
    }
}

/// One entry per input line, in input order
///
/// `entry` is present only when the line is a host entry, so the IP literal and
/// hostname can never be observed on a non-host line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineRecord {
    /// The exact source line, without its line break
    pub original: String,

    /// The parsed mapping, if the line is a host entry
    pub entry: Option<HostEntry>,
}

impl LineRecord {
    /// A line that is emitted verbatim
    pub fn verbatim(original: impl Into<String>) -> Self {
        Self {
            original: original.into(),
            entry: None,
        }
    }

    /// A line classified as a host entry
    pub fn host(original: impl Into<String>, entry: HostEntry) -> Self {
        Self {
            original: original.into(),
            entry: Some(entry),
        }
    }

    /// Whether this line is a host entry
    pub fn is_host_entry(&self) -> bool {
        self.entry.is_some()
    }

    /// The IP literal, for host entries
    pub fn ip(&self) -> Option<&str> {
        self.entry.as_ref().map(|e| e.ip.as_str())
    }

    /// The hostname, for host entries
    pub fn host_name(&self) -> Option<&str> {
        self.entry.as_ref().map(|e| e.host.as_str())
    }
}

//! Session module - immutable caller state passed into each conversion

use crate::platform::Platform;
use crate::template::Template;
use std::collections::BTreeMap;

/// Selected platform, user template overrides and the dedupe flag
///
/// A session is a value: every `with_*` method returns a new session and leaves
/// the original untouched, so the conversion core never sees shared mutable state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Session {
    platform: Platform,
    overrides: BTreeMap<String, Template>,
    dedupe: bool,
}

impl Session {
    /// Create a session for a platform with no overrides and dedupe off
    pub fn new(platform: Platform) -> Self {
        Self {
            platform,
            ..Self::default()
        }
    }

    /// Select a different platform
    pub fn with_platform(&self, platform: Platform) -> Self {
        Self {
            platform,
            ..self.clone()
        }
    }

    /// Register a user template for a platform
    pub fn with_override(&self, platform: &Platform, template: impl Into<Template>) -> Self {
        let mut overrides = self.overrides.clone();
        overrides.insert(platform.id().to_string(), template.into());
        Self {
            overrides,
            ..self.clone()
        }
    }

    /// Remove a user template for a platform
    pub fn without_override(&self, platform: &Platform) -> Self {
        let mut overrides = self.overrides.clone();
        overrides.remove(platform.id());
        Self {
            overrides,
            ..self.clone()
        }
    }

    /// Toggle deduplication
    pub fn with_dedupe(&self, dedupe: bool) -> Self {
        Self {
            dedupe,
            ..self.clone()
        }
    }

    /// The selected platform
    pub fn platform(&self) -> &Platform {
        &self.platform
    }

    /// Whether duplicate mappings are dropped
    pub fn dedupe(&self) -> bool {
        self.dedupe
    }

    /// The user template registered for a platform, if any
    pub fn user_template(&self, platform: &Platform) -> Option<&Template> {
        self.overrides.get(platform.id())
    }

    /// Resolve the active template for the selected platform
    pub fn resolve_template(&self) -> Option<Template> {
        self.template_for(&self.platform)
    }

    /// Resolve the active template for any platform
    ///
    /// `custom` only ever uses the user's template. Other platforms use a non-empty user
    /// template when one is registered and fall back to the built-in otherwise.
    pub fn template_for(&self, platform: &Platform) -> Option<Template> {
        let user = self.user_template(platform);
        match platform {
            Platform::Custom => user.cloned(),
            _ => user
                .filter(|t| !t.is_empty())
                .cloned()
                .or_else(|| platform.builtin_template()),
        }
    }
}

//! Element kinds and the lookup table that maps them to sub-element roles.
//!
//! The host owns the set of element kinds and can register new ones without
//! touching the controller: each kind maps to a [`KindEntry`] telling the
//! controller whether the element carries content that must not be clipped
//! (an overflow target) and which sub-element role the host should resolve.

#[cfg(test)]
#[path = "kinds_test.rs"]
mod kinds_test;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Name of an element kind, e.g. `"image"` or `"post-title"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElementKind(pub String);

impl ElementKind {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ElementKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Which sub-element the host resolves for an element kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectorRole {
    /// Text content; its natural size bounds how small the element may get.
    Text,
    /// Inner image wrapper, resized in lockstep with the element.
    Image,
    /// No sub-element.
    #[default]
    None,
}

/// Table entry for one element kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct KindEntry {
    /// Whether the `Text` sub-element constrains resizing.
    #[serde(default)]
    pub has_overflow_target: bool,
    #[serde(default)]
    pub selector_role: SelectorRole,
}

impl KindEntry {
    pub const TEXT: Self = Self { has_overflow_target: true, selector_role: SelectorRole::Text };
    pub const IMAGE: Self = Self { has_overflow_target: false, selector_role: SelectorRole::Image };
    pub const PLAIN: Self = Self { has_overflow_target: false, selector_role: SelectorRole::None };

    /// Role to resolve as an overflow target, if this kind has one.
    #[must_use]
    pub fn overflow_role(&self) -> Option<SelectorRole> {
        (self.has_overflow_target && self.selector_role == SelectorRole::Text).then_some(SelectorRole::Text)
    }

    /// Role to resolve as a lockstep preview target, if this kind has one.
    #[must_use]
    pub fn preview_role(&self) -> Option<SelectorRole> {
        (self.selector_role == SelectorRole::Image).then_some(SelectorRole::Image)
    }

    #[must_use]
    pub fn is_image(&self) -> bool {
        self.selector_role == SelectorRole::Image
    }
}

/// Caller-supplied mapping from element kind to [`KindEntry`].
///
/// Unknown kinds resolve to [`KindEntry::PLAIN`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KindTable {
    entries: HashMap<ElementKind, KindEntry>,
}

impl KindTable {
    /// An empty table; every kind resolves as plain.
    #[must_use]
    pub fn empty() -> Self {
        Self { entries: HashMap::new() }
    }

    /// The built-in story element kinds.
    #[must_use]
    pub fn story_defaults() -> Self {
        let mut table = Self::empty();
        table.register(ElementKind::new("image"), KindEntry::IMAGE);
        table.register(ElementKind::new("text"), KindEntry::TEXT);
        table.register(ElementKind::new("post-title"), KindEntry::TEXT);
        table.register(ElementKind::new("post-author"), KindEntry::TEXT);
        table.register(ElementKind::new("post-date"), KindEntry::TEXT);
        table
    }

    /// Insert or replace the entry for `kind`, returning the previous entry.
    pub fn register(&mut self, kind: ElementKind, entry: KindEntry) -> Option<KindEntry> {
        self.entries.insert(kind, entry)
    }

    /// Entry for `kind`; plain if unregistered.
    #[must_use]
    pub fn lookup(&self, kind: &ElementKind) -> KindEntry {
        self.entries.get(kind).copied().unwrap_or(KindEntry::PLAIN)
    }

    #[must_use]
    pub fn contains(&self, kind: &ElementKind) -> bool {
        self.entries.contains_key(kind)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for KindTable {
    fn default() -> Self {
        Self::story_defaults()
    }
}

//! Host capability interface and a map-backed implementation.
//!
//! The controller never touches a document tree. Whatever the host renders
//! into, it answers these queries with already-resolved handles and sizes.

#[cfg(test)]
#[path = "host_test.rs"]
mod host_test;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::geometry::Dimensions;
use crate::kinds::SelectorRole;

/// Unique identifier for a story element.
pub type ElementId = Uuid;

/// Opaque handle to a sub-element the host resolved for a gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TargetId(pub u64);

/// Queries the controller makes against the host for the element being resized.
pub trait ElementHost {
    /// Content sub-element whose natural size must not be clipped.
    fn overflow_target(&self, element: ElementId, role: SelectorRole) -> Option<TargetId>;

    /// Secondary sub-element that is resized in lockstep with the element.
    fn preview_target(&self, element: ElementId, role: SelectorRole) -> Option<TargetId>;

    /// Current natural (unclipped) content size of `target`. Queried on every
    /// move, since content reflows as the element changes size.
    fn natural_size(&self, target: TargetId) -> Option<Dimensions>;

    /// Size the element is currently rendered at.
    fn rendered_size(&self, element: ElementId) -> Option<Dimensions>;
}

/// An [`ElementHost`] answering from in-memory maps.
#[derive(Debug, Clone, Default)]
pub struct StaticHost {
    overflow: HashMap<(ElementId, SelectorRole), TargetId>,
    preview: HashMap<(ElementId, SelectorRole), TargetId>,
    natural: HashMap<TargetId, Dimensions>,
    rendered: HashMap<ElementId, Dimensions>,
}

impl StaticHost {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a text overflow target with the given natural size.
    #[must_use]
    pub fn with_overflow_target(mut self, element: ElementId, target: TargetId, natural: Dimensions) -> Self {
        self.overflow.insert((element, SelectorRole::Text), target);
        self.natural.insert(target, natural);
        self
    }

    /// Attach an image preview target.
    #[must_use]
    pub fn with_preview_target(mut self, element: ElementId, target: TargetId) -> Self {
        self.preview.insert((element, SelectorRole::Image), target);
        self
    }

    #[must_use]
    pub fn with_rendered_size(mut self, element: ElementId, size: Dimensions) -> Self {
        self.rendered.insert(element, size);
        self
    }

    /// Change a target's natural size, e.g. after its content reflowed.
    pub fn set_natural_size(&mut self, target: TargetId, natural: Dimensions) {
        self.natural.insert(target, natural);
    }
}

impl ElementHost for StaticHost {
    fn overflow_target(&self, element: ElementId, role: SelectorRole) -> Option<TargetId> {
        self.overflow.get(&(element, role)).copied()
    }

    fn preview_target(&self, element: ElementId, role: SelectorRole) -> Option<TargetId> {
        self.preview.get(&(element, role)).copied()
    }

    fn natural_size(&self, target: TargetId) -> Option<Dimensions> {
        self.natural.get(&target).copied()
    }

    fn rendered_size(&self, element: ElementId) -> Option<Dimensions> {
        self.rendered.get(&element).copied()
    }
}

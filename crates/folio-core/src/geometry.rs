//! Geometry types and the source abstraction the trackers run against
//!
//! The trackers never talk to a real window. They are handed a
//! [`GeometrySource`] each tick: the render layer implements it with a
//! [`GeometryRegistry`] it fills during layout, tests implement it with
//! hand-built fixtures.

use indexmap::{IndexMap, IndexSet};
use std::fmt::Display;

/// Axis-aligned rectangle in screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Rect {
    pub fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Build a rect from its top-left corner and a size.
    pub fn from_min_size(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            right: left + width,
            bottom: top + height,
        }
    }

    pub fn width(&self) -> f32 {
        (self.right - self.left).max(0.0)
    }

    pub fn height(&self) -> f32 {
        (self.bottom - self.top).max(0.0)
    }

    pub fn area(&self) -> f32 {
        self.width() * self.height()
    }

    /// Intersection of two rects; zero-area when they are disjoint.
    pub fn intersect(&self, other: &Rect) -> Rect {
        Rect {
            left: self.left.max(other.left),
            top: self.top.max(other.top),
            right: self.right.min(other.right),
            bottom: self.bottom.min(other.bottom),
        }
    }

    /// Fraction of this rect's area that overlaps `viewport`, in 0.0..=1.0.
    ///
    /// A zero-area rect has no overlap fraction and reports 0.0.
    pub fn intersection_ratio(&self, viewport: &Rect) -> f32 {
        let own_area = self.area();
        if own_area <= 0.0 {
            return 0.0;
        }
        self.intersect(viewport).area() / own_area
    }

    pub fn translate(&self, dx: f32, dy: f32) -> Rect {
        Rect {
            left: self.left + dx,
            top: self.top + dy,
            right: self.right + dx,
            bottom: self.bottom + dy,
        }
    }
}

/// Identifier for a tracked element, built from path-like components so ids
/// stay unique across repeated widgets (e.g. `skill_badge_idx_3`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(String);

impl ElementId {
    /// Create a new element ID from a base component
    pub fn new(base: impl Display) -> Self {
        Self(base.to_string())
    }

    /// Add a component to the ID
    pub fn with(mut self, component: impl Display) -> Self {
        self.0.push('_');
        self.0.push_str(&component.to_string());
        self
    }

    /// Add an index to the ID (useful in loops)
    pub fn index(self, idx: usize) -> Self {
        self.with(format!("idx_{}", idx))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for ElementId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// The three environment capabilities the trackers need: the viewport rect,
/// the current scroll offset, and per-element bounding rects.
pub trait GeometrySource {
    /// Visible viewport rectangle in screen coordinates.
    fn viewport_rect(&self) -> Rect;

    /// Vertical scroll offset from the top of the page, in pixels.
    fn scroll_offset(&self) -> f32;

    /// Bounding rect of an element, or `None` if it has not been laid out.
    fn element_rect(&self, id: &ElementId) -> Option<Rect>;
}

/// Concrete [`GeometrySource`] filled in by the render layer during layout.
///
/// Rects are re-recorded every frame. The owner brackets each frame with
/// [`GeometryRegistry::begin_frame`] and [`GeometryRegistry::sweep_stale`]:
/// elements not re-recorded between the two calls have left the page (a
/// profile reload removed their content) and are dropped, so their ids can
/// be released from the trackers as well.
#[derive(Debug, Clone)]
pub struct GeometryRegistry {
    viewport: Rect,
    scroll_offset: f32,
    elements: IndexMap<ElementId, Rect>,
    touched: IndexSet<ElementId>,
}

impl GeometryRegistry {
    pub fn new() -> Self {
        Self {
            viewport: Rect::new(0.0, 0.0, 0.0, 0.0),
            scroll_offset: 0.0,
            elements: IndexMap::new(),
            touched: IndexSet::new(),
        }
    }

    pub fn set_viewport(&mut self, viewport: Rect) {
        self.viewport = viewport;
    }

    pub fn set_scroll_offset(&mut self, offset: f32) {
        self.scroll_offset = offset;
    }

    /// Start a new layout pass: every element must be re-recorded before the
    /// matching [`GeometryRegistry::sweep_stale`] call to stay registered.
    pub fn begin_frame(&mut self) {
        self.touched.clear();
    }

    /// Record (or refresh) the rect of a laid-out element.
    pub fn record(&mut self, id: ElementId, rect: Rect) {
        self.touched.insert(id.clone());
        self.elements.insert(id, rect);
    }

    /// Drop every element not recorded since the last
    /// [`GeometryRegistry::begin_frame`] and return their ids, so the caller
    /// can release them from the trackers too.
    pub fn sweep_stale(&mut self) -> Vec<ElementId> {
        let stale: Vec<ElementId> = self
            .elements
            .keys()
            .filter(|id| !self.touched.contains(*id))
            .cloned()
            .collect();
        for id in &stale {
            self.elements.shift_remove(id);
        }
        stale
    }

    /// Forget a single element, e.g. when its owning view is torn down.
    pub fn remove(&mut self, id: &ElementId) {
        self.elements.shift_remove(id);
    }

    /// Drop all recorded elements (viewport and scroll offset are kept).
    pub fn clear(&mut self) {
        self.elements.clear();
        self.touched.clear();
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

impl Default for GeometryRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl GeometrySource for GeometryRegistry {
    fn viewport_rect(&self) -> Rect {
        self.viewport
    }

    fn scroll_offset(&self) -> f32 {
        self.scroll_offset
    }

    fn element_rect(&self, id: &ElementId) -> Option<Rect> {
        self.elements.get(id).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_id_builder() {
        let id = ElementId::new("section").with("skills").index(3);
        assert_eq!(id.as_str(), "section_skills_idx_3");
    }

    #[test]
    fn test_intersection_ratio_disjoint() {
        let element = Rect::from_min_size(0.0, 1000.0, 100.0, 100.0);
        let viewport = Rect::from_min_size(0.0, 0.0, 800.0, 600.0);
        assert_eq!(element.intersection_ratio(&viewport), 0.0);
    }

    #[test]
    fn test_intersection_ratio_contained() {
        let element = Rect::from_min_size(10.0, 10.0, 100.0, 100.0);
        let viewport = Rect::from_min_size(0.0, 0.0, 800.0, 600.0);
        assert_eq!(element.intersection_ratio(&viewport), 1.0);
    }

    #[test]
    fn test_intersection_ratio_half_overlap() {
        // Element straddles the bottom edge of the viewport, half inside.
        let element = Rect::from_min_size(0.0, 550.0, 100.0, 100.0);
        let viewport = Rect::from_min_size(0.0, 0.0, 800.0, 600.0);
        assert!((element.intersection_ratio(&viewport) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_intersection_ratio_zero_area_element() {
        let element = Rect::from_min_size(10.0, 10.0, 0.0, 0.0);
        let viewport = Rect::from_min_size(0.0, 0.0, 800.0, 600.0);
        assert_eq!(element.intersection_ratio(&viewport), 0.0);
    }

    #[test]
    fn test_sweep_drops_elements_not_rerecorded() {
        let mut registry = GeometryRegistry::new();
        let kept = ElementId::new("skill").with("Rust");
        let gone = ElementId::new("skill").with("Flutter");
        let rect = Rect::from_min_size(0.0, 0.0, 100.0, 40.0);

        registry.begin_frame();
        registry.record(kept.clone(), rect);
        registry.record(gone.clone(), rect);
        assert!(registry.sweep_stale().is_empty());

        // Next frame only one of the two is laid out.
        registry.begin_frame();
        registry.record(kept.clone(), rect);
        assert_eq!(registry.sweep_stale(), vec![gone.clone()]);

        assert!(registry.element_rect(&kept).is_some());
        assert!(registry.element_rect(&gone).is_none());
    }

    #[test]
    fn test_registry_records_and_removes() {
        let mut registry = GeometryRegistry::new();
        let id = ElementId::new("hero");
        registry.record(id.clone(), Rect::from_min_size(0.0, 0.0, 100.0, 50.0));
        assert!(registry.element_rect(&id).is_some());

        registry.remove(&id);
        assert!(registry.element_rect(&id).is_none());
    }
}

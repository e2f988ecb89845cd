use crate::geometry::ElementId;

/// Trait for components that react to visibility transitions
pub trait VisibilitySubscriber: Send + Sync {
    /// Called whenever a tracked element's visibility flag flips.
    fn on_visibility_change(&self, id: &ElementId, visible: bool);
}

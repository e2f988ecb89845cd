use super::ScrollContext;

/// Trait for components that follow the active-section state
pub trait SectionSubscriber: Send + Sync {
    /// Called once per scroll tick on which the active section or the
    /// scroll-to-top flag changed.
    fn on_scroll_change(&self, context: &ScrollContext);
}

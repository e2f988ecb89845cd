use serde::{Deserialize, Serialize};

mod subscriber;
mod tracker;

pub use subscriber::SectionSubscriber;
pub use tracker::SectionTracker;

use crate::geometry::ElementId;

/// Named anchor point in the page. The set is fixed at compile time and
/// listed in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SectionId(pub &'static str);

impl SectionId {
    pub fn as_str(&self) -> &'static str {
        self.0
    }

    /// The geometry key the render layer records this section's rect under.
    pub fn element_id(&self) -> ElementId {
        ElementId::new("section").with(self.0)
    }
}

impl std::fmt::Display for SectionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.0)
    }
}

/// Section tracker configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SectionTrackerConfig {
    /// A section whose top edge sits within this many pixels of the viewport
    /// top (or above it) is considered currently viewed.
    pub activation_margin: f32,

    /// Scroll offset at which the scroll-to-top control appears (inclusive).
    pub scroll_top_threshold: f32,
}

impl Default for SectionTrackerConfig {
    fn default() -> Self {
        Self {
            activation_margin: 100.0,
            scroll_top_threshold: 400.0,
        }
    }
}

/// Context passed to subscribers on every change
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollContext {
    /// Currently active section; `None` only before the first activation.
    pub active: Option<SectionId>,

    /// Whether the scroll-to-top control should be shown.
    pub show_scroll_top: bool,

    /// Scroll offset the context was derived from.
    pub scroll_offset: f32,
}

//! Page-level settings

use crate::sections::SectionTrackerConfig;
use serde::{Deserialize, Serialize};

/// Defaults for the reveal transition applied when an element becomes
/// visible.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RevealStyleDefaults {
    /// Transition duration in seconds.
    pub duration: f32,

    /// Translation offset in pixels that interpolates to zero.
    pub distance: f32,

    /// Stagger step in seconds applied per item in indexed groups.
    pub stagger_step: f32,
}

impl Default for RevealStyleDefaults {
    fn default() -> Self {
        Self {
            duration: 0.6,
            distance: 20.0,
            stagger_step: 0.1,
        }
    }
}

/// Page-wide settings owned by the top-level controller and passed down to
/// the views.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct PageSettings {
    pub tracker: SectionTrackerConfig,
    pub reveal: RevealStyleDefaults,
}

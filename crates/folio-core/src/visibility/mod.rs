mod subscriber;
mod tracker;

pub use subscriber::VisibilitySubscriber;
pub use tracker::VisibilityTracker;

use serde::{Deserialize, Serialize};

/// Token handed out by `subscribe`, used to unsubscribe later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionToken(pub uuid::Uuid);

impl SubscriptionToken {
    pub(crate) fn new() -> Self {
        Self(uuid::Uuid::new_v4())
    }
}

/// Per-element reveal configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RevealConfig {
    /// Fraction of the element's area that must intersect the viewport for
    /// it to count as visible. At or below 0.0, any overlap counts.
    pub threshold: f32,

    /// Once visible, stay visible and stop monitoring the element.
    pub trigger_once: bool,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            trigger_once: false,
        }
    }
}

impl RevealConfig {
    pub fn once() -> Self {
        Self {
            trigger_once: true,
            ..Default::default()
        }
    }

    pub fn with_threshold(mut self, threshold: f32) -> Self {
        self.threshold = threshold;
        self
    }

    /// Stable structural signature, used to gate re-observation. Two configs
    /// with equal field values always produce the same signature regardless
    /// of where they were built.
    pub fn signature(&self) -> u64 {
        ((self.threshold.to_bits() as u64) << 1) | (self.trigger_once as u64)
    }
}

//! Core functionality for the portfolio page viewer
//!
//! This crate provides the headless scroll/visibility tracking engines and
//! the geometry abstraction they run against. Nothing in here depends on a
//! concrete UI toolkit; the render layer feeds geometry in and reads derived
//! state back out.

pub mod events;
pub mod geometry;
pub mod sections;
pub mod settings;
pub mod visibility;

// Re-export commonly used types
pub use geometry::{ElementId, GeometryRegistry, GeometrySource, Rect};
pub use sections::{
    ScrollContext, SectionId, SectionSubscriber, SectionTracker, SectionTrackerConfig,
};
pub use settings::{PageSettings, RevealStyleDefaults};
pub use visibility::{RevealConfig, SubscriptionToken, VisibilitySubscriber, VisibilityTracker};

//! Visibility tracker implementation

use super::{RevealConfig, SubscriptionToken, VisibilitySubscriber};
use crate::geometry::{ElementId, GeometrySource};
use indexmap::IndexMap;
use parking_lot::RwLock;
use std::sync::{Arc, Weak};
use tracing::trace;

/// State of one observed element
#[derive(Debug, Clone)]
struct ObservedEntry {
    config: RevealConfig,
    visible: bool,
    /// Set once a `trigger_once` entry has fired; the entry is then
    /// permanently visible and skipped by every later pass.
    latched: bool,
}

/// Decides, per observed element, whether it is currently intersecting the
/// viewport enough to be in its revealed state.
///
/// Observation is keyed by element identity: re-observing an element is a
/// no-op while the configuration is structurally unchanged, so render-driven
/// re-registration never multiplies observers. Elements without recorded
/// geometry are simply skipped until they show up in the source.
pub struct VisibilityTracker {
    state: Arc<RwLock<IndexMap<ElementId, ObservedEntry>>>,
    subscribers: Arc<RwLock<Vec<(SubscriptionToken, Weak<dyn VisibilitySubscriber>)>>>,
}

impl VisibilityTracker {
    /// Create a new visibility tracker
    pub fn new() -> Self {
        Self {
            state: Arc::new(RwLock::new(IndexMap::new())),
            subscribers: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Begin monitoring an element.
    ///
    /// Idempotent: a repeat call with a structurally equal config does
    /// nothing. A call with a different config swaps the config in place,
    /// keeping the single existing entry and its current flag; the element is
    /// re-evaluated under the new config on the next pass.
    pub fn observe(&self, id: ElementId, config: RevealConfig) {
        let mut state = self.state.write();

        if let Some(entry) = state.get_mut(&id) {
            if entry.config.signature() == config.signature() {
                return;
            }
            trace!(element = %id, "swapping reveal config");
            entry.config = config;
            if !config.trigger_once {
                entry.latched = false;
            }
            return;
        }

        state.insert(
            id,
            ObservedEntry {
                config,
                visible: false,
                latched: false,
            },
        );
    }

    /// Stop monitoring an element. Safe to call for elements that were never
    /// observed or were already released.
    pub fn release(&self, id: &ElementId) {
        self.state.write().shift_remove(id);
    }

    /// Whether an element is currently in its revealed state. Unknown
    /// elements are not revealed.
    pub fn is_visible(&self, id: &ElementId) -> bool {
        self.state.read().get(id).map_or(false, |e| e.visible)
    }

    /// Number of elements currently being monitored (latched entries
    /// included).
    pub fn observed_count(&self) -> usize {
        self.state.read().len()
    }

    /// Run one observation pass against the given geometry and emit a
    /// transition for every element whose flag flipped.
    pub fn process(&self, geometry: &dyn GeometrySource) {
        let viewport = geometry.viewport_rect();
        let mut transitions = Vec::new();

        {
            let mut state = self.state.write();
            for (id, entry) in state.iter_mut() {
                if entry.latched {
                    continue;
                }

                // Not attached yet: keep the entry pending, emit nothing.
                let Some(rect) = geometry.element_rect(id) else {
                    continue;
                };

                let ratio = rect.intersection_ratio(&viewport);
                let visible = if entry.config.threshold <= 0.0 {
                    ratio > 0.0
                } else {
                    ratio >= entry.config.threshold
                };

                if visible == entry.visible {
                    continue;
                }
                entry.visible = visible;

                if entry.config.trigger_once {
                    // Only the become-visible transition is ever emitted;
                    // after it the entry stops being monitored.
                    if visible {
                        entry.latched = true;
                        transitions.push((id.clone(), true));
                    }
                } else {
                    transitions.push((id.clone(), visible));
                }
            }
        }

        // Dispatch with no lock held so a subscriber may call back in.
        for (id, visible) in transitions {
            self.notify_subscribers(&id, visible);
        }
    }

    /// Add a subscriber
    pub fn subscribe(&self, subscriber: Arc<dyn VisibilitySubscriber>) -> SubscriptionToken {
        let token = SubscriptionToken::new();
        self.subscribers
            .write()
            .push((token, Arc::downgrade(&subscriber)));
        token
    }

    /// Remove a subscriber; a no-op for unknown or already-removed tokens.
    pub fn unsubscribe(&self, token: SubscriptionToken) {
        self.subscribers.write().retain(|(t, _)| *t != token);
    }

    fn notify_subscribers(&self, id: &ElementId, visible: bool) {
        let live: Vec<Arc<dyn VisibilitySubscriber>> = {
            let mut subscribers = self.subscribers.write();

            // Remove any dead weak references
            subscribers.retain(|(_, weak)| weak.strong_count() > 0);

            subscribers
                .iter()
                .filter_map(|(_, weak)| weak.upgrade())
                .collect()
        };

        for subscriber in live {
            subscriber.on_visibility_change(id, visible);
        }
    }
}

impl Default for VisibilityTracker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Rect;
    use parking_lot::Mutex;
    use std::collections::HashMap;

    /// Hand-built geometry fixture standing in for the render layer.
    struct Fixture {
        viewport: Rect,
        elements: HashMap<ElementId, Rect>,
    }

    impl Fixture {
        fn new() -> Self {
            Self {
                viewport: Rect::from_min_size(0.0, 0.0, 800.0, 600.0),
                elements: HashMap::new(),
            }
        }

        fn place_on_screen(&mut self, id: &ElementId) {
            self.elements
                .insert(id.clone(), Rect::from_min_size(0.0, 100.0, 200.0, 100.0));
        }

        fn place_off_screen(&mut self, id: &ElementId) {
            self.elements
                .insert(id.clone(), Rect::from_min_size(0.0, 2000.0, 200.0, 100.0));
        }
    }

    impl GeometrySource for Fixture {
        fn viewport_rect(&self) -> Rect {
            self.viewport
        }

        fn scroll_offset(&self) -> f32 {
            0.0
        }

        fn element_rect(&self, id: &ElementId) -> Option<Rect> {
            self.elements.get(id).copied()
        }
    }

    /// Subscriber that records every transition it sees.
    struct Recorder {
        events: Mutex<Vec<(ElementId, bool)>>,
    }

    impl Recorder {
        fn new() -> Arc<Self> {
            Arc::new(Self {
                events: Mutex::new(Vec::new()),
            })
        }

        fn events(&self) -> Vec<(ElementId, bool)> {
            self.events.lock().clone()
        }
    }

    impl VisibilitySubscriber for Recorder {
        fn on_visibility_change(&self, id: &ElementId, visible: bool) {
            self.events.lock().push((id.clone(), visible));
        }
    }

    #[test]
    fn test_never_intersecting_stays_hidden() {
        let tracker = VisibilityTracker::new();
        let id = ElementId::new("card");
        let mut fixture = Fixture::new();
        fixture.place_off_screen(&id);

        tracker.observe(id.clone(), RevealConfig::default());
        for _ in 0..10 {
            tracker.process(&fixture);
        }

        assert!(!tracker.is_visible(&id));
    }

    #[test]
    fn test_trigger_once_latches_and_stops_firing() {
        let tracker = VisibilityTracker::new();
        let recorder = Recorder::new();
        tracker.subscribe(recorder.clone());

        let id = ElementId::new("hero");
        let mut fixture = Fixture::new();
        fixture.place_on_screen(&id);

        tracker.observe(id.clone(), RevealConfig::once());
        tracker.process(&fixture);
        assert!(tracker.is_visible(&id));

        // Scroll it away: the flag must hold and no further callbacks fire.
        fixture.place_off_screen(&id);
        tracker.process(&fixture);
        tracker.process(&fixture);

        assert!(tracker.is_visible(&id));
        assert_eq!(recorder.events(), vec![(id, true)]);
    }

    #[test]
    fn test_bidirectional_tracking_without_trigger_once() {
        let tracker = VisibilityTracker::new();
        let recorder = Recorder::new();
        tracker.subscribe(recorder.clone());

        let id = ElementId::new("badge");
        let mut fixture = Fixture::new();

        tracker.observe(id.clone(), RevealConfig::default());

        fixture.place_on_screen(&id);
        tracker.process(&fixture);
        assert!(tracker.is_visible(&id));

        fixture.place_off_screen(&id);
        tracker.process(&fixture);
        assert!(!tracker.is_visible(&id));

        assert_eq!(
            recorder.events(),
            vec![(id.clone(), true), (id, false)]
        );
    }

    #[test]
    fn test_duplicate_observe_is_single_observer() {
        let tracker = VisibilityTracker::new();
        let recorder = Recorder::new();
        tracker.subscribe(recorder.clone());

        let id = ElementId::new("card");
        let mut fixture = Fixture::new();
        fixture.place_on_screen(&id);

        // Re-observation with an identical config must not multiply anything.
        for _ in 0..5 {
            tracker.observe(id.clone(), RevealConfig::default());
        }
        assert_eq!(tracker.observed_count(), 1);

        tracker.process(&fixture);
        assert_eq!(recorder.events().len(), 1);
    }

    #[test]
    fn test_observe_with_new_config_swaps_in_place() {
        let tracker = VisibilityTracker::new();
        let id = ElementId::new("card");
        let mut fixture = Fixture::new();

        // Half of the element hangs below the viewport.
        fixture
            .elements
            .insert(id.clone(), Rect::from_min_size(0.0, 550.0, 200.0, 100.0));

        tracker.observe(id.clone(), RevealConfig::default());
        tracker.process(&fixture);
        assert!(tracker.is_visible(&id));

        // A stricter threshold takes effect on the next pass, same entry.
        tracker.observe(id.clone(), RevealConfig::default().with_threshold(0.9));
        assert_eq!(tracker.observed_count(), 1);
        tracker.process(&fixture);
        assert!(!tracker.is_visible(&id));
    }

    #[test]
    fn test_release_unknown_is_noop() {
        let tracker = VisibilityTracker::new();
        let id = ElementId::new("ghost");
        tracker.release(&id);
        tracker.release(&id);
        assert_eq!(tracker.observed_count(), 0);
    }

    #[test]
    fn test_unattached_element_is_pending_noop() {
        let tracker = VisibilityTracker::new();
        let recorder = Recorder::new();
        tracker.subscribe(recorder.clone());

        let id = ElementId::new("card");
        let mut fixture = Fixture::new();

        // No rect recorded yet: observe must not fire or fail.
        tracker.observe(id.clone(), RevealConfig::default());
        tracker.process(&fixture);
        assert!(recorder.events().is_empty());
        assert!(!tracker.is_visible(&id));

        // Once attached, observation picks up where it left off.
        fixture.place_on_screen(&id);
        tracker.process(&fixture);
        assert!(tracker.is_visible(&id));
    }

    /// Subscriber that releases its element from inside the callback.
    struct Releaser {
        tracker: Arc<VisibilityTracker>,
        id: ElementId,
        calls: Mutex<usize>,
    }

    impl VisibilitySubscriber for Releaser {
        fn on_visibility_change(&self, _id: &ElementId, _visible: bool) {
            *self.calls.lock() += 1;
            self.tracker.release(&self.id);
        }
    }

    #[test]
    fn test_release_during_in_flight_callback() {
        let tracker = Arc::new(VisibilityTracker::new());
        let id = ElementId::new("card");
        let releaser = Arc::new(Releaser {
            tracker: tracker.clone(),
            id: id.clone(),
            calls: Mutex::new(0),
        });
        tracker.subscribe(releaser.clone());

        let mut fixture = Fixture::new();
        fixture.place_on_screen(&id);

        tracker.observe(id.clone(), RevealConfig::default());
        tracker.process(&fixture);

        // Released mid-callback: gone from the tracker, no later updates.
        assert_eq!(tracker.observed_count(), 0);
        tracker.process(&fixture);
        assert_eq!(*releaser.calls.lock(), 1);
        assert!(!tracker.is_visible(&id));
    }

    #[test]
    fn test_profile_reload_releases_removed_elements() {
        use crate::geometry::GeometryRegistry;

        let tracker = VisibilityTracker::new();
        let mut registry = GeometryRegistry::new();
        registry.set_viewport(Rect::from_min_size(0.0, 0.0, 800.0, 600.0));
        let rect = Rect::from_min_size(0.0, 100.0, 200.0, 40.0);

        let old_skill = ElementId::new("skill").with("Flutter");
        registry.begin_frame();
        registry.record(old_skill.clone(), rect);
        tracker.observe(old_skill.clone(), RevealConfig::default());
        for id in registry.sweep_stale() {
            tracker.release(&id);
        }
        tracker.process(&registry);
        assert!(tracker.is_visible(&old_skill));

        // Reload with a profile that replaced the skill: only the new badge
        // is laid out, the old entry must not survive the sweep.
        let new_skill = ElementId::new("skill").with("Go");
        registry.begin_frame();
        registry.record(new_skill.clone(), rect);
        tracker.observe(new_skill.clone(), RevealConfig::default());
        for id in registry.sweep_stale() {
            tracker.release(&id);
        }
        tracker.process(&registry);

        assert_eq!(tracker.observed_count(), 1);
        assert!(tracker.is_visible(&new_skill));
        assert!(!tracker.is_visible(&old_skill));
    }

    #[test]
    fn test_unsubscribe_stops_delivery() {
        let tracker = VisibilityTracker::new();
        let recorder = Recorder::new();
        let token = tracker.subscribe(recorder.clone());

        let id = ElementId::new("card");
        let mut fixture = Fixture::new();
        fixture.place_on_screen(&id);
        tracker.observe(id.clone(), RevealConfig::default());

        tracker.unsubscribe(token);
        tracker.unsubscribe(token); // double unsubscribe is a no-op

        tracker.process(&fixture);
        assert!(recorder.events().is_empty());
    }
}

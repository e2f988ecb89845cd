//! Section tracker implementation

use super::{ScrollContext, SectionId, SectionSubscriber, SectionTrackerConfig};
use crate::geometry::GeometrySource;
use crate::visibility::SubscriptionToken;
use parking_lot::RwLock;
use std::sync::{Arc, Weak};
use tracing::debug;

/// Scroll state stored internally
#[derive(Debug, Clone, Copy)]
struct SectionState {
    active: Option<SectionId>,
    show_scroll_top: bool,
    scroll_offset: f32,
}

/// Determines which page section the user is currently viewing, once per
/// scroll tick, and derives the scroll-to-top flag.
///
/// Selection scans the section list in reverse declaration order and picks
/// the first section whose top offset relative to the viewport is at or
/// under the activation margin, so the section declared latest wins ties.
/// When no section qualifies the previous value is retained; the state is
/// empty only before the first successful activation.
pub struct SectionTracker {
    sections: Vec<SectionId>,
    config: SectionTrackerConfig,
    state: Arc<RwLock<SectionState>>,
    subscribers: Arc<RwLock<Vec<(SubscriptionToken, Weak<dyn SectionSubscriber>)>>>,
}

impl SectionTracker {
    /// Create a tracker over the given sections, in declaration order.
    pub fn new(sections: Vec<SectionId>, config: SectionTrackerConfig) -> Self {
        Self {
            sections,
            config,
            state: Arc::new(RwLock::new(SectionState {
                active: None,
                show_scroll_top: false,
                scroll_offset: 0.0,
            })),
            subscribers: Arc::new(RwLock::new(Vec::new())),
        }
    }

    pub fn sections(&self) -> &[SectionId] {
        &self.sections
    }

    pub fn config(&self) -> SectionTrackerConfig {
        self.config
    }

    /// Currently active section, if any activation has happened yet.
    pub fn active_section(&self) -> Option<SectionId> {
        self.state.read().active
    }

    /// Whether the scroll-to-top control should currently be shown.
    pub fn show_scroll_top(&self) -> bool {
        self.state.read().show_scroll_top
    }

    /// Get the current scroll context
    pub fn context(&self) -> ScrollContext {
        let state = self.state.read();
        ScrollContext {
            active: state.active,
            show_scroll_top: state.show_scroll_top,
            scroll_offset: state.scroll_offset,
        }
    }

    /// Run one scroll tick against the given geometry.
    pub fn on_scroll(&self, geometry: &dyn GeometrySource) {
        let viewport_top = geometry.viewport_rect().top;
        let scroll_offset = geometry.scroll_offset();

        // Reverse declaration order: the section declared latest wins ties.
        let mut selected = None;
        for section in self.sections.iter().rev() {
            let Some(rect) = geometry.element_rect(&section.element_id()) else {
                continue;
            };
            let top_offset = rect.top - viewport_top;
            if top_offset <= self.config.activation_margin {
                selected = Some(*section);
                break;
            }
        }

        let show_scroll_top = scroll_offset >= self.config.scroll_top_threshold;

        let changed_context = {
            let mut state = self.state.write();
            let previous = state.active;

            // No match: keep whatever was active before this tick.
            if let Some(section) = selected {
                state.active = Some(section);
            }

            let changed = state.active != previous || state.show_scroll_top != show_scroll_top;
            state.show_scroll_top = show_scroll_top;
            state.scroll_offset = scroll_offset;

            changed.then_some(ScrollContext {
                active: state.active,
                show_scroll_top,
                scroll_offset,
            })
        };

        if let Some(context) = changed_context {
            debug!(active = ?context.active, scroll_top = context.show_scroll_top, "scroll state changed");
            self.notify_subscribers(&context);
        }
    }

    /// Add a subscriber
    pub fn subscribe(&self, subscriber: Arc<dyn SectionSubscriber>) -> SubscriptionToken {
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

    fn notify_subscribers(&self, context: &ScrollContext) {
        let live: Vec<Arc<dyn SectionSubscriber>> = {
            let mut subscribers = self.subscribers.write();

            // Remove any dead weak references
            subscribers.retain(|(_, weak)| weak.strong_count() > 0);

            subscribers
                .iter()
                .filter_map(|(_, weak)| weak.upgrade())
                .collect()
        };

        for subscriber in live {
            subscriber.on_scroll_change(context);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{ElementId, Rect};
    use parking_lot::Mutex;
    use std::collections::HashMap;

    const A: SectionId = SectionId("a");
    const B: SectionId = SectionId("b");
    const C: SectionId = SectionId("c");

    /// Fixture exposing one rect per section at a given top offset.
    struct Fixture {
        tops: HashMap<ElementId, f32>,
        scroll_offset: f32,
    }

    impl Fixture {
        fn with_tops(tops: &[(SectionId, f32)]) -> Self {
            Self {
                tops: tops
                    .iter()
                    .map(|(s, top)| (s.element_id(), *top))
                    .collect(),
                scroll_offset: 0.0,
            }
        }
    }

    impl GeometrySource for Fixture {
        fn viewport_rect(&self) -> Rect {
            Rect::from_min_size(0.0, 0.0, 800.0, 600.0)
        }

        fn scroll_offset(&self) -> f32 {
            self.scroll_offset
        }

        fn element_rect(&self, id: &ElementId) -> Option<Rect> {
            self.tops
                .get(id)
                .map(|top| Rect::from_min_size(0.0, *top, 800.0, 500.0))
        }
    }

    fn tracker() -> SectionTracker {
        SectionTracker::new(vec![A, B, C], SectionTrackerConfig::default())
    }

    #[test]
    fn test_reverse_order_first_match_wins() {
        // A at 150 fails, B at 80 and C at -20 both qualify; C is checked
        // first because iteration runs in reverse declaration order.
        let tracker = tracker();
        let fixture = Fixture::with_tops(&[(A, 150.0), (B, 80.0), (C, -20.0)]);

        tracker.on_scroll(&fixture);
        assert_eq!(tracker.active_section(), Some(C));
    }

    #[test]
    fn test_latest_declared_wins_ties() {
        let tracker = tracker();
        let fixture = Fixture::with_tops(&[(A, 50.0), (B, 50.0), (C, 50.0)]);

        tracker.on_scroll(&fixture);
        assert_eq!(tracker.active_section(), Some(C));
    }

    #[test]
    fn test_no_match_retains_previous() {
        let tracker = tracker();

        // Before any activation the state stays empty.
        let none_yet = Fixture::with_tops(&[(A, 300.0), (B, 250.0), (C, 400.0)]);
        tracker.on_scroll(&none_yet);
        assert_eq!(tracker.active_section(), None);

        let activates_b = Fixture::with_tops(&[(A, 150.0), (B, 80.0), (C, 400.0)]);
        tracker.on_scroll(&activates_b);
        assert_eq!(tracker.active_section(), Some(B));

        // Scrolled back above every section: the previous value sticks.
        tracker.on_scroll(&none_yet);
        assert_eq!(tracker.active_section(), Some(B));
    }

    #[test]
    fn test_scroll_top_flag_boundary() {
        let tracker = tracker();
        let mut fixture = Fixture::with_tops(&[(A, 150.0)]);

        for (offset, expected) in [(0.0, false), (399.0, false), (400.0, true), (401.0, true)] {
            fixture.scroll_offset = offset;
            tracker.on_scroll(&fixture);
            assert_eq!(tracker.show_scroll_top(), expected, "offset {}", offset);
        }
    }

    #[test]
    fn test_sections_without_geometry_are_skipped() {
        let tracker = tracker();

        // Only B has been laid out; C must not block selection.
        let fixture = Fixture::with_tops(&[(B, 40.0)]);
        tracker.on_scroll(&fixture);
        assert_eq!(tracker.active_section(), Some(B));
    }

    /// Subscriber counting notifications.
    struct Counter {
        contexts: Mutex<Vec<ScrollContext>>,
    }

    impl Counter {
        fn new() -> Arc<Self> {
            Arc::new(Self {
                contexts: Mutex::new(Vec::new()),
            })
        }
    }

    impl SectionSubscriber for Counter {
        fn on_scroll_change(&self, context: &ScrollContext) {
            self.contexts.lock().push(*context);
        }
    }

    #[test]
    fn test_subscribers_notified_only_on_change() {
        let tracker = tracker();
        let counter = Counter::new();
        tracker.subscribe(counter.clone());

        let fixture = Fixture::with_tops(&[(A, 50.0)]);
        tracker.on_scroll(&fixture);
        tracker.on_scroll(&fixture);
        tracker.on_scroll(&fixture);

        let contexts = counter.contexts.lock();
        assert_eq!(contexts.len(), 1);
        assert_eq!(contexts[0].active, Some(A));
    }

    #[test]
    fn test_unsubscribe_stops_delivery() {
        let tracker = tracker();
        let counter = Counter::new();
        let token = tracker.subscribe(counter.clone());

        tracker.unsubscribe(token);
        tracker.unsubscribe(token);

        let fixture = Fixture::with_tops(&[(A, 50.0)]);
        tracker.on_scroll(&fixture);
        assert!(counter.contexts.lock().is_empty());
    }
}

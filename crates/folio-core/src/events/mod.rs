use ahash::AHashMap;
use parking_lot::Mutex;
use std::sync::Arc;

/// System-wide event bus
pub struct EventBus {
    handlers: Arc<Mutex<AHashMap<std::any::TypeId, Vec<Box<dyn EventHandler>>>>>,
}

/// Event trait that all events must implement
pub trait Event: Send + Sync + 'static {
    fn as_any(&self) -> &dyn std::any::Any;
}

/// Handler trait for event handlers
pub trait EventHandler: Send + Sync {
    fn handle(&mut self, event: &dyn Event);
}

/// Common system events
pub mod events {
    use super::Event;
    use crate::sections::SectionId;

    /// A profile finished loading
    #[derive(Debug, Clone)]
    pub struct ProfileLoaded {
        pub source_name: String,
        pub profile_name: String,
    }

    /// A profile failed to load
    #[derive(Debug, Clone)]
    pub struct ProfileLoadFailed {
        pub source_name: String,
        pub error: String,
    }

    /// The active section changed
    #[derive(Debug, Clone)]
    pub struct SectionActivated {
        pub section: SectionId,
    }

    /// The scroll-to-top control was toggled
    #[derive(Debug, Clone)]
    pub struct ScrollTopToggled {
        pub visible: bool,
    }

    // Implement Event trait for all event types
    macro_rules! impl_event {
        ($($t:ty),*) => {
            $(
                impl Event for $t {
                    fn as_any(&self) -> &dyn std::any::Any {
                        self
                    }
                }
            )*
        }
    }

    impl_event!(
        ProfileLoaded,
        ProfileLoadFailed,
        SectionActivated,
        ScrollTopToggled
    );
}

impl EventBus {
    /// Create a new event bus
    pub fn new() -> Self {
        Self {
            handlers: Arc::new(Mutex::new(AHashMap::new())),
        }
    }

    /// Subscribe to events of a specific type
    pub fn subscribe<E: Event>(&self, handler: Box<dyn EventHandler>) {
        let type_id = std::any::TypeId::of::<E>();
        let mut handlers = self.handlers.lock();
        handlers.entry(type_id).or_insert_with(Vec::new).push(handler);
    }

    /// Publish an event
    pub fn publish<E: Event>(&self, event: E) {
        let type_id = std::any::TypeId::of::<E>();
        let mut handlers = self.handlers.lock();

        if let Some(event_handlers) = handlers.get_mut(&type_id) {
            for handler in event_handlers.iter_mut() {
                handler.handle(&event);
            }
        }
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

/// Helper struct for creating event handlers from closures
pub struct ClosureEventHandler<F> {
    handler: F,
}

impl<F> EventHandler for ClosureEventHandler<F>
where
    F: FnMut(&dyn Event) + Send + Sync,
{
    fn handle(&mut self, event: &dyn Event) {
        (self.handler)(event);
    }
}

/// Create an event handler from a closure
pub fn handler_from_fn<F>(f: F) -> Box<dyn EventHandler>
where
    F: FnMut(&dyn Event) + Send + Sync + 'static,
{
    Box::new(ClosureEventHandler { handler: f })
}

#[cfg(test)]
mod tests {
    use super::events::{ProfileLoaded, SectionActivated};
    use super::*;
    use crate::sections::SectionId;

    #[test]
    fn test_publish_reaches_typed_handler() {
        let bus = EventBus::new();
        let seen = Arc::new(Mutex::new(Vec::new()));

        let sink = seen.clone();
        bus.subscribe::<ProfileLoaded>(handler_from_fn(move |event| {
            if let Some(loaded) = event.as_any().downcast_ref::<ProfileLoaded>() {
                sink.lock().push(loaded.profile_name.clone());
            }
        }));

        bus.publish(ProfileLoaded {
            source_name: "sample".to_string(),
            profile_name: "Jo".to_string(),
        });
        // A different event type must not reach the handler.
        bus.publish(SectionActivated {
            section: SectionId("about"),
        });

        assert_eq!(seen.lock().clone(), vec!["Jo".to_string()]);
    }
}

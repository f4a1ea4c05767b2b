use std::cell::RefCell;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::core::display::DisplayId;
use crate::traits::EventSink;

/// Name under which rebinding events are published
pub const VIDEO_DEVICE_CHANGED: &str = "video-device-changed";

static NEXT_SURFACE_ID: AtomicU64 = AtomicU64::new(1);

/// Process-unique identity of a logical surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SurfaceId(u64);

impl SurfaceId {
    pub fn next() -> Self {
        Self(NEXT_SURFACE_ID.fetch_add(1, Ordering::Relaxed))
    }

    pub fn raw(&self) -> u64 {
        self.0
    }
}

/// A surface's physical display has been (re)determined
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RebindingEvent {
    pub source: SurfaceId,
    pub target: SurfaceId,
    pub display: DisplayId,
}

impl RebindingEvent {
    pub fn new(source: SurfaceId, target: SurfaceId, display: DisplayId) -> Self {
        Self {
            source,
            target,
            display,
        }
    }

    pub fn name(&self) -> &'static str {
        VIDEO_DEVICE_CHANGED
    }
}

/// Recording sink, drained by whoever owns the UI thread
#[derive(Debug, Default)]
pub struct EventLog {
    events: RefCell<Vec<RebindingEvent>>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.events.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.borrow().is_empty()
    }

    /// Take every recorded event, oldest first
    pub fn drain(&self) -> Vec<RebindingEvent> {
        std::mem::take(&mut *self.events.borrow_mut())
    }
}

impl EventSink for EventLog {
    fn emit(&self, event: RebindingEvent) {
        self.events.borrow_mut().push(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn surface_ids_are_unique() {
        let a = SurfaceId::next();
        let b = SurfaceId::next();
        assert_ne!(a, b);
        assert!(b.raw() > a.raw());
    }

    #[test]
    fn event_carries_published_name() {
        let id = SurfaceId::next();
        let event = RebindingEvent::new(id, id, DisplayId(0));
        assert_eq!(event.name(), "video-device-changed");
    }

    #[test]
    fn log_records_and_drains_in_order() {
        let log = EventLog::new();
        let id = SurfaceId::next();
        log.emit(RebindingEvent::new(id, id, DisplayId(0)));
        log.emit(RebindingEvent::new(id, id, DisplayId(1)));
        assert_eq!(log.len(), 2);

        let drained = log.drain();
        assert_eq!(drained[0].display, DisplayId(0));
        assert_eq!(drained[1].display, DisplayId(1));
        assert!(log.is_empty());
    }

    #[test]
    fn closures_are_sinks() {
        let seen = RefCell::new(0);
        let sink = |_event: RebindingEvent| *seen.borrow_mut() += 1;
        let id = SurfaceId::next();
        sink.emit(RebindingEvent::new(id, id, DisplayId(2)));
        assert_eq!(*seen.borrow(), 1);
    }
}

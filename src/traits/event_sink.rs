use crate::core::event::RebindingEvent;

/// Receiver of rebinding notifications (fire-and-forget)
pub trait EventSink {
    fn emit(&self, event: RebindingEvent);
}

impl<F> EventSink for F
where
    F: Fn(RebindingEvent),
{
    fn emit(&self, event: RebindingEvent) {
        self(event)
    }
}

use tracing::debug;

use super::types::Event;
use crate::records::RecordsView;

/// Receiver of refresh loop events.
///
/// Observers run synchronously on the loop's task, in subscription order,
/// so they must not block. `records` reflects the state after the event.
pub trait Observer {
    fn notify(&mut self, event: &Event, records: &RecordsView<'_>);
}

impl<F> Observer for F
where
    F: FnMut(&Event, &RecordsView<'_>),
{
    fn notify(&mut self, event: &Event, records: &RecordsView<'_>) {
        self(event, records)
    }
}

/// Ordered list of observers.
#[derive(Default)]
pub struct Observers {
    list: Vec<Box<dyn Observer + Send>>,
}

impl Observers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, observer: impl Observer + Send + 'static) {
        self.list.push(Box::new(observer));
    }

    pub fn emit(&mut self, event: &Event, records: &RecordsView<'_>) {
        debug!(
            event = "core.events.emitted",
            kind = event.name(),
            observers = self.list.len()
        );
        for observer in &mut self.list {
            observer.notify(event, records);
        }
    }

    pub fn len(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }
}

impl std::fmt::Debug for Observers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Observers")
            .field("len", &self.list.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::{DeviceSlot, StripSet};
    use std::sync::{Arc, Mutex};

    #[test]
    fn test_observers_receive_events_in_order() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let mut observers = Observers::new();

        let first = Arc::clone(&seen);
        observers.subscribe(move |event: &Event, _: &RecordsView<'_>| {
            first.lock().unwrap().push(("a", event.name()))
        });
        let second = Arc::clone(&seen);
        observers.subscribe(move |event: &Event, _: &RecordsView<'_>| {
            second.lock().unwrap().push(("b", event.name()))
        });

        let (device, strips) = (DeviceSlot::new(), StripSet::new());
        observers.emit(&Event::DoRefresh { cycle: 1 }, &RecordsView::new(&device, &strips));

        assert_eq!(observers.len(), 2);
        assert_eq!(
            *seen.lock().unwrap(),
            vec![("a", "do_refresh"), ("b", "do_refresh")]
        );
    }

    #[test]
    fn test_emit_without_observers() {
        let mut observers = Observers::new();
        assert!(observers.is_empty());
        let (device, strips) = (DeviceSlot::new(), StripSet::new());
        observers.emit(&Event::DoRefresh { cycle: 1 }, &RecordsView::new(&device, &strips));
    }
}

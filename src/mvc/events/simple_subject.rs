//! # Simple Subject
//!
//! Linear-scan implementation of [`Subject`]: registrations live in a vector
//! in attach order and every notification walks all of them.

use super::notification::{EventCode, NotificationList, ObserverId};
use super::subject::{ObserverSet, Subject};

/// In-memory subject with insertion-ordered dispatch
///
/// Re-attaching an observer replaces its list but keeps its position, so the
/// dispatch order is the order observers were first attached. That order is
/// a property of this implementation, not of the [`Subject`] contract.
#[derive(Debug, Clone, Default)]
pub struct SimpleSubject {
    registrations: Vec<(ObserverId, NotificationList)>,
}

impl SimpleSubject {
    pub fn new() -> Self {
        Self {
            registrations: Vec::new(),
        }
    }

    /// Deliver `event` to every observer whose list contains it
    ///
    /// Observers are visited in registry order, and each observer's list in
    /// list order; an entry matching `event` `k` times yields `k`
    /// deliveries. Returns the total number of deliveries made.
    pub fn notify(&self, event: EventCode, observers: &mut dyn ObserverSet) -> usize {
        let mut delivered = 0;
        for (observer, list) in &self.registrations {
            for code in list {
                if *code == event {
                    observers.deliver(*observer, event);
                    delivered += 1;
                }
            }
        }
        tracing::trace!(event, delivered, "subject notified observers");
        delivered
    }

    /// Registered observers in dispatch order
    pub fn observers(&self) -> impl Iterator<Item = ObserverId> + '_ {
        self.registrations.iter().map(|(observer, _)| *observer)
    }

    pub fn is_empty(&self) -> bool {
        self.registrations.is_empty()
    }

    pub fn clear(&mut self) {
        self.registrations.clear();
    }

    fn position(&self, observer: ObserverId) -> Option<usize> {
        self.registrations
            .iter()
            .position(|(registered, _)| *registered == observer)
    }
}

impl Subject for SimpleSubject {
    fn attach(&mut self, observer: ObserverId, list: NotificationList) {
        match self.position(observer) {
            Some(index) => self.registrations[index].1 = list,
            None => self.registrations.push((observer, list)),
        }
    }

    fn detach(&mut self, observer: ObserverId) {
        if let Some(index) = self.position(observer) {
            self.registrations.remove(index);
        }
    }

    fn registration(&self, observer: ObserverId) -> Option<&NotificationList> {
        self.position(observer)
            .map(|index| &self.registrations[index].1)
    }

    fn observer_count(&self) -> usize {
        self.registrations.len()
    }
}

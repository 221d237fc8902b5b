//! # Subject and Observer Contracts
//!
//! A subject keeps a registry of observers, each with the list of event
//! codes it cares about. Observers never hold on to the subject; the subject
//! only knows them by [`ObserverId`].
//!
//! ```text
//! System (Subject) ──notify(event)──▶ ObserverSet ──update(event, ctx)──▶ Controller
//! ```
//!
//! Delivery goes through an [`ObserverSet`], supplied by whoever owns the
//! observers (normally the facade). The set never exposes the subject, so an
//! observer cannot attach or detach anything while a notification is in
//! flight.

use super::notification::{EventCode, NotificationList, ObserverId};

/// Anything that can receive an event, given a context to act on
pub trait Observer<C: ?Sized> {
    /// Called once per matching entry of the observer's notification list
    fn update(&mut self, event: EventCode, ctx: &mut C);
}

/// Routes deliveries from a subject to the observers behind the handles
pub trait ObserverSet {
    /// Deliver `event` to the observer registered as `observer`
    ///
    /// Handles that no longer resolve are ignored.
    fn deliver(&mut self, observer: ObserverId, event: EventCode);
}

impl<F> ObserverSet for F
where
    F: FnMut(ObserverId, EventCode),
{
    fn deliver(&mut self, observer: ObserverId, event: EventCode) {
        self(observer, event)
    }
}

/// Registry side of the observer pattern
///
/// Notification itself is not part of this trait: a concrete subject decides
/// when to notify (see [`SimpleSubject::notify`](super::SimpleSubject::notify)).
pub trait Subject {
    /// Register `observer` with `list`, replacing any earlier registration
    fn attach(&mut self, observer: ObserverId, list: NotificationList);

    /// Remove the registration for `observer`; absent observers are ignored
    fn detach(&mut self, observer: ObserverId);

    /// The list `observer` is currently registered with
    fn registration(&self, observer: ObserverId) -> Option<&NotificationList>;

    /// Number of registered observers
    fn observer_count(&self) -> usize;

    fn is_attached(&self, observer: ObserverId) -> bool {
        self.registration(observer).is_some()
    }
}

//! # Notification Types
//!
//! Event codes, the per-observer interest list, observer handles and the
//! immutable subscription record captured when an observer attaches.

use std::fmt;

/// Integer code identifying an event kind
pub type EventCode = i32;

/// Ordered list of event codes an observer wants to receive
///
/// Duplicates are allowed and meaningful: an observer whose list holds a code
/// `k` times receives `k` updates for a single notification of that code.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct NotificationList(Vec<EventCode>);

impl NotificationList {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn push(&mut self, event: EventCode) {
        self.0.push(event);
    }

    /// Builder form of [`push`](Self::push)
    pub fn with(mut self, event: EventCode) -> Self {
        self.0.push(event);
        self
    }

    /// Number of entries equal to `event`
    pub fn occurrences(&self, event: EventCode) -> usize {
        self.0.iter().filter(|code| **code == event).count()
    }

    pub fn contains(&self, event: EventCode) -> bool {
        self.0.contains(&event)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, EventCode> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[EventCode] {
        &self.0
    }

    /// Copy of this list with repeated codes removed, keeping first-seen order
    pub fn deduplicated(&self) -> Self {
        let mut unique = Self::new();
        for code in &self.0 {
            if !unique.contains(*code) {
                unique.push(*code);
            }
        }
        unique
    }
}

impl From<Vec<EventCode>> for NotificationList {
    fn from(codes: Vec<EventCode>) -> Self {
        Self(codes)
    }
}

impl<const N: usize> From<[EventCode; N]> for NotificationList {
    fn from(codes: [EventCode; N]) -> Self {
        Self(codes.to_vec())
    }
}

impl FromIterator<EventCode> for NotificationList {
    fn from_iter<T: IntoIterator<Item = EventCode>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a NotificationList {
    type Item = &'a EventCode;
    type IntoIter = std::slice::Iter<'a, EventCode>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Stable identity of a registered observer
///
/// Registrations are keyed by this handle, never by comparing observers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ObserverId(u64);

impl ObserverId {
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ObserverId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Interest set captured once, when an observer attaches
///
/// A subscription never changes. To listen for something else the observer
/// has to be detached and attached again, which produces a new subscription.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subscription {
    observer: ObserverId,
    events: NotificationList,
}

impl Subscription {
    pub fn new(observer: ObserverId, events: NotificationList) -> Self {
        Self { observer, events }
    }

    pub fn observer(&self) -> ObserverId {
        self.observer
    }

    pub fn events(&self) -> &NotificationList {
        &self.events
    }
}

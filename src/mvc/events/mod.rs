//! # Events Module
//!
//! Notification primitives: event codes, interest lists, the subject and
//! observer contracts, and the simple linear-scan subject.

pub mod notification;
pub mod simple_subject;
pub mod subject;

pub use notification::{EventCode, NotificationList, ObserverId, Subscription};
pub use simple_subject::SimpleSubject;
pub use subject::{Observer, ObserverSet, Subject};

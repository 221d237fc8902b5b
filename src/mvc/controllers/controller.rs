//! # Controller
//!
//! Controllers subscribe to the System and turn its events into changes on
//! models and views. They are owned by the facade and reach its state only
//! through the [`FacadeContext`] passed into [`Observer::update`].

use crate::mvc::events::{NotificationList, Observer, ObserverId, Subscription};
use crate::mvc::facade::{FacadeContext, FacadeHandle, FacadeLink, System};

/// An observer of the System that acts on the facade
///
/// Implementors embed a [`FacadeLink`] and expose it through
/// [`link`](Self::link) / [`link_mut`](Self::link_mut); the facade fills it
/// in before [`attach`](Self::attach) runs.
pub trait Controller<I: 'static>: Observer<FacadeContext<I>> {
    fn link(&self) -> &FacadeLink;

    fn link_mut(&mut self) -> &mut FacadeLink;

    fn set_facade(&mut self, facade: FacadeHandle) {
        self.link_mut().set(facade);
    }

    fn facade(&self) -> Option<FacadeHandle> {
        self.link().get()
    }

    /// Event codes this controller wants from the System
    fn notification_list(&self) -> NotificationList {
        NotificationList::new()
    }

    /// Register with the System under `id`
    ///
    /// The notification list is read exactly once, here. What the System
    /// holds afterwards is the returned subscription, regardless of what
    /// `notification_list` would answer later.
    fn attach(&mut self, id: ObserverId, system: &mut dyn System<I>) -> Subscription {
        let subscription = Subscription::new(id, self.notification_list());
        system.attach(id, subscription.events().clone());
        tracing::debug!(
            observer = %id,
            events = ?subscription.events().as_slice(),
            "controller attached to system"
        );
        subscription
    }
}

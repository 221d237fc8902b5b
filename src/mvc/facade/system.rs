//! # System Abstraction
//!
//! The System is the event source the facade drives. It is supplied by the
//! integrator (a terminal poller, a window toolkit, a scripted queue) and is
//! itself a [`Subject`]: controllers attach to it, and it notifies them from
//! inside [`handle_events`](System::handle_events).
//!
//! ```text
//! Facade::run ──▶ System::handle_events(observers) ──▶ SimpleSubject::notify ──▶ Controller::update
//! ```

use anyhow::Result;

use crate::mvc::events::{ObserverSet, Subject};
use crate::mvc::models::AsAny;

/// Event source owned by the facade
///
/// Systems can be downcast through [`AsAny`] when an application needs its
/// concrete System back from [`Facade::system_mut`](super::Facade::system_mut).
pub trait System<I>: Subject + AsAny {
    /// Process one batch of pending events
    ///
    /// Every notification made during the step must go through `observers`.
    /// The call is synchronous; whatever blocking it does is up to the
    /// implementation.
    fn handle_events(&mut self, observers: &mut dyn ObserverSet) -> Result<()>;

    /// Interface handle views draw onto
    fn interface(&self) -> &I;

    fn interface_mut(&mut self) -> &mut I;
}

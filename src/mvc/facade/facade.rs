//! # Facade
//!
//! The composition root. A facade owns every controller, view, model and
//! the System, wires them together, and drives the main loop.
//!
//! ```text
//!                 ┌──────────────── Facade ────────────────┐
//!                 │                                        │
//!   System ◀──────┤ owns   controllers ─┐                  │
//!     │ notify    │                     │ update(ctx)      │
//!     └──────────▶│ ControllerDispatch ─┘                  │
//!                 │            │                           │
//!                 │            ▼                           │
//!                 │   FacadeContext { views, models, quit }│
//!                 └────────────────────────────────────────┘
//! ```
//!
//! Teardown order is fixed: controllers, then views, then models, then the
//! System.

use anyhow::Result;

use super::application::Application;
use super::context::FacadeContext;
use super::handle::FacadeHandle;
use super::system::System;
use crate::mvc::controllers::Controller;
use crate::mvc::error::{MvcError, MvcResult};
use crate::mvc::events::{EventCode, ObserverId, ObserverSet, Subscription};
use crate::mvc::models::{Model, ModelKey};
use crate::mvc::views::{ViewId, ViewKey, ViewNode};

/// A controller owned by the facade together with what it subscribed to
struct ControllerEntry<I: 'static> {
    subscription: Subscription,
    controller: Box<dyn Controller<I>>,
}

/// Single owner of the object graph and driver of the run loop
pub struct Facade<I: 'static> {
    controllers: Vec<ControllerEntry<I>>,
    context: FacadeContext<I>,
    system: Option<Box<dyn System<I>>>,
    next_observer: u64,
}

impl<I: 'static> Facade<I> {
    pub fn new() -> Self {
        let handle = FacadeHandle::next();
        tracing::debug!(facade = %handle, "facade created");
        Self {
            controllers: Vec::new(),
            context: FacadeContext::new(handle),
            system: None,
            next_observer: 1,
        }
    }

    /// Build the object graph through the application's hooks
    ///
    /// Runs `init_system`, `attach_controllers`, `attach_models` and
    /// `attach_views`, in that order.
    pub fn init<A: Application<I>>(&mut self, app: &mut A) -> Result<()> {
        tracing::debug!(facade = %self.handle(), "initializing");
        app.init_system(self)?;
        app.attach_controllers(self)?;
        app.attach_models(self)?;
        app.attach_views(self)?;
        Ok(())
    }

    /// `init` followed by `run`
    pub fn launch<A: Application<I>>(&mut self, app: &mut A) -> Result<()> {
        self.init(app)?;
        self.run(app)
    }

    /// Main loop: one System step, then `idle`, until quit is requested
    ///
    /// The quit flag is only checked before each iteration, so a quit
    /// requested during a step still lets that iteration's `idle` run.
    pub fn run<A: Application<I>>(&mut self, app: &mut A) -> Result<()> {
        tracing::info!(facade = %self.handle(), "run loop started");
        let mut iterations: u64 = 0;
        while !self.context.is_quitting() {
            self.step()?;
            app.idle(self)?;
            iterations += 1;
        }
        tracing::info!(facade = %self.handle(), iterations, "run loop finished");
        Ok(())
    }

    /// Let the System process one batch of events
    ///
    /// Does nothing when no System is installed.
    pub fn step(&mut self) -> Result<()> {
        let Some(system) = self.system.as_deref_mut() else {
            tracing::trace!("no system installed, skipping event step");
            return Ok(());
        };
        let mut dispatch = ControllerDispatch {
            controllers: &mut self.controllers,
            context: &mut self.context,
        };
        system.handle_events(&mut dispatch)
    }

    /// Ask the run loop to stop at its next check; never undone
    pub fn quit(&mut self) {
        self.context.quit();
    }

    pub fn is_quitting(&self) -> bool {
        self.context.is_quitting()
    }

    pub fn handle(&self) -> FacadeHandle {
        self.context.handle()
    }

    pub fn context(&self) -> &FacadeContext<I> {
        &self.context
    }

    pub fn context_mut(&mut self) -> &mut FacadeContext<I> {
        &mut self.context
    }

    /// Install the System, dropping any System installed earlier
    ///
    /// Attached controllers are registered with the new System under their
    /// stored subscriptions, in attach order.
    pub fn set_system(&mut self, system: impl System<I> + 'static) {
        self.set_boxed_system(Box::new(system));
    }

    pub fn set_boxed_system(&mut self, system: Box<dyn System<I>>) {
        if let Some(previous) = self.system.take() {
            tracing::warn!(
                observers = previous.observer_count(),
                "replacing installed system"
            );
            drop(previous);
        }
        let system = self.system.insert(system);
        for entry in &self.controllers {
            let subscription = &entry.subscription;
            system.attach(subscription.observer(), subscription.events().clone());
        }
        if !self.controllers.is_empty() {
            tracing::debug!(
                controllers = self.controllers.len(),
                "controllers carried over to new system"
            );
        }
    }

    pub fn system(&self) -> Option<&dyn System<I>> {
        self.system.as_deref()
    }

    pub fn system_mut(&mut self) -> Option<&mut (dyn System<I> + 'static)> {
        self.system.as_deref_mut()
    }

    /// Take ownership of `controller` and register it with the System
    ///
    /// The controller learns its facade before it attaches, so `attach` can
    /// rely on it. Fails when no System is installed yet.
    pub fn attach_controller(
        &mut self,
        controller: impl Controller<I> + 'static,
    ) -> MvcResult<ObserverId> {
        self.attach_boxed_controller(Box::new(controller))
    }

    pub fn attach_boxed_controller(
        &mut self,
        mut controller: Box<dyn Controller<I>>,
    ) -> MvcResult<ObserverId> {
        let system = self
            .system
            .as_deref_mut()
            .ok_or(MvcError::SystemNotInitialized)?;

        let id = ObserverId::new(self.next_observer);
        self.next_observer += 1;

        controller.set_facade(self.context.handle());
        let subscription = controller.attach(id, system);
        self.controllers.push(ControllerEntry {
            subscription,
            controller,
        });
        Ok(id)
    }

    /// Unregister a controller and hand it back to the caller
    pub fn detach_controller(&mut self, id: ObserverId) -> Option<Box<dyn Controller<I>>> {
        let index = self.controller_index(id)?;
        let entry = self.controllers.remove(index);
        if let Some(system) = self.system.as_deref_mut() {
            system.detach(id);
        }
        tracing::debug!(observer = %id, "controller detached");
        Some(entry.controller)
    }

    /// Replace a controller's subscription with its current notification list
    ///
    /// This is the only way a controller's interest changes after attach. The
    /// controller keeps its place in the System's dispatch order.
    pub fn resubscribe_controller(&mut self, id: ObserverId) -> MvcResult<Subscription> {
        let index = self
            .controller_index(id)
            .ok_or(MvcError::UnknownController(id))?;
        let system = self
            .system
            .as_deref_mut()
            .ok_or(MvcError::SystemNotInitialized)?;

        let entry = &mut self.controllers[index];
        entry.subscription = entry.controller.attach(id, system);
        Ok(entry.subscription.clone())
    }

    /// What the controller subscribed to when it last attached
    pub fn subscription(&self, id: ObserverId) -> Option<&Subscription> {
        self.controllers
            .iter()
            .find(|entry| entry.subscription.observer() == id)
            .map(|entry| &entry.subscription)
    }

    pub fn controller(&self, id: ObserverId) -> Option<&dyn Controller<I>> {
        self.controllers
            .iter()
            .find(|entry| entry.subscription.observer() == id)
            .map(|entry| &*entry.controller)
    }

    /// Attached controller handles in attach order
    pub fn controller_ids(&self) -> Vec<ObserverId> {
        self.controllers
            .iter()
            .map(|entry| entry.subscription.observer())
            .collect()
    }

    pub fn controller_count(&self) -> usize {
        self.controllers.len()
    }

    fn controller_index(&self, id: ObserverId) -> Option<usize> {
        self.controllers
            .iter()
            .position(|entry| entry.subscription.observer() == id)
    }

    pub fn attach_view(&mut self, key: ViewKey, view: impl Into<ViewNode<I>>) -> bool {
        self.context.attach_view(key, view)
    }

    pub fn remove_view(&mut self, key: ViewKey) -> Option<ViewNode<I>> {
        self.context.remove_view(key)
    }

    pub fn view(&self, key: ViewKey) -> Option<&ViewNode<I>> {
        self.context.view(key)
    }

    /// See [`FacadeContext::view_mut`] for what edits through it skip
    pub fn view_mut(&mut self, key: ViewKey) -> Option<&mut ViewNode<I>> {
        self.context.view_mut(key)
    }

    pub fn view_keys(&self) -> Vec<ViewKey> {
        self.context.view_keys()
    }

    /// See [`FacadeContext::add_child`]
    pub fn add_child(&mut self, key: ViewKey, child: impl Into<ViewNode<I>>) -> MvcResult<ViewId> {
        self.context.add_child(key, child)
    }

    pub fn remove_child(&mut self, key: ViewKey, child: ViewId) -> MvcResult<Option<ViewNode<I>>> {
        self.context.remove_child(key, child)
    }

    pub fn attach_model(&mut self, key: ModelKey, model: impl Model) -> bool {
        self.context.attach_model(key, model)
    }

    pub fn model_keys(&self) -> Vec<ModelKey> {
        self.context.model_keys()
    }

    pub fn remove_model(&mut self, key: ModelKey) -> Option<Box<dyn Model>> {
        self.context.remove_model(key)
    }

    pub fn model(&self, key: ModelKey) -> Option<&dyn Model> {
        self.context.model(key)
    }

    pub fn model_as<T: Model>(&self, key: ModelKey) -> Option<&T> {
        self.context.model_as::<T>(key)
    }

    pub fn model_as_mut<T: Model>(&mut self, key: ModelKey) -> Option<&mut T> {
        self.context.model_as_mut::<T>(key)
    }

    /// Announce a model change to subscribed root views
    pub fn publish(&mut self, event: EventCode) -> usize {
        self.context.publish(event)
    }

    /// Draw every root view onto the System's interface handle
    ///
    /// Returns `false` when there is no System to draw with.
    pub fn draw_views(&mut self) -> bool {
        let Some(system) = self.system.as_deref_mut() else {
            return false;
        };
        self.context.draw_views(system.interface_mut());
        true
    }
}

impl<I: 'static> Default for Facade<I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I: 'static> Drop for Facade<I> {
    fn drop(&mut self) {
        tracing::debug!(
            facade = %self.context.handle(),
            controllers = self.controllers.len(),
            "tearing down facade"
        );
        self.controllers.clear();
        self.context.clear_views();
        self.context.clear_models();
        self.system = None;
    }
}

/// Resolves System deliveries to the facade's controllers
struct ControllerDispatch<'a, I: 'static> {
    controllers: &'a mut Vec<ControllerEntry<I>>,
    context: &'a mut FacadeContext<I>,
}

impl<I: 'static> ObserverSet for ControllerDispatch<'_, I> {
    fn deliver(&mut self, observer: ObserverId, event: EventCode) {
        let entry = self
            .controllers
            .iter_mut()
            .find(|entry| entry.subscription.observer() == observer);
        match entry {
            Some(entry) => entry.controller.update(event, &mut *self.context),
            None => tracing::trace!(%observer, event, "no controller for subscriber"),
        }
    }
}

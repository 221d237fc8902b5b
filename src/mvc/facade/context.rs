//! # Facade Context
//!
//! The part of the facade that controllers are allowed to touch while the
//! System is dispatching: keyed views, keyed models, the quit flag, and the
//! fan-out of model-originated events to views. The System and the
//! controller list are deliberately not reachable from here.

use std::fmt;

use super::handle::FacadeHandle;
use crate::mvc::error::{MvcError, MvcResult};
use crate::mvc::events::{EventCode, ObserverId, ObserverSet, SimpleSubject, Subject};
use crate::mvc::models::{Model, ModelKey, ModelRegistry};
use crate::mvc::registry::KeyedRegistry;
use crate::mvc::views::{ViewId, ViewKey, ViewNode};

/// Views, models and run state owned by a facade
pub struct FacadeContext<I: 'static> {
    handle: FacadeHandle,
    views: KeyedRegistry<ViewNode<I>>,
    models: ModelRegistry,
    view_subscribers: SimpleSubject,
    quitting: bool,
}

/// Root views subscribe under their view identity
fn view_observer<I: 'static>(view: &ViewNode<I>) -> ObserverId {
    ObserverId::new(view.id().raw())
}

impl<I: 'static> FacadeContext<I> {
    pub(crate) fn new(handle: FacadeHandle) -> Self {
        Self {
            handle,
            views: KeyedRegistry::new(),
            models: ModelRegistry::new(),
            view_subscribers: SimpleSubject::new(),
            quitting: false,
        }
    }

    /// Identity of the owning facade
    pub fn handle(&self) -> FacadeHandle {
        self.handle
    }

    /// Ask the run loop to stop
    ///
    /// Takes effect at the next top-of-loop check; the flag is never cleared.
    pub fn quit(&mut self) {
        if !self.quitting {
            tracing::info!(facade = %self.handle, "quit requested");
        }
        self.quitting = true;
    }

    pub fn is_quitting(&self) -> bool {
        self.quitting
    }

    /// Install a root view under `key`, dropping any view already there
    ///
    /// The new view gets the facade handle, is attached, and is subscribed to
    /// model events with its notification list. Returns `true` when an
    /// earlier view was replaced.
    pub fn attach_view(&mut self, key: ViewKey, view: impl Into<ViewNode<I>>) -> bool {
        let mut view = view.into();
        let replaced = match self.views.remove(key) {
            Some(previous) => {
                self.view_subscribers.detach(view_observer(&previous));
                drop(previous);
                true
            }
            None => false,
        };

        view.set_facade(self.handle);
        view.attach(&self.models);
        self.view_subscribers
            .attach(view_observer(&view), view.notification_list());
        tracing::debug!(key, view = %view.id(), replaced, "view attached");

        self.views.install(key, view);
        replaced
    }

    /// Take the view under `key` out of the facade
    pub fn remove_view(&mut self, key: ViewKey) -> Option<ViewNode<I>> {
        let view = self.views.remove(key)?;
        self.view_subscribers.detach(view_observer(&view));
        tracing::debug!(key, view = %view.id(), "view removed");
        Some(view)
    }

    pub fn view(&self, key: ViewKey) -> Option<&ViewNode<I>> {
        self.views.get(key)
    }

    /// Mutable access to a root view
    ///
    /// Tree edits made through this reference are not seen by the facade:
    /// new children get no facade handle and no `attach`, and the root's
    /// subscription keeps its old list. Use [`add_child`](Self::add_child)
    /// and [`remove_child`](Self::remove_child) to grow or shrink a tree.
    pub fn view_mut(&mut self, key: ViewKey) -> Option<&mut ViewNode<I>> {
        self.views.get_mut(key)
    }

    /// Add `child` to the composite root view under `key`
    ///
    /// The child is wired the way [`attach_view`](Self::attach_view) wires a
    /// whole tree, and the root's subscription is widened to the tree's new
    /// notification list.
    pub fn add_child(&mut self, key: ViewKey, child: impl Into<ViewNode<I>>) -> MvcResult<ViewId> {
        let root = self.views.get_mut(key).ok_or(MvcError::UnknownView(key))?;
        let composite = root.as_composite_mut()?;

        let mut child = child.into();
        child.set_facade(self.handle);
        child.attach(&self.models);
        let id = composite.add_child(child);

        self.view_subscribers
            .attach(view_observer(root), root.notification_list());
        tracing::debug!(key, child = %id, "child view added");
        Ok(id)
    }

    /// Detach child `id` from the composite root under `key` and hand it back
    ///
    /// The root's subscription is narrowed to what the rest of the tree
    /// still listens for. `Ok(None)` when the root holds no such child.
    pub fn remove_child(&mut self, key: ViewKey, id: ViewId) -> MvcResult<Option<ViewNode<I>>> {
        let root = self.views.get_mut(key).ok_or(MvcError::UnknownView(key))?;
        let Some(child) = root.as_composite_mut()?.remove_child(id) else {
            return Ok(None);
        };

        self.view_subscribers
            .attach(view_observer(root), root.notification_list());
        tracing::debug!(key, child = %id, "child view removed");
        Ok(Some(child))
    }

    pub fn view_keys(&self) -> Vec<ViewKey> {
        self.views.keys().collect()
    }

    /// Install a model under `key`, dropping any model already there
    pub fn attach_model(&mut self, key: ModelKey, model: impl Model) -> bool {
        self.attach_boxed_model(key, Box::new(model))
    }

    pub fn attach_boxed_model(&mut self, key: ModelKey, model: Box<dyn Model>) -> bool {
        let replaced = self.models.install(key, model);
        tracing::debug!(key, replaced, "model attached");
        replaced
    }

    pub fn remove_model(&mut self, key: ModelKey) -> Option<Box<dyn Model>> {
        self.models.remove(key)
    }

    pub fn model(&self, key: ModelKey) -> Option<&dyn Model> {
        self.models.get(key).map(|model| &**model)
    }

    pub fn model_as<T: Model>(&self, key: ModelKey) -> Option<&T> {
        self.models.get_as::<T>(key)
    }

    pub fn model_as_mut<T: Model>(&mut self, key: ModelKey) -> Option<&mut T> {
        self.models.get_as_mut::<T>(key)
    }

    pub fn models(&self) -> &ModelRegistry {
        &self.models
    }

    pub fn model_keys(&self) -> Vec<ModelKey> {
        self.models.keys().collect()
    }

    /// Announce a model change to the root views subscribed to `event`
    ///
    /// Returns the number of view updates made.
    pub fn publish(&mut self, event: EventCode) -> usize {
        let Self {
            views,
            models,
            view_subscribers,
            ..
        } = self;
        let mut dispatch = ViewDispatch { views, models };
        view_subscribers.notify(event, &mut dispatch)
    }

    /// Draw every root view in ascending key order
    pub fn draw_views(&self, target: &mut I) {
        for (_, view) in self.views.iter() {
            view.draw(target);
        }
    }

    pub(crate) fn clear_views(&mut self) {
        self.view_subscribers.clear();
        self.views.clear();
    }

    pub(crate) fn clear_models(&mut self) {
        self.models.clear();
    }
}

impl<I: 'static> fmt::Debug for FacadeContext<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FacadeContext")
            .field("handle", &self.handle)
            .field("views", &self.view_keys())
            .field("models", &self.model_keys())
            .field("quitting", &self.quitting)
            .finish()
    }
}

struct ViewDispatch<'a, I: 'static> {
    views: &'a mut KeyedRegistry<ViewNode<I>>,
    models: &'a ModelRegistry,
}

impl<I: 'static> ObserverSet for ViewDispatch<'_, I> {
    fn deliver(&mut self, observer: ObserverId, event: EventCode) {
        let target = self
            .views
            .iter_mut()
            .find(|(_, view)| view_observer(&**view) == observer);
        match target {
            Some((_, view)) => view.update(event, self.models),
            None => tracing::trace!(%observer, event, "no root view for subscriber"),
        }
    }
}

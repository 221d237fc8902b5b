//! # View Composite
//!
//! A container node that owns an ordered list of child nodes and relays
//! every operation to them in insertion order.

use std::fmt;

use super::view::{ViewId, ViewNode};
use crate::mvc::events::{EventCode, NotificationList};
use crate::mvc::facade::FacadeHandle;
use crate::mvc::models::ModelRegistry;

/// Ordered, owning container of view nodes
///
/// Children are dropped together with the composite. A child taken out with
/// [`remove_child`](Self::remove_child) is handed back to the caller instead
/// and is no longer the composite's concern.
pub struct ViewComposite<I: 'static> {
    id: ViewId,
    children: Vec<ViewNode<I>>,
}

impl<I: 'static> ViewComposite<I> {
    pub fn new() -> Self {
        Self {
            id: ViewId::next(),
            children: Vec::new(),
        }
    }

    pub fn id(&self) -> ViewId {
        self.id
    }

    /// Append a child and take ownership of it
    pub fn add_child(&mut self, child: impl Into<ViewNode<I>>) -> ViewId {
        let child = child.into();
        let id = child.id();
        self.children.push(child);
        id
    }

    /// Builder form of [`add_child`](Self::add_child)
    pub fn with_child(mut self, child: impl Into<ViewNode<I>>) -> Self {
        self.add_child(child);
        self
    }

    /// Detach the first child with identity `id` and return it
    ///
    /// Returns `None` when no direct child matches.
    pub fn remove_child(&mut self, id: ViewId) -> Option<ViewNode<I>> {
        let index = self.children.iter().position(|child| child.id() == id)?;
        Some(self.children.remove(index))
    }

    pub fn child(&self, id: ViewId) -> Option<&ViewNode<I>> {
        self.children.iter().find(|child| child.id() == id)
    }

    pub fn child_mut(&mut self, id: ViewId) -> Option<&mut ViewNode<I>> {
        self.children.iter_mut().find(|child| child.id() == id)
    }

    pub fn children(&self) -> impl Iterator<Item = &ViewNode<I>> + '_ {
        self.children.iter()
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Draw each child in order; the composite itself draws nothing
    pub fn draw(&self, target: &mut I) {
        for child in &self.children {
            child.draw(target);
        }
    }

    pub fn update(&mut self, event: EventCode, models: &ModelRegistry) {
        for child in &mut self.children {
            child.update(event, models);
        }
    }

    /// Relay the facade handle to every child; nothing is stored here
    pub fn set_facade(&mut self, facade: FacadeHandle) {
        for child in &mut self.children {
            child.set_facade(facade);
        }
    }

    pub fn attach(&mut self, models: &ModelRegistry) {
        for child in &mut self.children {
            child.attach(models);
        }
    }

    /// Union of the children's lists, each code once, in first-seen order
    pub fn notification_list(&self) -> NotificationList {
        self.children
            .iter()
            .flat_map(|child| child.notification_list().as_slice().to_vec())
            .collect::<NotificationList>()
            .deduplicated()
    }
}

impl<I: 'static> Default for ViewComposite<I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I: 'static> fmt::Debug for ViewComposite<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Composite")
            .field("id", &self.id)
            .field("children", &self.children)
            .finish()
    }
}

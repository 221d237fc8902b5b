//! # View Objects
//!
//! The view tree is made of [`ViewNode`]s. A node is either a leaf wrapping
//! an integrator-supplied [`View`], or a [`ViewComposite`] that owns further
//! nodes. Both variants answer the same set of operations; tree operations
//! are only reachable through [`ViewNode::as_composite_mut`], which fails
//! with [`MvcError::NotAComposite`] on a leaf.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use super::view_composite::ViewComposite;
use crate::mvc::error::{MvcError, MvcResult};
use crate::mvc::events::{EventCode, NotificationList};
use crate::mvc::facade::{FacadeHandle, FacadeLink};
use crate::mvc::models::{AsAny, ModelRegistry};

static NEXT_VIEW: AtomicU64 = AtomicU64::new(1);

/// Identity of a node in the view tree, fixed at construction
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ViewId(u64);

impl ViewId {
    pub(crate) fn next() -> Self {
        Self(NEXT_VIEW.fetch_add(1, Ordering::Relaxed))
    }

    pub fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ViewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "view#{}", self.0)
    }
}

/// Output component supplied by the integrator
///
/// Every method has a no-op default, so a view only implements what it
/// actually does. `I` is the interface handle the view draws onto; the core
/// passes it through untouched.
pub trait View<I>: AsAny {
    /// Render onto the interface handle
    fn draw(&self, _target: &mut I) {}

    /// React to a model-originated event
    fn update(&mut self, _event: EventCode, _models: &ModelRegistry) {}

    /// Called once when the view tree is attached to a facade
    fn attach(&mut self, _models: &ModelRegistry) {}

    /// Model events this view wants to be updated with
    fn notification_list(&self) -> NotificationList {
        NotificationList::new()
    }
}

/// Leaf of the view tree: an integrator view plus the identity and facade
/// back-reference the core tracks for it
///
/// Only [`ViewNode::leaf`] builds one, so every leaf gets a fresh [`ViewId`].
pub struct ViewLeaf<I: 'static> {
    id: ViewId,
    facade: FacadeLink,
    view: Box<dyn View<I>>,
}

impl<I: 'static> ViewLeaf<I> {
    pub fn id(&self) -> ViewId {
        self.id
    }

    pub fn facade(&self) -> Option<FacadeHandle> {
        self.facade.get()
    }

    pub fn view(&self) -> &dyn View<I> {
        &*self.view
    }
}

/// A node of the view tree
pub enum ViewNode<I: 'static> {
    /// Leaf view; keeps its own facade back-reference
    Leaf(ViewLeaf<I>),
    /// Container of further nodes
    Composite(ViewComposite<I>),
}

impl<I: 'static> ViewNode<I> {
    pub fn leaf(view: impl View<I>) -> Self {
        Self::Leaf(ViewLeaf {
            id: ViewId::next(),
            facade: FacadeLink::new(),
            view: Box::new(view),
        })
    }

    /// Concrete leaf view of type `T`, if this node is one
    pub fn as_view<T: View<I>>(&self) -> Option<&T> {
        match self {
            Self::Leaf(leaf) => (*leaf.view).as_any().downcast_ref::<T>(),
            Self::Composite(_) => None,
        }
    }

    pub fn as_view_mut<T: View<I>>(&mut self) -> Option<&mut T> {
        match self {
            Self::Leaf(leaf) => (*leaf.view).as_any_mut().downcast_mut::<T>(),
            Self::Composite(_) => None,
        }
    }

    pub fn id(&self) -> ViewId {
        match self {
            Self::Leaf(leaf) => leaf.id,
            Self::Composite(composite) => composite.id(),
        }
    }

    pub fn is_composite(&self) -> bool {
        matches!(self, Self::Composite(_))
    }

    /// Set the facade back-reference for this node and everything below it
    ///
    /// Composites only relay the handle to their children.
    pub fn set_facade(&mut self, handle: FacadeHandle) {
        match self {
            Self::Leaf(leaf) => leaf.facade.set(handle),
            Self::Composite(composite) => composite.set_facade(handle),
        }
    }

    /// Facade back-reference of a leaf; composites never store one
    pub fn facade(&self) -> Option<FacadeHandle> {
        match self {
            Self::Leaf(leaf) => leaf.facade(),
            Self::Composite(_) => None,
        }
    }

    pub fn draw(&self, target: &mut I) {
        match self {
            Self::Leaf(leaf) => leaf.view.draw(target),
            Self::Composite(composite) => composite.draw(target),
        }
    }

    pub fn update(&mut self, event: EventCode, models: &ModelRegistry) {
        match self {
            Self::Leaf(leaf) => leaf.view.update(event, models),
            Self::Composite(composite) => composite.update(event, models),
        }
    }

    pub fn attach(&mut self, models: &ModelRegistry) {
        match self {
            Self::Leaf(leaf) => leaf.view.attach(models),
            Self::Composite(composite) => composite.attach(models),
        }
    }

    pub fn notification_list(&self) -> NotificationList {
        match self {
            Self::Leaf(leaf) => leaf.view.notification_list(),
            Self::Composite(composite) => composite.notification_list(),
        }
    }

    pub fn as_composite(&self) -> MvcResult<&ViewComposite<I>> {
        match self {
            Self::Leaf(leaf) => Err(MvcError::NotAComposite(leaf.id)),
            Self::Composite(composite) => Ok(composite),
        }
    }

    /// Entry point for tree operations
    pub fn as_composite_mut(&mut self) -> MvcResult<&mut ViewComposite<I>> {
        match self {
            Self::Leaf(leaf) => Err(MvcError::NotAComposite(leaf.id)),
            Self::Composite(composite) => Ok(composite),
        }
    }
}

impl<I: 'static> From<ViewComposite<I>> for ViewNode<I> {
    fn from(composite: ViewComposite<I>) -> Self {
        Self::Composite(composite)
    }
}

impl<I: 'static> fmt::Debug for ViewNode<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Leaf(leaf) => f
                .debug_struct("Leaf")
                .field("id", &leaf.id)
                .field("facade", &leaf.facade.get())
                .finish_non_exhaustive(),
            Self::Composite(composite) => fmt::Debug::fmt(composite, f),
        }
    }
}

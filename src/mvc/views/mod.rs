//! # Views Module
//!
//! The composite view tree: leaf views supplied by the integrator and
//! composites that own and relay to their children.

pub mod view;
pub mod view_composite;

pub use view::{View, ViewId, ViewLeaf, ViewNode};
pub use view_composite::ViewComposite;

/// Key under which a root view is registered with the facade
pub type ViewKey = i32;

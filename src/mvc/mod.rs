//! # MVC Core
//!
//! Observer/subject notification, the controller and view contracts, keyed
//! model storage, and the facade that owns all of it.

pub mod controllers;
pub mod error;
pub mod events;
pub mod facade;
pub mod models;
pub mod registry;
pub mod systems;
pub mod views;

#[cfg(test)]
pub(crate) mod testing;

pub use controllers::Controller;
pub use error::{MvcError, MvcResult};
pub use events::{
    EventCode, NotificationList, Observer, ObserverId, ObserverSet, SimpleSubject, Subject,
    Subscription,
};
pub use facade::{Application, Facade, FacadeContext, FacadeHandle, FacadeLink, System};
pub use models::{AsAny, Model, ModelKey, ModelRegistry};
pub use registry::{KeyedRegistry, RegistryKey};
pub use systems::{EventScript, ScriptedSystem};
pub use views::{View, ViewComposite, ViewId, ViewKey, ViewLeaf, ViewNode};

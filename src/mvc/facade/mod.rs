//! # Facade Module
//!
//! The composition root and the pieces it is made of: the System contract,
//! the context handed to controllers, the application hooks, and the
//! non-owning facade handle.

pub mod application;
pub mod context;
#[allow(clippy::module_inception)]
pub mod facade;
pub mod handle;
pub mod system;

pub use application::Application;
pub use context::FacadeContext;
pub use facade::Facade;
pub use handle::{FacadeHandle, FacadeLink};
pub use system::System;

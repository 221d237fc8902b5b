//! # Systems Module
//!
//! Reference System implementations shipped with the crate.

pub mod script;
pub mod scripted;

pub use script::EventScript;
pub use scripted::ScriptedSystem;

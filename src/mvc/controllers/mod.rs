//! # Controllers Module
//!
//! Contains the controller contract that connects the System to the facade.

pub mod controller;

pub use controller::Controller;

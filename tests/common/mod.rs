//! Common test utilities and infrastructure
//!
//! This module provides shared functionality for integration tests including:
//! - Cucumber world implementation
//! - Logging controllers and views

pub mod world;

#[allow(unused_imports)]
pub use world::MvcWorld;

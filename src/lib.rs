//! # mvckit - A Minimal Model-View-Controller Skeleton
//!
//! A small, generic MVC core: a facade owns controllers, views, models and an
//! event-producing System, wires them together, and runs the main loop.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────┐  notify   ┌──────────────┐  mutate   ┌─────────┐
//! │    System    │──────────▶│  Controller  │──────────▶│ Models  │
//! │              │           │              │           │         │
//! │ - Events     │           │ - Input      │           │ - Data  │
//! │ - Interface  │           │   Mapping    │           │         │
//! └──────────────┘           └──────────────┘           └─────────┘
//!        ▲                          │ publish
//!        │ draw                     ▼
//!        │                   ┌──────────────┐
//!        └───────────────────│ View tree    │
//!                            │ (composites) │
//!                            └──────────────┘
//! ```
//!
//! Everything above is owned by a single [`Facade`]; back-references are
//! non-owning [`FacadeHandle`]s.

pub mod cmd_args;
pub mod config;
pub mod demo;
pub mod mvc;

// Re-export core types for easy access
pub use mvc::*;

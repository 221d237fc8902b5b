//! # Demo Application
//!
//! A counter driven by a scripted System: events 1, 2 and 3 increment,
//! decrement and reset it, and a configurable quit code stops the loop. Each
//! idle pass redraws a text frame into the System's `String` interface.

pub mod app;
pub mod components;

pub use app::DemoApp;
pub use components::{CounterController, CounterModel, CounterView, KeyController, TextView};

use crate::mvc::{EventCode, ModelKey, ViewKey};

pub const INCREMENT: EventCode = 1;
pub const DECREMENT: EventCode = 2;
pub const RESET: EventCode = 3;

/// Published by the counter controller after every change
pub const COUNTER_CHANGED: EventCode = 100;

pub const COUNTER_MODEL: ModelKey = 1;
pub const MAIN_VIEW: ViewKey = 1;

//! # Core Errors
//!
//! Typed failures raised by the MVC core. Most operations are total; the
//! variants below cover the few cases where a request cannot be honoured.

use super::events::ObserverId;
use super::views::{ViewId, ViewKey};

/// Errors raised by the facade and the view tree
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MvcError {
    /// A controller was attached before `init_system` installed a System
    #[error("no system is installed; attach controllers after init_system")]
    SystemNotInitialized,

    /// A tree operation was requested on a leaf view
    #[error("view {0} is a leaf and cannot hold children")]
    NotAComposite(ViewId),

    /// No root view is registered under the key
    #[error("no view is attached under key {0}")]
    UnknownView(ViewKey),

    /// The controller handle does not belong to this facade
    #[error("controller {0} is not attached to this facade")]
    UnknownController(ObserverId),
}

/// Result alias for core operations
pub type MvcResult<T> = std::result::Result<T, MvcError>;

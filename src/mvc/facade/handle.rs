//! Non-owning back-references from controllers and views to their facade.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_FACADE: AtomicU64 = AtomicU64::new(1);

/// Identity of a facade instance
///
/// Handles are plain copyable tokens: holding one never keeps a facade alive
/// and can never free it. Access to the facade's state is always passed in
/// explicitly as a context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FacadeHandle(u64);

impl FacadeHandle {
    pub(crate) fn next() -> Self {
        Self(NEXT_FACADE.fetch_add(1, Ordering::Relaxed))
    }

    pub fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for FacadeHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "facade#{}", self.0)
    }
}

/// Slot a controller embeds to remember which facade it belongs to
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FacadeLink(Option<FacadeHandle>);

impl FacadeLink {
    pub fn new() -> Self {
        Self(None)
    }

    pub fn set(&mut self, facade: FacadeHandle) {
        self.0 = Some(facade);
    }

    pub fn get(&self) -> Option<FacadeHandle> {
        self.0
    }
}

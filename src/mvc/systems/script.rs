//! Event scripts: JSON descriptions of what a scripted System replays.
//!
//! ```json
//! { "steps": [[1, 2], [], [3]] }
//! ```
//!
//! Each inner array is the batch of events fired by one `handle_events` call.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::mvc::events::EventCode;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventScript {
    #[serde(default)]
    pub steps: Vec<Vec<EventCode>>,
}

impl EventScript {
    /// One step per event, in order
    pub fn from_events(events: &[EventCode]) -> Self {
        Self {
            steps: events.iter().map(|event| vec![*event]).collect(),
        }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("invalid event script")
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!("Loading event script from '{}'", path.display());
        let json = fs::read_to_string(path)
            .with_context(|| format!("failed to read event script '{}'", path.display()))?;
        Self::from_json(&json)
    }

    /// Append a final step firing `event`
    pub fn then(mut self, event: EventCode) -> Self {
        self.steps.push(vec![event]);
        self
    }

    pub fn event_count(&self) -> usize {
        self.steps.iter().map(Vec::len).sum()
    }
}

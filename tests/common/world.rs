use std::collections::HashMap;
use std::fmt;

use anyhow::{anyhow, Result};
use cucumber::World;
use mvckit::demo::DemoApp;
use mvckit::{EventCode, Facade, ObserverId, ScriptedSystem, ViewId};

use super::doubles::SharedLog;

/// Scenario state for the facade features
#[derive(World)]
#[world(init = Self::new)]
pub struct MvcWorld {
    /// Facade under test; `None` until a Given step builds one
    pub facade: Option<Facade<String>>,

    /// Deliveries and drops written by the logging doubles
    pub log: SharedLog,

    /// Controller handles by scenario name
    pub controllers: HashMap<String, ObserverId>,

    /// View identities by scenario name
    pub views: HashMap<String, ViewId>,

    /// Last frame drawn onto the system interface
    pub frame: String,

    /// Error message of the last failing operation
    pub last_error: Option<String>,

    /// Demo application and the facade it ran on
    pub demo: Option<DemoApp>,
    pub demo_facade: Option<Facade<String>>,

    /// Script file kept alive for the scenario
    pub script_file: Option<tempfile::NamedTempFile>,
}

impl MvcWorld {
    pub fn new() -> Self {
        Self {
            facade: None,
            log: SharedLog::default(),
            controllers: HashMap::new(),
            views: HashMap::new(),
            frame: String::new(),
            last_error: None,
            demo: None,
            demo_facade: None,
            script_file: None,
        }
    }

    pub fn facade(&mut self) -> Result<&mut Facade<String>> {
        self.facade
            .as_mut()
            .ok_or_else(|| anyhow!("no facade has been created"))
    }

    /// The scripted system installed on the facade
    pub fn scripted_system(&mut self) -> Result<&mut ScriptedSystem<String>> {
        self.facade()?
            .system_mut()
            .and_then(|system| system.as_any_mut().downcast_mut::<ScriptedSystem<String>>())
            .ok_or_else(|| anyhow!("facade has no scripted system"))
    }

    pub fn controller_id(&self, name: &str) -> Result<ObserverId> {
        self.controllers
            .get(name)
            .copied()
            .ok_or_else(|| anyhow!("unknown controller '{name}'"))
    }

    /// Events delivered to `name`, in delivery order
    pub fn deliveries_to(&self, name: &str) -> Vec<EventCode> {
        self.log
            .borrow()
            .deliveries
            .iter()
            .filter(|(controller, _)| controller == name)
            .map(|(_, event)| *event)
            .collect()
    }
}

impl fmt::Debug for MvcWorld {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MvcWorld")
            .field("has_facade", &self.facade.is_some())
            .field("log", &self.log)
            .field("controllers", &self.controllers)
            .field("views", &self.views)
            .field("frame", &self.frame)
            .field("last_error", &self.last_error)
            .field("demo", &self.demo)
            .finish_non_exhaustive()
    }
}

/// Parse a step's event list such as `1, 2, -3`
pub fn parse_codes(list: &str) -> Vec<EventCode> {
    list.split(',')
        .filter_map(|code| code.trim().parse().ok())
        .collect()
}

/// Parse a step's quoted name list such as `"a", "b"`
pub fn parse_names(list: &str) -> Vec<String> {
    list.split(',')
        .map(|name| name.trim().trim_matches('"').to_string())
        .filter(|name| !name.is_empty())
        .collect()
}

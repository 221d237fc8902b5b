//! The demo's [`Application`]: wires the counter components onto a facade
//! driven by a [`ScriptedSystem`].

use anyhow::Result;

use super::components::{CounterController, CounterModel, CounterView, KeyController, TextView};
use super::{COUNTER_MODEL, DECREMENT, INCREMENT, MAIN_VIEW};
use crate::cmd_args::CommandLineArgs;
use crate::config;
use crate::mvc::{
    Application, EventCode, EventScript, Facade, ScriptedSystem, ViewComposite, ViewNode,
};

/// Script used when no script or events are given
const DEFAULT_EVENTS: [EventCode; 4] = [INCREMENT, INCREMENT, INCREMENT, DECREMENT];

#[derive(Debug, Clone)]
pub struct DemoApp {
    script: EventScript,
    quit_event: EventCode,
    frames: u64,
}

impl DemoApp {
    pub fn new(script: EventScript, quit_event: EventCode) -> Self {
        Self {
            script,
            quit_event,
            frames: 0,
        }
    }

    /// Pick the event source: `--script`, then `--events`, then
    /// `MVCKIT_SCRIPT_PATH`, then the built-in script
    pub fn from_args(args: &CommandLineArgs) -> Result<Self> {
        let script = if let Some(path) = args.script() {
            let path = config::expand_path(path).unwrap_or_else(|| path.to_string());
            EventScript::load(path)?
        } else if !args.events().is_empty() {
            EventScript::from_events(args.events())
        } else if let Some(path) = config::get_script_path() {
            EventScript::load(path)?
        } else {
            tracing::debug!("No event source given, using the built-in script");
            EventScript::from_events(&DEFAULT_EVENTS)
        };
        Ok(Self::new(script, args.quit_event()))
    }

    /// Number of frames drawn so far
    pub fn frames(&self) -> u64 {
        self.frames
    }

    fn script_exhausted(facade: &Facade<String>) -> bool {
        facade
            .system()
            .and_then(|system| system.as_any().downcast_ref::<ScriptedSystem<String>>())
            .map_or(true, ScriptedSystem::is_exhausted)
    }
}

impl Application<String> for DemoApp {
    fn init_system(&mut self, facade: &mut Facade<String>) -> Result<()> {
        tracing::debug!(
            steps = self.script.steps.len(),
            events = self.script.event_count(),
            "installing scripted system"
        );
        facade.set_system(ScriptedSystem::from_script(String::new(), self.script.clone()));
        Ok(())
    }

    fn attach_controllers(&mut self, facade: &mut Facade<String>) -> Result<()> {
        facade.attach_controller(CounterController::new())?;
        facade.attach_controller(KeyController::new(self.quit_event))?;
        Ok(())
    }

    fn attach_models(&mut self, facade: &mut Facade<String>) -> Result<()> {
        facade.attach_model(COUNTER_MODEL, CounterModel::default());
        Ok(())
    }

    fn attach_views(&mut self, facade: &mut Facade<String>) -> Result<()> {
        let screen = ViewComposite::new()
            .with_child(ViewNode::leaf(TextView::new("mvckit counter")))
            .with_child(ViewNode::leaf(CounterView::new()));
        facade.attach_view(MAIN_VIEW, screen);
        Ok(())
    }

    fn idle(&mut self, facade: &mut Facade<String>) -> Result<()> {
        if let Some(system) = facade.system_mut() {
            system.interface_mut().clear();
        }
        if facade.draw_views() {
            self.frames += 1;
        }
        if Self::script_exhausted(facade) {
            tracing::debug!(frames = self.frames, "script exhausted");
            facade.quit();
        }
        Ok(())
    }
}

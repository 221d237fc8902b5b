// Demo run loop step definitions

use std::io::Write;

use crate::common::world::{parse_codes, MvcWorld};
use cucumber::{given, then, when};
use mvckit::config::DEFAULT_QUIT_EVENT;
use mvckit::demo::{CounterModel, DemoApp, COUNTER_MODEL};
use mvckit::{EventScript, Facade};

#[given(regex = r#"^the counter demo with events ([-\d, ]+)$"#)]
async fn demo_with_events(world: &mut MvcWorld, codes: String) {
    let script = EventScript::from_events(&parse_codes(&codes));
    world.demo = Some(DemoApp::new(script, DEFAULT_QUIT_EVENT));
}

#[given(regex = r#"^a script file with steps "([^"]+)"$"#)]
async fn script_file_with_steps(world: &mut MvcWorld, steps: String) {
    let mut file = tempfile::NamedTempFile::new().expect("temp file created");
    write!(file, r#"{{"steps": {steps}}}"#).expect("script written");
    world.script_file = Some(file);
}

#[given("the counter demo with that script")]
async fn demo_with_script_file(world: &mut MvcWorld) {
    let path = world
        .script_file
        .as_ref()
        .expect("script file written")
        .path();
    let script = EventScript::load(path).expect("script loads");
    world.demo = Some(DemoApp::new(script, DEFAULT_QUIT_EVENT));
}

#[when("the demo runs")]
async fn demo_runs(world: &mut MvcWorld) {
    let app = world.demo.as_mut().expect("demo configured");
    let mut facade = Facade::new();
    facade.launch(app).expect("demo runs to completion");
    world.frame = facade
        .system()
        .map(|system| system.interface().clone())
        .unwrap_or_default();
    world.demo_facade = Some(facade);
}

#[then(regex = r#"^the counter shows (-?\d+)$"#)]
async fn counter_shows(world: &mut MvcWorld, value: i64) {
    let facade = world.demo_facade.as_ref().expect("demo has run");
    assert_eq!(
        facade
            .model_as::<CounterModel>(COUNTER_MODEL)
            .map(CounterModel::value),
        Some(value)
    );
    assert!(world.frame.contains(&format!("count: {value}")));
}

#[then(regex = r#"^(\d+) frames? (?:was|were) drawn$"#)]
async fn frames_drawn(world: &mut MvcWorld, frames: u64) {
    assert_eq!(world.demo.as_ref().map(DemoApp::frames), Some(frames));
}

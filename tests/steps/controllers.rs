// Controller attach, dispatch and detach step definitions

use crate::common::doubles::LoggingController;
use crate::common::world::{parse_codes, MvcWorld};
use cucumber::{given, then, when};
use mvckit::{Facade, ScriptedSystem};

#[given("a facade with a scripted system")]
async fn facade_with_scripted_system(world: &mut MvcWorld) {
    let mut facade = Facade::new();
    facade.set_system(ScriptedSystem::new(String::new()));
    world.facade = Some(facade);
}

#[given("a facade without a system")]
async fn facade_without_system(world: &mut MvcWorld) {
    world.facade = Some(Facade::new());
}

fn attach_logging_controller(world: &mut MvcWorld, name: String, codes: &str) {
    let controller = LoggingController::new(&name, parse_codes(codes), &world.log);
    let result = world
        .facade()
        .expect("facade exists")
        .attach_controller(controller);
    match result {
        Ok(id) => {
            world.controllers.insert(name, id);
        }
        Err(e) => world.last_error = Some(e.to_string()),
    }
}

#[given(regex = r#"^a controller "([^"]+)" listening to ([-\d, ]+)$"#)]
async fn controller_listening(world: &mut MvcWorld, name: String, codes: String) {
    attach_logging_controller(world, name, &codes);
}

#[when(regex = r#"^I attach a controller "([^"]+)" listening to ([-\d, ]+)$"#)]
async fn attach_controller(world: &mut MvcWorld, name: String, codes: String) {
    attach_logging_controller(world, name, &codes);
}

#[when(regex = r#"^the system fires ([-\d, ]+)$"#)]
async fn system_fires(world: &mut MvcWorld, codes: String) {
    world
        .scripted_system()
        .expect("scripted system installed")
        .push_batch(parse_codes(&codes));
    world.facade().expect("facade exists").step().expect("step succeeds");
}

#[when(regex = r#"^the controller "([^"]+)" is detached$"#)]
async fn detach_controller(world: &mut MvcWorld, name: String) {
    let id = world.controller_id(&name).expect("controller known");
    let detached = world.facade().expect("facade exists").detach_controller(id);
    assert!(detached.is_some(), "controller '{name}' was not attached");
}

#[then(regex = r#"^the controller "([^"]+)" received ([-\d, ]+)$"#)]
async fn controller_received(world: &mut MvcWorld, name: String, codes: String) {
    assert_eq!(world.deliveries_to(&name), parse_codes(&codes));
}

#[then(regex = r#"^the controller "([^"]+)" received nothing$"#)]
async fn controller_received_nothing(world: &mut MvcWorld, name: String) {
    assert!(world.deliveries_to(&name).is_empty());
}

#[then(regex = r#"^the controller "([^"]+)" knows its facade$"#)]
async fn controller_knows_facade(world: &mut MvcWorld, name: String) {
    let id = world.controller_id(&name).expect("controller known");
    let facade = world.facade().expect("facade exists");
    let handle = facade.handle();
    assert_eq!(facade.controller(id).and_then(|c| c.facade()), Some(handle));
}

#[then(regex = r#"^the attach fails with "([^"]+)"$"#)]
async fn attach_fails_with(world: &mut MvcWorld, message: String) {
    let error = world.last_error.as_deref().unwrap_or_default();
    assert!(
        error.contains(&message),
        "expected error containing '{message}', got '{error}'"
    );
}

#[then(regex = r#"^the facade has (\d+) controllers?$"#)]
async fn facade_has_controllers(world: &mut MvcWorld, count: usize) {
    assert_eq!(world.facade().expect("facade exists").controller_count(), count);
}

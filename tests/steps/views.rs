// View tree step definitions

use crate::common::doubles::NamedView;
use crate::common::world::{parse_names, MvcWorld};
use cucumber::{given, then, when};
use mvckit::{ViewComposite, ViewNode};

fn install_root_view(world: &mut MvcWorld, key: i32, names: &str) {
    let mut composite = ViewComposite::new();
    for name in parse_names(names) {
        let id = composite.add_child(ViewNode::leaf(NamedView::new(&name, &world.log)));
        world.views.insert(name, id);
    }
    world.facade().expect("facade exists").attach_view(key, composite);
}

#[given(regex = r#"^a root view (-?\d+) composed of (.+)$"#)]
async fn root_view_composed_of(world: &mut MvcWorld, key: i32, names: String) {
    install_root_view(world, key, &names);
}

#[when(regex = r#"^the root view (-?\d+) is replaced by (.+)$"#)]
async fn root_view_replaced(world: &mut MvcWorld, key: i32, names: String) {
    install_root_view(world, key, &names);
}

#[when(regex = r#"^the child "([^"]+)" is removed from view (-?\d+)$"#)]
async fn child_removed(world: &mut MvcWorld, name: String, key: i32) {
    let id = world.views[&name];
    let removed = world
        .facade()
        .expect("facade exists")
        .remove_child(key, id)
        .expect("view is an attached composite");
    assert!(removed.is_some(), "'{name}' was not a child of view {key}");
}

#[when(regex = r#"^the child "([^"]+)" is added to view (-?\d+)$"#)]
async fn child_added(world: &mut MvcWorld, name: String, key: i32) {
    let view = NamedView::new(&name, &world.log);
    let id = world
        .facade()
        .expect("facade exists")
        .add_child(key, ViewNode::leaf(view))
        .expect("view is an attached composite");
    world.views.insert(name, id);
}

#[when("the views are drawn")]
async fn views_drawn(world: &mut MvcWorld) {
    let facade = world.facade().expect("facade exists");
    if let Some(system) = facade.system_mut() {
        system.interface_mut().clear();
    }
    assert!(facade.draw_views());
    let frame = facade
        .system()
        .map(|system| system.interface().clone())
        .unwrap_or_default();
    world.frame = frame;
}

#[then(regex = r#"^the frame is "([^"]*)"$"#)]
async fn frame_is(world: &mut MvcWorld, expected: String) {
    assert_eq!(world.frame, expected);
}

#[then(regex = r#"^the view "([^"]+)" was dropped$"#)]
async fn view_dropped(world: &mut MvcWorld, name: String) {
    assert!(world.log.borrow().drops.contains(&name));
}

#[then(regex = r#"^the view "([^"]+)" is still alive$"#)]
async fn view_alive(world: &mut MvcWorld, name: String) {
    assert!(!world.log.borrow().drops.contains(&name));
}

#[when("the facade is dropped")]
async fn facade_dropped(world: &mut MvcWorld) {
    world.facade = None;
}

//! Recording doubles shared by the unit tests.
//!
//! Every double writes into a [`Journal`] so a test can assert on what was
//! drawn, updated, attached and dropped, and in which order.

use std::cell::RefCell;
use std::rc::Rc;

use crate::mvc::controllers::Controller;
use crate::mvc::events::{EventCode, NotificationList, Observer};
use crate::mvc::facade::{FacadeContext, FacadeLink};
use crate::mvc::models::{Model, ModelRegistry};
use crate::mvc::views::View;

#[derive(Debug, Default)]
struct Entries {
    drops: Vec<&'static str>,
    updates: Vec<(&'static str, EventCode)>,
    attaches: Vec<&'static str>,
    events: Vec<(&'static str, EventCode)>,
}

/// Shared log written by the recording doubles
#[derive(Debug, Clone, Default)]
pub struct Journal {
    entries: Rc<RefCell<Entries>>,
}

impl Journal {
    pub fn drops(&self) -> Vec<&'static str> {
        self.entries.borrow().drops.clone()
    }

    /// View updates as `(view, event)`
    pub fn updates(&self) -> Vec<(&'static str, EventCode)> {
        self.entries.borrow().updates.clone()
    }

    pub fn attaches(&self) -> Vec<&'static str> {
        self.entries.borrow().attaches.clone()
    }

    /// Controller deliveries as `(controller, event)`
    pub fn events(&self) -> Vec<(&'static str, EventCode)> {
        self.entries.borrow().events.clone()
    }

    pub fn record_drop(&self, name: &'static str) {
        self.entries.borrow_mut().drops.push(name);
    }
}

/// Leaf view that draws its name and logs everything else
pub struct RecordingView {
    name: &'static str,
    listening: Vec<EventCode>,
    journal: Journal,
}

impl RecordingView {
    pub fn new(name: &'static str, journal: &Journal) -> Self {
        Self {
            name,
            listening: Vec::new(),
            journal: journal.clone(),
        }
    }

    pub fn listening(mut self, events: &[EventCode]) -> Self {
        self.listening = events.to_vec();
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl View<Vec<String>> for RecordingView {
    fn draw(&self, target: &mut Vec<String>) {
        target.push(self.name.to_string());
    }

    fn update(&mut self, event: EventCode, _models: &ModelRegistry) {
        self.journal
            .entries
            .borrow_mut()
            .updates
            .push((self.name, event));
    }

    fn attach(&mut self, _models: &ModelRegistry) {
        self.journal.entries.borrow_mut().attaches.push(self.name);
    }

    fn notification_list(&self) -> NotificationList {
        self.listening.clone().into()
    }
}

impl Drop for RecordingView {
    fn drop(&mut self) {
        self.journal.record_drop(self.name);
    }
}

/// Controller that logs deliveries and can quit or republish on cue
pub struct RecordingController {
    link: FacadeLink,
    name: &'static str,
    wanted: Vec<EventCode>,
    quit_on: Option<EventCode>,
    switch_on: Option<(EventCode, Vec<EventCode>)>,
    republish: bool,
    journal: Journal,
}

impl RecordingController {
    pub fn new(name: &'static str, wanted: &[EventCode], journal: &Journal) -> Self {
        Self {
            link: FacadeLink::new(),
            name,
            wanted: wanted.to_vec(),
            quit_on: None,
            switch_on: None,
            republish: false,
            journal: journal.clone(),
        }
    }

    pub fn quitting_on(mut self, event: EventCode) -> Self {
        self.quit_on = Some(event);
        self
    }

    /// Forward every delivered event to the views
    pub fn republishing(mut self) -> Self {
        self.republish = true;
        self
    }

    /// Change the notification list to `next` once `event` arrives
    pub fn switching_on(mut self, event: EventCode, next: &[EventCode]) -> Self {
        self.switch_on = Some((event, next.to_vec()));
        self
    }
}

impl Observer<FacadeContext<Vec<String>>> for RecordingController {
    fn update(&mut self, event: EventCode, ctx: &mut FacadeContext<Vec<String>>) {
        self.journal
            .entries
            .borrow_mut()
            .events
            .push((self.name, event));
        if self.republish {
            ctx.publish(event);
        }
        if let Some((trigger, next)) = &self.switch_on {
            if *trigger == event {
                self.wanted = next.clone();
            }
        }
        if self.quit_on == Some(event) {
            ctx.quit();
        }
    }
}

impl Controller<Vec<String>> for RecordingController {
    fn link(&self) -> &FacadeLink {
        &self.link
    }

    fn link_mut(&mut self) -> &mut FacadeLink {
        &mut self.link
    }

    fn notification_list(&self) -> NotificationList {
        self.wanted.clone().into()
    }
}

impl Drop for RecordingController {
    fn drop(&mut self) {
        self.journal.record_drop(self.name);
    }
}

/// Plain model with a public value
#[derive(Debug, Default, PartialEq)]
pub struct Counter {
    pub value: i64,
}

impl Model for Counter {}

/// Model that only logs its own destruction
pub struct TrackedModel {
    name: &'static str,
    journal: Journal,
}

impl TrackedModel {
    pub fn new(name: &'static str, journal: &Journal) -> Self {
        Self {
            name,
            journal: journal.clone(),
        }
    }
}

impl Model for TrackedModel {}

impl Drop for TrackedModel {
    fn drop(&mut self) {
        self.journal.record_drop(self.name);
    }
}

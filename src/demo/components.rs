//! Models, controllers and views of the counter demo.

use super::{COUNTER_CHANGED, COUNTER_MODEL, DECREMENT, INCREMENT, RESET};
use crate::mvc::{
    Controller, EventCode, FacadeContext, FacadeLink, Model, ModelRegistry, NotificationList,
    Observer, View,
};

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CounterModel {
    value: i64,
    changes: u64,
}

impl CounterModel {
    pub fn value(&self) -> i64 {
        self.value
    }

    /// Number of accepted changes, resets included
    pub fn changes(&self) -> u64 {
        self.changes
    }

    pub fn apply(&mut self, event: EventCode) -> bool {
        match event {
            INCREMENT => self.value += 1,
            DECREMENT => self.value -= 1,
            RESET => self.value = 0,
            _ => return false,
        }
        self.changes += 1;
        true
    }
}

impl Model for CounterModel {}

/// Maps counter events onto the counter model
#[derive(Debug, Default)]
pub struct CounterController {
    link: FacadeLink,
}

impl CounterController {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Observer<FacadeContext<String>> for CounterController {
    fn update(&mut self, event: EventCode, ctx: &mut FacadeContext<String>) {
        let Some(counter) = ctx.model_as_mut::<CounterModel>(COUNTER_MODEL) else {
            tracing::warn!(event, "counter model is not attached");
            return;
        };
        if counter.apply(event) {
            tracing::debug!(event, value = counter.value(), "counter changed");
            ctx.publish(COUNTER_CHANGED);
        }
    }
}

impl Controller<String> for CounterController {
    fn link(&self) -> &FacadeLink {
        &self.link
    }

    fn link_mut(&mut self) -> &mut FacadeLink {
        &mut self.link
    }

    fn notification_list(&self) -> NotificationList {
        NotificationList::from([INCREMENT, DECREMENT, RESET])
    }
}

/// Quits the run loop on its quit code
#[derive(Debug)]
pub struct KeyController {
    link: FacadeLink,
    quit_event: EventCode,
}

impl KeyController {
    pub fn new(quit_event: EventCode) -> Self {
        Self {
            link: FacadeLink::new(),
            quit_event,
        }
    }
}

impl Observer<FacadeContext<String>> for KeyController {
    fn update(&mut self, event: EventCode, ctx: &mut FacadeContext<String>) {
        if event == self.quit_event {
            ctx.quit();
        }
    }
}

impl Controller<String> for KeyController {
    fn link(&self) -> &FacadeLink {
        &self.link
    }

    fn link_mut(&mut self) -> &mut FacadeLink {
        &mut self.link
    }

    fn notification_list(&self) -> NotificationList {
        NotificationList::from([self.quit_event])
    }
}

/// Static line of text
#[derive(Debug, Clone)]
pub struct TextView {
    text: String,
}

impl TextView {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl View<String> for TextView {
    fn draw(&self, target: &mut String) {
        target.push_str(&self.text);
        target.push('\n');
    }
}

/// Shows the counter model's value, refreshed on `COUNTER_CHANGED`
#[derive(Debug, Default)]
pub struct CounterView {
    value: Option<i64>,
    refreshes: u64,
}

impl CounterView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn refreshes(&self) -> u64 {
        self.refreshes
    }

    fn refresh(&mut self, models: &ModelRegistry) {
        self.value = models
            .get_as::<CounterModel>(COUNTER_MODEL)
            .map(CounterModel::value);
        self.refreshes += 1;
    }
}

impl View<String> for CounterView {
    fn draw(&self, target: &mut String) {
        match self.value {
            Some(value) => target.push_str(&format!("count: {value}\n")),
            None => target.push_str("count: -\n"),
        }
    }

    fn update(&mut self, event: EventCode, models: &ModelRegistry) {
        if event == COUNTER_CHANGED {
            self.refresh(models);
        }
    }

    fn attach(&mut self, models: &ModelRegistry) {
        self.refresh(models);
    }

    fn notification_list(&self) -> NotificationList {
        NotificationList::from([COUNTER_CHANGED])
    }
}

//! # Scripted System
//!
//! A [`System`] that replays pre-programmed batches of events instead of
//! polling a real device, one batch per step. It makes the run loop
//! deterministic, which is what the demo binary and the tests need.

use std::collections::VecDeque;
use std::fmt;

use anyhow::Result;

use super::script::EventScript;
use crate::mvc::events::{EventCode, NotificationList, ObserverId, ObserverSet, SimpleSubject, Subject};
use crate::mvc::facade::System;

/// System backed by a queue of event batches
pub struct ScriptedSystem<I> {
    subject: SimpleSubject,
    pending: VecDeque<Vec<EventCode>>,
    interface: I,
    steps: u64,
    fired: u64,
}

impl<I> ScriptedSystem<I> {
    /// Create a system with an empty queue around `interface`
    pub fn new(interface: I) -> Self {
        Self {
            subject: SimpleSubject::new(),
            pending: VecDeque::new(),
            interface,
            steps: 0,
            fired: 0,
        }
    }

    pub fn from_script(interface: I, script: EventScript) -> Self {
        let mut system = Self::new(interface);
        system.pending.extend(script.steps);
        system
    }

    /// Queue a batch to be fired by one future step
    pub fn push_batch(&mut self, batch: impl Into<Vec<EventCode>>) {
        self.pending.push_back(batch.into());
    }

    /// Queue a single-event batch
    pub fn push_event(&mut self, event: EventCode) {
        self.pending.push_back(vec![event]);
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    pub fn is_exhausted(&self) -> bool {
        self.pending.is_empty()
    }

    /// Number of `handle_events` calls so far
    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// Number of events fired so far
    pub fn fired(&self) -> u64 {
        self.fired
    }

    pub fn clear_pending(&mut self) {
        self.pending.clear();
    }
}

impl<I: Default> Default for ScriptedSystem<I> {
    fn default() -> Self {
        Self::new(I::default())
    }
}

impl<I> Subject for ScriptedSystem<I> {
    fn attach(&mut self, observer: ObserverId, list: NotificationList) {
        self.subject.attach(observer, list);
    }

    fn detach(&mut self, observer: ObserverId) {
        self.subject.detach(observer);
    }

    fn registration(&self, observer: ObserverId) -> Option<&NotificationList> {
        self.subject.registration(observer)
    }

    fn observer_count(&self) -> usize {
        self.subject.observer_count()
    }
}

impl<I: 'static> System<I> for ScriptedSystem<I> {
    fn handle_events(&mut self, observers: &mut dyn ObserverSet) -> Result<()> {
        self.steps += 1;
        let Some(batch) = self.pending.pop_front() else {
            tracing::trace!(step = self.steps, "no scripted events pending");
            return Ok(());
        };
        tracing::debug!(step = self.steps, ?batch, "firing scripted events");
        for event in batch {
            self.subject.notify(event, observers);
            self.fired += 1;
        }
        Ok(())
    }

    fn interface(&self) -> &I {
        &self.interface
    }

    fn interface_mut(&mut self) -> &mut I {
        &mut self.interface
    }
}

impl<I> fmt::Debug for ScriptedSystem<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScriptedSystem")
            .field("subject", &self.subject)
            .field("pending", &self.pending)
            .field("steps", &self.steps)
            .field("fired", &self.fired)
            .finish_non_exhaustive()
    }
}

use std::collections::HashMap;

use leptos::prelude::*;
use log::warn;

use crate::effects::{TimedMachine, TimerCommand, TimerCommands, TimerToken};

/// Runs an effect state machine against real browser timeouts.
///
/// The machine lives in a signal so views can read it; every input goes
/// through [`TimerDriver::send`], which applies the returned commands. All
/// pending timeouts are cleared when the owning component is torn down.
pub struct TimerDriver<M: Send + Sync + 'static> {
    machine: RwSignal<M>,
    handles: StoredValue<HashMap<TimerToken, TimeoutHandle>>,
}

impl<M: Send + Sync + 'static> Clone for TimerDriver<M> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<M: Send + Sync + 'static> Copy for TimerDriver<M> {}

impl<M: TimedMachine + Send + Sync + 'static> TimerDriver<M> {
    pub fn new(machine: M) -> Self {
        let driver = Self {
            machine: RwSignal::new(machine),
            handles: StoredValue::new(HashMap::new()),
        };
        on_cleanup(move || driver.shutdown());
        driver
    }

    pub fn machine(&self) -> RwSignal<M> {
        self.machine
    }

    pub fn send(&self, input: impl FnOnce(&mut M) -> TimerCommands) {
        if let Some(cmds) = self.machine.try_update(input) {
            self.apply(cmds);
        }
    }

    fn apply(&self, cmds: TimerCommands) {
        let driver = *self;
        for cmd in cmds {
            match cmd {
                TimerCommand::Schedule { token, after } => {
                    match set_timeout_with_handle(move || driver.fire(token), after) {
                        Ok(handle) => {
                            self.handles.try_update_value(|h| h.insert(token, handle));
                        }
                        Err(e) => warn!("timers: couldn't schedule timeout: {e:?}"),
                    }
                }
                TimerCommand::Cancel(token) => {
                    if let Some(Some(handle)) = self.handles.try_update_value(|h| h.remove(&token))
                    {
                        handle.clear();
                    }
                }
            }
        }
    }

    fn fire(&self, token: TimerToken) {
        self.handles.try_update_value(|h| h.remove(&token));
        self.send(|m| m.on_timer(token));
    }

    fn shutdown(&self) {
        if let Some(handles) = self.handles.try_update_value(std::mem::take) {
            for handle in handles.into_values() {
                handle.clear();
            }
        }
        self.machine.try_update_untracked(|m| m.teardown());
    }
}

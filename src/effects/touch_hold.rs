//! Press-and-hold stand-in for hover-only decorations on touch screens.
//!
//! ```text
//!   Idle --start--> Pending --hold timer--> Active --end--> Lingering
//!    ^                 |                      ^                |
//!    +------end--------+                      +-----start------+
//!    ^                                                         |
//!    +----------------------linger timer-----------------------+
//! ```

use std::time::Duration;

use log::trace;

use super::timer::{ArmedTimer, TimedMachine, TimerCommands, TimerToken};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TouchHoldConfig {
    /// How long a finger must stay down before the effect turns on.
    pub hold: Duration,
    /// How long the effect stays on after the finger lifts.
    pub linger: Duration,
}

impl Default for TouchHoldConfig {
    fn default() -> Self {
        Self {
            hold: Duration::from_millis(500),
            linger: Duration::from_millis(1500),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HoldPhase {
    #[default]
    Idle,
    Pending,
    Active,
    Lingering,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TouchHold {
    config: TouchHoldConfig,
    phase: HoldPhase,
    timer: ArmedTimer,
}

impl TouchHold {
    pub fn new(config: TouchHoldConfig) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }

    pub fn phase(&self) -> HoldPhase {
        self.phase
    }

    /// Whether the decoration should currently be shown.
    pub fn is_active(&self) -> bool {
        matches!(self.phase, HoldPhase::Active | HoldPhase::Lingering)
    }

    pub fn touch_start(&mut self) -> TimerCommands {
        let mut cmds = Vec::new();
        match self.phase {
            HoldPhase::Idle | HoldPhase::Pending => {
                self.timer.arm(self.config.hold, &mut cmds);
                self.phase = HoldPhase::Pending;
            }
            HoldPhase::Lingering => {
                self.timer.disarm(&mut cmds);
                self.phase = HoldPhase::Active;
            }
            HoldPhase::Active => {}
        }
        trace!("touch hold: start -> {:?}", self.phase);
        cmds
    }

    /// Handles both `touchend` and `touchcancel`.
    pub fn touch_end(&mut self) -> TimerCommands {
        let mut cmds = Vec::new();
        match self.phase {
            HoldPhase::Pending => {
                self.timer.disarm(&mut cmds);
                self.phase = HoldPhase::Idle;
            }
            HoldPhase::Active => {
                self.timer.arm(self.config.linger, &mut cmds);
                self.phase = HoldPhase::Lingering;
            }
            HoldPhase::Idle | HoldPhase::Lingering => {}
        }
        trace!("touch hold: end -> {:?}", self.phase);
        cmds
    }
}

impl TimedMachine for TouchHold {
    fn on_timer(&mut self, token: TimerToken) -> TimerCommands {
        if !self.timer.fired(token) {
            return Vec::new();
        }
        self.phase = match self.phase {
            HoldPhase::Pending => HoldPhase::Active,
            HoldPhase::Lingering => HoldPhase::Idle,
            other => other,
        };
        trace!("touch hold: timer -> {:?}", self.phase);
        Vec::new()
    }

    fn teardown(&mut self) -> TimerCommands {
        let mut cmds = Vec::new();
        self.timer.disarm(&mut cmds);
        self.phase = HoldPhase::Idle;
        cmds
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effects::timer::{ManualScheduler, TimerCommand};

    #[test]
    fn test_short_press_never_activates() {
        let mut hold = TouchHold::default();
        let mut sched = ManualScheduler::new();

        sched.apply(hold.touch_start());
        sched.advance_ms(&mut hold, 400);
        assert_eq!(hold.phase(), HoldPhase::Pending);
        sched.apply(hold.touch_end());
        assert_eq!(hold.phase(), HoldPhase::Idle);

        sched.advance_ms(&mut hold, 1000);
        assert!(!hold.is_active());
        assert_eq!(sched.pending(), 0);
    }

    #[test]
    fn test_long_press_lingers_after_release() {
        let mut hold = TouchHold::default();
        let mut sched = ManualScheduler::new();

        sched.apply(hold.touch_start());
        sched.advance_ms(&mut hold, 600);
        assert_eq!(hold.phase(), HoldPhase::Active);

        sched.apply(hold.touch_end());
        assert_eq!(hold.phase(), HoldPhase::Lingering);
        sched.advance_ms(&mut hold, 1499);
        assert!(hold.is_active());
        sched.advance_ms(&mut hold, 1);
        assert_eq!(hold.phase(), HoldPhase::Idle);
    }

    #[test]
    fn test_retouch_while_lingering_keeps_effect() {
        let mut hold = TouchHold::default();
        let mut sched = ManualScheduler::new();

        sched.apply(hold.touch_start());
        sched.advance_ms(&mut hold, 500);
        sched.apply(hold.touch_end());
        sched.advance_ms(&mut hold, 1000);
        sched.apply(hold.touch_start());
        assert_eq!(hold.phase(), HoldPhase::Active);

        // the old linger timer must not switch the effect off
        sched.advance_ms(&mut hold, 5000);
        assert_eq!(hold.phase(), HoldPhase::Active);
    }

    #[test]
    fn test_stale_token_is_ignored() {
        let mut hold = TouchHold::default();
        let cmds = hold.touch_start();
        let TimerCommand::Schedule { token, .. } = cmds[0] else {
            panic!("expected schedule, got {:?}", cmds);
        };
        hold.touch_end();
        // a timeout that slipped through cancellation does nothing
        assert!(hold.on_timer(token).is_empty());
        assert_eq!(hold.phase(), HoldPhase::Idle);
    }

    #[test]
    fn test_teardown_cancels_pending_activation() {
        let mut hold = TouchHold::default();
        let mut sched = ManualScheduler::new();
        sched.apply(hold.touch_start());
        sched.apply(hold.teardown());
        assert_eq!(sched.pending(), 0);
        sched.advance_ms(&mut hold, 1000);
        assert_eq!(hold.phase(), HoldPhase::Idle);
    }

    #[test]
    fn test_custom_config() {
        let mut hold = TouchHold::new(TouchHoldConfig {
            hold: Duration::from_millis(100),
            linger: Duration::from_millis(50),
        });
        let mut sched = ManualScheduler::new();
        sched.apply(hold.touch_start());
        sched.advance_ms(&mut hold, 100);
        assert!(hold.is_active());
        sched.apply(hold.touch_end());
        sched.advance_ms(&mut hold, 50);
        assert!(!hold.is_active());
    }
}

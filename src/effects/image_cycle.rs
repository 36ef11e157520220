use std::time::Duration;

use super::timer::{ArmedTimer, TimedMachine, TimerCommands, TimerToken};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageCycleConfig {
    pub interval: Duration,
    /// Cycling stops on its own after this long, leaving the last image up.
    pub run_for: Duration,
    pub hold: Duration,
}

impl Default for ImageCycleConfig {
    fn default() -> Self {
        Self {
            interval: Duration::from_millis(800),
            run_for: Duration::from_millis(3000),
            hold: Duration::from_millis(500),
        }
    }
}

/// Flips through a small set of profile pictures on hover or press-and-hold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageCycler {
    config: ImageCycleConfig,
    len: usize,
    current: usize,
    tick: ArmedTimer,
    stop: ArmedTimer,
    hold: ArmedTimer,
}

impl ImageCycler {
    pub fn new(len: usize, config: ImageCycleConfig) -> Self {
        Self {
            config,
            len,
            current: 0,
            tick: ArmedTimer::default(),
            stop: ArmedTimer::default(),
            hold: ArmedTimer::default(),
        }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn is_cycling(&self) -> bool {
        self.tick.is_armed()
    }

    pub fn pointer_enter(&mut self) -> TimerCommands {
        let mut cmds = Vec::new();
        self.start_cycling(&mut cmds);
        cmds
    }

    pub fn pointer_leave(&mut self) -> TimerCommands {
        self.teardown()
    }

    pub fn touch_start(&mut self) -> TimerCommands {
        let mut cmds = Vec::new();
        self.hold.arm(self.config.hold, &mut cmds);
        cmds
    }

    pub fn touch_end(&mut self) -> TimerCommands {
        let mut cmds = Vec::new();
        self.hold.disarm(&mut cmds);
        if self.is_cycling() {
            cmds.extend(self.teardown());
        }
        cmds
    }

    fn start_cycling(&mut self, cmds: &mut TimerCommands) {
        if self.len < 2 {
            return;
        }
        self.tick.arm(self.config.interval, cmds);
        self.stop.arm(self.config.run_for, cmds);
    }
}

impl TimedMachine for ImageCycler {
    fn on_timer(&mut self, token: TimerToken) -> TimerCommands {
        let mut cmds = Vec::new();
        if self.tick.fired(token) {
            self.current = (self.current + 1) % self.len.max(1);
            self.tick.arm(self.config.interval, &mut cmds);
        } else if self.stop.fired(token) {
            self.tick.disarm(&mut cmds);
        } else if self.hold.fired(token) {
            self.start_cycling(&mut cmds);
        }
        cmds
    }

    fn teardown(&mut self) -> TimerCommands {
        let mut cmds = Vec::new();
        self.tick.disarm(&mut cmds);
        self.stop.disarm(&mut cmds);
        self.hold.disarm(&mut cmds);
        self.current = 0;
        cmds
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effects::timer::ManualScheduler;

    #[test]
    fn test_hover_cycles_then_stops() {
        let mut cycler = ImageCycler::new(2, ImageCycleConfig::default());
        let mut sched = ManualScheduler::new();
        sched.apply(cycler.pointer_enter());

        sched.advance_ms(&mut cycler, 800);
        assert_eq!(cycler.current(), 1);
        sched.advance_ms(&mut cycler, 800);
        assert_eq!(cycler.current(), 0);
        sched.advance_ms(&mut cycler, 800);
        assert_eq!(cycler.current(), 1);

        // stop timer at 3000 wins before the tick at 3200
        sched.advance_ms(&mut cycler, 1000);
        assert!(!cycler.is_cycling());
        assert_eq!(cycler.current(), 1);
        assert_eq!(sched.pending(), 0);

        sched.apply(cycler.pointer_leave());
        assert_eq!(cycler.current(), 0);
    }

    #[test]
    fn test_touch_hold_starts_cycling() {
        let mut cycler = ImageCycler::new(3, ImageCycleConfig::default());
        let mut sched = ManualScheduler::new();

        sched.apply(cycler.touch_start());
        sched.advance_ms(&mut cycler, 300);
        sched.apply(cycler.touch_end());
        sched.advance_ms(&mut cycler, 2000);
        assert!(!cycler.is_cycling());
        assert_eq!(cycler.current(), 0);

        sched.apply(cycler.touch_start());
        sched.advance_ms(&mut cycler, 500 + 800);
        assert!(cycler.is_cycling());
        assert_eq!(cycler.current(), 1);

        sched.apply(cycler.touch_end());
        assert_eq!(cycler.current(), 0);
        assert_eq!(sched.pending(), 0);
    }

    #[test]
    fn test_single_image_never_cycles() {
        let mut cycler = ImageCycler::new(1, ImageCycleConfig::default());
        assert!(cycler.pointer_enter().is_empty());
        assert!(!cycler.is_cycling());
    }
}

use std::collections::BTreeSet;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

static NEXT_TOKEN: AtomicU64 = AtomicU64::new(1);

/// Identifies one scheduled timeout. Tokens are never reused, so a timeout
/// that fires after being replaced can be recognised and dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerToken(u64);

impl TimerToken {
    fn fresh() -> Self {
        Self(NEXT_TOKEN.fetch_add(1, Ordering::Relaxed))
    }
}

/// What a state machine asks its host to do with timeouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerCommand {
    Schedule { token: TimerToken, after: Duration },
    Cancel(TimerToken),
}

pub type TimerCommands = Vec<TimerCommand>;

/// A slot holding at most one pending timeout.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArmedTimer {
    pending: Option<TimerToken>,
}

impl ArmedTimer {
    /// Schedules a new timeout, cancelling the one already pending.
    pub fn arm(&mut self, after: Duration, cmds: &mut TimerCommands) {
        self.disarm(cmds);
        let token = TimerToken::fresh();
        self.pending = Some(token);
        cmds.push(TimerCommand::Schedule { token, after });
    }

    pub fn disarm(&mut self, cmds: &mut TimerCommands) {
        if let Some(token) = self.pending.take() {
            cmds.push(TimerCommand::Cancel(token));
        }
    }

    /// Consumes `token` if it is the one pending in this slot.
    pub fn fired(&mut self, token: TimerToken) -> bool {
        if self.pending == Some(token) {
            self.pending = None;
            true
        } else {
            false
        }
    }

    pub fn is_armed(&self) -> bool {
        self.pending.is_some()
    }
}

/// A state machine advanced by its own timeouts.
pub trait TimedMachine {
    fn on_timer(&mut self, token: TimerToken) -> TimerCommands;

    /// Cancels everything pending and returns to the resting state.
    fn teardown(&mut self) -> TimerCommands;
}

/// Deterministic scheduler over a virtual clock.
///
/// Applies [`TimerCommand`]s like a browser host would and fires due
/// timeouts in deadline order when time is advanced.
#[derive(Debug, Default)]
pub struct ManualScheduler {
    now: Duration,
    queue: BTreeSet<(Duration, TimerToken)>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> Duration {
        self.now
    }

    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    pub fn apply(&mut self, cmds: TimerCommands) {
        for cmd in cmds {
            match cmd {
                TimerCommand::Schedule { token, after } => {
                    self.queue.insert((self.now + after, token));
                }
                TimerCommand::Cancel(token) => {
                    self.queue.retain(|(_, t)| *t != token);
                }
            }
        }
    }

    /// Advances the clock by `by`, feeding every timeout that comes due to
    /// `machine`, including ones scheduled along the way.
    pub fn advance<M: TimedMachine>(&mut self, machine: &mut M, by: Duration) {
        let target = self.now + by;
        while let Some(&(deadline, token)) = self.queue.first() {
            if deadline > target {
                break;
            }
            self.queue.remove(&(deadline, token));
            self.now = deadline;
            let cmds = machine.on_timer(token);
            self.apply(cmds);
        }
        self.now = target;
    }

    pub fn advance_ms<M: TimedMachine>(&mut self, machine: &mut M, ms: u64) {
        self.advance(machine, Duration::from_millis(ms));
    }
}

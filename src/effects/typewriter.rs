use std::time::Duration;

use super::timer::{ArmedTimer, TimedMachine, TimerCommands, TimerToken};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypewriterConfig {
    pub type_delay: Duration,
    pub delete_delay: Duration,
    /// Pause on the fully typed phrase before deleting starts.
    pub hold: Duration,
}

impl Default for TypewriterConfig {
    fn default() -> Self {
        Self {
            type_delay: Duration::from_millis(100),
            delete_delay: Duration::from_millis(50),
            hold: Duration::from_millis(2000),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Typing,
    Holding,
    Deleting,
}

/// Types phrases out one character at a time, deletes them, and moves on
/// to the next phrase. Only ever one step is scheduled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Typewriter {
    config: TypewriterConfig,
    phrases: Vec<String>,
    phrase: usize,
    shown: usize,
    phase: Phase,
    timer: ArmedTimer,
}

impl Typewriter {
    pub fn new(phrases: Vec<String>, config: TypewriterConfig) -> Self {
        Self {
            config,
            phrases,
            phrase: 0,
            shown: 0,
            phase: Phase::Typing,
            timer: ArmedTimer::default(),
        }
    }

    pub fn start(&mut self) -> TimerCommands {
        let mut cmds = Vec::new();
        if !self.phrases.is_empty() {
            let delay = self.delay();
            self.timer.arm(delay, &mut cmds);
        }
        cmds
    }

    /// Index of the phrase currently on screen.
    pub fn phrase_index(&self) -> usize {
        self.phrase
    }

    pub fn text(&self) -> &str {
        let Some(phrase) = self.phrases.get(self.phrase) else {
            return "";
        };
        let end = phrase
            .char_indices()
            .nth(self.shown)
            .map(|(i, _)| i)
            .unwrap_or(phrase.len());
        &phrase[..end]
    }

    fn phrase_len(&self) -> usize {
        self.phrases
            .get(self.phrase)
            .map(|p| p.chars().count())
            .unwrap_or(0)
    }

    fn delay(&self) -> Duration {
        match self.phase {
            Phase::Typing => self.config.type_delay,
            Phase::Holding => self.config.hold,
            Phase::Deleting => self.config.delete_delay,
        }
    }

    fn step(&mut self) {
        match self.phase {
            Phase::Typing => {
                if self.shown < self.phrase_len() {
                    self.shown += 1;
                }
                if self.shown == self.phrase_len() {
                    self.phase = Phase::Holding;
                }
            }
            Phase::Holding => self.phase = Phase::Deleting,
            Phase::Deleting => {
                self.shown = self.shown.saturating_sub(1);
                if self.shown == 0 {
                    self.phase = Phase::Typing;
                    self.phrase = (self.phrase + 1) % self.phrases.len();
                }
            }
        }
    }
}

impl TimedMachine for Typewriter {
    fn on_timer(&mut self, token: TimerToken) -> TimerCommands {
        let mut cmds = Vec::new();
        if self.timer.fired(token) && !self.phrases.is_empty() {
            self.step();
            let delay = self.delay();
            self.timer.arm(delay, &mut cmds);
        }
        cmds
    }

    fn teardown(&mut self) -> TimerCommands {
        let mut cmds = Vec::new();
        self.timer.disarm(&mut cmds);
        cmds
    }
}

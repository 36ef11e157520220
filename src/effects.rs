//! Timer-driven interaction effects.
//!
//! Each effect is a small state machine that never touches a clock itself.
//! Inputs return [`TimerCommand`]s for the host to schedule or cancel, and
//! the host reports expiry through [`TimedMachine::on_timer`]. In the
//! browser the host is the `TimerDriver` in `app::timers`; in tests it is
//! [`ManualScheduler`].

pub mod image_cycle;
pub mod timer;
pub mod touch_hold;
pub mod typewriter;

pub use image_cycle::{ImageCycleConfig, ImageCycler};
pub use timer::{
    ArmedTimer, ManualScheduler, TimedMachine, TimerCommand, TimerCommands, TimerToken,
};
pub use touch_hold::{HoldPhase, TouchHold, TouchHoldConfig};
pub use typewriter::{Typewriter, TypewriterConfig};

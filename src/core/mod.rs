pub mod layout;
pub mod timers;

pub use layout::{Direction, ScrollBehavior, StepPlan, StripLayout};
pub use timers::{FiredTimer, TimerEntry, TimerId, TimerKind, TimerQueue};

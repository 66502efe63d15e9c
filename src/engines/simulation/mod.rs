pub mod arrival_schedule;
pub mod fork_ordering;

pub use arrival_schedule::{ArrivalScheduleSimulator, Interval, Meal, ScheduleOutcome};
pub use fork_ordering::{ForkOrderingSimulator, RoundOutcome};

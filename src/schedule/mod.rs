pub mod types;
pub mod rng;
pub mod selector;
pub mod rounds;

pub use types::{CourtAssignment, MatchFormat, RoundResult, ScheduleResult};
pub use rounds::{generate_schedule, MAX_PLAYERS, MIN_PLAYERS};

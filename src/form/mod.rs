pub mod timing;
pub mod submission;
pub mod export;

pub use timing::{timing_presets, AdFormat, GameFormat};
pub use submission::{validate_form, ScheduleForm};
pub use export::export_schedule_to_csv;

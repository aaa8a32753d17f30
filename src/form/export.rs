use std::path::Path;
use csv::WriterBuilder;
use crate::error::AppError;
use crate::schedule::ScheduleResult;

pub const EXPORT_HEADER: [&str; 5] = ["round", "court", "team_a", "team_b", "rests"];

/// Exports court assignments as CSV, one row per court per round.
/// Team members are joined with " & ", resting players with ", ".
pub fn export_schedule_to_csv(result: &ScheduleResult, csv_path: &Path) -> Result<(), AppError> {
    let mut wtr = WriterBuilder::new()
        .has_headers(false)
        .from_path(csv_path)?;

    wtr.write_record(EXPORT_HEADER)?;

    for round in &result.rounds {
        let rests = round.rests.join(", ");
        for court in &round.courts {
            wtr.write_record(&[
                round.round_number.to_string(),
                court.court_number.to_string(),
                court.team_a.join(" & "),
                court.team_b.join(" & "),
                rests.clone(),
            ])?;
        }
    }

    wtr.flush()?;
    Ok(())
}

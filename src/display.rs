use std::fs::File;
use std::io::Write;
use std::path::Path;
use crate::error::AppError;
use crate::schedule::{CourtAssignment, RoundResult, ScheduleResult};

/// Formats one court as `Court 1: A, B vs C, D`
pub fn format_court(court: &CourtAssignment) -> String {
    format!(
        "Court {}: {} vs {}",
        court.court_number,
        court.team_a.join(", "),
        court.team_b.join(", ")
    )
}

/// Lines of one round card: title, courts, then resting players if any
pub fn format_round(round: &RoundResult) -> Vec<String> {
    let mut lines = Vec::with_capacity(round.courts.len() + 2);
    lines.push(format!("Round {}/{}", round.round_number, round.total_rounds));
    lines.extend(round.courts.iter().map(format_court));
    if !round.rests.is_empty() {
        lines.push(format!("Rest: {}", round.rests.join(", ")));
    }
    lines
}

pub fn format_summary(result: &ScheduleResult) -> String {
    format!(
        "Seed: {} | Spread: {} | Consecutive-rest exceptions: {}",
        result.seed, result.max_played_minus_min_played, result.total_consecutive_rest_exceptions
    )
}

/// Prints a schedule in a readable format
pub fn print_schedule(result: &ScheduleResult) {
    println!("\n=== Schedule ===");
    println!("{}", format_summary(result));
    for round in &result.rounds {
        println!();
        for line in format_round(round) {
            println!("  {}", line);
        }
    }
}

/// Writes the same rendering as `print_schedule` to a file
pub fn write_schedule_to_file(result: &ScheduleResult, filename: &Path) -> Result<(), AppError> {
    let mut file = File::create(filename)?;

    writeln!(file, "{}", format_summary(result))?;
    for round in &result.rounds {
        writeln!(file)?;
        for line in format_round(round) {
            writeln!(file, "{}", line)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ScheduleResult {
        ScheduleResult {
            rounds: vec![
                RoundResult {
                    round_number: 1,
                    total_rounds: 2,
                    courts: vec![CourtAssignment {
                        court_number: 1,
                        team_a: vec!["Ana".into(), "Ben".into()],
                        team_b: vec!["Cy".into(), "Dee".into()],
                    }],
                    rests: vec!["Eve".into()],
                    consecutive_rest_exceptions: 0,
                },
                RoundResult {
                    round_number: 2,
                    total_rounds: 2,
                    courts: vec![CourtAssignment {
                        court_number: 1,
                        team_a: vec!["Eve".into(), "Ana".into()],
                        team_b: vec!["Ben".into(), "Cy".into()],
                    }],
                    rests: vec![],
                    consecutive_rest_exceptions: 0,
                },
            ],
            seed: 17,
            max_played_minus_min_played: 1,
            total_consecutive_rest_exceptions: 0,
        }
    }

    #[test]
    fn round_card_lines() {
        let result = sample();
        assert_eq!(
            format_round(&result.rounds[0]),
            vec!["Round 1/2", "Court 1: Ana, Ben vs Cy, Dee", "Rest: Eve"]
        );
        // no rest line when everyone plays
        assert_eq!(format_round(&result.rounds[1]).len(), 2);
    }

    #[test]
    fn summary_line() {
        assert_eq!(
            format_summary(&sample()),
            "Seed: 17 | Spread: 1 | Consecutive-rest exceptions: 0"
        );
    }

    #[test]
    fn file_matches_rendering() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("schedule.txt");
        write_schedule_to_file(&sample(), &path).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = written.lines().collect();
        assert_eq!(lines[0], "Seed: 17 | Spread: 1 | Consecutive-rest exceptions: 0");
        assert_eq!(lines[1], "");
        assert_eq!(lines[2], "Round 1/2");
        assert!(written.contains("Court 1: Eve, Ana vs Ben, Cy"));
    }
}

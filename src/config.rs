use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use crate::error::{AppError, ValidationError};
use crate::form::{validate_form, AdFormat, GameFormat, ScheduleForm};
use crate::parser::{load_roster, parse_player_list};
use crate::schedule::MatchFormat;

/// Fair court rotation for social tennis and padel sessions
#[derive(Parser, Debug)]
#[command(name = "court-rotation", version, about)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate a schedule and print it
    Schedule(ScheduleArgs),
    /// Run the JSON API
    Serve(ServeArgs),
}

#[derive(Args, Debug)]
pub struct ScheduleArgs {
    /// Comma-separated player names
    #[arg(long, conflicts_with = "roster")]
    pub players: Option<String>,

    /// CSV file with one player per row
    #[arg(long)]
    pub roster: Option<PathBuf>,

    #[arg(long, default_value_t = 1)]
    pub courts: i64,

    /// singles or doubles
    #[arg(long, default_value = "doubles")]
    pub format: MatchFormat,

    /// Number of rounds; overrides the minutes-based calculation
    #[arg(long)]
    pub rounds: Option<usize>,

    #[arg(long, default_value_t = 120)]
    pub total_minutes: i64,

    /// Minutes per round; defaults to the game/ad format preset
    #[arg(long)]
    pub round_minutes: Option<i64>,

    #[arg(long, default_value = "FOUR_ONLY")]
    pub game_format: GameFormat,

    #[arg(long, default_value = "NO_AD")]
    pub ad_format: AdFormat,

    /// Defaults to the current time in milliseconds
    #[arg(long, allow_hyphen_values = true)]
    pub seed: Option<i64>,

    /// Print the result as JSON instead of text
    #[arg(long)]
    pub json: bool,

    /// Also write the text rendering to this file
    #[arg(long)]
    pub out: Option<PathBuf>,

    /// Also export the court assignments as CSV
    #[arg(long)]
    pub csv: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct ServeArgs {
    #[arg(long, default_value_t = 8080)]
    pub port: u16,

    #[arg(long, default_value = "0.0.0.0")]
    pub bind: String,
}

impl ScheduleArgs {
    /// Roster from `--roster`, `--players`, or the default `P1..P5`
    pub fn resolve_players(&self) -> Result<Vec<String>, AppError> {
        if let Some(path) = &self.roster {
            return load_roster(path);
        }
        Ok(match &self.players {
            Some(list) => parse_player_list(list),
            None => (1..=5).map(|i| format!("P{}", i)).collect(),
        })
    }

    pub fn resolve_seed(&self) -> i64 {
        self.seed
            .unwrap_or_else(|| chrono::Utc::now().timestamp_millis())
    }

    pub fn to_form(&self) -> ScheduleForm {
        match self.round_minutes {
            Some(round_minutes) => ScheduleForm {
                courts: self.courts,
                match_format: self.format,
                total_minutes: self.total_minutes,
                round_minutes,
            },
            None => ScheduleForm::with_preset(
                self.courts,
                self.format,
                self.total_minutes,
                self.game_format,
                self.ad_format,
            ),
        }
    }

    /// Courts and round count for the run. `--rounds` bypasses the minutes
    /// form; courts are then range-checked by the scheduler.
    pub fn resolve_courts_and_rounds(&self) -> Result<(usize, usize), ValidationError> {
        match self.rounds {
            Some(rounds) => Ok((usize::try_from(self.courts).unwrap_or(0), rounds)),
            None => {
                let validated = validate_form(&self.to_form())?;
                Ok((validated.courts, validated.rounds))
            }
        }
    }
}

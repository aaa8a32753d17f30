use serde::{Deserialize, Serialize};
use crate::error::ValidationError;
use crate::schedule::MatchFormat;
use super::timing::{recommended_round_minutes, AdFormat, GameFormat};

/// Session settings as entered by the organiser
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleForm {
    pub courts: i64,
    pub match_format: MatchFormat,
    pub total_minutes: i64,
    pub round_minutes: i64,
}

impl ScheduleForm {
    /// Form with the round length taken from the game/ad preset
    pub fn with_preset(
        courts: i64,
        match_format: MatchFormat,
        total_minutes: i64,
        game: GameFormat,
        ad: AdFormat,
    ) -> Self {
        Self {
            courts,
            match_format,
            total_minutes,
            round_minutes: recommended_round_minutes(game, ad) as i64,
        }
    }
}

/// A form that passed validation, with its round count resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidatedForm {
    pub courts: usize,
    pub match_format: MatchFormat,
    pub rounds: usize,
}

/// Validates a schedule form and derives `rounds = floor(total / round)`
pub fn validate_form(form: &ScheduleForm) -> Result<ValidatedForm, ValidationError> {
    if form.courts < 1 || form.courts > 4 {
        return Err(ValidationError::new("Courts must be between 1 and 4."));
    }
    if form.total_minutes <= 0 {
        return Err(ValidationError::new("Total minutes must be positive."));
    }
    if form.round_minutes <= 0 {
        return Err(ValidationError::new("Round minutes must be positive."));
    }

    let rounds = form.total_minutes / form.round_minutes;
    if rounds < 1 {
        return Err(ValidationError::new(
            "rounds = floor(totalMinutes / roundMinutes) must be at least 1.",
        ));
    }

    Ok(ValidatedForm {
        courts: form.courts as usize,
        match_format: form.match_format,
        rounds: rounds as usize,
    })
}

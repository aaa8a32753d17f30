use serde::Serialize;
use tracing::{info, warn};
use crate::error::ValidationError;
use crate::form::{validate_form, ScheduleForm};
use crate::schedule::{generate_schedule, RoundResult, ScheduleResult, MAX_PLAYERS, MIN_PLAYERS};

/// Caller-owned scheduling state: roster, seed, last result, focused round
#[derive(Debug, Clone, Serialize)]
pub struct Session {
    players: Vec<String>,
    seed: i64,
    last_result: Option<ScheduleResult>,
    current_round: usize,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(chrono::Utc::now().timestamp_millis())
    }
}

impl Session {
    /// Session with the default roster `P1..P5`
    pub fn new(seed: i64) -> Self {
        Self::with_players((1..=5).map(|i| format!("P{}", i)).collect(), seed)
    }

    pub fn with_players(players: Vec<String>, seed: i64) -> Self {
        Self {
            players,
            seed,
            last_result: None,
            current_round: 0,
        }
    }

    pub fn players(&self) -> &[String] {
        &self.players
    }

    pub fn seed(&self) -> i64 {
        self.seed
    }

    pub fn last_result(&self) -> Option<&ScheduleResult> {
        self.last_result.as_ref()
    }

    pub fn current_round_index(&self) -> usize {
        self.current_round
    }

    /// Adds a player. A blank name becomes the first free `P{n}` label.
    /// Returns the name that was added.
    pub fn add_player(&mut self, name: &str) -> Result<String, ValidationError> {
        let mut name = name.trim().to_string();
        if name.is_empty() {
            let mut next = self.players.len() + 1;
            while self.players.contains(&format!("P{}", next)) {
                next += 1;
            }
            name = format!("P{}", next);
        }
        if self.players.contains(&name) {
            return Err(ValidationError::new("Player name must be unique."));
        }
        if self.players.len() >= MAX_PLAYERS {
            return Err(ValidationError::new(format!("Players cannot exceed {}.", MAX_PLAYERS)));
        }
        self.players.push(name.clone());
        Ok(name)
    }

    pub fn remove_player(&mut self, name: &str) -> Result<(), ValidationError> {
        if self.players.len() <= MIN_PLAYERS {
            return Err(ValidationError::new(format!("Players must be at least {}.", MIN_PLAYERS)));
        }
        let before = self.players.len();
        self.players.retain(|p| p != name);
        if self.players.len() == before {
            return Err(ValidationError::new(format!("No player named {}.", name)));
        }
        Ok(())
    }

    /// Builds a schedule from the form with the current roster and seed.
    /// On failure the previous result is kept.
    pub fn generate(&mut self, form: &ScheduleForm) -> Result<&ScheduleResult, ValidationError> {
        let validated = validate_form(form).map_err(|e| {
            warn!("Schedule form rejected: {}", e);
            e
        })?;
        let result = generate_schedule(
            &self.players,
            validated.courts,
            validated.rounds,
            self.seed,
            validated.match_format,
        )
        .map_err(|e| {
            warn!("Schedule rejected: {}", e);
            e
        })?;

        info!(
            "Generated {} rounds (seed {}, spread {}, consecutive-rest exceptions {})",
            result.rounds.len(),
            result.seed,
            result.max_played_minus_min_played,
            result.total_consecutive_rest_exceptions
        );

        self.current_round = 0;
        Ok(self.last_result.insert(result))
    }

    /// Advances the seed by one and generates again
    pub fn regenerate(&mut self, form: &ScheduleForm) -> Result<&ScheduleResult, ValidationError> {
        self.seed = self.seed.wrapping_add(1);
        self.generate(form)
    }

    fn total_rounds(&self) -> usize {
        self.last_result.as_ref().map(|r| r.rounds.len()).unwrap_or(0)
    }

    fn clamp_focus(&mut self) {
        let total = self.total_rounds();
        self.current_round = self.current_round.min(total.saturating_sub(1));
    }

    pub fn focus_next(&mut self) {
        self.current_round += 1;
        self.clamp_focus();
    }

    pub fn focus_previous(&mut self) {
        self.current_round = self.current_round.saturating_sub(1);
        self.clamp_focus();
    }

    pub fn has_previous(&self) -> bool {
        self.last_result.is_some() && self.current_round > 0
    }

    pub fn has_next(&self) -> bool {
        self.current_round + 1 < self.total_rounds()
    }

    pub fn current_round(&self) -> Option<&RoundResult> {
        self.last_result.as_ref()?.rounds.get(self.current_round)
    }

    /// The round after the focused one
    pub fn upcoming_round(&self) -> Option<&RoundResult> {
        self.last_result.as_ref()?.rounds.get(self.current_round + 1)
    }
}

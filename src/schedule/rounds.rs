use std::collections::HashSet;
use tracing::debug;
use crate::error::ValidationError;
use super::rng::{shuffle, SeededRandom};
use super::selector::pick_by_least_played;
use super::types::{CourtAssignment, MatchFormat, PlayerStats, RoundResult, ScheduleResult, StatsMap};

pub const MIN_PLAYERS: usize = 4;
pub const MAX_PLAYERS: usize = 16;
pub const MIN_COURTS: usize = 1;
pub const MAX_COURTS: usize = 4;

/// Player slots filled in every round
pub fn required_slots(courts: usize, match_format: MatchFormat) -> usize {
    courts * match_format.players_per_court()
}

/// Checks the run inputs in a fixed order and reports the first failure
pub fn validate_inputs(
    players: &[String],
    courts: usize,
    rounds: usize,
    match_format: MatchFormat,
) -> Result<(), ValidationError> {
    if players.len() < MIN_PLAYERS || players.len() > MAX_PLAYERS {
        return Err(ValidationError::new(format!(
            "Players must be between {} and {}.",
            MIN_PLAYERS, MAX_PLAYERS
        )));
    }
    if courts < MIN_COURTS || courts > MAX_COURTS {
        return Err(ValidationError::new(format!(
            "Courts must be between {} and {}.",
            MIN_COURTS, MAX_COURTS
        )));
    }
    if rounds < 1 {
        return Err(ValidationError::new("Rounds must be at least 1."));
    }
    let slots = required_slots(courts, match_format);
    if slots > players.len() {
        return Err(ValidationError::new(format!("Need at least {} players.", slots)));
    }
    let unique: HashSet<&String> = players.iter().collect();
    if unique.len() != players.len() {
        return Err(ValidationError::new("Player names must be unique."));
    }
    Ok(())
}

/// Builds `rounds` rounds of court assignments for `players`.
///
/// Everyone who rested in the previous round is put back on court when the
/// slots allow it; remaining slots go to the least played players. When more
/// players rested than there are slots, the overflow is counted as
/// consecutive-rest exceptions. The result depends only on the arguments.
pub fn generate_schedule(
    players: &[String],
    courts: usize,
    rounds: usize,
    seed: i64,
    match_format: MatchFormat,
) -> Result<ScheduleResult, ValidationError> {
    validate_inputs(players, courts, rounds, match_format)?;

    let slots = required_slots(courts, match_format);
    let mut rng = SeededRandom::new(seed);
    let mut stats: StatsMap = players
        .iter()
        .map(|p| (p.clone(), PlayerStats::default()))
        .collect();

    let mut previous_rest: Vec<String> = Vec::new();
    let mut total_exceptions = 0;
    let mut round_results = Vec::with_capacity(rounds);

    for round_index in 0..rounds {
        let must_play = previous_rest;

        let selected = if must_play.len() >= slots {
            pick_by_least_played(&must_play, slots, &stats, &mut rng, round_index)
        } else {
            let remaining: Vec<String> = players
                .iter()
                .filter(|p| !must_play.contains(p))
                .cloned()
                .collect();
            let mut chosen = must_play.clone();
            chosen.extend(pick_by_least_played(
                &remaining,
                slots - must_play.len(),
                &stats,
                &mut rng,
                round_index,
            ));
            chosen
        };

        let shuffled = shuffle(&selected, &mut rng);
        let team_size = match_format.players_per_team();
        let court_list: Vec<CourtAssignment> = shuffled
            .chunks_exact(match_format.players_per_court())
            .enumerate()
            .map(|(idx, group)| CourtAssignment {
                court_number: idx + 1,
                team_a: group[..team_size].to_vec(),
                team_b: group[team_size..].to_vec(),
            })
            .collect();

        let selected_set: HashSet<&String> = selected.iter().collect();
        let rests: Vec<String> = players
            .iter()
            .filter(|p| !selected_set.contains(p))
            .cloned()
            .collect();
        let exceptions = must_play.len().saturating_sub(slots);
        total_exceptions += exceptions;

        for player in players {
            if let Some(s) = stats.get_mut(player) {
                if selected_set.contains(player) {
                    s.record_played();
                } else {
                    s.record_rest(round_index);
                }
            }
        }

        debug!(
            "Round {}/{}: {} courts, {} resting, {} consecutive-rest exceptions",
            round_index + 1,
            rounds,
            court_list.len(),
            rests.len(),
            exceptions
        );

        round_results.push(RoundResult {
            round_number: round_index + 1,
            total_rounds: rounds,
            courts: court_list,
            rests: rests.clone(),
            consecutive_rest_exceptions: exceptions,
        });

        previous_rest = rests;
    }

    let max_played = stats.values().map(|s| s.played).max().unwrap_or(0);
    let min_played = stats.values().map(|s| s.played).min().unwrap_or(0);

    Ok(ScheduleResult {
        rounds: round_results,
        seed,
        max_played_minus_min_played: max_played - min_played,
        total_consecutive_rest_exceptions: total_exceptions,
    })
}

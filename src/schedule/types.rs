use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use serde::{Serialize, Deserialize};

/// Singles puts one player per team on a court, doubles puts two
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchFormat {
    Singles,
    Doubles,
}

impl MatchFormat {
    pub fn players_per_team(self) -> usize {
        match self {
            MatchFormat::Singles => 1,
            MatchFormat::Doubles => 2,
        }
    }

    pub fn players_per_court(self) -> usize {
        self.players_per_team() * 2
    }
}

impl fmt::Display for MatchFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchFormat::Singles => write!(f, "singles"),
            MatchFormat::Doubles => write!(f, "doubles"),
        }
    }
}

impl FromStr for MatchFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "singles" => Ok(MatchFormat::Singles),
            "doubles" => Ok(MatchFormat::Doubles),
            other => Err(format!("Unknown match format: {}", other)),
        }
    }
}

/// Per-player counters for one scheduling run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerStats {
    pub played: usize,
    pub rest: usize,
    pub consecutive_rest: usize,
    pub max_consecutive_rest: usize,
    pub last_rest_round: Option<usize>, // None = never rested
}

impl PlayerStats {
    /// Rounds since the last rest; a player who never rested sorts after everyone
    pub fn rest_gap(&self, round_index: usize) -> usize {
        match self.last_rest_round {
            Some(last) => round_index - last,
            None => usize::MAX,
        }
    }

    pub fn record_played(&mut self) {
        self.played += 1;
        self.consecutive_rest = 0;
    }

    pub fn record_rest(&mut self, round_index: usize) {
        self.rest += 1;
        self.consecutive_rest += 1;
        self.last_rest_round = Some(round_index);
        if self.consecutive_rest > self.max_consecutive_rest {
            self.max_consecutive_rest = self.consecutive_rest;
        }
    }
}

pub type StatsMap = HashMap<String, PlayerStats>;

/// One court in one round
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourtAssignment {
    pub court_number: usize, // 1-based
    pub team_a: Vec<String>,
    pub team_b: Vec<String>,
}

#[cfg(test)]
impl CourtAssignment {
    pub fn players(&self) -> impl Iterator<Item = &String> {
        self.team_a.iter().chain(self.team_b.iter())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundResult {
    pub round_number: usize,
    pub total_rounds: usize,
    pub courts: Vec<CourtAssignment>,
    pub rests: Vec<String>,
    pub consecutive_rest_exceptions: usize,
}

#[cfg(test)]
impl RoundResult {
    pub fn playing(&self) -> impl Iterator<Item = &String> {
        self.courts.iter().flat_map(|c| c.players())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleResult {
    pub rounds: Vec<RoundResult>,
    pub seed: i64,
    pub max_played_minus_min_played: usize,
    pub total_consecutive_rest_exceptions: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rest_gap_never_rested_is_largest() {
        let fresh = PlayerStats::default();
        let mut rested = PlayerStats::default();
        rested.record_rest(0);
        assert_eq!(rested.rest_gap(3), 3);
        assert!(fresh.rest_gap(3) > rested.rest_gap(3));
    }

    #[test]
    fn rest_streak_tracks_high_water_mark() {
        let mut stats = PlayerStats::default();
        stats.record_rest(0);
        stats.record_rest(1);
        stats.record_played();
        stats.record_rest(3);
        assert_eq!(stats.rest, 3);
        assert_eq!(stats.played, 1);
        assert_eq!(stats.consecutive_rest, 1);
        assert_eq!(stats.max_consecutive_rest, 2);
        assert_eq!(stats.last_rest_round, Some(3));
    }

    #[test]
    fn match_format_parses_case_insensitively() {
        assert_eq!("Singles".parse::<MatchFormat>(), Ok(MatchFormat::Singles));
        assert_eq!(" doubles ".parse::<MatchFormat>(), Ok(MatchFormat::Doubles));
        assert!("triples".parse::<MatchFormat>().is_err());
        assert_eq!(MatchFormat::Doubles.players_per_court(), 4);
    }
}

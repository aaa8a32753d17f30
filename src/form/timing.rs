use std::fmt;
use std::str::FromStr;
use serde::{Serialize, Deserialize};

/// How long a game on court runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GameFormat {
    #[default]
    FourOnly,
    #[serde(rename = "FIRST_TO_4")]
    FirstTo4,
    #[serde(rename = "FIRST_TO_6")]
    FirstTo6,
    OneSet,
}

/// Scoring rule at deuce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AdFormat {
    #[default]
    NoAd,
    OneAd,
    Deuce,
}

impl GameFormat {
    pub const ALL: [GameFormat; 4] = [
        GameFormat::FourOnly,
        GameFormat::FirstTo4,
        GameFormat::FirstTo6,
        GameFormat::OneSet,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            GameFormat::FourOnly => "FOUR_ONLY",
            GameFormat::FirstTo4 => "FIRST_TO_4",
            GameFormat::FirstTo6 => "FIRST_TO_6",
            GameFormat::OneSet => "ONE_SET",
        }
    }
}

impl AdFormat {
    pub const ALL: [AdFormat; 3] = [AdFormat::NoAd, AdFormat::OneAd, AdFormat::Deuce];

    pub fn as_str(self) -> &'static str {
        match self {
            AdFormat::NoAd => "NO_AD",
            AdFormat::OneAd => "ONE_AD",
            AdFormat::Deuce => "DEUCE",
        }
    }
}

impl fmt::Display for GameFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for AdFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GameFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_uppercase().replace('-', "_");
        GameFormat::ALL
            .into_iter()
            .find(|g| g.as_str() == wanted)
            .ok_or_else(|| format!("Unknown game format: {}", s))
    }
}

impl FromStr for AdFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_uppercase().replace('-', "_");
        AdFormat::ALL
            .into_iter()
            .find(|a| a.as_str() == wanted)
            .ok_or_else(|| format!("Unknown ad format: {}", s))
    }
}

/// Suggested minutes per round for a game and ad format
pub fn recommended_round_minutes(game: GameFormat, ad: AdFormat) -> u32 {
    match (game, ad) {
        (GameFormat::FourOnly, AdFormat::NoAd) => 20,
        (GameFormat::FourOnly, AdFormat::OneAd) => 23,
        (GameFormat::FourOnly, AdFormat::Deuce) => 27,
        (GameFormat::FirstTo4, AdFormat::NoAd) => 23,
        (GameFormat::FirstTo4, AdFormat::OneAd) => 27,
        (GameFormat::FirstTo4, AdFormat::Deuce) => 32,
        (GameFormat::FirstTo6, AdFormat::NoAd) => 35,
        (GameFormat::FirstTo6, AdFormat::OneAd) => 40,
        (GameFormat::FirstTo6, AdFormat::Deuce) => 50,
        (GameFormat::OneSet, AdFormat::NoAd) => 50,
        (GameFormat::OneSet, AdFormat::OneAd) => 55,
        (GameFormat::OneSet, AdFormat::Deuce) => 65,
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TimingPreset {
    pub game_format: GameFormat,
    pub ad_format: AdFormat,
    pub round_minutes: u32,
}

/// Every game/ad combination with its recommended round length
pub fn timing_presets() -> Vec<TimingPreset> {
    GameFormat::ALL
        .into_iter()
        .flat_map(|game_format| {
            AdFormat::ALL.into_iter().map(move |ad_format| TimingPreset {
                game_format,
                ad_format,
                round_minutes: recommended_round_minutes(game_format, ad_format),
            })
        })
        .collect()
}

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Sentinel for a figure the source knows it does not have.
pub const UNAVAILABLE: &str = "-";
/// Sentinel for a figure that could not be fetched at all.
pub const NOT_APPLICABLE: &str = "N/A";

/// Format keys used in the per-format stat maps.
pub const FORMATS: [&str; 3] = ["test", "odi", "t20i"];

/// Identity fields as read from the local roster file. Authoritative for
/// identity, never for statistics.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct PlayerIdentity {
    pub name: String,
    pub country: String,
    pub image: Option<String>,
    pub role: String,
}

/// Batting figures for one format. All fields are display strings; no
/// arithmetic is performed on them downstream.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct BattingFigures {
    pub matches: String,
    pub runs: String,
    pub highest_score: String,
    pub average: String,
    pub strike_rate: String,
    pub hundreds: String,
    pub fifties: String,
}

impl BattingFigures {
    #[must_use]
    pub fn sentinel(value: &str) -> Self {
        Self {
            matches: value.to_string(),
            runs: value.to_string(),
            highest_score: value.to_string(),
            average: value.to_string(),
            strike_rate: value.to_string(),
            hundreds: value.to_string(),
            fifties: value.to_string(),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct BowlingFigures {
    pub matches: String,
    pub balls: String,
    pub runs: String,
    pub wickets: String,
    pub best_bowling_innings: String,
    pub economy: String,
    pub five_wickets: String,
}

impl BowlingFigures {
    #[must_use]
    pub fn sentinel(value: &str) -> Self {
        Self {
            matches: value.to_string(),
            balls: value.to_string(),
            runs: value.to_string(),
            wickets: value.to_string(),
            best_bowling_innings: value.to_string(),
            economy: value.to_string(),
            five_wickets: value.to_string(),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct FormatRanks {
    pub test: String,
    pub odi: String,
    pub t20: String,
}

impl FormatRanks {
    #[must_use]
    pub fn sentinel(value: &str) -> Self {
        Self {
            test: value.to_string(),
            odi: value.to_string(),
            t20: value.to_string(),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Rankings {
    pub batting: FormatRanks,
    pub bowling: FormatRanks,
}

impl Rankings {
    #[must_use]
    pub fn sentinel(value: &str) -> Self {
        Self {
            batting: FormatRanks::sentinel(value),
            bowling: FormatRanks::sentinel(value),
        }
    }
}

/// Full player record returned to the caller: identity merged with whatever
/// statistics the chosen source produced.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct PlayerProfile {
    pub name: String,
    pub country: String,
    #[serde(default)]
    pub image: Option<String>,
    pub role: String,
    pub rankings: Rankings,
    pub batting_stats: BTreeMap<String, BattingFigures>,
    pub bowling_stats: BTreeMap<String, BowlingFigures>,
    pub summary: String,
}

impl PlayerProfile {
    /// A profile carrying only sentinel figures, for when no statistics
    /// source produced anything usable.
    #[must_use]
    pub fn placeholder(name: &str, sentinel: &str) -> Self {
        let batting = FORMATS
            .iter()
            .map(|f| ((*f).to_string(), BattingFigures::sentinel(sentinel)))
            .collect();
        let bowling = FORMATS
            .iter()
            .map(|f| ((*f).to_string(), BowlingFigures::sentinel(sentinel)))
            .collect();
        Self {
            name: name.to_string(),
            country: NOT_APPLICABLE.to_string(),
            image: None,
            role: NOT_APPLICABLE.to_string(),
            rankings: Rankings::sentinel(sentinel),
            batting_stats: batting,
            bowling_stats: bowling,
            summary: String::new(),
        }
    }

    /// Overwrite identity-shaped fields with the roster's values. The roster
    /// always wins over whatever the statistics source reported.
    pub fn apply_identity(&mut self, identity: &PlayerIdentity) {
        self.name = identity.name.clone();
        self.country = identity.country.clone();
        self.image = identity.image.clone();
        self.role = identity.role.clone();
    }
}

/// Terminal result of the disambiguation flow. `player_stats` is absent when
/// the roster had no matching row.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct PlayerStatsResult {
    #[serde(rename = "playerStats", skip_serializing_if = "Option::is_none")]
    pub player_stats: Option<PlayerProfile>,
    pub summary: String,
}

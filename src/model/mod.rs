pub mod matches;
pub mod player;

pub use matches::{NewsArticle, NewsDigest, RecentMatch, ScheduleResult, ScheduledMatch};
pub use player::{
    BattingFigures, BowlingFigures, FORMATS, FormatRanks, NOT_APPLICABLE, PlayerIdentity,
    PlayerProfile, PlayerStatsResult, Rankings, UNAVAILABLE,
};

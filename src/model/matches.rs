use serde::{Deserialize, Serialize};

/// One recently completed match as reported by the sports API. Re-fetched on
/// every request, never persisted.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RecentMatch {
    pub series_name: String,
    pub match_description: String,
    pub match_format: String,
    pub status: String,
    pub team1_name: String,
    pub team2_name: String,
    pub venue: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct NewsArticle {
    pub headline: String,
    pub summary: String,
    pub source: String,
    pub url: String,
    pub image: String,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct NewsDigest {
    pub articles: Vec<NewsArticle>,
    pub summary: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ScheduledMatch {
    pub team1: String,
    pub team2: String,
    pub venue: String,
    pub time: String,
    pub competition: String,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ScheduleResult {
    pub matches: Vec<ScheduledMatch>,
    pub summary: String,
}

use async_trait::async_trait;
use std::path::Path;

use crate::args::StatsSourceKind;
use crate::controller::cricbuzz::{self, ScrapedProfile};
use crate::controller::genai::GenAiClient;
use crate::controller::roster;
use crate::error::Result;
use crate::model::{
    BattingFigures, BowlingFigures, FORMATS, NOT_APPLICABLE, PlayerProfile, PlayerStatsResult,
    Rankings, UNAVAILABLE,
};

/// Seam between the merge flow and whichever adapter produces detailed
/// statistics. Both implementations are best effort, single attempt.
#[async_trait]
pub trait StatsSource: Send + Sync {
    async fn fetch_stats(&self, player_name: &str) -> Result<PlayerProfile>;
}

/// Detailed statistics scraped from the stats site.
pub struct CricbuzzSource;

#[async_trait]
impl StatsSource for CricbuzzSource {
    async fn fetch_stats(&self, player_name: &str) -> Result<PlayerProfile> {
        let scraped = cricbuzz::scrape_player_stats(player_name).await?;
        Ok(profile_from_scrape(scraped))
    }
}

/// Detailed statistics from a generative completion constrained to the
/// profile JSON shape.
pub struct ModelSource;

#[async_trait]
impl StatsSource for ModelSource {
    async fn fetch_stats(&self, player_name: &str) -> Result<PlayerProfile> {
        let client = GenAiClient::from_env()?;
        client.generate_json(&build_stats_prompt(player_name)).await
    }
}

#[must_use]
pub fn stats_source_for(kind: StatsSourceKind) -> Box<dyn StatsSource> {
    match kind {
        StatsSourceKind::Scrape => Box::new(CricbuzzSource),
        StatsSourceKind::Model => Box::new(ModelSource),
    }
}

/// Resolve a player: identity from the roster file, statistics from the
/// given source, identity fields always winning in the merge.
///
/// Never fails outward; any failure past input validation is downgraded to a
/// human-readable summary in the result.
pub async fn get_player_stats(
    data_file: &Path,
    source: &dyn StatsSource,
    player_name: &str,
) -> PlayerStatsResult {
    match resolve_player(data_file, source, player_name).await {
        Ok(result) => result,
        Err(e) => {
            eprintln!("player stats flow failed for \"{player_name}\": {e}");
            PlayerStatsResult {
                player_stats: None,
                summary: format!("Could not look up \"{player_name}\": {e}"),
            }
        }
    }
}

async fn resolve_player(
    data_file: &Path,
    source: &dyn StatsSource,
    player_name: &str,
) -> Result<PlayerStatsResult> {
    let Some(identity) = roster::find_player(data_file, player_name).await? else {
        return Ok(PlayerStatsResult {
            player_stats: None,
            summary: format!("Could not find player data for \"{player_name}\"."),
        });
    };

    let mut profile = match source.fetch_stats(&identity.name).await {
        Ok(profile) => {
            let mut profile = profile;
            profile.summary = format!("Found statistics for {}.", identity.name);
            profile
        }
        Err(e) => {
            eprintln!("stats source failed for \"{}\": {e}", identity.name);
            let mut placeholder = PlayerProfile::placeholder(&identity.name, NOT_APPLICABLE);
            placeholder.summary = format!(
                "Found {} in the local roster, but detailed statistics could not be fetched: {e}",
                identity.name
            );
            placeholder
        }
    };

    // Identity fields from the roster always win over the source's.
    profile.apply_identity(&identity);

    let summary = profile.summary.clone();
    Ok(PlayerStatsResult {
        player_stats: Some(profile),
        summary,
    })
}

fn profile_from_scrape(scraped: ScrapedProfile) -> PlayerProfile {
    let mut batting = scraped.batting;
    let mut bowling = scraped.bowling;
    // Keep the per-format maps total so the caller always sees three rows.
    for format in FORMATS {
        batting
            .entry(format.to_string())
            .or_insert_with(|| BattingFigures::sentinel(UNAVAILABLE));
        bowling
            .entry(format.to_string())
            .or_insert_with(|| BowlingFigures::sentinel(UNAVAILABLE));
    }

    PlayerProfile {
        name: scraped.name,
        country: scraped.country,
        image: None,
        role: scraped.role,
        rankings: Rankings::sentinel(UNAVAILABLE),
        batting_stats: batting,
        bowling_stats: bowling,
        summary: String::new(),
    }
}

pub(crate) fn build_stats_prompt(player_name: &str) -> String {
    format!(
        r#"You are a cricket statistician. Provide career statistics for the player "{player_name}".

Respond with a single JSON object of exactly this shape:
{{
  "name": string,
  "country": string,
  "image": null,
  "role": string,
  "rankings": {{
    "batting": {{ "test": string, "odi": string, "t20": string }},
    "bowling": {{ "test": string, "odi": string, "t20": string }}
  }},
  "batting_stats": {{
    "<format>": {{ "matches": string, "runs": string, "highest_score": string, "average": string, "strike_rate": string, "hundreds": string, "fifties": string }}
  }},
  "bowling_stats": {{
    "<format>": {{ "matches": string, "balls": string, "runs": string, "wickets": string, "best_bowling_innings": string, "economy": string, "five_wickets": string }}
  }},
  "summary": string
}}

Include entries for the formats "test", "odi" and "t20i" in both stat maps.
Every figure MUST be a string. Use "-" for any figure you do not know.
Do not include any text outside the JSON object."#
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn scrape_conversion_keeps_all_three_formats() {
        let mut batting = BTreeMap::new();
        batting.insert("test".to_string(), BattingFigures::sentinel("10"));
        let scraped = ScrapedProfile {
            name: "Someone".to_string(),
            country: "India".to_string(),
            role: "Batsman".to_string(),
            batting,
            bowling: BTreeMap::new(),
        };

        let profile = profile_from_scrape(scraped);
        for format in FORMATS {
            assert!(profile.batting_stats.contains_key(format), "{format}");
            assert!(profile.bowling_stats.contains_key(format), "{format}");
        }
        assert_eq!(profile.batting_stats["test"].matches, "10");
        assert_eq!(profile.batting_stats["odi"].matches, UNAVAILABLE);
    }

    #[test]
    fn stats_prompt_names_player_and_sentinel() {
        let prompt = build_stats_prompt("Virat Kohli");
        assert!(prompt.contains("Virat Kohli"));
        assert!(prompt.contains("\"t20i\""));
        assert!(prompt.contains("Use \"-\""));
    }
}

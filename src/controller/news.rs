use actix_web::{HttpResponse, Responder};
use reqwest::Client;
use serde_json::Value;

use crate::controller::genai::GenAiClient;
use crate::error::{CricError, Result};
use crate::model::{NewsDigest, RecentMatch};

pub const API_KEY_VAR: &str = "RAPIDAPI_KEY";
const RECENT_MATCHES_URL: &str = "https://cricbuzz-cricket.p.rapidapi.com/matches/v1/recent";
const RAPIDAPI_HOST: &str = "cricbuzz-cricket.p.rapidapi.com";
const MAX_MATCHES: usize = 10;
const MAX_ARTICLES: usize = 5;

pub const PLACEHOLDER_IMAGE: &str = "https://placehold.co/600x400.png";
pub const NO_MATCHES_SUMMARY: &str = "Could not find any recent cricket matches.";

/// GET handler: recent news composed from recent match results. Failures are
/// downgraded inside the flow, so this always answers 200.
pub async fn news() -> impl Responder {
    HttpResponse::Ok().json(get_news().await)
}

pub async fn get_news() -> NewsDigest {
    match compose_news().await {
        Ok(digest) => digest,
        Err(e) => {
            eprintln!("news flow failed: {e}");
            NewsDigest {
                articles: vec![],
                summary: format!("Could not retrieve the news: {e}"),
            }
        }
    }
}

async fn compose_news() -> Result<NewsDigest> {
    let matches = fetch_recent_matches().await?;
    compose_from_matches(&matches).await
}

/// Compose the digest from an already-fetched match list. Zero matches is a
/// terminal success with the fixed not-found summary; the model is only
/// invoked when there is something to write about.
///
/// # Errors
///
/// Missing model key, network failure, or a completion that does not decode
/// into the digest shape.
pub async fn compose_from_matches(matches: &[RecentMatch]) -> Result<NewsDigest> {
    if matches.is_empty() {
        return Ok(NewsDigest {
            articles: vec![],
            summary: NO_MATCHES_SUMMARY.to_string(),
        });
    }

    let client = GenAiClient::from_env()?;
    client.generate_json(&build_news_prompt(matches)?).await
}

/// Fetch a bounded list of recently completed matches from the sports API.
///
/// # Errors
///
/// Missing API key, network failure, or an unparseable response body.
pub async fn fetch_recent_matches() -> Result<Vec<RecentMatch>> {
    let api_key = std::env::var(API_KEY_VAR)
        .ok()
        .filter(|k| !k.is_empty())
        .ok_or(CricError::MissingKey { var: API_KEY_VAR })?;

    let resp = Client::new()
        .get(RECENT_MATCHES_URL)
        .header("x-rapidapi-key", api_key)
        .header("x-rapidapi-host", RAPIDAPI_HOST)
        .send()
        .await?
        .error_for_status()?;
    let raw: Value = resp.json().await?;

    Ok(flatten_recent_matches(&raw))
}

/// The upstream response nests matches under typeMatches → seriesMatches →
/// either seriesAdWrapper.matches or a bare matches array.
pub(crate) fn flatten_recent_matches(raw: &Value) -> Vec<RecentMatch> {
    let mut out = Vec::new();

    for type_match in raw["typeMatches"].as_array().into_iter().flatten() {
        for series_match in type_match["seriesMatches"].as_array().into_iter().flatten() {
            let matches = series_match["seriesAdWrapper"]["matches"]
                .as_array()
                .or_else(|| series_match["matches"].as_array());
            for m in matches.into_iter().flatten() {
                let info = &m["matchInfo"];
                if info.is_null() {
                    continue;
                }
                out.push(RecentMatch {
                    series_name: text(info, "seriesName"),
                    match_description: text(info, "matchDesc"),
                    match_format: text(info, "matchFormat"),
                    status: text(info, "status"),
                    team1_name: text(&info["team1"], "teamName"),
                    team2_name: text(&info["team2"], "teamName"),
                    venue: format!(
                        "{}, {}",
                        text(&info["venueInfo"], "ground"),
                        text(&info["venueInfo"], "city")
                    ),
                });
            }
        }
    }

    out.truncate(MAX_MATCHES);
    out
}

fn text(value: &Value, key: &str) -> String {
    value[key].as_str().unwrap_or_default().to_string()
}

pub(crate) fn build_news_prompt(matches: &[RecentMatch]) -> Result<String> {
    let match_json = serde_json::to_string_pretty(matches)?;
    Ok(format!(
        r#"You are a cricket news editor. Below is a JSON list of recently completed cricket matches.

{match_json}

Select up to {MAX_ARTICLES} of the most interesting matches and write a news article for each.
Respond with a single JSON object of exactly this shape:
{{
  "articles": [
    {{ "headline": string, "summary": string, "source": string, "url": string, "image": string }}
  ],
  "summary": string
}}

- "headline" must be a catchy news headline based on the match result, using the team names and the status field.
- "summary" must be a short paragraph mentioning the series, the teams, the venue and the final result.
- "source" MUST be "Cricbuzz".
- "url" MUST be "https://www.cricbuzz.com/".
- "image" MUST be "{PLACEHOLDER_IMAGE}".
Do not include any text outside the JSON object."#
    ))
}

use actix_web::{HttpResponse, Responder};
use chrono::DateTime;
use reqwest::{Client, StatusCode};
use serde_json::Value;

use crate::error::{CricError, Result};

pub const API_KEY_VAR: &str = "FOOTBALL_DATA_API_KEY";
const MATCHES_URL: &str = "https://api.football-data.org/v4/matches";
const MAX_MATCHES: usize = 10;

/// GET handler for live scores. The flow downgrades every failure to
/// explanatory lines, so this always answers 200.
pub async fn scores() -> impl Responder {
    HttpResponse::Ok().json(get_live_matches().await)
}

/// Today's matches as ready-to-display lines. Never fails outward; upstream
/// problems become explanatory lines in the list.
pub async fn get_live_matches() -> Vec<String> {
    let api_key = std::env::var(API_KEY_VAR).unwrap_or_default();
    if api_key.is_empty() || api_key == "YOUR_API_KEY_HERE" {
        eprintln!("{API_KEY_VAR} not found or not set");
        return vec![
            "No API key provided for live scores.".to_string(),
            "Get a free key from football-data.org and add it to your .env file.".to_string(),
        ];
    }

    match fetch_matches(&api_key).await {
        Ok(lines) => lines,
        Err(CricError::Network(e)) if e.status() == Some(StatusCode::FORBIDDEN) => {
            vec!["API key is invalid or has expired.".to_string()]
        }
        Err(e) => {
            eprintln!("error fetching live matches: {e}");
            vec!["Could not retrieve live match data.".to_string()]
        }
    }
}

async fn fetch_matches(api_key: &str) -> Result<Vec<String>> {
    let resp = Client::new()
        .get(MATCHES_URL)
        .header("X-Auth-Token", api_key)
        .send()
        .await?
        .error_for_status()?;
    let raw: Value = resp.json().await?;

    let matches = raw["matches"].as_array();
    let Some(matches) = matches.filter(|m| !m.is_empty()) else {
        return Ok(vec!["No matches scheduled for today.".to_string()]);
    };

    Ok(matches.iter().take(MAX_MATCHES).map(format_match_line).collect())
}

pub(crate) fn format_match_line(m: &Value) -> String {
    let home = team_name(&m["homeTeam"]);
    let away = team_name(&m["awayTeam"]);

    let score_home = m["score"]["fullTime"]["home"]
        .as_i64()
        .or_else(|| m["score"]["home"].as_i64());
    let score_away = m["score"]["fullTime"]["away"]
        .as_i64()
        .or_else(|| m["score"]["away"].as_i64());

    let status = match m["status"].as_str().unwrap_or_default() {
        "FINISHED" => "FT".to_string(),
        "IN_PLAY" => format!("{}'", m["minute"].as_i64().unwrap_or_default()),
        "PAUSED" => "HT".to_string(),
        "SCHEDULED" | "TIMED" => kickoff_time(m["utcDate"].as_str().unwrap_or_default()),
        other => other.to_lowercase(),
    };

    let score = match (score_home, score_away) {
        (Some(h), Some(a)) => format!("{h} - {a}"),
        _ => String::new(),
    };

    format!("{home} {score} {away} ({status})")
        .replace("  ", " ")
        .trim()
        .to_string()
}

fn team_name(team: &Value) -> String {
    team["name"]
        .as_str()
        .unwrap_or_default()
        .replace(" FC", "")
}

fn kickoff_time(utc_date: &str) -> String {
    DateTime::parse_from_rfc3339(utc_date)
        .map(|t| t.format("%H:%M").to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn finished_match_formats_with_full_time_score() {
        let m = json!({
            "status": "FINISHED",
            "homeTeam": { "name": "Arsenal FC" },
            "awayTeam": { "name": "Chelsea FC" },
            "score": { "fullTime": { "home": 2, "away": 1 } }
        });
        assert_eq!(format_match_line(&m), "Arsenal 2 - 1 Chelsea (FT)");
    }

    #[test]
    fn in_play_match_shows_minute() {
        let m = json!({
            "status": "IN_PLAY",
            "minute": 67,
            "homeTeam": { "name": "Liverpool FC" },
            "awayTeam": { "name": "Everton FC" },
            "score": { "home": 1, "away": 0 }
        });
        assert_eq!(format_match_line(&m), "Liverpool 1 - 0 Everton (67')");
    }

    #[test]
    fn scheduled_match_shows_kickoff_time_and_no_score() {
        let m = json!({
            "status": "TIMED",
            "utcDate": "2026-08-30T14:30:00Z",
            "homeTeam": { "name": "Fulham FC" },
            "awayTeam": { "name": "Brentford FC" },
            "score": { "fullTime": { "home": null, "away": null } }
        });
        assert_eq!(format_match_line(&m), "Fulham Brentford (14:30)");
    }

    #[test]
    fn unknown_status_is_lowercased() {
        let m = json!({
            "status": "POSTPONED",
            "homeTeam": { "name": "Leeds" },
            "awayTeam": { "name": "Burnley" },
            "score": {}
        });
        assert_eq!(format_match_line(&m), "Leeds Burnley (postponed)");
    }
}

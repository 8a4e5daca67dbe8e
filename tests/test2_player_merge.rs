use std::io::Write;

use cric_stats::controller::player::{StatsSource, get_player_stats};
use cric_stats::model::{PlayerProfile, UNAVAILABLE};
use cric_stats::{CricError, Result};
use tempfile::NamedTempFile;

const ROSTER_CSV: &str = "\
\"fullname\",\"position\",\"image_path\",\"country\"
Virat Kohli,Batsman,https://cdn.example.com/kohli.png,India
";

fn write_roster() -> std::result::Result<NamedTempFile, Box<dyn std::error::Error>> {
    let mut file = NamedTempFile::new()?;
    file.write_all(ROSTER_CSV.as_bytes())?;
    Ok(file)
}

/// Returns a fixed profile whose identity fields conflict with the roster's.
struct ConflictingSource;

#[async_trait::async_trait]
impl StatsSource for ConflictingSource {
    async fn fetch_stats(&self, _player_name: &str) -> Result<PlayerProfile> {
        let mut profile = PlayerProfile::placeholder("V. Kohli (scraped)", UNAVAILABLE);
        profile.country = "Unknown".to_string();
        profile.role = "Wicketkeeper".to_string();
        profile.image = Some("https://elsewhere.example.com/img.png".to_string());
        profile.batting_stats.get_mut("test").unwrap().runs = "9230".to_string();
        Ok(profile)
    }
}

struct FailingSource;

#[async_trait::async_trait]
impl StatsSource for FailingSource {
    async fn fetch_stats(&self, _player_name: &str) -> Result<PlayerProfile> {
        Err(CricError::Other("upstream unavailable".to_string()))
    }
}

#[tokio::test]
async fn roster_identity_wins_over_source_identity() -> std::result::Result<(), Box<dyn std::error::Error>>
{
    let roster = write_roster()?;

    let result = get_player_stats(roster.path(), &ConflictingSource, "virat kohli").await;
    let profile = result.player_stats.expect("profile expected");

    assert_eq!(profile.name, "Virat Kohli");
    assert_eq!(profile.country, "India");
    assert_eq!(profile.role, "Batsman");
    assert_eq!(
        profile.image.as_deref(),
        Some("https://cdn.example.com/kohli.png")
    );
    // Statistics fields still come from the source.
    assert_eq!(profile.batting_stats["test"].runs, "9230");

    Ok(())
}

#[tokio::test]
async fn source_failure_still_surfaces_identity() -> std::result::Result<(), Box<dyn std::error::Error>>
{
    let roster = write_roster()?;

    let result = get_player_stats(roster.path(), &FailingSource, "Virat Kohli").await;
    let profile = result.player_stats.expect("identity should survive a stats failure");

    assert_eq!(profile.name, "Virat Kohli");
    assert_eq!(profile.role, "Batsman");
    // Statistics fall back to an all-placeholder record.
    assert_eq!(profile.batting_stats["odi"].runs, "N/A");
    assert_eq!(profile.bowling_stats["t20i"].wickets, "N/A");
    // The summary explains that statistics could not be fetched.
    assert!(result.summary.contains("could not be fetched"));
    assert!(result.summary.contains("Virat Kohli"));

    Ok(())
}

#[tokio::test]
async fn unknown_player_terminates_with_not_found() -> std::result::Result<(), Box<dyn std::error::Error>>
{
    let roster = write_roster()?;

    let result = get_player_stats(roster.path(), &ConflictingSource, "Kane Williamson").await;
    assert!(result.player_stats.is_none());
    assert!(result.summary.contains("Kane Williamson"));

    Ok(())
}

#[tokio::test]
async fn unreadable_roster_downgrades_to_summary() {
    let result = get_player_stats(
        std::path::Path::new("/nonexistent/roster.csv"),
        &ConflictingSource,
        "Virat Kohli",
    )
    .await;

    assert!(result.player_stats.is_none());
    assert!(!result.summary.is_empty());
}

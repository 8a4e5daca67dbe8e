pub mod parse;
pub mod search;

use reqwest::Client;

pub use parse::{ProfileSelectors, ScrapedProfile};

use crate::error::Result;

/// Search for the player's profile page, fetch it, and extract their
/// per-format statistics. Best effort, single attempt, no retry.
///
/// # Errors
///
/// Each stage surfaces its own failure: no candidate URL from the search, a
/// non-2xx or network failure on the page fetch, or a parse error when the
/// expected page markers are gone.
pub async fn scrape_player_stats(player_name: &str) -> Result<ScrapedProfile> {
    let client = Client::new();
    let profile_url = search::find_profile_url(&client, player_name).await?;

    let body = client
        .get(&profile_url)
        .send()
        .await?
        .error_for_status()?
        .text()
        .await?;

    parse::parse_profile(&body, &ProfileSelectors::default())
}

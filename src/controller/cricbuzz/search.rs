use reqwest::Client;
use scraper::{Html, Selector};

use crate::error::{CricError, Result};

const SEARCH_URL: &str = "https://html.duckduckgo.com/html/";
/// Only links into the stats site's profile section are candidates.
pub const PROFILE_URL_MARKER: &str = "cricbuzz.com/profiles/";

/// Run a web search for the player and return the first result that points at
/// a stats-site profile page.
///
/// # Errors
///
/// Returns `NoSearchResult` when no result links into the profile section,
/// and a network error when the search itself fails.
pub async fn find_profile_url(client: &Client, player_name: &str) -> Result<String> {
    let query = format!("{player_name} cricbuzz");
    let resp = client
        .get(SEARCH_URL)
        .query(&[("q", query.as_str())])
        .send()
        .await?
        .error_for_status()?;
    let html = resp.text().await?;

    first_profile_link(&html).ok_or_else(|| CricError::NoSearchResult(player_name.to_string()))
}

pub(crate) fn first_profile_link(html: &str) -> Option<String> {
    let doc = Html::parse_document(html);
    let anchor = Selector::parse("a[href]").ok()?;
    doc.select(&anchor)
        .filter_map(|a| a.value().attr("href"))
        .filter_map(resolve_result_href)
        .find(|url| url.contains(PROFILE_URL_MARKER))
}

/// The search engine wraps hits in a redirect of the form
/// `//duckduckgo.com/l/?uddg=<percent-encoded url>&...`; unwrap those, pass
/// direct links through.
fn resolve_result_href(href: &str) -> Option<String> {
    if let Some(idx) = href.find("uddg=") {
        let tail = &href[idx + "uddg=".len()..];
        let encoded = tail.split('&').next().unwrap_or(tail);
        return percent_decode(encoded);
    }
    if href.starts_with("http") {
        return Some(href.to_string());
    }
    None
}

fn percent_decode(input: &str) -> Option<String> {
    let bytes = input.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'%' => {
                let hex = bytes.get(i + 1..i + 3)?;
                let hex = std::str::from_utf8(hex).ok()?;
                out.push(u8::from_str_radix(hex, 16).ok()?);
                i += 3;
            }
            b'+' => {
                out.push(b' ');
                i += 1;
            }
            b => {
                out.push(b);
                i += 1;
            }
        }
    }
    String::from_utf8(out).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unwraps_redirect_links() {
        let html = r#"<html><body>
            <a class="result__a" href="//duckduckgo.com/l/?uddg=https%3A%2F%2Fwww.cricbuzz.com%2Fprofiles%2F1413%2Fvirat-kohli&rut=abc">Virat Kohli</a>
        </body></html>"#;
        assert_eq!(
            first_profile_link(html).as_deref(),
            Some("https://www.cricbuzz.com/profiles/1413/virat-kohli")
        );
    }

    #[test]
    fn skips_non_profile_links() {
        let html = r#"<html><body>
            <a href="https://www.cricbuzz.com/cricket-news/latest">news</a>
            <a href="https://en.wikipedia.org/wiki/Virat_Kohli">wiki</a>
            <a href="https://www.cricbuzz.com/profiles/1413/virat-kohli">profile</a>
        </body></html>"#;
        assert_eq!(
            first_profile_link(html).as_deref(),
            Some("https://www.cricbuzz.com/profiles/1413/virat-kohli")
        );
    }

    #[test]
    fn no_candidate_yields_none() {
        let html = "<html><body><a href=\"https://example.com\">x</a></body></html>";
        assert!(first_profile_link(html).is_none());
    }
}

use std::path::Path;

use crate::error::Result;
use crate::model::{NOT_APPLICABLE, PlayerIdentity};

/// Look a player up in the local roster file.
///
/// The file is re-read on every call; there is no cross-request state. A row
/// matches when its `fullname` contains every whitespace-separated token of
/// the query, case-insensitively, in any order. The first match wins.
///
/// # Errors
///
/// Returns `Err` only when the backing file cannot be read. "No match" is
/// `Ok(None)`.
pub async fn find_player(data_file: &Path, query: &str) -> Result<Option<PlayerIdentity>> {
    let raw = tokio::fs::read_to_string(data_file).await?;
    Ok(find_in_rows(&raw, query))
}

pub(crate) fn find_in_rows(raw: &str, query: &str) -> Option<PlayerIdentity> {
    let mut lines = raw.trim().lines();
    let headers = split_row(lines.next()?);

    let terms: Vec<String> = query
        .to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect();
    if terms.is_empty() {
        return None;
    }

    for line in lines {
        let values = split_row(line);
        let Some(full_name) = column(&headers, &values, "fullname") else {
            continue;
        };
        if full_name.is_empty() {
            continue;
        }
        let lowered = full_name.to_lowercase();
        if terms.iter().all(|term| lowered.contains(term.as_str())) {
            return Some(identity_from_row(&headers, &values, full_name));
        }
    }
    None
}

fn identity_from_row(headers: &[String], values: &[String], full_name: &str) -> PlayerIdentity {
    // The roster file is not guaranteed to carry a country column.
    let country = column(headers, values, "country")
        .filter(|v| !v.is_empty())
        .unwrap_or(NOT_APPLICABLE)
        .to_string();
    let role = column(headers, values, "position")
        .filter(|v| !v.is_empty())
        .unwrap_or(NOT_APPLICABLE)
        .to_string();
    let image = column(headers, values, "image_path")
        .filter(|v| !v.is_empty())
        .map(str::to_string);

    PlayerIdentity {
        name: full_name.to_string(),
        country,
        image,
        role,
    }
}

fn column<'a>(headers: &[String], values: &'a [String], name: &str) -> Option<&'a str> {
    let idx = headers.iter().position(|h| h == name)?;
    values.get(idx).map(String::as_str)
}

fn split_row(line: &str) -> Vec<String> {
    line.replace('"', "")
        .split(',')
        .map(|v| v.trim().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROSTER: &str = "\
\"fullname\",\"position\",\"image_path\",\"country\"
Virat Kohli,Batsman,https://cdn.example.com/kohli.png,India
Jasprit Bumrah,Bowler,,India
Ben Stokes,Allrounder,https://cdn.example.com/stokes.png,
";

    #[test]
    fn token_order_is_irrelevant() {
        let hit = find_in_rows(ROSTER, "kohli virat").unwrap();
        assert_eq!(hit.name, "Virat Kohli");
        assert_eq!(hit.role, "Batsman");
        assert_eq!(hit.country, "India");
    }

    #[test]
    fn partial_tokens_match_case_insensitively() {
        let hit = find_in_rows(ROSTER, "BUMR").unwrap();
        assert_eq!(hit.name, "Jasprit Bumrah");
        assert_eq!(hit.image, None);
    }

    #[test]
    fn empty_country_column_maps_to_sentinel() {
        let hit = find_in_rows(ROSTER, "stokes").unwrap();
        assert_eq!(hit.country, NOT_APPLICABLE);
        assert_eq!(
            hit.image.as_deref(),
            Some("https://cdn.example.com/stokes.png")
        );
    }

    #[test]
    fn no_match_and_blank_query_yield_none() {
        assert!(find_in_rows(ROSTER, "Steve Smith").is_none());
        assert!(find_in_rows(ROSTER, "   ").is_none());
    }
}

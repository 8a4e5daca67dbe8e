use scraper::{ElementRef, Html, Selector};
use std::collections::BTreeMap;

use crate::error::{CricError, Result};
use crate::model::{BattingFigures, BowlingFigures, UNAVAILABLE};

/// Every CSS selector and column offset the profile-page parser relies on.
///
/// The page structure is hardcoded upstream with no versioning; keeping all
/// of it in one struct means adapting to markup drift touches one place.
#[derive(Clone, Debug)]
pub struct ProfileSelectors {
    pub name: &'static str,
    pub country: &'static str,
    pub info_label: &'static str,
    pub stats_table: &'static str,
    pub row: &'static str,
    pub cell: &'static str,
    pub batting: BattingColumns,
    pub bowling: BowlingColumns,
}

/// Fixed column offsets within a batting-table row.
#[derive(Clone, Copy, Debug)]
pub struct BattingColumns {
    pub format: usize,
    pub matches: usize,
    pub runs: usize,
    pub highest_score: usize,
    pub average: usize,
    pub strike_rate: usize,
    pub hundreds: usize,
    pub fifties: usize,
}

/// Fixed column offsets within a bowling-table row.
#[derive(Clone, Copy, Debug)]
pub struct BowlingColumns {
    pub format: usize,
    pub matches: usize,
    pub balls: usize,
    pub runs: usize,
    pub wickets: usize,
    pub best_innings: usize,
    pub economy: usize,
    pub five_wickets: usize,
}

impl Default for ProfileSelectors {
    fn default() -> Self {
        Self {
            name: "#playerProfile h1.cb-font-40",
            country: "#playerProfile h3.cb-font-18.text-gray",
            info_label: "div.cb-plyr-prfl-lbl",
            stats_table: "div.cb-plyr-tbl table",
            row: "tbody tr",
            cell: "td",
            batting: BattingColumns {
                format: 0,
                matches: 1,
                runs: 4,
                highest_score: 5,
                average: 6,
                strike_rate: 8,
                hundreds: 9,
                fifties: 11,
            },
            bowling: BowlingColumns {
                format: 0,
                matches: 1,
                balls: 3,
                runs: 4,
                wickets: 5,
                best_innings: 6,
                economy: 8,
                five_wickets: 11,
            },
        }
    }
}

/// What the scrape produced before identity merging.
#[derive(Clone, Debug)]
pub struct ScrapedProfile {
    pub name: String,
    pub country: String,
    pub role: String,
    pub batting: BTreeMap<String, BattingFigures>,
    pub bowling: BTreeMap<String, BowlingFigures>,
}

/// Extract a player profile from a stats-site profile page.
///
/// # Errors
///
/// Returns a parse error when the expected name heading is absent, which
/// signals a site layout change.
pub fn parse_profile(html: &str, selectors: &ProfileSelectors) -> Result<ScrapedProfile> {
    let doc = Html::parse_document(html);

    let name = select_text(&doc, selectors.name)?;
    if name.is_empty() {
        return Err(CricError::Parse(
            "profile page is missing the player name heading; the site layout may have changed"
                .to_string(),
        ));
    }

    let country = non_empty_or(select_text(&doc, selectors.country)?, UNAVAILABLE);
    let role = non_empty_or(labelled_value(&doc, selectors.info_label, "Role")?, UNAVAILABLE);

    let tables: Vec<ElementRef<'_>> = doc.select(&compile(selectors.stats_table)?).collect();
    let row_sel = compile(selectors.row)?;
    let cell_sel = compile(selectors.cell)?;

    let mut batting = BTreeMap::new();
    if let Some(table) = tables.first() {
        for row in table.select(&row_sel) {
            let cells: Vec<ElementRef<'_>> = row.select(&cell_sel).collect();
            let format = cell_text(&cells, selectors.batting.format);
            if format == UNAVAILABLE {
                continue;
            }
            batting.insert(
                format.to_lowercase(),
                BattingFigures {
                    matches: cell_text(&cells, selectors.batting.matches),
                    runs: cell_text(&cells, selectors.batting.runs),
                    highest_score: cell_text(&cells, selectors.batting.highest_score),
                    average: cell_text(&cells, selectors.batting.average),
                    strike_rate: cell_text(&cells, selectors.batting.strike_rate),
                    hundreds: cell_text(&cells, selectors.batting.hundreds),
                    fifties: cell_text(&cells, selectors.batting.fifties),
                },
            );
        }
    }

    let mut bowling = BTreeMap::new();
    if let Some(table) = tables.get(1) {
        for row in table.select(&row_sel) {
            let cells: Vec<ElementRef<'_>> = row.select(&cell_sel).collect();
            let format = cell_text(&cells, selectors.bowling.format);
            if format == UNAVAILABLE {
                continue;
            }
            bowling.insert(
                format.to_lowercase(),
                BowlingFigures {
                    matches: cell_text(&cells, selectors.bowling.matches),
                    balls: cell_text(&cells, selectors.bowling.balls),
                    runs: cell_text(&cells, selectors.bowling.runs),
                    wickets: cell_text(&cells, selectors.bowling.wickets),
                    best_bowling_innings: cell_text(&cells, selectors.bowling.best_innings),
                    economy: cell_text(&cells, selectors.bowling.economy),
                    five_wickets: cell_text(&cells, selectors.bowling.five_wickets),
                },
            );
        }
    }

    Ok(ScrapedProfile {
        name,
        country,
        role,
        batting,
        bowling,
    })
}

fn compile(selector: &str) -> Result<Selector> {
    Selector::parse(selector).map_err(|e| CricError::Parse(format!("bad selector: {e}")))
}

fn select_text(doc: &Html, selector: &str) -> Result<String> {
    let sel = compile(selector)?;
    Ok(doc
        .select(&sel)
        .next()
        .map(|el| el.text().collect::<String>().trim().to_string())
        .unwrap_or_default())
}

/// Find the element matching `label_selector` whose text equals `label`, and
/// return the text of its next sibling element.
fn labelled_value(doc: &Html, label_selector: &str, label: &str) -> Result<String> {
    let sel = compile(label_selector)?;
    for el in doc.select(&sel) {
        let text = el.text().collect::<String>();
        if text.trim() == label {
            if let Some(value) = el.next_siblings().find_map(ElementRef::wrap) {
                return Ok(value.text().collect::<String>().trim().to_string());
            }
        }
    }
    Ok(String::new())
}

fn cell_text(cells: &[ElementRef<'_>], idx: usize) -> String {
    cells
        .get(idx)
        .map(|c| c.text().collect::<String>().trim().to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| UNAVAILABLE.to_string())
}

fn non_empty_or(value: String, fallback: &str) -> String {
    if value.is_empty() {
        fallback.to_string()
    } else {
        value
    }
}

use maud::{Markup, html};

pub const DEFAULT_INDEX_TITLE: &str = "CricStats";

#[must_use]
pub fn render_index_template(title: &str) -> Markup {
    html! {
        (maud::DOCTYPE)
        head {
            meta charset="UTF-8";
            meta name="viewport" content="width=device-width, initial-scale=1.0";
            title { (title) }
        }
        body {
            h1 { (title) }
            p { "Search cricket player careers, browse live scores, the match calendar, news and highlights." }
            ul {
                li { a href="/news" { "Latest news" } }
                li { a href="/scores" { "Live scores" } }
                li { a href="/videos" { "Video highlights" } }
            }
        }
    }
}

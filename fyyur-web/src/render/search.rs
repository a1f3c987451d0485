//! Search result pages

use axum::response::Html;
use fyyur_common::listing::SearchResults;

use super::{escape, layout};

/// Which collection was searched
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Venues,
    Artists,
}

impl Target {
    fn path(self) -> &'static str {
        match self {
            Target::Venues => "/venues",
            Target::Artists => "/artists",
        }
    }

    fn title(self) -> &'static str {
        match self {
            Target::Venues => "Venue Search",
            Target::Artists => "Artist Search",
        }
    }
}

pub fn results(target: Target, term: &str, results: &SearchResults) -> Html<String> {
    let items: String = results
        .data
        .iter()
        .map(|hit| {
            format!(
                r#"<li><a href="{}/{}">{}</a> <span class="num-upcoming-shows">{}</span></li>
"#,
                target.path(),
                hit.id,
                escape(&hit.name),
                hit.num_upcoming_shows
            )
        })
        .collect();

    let body = format!(
        r#"<h1>Number of search results for "{term}": <span class="result-count">{count}</span></h1>
<ul class="items">
{items}</ul>
"#,
        term = escape(term),
        count = results.count,
        items = items,
    );

    layout(target.title(), None, &body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use fyyur_common::listing::SearchHit;

    #[test]
    fn test_results_escape_term_and_link_hits() {
        let Html(page) = results(
            Target::Artists,
            "<a>",
            &SearchResults {
                count: 1,
                data: vec![SearchHit {
                    id: 5,
                    name: "Matt Quevedo".to_string(),
                    num_upcoming_shows: 1,
                }],
            },
        );

        assert!(page.contains("results for \"&lt;a&gt;\":"));
        assert!(page.contains(r#"<span class="result-count">1</span>"#));
        assert!(page.contains(r#"<a href="/artists/5">Matt Quevedo</a>"#));
    }
}

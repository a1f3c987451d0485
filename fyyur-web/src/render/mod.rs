//! HTML rendering
//!
//! Pages are built with `format!` around a shared layout. Every value that
//! comes from the database or a form passes through [`escape`].

use axum::response::Html;

pub mod artists;
pub mod errors;
pub mod forms;
pub mod home;
pub mod search;
pub mod shows;
pub mod venues;

const STYLE: &str = r#"
    * { box-sizing: border-box; }
    body {
        font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif;
        margin: 0;
        background-color: #f7f7f7;
        color: #222;
        line-height: 1.5;
    }
    header {
        background-color: #2a2a2a;
        padding: 12px 20px;
        display: flex;
        flex-wrap: wrap;
        align-items: center;
        gap: 16px;
    }
    header a { color: #fff; text-decoration: none; font-weight: 600; }
    header .brand { font-size: 22px; color: #4a9eff; margin-right: 12px; }
    header form { margin: 0; }
    header input[type=search] { padding: 4px 8px; border-radius: 4px; border: none; }
    main { padding: 20px; max-width: 960px; margin: 0 auto; }
    h1, h2 { color: #2a6ebf; }
    .flash { padding: 10px 14px; border-radius: 4px; margin-bottom: 16px; }
    .flash-success { background: #d1fae5; border: 1px solid #10b981; }
    .flash-error { background: #fee2e2; border: 1px solid #ef4444; }
    .items { list-style: none; padding: 0; }
    .items li { background: #fff; margin: 6px 0; padding: 8px 12px; border-radius: 4px; }
    .genre { display: inline-block; background: #e0ecff; padding: 1px 8px; margin: 0 4px 4px 0; border-radius: 10px; font-size: 13px; }
    .show-card { display: inline-block; background: #fff; width: 220px; margin: 6px; padding: 8px; border-radius: 4px; vertical-align: top; }
    .show-card img { width: 100%; }
    .profile img { max-width: 320px; }
    .seeking { background: #fff7d6; padding: 8px 12px; border-radius: 4px; }
    .not-seeking { color: #888; }
    label { display: block; margin-top: 10px; font-weight: 600; }
    input[type=text], input[type=tel], input[type=url], select, textarea { width: 100%; padding: 6px; }
    button { margin-top: 16px; padding: 8px 20px; background: #4a9eff; color: #fff; border: none; border-radius: 4px; }
"#;

/// Escape text for HTML element content and quoted attribute values
pub fn escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Escaped optional column, empty when NULL
pub fn text(value: &Option<String>) -> String {
    value.as_deref().map(escape).unwrap_or_default()
}

/// Comma-separated genres as tags
pub fn genre_tags(genres: &Option<String>) -> String {
    genres
        .as_deref()
        .unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|g| !g.is_empty())
        .map(|g| format!(r#"<span class="genre">{}</span>"#, escape(g)))
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlashKind {
    Success,
    Error,
}

/// One-shot status message shown above the page body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flash {
    pub kind: FlashKind,
    pub message: String,
}

impl Flash {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: FlashKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: FlashKind::Error,
            message: message.into(),
        }
    }

    fn render(&self) -> String {
        let class = match self.kind {
            FlashKind::Success => "flash-success",
            FlashKind::Error => "flash-error",
        };
        format!(
            r#"<div class="flash {}" role="alert">{}</div>"#,
            class,
            escape(&self.message)
        )
    }
}

/// Wrap page content in the shared layout
pub fn layout(title: &str, flash: Option<&Flash>, body: &str) -> Html<String> {
    Html(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title} | Fyyur</title>
    <style>{style}</style>
</head>
<body>
<header>
    <a class="brand" href="/">Fyyur</a>
    <a href="/venues">Venues</a>
    <a href="/artists">Artists</a>
    <a href="/shows">Shows</a>
    <form method="post" action="/venues/search">
        <input type="search" name="search_term" placeholder="Find a venue" aria-label="Search venues">
    </form>
    <form method="post" action="/artists/search">
        <input type="search" name="search_term" placeholder="Find an artist" aria-label="Search artists">
    </form>
</header>
<main>
{flash}
{body}
</main>
</body>
</html>
"#,
        title = escape(title),
        style = STYLE,
        flash = flash.map(Flash::render).unwrap_or_default(),
        body = body,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_markup() {
        assert_eq!(
            escape(r#"<script>alert("x & 'y'")</script>"#),
            "&lt;script&gt;alert(&quot;x &amp; &#x27;y&#x27;&quot;)&lt;/script&gt;"
        );
    }

    #[test]
    fn test_text_null_is_empty() {
        assert_eq!(text(&None), "");
        assert_eq!(text(&Some("R&B".to_string())), "R&amp;B");
    }

    #[test]
    fn test_genre_tags_skip_blanks() {
        let html = genre_tags(&Some("Jazz, ,Rock n Roll".to_string()));
        assert_eq!(
            html,
            r#"<span class="genre">Jazz</span><span class="genre">Rock n Roll</span>"#
        );
        assert_eq!(genre_tags(&None), "");
    }

    #[test]
    fn test_layout_renders_escaped_flash() {
        let Html(page) = layout("Home", Some(&Flash::error("Venue <b> failed")), "<p>hi</p>");
        assert!(page.contains(r#"<div class="flash flash-error" role="alert">Venue &lt;b&gt; failed</div>"#));
        assert!(page.contains("<p>hi</p>"));
    }
}

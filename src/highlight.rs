use std::sync::LazyLock;

use pulldown_cmark::{CodeBlockKind, CowStr, Event, Tag, TagEnd};
use syntect::highlighting::{Theme, ThemeSet};
use syntect::html::highlighted_html_for_string;
use syntect::parsing::SyntaxSet;

const THEME_NAME: &str = "base16-ocean.dark";

static SYNTAXES: LazyLock<SyntaxSet> = LazyLock::new(SyntaxSet::load_defaults_newlines);
static THEME: LazyLock<Theme> = LazyLock::new(|| {
    let mut themes = ThemeSet::load_defaults().themes;
    themes.remove(THEME_NAME).unwrap_or_default()
});

/// Replace fenced code blocks in a pulldown-cmark event stream with
/// pre-highlighted HTML.
///
/// Blocks whose language is unknown fall back to plain text; blocks that
/// fail to highlight are emitted as escaped `<pre><code>`.
pub fn highlight<'a, It>(events: It) -> impl Iterator<Item = Event<'a>>
where
    It: Iterator<Item = Event<'a>>,
{
    let mut code: Option<(String, String)> = None;
    let mut out = Vec::new();

    for event in events {
        match event {
            Event::Start(Tag::CodeBlock(kind)) => {
                let lang = match kind {
                    CodeBlockKind::Fenced(lang) => lang.to_string(),
                    CodeBlockKind::Indented => String::new(),
                };
                code = Some((lang, String::new()));
            }
            Event::End(TagEnd::CodeBlock) => {
                if let Some((lang, src)) = code.take() {
                    out.push(Event::Html(CowStr::from(render_block(&lang, &src))));
                }
            }
            Event::Text(t) => match code.as_mut() {
                Some((_, src)) => src.push_str(&t),
                None => out.push(Event::Text(t)),
            },
            e => out.push(e),
        }
    }

    out.into_iter()
}

fn render_block(lang: &str, src: &str) -> String {
    let syntax = SYNTAXES
        .find_syntax_by_token(lang)
        .unwrap_or_else(|| SYNTAXES.find_syntax_plain_text());
    highlighted_html_for_string(src, &SYNTAXES, syntax, &THEME).unwrap_or_else(|_| {
        let escaped = src
            .replace('&', "&amp;")
            .replace('<', "&lt;")
            .replace('>', "&gt;");
        format!("<pre><code>{escaped}</code></pre>")
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pulldown_cmark::Parser;

    fn render(md: &str) -> String {
        let mut html = String::new();
        pulldown_cmark::html::push_html(&mut html, highlight(Parser::new(md)));
        html
    }

    #[test]
    fn test_code_block_is_highlighted() {
        let html = render("```rust\nfn main() {}\n```\n");
        assert!(html.contains("<pre style="));
        assert!(html.contains("main"));
    }

    #[test]
    fn test_unknown_language_still_renders() {
        let html = render("```nope\n<tag>\n```\n");
        assert!(html.contains("&lt;tag&gt;"));
    }

    #[test]
    fn test_plain_text_untouched() {
        let html = render("just *words*");
        assert_eq!(html, "<p>just <em>words</em></p>\n");
    }
}

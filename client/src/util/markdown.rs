//! Blog post body rendering.

#[cfg(test)]
#[path = "markdown_test.rs"]
mod markdown_test;

use pulldown_cmark::{Options, Parser, html};

/// Render a post body to HTML.
///
/// Bodies are authored in the back-office as Markdown or HTML; embedded HTML
/// passes through unchanged.
pub fn render_post_html(body: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);

    let mut out = String::new();
    html::push_html(&mut out, Parser::new_ext(body, options));
    out
}

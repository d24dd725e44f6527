use super::*;

#[test]
fn markdown_headings_and_lists_render() {
    let html = render_post_html("## Plan\n\n- Dig\n- Pour\n");
    assert!(html.contains("<h2>Plan</h2>"));
    assert!(html.contains("<li>Dig</li>"));
}

#[test]
fn embedded_html_passes_through() {
    let html = render_post_html("<p class=\"lead\">Hello</p>\n");
    assert!(html.contains("<p class=\"lead\">Hello</p>"));
}

use super::*;

#[test]
fn markdown_renders_emphasis_and_lists() {
    let html = render_markdown_html("We offer **branding**:\n\n- logos\n- reels\n");
    assert!(html.contains("<strong>branding</strong>"));
    assert!(html.contains("<li>logos</li>"));
    assert!(html.contains("<li>reels</li>"));
}

#[test]
fn markdown_drops_raw_html_blocks() {
    let html = render_markdown_html("<script>alert(1)</script>\n\nhello");
    assert!(!html.contains("<script>"));
    assert!(html.contains("<p>hello</p>"));
}

#[test]
fn markdown_drops_inline_html() {
    let html = render_markdown_html("click <img src=x onerror=alert(1)> here");
    assert!(!html.contains("<img"));
    assert!(html.contains("click"));
}

#[test]
fn markdown_escapes_plain_text() {
    let html = render_markdown_html("price < 100 & fast");
    assert!(html.contains("&lt;"));
    assert!(html.contains("&amp;"));
}

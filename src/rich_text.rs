//! Plain-text extraction from cell markup.
//!
//! Cells store serialized rich-text markup; comparisons (sorting) operate on
//! the plain content a user sees, with tags stripped and the common entities
//! decoded.

/// Strip markup tags and decode basic entities.
pub fn plain_text(markup: &str) -> String {
    let mut text = String::with_capacity(markup.len());
    let mut in_tag = false;
    for ch in markup.chars() {
        match ch {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            _ if in_tag => {}
            _ => text.push(ch),
        }
    }
    if text.contains('&') {
        text = text
            .replace("&nbsp;", " ")
            .replace("&lt;", "<")
            .replace("&gt;", ">")
            .replace("&quot;", "\"")
            .replace("&amp;", "&");
    }
    text
}

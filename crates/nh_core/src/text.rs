use scraper::Html;

/// Strip markup from a raw feed summary or page snippet. Malformed input is
/// handled by the HTML parser's error recovery, so this never fails.
pub fn strip_tags(html: &str) -> String {
    let fragment = Html::parse_fragment(html);
    fragment.root_element().text().collect::<String>()
}

/// Collapse interior whitespace (including newlines) to single spaces and
/// trim the ends.
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Tag-strip then whitespace-collapse.
pub fn normalize(html: &str) -> String {
    collapse_whitespace(&strip_tags(html))
}

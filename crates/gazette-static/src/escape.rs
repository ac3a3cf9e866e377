//! HTML text escaping.

/// Escape `&`, `<` and `>` in text destined for HTML element content.
///
/// Quotes are left as-is; the output is not meant for attribute values.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());

    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }

    out
}

/// Trims surrounding whitespace, truncates to at most `max_chars` characters
/// and escapes HTML metacharacters.
///
/// Escaping runs after truncation, so the returned string can be longer than
/// `max_chars`.
pub fn sanitize(input: Option<&str>, max_chars: usize) -> String {
    let trimmed = input.unwrap_or_default().trim();
    let truncated = match trimmed.char_indices().nth(max_chars) {
        Some((idx, _)) => &trimmed[..idx],
        None => trimmed,
    };
    escape_html(truncated)
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#039;"),
            c => escaped.push(c),
        }
    }
    escaped
}

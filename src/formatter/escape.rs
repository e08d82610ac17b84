//! Reserved-character escaping for text placed between tags

use std::borrow::Cow;

/// Entity for a reserved character, if it is one
fn entity(ch: char) -> Option<&'static str> {
    match ch {
        '<' => Some("&lt;"),
        '>' => Some("&gt;"),
        '&' => Some("&amp;"),
        '"' => Some("&quot;"),
        '\'' => Some("&apos;"),
        _ => None,
    }
}

/// Escape `<`, `>`, `&`, `"` and `'` character by character.
///
/// Text without reserved characters is returned borrowed. Escaping is not
/// idempotent: `&lt;` becomes `&amp;lt;`.
pub fn escape_html(text: &str) -> Cow<'_, str> {
    let Some(first) = text.find(|c| entity(c).is_some()) else {
        return Cow::Borrowed(text);
    };

    let mut escaped = String::with_capacity(text.len() + 8);
    escaped.push_str(&text[..first]);
    for ch in text[first..].chars() {
        match entity(ch) {
            Some(replacement) => escaped.push_str(replacement),
            None => escaped.push(ch),
        }
    }
    Cow::Owned(escaped)
}

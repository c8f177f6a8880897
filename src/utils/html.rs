//! HTML escaping for rendered meta tags and summaries.
//!
//! - `escape_attr()` - attribute-safe entity escaping
//! - `unescape()` - decode entities when flattening HTML to plain text

use std::borrow::Cow;

/// Characters that require HTML escaping.
const ESCAPE_CHARS: [char; 5] = ['<', '>', '&', '"', '\''];

/// Get the HTML entity for a special character.
#[inline]
fn escape_char(c: char) -> Option<&'static str> {
    match c {
        '<' => Some("&lt;"),
        '>' => Some("&gt;"),
        '&' => Some("&amp;"),
        '"' => Some("&quot;"),
        '\'' => Some("&#39;"),
        _ => None,
    }
}

/// Escape HTML attribute values.
///
/// Uses `Cow` to avoid allocation when no escaping is needed.
///
/// # Example
/// ```ignore
/// assert_eq!(escape_attr("a\"b"), "a&quot;b");
/// assert_eq!(escape_attr("hello"), "hello"); // No allocation
/// ```
pub fn escape_attr(s: &str) -> Cow<'_, str> {
    if !s.contains(ESCAPE_CHARS) {
        return Cow::Borrowed(s);
    }

    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match escape_char(c) {
            Some(entity) => result.push_str(entity),
            None => result.push(c),
        }
    }
    Cow::Owned(result)
}

/// Unescape HTML entities back to characters.
///
/// Handles common named entities and numeric character references.
pub fn unescape(s: &str) -> Cow<'_, str> {
    if !s.contains('&') {
        return Cow::Borrowed(s);
    }

    let mut result = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '&' {
            result.push(c);
            continue;
        }

        // Collect entity; only `&name;` and `&#NN;` forms are decoded
        let mut entity = String::new();
        let mut terminated = false;
        while let Some(&next) = chars.peek() {
            if next == ';' {
                chars.next();
                terminated = true;
                break;
            }
            if !(next.is_ascii_alphanumeric() || next == '#') || entity.len() > 10 {
                break;
            }
            entity.push(next);
            chars.next();
        }

        if !terminated {
            result.push('&');
            result.push_str(&entity);
            continue;
        }

        let decoded = match entity.as_str() {
            "lt" => Some('<'),
            "gt" => Some('>'),
            "amp" => Some('&'),
            "quot" => Some('"'),
            "apos" => Some('\''),
            "nbsp" => Some('\u{00A0}'),
            s if s.starts_with("#x") || s.starts_with("#X") => {
                u32::from_str_radix(&s[2..], 16).ok().and_then(char::from_u32)
            }
            s if s.starts_with('#') => s[1..].parse::<u32>().ok().and_then(char::from_u32),
            _ => None,
        };

        match decoded {
            Some(c) => result.push(c),
            None => {
                result.push('&');
                result.push_str(&entity);
                result.push(';');
            }
        }
    }

    Cow::Owned(result)
}

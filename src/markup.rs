//! Just enough markup handling for the SVG font documents we rewrite:
//! attribute lookup inside a single tag, and attribute-safe escaping.

use regex::Regex;
use std::sync::LazyLock;

/// Characters below this code point are always written as numeric references.
pub const NUMERIC_ESCAPE_BELOW: u32 = 0x30;

static ATTRIBUTE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    // Expected format: name="value", double quotes only
    #[allow(clippy::unwrap_used)] // Safe because the regex is valid
    Regex::new(r#"(?P<name>[\w:.-]+)\s*=\s*"(?P<value>[^"]*)""#).unwrap()
});

/// Find the value of `name` among the attributes of `tag`.
///
/// Attribute names are matched whole, so asking for `d` never picks up the
/// tail of an `id` attribute.
pub fn attribute<'a>(tag: &'a str, name: &str) -> Option<&'a str> {
    ATTRIBUTE_REGEX
        .captures_iter(tag)
        .find(|caps| &caps["name"] == name)
        .and_then(|caps| caps.name("value"))
        .map(|m| m.as_str())
}

/// Escape text for use inside a double-quoted attribute.
pub fn escape_text(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Escape a single character: numeric reference for low code points
/// (space and most ASCII punctuation), plain text escaping otherwise.
pub fn escape_char(c: char) -> String {
    if (c as u32) < NUMERIC_ESCAPE_BELOW {
        format!("&#x{:X};", c as u32)
    } else {
        let mut buf = [0u8; 4];
        escape_text(c.encode_utf8(&mut buf))
    }
}

/// Escape each character and join them with commas, as used by the
/// `u1`/`u2` lists of a kerning pair.
pub fn escape_char_list(chars: impl IntoIterator<Item = char>) -> String {
    chars
        .into_iter()
        .map(escape_char)
        .collect::<Vec<_>>()
        .join(",")
}

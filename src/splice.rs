use regex::Regex;
use std::sync::LazyLock;

use crate::SegfontError;

const FONT_END: &str = "</font>";

static GENERATED_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::unwrap_used)] // Safe because the regex is valid
    Regex::new(r"<(?:glyph|hkern)\b[^>]*>").unwrap()
});

static BLANK_LINES_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::unwrap_used)] // Safe because the regex is valid
    Regex::new(r"\n\s*\n").unwrap()
});

/// Drop all `<glyph>` and `<hkern>` elements, and the blank lines they leave.
pub fn remove_generated(data: &str) -> String {
    let stripped = GENERATED_REGEX.replace_all(data, "");
    BLANK_LINES_REGEX.replace_all(&stripped, "\n").into_owned()
}

/// Put `markup` (whole lines) in front of the closing font tag.
///
/// If the tag sits on its own line the markup goes above that line, keeping
/// the tag's indentation; otherwise the tag is moved to a new line.
pub fn insert_before_font_end(data: &str, markup: &str) -> Result<String, SegfontError> {
    let end = data
        .find(FONT_END)
        .ok_or_else(|| SegfontError::MissingElement {
            element: FONT_END.to_string(),
        })?;
    let line_start = data[..end].rfind('\n').map_or(0, |i| i + 1);
    let mut result = String::with_capacity(data.len() + markup.len() + 1);
    if data[line_start..end].trim().is_empty() {
        result.push_str(&data[..line_start]);
        result.push_str(markup);
        result.push_str(&data[line_start..]);
    } else {
        result.push_str(&data[..end]);
        result.push('\n');
        result.push_str(markup);
        result.push_str(&data[end..]);
    }
    Ok(result)
}

/// Replace whatever was generated before with `markup`.
pub fn replace_font(data: &str, markup: &str) -> Result<String, SegfontError> {
    insert_before_font_end(&remove_generated(data), markup)
}

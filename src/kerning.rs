use regex::Regex;
use std::{fmt, sync::LazyLock};

use crate::{
    markup::{attribute, escape_char_list},
    table::SPECIAL_CHARACTERS,
    GlyphTable, SegfontError,
};

static FONT_TAG_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    // <font ...> but not <font-face ...>
    #[allow(clippy::unwrap_used)] // Safe because the regex is valid
    Regex::new(r"<font(?:\s[^>]*)?>").unwrap()
});

/// "When a character of `first` is followed by one of `second`,
/// adjust the spacing by `size`."
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KerningPair {
    pub first: Vec<char>,
    pub second: Vec<char>,
    pub size: i32,
}

impl fmt::Display for KerningPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "      <hkern u1=\"{}\" u2=\"{}\" k=\"{}\" />",
            escape_char_list(self.first.iter().copied()),
            escape_char_list(self.second.iter().copied()),
            self.size
        )
    }
}

/// Read `horiz-adv-x` from the document's `<font>` element.
pub fn advance_width(data: &str) -> Result<i32, SegfontError> {
    let font = FONT_TAG_REGEX
        .find(data)
        .ok_or_else(|| SegfontError::MissingElement {
            element: "font".to_string(),
        })?;
    let value = attribute(font.as_str(), "horiz-adv-x")
        .ok_or_else(|| SegfontError::missing_attribute("font", "horiz-adv-x"))?;
    value
        .trim()
        .parse()
        .map_err(|_| SegfontError::BadAdvanceWidth {
            value: value.to_string(),
        })
}

/// The two pairs that fix the spacing around periods and apostrophes.
pub fn generate_kerning(table: &GlyphTable, advance: i32) -> Vec<KerningPair> {
    let characters: Vec<char> = table
        .characters()
        .filter(|c| !SPECIAL_CHARACTERS.contains(*c))
        .collect();

    let before_period = characters.iter().copied().chain(['\'']).collect();
    let after_quote = characters.iter().copied().chain([' ']).collect();
    vec![
        KerningPair {
            first: before_period,
            second: vec!['.'],
            size: advance,
        },
        KerningPair {
            first: vec!['\''],
            second: after_quote,
            size: advance,
        },
    ]
}

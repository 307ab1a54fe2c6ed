use serde::{Deserialize, Serialize};
use std::{collections::HashSet, path::Path};

use crate::SegfontError;

/// Characters whose default spacing needs kerning to look right.
pub const SPECIAL_CHARACTERS: &str = ".'# ";

/// Character, glyph name override, segments to light.
const BUILTIN: &[(char, Option<&str>, &str)] = &[
    (' ', Some("space"), ""),
    ('.', Some("period"), "r"),
    ('\'', Some("quotesingle"), "q"),
    ('#', Some("numbersign"), "abcdefghijklmnopqr"),
    ('0', Some("zero"), "abcgjnopkf"),
    ('1', Some("one"), "fgn"),
    ('2', Some("two"), "abgihjop"),
    ('3', Some("three"), "abghinop"),
    ('4', Some("four"), "chign"),
    ('5', Some("five"), "bachinpo"),
    ('6', Some("six"), "bacjopnih"),
    ('7', Some("seven"), "abgn"),
    ('8', Some("eight"), "abcghijnop"),
    ('9', Some("nine"), "ihcabgnpo"),
    ('A', None, "abcgjnhi"),
    ('B', None, "abeghilnop"),
    ('C', None, "bacjop"),
    ('D', None, "abeglnop"),
    ('E', None, "bachijop"),
    ('F', None, "bachij"),
    ('G', None, "bacjopni"),
    ('H', None, "cjhign"),
    ('I', None, "abelop"),
    ('J', None, "oleab"),
    ('K', None, "cjhfm"),
    ('L', None, "cjop"),
    ('M', None, "jcdfgn"),
    ('N', None, "jcdmng"),
    ('O', None, "abgnpojc"),
    ('P', None, "jcabgih"),
    ('Q', None, "ngbacjopm"),
    ('R', None, "higbacjm"),
    ('S', None, "badinpo"),
    ('T', None, "leab"),
    ('U', None, "cjopng"),
    ('V', None, "dmng"),
    ('W', None, "cjkmng"),
    ('X', None, "dkmf"),
    ('Y', None, "dfl"),
    ('Z', None, "abfkop"),
    ('+', None, "ehil"),
    ('-', None, "hi"),
    ('*', None, "defklm"),
    ('×', Some("multiply"), "dfkm"),
    ('/', None, "kf"),
    ('\\', None, "dm"),
    ('=', None, "hiop"),
    ('<', Some("lessthan"), "fm"),
    ('>', Some("greaterthan"), "dk"),
    ('[', None, "belp"),
    (']', None, "aelo"),
];

/// How one character is drawn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlyphDefinition {
    pub character: char,
    /// Glyph name, for characters that don't make a usable name themselves.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Segment letters, in the order their paths are concatenated.
    pub segments: String,
}

impl GlyphDefinition {
    pub fn new(character: char, name: Option<&str>, segments: &str) -> Self {
        GlyphDefinition {
            character,
            name: name.map(|n| n.to_string()),
            segments: segments.to_string(),
        }
    }

    /// The override name, or the character itself.
    pub fn glyph_name(&self) -> String {
        self.name
            .clone()
            .unwrap_or_else(|| self.character.to_string())
    }
}

/// The set of characters the font provides, in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<GlyphDefinition>", into = "Vec<GlyphDefinition>")]
pub struct GlyphTable(Vec<GlyphDefinition>);

impl GlyphTable {
    pub fn new(definitions: Vec<GlyphDefinition>) -> Result<Self, SegfontError> {
        let mut seen = HashSet::new();
        for definition in definitions.iter() {
            if !seen.insert(definition.character) {
                return Err(SegfontError::DuplicateCharacter {
                    character: definition.character,
                });
            }
        }
        Ok(GlyphTable(definitions))
    }

    /// The fourteen-segment character set: digits, capitals and a few symbols.
    pub fn builtin() -> Self {
        GlyphTable(
            BUILTIN
                .iter()
                .map(|(c, name, segments)| GlyphDefinition::new(*c, *name, segments))
                .collect(),
        )
    }

    pub fn from_json_str(json: &str) -> Result<Self, SegfontError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, SegfontError> {
        let path = path.as_ref();
        log::info!("Loading glyph table from {}", path.display());
        Self::from_json_str(&std::fs::read_to_string(path)?)
    }

    pub fn to_json(&self) -> Result<String, SegfontError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn get(&self, c: char) -> Option<&GlyphDefinition> {
        self.0.iter().find(|d| d.character == c)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, GlyphDefinition> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Characters in declaration order.
    pub fn characters(&self) -> impl Iterator<Item = char> + '_ {
        self.0.iter().map(|d| d.character)
    }

    /// Definitions sorted by code point, the order glyphs are written in.
    pub fn sorted(&self) -> Vec<&GlyphDefinition> {
        let mut sorted: Vec<_> = self.0.iter().collect();
        sorted.sort_by_key(|d| d.character);
        sorted
    }
}

impl TryFrom<Vec<GlyphDefinition>> for GlyphTable {
    type Error = SegfontError;

    fn try_from(definitions: Vec<GlyphDefinition>) -> Result<Self, Self::Error> {
        GlyphTable::new(definitions)
    }
}

impl From<GlyphTable> for Vec<GlyphDefinition> {
    fn from(table: GlyphTable) -> Self {
        table.0
    }
}

impl Default for GlyphTable {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn test_builtin_table() {
        let table = GlyphTable::builtin();
        assert_eq!(table.len(), 51);
        assert!(GlyphTable::new(table.iter().cloned().collect()).is_ok());

        let hash = table.get('#').unwrap();
        assert_eq!(hash.glyph_name(), "numbersign");
        assert_eq!(hash.segments, "abcdefghijklmnopqr");

        let q = table.get('Q').unwrap();
        assert_eq!(q.name, None);
        assert_eq!(q.glyph_name(), "Q");
        assert_eq!(q.segments, "ngbacjopm");

        assert_eq!(table.get('\u{d7}').unwrap().glyph_name(), "multiply");
        assert_eq!(table.get(' ').unwrap().segments, "");
        assert!(table.get('a').is_none());
    }

    #[rstest]
    #[case(' ', Some("space"), "")]
    #[case('.', Some("period"), "r")]
    #[case('\'', Some("quotesingle"), "q")]
    #[case('#', Some("numbersign"), "abcdefghijklmnopqr")]
    #[case('0', Some("zero"), "abcgjnopkf")]
    #[case('1', Some("one"), "fgn")]
    #[case('2', Some("two"), "abgihjop")]
    #[case('3', Some("three"), "abghinop")]
    #[case('4', Some("four"), "chign")]
    #[case('5', Some("five"), "bachinpo")]
    #[case('6', Some("six"), "bacjopnih")]
    #[case('7', Some("seven"), "abgn")]
    #[case('8', Some("eight"), "abcghijnop")]
    #[case('9', Some("nine"), "ihcabgnpo")]
    #[case('A', None, "abcgjnhi")]
    #[case('B', None, "abeghilnop")]
    #[case('C', None, "bacjop")]
    #[case('D', None, "abeglnop")]
    #[case('E', None, "bachijop")]
    #[case('F', None, "bachij")]
    #[case('G', None, "bacjopni")]
    #[case('H', None, "cjhign")]
    #[case('I', None, "abelop")]
    #[case('J', None, "oleab")]
    #[case('K', None, "cjhfm")]
    #[case('L', None, "cjop")]
    #[case('M', None, "jcdfgn")]
    #[case('N', None, "jcdmng")]
    #[case('O', None, "abgnpojc")]
    #[case('P', None, "jcabgih")]
    #[case('Q', None, "ngbacjopm")]
    #[case('R', None, "higbacjm")]
    #[case('S', None, "badinpo")]
    #[case('T', None, "leab")]
    #[case('U', None, "cjopng")]
    #[case('V', None, "dmng")]
    #[case('W', None, "cjkmng")]
    #[case('X', None, "dkmf")]
    #[case('Y', None, "dfl")]
    #[case('Z', None, "abfkop")]
    #[case('+', None, "ehil")]
    #[case('-', None, "hi")]
    #[case('*', None, "defklm")]
    #[case('×', Some("multiply"), "dfkm")]
    #[case('/', None, "kf")]
    #[case('\\', None, "dm")]
    #[case('=', None, "hiop")]
    #[case('<', Some("lessthan"), "fm")]
    #[case('>', Some("greaterthan"), "dk")]
    #[case('[', None, "belp")]
    #[case(']', None, "aelo")]
    fn test_builtin_entry(
        #[case] character: char,
        #[case] name: Option<&str>,
        #[case] segments: &str,
    ) {
        let table = GlyphTable::builtin();
        let definition = table.get(character).unwrap();
        assert_eq!(definition.name.as_deref(), name);
        assert_eq!(definition.segments, segments);
    }

    #[test]
    fn test_builtin_segments_are_known_letters() {
        for definition in GlyphTable::builtin().iter() {
            assert!(
                definition.segments.chars().all(|s| ('a'..='r').contains(&s)),
                "{:?}",
                definition
            );
        }
    }

    #[test]
    fn test_sorted_by_codepoint() {
        let table = GlyphTable::builtin();
        let sorted: String = table.sorted().iter().map(|d| d.character).collect();
        assert!(sorted.starts_with(" #'*+-./0123456789<=>ABC"));
        assert!(sorted.ends_with("XYZ[\\]\u{d7}"));
        // Declaration order is untouched
        assert_eq!(table.characters().take(4).collect::<String>(), " .'#");
    }

    #[test]
    fn test_json_roundtrip() {
        let table = GlyphTable::builtin();
        let json = table.to_json().unwrap();
        assert_eq!(GlyphTable::from_json_str(&json).unwrap(), table);
    }

    #[test]
    fn test_json_table() {
        let json = r#"[
            {"character": "1", "segments": "f"},
            {"character": "<", "name": "lessthan", "segments": "fm"}
        ]"#;
        let table = GlyphTable::from_json_str(json).unwrap();
        assert_eq!(
            table.iter().cloned().collect::<Vec<_>>(),
            vec![
                GlyphDefinition::new('1', None, "f"),
                GlyphDefinition::new('<', Some("lessthan"), "fm"),
            ]
        );
    }

    #[test]
    fn test_duplicate_characters_rejected() {
        let result = GlyphTable::from_json_str(
            r#"[{"character": "1", "segments": "f"}, {"character": "1", "segments": "g"}]"#,
        );
        assert!(matches!(result, Err(SegfontError::Json(_))));
        assert!(matches!(
            GlyphTable::new(vec![
                GlyphDefinition::new('A', None, "a"),
                GlyphDefinition::new('A', None, "b"),
            ]),
            Err(SegfontError::DuplicateCharacter { character: 'A' })
        ));
    }
}

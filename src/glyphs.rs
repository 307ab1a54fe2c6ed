use std::fmt;

use crate::{
    markup::{escape_char, escape_text},
    segments::SegmentPaths,
    GlyphDefinition, GlyphTable, SegfontError,
};

/// A fully resolved `<glyph>` element.
#[derive(Debug, Clone, PartialEq)]
pub struct GlyphRecord {
    pub name: String,
    pub d: String,
    pub character: char,
}

impl GlyphRecord {
    /// Join the paths of the segments `definition` lights, in its order.
    pub fn compose(
        definition: &GlyphDefinition,
        paths: &SegmentPaths,
    ) -> Result<Self, SegfontError> {
        let mut buf = [0u8; 4];
        let d = definition
            .segments
            .chars()
            .map(|segment| {
                paths
                    .get(&*segment.encode_utf8(&mut buf))
                    .map(|p| p.as_str())
                    .ok_or(SegfontError::MissingSegment {
                        character: definition.character,
                        segment,
                    })
            })
            .collect::<Result<Vec<_>, _>>()?
            .join(" ");
        Ok(GlyphRecord {
            name: definition.glyph_name(),
            d,
            character: definition.character,
        })
    }
}

impl fmt::Display for GlyphRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "      <glyph glyph-name=\"{}\"", escape_text(&self.name))?;
        writeln!(f, "             d=\"{}\"", self.d)?;
        writeln!(f, "             unicode=\"{}\" />", escape_char(self.character))
    }
}

/// Build every glyph of the table, ordered by code point.
pub fn generate_glyphs(
    table: &GlyphTable,
    paths: &SegmentPaths,
) -> Result<Vec<GlyphRecord>, SegfontError> {
    table
        .sorted()
        .into_iter()
        .map(|definition| {
            let record = GlyphRecord::compose(definition, paths)?;
            log::debug!(
                "Glyph {:?} from segments {:?}",
                record.name,
                definition.segments
            );
            Ok(record)
        })
        .collect()
}

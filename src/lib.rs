#![deny(clippy::unwrap_used, clippy::expect_used)]
//! Regenerate the glyphs of an SVG font drawn with a fourteen-segment
//! display model.
//!
//! The source document holds one `<path>` per segment (`id="segment-a"`
//! and so on). Each character's glyph is the union of the segments it
//! lights; glyphs and a couple of kerning pairs are written back inside
//! the document's `<font>` element, replacing the previous ones.

mod error;
pub mod glyphs;
pub mod kerning;
pub mod markup;
mod options;
pub mod segments;
pub mod splice;
mod table;

pub use crate::{
    error::SegfontError,
    glyphs::GlyphRecord,
    kerning::KerningPair,
    options::RegenOptions,
    segments::SegmentPaths,
    table::{GlyphDefinition, GlyphTable, SPECIAL_CHARACTERS},
};
use std::path::Path;

/// Rebuild the glyph and kerning markup of an SVG font document.
///
/// Running this on its own output returns the same text.
pub fn regenerate(
    data: &str,
    table: &GlyphTable,
    options: &RegenOptions,
) -> Result<String, SegfontError> {
    let paths = segments::extract_segment_paths(data, options)?;
    let mut markup = String::new();
    for glyph in glyphs::generate_glyphs(table, &paths)? {
        markup.push_str(&glyph.to_string());
    }
    let advance = kerning::advance_width(data)?;
    for pair in kerning::generate_kerning(table, advance) {
        markup.push_str(&pair.to_string());
    }
    splice::replace_font(data, &markup)
}

/// What [`regenerate_file`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Regeneration {
    pub input_size: usize,
    pub output_size: usize,
    /// Whether the regenerated text differs from what was read.
    pub changed: bool,
}

/// Regenerate `input` and write the result to `output`, which may be the
/// same file. Nothing is written if any stage fails.
pub fn regenerate_file(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    table: &GlyphTable,
    options: &RegenOptions,
) -> Result<Regeneration, SegfontError> {
    let (report, regenerated) = check_file(input, table, options)?;
    std::fs::write(output.as_ref(), regenerated)?;
    log::info!("Wrote {}", output.as_ref().display());
    Ok(report)
}

/// Regenerate `input` in memory only, returning the report and new text.
pub fn check_file(
    input: impl AsRef<Path>,
    table: &GlyphTable,
    options: &RegenOptions,
) -> Result<(Regeneration, String), SegfontError> {
    let input = input.as_ref();
    let raw = std::fs::read_to_string(input)?;
    log::info!("{}: {} B", input.display(), raw.len());
    let regenerated = regenerate(&raw, table, options)?;
    log::info!("Final: {} B", regenerated.len());
    Ok((
        Regeneration {
            input_size: raw.len(),
            output_size: regenerated.len(),
            changed: raw != regenerated,
        },
        regenerated,
    ))
}

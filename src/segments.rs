use indexmap::IndexMap;
use regex::Regex;
use std::sync::LazyLock;

use crate::{markup::attribute, RegenOptions, SegfontError};

/// Segment letter -> path data already flipped into font coordinates,
/// in document order.
pub type SegmentPaths = IndexMap<String, String>;

static PATH_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::unwrap_used)] // Safe because the regex is valid
    Regex::new(r"<path\b[^>]*>").unwrap()
});

/// Flip every `x,y` pair of a path about `baseline`.
///
/// Only the Y value is rewritten (with six decimals); X values and
/// command tokens are passed through untouched.
pub fn invert_path(d: &str, baseline: f64) -> Result<String, SegfontError> {
    d.split(' ')
        .map(|token| {
            let Some((x, y)) = token.split_once(',') else {
                return Ok(token.to_string());
            };
            let bad = || SegfontError::BadCoordinate {
                token: token.to_string(),
            };
            if y.contains(',') {
                return Err(bad());
            }
            let y: f64 = y
                .trim()
                .parse()
                .ok()
                .filter(|y: &f64| y.is_finite())
                .ok_or_else(bad)?;
            Ok(format!("{},{:.6}", x, baseline - y))
        })
        .collect::<Result<Vec<_>, _>>()
        .map(|tokens| tokens.join(" "))
}

/// Collect the segment outlines drawn in the document.
pub fn extract_segment_paths(
    data: &str,
    options: &RegenOptions,
) -> Result<SegmentPaths, SegfontError> {
    let mut result = SegmentPaths::new();
    for path in PATH_REGEX.find_iter(data).map(|m| m.as_str()) {
        let id = attribute(path, "id")
            .ok_or_else(|| SegfontError::missing_attribute("path", "id"))?;
        let Some(segment) = id.strip_prefix(options.segment_prefix.as_str()) else {
            log::debug!("Skipping path {:?}, not a segment", id);
            continue;
        };
        let d = attribute(path, "d")
            .ok_or_else(|| SegfontError::missing_attribute("path", "d"))?;
        let inverted = invert_path(d, options.baseline)?;
        if result.insert(segment.to_string(), inverted).is_some() {
            log::warn!(
                "Segment {:?} is defined more than once, using the last one",
                segment
            );
        }
    }
    log::debug!("Found {} segments", result.len());
    Ok(result)
}

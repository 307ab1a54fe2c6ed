/// Document-dependent settings for a regeneration run.
#[derive(Debug, Clone, PartialEq)]
pub struct RegenOptions {
    /// Y coordinates of the segment paths are flipped about this height,
    /// turning SVG's downward Y axis into the font's upward one.
    pub baseline: f64,
    /// Only `<path>` elements whose `id` starts with this prefix are
    /// treated as segments; the rest of the `id` is the segment letter.
    pub segment_prefix: String,
}

impl Default for RegenOptions {
    fn default() -> Self {
        Self {
            baseline: 1024.0,
            segment_prefix: "segment-".to_string(),
        }
    }
}

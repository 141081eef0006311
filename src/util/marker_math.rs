//! Pure layout math for the rubric continuum marker.

#[cfg(test)]
#[path = "marker_math_test.rs"]
mod marker_math_test;

/// Horizontal offset from the computed track position to the marker glyph's
/// visual center.
pub const MARKER_GLYPH_OFFSET_PX: f64 = 12.0;

/// Left edge of the "X" marker along the continuum track, in pixels.
///
/// The marker sits at fraction `position / levels` of the rendered track
/// width. `position` ranges over the track's `0..=levels` stops, so the top
/// stop lands on the track's right edge.
pub fn marker_left_px(position: usize, levels: usize, track_width_px: f64) -> f64 {
    let denom = levels.max(1) as f64;
    (position as f64 / denom) * track_width_px
}

/// Fraction of the track width at which divider `k` (zero-based, between
/// columns `k` and `k + 1`) is drawn.
pub fn divider_fraction(k: usize, levels: usize) -> f64 {
    (k + 1) as f64 / levels.max(1) as f64
}

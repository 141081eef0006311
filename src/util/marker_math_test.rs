use super::*;

#[test]
fn marker_position_is_proportional_to_track_width() {
    assert_eq!(marker_left_px(0, 4, 800.0), 0.0);
    assert_eq!(marker_left_px(1, 4, 800.0), 200.0);
    assert_eq!(marker_left_px(3, 4, 800.0), 600.0);
}

#[test]
fn marker_top_stop_reaches_full_track_width() {
    assert_eq!(marker_left_px(4, 4, 800.0), 800.0);
}

#[test]
fn marker_math_guards_zero_levels() {
    // Degenerate corpus entry; denominator is floored at 1.
    assert_eq!(marker_left_px(0, 0, 800.0), 0.0);
}

#[test]
fn marker_handles_zero_width_track() {
    assert_eq!(marker_left_px(2, 4, 0.0), 0.0);
}

#[test]
fn divider_fractions_split_track_into_level_columns() {
    assert_eq!(divider_fraction(0, 4), 0.25);
    assert_eq!(divider_fraction(1, 4), 0.5);
    assert_eq!(divider_fraction(2, 4), 0.75);
}

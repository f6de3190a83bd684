use statchart::core::{BarSlots, DataPoint, Padding, Series, Viewport, hit_test_bars, hit_test_pie, layout_pie};

fn bar_series(values: &[f64]) -> Series {
    values
        .iter()
        .enumerate()
        .map(|(i, value)| DataPoint::new(format!("item {i}"), *value))
        .collect()
}

const BAR_VIEWPORT: Viewport = Viewport::new(300.0, 150.0);

#[test]
fn gutter_between_bars_is_not_a_hit() {
    let series = bar_series(&[10.0, 50.0, 30.0]);
    // bar 0 spans roughly [63.7, 109.7], bar 1 starts at 141.
    assert_eq!(hit_test_bars(&series, BAR_VIEWPORT, Padding::default(), 120.0), None);
    assert_eq!(hit_test_bars(&series, BAR_VIEWPORT, Padding::default(), 20.0), None);
    assert_eq!(hit_test_bars(&series, BAR_VIEWPORT, Padding::default(), 295.0), None);
}

#[test]
fn bar_edges_are_inclusive() {
    let series = bar_series(&[10.0, 50.0, 30.0]);
    let slots = BarSlots::new(series.len(), BAR_VIEWPORT, Padding::default()).expect("non-empty");
    let left = slots.bar_left(1);
    let right = left + slots.bar_width;
    assert_eq!(hit_test_bars(&series, BAR_VIEWPORT, Padding::default(), left), Some(1));
    assert_eq!(hit_test_bars(&series, BAR_VIEWPORT, Padding::default(), right), Some(1));
    assert_eq!(hit_test_bars(&series, BAR_VIEWPORT, Padding::default(), left - 0.01), None);
}

#[test]
fn bar_hit_test_ignores_values() {
    let series = bar_series(&[f64::NAN, f64::NAN, 30.0]);
    assert_eq!(hit_test_bars(&series, BAR_VIEWPORT, Padding::default(), 164.0), Some(1));
}

#[test]
fn empty_series_and_non_finite_pointer_never_hit() {
    assert_eq!(hit_test_bars(&Series::default(), BAR_VIEWPORT, Padding::default(), 100.0), None);
    let series = bar_series(&[1.0]);
    assert_eq!(hit_test_bars(&series, BAR_VIEWPORT, Padding::default(), f64::NAN), None);
}

#[test]
fn all_invalid_bar_series_never_hits() {
    let series = bar_series(&[f64::NAN, f64::INFINITY]);
    for x in [70.0, 106.0, 164.0, 200.0] {
        assert_eq!(hit_test_bars(&series, BAR_VIEWPORT, Padding::default(), x), None);
    }
}

const PIE_VIEWPORT: Viewport = Viewport::new(400.0, 200.0);

fn pie_series(values: &[f64]) -> Series {
    values
        .iter()
        .enumerate()
        .map(|(i, value)| DataPoint::new(format!("slice {i}"), *value))
        .collect()
}

#[test]
fn slice_midpoints_hit_their_own_slice() {
    let series = pie_series(&[1.0, 1.0, 2.0]);
    let layout = layout_pie(&series, PIE_VIEWPORT).expect("positive total");
    for slice in &layout.slices {
        let (x, y) = layout.disc.point_at(slice.mid_angle(), layout.disc.radius / 2.0);
        assert_eq!(hit_test_pie(&series, PIE_VIEWPORT, x, y), Some(slice.index));
    }
}

#[test]
fn points_outside_the_disc_never_hit() {
    let series = pie_series(&[1.0, 1.0, 2.0]);
    // center (140, 80), radius 50
    assert_eq!(hit_test_pie(&series, PIE_VIEWPORT, 140.0, 80.0 - 50.5), None);
    assert_eq!(hit_test_pie(&series, PIE_VIEWPORT, 300.0, 80.0), None);
}

#[test]
fn shared_edge_belongs_to_the_later_slice() {
    let series = pie_series(&[1.0, 1.0, 2.0]);
    // 3 o'clock is the boundary between slice 0 and slice 1.
    assert_eq!(hit_test_pie(&series, PIE_VIEWPORT, 165.0, 80.0), Some(1));
    // straight up is the start of slice 0.
    assert_eq!(hit_test_pie(&series, PIE_VIEWPORT, 140.0, 60.0), Some(0));
}

#[test]
fn zero_size_slices_are_never_hit() {
    let series = pie_series(&[1.0, 0.0, 1.0]);
    // 6 o'clock below the center is where the empty slice sits.
    assert_eq!(hit_test_pie(&series, PIE_VIEWPORT, 140.0, 90.0), Some(2));
}

#[test]
fn zero_total_pie_never_hits() {
    let series = pie_series(&[0.0, 0.0]);
    assert_eq!(hit_test_pie(&series, PIE_VIEWPORT, 140.0, 80.0), None);
    assert_eq!(hit_test_pie(&Series::default(), PIE_VIEWPORT, 140.0, 80.0), None);
}

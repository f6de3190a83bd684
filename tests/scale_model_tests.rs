use approx::assert_relative_eq;
use statchart::core::{PlotArea, ValueRange, ValueScale, Viewport, Padding, pie_total};

#[test]
fn padded_range_floors_at_zero() {
    let range = ValueRange::from_values([10.0, 50.0, 30.0]).expect("finite values");
    assert_eq!(range, ValueRange { min: 0.0, max: 60.0 });
}

#[test]
fn single_value_gets_minimum_padding_on_both_sides() {
    let range = ValueRange::from_values([100.0]).expect("finite value");
    assert_eq!(range, ValueRange { min: 90.0, max: 110.0 });
}

#[test]
fn wide_spans_use_relative_padding() {
    let range = ValueRange::from_values([1_000.0, 2_000.0]).expect("finite values");
    assert_eq!(range, ValueRange { min: 880.0, max: 2_120.0 });
}

#[test]
fn negative_values_still_floor_at_zero() {
    let range = ValueRange::from_values([-20.0, 40.0]).expect("finite values");
    assert_eq!(range.min, 0.0);
    assert_eq!(range.max, 50.0);
}

#[test]
fn non_finite_values_are_ignored() {
    let range = ValueRange::from_values([5.0, f64::NAN, 15.0, f64::INFINITY]).expect("finite values");
    assert_eq!(range, ValueRange { min: 0.0, max: 25.0 });
}

#[test]
fn no_finite_values_means_no_range() {
    assert_eq!(ValueRange::from_values([f64::NAN, f64::NEG_INFINITY]), None);
    assert_eq!(ValueRange::from_values(std::iter::empty()), None);
}

#[test]
fn value_axis_is_inverted_over_the_plot() {
    let plot = PlotArea::from_viewport(Viewport::new(300.0, 150.0), Padding::default());
    let scale = ValueScale::new(ValueRange { min: 0.0, max: 60.0 }, plot);

    assert_relative_eq!(scale.value_to_pixel(60.0), 20.0);
    assert_relative_eq!(scale.value_to_pixel(0.0), 102.0);
    assert_relative_eq!(scale.value_to_pixel(30.0), 61.0);
}

#[test]
fn pie_total_skips_non_finite_values() {
    assert_eq!(pie_total([1.0, f64::NAN, 2.0, f64::INFINITY]), 3.0);
    assert_eq!(pie_total(std::iter::empty()), 0.0);
}

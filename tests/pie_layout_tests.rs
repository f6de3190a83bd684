use std::f64::consts::{FRAC_PI_2, TAU};

use approx::assert_relative_eq;
use statchart::core::{DataPoint, PieDisc, Series, Viewport, layout_pie};

fn series(values: &[f64]) -> Series {
    values
        .iter()
        .enumerate()
        .map(|(i, value)| DataPoint::new(format!("slice {i}"), *value))
        .collect()
}

const VIEWPORT: Viewport = Viewport::new(400.0, 200.0);

#[test]
fn disc_sits_left_of_center() {
    let disc = PieDisc::for_viewport(VIEWPORT);
    assert_relative_eq!(disc.center_x, 140.0);
    assert_relative_eq!(disc.center_y, 80.0);
    assert_relative_eq!(disc.radius, 50.0);
}

#[test]
fn slices_run_clockwise_from_twelve_o_clock() {
    let layout = layout_pie(&series(&[1.0, 1.0, 2.0]), VIEWPORT).expect("positive total");

    assert_eq!(layout.total, 4.0);
    let fractions: Vec<f64> = layout.slices.iter().map(|slice| slice.fraction).collect();
    assert_eq!(fractions, vec![0.25, 0.25, 0.5]);
    assert_relative_eq!(layout.slices[0].start_angle, -FRAC_PI_2);
    assert_relative_eq!(layout.slices[2].end_angle, 3.0 * FRAC_PI_2, epsilon = 1e-12);
    for pair in layout.slices.windows(2) {
        assert_eq!(pair[0].end_angle, pair[1].start_angle);
    }
}

#[test]
fn slice_sizes_sum_to_a_full_turn() {
    let layout = layout_pie(&series(&[3.0, 7.5, 0.25, 11.0, 1.0]), VIEWPORT).expect("positive total");
    let total: f64 = layout.slices.iter().map(|slice| slice.size()).sum();
    assert_relative_eq!(total, TAU, epsilon = 1e-9);
}

#[test]
fn invalid_values_count_as_zero() {
    let layout = layout_pie(&series(&[1.0, f64::NAN, 1.0]), VIEWPORT).expect("positive total");
    assert_eq!(layout.total, 2.0);
    assert_eq!(layout.slices[1].value, 0.0);
    assert_eq!(layout.slices[1].size(), 0.0);
}

#[test]
fn non_positive_totals_have_no_layout() {
    assert!(layout_pie(&Series::default(), VIEWPORT).is_none());
    assert!(layout_pie(&series(&[0.0, 0.0]), VIEWPORT).is_none());
    assert!(layout_pie(&series(&[-1.0, -2.0]), VIEWPORT).is_none());
    assert!(layout_pie(&series(&[f64::NAN]), VIEWPORT).is_none());
}

#[test]
fn percent_follows_fraction() {
    let layout = layout_pie(&series(&[1.0, 3.0]), VIEWPORT).expect("positive total");
    assert_relative_eq!(layout.slices[0].percent(), 25.0);
    assert_relative_eq!(layout.slices[1].percent(), 75.0);
}

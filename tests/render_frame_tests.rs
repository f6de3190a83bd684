use approx::assert_relative_eq;
use statchart::api::{
    BarChart, BarChartConfig, BarChartOptions, HIGHLIGHT_OPACITY, PieChart, PieChartConfig,
};
use statchart::core::{DataPoint, Series, SurfaceMetrics, Viewport};
use statchart::render::{Color, TextHAlign, TextVAlign};

fn series(values: &[f64]) -> Series {
    values
        .iter()
        .enumerate()
        .map(|(i, value)| DataPoint::new(format!("{:02}.01.2024", i + 1), *value))
        .collect()
}

fn bar_surface() -> SurfaceMetrics {
    SurfaceMetrics::new(Viewport::new(300.0, 150.0), 2.0)
}

#[test]
fn bar_frame_has_grid_bars_and_labels() {
    let chart = BarChart::new(series(&[10.0, 50.0, 30.0]), BarChartConfig::default());
    let frame = chart.build_render_frame(bar_surface(), None);

    frame.validate().expect("valid frame");
    assert_eq!(frame.device_pixel_ratio, 2.0);
    assert_eq!(frame.background, Color::WHITE);
    assert_eq!(frame.lines.len(), 5);
    assert_eq!(frame.rects.len(), 6);
    assert_eq!(frame.texts.len(), 8);
    assert!(frame.wedges.is_empty());
}

#[test]
fn grid_lines_are_offset_for_crisp_strokes() {
    let chart = BarChart::new(series(&[10.0, 50.0, 30.0]), BarChartConfig::default());
    let frame = chart.build_render_frame(bar_surface(), None);

    let top = frame.lines[0];
    assert_eq!((top.x1, top.y1, top.x2, top.y2), (48.0, 20.5, 280.0, 20.5));

    let top_label = &frame.texts[0];
    assert_eq!(top_label.text, "60");
    assert_eq!((top_label.x, top_label.y), (8.0, 24.0));
    assert_eq!(top_label.h_align, TextHAlign::Left);
}

#[test]
fn item_labels_hang_below_the_plot() {
    let chart = BarChart::new(series(&[10.0, 50.0, 30.0]), BarChartConfig::default());
    let frame = chart.build_render_frame(bar_surface(), None);

    let item_labels: Vec<_> = frame
        .texts
        .iter()
        .filter(|text| text.v_align == TextVAlign::Top)
        .collect();
    assert_eq!(item_labels.len(), 3);
    assert_eq!(item_labels[1].text, "02.01");
    assert_eq!(item_labels[1].y, 110.0);
    assert_eq!(item_labels[1].h_align, TextHAlign::Center);
    assert_eq!(item_labels[1].font_size_px, 11.0);
}

#[test]
fn hovered_bar_gets_wash_and_value_bubble() {
    let chart = BarChart::new(series(&[10.0, 50.0, 30.0]), BarChartConfig::default());
    let frame = chart.build_render_frame(bar_surface(), Some(1));

    assert_eq!(frame.rects.len(), 8);
    let wash = frame.rects[6];
    let bar = frame.rects[3];
    assert_eq!((wash.x, wash.y, wash.width, wash.height), (bar.x, bar.y, bar.width, bar.height));
    assert_eq!(wash.fill_color.alpha, HIGHLIGHT_OPACITY);

    let bubble = frame.rects[7];
    assert_eq!((bubble.width, bubble.height, bubble.corner_radius), (80.0, 30.0, 6.0));
    assert_relative_eq!(bubble.x + 40.0, bar.x + bar.width / 2.0, epsilon = 1e-9);
    assert_relative_eq!(bubble.y + 15.0, bar.y - 10.0, epsilon = 1e-9);

    let value = frame.texts.last().expect("bubble text");
    assert_eq!(value.text, "50");
    assert!(value.bold);
    assert_eq!(value.v_align, TextVAlign::Middle);
}

#[test]
fn hover_without_highlight_paints_plain_frame() {
    let options = BarChartOptions::from_json_str(r#"{"highlightOnHover": false}"#).expect("options");
    let chart = BarChart::with_options(series(&[10.0, 50.0, 30.0]), &options);
    let plain = chart.build_render_frame(bar_surface(), None);
    let hovered = chart.build_render_frame(bar_surface(), Some(1));
    assert_eq!(plain, hovered);
}

#[test]
fn invalid_values_skip_their_bar_only() {
    let chart = BarChart::new(series(&[10.0, f64::NAN, 30.0]), BarChartConfig::default());
    let frame = chart.build_render_frame(bar_surface(), Some(1));

    frame.validate().expect("valid frame");
    assert_eq!(frame.rects.len(), 4);
    assert_eq!(frame.texts.len(), 8);
}

#[test]
fn all_invalid_series_paints_background_only() {
    let chart = BarChart::new(series(&[f64::NAN, f64::NAN]), BarChartConfig::default());
    let frame = chart.build_render_frame(bar_surface(), None);
    assert!(frame.is_empty());

    let empty = BarChart::new(Series::default(), BarChartConfig::default());
    assert!(empty.build_render_frame(bar_surface(), Some(0)).is_empty());
}

#[test]
fn bar_tooltip_uses_full_label() {
    let chart = BarChart::new(series(&[10.0, 50.5]), BarChartConfig::default());
    assert_eq!(chart.tooltip_text(1).as_deref(), Some("02.01.2024 — 50.5"));
    assert_eq!(chart.tooltip_text(2), None);
}

fn pie_series(values: &[f64]) -> Series {
    ["Food", "Rent", "Travel", "Misc"]
        .iter()
        .zip(values)
        .map(|(label, value)| DataPoint::new(*label, *value))
        .collect()
}

fn pie_surface() -> SurfaceMetrics {
    SurfaceMetrics::new(Viewport::new(400.0, 200.0), 1.0)
}

#[test]
fn pie_frame_has_slices_and_legend() {
    let chart = PieChart::new(pie_series(&[1.0, 1.0, 2.0]), PieChartConfig::default());
    let frame = chart.build_render_frame(pie_surface(), None);

    frame.validate().expect("valid frame");
    assert_eq!(frame.wedges.len(), 3);
    assert_eq!(frame.rects.len(), 3);
    assert_eq!(frame.texts.len(), 3);

    let wedge = frame.wedges[0];
    assert_eq!(wedge.stroke_width, 2.0);
    assert_eq!(wedge.stroke_color, Color::WHITE);

    let swatch = frame.rects[0];
    assert_eq!((swatch.x, swatch.y, swatch.width, swatch.height), (220.0, 50.0, 12.0, 12.0));
    let second = frame.rects[1];
    assert_eq!(second.y, 72.0);

    assert_eq!(frame.texts[0].text, "Food 1 (25.0%)");
    assert_eq!((frame.texts[0].x, frame.texts[0].y), (238.0, 60.0));
    assert_eq!(frame.texts[2].text, "Travel 2 (50.0%)");
}

#[test]
fn palette_cycles_by_index() {
    let config = PieChartConfig {
        colors: vec![Color::rgb(1.0, 0.0, 0.0), Color::rgb(0.0, 0.0, 1.0)],
        ..PieChartConfig::default()
    };
    let chart = PieChart::new(pie_series(&[1.0, 1.0, 1.0]), config);
    let frame = chart.build_render_frame(pie_surface(), None);
    assert_eq!(frame.wedges[0].fill_color, frame.wedges[2].fill_color);
    assert_ne!(frame.wedges[0].fill_color, frame.wedges[1].fill_color);
}

#[test]
fn hovered_slice_gets_overlay_wedge() {
    let chart = PieChart::new(pie_series(&[1.0, 1.0, 2.0]), PieChartConfig::default());
    let frame = chart.build_render_frame(pie_surface(), Some(2));

    assert_eq!(frame.wedges.len(), 4);
    let overlay = frame.wedges[3];
    assert_eq!(overlay.start_angle, frame.wedges[2].start_angle);
    assert_eq!(overlay.end_angle, frame.wedges[2].end_angle);
    assert_eq!(overlay.fill_color.alpha, HIGHLIGHT_OPACITY);
    assert_eq!(overlay.stroke_width, 0.0);
}

#[test]
fn empty_and_negative_slices_are_not_painted() {
    let chart = PieChart::new(pie_series(&[1.0, 0.0, 3.0, -1.0]), PieChartConfig::default());
    let frame = chart.build_render_frame(pie_surface(), Some(1));

    frame.validate().expect("valid frame");
    assert_eq!(frame.wedges.len(), 2);
    assert_eq!(frame.texts.len(), 4);
}

#[test]
fn zero_total_pie_paints_background_only() {
    let chart = PieChart::new(pie_series(&[0.0, 0.0]), PieChartConfig::default());
    assert!(chart.build_render_frame(pie_surface(), None).is_empty());
    assert_eq!(chart.tooltip_text(0), None);
    assert_eq!(chart.hit_test(pie_surface().viewport, 140.0, 80.0), None);
}

#[test]
fn pie_tooltip_shows_share_with_one_decimal() {
    let chart = PieChart::new(pie_series(&[1.0, 2.0]), PieChartConfig::default());
    assert_eq!(chart.tooltip_text(0).as_deref(), Some("Food: 1 (33.3%)"));
    assert_eq!(chart.tooltip_text(1).as_deref(), Some("Rent: 2 (66.7%)"));
}

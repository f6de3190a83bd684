#![cfg(feature = "cairo-backend")]

use cairo::{Context, Format, ImageSurface};
use statchart::ChartError;
use statchart::api::{BarChartOptions, Chart, ChartEngine, PieChartOptions};
use statchart::core::{DataPoint, Series, SurfaceMetrics, Viewport};
use statchart::interaction::{HeadlessTooltip, PointerEvent};
use statchart::render::{CairoRenderer, Renderer};

fn series() -> Series {
    [("01.01.2024", 10.0), ("02.01.2024", 50.0), ("03.01.2024", 30.0)]
        .into_iter()
        .map(|(label, value)| DataPoint::new(label, value))
        .collect()
}

#[test]
fn cairo_renderer_rejects_invalid_surface_size() {
    let err = CairoRenderer::new(0, 480).expect_err("invalid width must fail");
    assert!(matches!(err, ChartError::InvalidViewport { .. }));
}

#[test]
fn bar_chart_renders_all_primitives() {
    let renderer = CairoRenderer::new(300, 150).expect("renderer");
    let mut engine = ChartEngine::create(
        renderer,
        HeadlessTooltip::default(),
        SurfaceMetrics::new(Viewport::new(300.0, 150.0), 1.0),
        Chart::bar(series(), &BarChartOptions::default()),
    )
    .expect("engine init");
    engine
        .pointer_move(PointerEvent::local(164.0, 60.0))
        .expect("hover");

    let (renderer, _) = engine.destroy();
    let stats = renderer.last_stats();
    assert_eq!(stats.lines_drawn, 5);
    assert_eq!(stats.rects_drawn, 8);
    assert_eq!(stats.texts_drawn, 9);
}

#[test]
fn backing_store_follows_device_pixel_ratio() {
    let renderer = CairoRenderer::new(1, 1).expect("renderer");
    let engine = ChartEngine::create(
        renderer,
        HeadlessTooltip::default(),
        SurfaceMetrics::new(Viewport::new(400.0, 200.0), 2.0),
        Chart::pie(series(), &PieChartOptions::default()),
    )
    .expect("engine init");

    let surface = engine.renderer().surface();
    assert_eq!((surface.width(), surface.height()), (800, 400));
    assert_eq!(engine.renderer().last_stats().wedges_drawn, 3);
}

#[test]
fn renderer_can_draw_on_external_context() {
    let renderer = CairoRenderer::new(1, 1).expect("renderer");
    let mut engine = ChartEngine::create(
        renderer,
        HeadlessTooltip::default(),
        SurfaceMetrics::new(Viewport::new(320.0, 200.0), 1.0),
        Chart::bar(series(), &BarChartOptions::default()),
    )
    .expect("engine init");

    let surface = ImageSurface::create(Format::ARgb32, 320, 200).expect("surface");
    let context = Context::new(&surface).expect("context");
    engine
        .render_on_cairo_context(&context)
        .expect("external render");
    assert_eq!(engine.renderer().last_stats().rects_drawn, 6);
}

#[test]
fn resize_backing_store_recreates_surface() {
    let mut renderer = CairoRenderer::new(10, 10).expect("renderer");
    renderer.resize_backing_store(64, 32).expect("resize");
    assert_eq!(
        (renderer.surface().width(), renderer.surface().height()),
        (64, 32)
    );
}

//! GTK4 host for a `ChartEngine`.
//!
//! The chart paints into a `gtk::DrawingArea`: engine repaints queue a GTK
//! draw, and the draw callback replays the current frame onto GTK's cairo
//! context. GTK applies HiDPI scaling to that context itself, so the engine
//! always runs at a device pixel ratio of 1.

use std::cell::RefCell;
use std::rc::Rc;

use gtk4 as gtk;
use gtk4::glib;
use gtk4::prelude::*;
use tracing::{debug, warn};

use crate::api::{Chart, ChartEngine};
use crate::core::{SurfaceMetrics, Viewport};
use crate::error::ChartResult;
use crate::interaction::{PointerEvent, Tooltip, TooltipAnchor};
use crate::render::{CairoContextRenderer, RenderFrame, Renderer, paint_frame};

/// Renderer that defers painting to the drawing area's draw callback.
#[derive(Debug, Clone)]
pub struct DrawingAreaRenderer {
    area: gtk::DrawingArea,
}

impl DrawingAreaRenderer {
    #[must_use]
    pub fn new(area: &gtk::DrawingArea) -> Self {
        Self { area: area.clone() }
    }
}

impl Renderer for DrawingAreaRenderer {
    fn render(&mut self, _frame: &RenderFrame) -> ChartResult<()> {
        self.area.queue_draw();
        Ok(())
    }
}

impl CairoContextRenderer for DrawingAreaRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &cairo::Context,
        frame: &RenderFrame,
    ) -> ChartResult<()> {
        paint_frame(context, frame).map(|_| ())
    }
}

/// Tooltip backed by a non-modal `gtk::Popover` parented to the chart area.
#[derive(Debug)]
pub struct PopoverTooltip {
    popover: gtk::Popover,
    label: gtk::Label,
}

impl PopoverTooltip {
    #[must_use]
    pub fn new(parent: &gtk::DrawingArea) -> Self {
        let label = gtk::Label::new(None);
        let popover = gtk::Popover::new();
        popover.set_child(Some(&label));
        popover.set_autohide(false);
        popover.set_has_arrow(false);
        popover.set_can_target(false);
        popover.set_position(gtk::PositionType::Top);
        popover.set_parent(parent);
        Self { popover, label }
    }

    fn point_at(&self, anchor: TooltipAnchor) {
        let rect = gtk::gdk::Rectangle::new(anchor.x.round() as i32, anchor.y.round() as i32, 1, 1);
        self.popover.set_pointing_to(Some(&rect));
    }
}

impl Tooltip for PopoverTooltip {
    fn show(&mut self, text: &str, anchor: TooltipAnchor) {
        self.label.set_text(text);
        self.point_at(anchor);
        self.popover.popup();
    }

    fn move_to(&mut self, anchor: TooltipAnchor) {
        self.point_at(anchor);
    }

    fn hide(&mut self) {
        self.popover.popdown();
    }

    fn remove(&mut self) {
        self.popover.popdown();
        self.popover.unparent();
    }
}

pub type GtkChartEngine = ChartEngine<DrawingAreaRenderer, PopoverTooltip>;
type SharedEngine = Rc<RefCell<Option<GtkChartEngine>>>;

/// Wires a chart to a drawing area's draw, motion and resize signals.
///
/// Call [`GtkChartAdapter::destroy`] when the chart is removed; the adapter
/// does not watch the widget's lifetime.
pub struct GtkChartAdapter {
    area: gtk::DrawingArea,
    engine: SharedEngine,
    motion: gtk::EventControllerMotion,
    resize_handler: Option<glib::SignalHandlerId>,
}

impl GtkChartAdapter {
    pub fn attach(area: &gtk::DrawingArea, chart: Chart) -> ChartResult<Self> {
        let surface = surface_for(area.width(), area.height());
        let engine = ChartEngine::create(
            DrawingAreaRenderer::new(area),
            PopoverTooltip::new(area),
            surface,
            chart,
        )?;
        let engine: SharedEngine = Rc::new(RefCell::new(Some(engine)));

        area.set_draw_func({
            let engine = Rc::clone(&engine);
            move |_area, context, width, height| {
                if width <= 0 || height <= 0 {
                    return;
                }
                let Ok(mut slot) = engine.try_borrow_mut() else {
                    return;
                };
                if let Some(engine) = slot.as_mut() {
                    if let Err(err) = engine.render_on_cairo_context(context) {
                        warn!(error = %err, "chart draw failed");
                    }
                }
            }
        });

        let motion = gtk::EventControllerMotion::new();
        motion.connect_motion({
            let engine = Rc::clone(&engine);
            move |_, x, y| {
                with_engine(&engine, |engine| engine.pointer_move(PointerEvent::local(x, y)));
            }
        });
        motion.connect_leave({
            let engine = Rc::clone(&engine);
            move |_| {
                with_engine(&engine, GtkChartEngine::pointer_leave);
            }
        });
        area.add_controller(motion.clone());

        let resize_handler = area.connect_resize({
            let engine = Rc::clone(&engine);
            move |_area, width, height| {
                with_engine(&engine, |engine| engine.resize(surface_for(width, height)));
            }
        });

        debug!(width = surface.viewport.width, height = surface.viewport.height, "gtk chart attached");
        Ok(Self {
            area: area.clone(),
            engine,
            motion,
            resize_handler: Some(resize_handler),
        })
    }

    /// Forces a repaint, e.g. after the area became visible.
    pub fn redraw(&self) -> ChartResult<()> {
        match self.engine.try_borrow_mut() {
            Ok(mut slot) => slot.as_mut().map_or(Ok(()), GtkChartEngine::redraw),
            Err(_) => Ok(()),
        }
    }

    #[must_use]
    pub fn hovered_index(&self) -> Option<usize> {
        self.engine
            .try_borrow()
            .ok()
            .and_then(|slot| slot.as_ref().and_then(GtkChartEngine::hovered_index))
    }

    /// Disconnects every handler and removes the tooltip popover.
    pub fn destroy(mut self) {
        self.area.remove_controller(&self.motion);
        if let Some(handler) = self.resize_handler.take() {
            self.area.disconnect(handler);
        }
        self.area.unset_draw_func();
        let engine = self.engine.borrow_mut().take();
        if let Some(engine) = engine {
            let _ = engine.destroy();
        }
        self.area.queue_draw();
    }
}

fn surface_for(width: i32, height: i32) -> SurfaceMetrics {
    SurfaceMetrics::new(
        Viewport::new(f64::from(width.max(0)), f64::from(height.max(0))),
        1.0,
    )
}

fn with_engine(engine: &SharedEngine, f: impl FnOnce(&mut GtkChartEngine) -> ChartResult<()>) {
    let Ok(mut slot) = engine.try_borrow_mut() else {
        return;
    };
    if let Some(engine) = slot.as_mut() {
        if let Err(err) = f(engine) {
            warn!(error = %err, "chart event handling failed");
        }
    }
}

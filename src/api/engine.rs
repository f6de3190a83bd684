use tracing::{debug, trace};

use crate::core::SurfaceMetrics;
use crate::error::ChartResult;
use crate::interaction::{
    HoverState, InteractionController, InteractionEffects, PointerEvent, Tooltip, TooltipUpdate,
};
use crate::render::{RenderFrame, Renderer};

use super::chart::Chart;

#[cfg(feature = "cairo-backend")]
use crate::render::CairoContextRenderer;

/// One live chart instance bound to a drawing surface.
///
/// `ChartEngine` owns the chart, its hover state, the renderer painting the
/// surface and the tooltip element. Every handler runs to completion on the
/// caller's thread.
pub struct ChartEngine<R: Renderer, T: Tooltip> {
    renderer: R,
    tooltip: T,
    chart: Chart,
    surface: SurfaceMetrics,
    interaction: InteractionController,
}

impl<R: Renderer, T: Tooltip> ChartEngine<R, T> {
    /// Binds `chart` to a surface and performs the initial synchronous draw.
    pub fn create(renderer: R, tooltip: T, surface: SurfaceMetrics, chart: Chart) -> ChartResult<Self> {
        let interaction = InteractionController::new(chart.highlight_on_hover());
        let mut engine = Self {
            renderer,
            tooltip,
            chart,
            surface,
            interaction,
        };
        engine.sync_backing_store()?;
        engine.redraw()?;
        debug!(
            kind = engine.chart.kind(),
            items = engine.chart.series().len(),
            width = surface.viewport.width,
            height = surface.viewport.height,
            "chart created"
        );
        Ok(engine)
    }

    /// Forces a full repaint of the current state.
    ///
    /// Surfaces without a drawable area are skipped.
    pub fn redraw(&mut self) -> ChartResult<()> {
        if !self.surface.viewport.is_valid() {
            trace!(
                width = self.surface.viewport.width,
                height = self.surface.viewport.height,
                "skipping redraw of empty surface"
            );
            return Ok(());
        }
        let frame = self.build_render_frame();
        self.renderer.render(&frame)
    }

    pub fn pointer_move(&mut self, event: PointerEvent) -> ChartResult<()> {
        let hit = self.hit_test(event.x, event.y);
        let effects = self.interaction.on_pointer_move(hit, event);
        self.apply_effects(effects)
    }

    pub fn pointer_leave(&mut self) -> ChartResult<()> {
        let effects = self.interaction.on_pointer_leave();
        self.apply_effects(effects)
    }

    /// Adopts new surface metrics and repaints. Hover state is kept as is
    /// until the next pointer move.
    pub fn resize(&mut self, surface: SurfaceMetrics) -> ChartResult<()> {
        trace!(
            width = surface.viewport.width,
            height = surface.viewport.height,
            device_pixel_ratio = surface.device_pixel_ratio,
            "surface resized"
        );
        self.surface = surface;
        self.sync_backing_store()?;
        let effects = self.interaction.on_resize();
        self.apply_effects(effects)
    }

    #[must_use]
    pub fn hit_test(&self, x: f64, y: f64) -> Option<usize> {
        self.chart.hit_test(self.surface.viewport, x, y)
    }

    #[must_use]
    pub fn hovered_index(&self) -> Option<usize> {
        self.interaction.hovered_index()
    }

    #[must_use]
    pub fn hover_state(&self) -> HoverState {
        self.interaction.state()
    }

    #[must_use]
    pub fn build_render_frame(&self) -> RenderFrame {
        self.chart
            .build_render_frame(self.surface, self.interaction.hovered_index())
    }

    /// Renders the current frame into an external cairo context.
    ///
    /// Used by GTK draw callbacks, which own the context for the paint.
    #[cfg(feature = "cairo-backend")]
    pub fn render_on_cairo_context(&mut self, context: &cairo::Context) -> ChartResult<()>
    where
        R: CairoContextRenderer,
    {
        if !self.surface.viewport.is_valid() {
            return Ok(());
        }
        let frame = self.build_render_frame();
        self.renderer.render_on_cairo_context(context, &frame)
    }

    #[must_use]
    pub fn chart(&self) -> &Chart {
        &self.chart
    }

    #[must_use]
    pub fn surface(&self) -> SurfaceMetrics {
        self.surface
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    #[must_use]
    pub fn tooltip(&self) -> &T {
        &self.tooltip
    }

    /// Tears the instance down: the tooltip element is removed and the
    /// renderer and tooltip are handed back to the owner.
    pub fn destroy(mut self) -> (R, T) {
        self.tooltip.remove();
        debug!(kind = self.chart.kind(), "chart destroyed");
        (self.renderer, self.tooltip)
    }

    fn sync_backing_store(&mut self) -> ChartResult<()> {
        let (width_px, height_px) = self.surface.backing_store_size();
        if width_px == 0 || height_px == 0 {
            return Ok(());
        }
        self.renderer.resize_backing_store(width_px, height_px)
    }

    fn apply_effects(&mut self, effects: InteractionEffects) -> ChartResult<()> {
        match effects.tooltip {
            Some(TooltipUpdate::Show { index, anchor }) => {
                let text = self.chart.tooltip_text(index).unwrap_or_default();
                self.tooltip.show(&text, anchor);
            }
            Some(TooltipUpdate::Move { anchor }) => self.tooltip.move_to(anchor),
            Some(TooltipUpdate::Hide) => self.tooltip.hide(),
            None => {}
        }
        if effects.repaint {
            self.redraw()?;
        }
        Ok(())
    }
}

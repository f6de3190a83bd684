use serde::{Deserialize, Serialize};
use tracing::trace;

mod tooltip;

pub use tooltip::{HeadlessTooltip, Tooltip};

/// Vertical offset between the pointer and the tooltip anchor.
pub const TOOLTIP_ANCHOR_OFFSET_Y: f64 = 12.0;

/// Observable hover state of one chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum HoverState {
    /// Nothing hovered, tooltip hidden.
    #[default]
    Idle,
    /// Item `index` is hovered, tooltip visible.
    Hovering(usize),
}

impl HoverState {
    #[must_use]
    pub fn hovered_index(self) -> Option<usize> {
        match self {
            Self::Idle => None,
            Self::Hovering(index) => Some(index),
        }
    }
}

/// Pointer position in surface-local and client (screen) coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerEvent {
    pub x: f64,
    pub y: f64,
    pub client_x: f64,
    pub client_y: f64,
}

impl PointerEvent {
    #[must_use]
    pub const fn new(x: f64, y: f64, client_x: f64, client_y: f64) -> Self {
        Self {
            x,
            y,
            client_x,
            client_y,
        }
    }

    /// Event from a host whose client space is the surface itself.
    #[must_use]
    pub const fn local(x: f64, y: f64) -> Self {
        Self::new(x, y, x, y)
    }

    #[must_use]
    pub fn tooltip_anchor(self) -> TooltipAnchor {
        TooltipAnchor {
            x: self.client_x,
            y: self.client_y - TOOLTIP_ANCHOR_OFFSET_Y,
        }
    }
}

/// Client-space point the tooltip is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TooltipAnchor {
    pub x: f64,
    pub y: f64,
}

/// Event fed into the hover state machine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InteractionInput {
    /// Pointer moved; `hit` is the hit-test result at the new position.
    PointerMove {
        hit: Option<usize>,
        event: PointerEvent,
    },
    PointerLeave,
    /// Surface resized. Does not re-hit-test: the next move corrects hover.
    Resize,
}

/// Tooltip instruction produced by a transition.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum TooltipUpdate {
    /// Set content for `index` and show at `anchor`.
    Show { index: usize, anchor: TooltipAnchor },
    /// Same item still hovered; follow the pointer.
    Move { anchor: TooltipAnchor },
    Hide,
}

/// Side effects requested by one transition.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct InteractionEffects {
    pub repaint: bool,
    pub tooltip: Option<TooltipUpdate>,
}

impl InteractionEffects {
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_none(self) -> bool {
        !self.repaint && self.tooltip.is_none()
    }
}

/// Next state plus effects for one input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    pub next: HoverState,
    pub effects: InteractionEffects,
}

/// Pure transition function of the hover state machine.
///
/// Repaints are requested only when the hovered item changes and
/// `highlight_on_hover` is set, or on resize.
#[must_use]
pub fn transition(
    state: HoverState,
    input: InteractionInput,
    highlight_on_hover: bool,
) -> Transition {
    match input {
        InteractionInput::PointerMove { hit, event } => {
            let next = hit.map_or(HoverState::Idle, HoverState::Hovering);
            let changed = next != state;
            let tooltip = match (state, next) {
                (_, HoverState::Hovering(index)) if changed => Some(TooltipUpdate::Show {
                    index,
                    anchor: event.tooltip_anchor(),
                }),
                (_, HoverState::Hovering(_)) => Some(TooltipUpdate::Move {
                    anchor: event.tooltip_anchor(),
                }),
                (HoverState::Hovering(_), HoverState::Idle) => Some(TooltipUpdate::Hide),
                (HoverState::Idle, HoverState::Idle) => None,
            };
            Transition {
                next,
                effects: InteractionEffects {
                    repaint: changed && highlight_on_hover,
                    tooltip,
                },
            }
        }
        InteractionInput::PointerLeave => Transition {
            next: HoverState::Idle,
            effects: match state {
                HoverState::Idle => InteractionEffects::none(),
                HoverState::Hovering(_) => InteractionEffects {
                    repaint: highlight_on_hover,
                    tooltip: Some(TooltipUpdate::Hide),
                },
            },
        },
        InteractionInput::Resize => Transition {
            next: state,
            effects: InteractionEffects {
                repaint: true,
                tooltip: None,
            },
        },
    }
}

/// Owns the hover state of one chart instance.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct InteractionController {
    state: HoverState,
    highlight_on_hover: bool,
}

impl InteractionController {
    #[must_use]
    pub fn new(highlight_on_hover: bool) -> Self {
        Self {
            state: HoverState::Idle,
            highlight_on_hover,
        }
    }

    #[must_use]
    pub fn state(self) -> HoverState {
        self.state
    }

    #[must_use]
    pub fn hovered_index(self) -> Option<usize> {
        self.state.hovered_index()
    }

    #[must_use]
    pub fn highlight_on_hover(self) -> bool {
        self.highlight_on_hover
    }

    pub fn apply(&mut self, input: InteractionInput) -> InteractionEffects {
        let Transition { next, effects } = transition(self.state, input, self.highlight_on_hover);
        if next != self.state {
            trace!(from = ?self.state, to = ?next, "hover transition");
        }
        self.state = next;
        effects
    }

    pub fn on_pointer_move(&mut self, hit: Option<usize>, event: PointerEvent) -> InteractionEffects {
        self.apply(InteractionInput::PointerMove { hit, event })
    }

    pub fn on_pointer_leave(&mut self) -> InteractionEffects {
        self.apply(InteractionInput::PointerLeave)
    }

    pub fn on_resize(&mut self) -> InteractionEffects {
        self.apply(InteractionInput::Resize)
    }
}

use std::rc::Rc;

use egui::Pos2;

use super::types::{DirectionMode, ItemDropped, ItemId};

/// Options for [`super::ReorderList`].
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReorderOptions {
    /// Fraction of an item's outer extent, near each boundary, that counts
    /// as "close enough" to trigger an insertion there.
    ///
    /// Larger values make the placeholder jump earlier while approaching a
    /// boundary; values past 0.5 make adjacent hit zones overlap.
    pub active_range_ratio: f32,

    /// Layout axis of the list. `Auto` asks the host once at construction
    /// via [`ListHost::layout_axis_hint`](super::ListHost::layout_axis_hint).
    pub direction: DirectionMode,

    /// Distance (points) from a scroll parent edge at which autoscroll
    /// engages. The trigger point is the pointer near the top edge, and the
    /// dragged item's projected bottom near the bottom edge.
    pub scroll_margin: f32,

    /// Peak autoscroll speed, points per tick.
    pub scroll_speed: f32,

    /// Ease-in exponent of the autoscroll ramp. Speed is
    /// `scroll_speed * (distance_into_margin / scroll_margin) ^ scroll_curve`:
    /// imperceptible just inside the margin, full speed at the very edge.
    pub scroll_curve: f32,

    /// Pointer travel (points) before the gesture source starts the drag.
    /// Forwarded when wiring items; keeps plain clicks from dragging.
    pub drag_distance: f32,

    /// Opacity the gesture source applies to the drag ghost/helper.
    pub ghost_opacity: f32,

    /// If true, validate list invariants after each engine step (debug-only).
    pub debug_integrity: bool,

    /// If true, panic on integrity issues (debug-only).
    pub debug_integrity_panic: bool,
}

impl Default for ReorderOptions {
    fn default() -> Self {
        Self {
            active_range_ratio: 0.3,
            direction: DirectionMode::Auto,
            scroll_margin: 40.0,
            scroll_speed: 25.0,
            scroll_curve: 3.0,
            drag_distance: 5.0,
            ghost_opacity: 0.8,
            debug_integrity: false,
            debug_integrity_panic: false,
        }
    }
}

/// Optional host callbacks, invoked only when present.
#[derive(Clone, Default)]
pub(crate) struct ReorderCallbacks {
    pub(crate) on_start: Option<Rc<dyn Fn(ItemId)>>,
    pub(crate) on_drag: Option<Rc<dyn Fn(ItemId, Pos2)>>,
    pub(crate) on_drop: Option<Rc<dyn Fn(&ItemDropped)>>,
}

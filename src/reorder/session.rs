use egui::{Pos2, Vec2};

use super::autoscroll::AutoscrollController;
use super::types::{Axis, DragDirection, ItemId, ScrollParentId};

/// State of one drag gesture, created at gesture start and dropped at
/// gesture end. Holding it is what makes the container "Dragging"; a second
/// gesture start while one is live is rejected by the coordinator.
#[derive(Debug)]
pub(crate) struct DragSession {
    pub(crate) id: u64,
    pub(crate) item: ItemId,
    /// Outer size of the dragged item, margins included, captured at drag
    /// start. Sizes the placeholder and projects the dragged bottom edge.
    pub(crate) outer_size: Vec2,
    /// Index among items when the drag began.
    pub(crate) from_index: usize,
    /// Retained across calls so the autoscroll tick loop has a position to
    /// re-hover with while the pointer holds still.
    pub(crate) last_pointer: Option<Pos2>,
    direction: DragDirection,
    pub(crate) autoscroll: AutoscrollController,
}

impl DragSession {
    pub(crate) fn begin(
        id: u64,
        item: ItemId,
        outer_size: Vec2,
        from_index: usize,
        scroll_parent: Option<ScrollParentId>,
    ) -> Self {
        log::debug!(
            "drag {id} START item={item:?} from={from_index} scroll_parent={scroll_parent:?}"
        );
        Self {
            id,
            item,
            outer_size,
            from_index,
            last_pointer: None,
            direction: DragDirection::Unknown,
            autoscroll: AutoscrollController::new(scroll_parent),
        }
    }

    /// Record a pointer sample and return the travel direction to resolve
    /// with. A sample with no main-axis travel (or the first sample of the
    /// drag) keeps the previously observed direction, so horizontal jitter
    /// does not re-open both edge tests at a settled boundary.
    pub(crate) fn observe_pointer(&mut self, pointer: Pos2, axis: Axis) -> DragDirection {
        if let Some(last) = self.last_pointer {
            let delta = axis.main_pos(pointer) - axis.main_pos(last);
            if delta != 0.0 {
                self.direction = DragDirection::from_delta(delta);
            }
        }
        self.last_pointer = Some(pointer);
        self.direction
    }

    pub(crate) fn direction(&self) -> DragDirection {
        self.direction
    }
}

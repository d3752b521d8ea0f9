use std::time::Duration;

use egui::{Pos2, Vec2};

use super::types::{
    Axis, DragActivation, InsertionTarget, ItemId, ListChild, PlaceholderId, ScrollParentId,
    ScrollRegion, TimerId,
};

/// Host-side collaborator the engine drives a list through.
///
/// One trait, three concerns:
///
/// - **Geometry provider**: live positions, sizes and visibility. All
///   positions are page coordinates, the same space pointer samples arrive
///   in; outer sizes include margins.
/// - **Gesture wiring + placeholder/animation ops**: making items draggable,
///   hiding/revealing them, and maintaining the placeholder node. Animations
///   are fire-and-forget; `slide_out_then_remove` must tolerate the node
///   having already been detached by the time the animation finishes.
/// - **Scroll + timer service**: scroll offset access on the resolved scroll
///   parent, and a recurring timer whose fires the host routes to
///   [`ReorderList::scroll_tick`](super::ReorderList::scroll_tick).
///
/// The engine calls every method synchronously from its own entry points;
/// nothing here is expected to re-enter the engine.
pub trait ListHost {
    /// Page offset of the container's top-left corner.
    fn container_offset(&self) -> Pos2;

    /// The container's own scroll offset.
    fn container_scroll_offset(&self) -> Vec2;

    /// Leading margin of the container's content on the given axis
    /// (`margin-top` for vertical lists).
    fn container_leading_margin(&self, axis: Axis) -> f32;

    /// The container's child sequence in document order: reorderable items
    /// plus the live placeholder, if any. Which children count as items is
    /// the host's call; an empty sequence is a valid (inert) drag surface.
    fn children(&self) -> Vec<ListChild>;

    /// Outer size of an item, margins included.
    fn item_outer_size(&self, item: ItemId) -> Vec2;

    fn item_visible(&self, item: ItemId) -> bool;

    /// Nearest ancestor (container inclusive) whose vertical overflow
    /// scrolls, or `None` to keep autoscroll disabled for that drag.
    fn resolve_scroll_parent(&self) -> Option<ScrollParentId>;

    /// Viewport box of the scroll parent, in page coordinates.
    fn scroll_region(&self, parent: ScrollParentId) -> ScrollRegion;

    fn scroll_offset(&self, parent: ScrollParentId) -> f32;

    /// Set the scroll offset. Hosts clamp to their scrollable range, like a
    /// DOM `scrollTop` assignment would.
    fn set_scroll_offset(&mut self, parent: ScrollParentId, offset: f32);

    /// Make an item draggable through the gesture source. The gesture source
    /// reports back through `drag_started` / `drag_moved` / `drag_ended`.
    fn register_drag_source(&mut self, item: ItemId, activation: &DragActivation);

    fn unregister_drag_source(&mut self, item: ItemId);

    /// Create a placeholder node of the given outer size and insert it at
    /// `at`. The node starts fully grown; entrance animation, when wanted,
    /// is requested separately via [`ListHost::slide_in`].
    fn insert_placeholder(&mut self, placeholder: PlaceholderId, size: Vec2, at: InsertionTarget);

    fn slide_in(&mut self, placeholder: PlaceholderId);

    /// Animate the node away, then drop it. From this call on the node no
    /// longer appears in `children()`.
    fn slide_out_then_remove(&mut self, placeholder: PlaceholderId);

    /// Drop the node immediately, no animation. Used on commit and teardown.
    fn remove_placeholder(&mut self, placeholder: PlaceholderId);

    /// Hide an item while keeping it in the child sequence (identity must
    /// survive the drag).
    fn hide_item(&mut self, item: ItemId);

    fn show_item(&mut self, item: ItemId);

    /// Move an item so it immediately follows the placeholder. Part of the
    /// drop commit; the placeholder is removed right after.
    fn move_item_after_placeholder(&mut self, item: ItemId, placeholder: PlaceholderId);

    /// Flow of the host's items, consulted once at construction when
    /// [`DirectionMode::Auto`](super::DirectionMode::Auto) is configured.
    fn layout_axis_hint(&self) -> Axis {
        Axis::Vertical
    }

    /// Start a recurring timer; the host calls
    /// [`ReorderList::scroll_tick`](super::ReorderList::scroll_tick) on each
    /// fire until cancelled.
    fn start_scroll_timer(&mut self, period: Duration) -> TimerId;

    fn cancel_scroll_timer(&mut self, timer: TimerId);
}

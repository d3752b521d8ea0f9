use std::rc::Rc;

use ahash::AHashSet;
use egui::{Pos2, Vec2};
use itertools::Itertools as _;

mod autoscroll;
mod host;
mod hover;
mod integrity;
mod options;
mod placeholder;
mod session;
mod types;

#[cfg(test)]
mod hover_tests;

pub use host::ListHost;
pub use options::ReorderOptions;
pub use types::{
    Axis, DirectionMode, DragActivation, InsertionTarget, ItemDropped, ItemId, ListChild,
    PlaceholderId, ScrollParentId, ScrollRegion, TimerId,
};

use hover::{ChildSlot, HoverOutcome, SlotKind};
use options::ReorderCallbacks;
use placeholder::PlaceholderSlot;
use session::DragSession;
use types::DragDirection;

/// Drag-to-reorder a list's items, previewing the drop position with a
/// single animated placeholder and autoscrolling a scrollable ancestor near
/// its edges.
///
/// Current scope:
/// - Continuous insertion targeting: every pointer sample maps to the slot
///   the placeholder belongs in, direction-aware to keep boundaries stable.
/// - One placeholder, animated: moves are swap-with-slide transitions; only
///   the newest instance is ever addressable.
/// - Edge autoscroll: near the scroll parent's edges a 10 ms tick loop
///   scrolls and re-resolves the hover while the pointer holds still.
///
/// The engine is headless: gestures, geometry, animations and timers come
/// from the host through [`ListHost`]. Construct with
/// [`ReorderList::new`] (which wires existing items), notify
/// [`ReorderList::list_updated`] after adding items, and tear down with
/// [`ReorderList::teardown`]. One drag per container at a time; gesture
/// callbacks arriving outside a drag are silently ignored.
pub struct ReorderList {
    options: ReorderOptions,
    callbacks: ReorderCallbacks,
    axis: Axis,
    wired: AHashSet<ItemId>,
    next_session_id: u64,
    session: Option<DragSession>,
    placeholder: PlaceholderSlot,
}

impl ReorderList {
    /// Wires every item currently reported by the host and returns the
    /// engine handle. A host reporting no children yields an inert (but
    /// valid) drag surface.
    pub fn new(options: ReorderOptions, host: &mut dyn ListHost) -> Self {
        let axis = match options.direction {
            DirectionMode::Vertical => Axis::Vertical,
            DirectionMode::Horizontal => Axis::Horizontal,
            DirectionMode::Auto => host.layout_axis_hint(),
        };
        let mut list = Self {
            options,
            callbacks: ReorderCallbacks::default(),
            axis,
            wired: AHashSet::new(),
            next_session_id: 1,
            session: None,
            placeholder: PlaceholderSlot::default(),
        };
        list.wire_new_items(host);
        list
    }

    pub fn on_start(mut self, on_start: impl Fn(ItemId) + 'static) -> Self {
        self.callbacks.on_start = Some(Rc::new(on_start));
        self
    }

    pub fn on_drag(mut self, on_drag: impl Fn(ItemId, Pos2) + 'static) -> Self {
        self.callbacks.on_drag = Some(Rc::new(on_drag));
        self
    }

    /// Invoked after a committed reorder, after the host mutation.
    pub fn on_drop(mut self, on_drop: impl Fn(&ItemDropped) + 'static) -> Self {
        self.callbacks.on_drop = Some(Rc::new(on_drop));
        self
    }

    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    pub fn options(&self) -> &ReorderOptions {
        &self.options
    }

    /// Resolved layout axis of the list.
    pub fn axis(&self) -> Axis {
        self.axis
    }

    /// Re-scan for items added since construction (or the last call) and
    /// wire them. Already-wired items are left alone, so hosts may call this
    /// after every mutation.
    pub fn list_updated(&mut self, host: &mut dyn ListHost) {
        self.wire_new_items(host);
    }

    /// Unwire every registered item and abort an in-flight drag: the timer
    /// is cancelled, the placeholder dropped without animation, the hidden
    /// item revealed in place.
    pub fn teardown(&mut self, host: &mut dyn ListHost) {
        if let Some(mut session) = self.session.take() {
            session.autoscroll.stop(host);
            self.placeholder.abort(host);
            host.show_item(session.item);
            log::debug!("drag {} ABORT (teardown)", session.id);
        }
        for item in self.wired.drain() {
            host.unregister_drag_source(item);
        }
    }

    /// Gesture-start callback. Captures the item's metrics, resolves the
    /// scroll parent, opens the placeholder in the item's slot and hides the
    /// item (it stays in the child sequence; hosts may track it by id).
    pub fn drag_started(&mut self, item: ItemId, host: &mut dyn ListHost) {
        if self.session.is_some() {
            log::warn!("drag start for {item:?} ignored, a drag is already active");
            return;
        }

        let scroll_parent = host.resolve_scroll_parent();
        let outer_size = host.item_outer_size(item);
        let from_index = item_index(&host.children(), item).unwrap_or(0);

        self.placeholder.insert_initial(outer_size, item, host);
        host.hide_item(item);

        let id = self.next_session_id;
        self.next_session_id = self.next_session_id.saturating_add(1);
        self.session = Some(DragSession::begin(
            id,
            item,
            outer_size,
            from_index,
            scroll_parent,
        ));

        self.debug_check_integrity(host);
        if let Some(on_start) = &self.callbacks.on_start {
            on_start(item);
        }
    }

    /// Gesture-move callback with the helper's page offset. Autoscroll is
    /// evaluated first since it may open the tick loop that re-runs hover
    /// resolution on its own; both settle to the same state either way.
    pub fn drag_moved(&mut self, pointer: Pos2, host: &mut dyn ListHost) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        let direction = session.observe_pointer(pointer, self.axis);
        let item = session.item;
        let outer_size = session.outer_size;
        session
            .autoscroll
            .evaluate(pointer.y, outer_size.y, &self.options, host);

        self.apply_hover(pointer, direction, outer_size, host);

        self.debug_check_integrity(host);
        if let Some(on_drag) = &self.callbacks.on_drag {
            on_drag(item, pointer);
        }
    }

    /// One autoscroll timer fire: nudge the scroll offset and re-resolve the
    /// insertion point from the last pointer sample. The pointer has not
    /// moved, but the list has scrolled beneath it.
    pub fn scroll_tick(&mut self, host: &mut dyn ListHost) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        let Some(pointer) = session.last_pointer else {
            return;
        };
        let direction = session.direction();
        let outer_size = session.outer_size;
        let scrolled = session
            .autoscroll
            .tick(pointer.y, outer_size.y, &self.options, host);

        if scrolled {
            self.apply_hover(pointer, direction, outer_size, host);
            self.debug_check_integrity(host);
        }
    }

    /// Gesture-end callback. Cancels the timer unconditionally, commits the
    /// dragged item into the placeholder's slot and reports the reorder.
    /// Returns `None` when no drag was active.
    pub fn drag_ended(&mut self, host: &mut dyn ListHost) -> Option<ItemDropped> {
        let mut session = self.session.take()?;
        session.autoscroll.stop(host);

        self.placeholder.commit(session.item, host);
        let to = item_index(&host.children(), session.item).unwrap_or(session.from_index);
        let dropped = ItemDropped {
            item: session.item,
            from: session.from_index,
            to,
        };
        log::debug!(
            "drag {} DROP item={:?} from={} to={}",
            session.id,
            dropped.item,
            dropped.from,
            dropped.to
        );

        self.debug_check_integrity(host);
        if let Some(on_drop) = &self.callbacks.on_drop {
            on_drop(&dropped);
        }
        Some(dropped)
    }

    fn wire_new_items(&mut self, host: &mut dyn ListHost) {
        let activation = self.drag_activation();
        for child in host.children() {
            let ListChild::Item(item) = child else {
                continue;
            };
            if self.wired.insert(item) {
                host.register_drag_source(item, &activation);
            }
        }
    }

    fn drag_activation(&self) -> DragActivation {
        DragActivation {
            // Vertical lists lock the gesture to the vertical axis;
            // free-flowing (horizontal) layouts stay unlocked.
            axis: (self.axis == Axis::Vertical).then_some(Axis::Vertical),
            distance: self.options.drag_distance,
            ghost_opacity: self.options.ghost_opacity,
        }
    }

    fn apply_hover(
        &mut self,
        pointer: Pos2,
        direction: DragDirection,
        dragged_size: Vec2,
        host: &mut dyn ListHost,
    ) {
        let children = host.children();
        let slots = self.child_slots(&children, dragged_size, host);
        let outcome = hover::resolve_insertion(
            &slots,
            self.stack_origin(host),
            self.axis.main_pos(pointer),
            direction,
            self.axis.main_extent(dragged_size),
            self.options.active_range_ratio,
        );
        if let HoverOutcome::Move(target) = outcome {
            self.placeholder.insert_at(dragged_size, target, host);
        }
    }

    /// Page position the child stack starts at: container offset plus its
    /// leading content margin, minus what the container itself has scrolled.
    fn stack_origin(&self, host: &dyn ListHost) -> f32 {
        self.axis.main_pos(host.container_offset()) - self.axis.main_extent(host.container_scroll_offset())
            + host.container_leading_margin(self.axis)
    }

    fn child_slots(
        &self,
        children: &[ListChild],
        dragged_size: Vec2,
        host: &dyn ListHost,
    ) -> Vec<ChildSlot> {
        children
            .iter()
            .map(|child| match *child {
                ListChild::Item(item) => ChildSlot {
                    kind: SlotKind::Item(item),
                    extent: self.axis.main_extent(host.item_outer_size(item)),
                    visible: host.item_visible(item),
                },
                // The placeholder mirrors the dragged item's footprint.
                ListChild::Placeholder(_) => ChildSlot {
                    kind: SlotKind::Placeholder,
                    extent: self.axis.main_extent(dragged_size),
                    visible: true,
                },
            })
            .collect()
    }

    fn debug_check_integrity(&self, host: &dyn ListHost) {
        if !self.options.debug_integrity {
            return;
        }
        let issues = integrity::list_integrity_issues(
            &host.children(),
            self.session.as_ref().map(|session| session.item),
            self.placeholder.active(),
        );
        if issues.is_empty() {
            return;
        }
        for issue in &issues {
            log::error!("list integrity: {issue}");
        }
        if self.options.debug_integrity_panic {
            panic!("list integrity failed:\n{}", issues.join("\n"));
        }
    }
}

fn item_index(children: &[ListChild], item: ItemId) -> Option<usize> {
    children
        .iter()
        .filter_map(|child| match child {
            ListChild::Item(id) => Some(*id),
            ListChild::Placeholder(_) => None,
        })
        .find_position(|id| *id == item)
        .map(|(ix, _)| ix)
}

use super::types::{DragDirection, InsertionTarget, ItemId};

/// One child of the container as the hover scan sees it: its identity, its
/// outer extent on the main axis, and whether it occupies visual space.
#[derive(Clone, Copy, Debug)]
pub(crate) struct ChildSlot {
    pub(crate) kind: SlotKind,
    pub(crate) extent: f32,
    pub(crate) visible: bool,
}

#[derive(Clone, Copy, Debug)]
pub(crate) enum SlotKind {
    Item(ItemId),
    Placeholder,
}

/// What the resolver decided for the current sample.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum HoverOutcome {
    /// Move the placeholder to this slot.
    Move(InsertionTarget),
    /// The placeholder already sits where it belongs (or nothing below the
    /// pointer can match). Absence of a match is a valid, silent outcome.
    Keep,
}

/// Map a pointer sample to the slot the placeholder belongs in.
///
/// Walks `children` in document order, accumulating a running stack height
/// from `stack_origin` (container content top, scroll deducted). Hidden
/// items occupy no space and are never candidates; the placeholder occupies
/// space but is never a candidate. Each visible item gets a hit zone of
/// `extent * active_range_ratio` at its edges:
///
/// - moving up (or with no travel observed), the raw pointer position is
///   tested against the item's leading edge;
/// - moving down, the dragged item's projected trailing edge
///   (`pointer + dragged_extent`) is tested against a window around the
///   item's trailing edge: the test follows where the dragged item would
///   land, not where the cursor is.
///
/// Once the running stack passes the dragged trailing edge the scan stops:
/// every remaining window lies further down than the dragged item reaches.
/// A scan that runs out of children falls back to "append as last".
pub(crate) fn resolve_insertion(
    children: &[ChildSlot],
    stack_origin: f32,
    pointer_main: f32,
    direction: DragDirection,
    dragged_extent: f32,
    active_range_ratio: f32,
) -> HoverOutcome {
    let mut stack = stack_origin;
    let dragged_trailing = pointer_main + dragged_extent;

    for (ix, child) in children.iter().enumerate() {
        let SlotKind::Item(item) = child.kind else {
            stack += child.extent;
            continue;
        };
        if !child.visible {
            continue;
        }

        let threshold = child.extent * active_range_ratio;

        if direction.tests_leading_edge() && pointer_main < stack + threshold {
            if placeholder_at(children, ix.wrapping_sub(1)) {
                return HoverOutcome::Keep;
            }
            return HoverOutcome::Move(InsertionTarget::Before(item));
        }

        stack += child.extent;

        if direction.tests_trailing_edge()
            && dragged_trailing > stack - threshold
            && dragged_trailing < stack + threshold
        {
            if placeholder_at(children, ix + 1) {
                return HoverOutcome::Keep;
            }
            return HoverOutcome::Move(InsertionTarget::After(item));
        }

        if dragged_trailing < stack {
            return HoverOutcome::Keep;
        }
    }

    if placeholder_at(children, children.len().wrapping_sub(1)) {
        return HoverOutcome::Keep;
    }
    HoverOutcome::Move(InsertionTarget::Last)
}

fn placeholder_at(children: &[ChildSlot], ix: usize) -> bool {
    children
        .get(ix)
        .is_some_and(|child| matches!(child.kind, SlotKind::Placeholder))
}

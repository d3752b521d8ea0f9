use super::hover::{resolve_insertion, ChildSlot, HoverOutcome, SlotKind};
use super::types::{DragDirection, InsertionTarget, ItemId};

const ROW: f32 = 30.0;
const RATIO: f32 = 0.3;

fn item(id: &str) -> ChildSlot {
    ChildSlot {
        kind: SlotKind::Item(ItemId::new(id)),
        extent: ROW,
        visible: true,
    }
}

fn hidden(id: &str) -> ChildSlot {
    ChildSlot {
        visible: false,
        ..item(id)
    }
}

fn placeholder() -> ChildSlot {
    ChildSlot {
        kind: SlotKind::Placeholder,
        extent: ROW,
        visible: true,
    }
}

fn resolve(children: &[ChildSlot], pointer: f32, direction: DragDirection) -> HoverOutcome {
    resolve_insertion(children, 0.0, pointer, direction, ROW, RATIO)
}

fn before(id: &str) -> HoverOutcome {
    HoverOutcome::Move(InsertionTarget::Before(ItemId::new(id)))
}

fn after(id: &str) -> HoverOutcome {
    HoverOutcome::Move(InsertionTarget::After(ItemId::new(id)))
}

#[test]
fn leading_edge_hit_inserts_before_candidate() {
    let children = [item("a"), item("b"), item("c")];
    // Threshold is 9; b's leading edge sits at 30.
    assert_eq!(
        resolve(&children, 38.9, DragDirection::Up),
        before("b")
    );
    assert_eq!(resolve(&children, 5.0, DragDirection::Up), before("a"));
}

#[test]
fn trailing_edge_hit_keys_on_dragged_bottom() {
    let children = [item("a"), item("b"), item("c")];
    // Pointer 35 puts the dragged bottom at 65, inside the window around
    // b's trailing edge (60 ± 9).
    assert_eq!(
        resolve(&children, 35.0, DragDirection::Down),
        after("b")
    );
    // Raw pointer 8 sits in a's leading zone, but moving down only the
    // projected bottom (38, inside 30 ± 9) is consulted.
    assert_eq!(resolve(&children, 8.0, DragDirection::Down), after("a"));
}

#[test]
fn moving_down_skips_leading_edges() {
    let children = [item("a"), item("b"), item("c")];
    // 38.9 would hit b's leading zone moving up; moving down it resolves
    // through the trailing-edge window of b (bottom 68.9, window 60 ± 9).
    assert_eq!(
        resolve(&children, 38.9, DragDirection::Down),
        after("b")
    );
}

#[test]
fn hidden_items_occupy_no_space() {
    let children = [hidden("a"), item("b"), item("c")];
    // With a hidden, b's stack starts at the container origin.
    assert_eq!(resolve(&children, 5.0, DragDirection::Up), before("b"));
}

#[test]
fn placeholder_occupies_space_but_is_not_a_candidate() {
    let children = [placeholder(), item("a"), item("b")];
    // The placeholder pushes a down to 30; hitting a's leading zone with
    // the placeholder right before it is a no-op.
    assert_eq!(resolve(&children, 35.0, DragDirection::Up), HoverOutcome::Keep);
    // b's leading zone still resolves normally.
    assert_eq!(resolve(&children, 65.0, DragDirection::Up), before("b"));
}

#[test]
fn resolution_is_idempotent_at_a_settled_slot() {
    let children = [item("a"), placeholder(), item("b"), item("c")];
    assert_eq!(resolve(&children, 38.0, DragDirection::Up), HoverOutcome::Keep);
    assert_eq!(resolve(&children, 38.0, DragDirection::Up), HoverOutcome::Keep);
}

#[test]
fn scan_stops_once_stack_passes_dragged_bottom() {
    let children = [item("a"), item("b"), item("c")];
    // A short dragged item (10): at pointer 45 its bottom (55) is passed by
    // b's trailing edge (60), so nothing below can match; without the early
    // exit this would reach c's leading zone.
    assert_eq!(
        resolve_insertion(&children, 0.0, 45.0, DragDirection::Up, 10.0, RATIO),
        HoverOutcome::Keep
    );
}

#[test]
fn no_match_below_last_item_appends_last() {
    let children = [item("a"), item("b"), item("c")];
    for direction in [DragDirection::Up, DragDirection::Unknown, DragDirection::Down] {
        assert_eq!(
            resolve(&children, 150.0, direction),
            HoverOutcome::Move(InsertionTarget::Last)
        );
    }
}

#[test]
fn append_is_idempotent_when_placeholder_already_last() {
    let children = [item("a"), item("b"), item("c"), placeholder()];
    assert_eq!(resolve(&children, 150.0, DragDirection::Down), HoverOutcome::Keep);
}

#[test]
fn unknown_direction_tests_both_edges() {
    let children = [item("a"), item("b"), item("c")];
    assert_eq!(resolve(&children, 5.0, DragDirection::Unknown), before("a"));
    // A shorter dragged item (10): a's leading zone misses at pointer 15,
    // but the projected bottom (25) is inside a's trailing window.
    assert_eq!(
        resolve_insertion(&children, 0.0, 15.0, DragDirection::Unknown, 10.0, RATIO),
        after("a")
    );
}

#[test]
fn empty_child_list_appends_last() {
    assert_eq!(
        resolve(&[], 10.0, DragDirection::Unknown),
        HoverOutcome::Move(InsertionTarget::Last)
    );
}

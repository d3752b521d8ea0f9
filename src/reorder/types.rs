use egui::{Pos2, Vec2};

/// Stable identity of a reorderable item, assigned by the host.
///
/// Identity must stay valid for the whole drag: the engine hides the dragged
/// item rather than removing it, so hosts that track their rows by id keep
/// working.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ItemId(pub egui::Id);

impl ItemId {
    pub fn new(source: impl std::hash::Hash) -> Self {
        Self(egui::Id::new(source))
    }
}

/// Identity of the scroll parent resolved by the host at drag start.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ScrollParentId(pub egui::Id);

/// Serial handle of a placeholder instance. Allocated by the engine; the
/// host keys its animations and node bookkeeping on it.
pub type PlaceholderId = u64;

/// Handle of a recurring timer started through the host timer service.
pub type TimerId = u64;

/// One entry of the container's child sequence, in document order.
///
/// `ListHost::children` must report the live placeholder here, and only the
/// live one: instances still playing their exit animation are gone as far
/// as the engine is concerned.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListChild {
    Item(ItemId),
    Placeholder(PlaceholderId),
}

/// Sibling-relative location where the placeholder (or the committed item)
/// should sit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InsertionTarget {
    Before(ItemId),
    After(ItemId),
    Last,
}

/// Layout direction of the list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DirectionMode {
    /// Ask the host for the flow of its items once at construction.
    #[default]
    Auto,
    Vertical,
    Horizontal,
}

/// The resolved main axis items are stacked along.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Axis {
    Vertical,
    Horizontal,
}

impl Axis {
    pub(crate) fn main_pos(self, pos: Pos2) -> f32 {
        match self {
            Self::Vertical => pos.y,
            Self::Horizontal => pos.x,
        }
    }

    pub(crate) fn main_extent(self, size: Vec2) -> f32 {
        match self {
            Self::Vertical => size.y,
            Self::Horizontal => size.x,
        }
    }
}

/// Sign of the pointer's main-axis travel between consecutive samples.
///
/// Splitting the hit test by direction is what keeps the placeholder from
/// oscillating between two adjacent slots while hovering a boundary.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DragDirection {
    Up,
    /// No travel observed yet (first sample of the drag).
    #[default]
    Unknown,
    Down,
}

impl DragDirection {
    pub(crate) fn from_delta(delta: f32) -> Self {
        if delta < 0.0 {
            Self::Up
        } else if delta > 0.0 {
            Self::Down
        } else {
            Self::Unknown
        }
    }

    /// Leading-edge (insert-before) tests run unless the pointer is moving
    /// strictly down.
    pub(crate) fn tests_leading_edge(self) -> bool {
        !matches!(self, Self::Down)
    }

    /// Trailing-edge (insert-after) tests run unless the pointer is moving
    /// strictly up.
    pub(crate) fn tests_trailing_edge(self) -> bool {
        !matches!(self, Self::Up)
    }
}

/// Parameters the host forwards to its gesture source when wiring an item.
#[derive(Clone, Copy, Debug)]
pub struct DragActivation {
    /// Lock the gesture to this axis, if any. Vertical lists lock to the
    /// vertical axis; free-flowing layouts stay unlocked.
    pub axis: Option<Axis>,
    /// Pointer travel in points before the gesture source starts the drag.
    pub distance: f32,
    /// Opacity the gesture source applies to the drag ghost/helper.
    pub ghost_opacity: f32,
}

/// Emitted after a successful reorder.
///
/// `from` and `to` are the item's indices among items (placeholder and
/// nothing else excluded) before the drag and after the drop.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ItemDropped {
    pub item: ItemId,
    pub from: usize,
    pub to: usize,
}

/// Viewport box of the scroll parent, in the same page coordinates as
/// pointer samples. The box itself does not move while its content scrolls.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollRegion {
    pub top: f32,
    pub height: f32,
}

impl ScrollRegion {
    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }
}

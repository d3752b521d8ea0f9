#![forbid(unsafe_code)]

pub mod reorder;

pub use reorder::{
    Axis, DirectionMode, DragActivation, InsertionTarget, ItemDropped, ItemId, ListChild,
    ListHost, PlaceholderId, ReorderList, ReorderOptions, ScrollParentId, ScrollRegion, TimerId,
};

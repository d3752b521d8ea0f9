use egui::Vec2;

use super::host::ListHost;
use super::types::{InsertionTarget, ItemId, PlaceholderId};

/// Owner of the single live placeholder.
///
/// At most one placeholder is addressable at any instant. Moving it is a
/// swap: the outgoing node is handed to the host's exit animation
/// (fire-and-forget) and a fresh node takes the new slot, so the old one may
/// still be visible mid-animation while the new one is already live.
#[derive(Debug, Default)]
pub(crate) struct PlaceholderSlot {
    active: Option<PlaceholderId>,
    next_serial: u64,
}

impl PlaceholderSlot {
    pub(crate) fn active(&self) -> Option<PlaceholderId> {
        self.active
    }

    fn allocate(&mut self) -> PlaceholderId {
        let serial = self.next_serial.max(1);
        self.next_serial = serial.saturating_add(1);
        serial
    }

    /// The placeholder opening a drag, inserted right after the item about
    /// to be hidden. No entrance animation: the list has not visually
    /// changed yet.
    pub(crate) fn insert_initial(
        &mut self,
        size: Vec2,
        after: ItemId,
        host: &mut dyn ListHost,
    ) -> PlaceholderId {
        debug_assert!(self.active.is_none(), "placeholder already live at drag start");
        let id = self.allocate();
        host.insert_placeholder(id, size, InsertionTarget::After(after));
        self.active = Some(id);
        id
    }

    /// Animated move: slide the outgoing placeholder away and slide a fresh
    /// one in at `target`.
    pub(crate) fn insert_at(
        &mut self,
        size: Vec2,
        target: InsertionTarget,
        host: &mut dyn ListHost,
    ) -> PlaceholderId {
        if let Some(outgoing) = self.active.take() {
            host.slide_out_then_remove(outgoing);
        }
        let id = self.allocate();
        host.insert_placeholder(id, size, target);
        host.slide_in(id);
        self.active = Some(id);
        log::trace!("placeholder {id} -> {target:?}");
        id
    }

    /// Commit the drop: reveal the dragged item, move it into the
    /// placeholder's slot, and drop the placeholder without animation.
    pub(crate) fn commit(&mut self, item: ItemId, host: &mut dyn ListHost) {
        let Some(active) = self.active.take() else {
            return;
        };
        host.show_item(item);
        host.move_item_after_placeholder(item, active);
        host.remove_placeholder(active);
    }

    /// Abandon the preview without committing (teardown mid-drag).
    pub(crate) fn abort(&mut self, host: &mut dyn ListHost) {
        if let Some(active) = self.active.take() {
            host.remove_placeholder(active);
        }
    }
}

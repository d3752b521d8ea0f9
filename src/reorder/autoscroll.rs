use std::time::Duration;

use super::host::ListHost;
use super::options::ReorderOptions;
use super::types::{ScrollParentId, ScrollRegion, TimerId};

/// Fixed period of the autoscroll tick loop.
pub(crate) const SCROLL_TICK_PERIOD: Duration = Duration::from_millis(10);

/// Edge-proximity autoscroll for the scroll parent resolved at drag start.
///
/// Two states, `Idle ⇄ Scrolling`, encoded by the timer handle: while
/// scrolling, a recurring timer nudges the scroll offset every tick and the
/// coordinator re-resolves the hover from the last pointer sample (the
/// pointer holds still, the list moves beneath it). The timer is the only
/// cancellable ongoing operation in the engine; it is cancelled exactly once
/// per `Scrolling → Idle` transition, so two timers can never run at once.
///
/// With no scroll parent resolved, the controller is a permanent no-op for
/// the drag.
#[derive(Debug)]
pub(crate) struct AutoscrollController {
    scroll_parent: Option<ScrollParentId>,
    timer: Option<TimerId>,
}

impl AutoscrollController {
    pub(crate) fn new(scroll_parent: Option<ScrollParentId>) -> Self {
        Self {
            scroll_parent,
            timer: None,
        }
    }

    /// Re-check edge proximity for the current sample; start or stop the
    /// tick loop accordingly. Re-entering while already scrolling is a
    /// no-op.
    pub(crate) fn evaluate(
        &mut self,
        pointer_top: f32,
        dragged_height: f32,
        options: &ReorderOptions,
        host: &mut dyn ListHost,
    ) {
        let Some(parent) = self.scroll_parent else {
            return;
        };
        let region = host.scroll_region(parent);
        let velocity = edge_velocity(pointer_top, pointer_top + dragged_height, region, options);

        match (velocity, self.timer) {
            (Some(v), None) => {
                self.timer = Some(host.start_scroll_timer(SCROLL_TICK_PERIOD));
                log::trace!("autoscroll start, velocity {v:.1}");
            }
            (None, Some(timer)) => {
                self.timer = None;
                host.cancel_scroll_timer(timer);
                log::trace!("autoscroll stop");
            }
            _ => {}
        }
    }

    /// One timer fire: apply the current velocity to the scroll offset.
    /// Returns whether a scroll step was applied (the caller re-resolves the
    /// hover if so). Leaves `Scrolling` if the trigger no longer holds.
    pub(crate) fn tick(
        &mut self,
        pointer_top: f32,
        dragged_height: f32,
        options: &ReorderOptions,
        host: &mut dyn ListHost,
    ) -> bool {
        let Some(parent) = self.scroll_parent else {
            return false;
        };
        if self.timer.is_none() {
            return false;
        }

        let region = host.scroll_region(parent);
        let Some(velocity) = edge_velocity(pointer_top, pointer_top + dragged_height, region, options)
        else {
            self.stop(host);
            return false;
        };

        let offset = host.scroll_offset(parent);
        host.set_scroll_offset(parent, offset + velocity);
        true
    }

    /// Cancel the tick loop if it is running. Idempotent; called on every
    /// `Scrolling → Idle` transition and unconditionally at gesture end.
    pub(crate) fn stop(&mut self, host: &mut dyn ListHost) {
        if let Some(timer) = self.timer.take() {
            host.cancel_scroll_timer(timer);
            log::trace!("autoscroll stop");
        }
    }
}

/// Signed autoscroll velocity for the current sample, or `None` outside both
/// trigger zones.
///
/// The top zone triggers on the raw pointer, the bottom zone on the dragged
/// item's projected bottom edge. `distance_into_margin` is 0 at the zone
/// boundary and `scroll_margin` at the container edge;
/// `speed = scroll_speed * min((d / margin) ^ curve, 1)` ramps from
/// imperceptible to full speed across the zone. The top edge is checked
/// first; a parent shorter than two margins cannot trigger both directions
/// at once.
pub(crate) fn edge_velocity(
    pointer_top: f32,
    dragged_bottom: f32,
    region: ScrollRegion,
    options: &ReorderOptions,
) -> Option<f32> {
    let margin = options.scroll_margin;
    if margin <= 0.0 {
        return None;
    }

    let into_top = (region.top + margin) - pointer_top;
    if into_top > 0.0 {
        return Some(-ramped_speed(into_top, options));
    }

    let into_bottom = dragged_bottom - (region.bottom() - margin);
    if into_bottom > 0.0 {
        return Some(ramped_speed(into_bottom, options));
    }

    None
}

fn ramped_speed(distance_into_margin: f32, options: &ReorderOptions) -> f32 {
    let ratio = (distance_into_margin / options.scroll_margin).clamp(0.0, 1.0);
    options.scroll_speed * ratio.powf(options.scroll_curve).min(1.0)
}

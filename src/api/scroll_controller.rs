use tracing::{debug, trace};

use crate::core::{ScrollBehavior, TimerKind};
use crate::error::CarouselResult;
use crate::extensions::CarouselEvent;
use crate::surface::ScrollSurface;

use super::CarouselController;

impl<S: ScrollSurface> CarouselController<S> {
    /// Handles a scroll event from any source.
    ///
    /// Enters the manual-scroll cooldown and restarts both the cooldown
    /// debounce and the boundary settle timer.
    pub fn on_scroll(&mut self, now_ms: u64) {
        self.advance_time(now_ms);
        self.interaction.on_scroll();

        let debounce_ms = self.config.manual_scroll_debounce_ms;
        self.scroll_debounce = Some(self.replace_timer(
            self.scroll_debounce,
            TimerKind::ScrollDebounce,
            debounce_ms,
        ));

        let settle_ms = self.config.boundary_settle_ms;
        self.boundary_settle = Some(self.replace_timer(
            self.boundary_settle,
            TimerKind::BoundarySettle,
            settle_ms,
        ));
    }

    pub(super) fn on_scroll_debounce_elapsed(&mut self) {
        self.scroll_debounce = None;
        self.interaction.on_scroll_settled();
        trace!(carousel = %self.id, "manual scroll cooldown cleared");
    }

    /// Snaps back to the start when the offset settled near the end of the
    /// full scrollable width. Skipped while a drag is in progress.
    pub(super) fn run_boundary_check(&mut self) {
        if self.interaction.drag().is_some() {
            trace!(carousel = %self.id, "boundary check skipped during drag");
            return;
        }
        match self.try_boundary_snap_back() {
            Ok(Some(from_offset)) => {
                debug!(carousel = %self.id, from_offset, "boundary snap-back");
                self.emit_event(CarouselEvent::BoundarySnapBack { from_offset });
            }
            Ok(None) => {}
            Err(err) => {
                debug!(carousel = %self.id, error = %err, "skipping boundary check");
            }
        }
    }

    fn try_boundary_snap_back(&mut self) -> CarouselResult<Option<f64>> {
        let end = self.surface.scroll_width()? - self.surface.client_width()?;
        if end <= 0.0 {
            return Ok(None);
        }
        let offset = self.surface.scroll_left()?;
        if offset < end - self.config.boundary_tolerance_px {
            return Ok(None);
        }
        self.surface.scroll_to(0.0, ScrollBehavior::Instant)?;
        Ok(Some(offset))
    }
}

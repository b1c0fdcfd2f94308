use tracing::{debug, trace};

use crate::core::{Direction, TimerKind};
use crate::extensions::CarouselEvent;
use crate::surface::ScrollSurface;

use super::CarouselController;

impl<S: ScrollSurface> CarouselController<S> {
    /// Arms the repeating auto-advance timer, cancelling any previous one.
    ///
    /// Returns `false` without arming while hover-paused or dragging.
    pub fn start_auto_advance(&mut self) -> bool {
        if let Some(timer_id) = self.auto_advance.take() {
            self.timers.cancel(timer_id);
        }
        if !self.interaction.allows_auto_advance_start() {
            trace!(carousel = %self.id, mode = ?self.interaction.mode(), "auto-advance start deferred");
            return false;
        }

        let interval_ms = self.config.auto_advance_interval_ms;
        self.auto_advance = Some(self.timers.schedule_repeating(
            TimerKind::AutoAdvance,
            self.now_ms,
            interval_ms,
        ));
        debug!(carousel = %self.id, interval_ms, "auto-advance started");
        self.emit_event(CarouselEvent::AutoAdvanceStarted);
        true
    }

    /// Cancels the auto-advance timer. Safe to call when none is live.
    ///
    /// Returns `true` when a live timer was cancelled.
    pub fn stop_auto_advance(&mut self) -> bool {
        let Some(timer_id) = self.auto_advance.take() else {
            return false;
        };
        let cancelled = self.timers.cancel(timer_id);
        if cancelled {
            debug!(carousel = %self.id, "auto-advance stopped");
            self.emit_event(CarouselEvent::AutoAdvanceStopped);
        }
        cancelled
    }

    pub(super) fn on_auto_advance_tick(&mut self) {
        if !self.interaction.allows_auto_advance() {
            trace!(carousel = %self.id, mode = ?self.interaction.mode(), "auto-advance tick suppressed");
            return;
        }

        let end_slack = self.config.auto_advance_end_slack_px;
        match self.try_step(Direction::Forward, end_slack) {
            Ok(behavior) => {
                trace!(carousel = %self.id, ?behavior, "auto-advance step");
                self.emit_event(CarouselEvent::AutoAdvanced { behavior });
            }
            Err(err) => {
                debug!(carousel = %self.id, error = %err, "skipping auto-advance step");
            }
        }
    }
}

use tracing::trace;

use crate::core::{FiredTimer, TimerKind};
use crate::surface::ScrollSurface;

use super::CarouselController;

impl<S: ScrollSurface> CarouselController<S> {
    /// Moves the controller clock to `now_ms`, firing every timer due on the
    /// way in due order. Each timer observes its own due instant as the
    /// clock. A clock that moves backwards is ignored.
    ///
    /// Returns how many timers fired.
    pub fn advance_time(&mut self, now_ms: u64) -> usize {
        if now_ms < self.now_ms {
            trace!(carousel = %self.id, now_ms, clock_ms = self.now_ms, "ignoring stale clock");
            return 0;
        }

        let mut fired_count = 0;
        while let Some(fired) = self.timers.pop_due(now_ms) {
            self.now_ms = fired.fired_at_ms;
            self.dispatch_timer(fired);
            fired_count += 1;
        }
        self.now_ms = now_ms;
        fired_count
    }

    fn dispatch_timer(&mut self, fired: FiredTimer) {
        trace!(carousel = %self.id, kind = ?fired.kind, at_ms = fired.fired_at_ms, "timer fired");
        match fired.kind {
            TimerKind::AutoAdvance => {
                if self.auto_advance == Some(fired.id) {
                    self.on_auto_advance_tick();
                }
            }
            TimerKind::ScrollDebounce => self.on_scroll_debounce_elapsed(),
            TimerKind::BoundarySettle => {
                self.boundary_settle = None;
                self.run_boundary_check();
            }
            TimerKind::TouchBoundaryCheck => self.run_boundary_check(),
            TimerKind::GestureResume => {
                self.gesture_resume = None;
                self.start_auto_advance();
            }
        }
    }
}

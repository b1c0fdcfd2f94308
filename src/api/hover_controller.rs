use tracing::trace;

use crate::extensions::CarouselEvent;
use crate::surface::ScrollSurface;

use super::CarouselController;

impl<S: ScrollSurface> CarouselController<S> {
    /// Pointer entered the strip: pause and cancel auto-advance.
    pub fn on_pointer_enter(&mut self, now_ms: u64) {
        self.advance_time(now_ms);
        let entered = self.interaction.on_pointer_enter();
        self.stop_auto_advance();
        if entered {
            self.emit_event(CarouselEvent::HoverPaused);
        } else {
            trace!(carousel = %self.id, "pointer enter while already paused");
        }
    }

    /// Pointer left the strip: clear the pause and re-arm auto-advance.
    ///
    /// A repeated leave keeps the running timer instead of restarting it.
    pub fn on_pointer_leave(&mut self, now_ms: u64) {
        self.advance_time(now_ms);
        let left = self.interaction.on_pointer_leave();
        if left {
            self.emit_event(CarouselEvent::HoverResumed);
        }
        if left || !self.is_auto_advance_active() {
            self.start_auto_advance();
        } else {
            trace!(carousel = %self.id, "pointer leave while already running");
        }
    }
}

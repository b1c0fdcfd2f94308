use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::core::{ScrollBehavior, TimerKind};
use crate::error::CarouselResult;
use crate::extensions::CarouselEvent;
use crate::interaction::{AxisLock, DragState, TouchPoint};
use crate::surface::ScrollSurface;

use super::CarouselController;
use super::validation::validate_touch_point;

/// Host-facing result of a touch move.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TouchMoveOutcome {
    /// The host should cancel the page's default (vertical) scroll.
    pub prevent_default: bool,
    /// Offset applied to the strip by this move, if any.
    pub scroll_left: Option<f64>,
}

impl<S: ScrollSurface> CarouselController<S> {
    /// Begins a drag: records the start point and offset, cancels
    /// auto-advance and any pending post-gesture resume.
    pub fn on_touch_start(&mut self, point: TouchPoint, now_ms: u64) {
        self.advance_time(now_ms);
        let start_offset = match validate_touch_point(point)
            .and_then(|_| self.surface.scroll_left())
        {
            Ok(offset) => offset,
            Err(err) => {
                debug!(carousel = %self.id, error = %err, "ignoring touch start");
                return;
            }
        };

        if let Some(timer_id) = self.gesture_resume.take() {
            self.timers.cancel(timer_id);
        }
        self.stop_auto_advance();
        self.interaction.on_touch_start(point, start_offset);
        trace!(carousel = %self.id, x = point.x, y = point.y, start_offset, "drag started");
        self.emit_event(CarouselEvent::DragStarted);
    }

    /// Tracks finger travel. Once the gesture locks horizontal the strip
    /// follows the finger scaled by `touch_sensitivity`; vertical and
    /// undecided gestures leave both the strip and page scroll alone.
    pub fn on_touch_move(&mut self, point: TouchPoint, now_ms: u64) -> TouchMoveOutcome {
        self.advance_time(now_ms);
        if let Err(err) = validate_touch_point(point) {
            debug!(carousel = %self.id, error = %err, "ignoring touch move");
            return TouchMoveOutcome::default();
        }
        let threshold = self.config.axis_lock_threshold_px;
        let Some(drag) = self.interaction.on_touch_move(point, threshold) else {
            return TouchMoveOutcome::default();
        };
        if drag.axis_lock != AxisLock::Horizontal {
            return TouchMoveOutcome::default();
        }

        let target = drag.start_offset - drag.delta_x(point) * self.config.touch_sensitivity;
        match self.surface.scroll_to(target, ScrollBehavior::Instant) {
            Ok(()) => TouchMoveOutcome {
                prevent_default: true,
                scroll_left: Some(target),
            },
            Err(err) => {
                debug!(carousel = %self.id, error = %err, "dropping drag move");
                TouchMoveOutcome::default()
            }
        }
    }

    /// Ends a drag. A horizontal swipe whose net displacement exceeds
    /// `swipe_snap_threshold_px` snaps to the neighboring item in the swipe
    /// direction. Auto-advance resumes after `gesture_resume_delay_ms`.
    pub fn on_touch_end(&mut self, point: TouchPoint, now_ms: u64) {
        self.advance_time(now_ms);
        let Some(drag) = self.interaction.on_touch_end() else {
            trace!(carousel = %self.id, "touch end without active drag");
            return;
        };

        let horizontal = drag.axis_lock == AxisLock::Horizontal;
        if horizontal {
            match self.try_swipe_snap(drag, point) {
                Ok(Some(target_index)) => {
                    self.emit_event(CarouselEvent::SwipeSnapped { target_index });
                }
                Ok(None) => {}
                Err(err) => {
                    debug!(carousel = %self.id, error = %err, "skipping swipe snap");
                }
            }
        }

        let resume_ms = self.config.gesture_resume_delay_ms;
        self.gesture_resume =
            Some(self.replace_timer(self.gesture_resume, TimerKind::GestureResume, resume_ms));
        let check_ms = self.config.touch_boundary_check_ms;
        self.timers
            .schedule_once(TimerKind::TouchBoundaryCheck, self.now_ms, check_ms);

        self.emit_event(CarouselEvent::DragEnded { horizontal });
    }

    fn try_swipe_snap(&mut self, drag: DragState, point: TouchPoint) -> CarouselResult<Option<usize>> {
        let point = validate_touch_point(point)?;
        let delta_x = drag.delta_x(point);
        if delta_x.abs() <= self.config.swipe_snap_threshold_px {
            return Ok(None);
        }

        let layout = self.layout()?;
        let current = layout.nearest_item_index(self.surface.scroll_left()?);
        let target_index = if delta_x > 0.0 {
            current.saturating_sub(1)
        } else {
            current + 1
        };
        self.surface
            .scroll_to(layout.item_offset(target_index), ScrollBehavior::Smooth)?;
        trace!(carousel = %self.id, delta_x, current, target_index, "swipe snap");
        Ok(Some(target_index))
    }
}

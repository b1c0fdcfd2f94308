use tracing::{debug, trace};

use crate::core::{Direction, ScrollBehavior, StepPlan};
use crate::error::CarouselResult;
use crate::extensions::CarouselEvent;
use crate::surface::ScrollSurface;

use super::CarouselController;

impl<S: ScrollSurface> CarouselController<S> {
    /// Appends the trailing clone of the first item once per surface.
    ///
    /// Returns `true` only when this call appended the clone. Later calls,
    /// and calls against a surface that already carries the loop marker,
    /// are no-ops.
    pub fn prepare_infinite_loop(&mut self) -> bool {
        if self.loop_prepared {
            return false;
        }
        match self.try_prepare_infinite_loop() {
            Ok(cloned) => {
                self.emit_event(CarouselEvent::LoopPrepared { cloned });
                cloned
            }
            Err(err) => {
                debug!(carousel = %self.id, error = %err, "skipping infinite loop setup");
                false
            }
        }
    }

    fn try_prepare_infinite_loop(&mut self) -> CarouselResult<bool> {
        if self.surface.is_loop_prepared()? {
            self.clone_appended = self.surface.child_count()? > 0;
            self.loop_prepared = true;
            return Ok(false);
        }

        let cloned = self.surface.append_first_item_clone()?;
        self.clone_appended = cloned;
        self.loop_prepared = true;
        if let Err(err) = self.surface.mark_loop_prepared() {
            debug!(carousel = %self.id, error = %err, "loop marker not recorded on surface");
        }
        Ok(cloned)
    }

    /// Button-driven step. Wraps instantly at either seam and animates
    /// otherwise. Not gated by hover pause or scroll cooldown.
    pub fn step(&mut self, direction: Direction) {
        match self.try_step(direction, 0.0) {
            Ok(behavior) => {
                trace!(carousel = %self.id, ?direction, ?behavior, "manual step");
                self.emit_event(CarouselEvent::Stepped {
                    direction,
                    behavior,
                });
            }
            Err(err) => {
                debug!(carousel = %self.id, error = %err, "skipping manual step");
            }
        }
    }

    /// Step from a navigation button literal (`1` / `-1`). Other literals
    /// are ignored.
    pub fn step_by_literal(&mut self, step: i32) {
        match Direction::from_step(step) {
            Some(direction) => self.step(direction),
            None => debug!(carousel = %self.id, step, "ignoring unknown step literal"),
        }
    }

    pub(super) fn try_step(
        &mut self,
        direction: Direction,
        end_slack: f64,
    ) -> CarouselResult<ScrollBehavior> {
        let layout = self.layout()?;
        let offset = self.surface.scroll_left()?;
        let plan = layout.plan_step(direction, offset, end_slack);
        self.apply_step_plan(plan)
    }

    fn apply_step_plan(&mut self, plan: StepPlan) -> CarouselResult<ScrollBehavior> {
        match plan {
            StepPlan::JumpTo(left) => {
                self.surface.scroll_to(left, ScrollBehavior::Instant)?;
                Ok(ScrollBehavior::Instant)
            }
            StepPlan::ScrollBy(delta) => {
                self.surface.scroll_by(delta, ScrollBehavior::Smooth)?;
                Ok(ScrollBehavior::Smooth)
            }
        }
    }
}

use serde::{Deserialize, Serialize};

/// Navigation direction along the strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    /// Maps the literal passed by navigation buttons: `1` forward, `-1` backward.
    ///
    /// Any other literal yields `None`.
    #[must_use]
    pub fn from_step(step: i32) -> Option<Self> {
        match step {
            1 => Some(Self::Forward),
            -1 => Some(Self::Backward),
            _ => None,
        }
    }

    /// Unit sign of a relative step along the strip.
    #[must_use]
    pub fn sign(self) -> f64 {
        match self {
            Self::Forward => 1.0,
            Self::Backward => -1.0,
        }
    }
}

/// How a scroll command reaches its target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScrollBehavior {
    /// Jump without animation. Used at wraparound seams.
    Instant,
    /// Animated scroll handled by the host container.
    Smooth,
}

/// Scroll command resolved for one navigation step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum StepPlan {
    /// Instant jump to an absolute offset (wraparound seam).
    JumpTo(f64),
    /// Smooth relative scroll by a signed distance.
    ScrollBy(f64),
}

/// Geometry of one looping strip: the real cards plus an optional trailing
/// clone of the first card.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StripLayout {
    item_width: f64,
    real_item_count: usize,
    clone_appended: bool,
}

impl StripLayout {
    /// Builds a layout from the container's child count.
    ///
    /// When `clone_appended` is set the last child is the clone and does not
    /// count as a real item.
    #[must_use]
    pub fn new(item_width: f64, child_count: usize, clone_appended: bool) -> Self {
        let real_item_count = if clone_appended {
            child_count.saturating_sub(1)
        } else {
            child_count
        };
        Self {
            item_width,
            real_item_count,
            clone_appended,
        }
    }

    #[must_use]
    pub fn item_width(self) -> f64 {
        self.item_width
    }

    #[must_use]
    pub fn real_item_count(self) -> usize {
        self.real_item_count
    }

    #[must_use]
    pub fn clone_appended(self) -> bool {
        self.clone_appended
    }

    #[must_use]
    pub fn child_count(self) -> usize {
        self.real_item_count + usize::from(self.clone_appended)
    }

    /// Offset of the last real item: `(real_item_count - 1) * item_width`.
    #[must_use]
    pub fn max_scroll(self) -> f64 {
        self.real_item_count.saturating_sub(1) as f64 * self.item_width
    }

    #[must_use]
    pub fn item_offset(self, index: usize) -> f64 {
        index as f64 * self.item_width
    }

    /// Index of the item whose leading edge is closest to `offset`.
    #[must_use]
    pub fn nearest_item_index(self, offset: f64) -> usize {
        if !offset.is_finite() || offset <= 0.0 || self.item_width <= 0.0 {
            return 0;
        }
        (offset / self.item_width).round() as usize
    }

    /// Resolves one step from `offset`.
    ///
    /// `end_slack` widens the forward end check so that an offset within
    /// `end_slack` of `max_scroll` already counts as the end. Manual steps
    /// pass `0.0`.
    #[must_use]
    pub fn plan_step(self, direction: Direction, offset: f64, end_slack: f64) -> StepPlan {
        let max_scroll = self.max_scroll();
        match direction {
            Direction::Forward if offset >= max_scroll - end_slack => StepPlan::JumpTo(0.0),
            Direction::Backward if offset <= 0.0 => StepPlan::JumpTo(max_scroll),
            _ => StepPlan::ScrollBy(direction.sign() * self.item_width),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Direction, StepPlan, StripLayout};

    #[test]
    fn clone_is_excluded_from_real_item_count() {
        let layout = StripLayout::new(350.0, 5, true);
        assert_eq!(layout.real_item_count(), 4);
        assert_eq!(layout.child_count(), 5);
        assert!((layout.max_scroll() - 1050.0).abs() <= 1e-9);
    }

    #[test]
    fn empty_and_single_item_strips_have_zero_max_scroll() {
        assert_eq!(StripLayout::new(350.0, 0, false).max_scroll(), 0.0);
        assert_eq!(StripLayout::new(350.0, 2, true).max_scroll(), 0.0);
    }

    #[test]
    fn forward_plan_jumps_at_end_and_scrolls_before_it() {
        let layout = StripLayout::new(350.0, 4, true);
        assert_eq!(
            layout.plan_step(Direction::Forward, 700.0, 0.0),
            StepPlan::JumpTo(0.0)
        );
        assert_eq!(
            layout.plan_step(Direction::Forward, 650.0, 0.0),
            StepPlan::ScrollBy(350.0)
        );
        assert_eq!(
            layout.plan_step(Direction::Forward, 695.0, 10.0),
            StepPlan::JumpTo(0.0)
        );
    }

    #[test]
    fn backward_plan_wraps_to_last_real_item() {
        let layout = StripLayout::new(350.0, 4, true);
        assert_eq!(
            layout.plan_step(Direction::Backward, 0.0, 0.0),
            StepPlan::JumpTo(700.0)
        );
        assert_eq!(
            layout.plan_step(Direction::Backward, 350.0, 0.0),
            StepPlan::ScrollBy(-350.0)
        );
    }

    #[test]
    fn nearest_index_rounds_half_up() {
        let layout = StripLayout::new(350.0, 6, true);
        assert_eq!(layout.nearest_item_index(174.0), 0);
        assert_eq!(layout.nearest_item_index(175.0), 1);
        assert_eq!(layout.nearest_item_index(-40.0), 0);
    }

    #[test]
    fn button_literals_map_to_directions() {
        assert_eq!(Direction::from_step(1), Some(Direction::Forward));
        assert_eq!(Direction::from_step(-1), Some(Direction::Backward));
        assert_eq!(Direction::from_step(0), None);
        assert_eq!(Direction::from_step(2), None);
    }
}

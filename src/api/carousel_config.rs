use serde::{Deserialize, Serialize};

pub const DEFAULT_ITEM_WIDTH_PX: f64 = 350.0;
pub const DEFAULT_AUTO_ADVANCE_INTERVAL_MS: u64 = 1_500;
pub const DEFAULT_MANUAL_SCROLL_DEBOUNCE_MS: u64 = 150;
pub const DEFAULT_BOUNDARY_SETTLE_MS: u64 = 100;
pub const DEFAULT_TOUCH_BOUNDARY_CHECK_MS: u64 = 300;
pub const DEFAULT_GESTURE_RESUME_DELAY_MS: u64 = 2_000;
pub const DEFAULT_SWIPE_SNAP_THRESHOLD_PX: f64 = 50.0;
pub const DEFAULT_AXIS_LOCK_THRESHOLD_PX: f64 = 10.0;
pub const DEFAULT_TOUCH_SENSITIVITY: f64 = 1.5;
pub const DEFAULT_AUTO_ADVANCE_END_SLACK_PX: f64 = 10.0;
pub const DEFAULT_BOUNDARY_TOLERANCE_PX: f64 = 20.0;

/// Per-instance carousel configuration.
///
/// Serializable so hosts can ship it alongside page markup. Missing fields
/// fall back to the defaults above.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CarouselConfig {
    /// Advance distance per step (card width plus gap).
    #[serde(default = "default_item_width_px")]
    pub item_width_px: f64,
    #[serde(default = "default_auto_advance_interval_ms")]
    pub auto_advance_interval_ms: u64,
    /// Quiet period after the last scroll event before auto-advance may tick.
    #[serde(default = "default_manual_scroll_debounce_ms")]
    pub manual_scroll_debounce_ms: u64,
    /// Quiet period after the last scroll event before the boundary check.
    #[serde(default = "default_boundary_settle_ms")]
    pub boundary_settle_ms: u64,
    #[serde(default = "default_touch_boundary_check_ms")]
    pub touch_boundary_check_ms: u64,
    #[serde(default = "default_gesture_resume_delay_ms")]
    pub gesture_resume_delay_ms: u64,
    /// Net horizontal displacement a swipe must exceed to snap to a neighbor.
    #[serde(default = "default_swipe_snap_threshold_px")]
    pub swipe_snap_threshold_px: f64,
    #[serde(default = "default_axis_lock_threshold_px")]
    pub axis_lock_threshold_px: f64,
    /// Scroll distance per unit of finger travel while dragging.
    #[serde(default = "default_touch_sensitivity")]
    pub touch_sensitivity: f64,
    /// Auto-advance treats offsets within this distance of the last item as the end.
    #[serde(default = "default_auto_advance_end_slack_px")]
    pub auto_advance_end_slack_px: f64,
    /// Boundary snap-back triggers within this distance of the scrollable end.
    #[serde(default = "default_boundary_tolerance_px")]
    pub boundary_tolerance_px: f64,
    /// Arms auto-advance as soon as the controller initializes.
    #[serde(default = "default_auto_start")]
    pub auto_start: bool,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl CarouselConfig {
    #[must_use]
    pub fn new() -> Self {
        Self {
            item_width_px: default_item_width_px(),
            auto_advance_interval_ms: default_auto_advance_interval_ms(),
            manual_scroll_debounce_ms: default_manual_scroll_debounce_ms(),
            boundary_settle_ms: default_boundary_settle_ms(),
            touch_boundary_check_ms: default_touch_boundary_check_ms(),
            gesture_resume_delay_ms: default_gesture_resume_delay_ms(),
            swipe_snap_threshold_px: default_swipe_snap_threshold_px(),
            axis_lock_threshold_px: default_axis_lock_threshold_px(),
            touch_sensitivity: default_touch_sensitivity(),
            auto_advance_end_slack_px: default_auto_advance_end_slack_px(),
            boundary_tolerance_px: default_boundary_tolerance_px(),
            auto_start: default_auto_start(),
        }
    }

    #[must_use]
    pub fn with_item_width_px(mut self, item_width_px: f64) -> Self {
        self.item_width_px = item_width_px;
        self
    }

    #[must_use]
    pub fn with_auto_advance_interval_ms(mut self, interval_ms: u64) -> Self {
        self.auto_advance_interval_ms = interval_ms;
        self
    }

    #[must_use]
    pub fn with_manual_scroll_debounce_ms(mut self, debounce_ms: u64) -> Self {
        self.manual_scroll_debounce_ms = debounce_ms;
        self
    }

    #[must_use]
    pub fn with_gesture_resume_delay_ms(mut self, delay_ms: u64) -> Self {
        self.gesture_resume_delay_ms = delay_ms;
        self
    }

    #[must_use]
    pub fn with_touch_sensitivity(mut self, sensitivity: f64) -> Self {
        self.touch_sensitivity = sensitivity;
        self
    }

    #[must_use]
    pub fn with_swipe_snap_threshold_px(mut self, threshold_px: f64) -> Self {
        self.swipe_snap_threshold_px = threshold_px;
        self
    }

    #[must_use]
    pub fn with_auto_start(mut self, auto_start: bool) -> Self {
        self.auto_start = auto_start;
        self
    }
}

fn default_item_width_px() -> f64 {
    DEFAULT_ITEM_WIDTH_PX
}

fn default_auto_advance_interval_ms() -> u64 {
    DEFAULT_AUTO_ADVANCE_INTERVAL_MS
}

fn default_manual_scroll_debounce_ms() -> u64 {
    DEFAULT_MANUAL_SCROLL_DEBOUNCE_MS
}

fn default_boundary_settle_ms() -> u64 {
    DEFAULT_BOUNDARY_SETTLE_MS
}

fn default_touch_boundary_check_ms() -> u64 {
    DEFAULT_TOUCH_BOUNDARY_CHECK_MS
}

fn default_gesture_resume_delay_ms() -> u64 {
    DEFAULT_GESTURE_RESUME_DELAY_MS
}

fn default_swipe_snap_threshold_px() -> f64 {
    DEFAULT_SWIPE_SNAP_THRESHOLD_PX
}

fn default_axis_lock_threshold_px() -> f64 {
    DEFAULT_AXIS_LOCK_THRESHOLD_PX
}

fn default_touch_sensitivity() -> f64 {
    DEFAULT_TOUCH_SENSITIVITY
}

fn default_auto_advance_end_slack_px() -> f64 {
    DEFAULT_AUTO_ADVANCE_END_SLACK_PX
}

fn default_boundary_tolerance_px() -> f64 {
    DEFAULT_BOUNDARY_TOLERANCE_PX
}

fn default_auto_start() -> bool {
    true
}

mod auto_advance_controller;
mod carousel_config;
mod carousel_snapshot;
mod controller;
mod hover_controller;
mod json_contract;
mod navigation_controller;
mod observer_dispatch;
mod observer_registry;
mod registry;
mod scroll_controller;
mod timer_dispatch;
mod touch_controller;
mod validation;

pub use carousel_config::{
    CarouselConfig, DEFAULT_AUTO_ADVANCE_END_SLACK_PX, DEFAULT_AUTO_ADVANCE_INTERVAL_MS,
    DEFAULT_AXIS_LOCK_THRESHOLD_PX, DEFAULT_BOUNDARY_SETTLE_MS, DEFAULT_BOUNDARY_TOLERANCE_PX,
    DEFAULT_GESTURE_RESUME_DELAY_MS, DEFAULT_ITEM_WIDTH_PX, DEFAULT_MANUAL_SCROLL_DEBOUNCE_MS,
    DEFAULT_SWIPE_SNAP_THRESHOLD_PX, DEFAULT_TOUCH_BOUNDARY_CHECK_MS, DEFAULT_TOUCH_SENSITIVITY,
};
pub use carousel_snapshot::CarouselSnapshot;
pub use controller::CarouselController;
pub use json_contract::{CAROUSEL_SNAPSHOT_JSON_SCHEMA_V1, CarouselSnapshotJsonContractV1};
pub use registry::CarouselRegistry;
pub use touch_controller::TouchMoveOutcome;

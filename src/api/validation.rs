use crate::error::{CarouselError, CarouselResult};
use crate::interaction::TouchPoint;

use super::CarouselConfig;

pub(super) fn validate_carousel_config(config: CarouselConfig) -> CarouselResult<CarouselConfig> {
    if !config.item_width_px.is_finite() || config.item_width_px <= 0.0 {
        return Err(CarouselError::InvalidConfig(
            "item_width_px must be finite and > 0".to_owned(),
        ));
    }
    if config.auto_advance_interval_ms == 0 {
        return Err(CarouselError::InvalidConfig(
            "auto_advance_interval_ms must be > 0".to_owned(),
        ));
    }
    if !config.touch_sensitivity.is_finite() || config.touch_sensitivity <= 0.0 {
        return Err(CarouselError::InvalidConfig(
            "touch_sensitivity must be finite and > 0".to_owned(),
        ));
    }

    for (name, value) in [
        ("swipe_snap_threshold_px", config.swipe_snap_threshold_px),
        ("axis_lock_threshold_px", config.axis_lock_threshold_px),
        ("auto_advance_end_slack_px", config.auto_advance_end_slack_px),
        ("boundary_tolerance_px", config.boundary_tolerance_px),
    ] {
        if !value.is_finite() || value < 0.0 {
            return Err(CarouselError::InvalidConfig(format!(
                "{name} must be finite and >= 0"
            )));
        }
    }

    Ok(config)
}

pub(super) fn validate_touch_point(point: TouchPoint) -> CarouselResult<TouchPoint> {
    if !point.is_finite() {
        return Err(CarouselError::InvalidInput(
            "touch coordinates must be finite".to_owned(),
        ));
    }
    Ok(point)
}

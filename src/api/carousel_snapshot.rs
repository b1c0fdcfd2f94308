use serde::{Deserialize, Serialize};

use crate::core::{StripLayout, TimerEntry};
use crate::error::CarouselResult;
use crate::interaction::{CarouselMode, DragState};
use crate::surface::ScrollSurface;

use super::CarouselController;

/// Serializable deterministic state snapshot used by regression tests and
/// replay tooling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarouselSnapshot {
    pub id: String,
    pub now_ms: u64,
    pub mode: CarouselMode,
    pub scroll_left: f64,
    pub layout: StripLayout,
    pub loop_prepared: bool,
    pub hover_paused: bool,
    pub scroll_cooldown: bool,
    pub auto_advance_active: bool,
    pub drag: Option<DragState>,
    pub timers: Vec<TimerEntry>,
}

impl<S: ScrollSurface> CarouselController<S> {
    /// Captures the current state. Pending timers are listed in due order.
    pub fn snapshot(&self) -> CarouselResult<CarouselSnapshot> {
        let mut timers = self.timers.entries().to_vec();
        timers.sort_by_key(|entry| (entry.due_at_ms, entry.id));
        Ok(CarouselSnapshot {
            id: self.id.clone(),
            now_ms: self.now_ms,
            mode: self.interaction.mode(),
            scroll_left: self.surface.scroll_left()?,
            layout: self.layout()?,
            loop_prepared: self.loop_prepared,
            hover_paused: self.interaction.is_hover_paused(),
            scroll_cooldown: self.interaction.is_scroll_cooldown(),
            auto_advance_active: self.is_auto_advance_active(),
            drag: self.interaction.drag(),
            timers,
        })
    }
}

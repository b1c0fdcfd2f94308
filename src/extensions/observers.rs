use serde::{Deserialize, Serialize};

use crate::core::{Direction, ScrollBehavior};
use crate::interaction::CarouselMode;

/// Read-only state passed to observer hooks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ObserverContext {
    pub mode: CarouselMode,
    pub scroll_left: f64,
    pub max_scroll: f64,
    pub real_item_count: usize,
    pub auto_advance_active: bool,
    pub now_ms: u64,
}

/// Event stream exposed to observers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum CarouselEvent {
    LoopPrepared { cloned: bool },
    Stepped { direction: Direction, behavior: ScrollBehavior },
    AutoAdvanced { behavior: ScrollBehavior },
    BoundarySnapBack { from_offset: f64 },
    SwipeSnapped { target_index: usize },
    DragStarted,
    DragEnded { horizontal: bool },
    AutoAdvanceStarted,
    AutoAdvanceStopped,
    HoverPaused,
    HoverResumed,
}

/// Hook interface for analytics or host-side effects.
///
/// Observers see events and a context snapshot but cannot mutate the
/// controller.
pub trait CarouselObserver {
    fn id(&self) -> &str;
    fn on_event(&mut self, event: CarouselEvent, context: ObserverContext);
}

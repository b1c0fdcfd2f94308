use serde::{Deserialize, Serialize};

/// Projection of the interaction record onto the states that gate
/// auto-advance.
///
/// Priority when several conditions hold at once:
/// `Dragging > Paused > ManualScrollCooldown > Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CarouselMode {
    Idle,
    ManualScrollCooldown,
    Paused,
    Dragging,
}

/// Axis decision for an in-progress touch gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AxisLock {
    Undecided,
    /// Swipe drives the strip; default page scroll is suppressed.
    Horizontal,
    /// Page scroll owns the gesture; the strip never moves.
    Vertical,
}

/// Touch coordinates relative to the carousel element.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TouchPoint {
    pub x: f64,
    pub y: f64,
}

impl TouchPoint {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Transient state between touch start and touch end.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DragState {
    pub start: TouchPoint,
    pub start_offset: f64,
    pub axis_lock: AxisLock,
}

impl DragState {
    /// Signed horizontal displacement from the gesture start.
    #[must_use]
    pub fn delta_x(self, point: TouchPoint) -> f64 {
        point.x - self.start.x
    }
}

/// Decides the gesture axis from absolute displacements.
///
/// An axis locks only once its displacement strictly exceeds both the other
/// axis and `threshold`.
#[must_use]
pub fn resolve_axis_lock(delta_x_abs: f64, delta_y_abs: f64, threshold: f64) -> AxisLock {
    if delta_x_abs > delta_y_abs && delta_x_abs > threshold {
        AxisLock::Horizontal
    } else if delta_y_abs > delta_x_abs && delta_y_abs > threshold {
        AxisLock::Vertical
    } else {
        AxisLock::Undecided
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct InteractionState {
    pointer_inside: bool,
    scroll_cooldown: bool,
    drag: Option<DragState>,
}

impl InteractionState {
    #[must_use]
    pub fn mode(self) -> CarouselMode {
        if self.drag.is_some() {
            CarouselMode::Dragging
        } else if self.pointer_inside {
            CarouselMode::Paused
        } else if self.scroll_cooldown {
            CarouselMode::ManualScrollCooldown
        } else {
            CarouselMode::Idle
        }
    }

    #[must_use]
    pub fn allows_auto_advance(self) -> bool {
        self.mode() == CarouselMode::Idle
    }

    /// Whether a new auto-advance timer may be armed.
    ///
    /// Scroll cooldown does not block arming; it only suppresses ticks.
    #[must_use]
    pub fn allows_auto_advance_start(self) -> bool {
        !self.pointer_inside && self.drag.is_none()
    }

    #[must_use]
    pub fn is_hover_paused(self) -> bool {
        self.pointer_inside
    }

    #[must_use]
    pub fn is_scroll_cooldown(self) -> bool {
        self.scroll_cooldown
    }

    #[must_use]
    pub fn drag(self) -> Option<DragState> {
        self.drag
    }

    pub fn on_scroll(&mut self) {
        self.scroll_cooldown = true;
    }

    pub fn on_scroll_settled(&mut self) {
        self.scroll_cooldown = false;
    }

    /// Returns `true` when the pointer was previously outside.
    pub fn on_pointer_enter(&mut self) -> bool {
        !std::mem::replace(&mut self.pointer_inside, true)
    }

    /// Returns `true` when the pointer was previously inside.
    pub fn on_pointer_leave(&mut self) -> bool {
        std::mem::replace(&mut self.pointer_inside, false)
    }

    pub fn on_touch_start(&mut self, start: TouchPoint, start_offset: f64) {
        self.drag = Some(DragState {
            start,
            start_offset,
            axis_lock: AxisLock::Undecided,
        });
    }

    /// Applies the axis decision for `point` and returns the updated drag.
    ///
    /// A decided axis never changes for the rest of the gesture.
    pub fn on_touch_move(&mut self, point: TouchPoint, threshold: f64) -> Option<DragState> {
        let drag = self.drag.as_mut()?;
        if drag.axis_lock == AxisLock::Undecided {
            drag.axis_lock = resolve_axis_lock(
                (point.x - drag.start.x).abs(),
                (point.y - drag.start.y).abs(),
                threshold,
            );
        }
        Some(*drag)
    }

    pub fn on_touch_end(&mut self) -> Option<DragState> {
        self.drag.take()
    }
}

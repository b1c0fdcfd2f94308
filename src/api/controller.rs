use tracing::{debug, trace};

use crate::core::{StripLayout, TimerEntry, TimerId, TimerKind, TimerQueue};
use crate::error::CarouselResult;
use crate::extensions::CarouselObserver;
use crate::interaction::{CarouselMode, DragState, InteractionState};
use crate::surface::ScrollSurface;

use super::CarouselConfig;
use super::validation::validate_carousel_config;

/// Behavior controller for one looping carousel strip.
///
/// `CarouselController` owns the per-instance state record (interaction
/// flags, drag state, timer handles) and drives a [`ScrollSurface`]. Every
/// public event handler swallows failures after logging them; only
/// construction and configuration report errors.
pub struct CarouselController<S: ScrollSurface> {
    pub(super) id: String,
    pub(super) surface: S,
    pub(super) config: CarouselConfig,
    pub(super) interaction: InteractionState,
    pub(super) timers: TimerQueue,
    pub(super) auto_advance: Option<TimerId>,
    pub(super) scroll_debounce: Option<TimerId>,
    pub(super) boundary_settle: Option<TimerId>,
    pub(super) gesture_resume: Option<TimerId>,
    pub(super) loop_prepared: bool,
    pub(super) clone_appended: bool,
    pub(super) now_ms: u64,
    pub(super) observers: Vec<Box<dyn CarouselObserver>>,
}

impl<S: ScrollSurface> CarouselController<S> {
    /// Creates an idle controller. Nothing touches the surface until
    /// [`CarouselController::initialize`].
    pub fn new(id: impl Into<String>, surface: S, config: CarouselConfig) -> CarouselResult<Self> {
        let config = validate_carousel_config(config)?;
        Ok(Self {
            id: id.into(),
            surface,
            config,
            interaction: InteractionState::default(),
            timers: TimerQueue::new(),
            auto_advance: None,
            scroll_debounce: None,
            boundary_settle: None,
            gesture_resume: None,
            loop_prepared: false,
            clone_appended: false,
            now_ms: 0,
            observers: Vec::new(),
        })
    }

    /// Page-load setup: appends the loop clone and, when configured, arms
    /// auto-advance.
    pub fn initialize(&mut self, now_ms: u64) {
        self.advance_time(now_ms);
        self.prepare_infinite_loop();
        if self.config.auto_start {
            self.start_auto_advance();
        }
        debug!(carousel = %self.id, now_ms = self.now_ms, "carousel initialized");
    }

    /// Clears every live timer and drops transient gesture state.
    ///
    /// Returns how many timers were live.
    pub fn teardown(&mut self) -> usize {
        let cleared = self.timers.clear();
        self.auto_advance = None;
        self.scroll_debounce = None;
        self.boundary_settle = None;
        self.gesture_resume = None;
        self.interaction.on_touch_end();
        debug!(carousel = %self.id, cleared, "carousel torn down");
        cleared
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn config(&self) -> CarouselConfig {
        self.config
    }

    /// Replaces the configuration. A live auto-advance timer is re-armed so
    /// a new interval takes effect immediately.
    pub fn set_config(&mut self, config: CarouselConfig) -> CarouselResult<()> {
        let config = validate_carousel_config(config)?;
        let interval_changed =
            config.auto_advance_interval_ms != self.config.auto_advance_interval_ms;
        self.config = config;
        if interval_changed && self.auto_advance.is_some() {
            self.start_auto_advance();
        }
        Ok(())
    }

    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    #[must_use]
    pub fn into_surface(self) -> S {
        self.surface
    }

    #[must_use]
    pub fn mode(&self) -> CarouselMode {
        self.interaction.mode()
    }

    #[must_use]
    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    #[must_use]
    pub fn is_loop_prepared(&self) -> bool {
        self.loop_prepared
    }

    #[must_use]
    pub fn drag_state(&self) -> Option<DragState> {
        self.interaction.drag()
    }

    #[must_use]
    pub fn is_auto_advance_active(&self) -> bool {
        self.auto_advance
            .is_some_and(|timer_id| self.timers.contains(timer_id))
    }

    #[must_use]
    pub fn auto_advance_timer_count(&self) -> usize {
        self.timers.count_of(TimerKind::AutoAdvance)
    }

    #[must_use]
    pub fn live_timer_count(&self) -> usize {
        self.timers.len()
    }

    /// Earliest pending timer deadline. Hosts use it to schedule the next
    /// `advance_time` call.
    #[must_use]
    pub fn next_timer_due_at(&self) -> Option<u64> {
        self.timers.next_due_at()
    }

    #[must_use]
    pub fn timers(&self) -> &[TimerEntry] {
        self.timers.entries()
    }

    /// Current strip geometry as read from the surface.
    pub fn layout(&self) -> CarouselResult<StripLayout> {
        Ok(StripLayout::new(
            self.config.item_width_px,
            self.surface.child_count()?,
            self.clone_appended,
        ))
    }

    pub(super) fn replace_timer(
        &mut self,
        previous: Option<TimerId>,
        kind: TimerKind,
        delay_ms: u64,
    ) -> TimerId {
        if let Some(timer_id) = previous {
            self.timers.cancel(timer_id);
        }
        let timer_id = self.timers.schedule_once(kind, self.now_ms, delay_ms);
        trace!(carousel = %self.id, ?kind, due_in_ms = delay_ms, "timer scheduled");
        timer_id
    }
}

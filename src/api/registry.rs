use indexmap::IndexMap;
use tracing::debug;

use crate::error::{CarouselError, CarouselResult};
use crate::interaction::TouchPoint;
use crate::surface::ScrollSurface;

use super::validation::validate_carousel_config;
use super::{CarouselConfig, CarouselController, CarouselSnapshot, TouchMoveOutcome};

/// Page-level set of carousels keyed by element id.
///
/// Entry points mirror what page markup and document events reach for.
/// An id that does not resolve turns the call into a silent no-op.
/// `IndexMap` keeps page order so clock advances and teardown visit
/// carousels deterministically.
pub struct CarouselRegistry<S: ScrollSurface> {
    config: CarouselConfig,
    carousels: IndexMap<String, CarouselController<S>>,
}

impl<S: ScrollSurface> CarouselRegistry<S> {
    /// Creates an empty registry whose carousels share `config`.
    pub fn new(config: CarouselConfig) -> CarouselResult<Self> {
        Ok(Self {
            config: validate_carousel_config(config)?,
            carousels: IndexMap::new(),
        })
    }

    #[must_use]
    pub fn config(&self) -> CarouselConfig {
        self.config
    }

    /// Wires every container found on the page.
    ///
    /// Containers whose id is already registered are skipped, so a second
    /// call on the same page load does not duplicate clones or timers.
    /// Returns how many carousels were newly initialized.
    pub fn initialize_carousels<I>(&mut self, containers: I, now_ms: u64) -> usize
    where
        I: IntoIterator<Item = (String, S)>,
    {
        let mut initialized = 0;
        for (id, surface) in containers {
            match self.initialize_carousel(id, surface, now_ms) {
                Ok(()) => initialized += 1,
                Err(err) => debug!(error = %err, "skipping carousel container"),
            }
        }
        debug!(initialized, total = self.carousels.len(), "carousels initialized");
        initialized
    }

    /// Registers and initializes one carousel.
    pub fn initialize_carousel(
        &mut self,
        id: impl Into<String>,
        surface: S,
        now_ms: u64,
    ) -> CarouselResult<()> {
        let id = id.into();
        if id.is_empty() {
            return Err(CarouselError::InvalidInput(
                "carousel id must not be empty".to_owned(),
            ));
        }
        if self.carousels.contains_key(&id) {
            return Err(CarouselError::InvalidInput(format!(
                "carousel `{id}` is already initialized"
            )));
        }
        let mut controller = CarouselController::new(id.clone(), surface, self.config)?;
        controller.initialize(now_ms);
        self.carousels.insert(id, controller);
        Ok(())
    }

    /// Button entry point: `direction` is `1` (forward) or `-1` (backward).
    pub fn scroll_carousel(&mut self, id: &str, direction: i32) {
        self.with_carousel(id, |carousel| carousel.step_by_literal(direction));
    }

    pub fn pointer_enter(&mut self, id: &str, now_ms: u64) {
        self.with_carousel(id, |carousel| carousel.on_pointer_enter(now_ms));
    }

    pub fn pointer_leave(&mut self, id: &str, now_ms: u64) {
        self.with_carousel(id, |carousel| carousel.on_pointer_leave(now_ms));
    }

    pub fn scroll_event(&mut self, id: &str, now_ms: u64) {
        self.with_carousel(id, |carousel| carousel.on_scroll(now_ms));
    }

    pub fn touch_start(&mut self, id: &str, point: TouchPoint, now_ms: u64) {
        self.with_carousel(id, |carousel| carousel.on_touch_start(point, now_ms));
    }

    pub fn touch_move(&mut self, id: &str, point: TouchPoint, now_ms: u64) -> TouchMoveOutcome {
        self.with_carousel(id, |carousel| carousel.on_touch_move(point, now_ms))
            .unwrap_or_default()
    }

    pub fn touch_end(&mut self, id: &str, point: TouchPoint, now_ms: u64) {
        self.with_carousel(id, |carousel| carousel.on_touch_end(point, now_ms));
    }

    /// Advances every carousel clock. Returns the total number of timers fired.
    pub fn advance_time(&mut self, now_ms: u64) -> usize {
        self.carousels
            .values_mut()
            .map(|carousel| carousel.advance_time(now_ms))
            .sum()
    }

    /// Page unload: clears every live timer and drops all carousels.
    ///
    /// Returns how many timers were live.
    pub fn unload(&mut self) -> usize {
        let cleared: usize = self
            .carousels
            .drain(..)
            .map(|(_, mut carousel)| carousel.teardown())
            .sum();
        debug!(cleared, "carousel page unloaded");
        cleared
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&CarouselController<S>> {
        self.carousels.get(id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut CarouselController<S>> {
        self.carousels.get_mut(id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.carousels.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.carousels.is_empty()
    }

    /// Snapshots every carousel in page order. Carousels whose element is
    /// gone are left out.
    #[must_use]
    pub fn snapshots(&self) -> IndexMap<String, CarouselSnapshot> {
        self.carousels
            .iter()
            .filter_map(|(id, carousel)| match carousel.snapshot() {
                Ok(snapshot) => Some((id.clone(), snapshot)),
                Err(err) => {
                    debug!(carousel = %id, error = %err, "skipping carousel snapshot");
                    None
                }
            })
            .collect()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.carousels.keys().map(String::as_str)
    }

    fn with_carousel<T>(
        &mut self,
        id: &str,
        handler: impl FnOnce(&mut CarouselController<S>) -> T,
    ) -> Option<T> {
        match self.carousels.get_mut(id) {
            Some(carousel) => Some(handler(carousel)),
            None => {
                debug!(carousel = id, "carousel not found");
                None
            }
        }
    }
}

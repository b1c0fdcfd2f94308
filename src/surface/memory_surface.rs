use crate::core::ScrollBehavior;
use crate::error::{CarouselError, CarouselResult};

use super::{ScrollCommand, ScrollSurface};

/// In-memory scroll container used by tests, benches and headless replays.
///
/// Offsets clamp to `[0, scroll_width - client_width]` like a browser
/// container. Smooth scrolls land on their target immediately; the
/// requested behavior is kept in the command log.
#[derive(Debug, Clone)]
pub struct MemoryScrollSurface {
    element_id: String,
    item_width: f64,
    client_width: f64,
    real_items: usize,
    clone_items: usize,
    loop_prepared: bool,
    scroll_left: f64,
    detached: bool,
    commands: Vec<ScrollCommand>,
}

impl MemoryScrollSurface {
    #[must_use]
    pub fn new(
        element_id: impl Into<String>,
        real_items: usize,
        item_width: f64,
        client_width: f64,
    ) -> Self {
        Self {
            element_id: element_id.into(),
            item_width,
            client_width,
            real_items,
            clone_items: 0,
            loop_prepared: false,
            scroll_left: 0.0,
            detached: false,
            commands: Vec::new(),
        }
    }

    #[must_use]
    pub fn element_id(&self) -> &str {
        &self.element_id
    }

    #[must_use]
    pub fn clone_items(&self) -> usize {
        self.clone_items
    }

    #[must_use]
    pub fn commands(&self) -> &[ScrollCommand] {
        &self.commands
    }

    #[must_use]
    pub fn last_command(&self) -> Option<ScrollCommand> {
        self.commands.last().copied()
    }

    pub fn clear_commands(&mut self) {
        self.commands.clear();
    }

    /// Largest offset the container accepts.
    #[must_use]
    pub fn max_offset(&self) -> f64 {
        let width = (self.real_items + self.clone_items) as f64 * self.item_width;
        (width - self.client_width).max(0.0)
    }

    /// Moves the offset the way native wheel/trackpad scrolling would,
    /// without recording a command.
    pub fn set_native_scroll_left(&mut self, left: f64) {
        self.scroll_left = self.clamp(left);
    }

    /// Simulates removal of the backing element.
    pub fn detach(&mut self) {
        self.detached = true;
    }

    fn ensure_attached(&self) -> CarouselResult<()> {
        if self.detached {
            return Err(CarouselError::MissingElement {
                id: self.element_id.clone(),
            });
        }
        Ok(())
    }

    fn clamp(&self, left: f64) -> f64 {
        if !left.is_finite() {
            return self.scroll_left;
        }
        left.clamp(0.0, self.max_offset())
    }
}

impl ScrollSurface for MemoryScrollSurface {
    fn scroll_left(&self) -> CarouselResult<f64> {
        self.ensure_attached()?;
        Ok(self.scroll_left)
    }

    fn scroll_width(&self) -> CarouselResult<f64> {
        self.ensure_attached()?;
        Ok((self.real_items + self.clone_items) as f64 * self.item_width)
    }

    fn client_width(&self) -> CarouselResult<f64> {
        self.ensure_attached()?;
        Ok(self.client_width)
    }

    fn child_count(&self) -> CarouselResult<usize> {
        self.ensure_attached()?;
        Ok(self.real_items + self.clone_items)
    }

    fn is_loop_prepared(&self) -> CarouselResult<bool> {
        self.ensure_attached()?;
        Ok(self.loop_prepared)
    }

    fn mark_loop_prepared(&mut self) -> CarouselResult<()> {
        self.ensure_attached()?;
        self.loop_prepared = true;
        Ok(())
    }

    fn append_first_item_clone(&mut self) -> CarouselResult<bool> {
        self.ensure_attached()?;
        if self.real_items == 0 {
            return Ok(false);
        }
        self.clone_items += 1;
        self.commands.push(ScrollCommand::AppendClone);
        Ok(true)
    }

    fn scroll_to(&mut self, left: f64, behavior: ScrollBehavior) -> CarouselResult<()> {
        self.ensure_attached()?;
        self.scroll_left = self.clamp(left);
        self.commands.push(ScrollCommand::ScrollTo { left, behavior });
        Ok(())
    }

    fn scroll_by(&mut self, delta: f64, behavior: ScrollBehavior) -> CarouselResult<()> {
        self.ensure_attached()?;
        self.scroll_left = self.clamp(self.scroll_left + delta);
        self.commands.push(ScrollCommand::ScrollBy { delta, behavior });
        Ok(())
    }
}

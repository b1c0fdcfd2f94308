mod memory_surface;

pub use memory_surface::MemoryScrollSurface;

use serde::{Deserialize, Serialize};

use crate::core::ScrollBehavior;
use crate::error::CarouselResult;

/// Scroll command issued against a surface, as recorded by
/// [`MemoryScrollSurface`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ScrollCommand {
    ScrollTo { left: f64, behavior: ScrollBehavior },
    ScrollBy { delta: f64, behavior: ScrollBehavior },
    AppendClone,
}

/// Contract implemented by any horizontally scrollable item container.
///
/// Implementations own the real scroll offset and item sequence; the
/// controller only reads and commands them. Every method fails with
/// `CarouselError::MissingElement` once the backing element is gone.
pub trait ScrollSurface {
    fn scroll_left(&self) -> CarouselResult<f64>;

    /// Full scrollable width, clone included.
    fn scroll_width(&self) -> CarouselResult<f64>;

    /// Visible width of the container.
    fn client_width(&self) -> CarouselResult<f64>;

    /// Number of children, clone included.
    fn child_count(&self) -> CarouselResult<usize>;

    /// Whether the container already carries the infinite-loop marker.
    fn is_loop_prepared(&self) -> CarouselResult<bool>;

    fn mark_loop_prepared(&mut self) -> CarouselResult<()>;

    /// Appends a clone of the first child, tagged as a clone.
    ///
    /// Returns `false` when the container has no first child.
    fn append_first_item_clone(&mut self) -> CarouselResult<bool>;

    fn scroll_to(&mut self, left: f64, behavior: ScrollBehavior) -> CarouselResult<()>;

    fn scroll_by(&mut self, delta: f64, behavior: ScrollBehavior) -> CarouselResult<()>;
}

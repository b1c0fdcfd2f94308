//! carousel-rs: headless behavior engine for infinitely looping card carousels.
//!
//! The crate models the scroll container behind [`surface::ScrollSurface`]
//! and the event loop's timers behind a host-driven millisecond clock, so
//! manual stepping, auto-advance, hover pause and touch swipes stay
//! deterministic and testable outside a browser.

pub mod api;
pub mod core;
pub mod error;
pub mod extensions;
pub mod interaction;
pub mod surface;
pub mod telemetry;

pub use api::{CarouselConfig, CarouselController, CarouselRegistry};
pub use error::{CarouselError, CarouselResult};

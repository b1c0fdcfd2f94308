pub mod observers;

pub use observers::{CarouselEvent, CarouselObserver, ObserverContext};

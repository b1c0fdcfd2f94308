use crate::error::{CarouselError, CarouselResult};
use crate::extensions::CarouselObserver;
use crate::surface::ScrollSurface;

use super::CarouselController;

impl<S: ScrollSurface> CarouselController<S> {
    /// Registers an observer. Ids must be non-empty and unique.
    pub fn register_observer(&mut self, observer: Box<dyn CarouselObserver>) -> CarouselResult<()> {
        let observer_id = observer.id().to_owned();
        if observer_id.is_empty() {
            return Err(CarouselError::InvalidInput(
                "observer id must not be empty".to_owned(),
            ));
        }
        if self.has_observer(&observer_id) {
            return Err(CarouselError::InvalidInput(format!(
                "observer with id `{observer_id}` is already registered"
            )));
        }
        self.observers.push(observer);
        Ok(())
    }

    pub fn unregister_observer(&mut self, observer_id: &str) -> bool {
        if let Some(position) = self
            .observers
            .iter()
            .position(|entry| entry.id() == observer_id)
        {
            self.observers.remove(position);
            return true;
        }
        false
    }

    #[must_use]
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    #[must_use]
    pub fn has_observer(&self, observer_id: &str) -> bool {
        self.observers
            .iter()
            .any(|observer| observer.id() == observer_id)
    }
}

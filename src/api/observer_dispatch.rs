use crate::extensions::{CarouselEvent, ObserverContext};
use crate::surface::ScrollSurface;

use super::CarouselController;

impl<S: ScrollSurface> CarouselController<S> {
    pub(super) fn observer_context(&self) -> ObserverContext {
        let layout = self.layout().ok();
        ObserverContext {
            mode: self.interaction.mode(),
            scroll_left: self.surface.scroll_left().unwrap_or(0.0),
            max_scroll: layout.map_or(0.0, |layout| layout.max_scroll()),
            real_item_count: layout.map_or(0, |layout| layout.real_item_count()),
            auto_advance_active: self.is_auto_advance_active(),
            now_ms: self.now_ms,
        }
    }

    pub(super) fn emit_event(&mut self, event: CarouselEvent) {
        if self.observers.is_empty() {
            return;
        }
        let context = self.observer_context();
        for observer in &mut self.observers {
            observer.on_event(event, context);
        }
    }
}

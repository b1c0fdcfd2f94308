use carousel_rs::api::{CarouselConfig, CarouselController};
use carousel_rs::core::{Direction, ScrollBehavior};
use carousel_rs::error::{CarouselError, CarouselResult};
use carousel_rs::surface::{MemoryScrollSurface, ScrollCommand, ScrollSurface};

/// Container whose loop marker cannot be written.
struct UnmarkableSurface(MemoryScrollSurface);

impl ScrollSurface for UnmarkableSurface {
    fn scroll_left(&self) -> CarouselResult<f64> {
        self.0.scroll_left()
    }

    fn scroll_width(&self) -> CarouselResult<f64> {
        self.0.scroll_width()
    }

    fn client_width(&self) -> CarouselResult<f64> {
        self.0.client_width()
    }

    fn child_count(&self) -> CarouselResult<usize> {
        self.0.child_count()
    }

    fn is_loop_prepared(&self) -> CarouselResult<bool> {
        self.0.is_loop_prepared()
    }

    fn mark_loop_prepared(&mut self) -> CarouselResult<()> {
        Err(CarouselError::InvalidInput("marker attribute is read-only".to_owned()))
    }

    fn append_first_item_clone(&mut self) -> CarouselResult<bool> {
        self.0.append_first_item_clone()
    }

    fn scroll_to(&mut self, left: f64, behavior: ScrollBehavior) -> CarouselResult<()> {
        self.0.scroll_to(left, behavior)
    }

    fn scroll_by(&mut self, delta: f64, behavior: ScrollBehavior) -> CarouselResult<()> {
        self.0.scroll_by(delta, behavior)
    }
}

fn build_carousel(real_items: usize, client_width: f64) -> CarouselController<MemoryScrollSurface> {
    let surface = MemoryScrollSurface::new("projects", real_items, 350.0, client_width);
    let config = CarouselConfig::new().with_auto_start(false);
    let mut carousel = CarouselController::new("projects", surface, config).expect("carousel init");
    carousel.initialize(0);
    carousel
}

fn scroll_left(carousel: &CarouselController<MemoryScrollSurface>) -> f64 {
    carousel.surface().scroll_left().expect("attached surface")
}

#[test]
fn forward_step_at_last_real_item_jumps_instantly_to_start() {
    let mut carousel = build_carousel(3, 700.0);
    let layout = carousel.layout().expect("layout");
    assert_eq!(layout.real_item_count(), 3);
    assert!((layout.max_scroll() - 700.0).abs() <= 1e-9);

    carousel.surface_mut().set_native_scroll_left(700.0);
    carousel.step(Direction::Forward);

    assert_eq!(
        carousel.surface().last_command(),
        Some(ScrollCommand::ScrollTo {
            left: 0.0,
            behavior: ScrollBehavior::Instant
        })
    );
    assert_eq!(scroll_left(&carousel), 0.0);
}

#[test]
fn forward_step_before_the_end_animates_by_one_item() {
    let mut carousel = build_carousel(3, 700.0);
    carousel.surface_mut().set_native_scroll_left(650.0);
    carousel.step(Direction::Forward);

    assert_eq!(
        carousel.surface().last_command(),
        Some(ScrollCommand::ScrollBy {
            delta: 350.0,
            behavior: ScrollBehavior::Smooth
        })
    );
    // The container clamps the animated scroll at its own end.
    assert!((scroll_left(&carousel) - 700.0).abs() <= 1e-9);
}

#[test]
fn backward_step_at_start_jumps_instantly_to_last_real_item() {
    let mut carousel = build_carousel(4, 350.0);
    carousel.step(Direction::Backward);

    assert_eq!(
        carousel.surface().last_command(),
        Some(ScrollCommand::ScrollTo {
            left: 1050.0,
            behavior: ScrollBehavior::Instant
        })
    );
    assert!((scroll_left(&carousel) - 1050.0).abs() <= 1e-9);

    carousel.step(Direction::Backward);
    assert_eq!(
        carousel.surface().last_command(),
        Some(ScrollCommand::ScrollBy {
            delta: -350.0,
            behavior: ScrollBehavior::Smooth
        })
    );
    assert!((scroll_left(&carousel) - 700.0).abs() <= 1e-9);
}

#[test]
fn forward_steps_close_the_loop_after_every_real_item() {
    let mut carousel = build_carousel(5, 350.0);
    let max_scroll = carousel.layout().expect("layout").max_scroll();

    for step in 1..=4 {
        carousel.step(Direction::Forward);
        assert!((scroll_left(&carousel) - 350.0 * step as f64).abs() <= 1e-9);
    }
    assert!((scroll_left(&carousel) - max_scroll).abs() <= 1e-9);

    carousel.step(Direction::Forward);
    assert_eq!(scroll_left(&carousel), 0.0);
}

#[test]
fn loop_setup_appends_exactly_one_clone() {
    let mut carousel = build_carousel(3, 700.0);
    assert!(!carousel.prepare_infinite_loop());
    assert!(!carousel.prepare_infinite_loop());
    assert_eq!(carousel.surface().clone_items(), 1);

    // A second controller over the same container sees the loop marker.
    let surface = carousel.into_surface();
    let mut second = CarouselController::new(
        "projects",
        surface,
        CarouselConfig::new().with_auto_start(false),
    )
    .expect("second controller");
    second.initialize(0);

    assert_eq!(second.surface().clone_items(), 1);
    assert_eq!(second.layout().expect("layout").real_item_count(), 3);
}

#[test]
fn empty_strip_is_marked_prepared_without_a_clone() {
    let carousel = build_carousel(0, 700.0);
    assert!(carousel.is_loop_prepared());
    assert_eq!(carousel.surface().clone_items(), 0);
    assert_eq!(carousel.layout().expect("layout").real_item_count(), 0);
}

#[test]
fn unknown_step_literals_do_not_scroll() {
    let mut carousel = build_carousel(4, 350.0);
    carousel.surface_mut().clear_commands();

    carousel.step_by_literal(0);
    carousel.step_by_literal(2);
    assert!(carousel.surface().commands().is_empty());

    carousel.step_by_literal(-1);
    assert_eq!(carousel.surface().commands().len(), 1);
}

#[test]
fn steps_against_a_detached_container_are_noops() {
    let mut carousel = build_carousel(4, 350.0);
    carousel.surface_mut().clear_commands();
    carousel.surface_mut().detach();

    carousel.step(Direction::Forward);
    carousel.step(Direction::Backward);

    assert!(carousel.surface().commands().is_empty());
    assert!(carousel.layout().is_err());
}

#[test]
fn failed_loop_marker_does_not_append_a_second_clone() {
    let surface = UnmarkableSurface(MemoryScrollSurface::new("projects", 3, 350.0, 700.0));
    let config = CarouselConfig::new().with_auto_start(false);
    let mut carousel = CarouselController::new("projects", surface, config).expect("carousel init");
    carousel.initialize(0);

    assert!(carousel.is_loop_prepared());
    assert!(!carousel.prepare_infinite_loop());
    assert_eq!(carousel.surface().0.clone_items(), 1);

    let layout = carousel.layout().expect("layout");
    assert_eq!(layout.real_item_count(), 3);
    assert_eq!(layout.max_scroll(), 700.0);
}

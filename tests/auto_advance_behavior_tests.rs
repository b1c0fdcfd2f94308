use carousel_rs::api::{CarouselConfig, CarouselController};
use carousel_rs::core::{ScrollBehavior, TimerKind};
use carousel_rs::interaction::CarouselMode;
use carousel_rs::surface::{MemoryScrollSurface, ScrollCommand, ScrollSurface};

fn build_carousel(config: CarouselConfig) -> CarouselController<MemoryScrollSurface> {
    let surface = MemoryScrollSurface::new("talks", 4, 350.0, 350.0);
    let mut carousel = CarouselController::new("talks", surface, config).expect("carousel init");
    carousel.initialize(0);
    carousel.surface_mut().clear_commands();
    carousel
}

fn auto_advance_due_at(carousel: &CarouselController<MemoryScrollSurface>) -> Option<u64> {
    carousel
        .timers()
        .iter()
        .find(|entry| entry.kind == TimerKind::AutoAdvance)
        .map(|entry| entry.due_at_ms)
}

#[test]
fn auto_advance_starts_on_initialize_with_default_interval() {
    let carousel = build_carousel(CarouselConfig::default());
    assert!(carousel.is_auto_advance_active());
    assert_eq!(carousel.auto_advance_timer_count(), 1);
    assert_eq!(auto_advance_due_at(&carousel), Some(1_500));
}

#[test]
fn starting_twice_keeps_exactly_one_timer() {
    let mut carousel = build_carousel(CarouselConfig::default());
    assert!(carousel.start_auto_advance());
    assert!(carousel.start_auto_advance());
    assert_eq!(carousel.auto_advance_timer_count(), 1);
    assert_eq!(carousel.live_timer_count(), 1);
}

#[test]
fn ticks_advance_one_item_per_interval_and_wrap_at_the_end() {
    let mut carousel = build_carousel(CarouselConfig::default());

    for tick in 1..=3 {
        carousel.advance_time(1_500 * tick);
        assert!(
            (carousel.surface().scroll_left().expect("offset") - 350.0 * tick as f64).abs()
                <= 1e-9
        );
    }

    carousel.advance_time(6_000);
    assert_eq!(
        carousel.surface().last_command(),
        Some(ScrollCommand::ScrollTo {
            left: 0.0,
            behavior: ScrollBehavior::Instant
        })
    );
    assert_eq!(carousel.surface().scroll_left().expect("offset"), 0.0);
}

#[test]
fn end_slack_absorbs_subpixel_rounding() {
    let mut carousel = build_carousel(CarouselConfig::default());
    carousel.surface_mut().set_native_scroll_left(1_041.0);
    carousel.advance_time(1_500);
    assert_eq!(
        carousel.surface().last_command(),
        Some(ScrollCommand::ScrollTo {
            left: 0.0,
            behavior: ScrollBehavior::Instant
        })
    );

    carousel.surface_mut().set_native_scroll_left(1_039.0);
    carousel.advance_time(3_000);
    assert_eq!(
        carousel.surface().last_command(),
        Some(ScrollCommand::ScrollBy {
            delta: 350.0,
            behavior: ScrollBehavior::Smooth
        })
    );
}

#[test]
fn scroll_cooldown_suppresses_ticks_until_debounce_clears() {
    let mut carousel = build_carousel(CarouselConfig::default());

    carousel.on_scroll(1_400);
    assert_eq!(carousel.mode(), CarouselMode::ManualScrollCooldown);

    carousel.advance_time(1_500);
    assert!(carousel.surface().commands().is_empty());
    assert_eq!(carousel.auto_advance_timer_count(), 1);

    carousel.advance_time(1_550);
    assert_eq!(carousel.mode(), CarouselMode::Idle);

    carousel.advance_time(3_000);
    assert_eq!(
        carousel.surface().commands(),
        &[ScrollCommand::ScrollBy {
            delta: 350.0,
            behavior: ScrollBehavior::Smooth
        }]
    );
}

#[test]
fn scroll_events_keep_extending_the_cooldown() {
    let mut carousel = build_carousel(CarouselConfig::default());
    for now in (1_400..=1_600).step_by(50) {
        carousel.on_scroll(now);
    }
    carousel.advance_time(1_700);
    assert_eq!(carousel.mode(), CarouselMode::ManualScrollCooldown);
    carousel.advance_time(1_750);
    assert_eq!(carousel.mode(), CarouselMode::Idle);
    assert!(carousel.surface().commands().is_empty());
}

#[test]
fn stopping_is_idempotent() {
    let mut carousel = build_carousel(CarouselConfig::default());
    assert!(carousel.stop_auto_advance());
    assert!(!carousel.stop_auto_advance());
    assert!(!carousel.is_auto_advance_active());

    carousel.advance_time(10_000);
    assert!(carousel.surface().commands().is_empty());
}

#[test]
fn auto_start_can_be_disabled() {
    let carousel = build_carousel(CarouselConfig::new().with_auto_start(false));
    assert!(!carousel.is_auto_advance_active());
    assert_eq!(carousel.live_timer_count(), 0);
}

#[test]
fn changing_the_interval_rearms_a_live_timer() {
    let mut carousel = build_carousel(CarouselConfig::default());
    carousel.advance_time(500);
    carousel
        .set_config(CarouselConfig::default().with_auto_advance_interval_ms(1_000))
        .expect("valid config");

    assert_eq!(carousel.auto_advance_timer_count(), 1);
    assert_eq!(auto_advance_due_at(&carousel), Some(1_500));

    carousel.advance_time(2_500);
    assert_eq!(carousel.surface().commands().len(), 2);
}

#[test]
fn stale_clock_values_are_ignored() {
    let mut carousel = build_carousel(CarouselConfig::default());
    carousel.advance_time(1_500);
    assert_eq!(carousel.advance_time(100), 0);
    assert_eq!(carousel.now_ms(), 1_500);
}

#[test]
fn next_timer_due_at_tracks_the_earliest_deadline() {
    let mut carousel = build_carousel(CarouselConfig::default());
    assert_eq!(carousel.next_timer_due_at(), Some(1_500));

    carousel.on_scroll(1_000);
    assert_eq!(carousel.next_timer_due_at(), Some(1_100));

    carousel.teardown();
    assert_eq!(carousel.next_timer_due_at(), None);
}

#[test]
fn advancing_to_the_end_of_the_clock_terminates() {
    let surface = MemoryScrollSurface::new("talks", 4, 350.0, 350.0);
    let mut carousel =
        CarouselController::new("talks", surface, CarouselConfig::default()).expect("init");
    carousel.initialize(u64::MAX - 10);
    assert_eq!(auto_advance_due_at(&carousel), Some(u64::MAX));

    assert_eq!(carousel.advance_time(u64::MAX), 1);
    assert_eq!(carousel.surface().scroll_left().expect("offset"), 350.0);
    assert_eq!(carousel.auto_advance_timer_count(), 0);
    assert!(!carousel.is_auto_advance_active());
    assert_eq!(carousel.advance_time(u64::MAX), 0);
}

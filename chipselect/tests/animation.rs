use std::time::Duration;

use chipselect::{Easing, MenuAnimation, MenuPhase};

fn ms(millis: u64) -> Duration {
    Duration::from_millis(millis)
}

fn linear(max: f32) -> MenuAnimation {
    MenuAnimation::new(max).with_easing(Easing::Linear)
}

// =============================================================================
// Easing Function Tests
// =============================================================================

#[test]
fn test_easing_linear() {
    assert_eq!(Easing::Linear.apply(0.0), 0.0);
    assert_eq!(Easing::Linear.apply(0.5), 0.5);
    assert_eq!(Easing::Linear.apply(1.0), 1.0);
}

#[test]
fn test_easing_ease_in_out() {
    assert_eq!(Easing::EaseInOut.apply(0.0), 0.0);
    assert_eq!(Easing::EaseInOut.apply(1.0), 1.0);
    assert_eq!(Easing::EaseInOut.apply(0.5), 0.5);
    assert!(Easing::EaseInOut.apply(0.25) < 0.25);
    assert!(Easing::EaseInOut.apply(0.75) > 0.75);
}

#[test]
fn test_easing_clamps_input() {
    assert_eq!(Easing::EaseIn.apply(-1.0), 0.0);
    assert_eq!(Easing::EaseOut.apply(2.0), 1.0);
}

#[test]
fn test_default_easing_is_ease_in_out() {
    assert_eq!(Easing::default(), Easing::EaseInOut);
}

// =============================================================================
// Visibility State Machine
// =============================================================================

#[test]
fn test_starts_closed() {
    let menu = MenuAnimation::default();
    assert_eq!(menu.phase(), MenuPhase::Closed);
    assert!(!menu.is_visible());
    assert!(!menu.is_animating());
    assert_eq!(menu.progress(), 0.0);
    assert_eq!(menu.max(), 200.0);
}

#[test]
fn test_open_mounts_immediately() {
    let mut menu = linear(200.0);
    assert_eq!(menu.toggle(), MenuPhase::Opening);
    assert!(menu.is_visible());
    assert_eq!(menu.progress(), 0.0);
    assert_eq!(menu.target(), 200.0);
}

#[test]
fn test_opening_reaches_open() {
    let mut menu = linear(200.0);
    menu.toggle();

    assert!(menu.advance(ms(250)));
    assert_eq!(menu.phase(), MenuPhase::Opening);
    assert!((menu.progress() - 100.0).abs() < 0.01);

    assert!(menu.advance(ms(250)));
    assert_eq!(menu.phase(), MenuPhase::Open);
    assert_eq!(menu.progress(), 200.0);
    assert!(!menu.is_animating());
}

#[test]
fn test_closing_stays_visible_until_complete() {
    let mut menu = linear(200.0);
    menu.toggle();
    menu.advance(ms(500));

    assert_eq!(menu.toggle(), MenuPhase::Closing);
    assert!(menu.is_visible());

    menu.advance(ms(400));
    assert_eq!(menu.phase(), MenuPhase::Closing);
    assert!(menu.is_visible());
    assert!(menu.progress() > 0.0);

    menu.advance(ms(100));
    assert_eq!(menu.phase(), MenuPhase::Closed);
    assert!(!menu.is_visible());
    assert_eq!(menu.progress(), 0.0);
}

#[test]
fn test_reverse_mid_opening_never_reaches_open() {
    let mut menu = linear(200.0);
    menu.toggle();
    menu.advance(ms(250));
    let reached = menu.progress();

    assert_eq!(menu.toggle(), MenuPhase::Closing);
    assert!(menu.is_visible());
    assert_eq!(menu.target(), 0.0);
    // Reversal starts where the opening left off.
    assert_eq!(menu.progress(), reached);

    menu.advance(ms(100));
    assert_eq!(menu.phase(), MenuPhase::Closing);
    assert!(menu.progress() < reached);
    assert!(menu.progress() > 0.0);
}

#[test]
fn test_reversal_takes_proportional_time() {
    let mut menu = linear(200.0);
    menu.toggle();
    menu.advance(ms(250));
    menu.toggle();

    // Half the travel, half the full duration.
    menu.advance(ms(200));
    assert_eq!(menu.phase(), MenuPhase::Closing);
    menu.advance(ms(60));
    assert_eq!(menu.phase(), MenuPhase::Closed);
}

#[test]
fn test_reverse_mid_closing_reopens_without_unmounting() {
    let mut menu = linear(200.0);
    menu.toggle();
    menu.advance(ms(500));
    menu.toggle();
    menu.advance(ms(250));

    assert_eq!(menu.toggle(), MenuPhase::Opening);
    assert!(menu.is_visible());
    menu.advance(ms(500));
    assert_eq!(menu.phase(), MenuPhase::Open);
    assert_eq!(menu.progress(), 200.0);
}

#[test]
fn test_open_and_close_are_idempotent() {
    let mut menu = linear(200.0);
    menu.open();
    menu.advance(ms(100));
    let progress = menu.progress();
    menu.open();
    assert_eq!(menu.progress(), progress);
    assert_eq!(menu.phase(), MenuPhase::Opening);

    let mut closed = linear(200.0);
    closed.close();
    assert_eq!(closed.phase(), MenuPhase::Closed);
    assert!(!closed.is_animating());
}

#[test]
fn test_advance_when_idle_reports_no_change() {
    let mut menu = MenuAnimation::default();
    assert!(!menu.advance(ms(16)));
}

#[test]
fn test_custom_duration() {
    let mut menu = linear(200.0).with_duration(ms(100));
    menu.toggle();
    menu.advance(ms(50));
    assert!((menu.progress() - 100.0).abs() < 0.01);
    menu.advance(ms(50));
    assert_eq!(menu.phase(), MenuPhase::Open);
}

// =============================================================================
// Reduced Motion and Retargeting
// =============================================================================

#[test]
fn test_reduced_motion_completes_within_toggle() {
    let mut menu = MenuAnimation::default();
    menu.set_reduced_motion(true);

    assert_eq!(menu.toggle(), MenuPhase::Open);
    assert_eq!(menu.progress(), 200.0);
    assert!(!menu.is_animating());

    assert_eq!(menu.toggle(), MenuPhase::Closed);
    assert!(!menu.is_visible());
}

#[test]
fn test_enabling_reduced_motion_finishes_running_transition() {
    let mut menu = linear(200.0);
    menu.toggle();
    menu.advance(ms(100));
    menu.set_reduced_motion(true);
    assert_eq!(menu.phase(), MenuPhase::Open);
    assert_eq!(menu.progress(), 200.0);
}

#[test]
fn test_zero_height_menu_opens_instantly() {
    let mut menu = MenuAnimation::new(0.0);
    assert_eq!(menu.toggle(), MenuPhase::Open);
    assert!(menu.is_visible());
}

#[test]
fn test_set_max_retargets_open_menu() {
    let mut menu = linear(200.0);
    menu.toggle();
    menu.advance(ms(500));

    menu.set_max(100.0);
    assert!(menu.is_animating());
    assert_eq!(menu.target(), 100.0);
    menu.advance(ms(500));
    assert_eq!(menu.progress(), 100.0);
    assert_eq!(menu.phase(), MenuPhase::Open);
}

#[test]
fn test_set_max_while_closed_only_affects_next_open() {
    let mut menu = linear(200.0);
    menu.set_max(120.0);
    assert_eq!(menu.phase(), MenuPhase::Closed);
    assert!(!menu.is_animating());

    menu.toggle();
    assert_eq!(menu.target(), 120.0);
}

// =============================================================================
// Row Mapping
// =============================================================================

#[test]
fn test_rows_from_progress() {
    let mut menu = MenuAnimation::default();
    assert_eq!(menu.rows(20.0), 0);
    menu.set_reduced_motion(true);
    menu.toggle();
    assert_eq!(menu.rows(20.0), 10);
    assert_eq!(menu.rows(40.0), 5);
}

#[test]
fn test_rows_with_non_positive_units() {
    let mut menu = MenuAnimation::default();
    menu.set_reduced_motion(true);
    menu.toggle();
    assert_eq!(menu.rows(0.0), 0);
}

use pretty_assertions::assert_eq;

use crate::{
    ButtonLevel::{Pressed, Released},
    ControlState,
};

#[test]
fn when_idle_nothing_changes() {
    let mut state = ControlState::new();

    for _ in 0..5 {
        assert!(!state.step(Released, Released));
    }

    assert_eq!(state, ControlState::new());
}

#[test]
fn when_momentary_is_pressed_the_led_follows() {
    let mut state = ControlState::new();

    assert!(state.step(Released, Pressed));
    assert!(state.led_on());

    // held, no edge
    assert!(!state.step(Released, Pressed));
    assert!(state.led_on());

    assert!(state.step(Released, Released));
    assert!(!state.led_on());
}

#[test]
fn when_toggle_is_pressed_the_override_latches() {
    let mut state = ControlState::new();

    assert!(state.step(Pressed, Released));
    assert!(state.override_active());
    assert!(state.led_on());

    // physically releasing the toggle button is not a toggling edge
    assert!(!state.step(Released, Released));
    assert!(state.override_active());
    assert!(state.led_on());

    assert!(state.step(Pressed, Released));
    assert!(!state.override_active());
    assert!(!state.led_on());
}

#[test]
fn when_overridden_the_momentary_button_is_inert() {
    let mut state = ControlState::new();

    state.step(Pressed, Released);
    state.step(Released, Released);
    assert!(state.override_active());
    assert!(state.led_on());

    assert!(!state.step(Released, Pressed));
    assert!(state.led_on());

    assert!(!state.step(Released, Released));
    assert!(state.led_on());
}

#[test]
fn when_both_edges_land_in_one_tick_the_toggle_wins() {
    let mut state = ControlState::new();

    assert!(state.step(Pressed, Pressed));
    assert!(state.led_on());
    assert!(state.override_active());

    // the suppressed momentary release changes nothing either
    assert!(!state.step(Pressed, Released));
    assert!(state.led_on());
}

#[test]
fn when_the_override_clears_mid_press_the_led_waits_for_the_next_edge() {
    let mut state = ControlState::new();

    state.step(Released, Pressed);
    assert!(state.led_on());

    // toggling while the momentary button is held flips the LED off and
    // locks the held button out
    assert!(state.step(Pressed, Pressed));
    assert!(state.override_active());
    assert!(!state.led_on());

    state.step(Released, Pressed);

    // clearing the override flips the LED again; the held level is not
    // re-applied
    assert!(state.step(Pressed, Pressed));
    assert!(!state.override_active());
    assert!(state.led_on());

    // only the next momentary edge re-takes control
    assert!(state.step(Released, Released));
    assert!(!state.led_on());
}

#[test]
fn when_overridden_the_momentary_history_still_advances() {
    let mut state = ControlState::new();

    state.step(Pressed, Released);
    state.step(Released, Released);
    assert!(state.override_active());

    // press lands while overridden and is ignored, but recorded
    assert!(!state.step(Released, Pressed));

    state.step(Pressed, Pressed);
    assert!(!state.override_active());
    assert!(!state.led_on());

    // still held, so no stale press edge fires now that the override is gone
    assert!(!state.step(Released, Pressed));
    assert!(!state.led_on());

    assert!(state.step(Released, Released));
    assert!(state.step(Released, Pressed));
    assert!(state.led_on());
}

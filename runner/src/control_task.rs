use control::ControlState;
use defmt::{Debug2Format, info, warn};
use embassy_executor::SpawnToken;
use embassy_stm32::gpio::{Level, Output};
use embassy_time::Timer;
use static_cell::StaticCell;

use crate::{
    display::StatusDisplay,
    hardware::Hardware,
    input::{Button, Polarity},
};

const POLL_INTERVAL_MS: u64 = 1;

pub struct ControlTaskState<'a> {
    toggle_button: Button<'a>,
    momentary_button: Button<'a>,
    led_power: Output<'a>,
    display: StatusDisplay<'a>,
    control: ControlState,
}

static CONTROL_TASK_STATE: StaticCell<ControlTaskState> = StaticCell::new();

pub fn create_control_task(hardware: Hardware<'static>) -> SpawnToken<impl Sized> {
    let display = StatusDisplay::new(hardware.display_i2c).unwrap();

    let state = ControlTaskState {
        toggle_button: Button::new(hardware.toggle_button, Polarity::ActiveHigh),
        momentary_button: Button::new(hardware.momentary_button, Polarity::ActiveLow),
        led_power: hardware.led_power,
        display,
        control: ControlState::new(),
    };

    control_task(CONTROL_TASK_STATE.init(state))
}

#[embassy_executor::task]
pub async fn control_task(state: &'static mut ControlTaskState<'static>) {
    info!("Control: task starting");

    state.led_power.set_level(Level::from(state.control.led_on()));

    if let Err(e) = state.display.draw_static_layout() {
        warn!("Display: layout draw failed: {}", Debug2Format(&e));
    }
    if let Err(e) = state.display.set_state_text(state.control.led_on()) {
        warn!("Display: state repaint failed: {}", Debug2Format(&e));
    }

    loop {
        let toggle = state.toggle_button.level();
        let momentary = state.momentary_button.level();

        let display_dirty = state.control.step(toggle, momentary);

        // idempotent, applied every tick
        state.led_power.set_level(Level::from(state.control.led_on()));

        if display_dirty {
            info!(
                "LED {}",
                if state.control.led_on() { "on" } else { "off" }
            );

            if let Err(e) = state.display.set_state_text(state.control.led_on()) {
                warn!("Display: state repaint failed: {}", Debug2Format(&e));
            }
        }

        Timer::after_millis(POLL_INTERVAL_MS).await;
    }
}

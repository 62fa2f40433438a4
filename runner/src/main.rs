//! Drives a KY-034 auto-flashing LED module from two buttons and shows the
//! commanded state on an SSD1306 OLED.
//!
//! The module flashes on its own whenever it is powered, so the firmware only
//! switches its supply pin. The B1 user button latches the LED on or off; an
//! external momentary button powers it while held, unless the latch is set.
//!
//! Wiring on the Nucleo-H723ZG:
//!
//! ```text
//! KY-034 S         -> PA4
//! KY-034 -         -> GND
//! momentary button -> PC0 to GND
//! toggle button    -> B1 (PC13, on board)
//! OLED SCL         -> PB8
//! OLED SDA         -> PB9
//! ```
//!
//! Only the module's S and - pins are connected; its middle pin is shorted to
//! - on the board and must be left floating.

#![no_std]
#![no_main]

mod control_task;
mod display;
mod hardware;
mod input;

use defmt_rtt as _;
use panic_probe as _;

use embassy_executor::Executor;
use static_cell::StaticCell;

use crate::hardware::Hardware;

static EXECUTOR: StaticCell<Executor> = StaticCell::new();

#[cortex_m_rt::entry]
fn main() -> ! {
    let hardware = Hardware::get();

    let executor = EXECUTOR.init(Executor::new());
    executor.run(|spawner| {
        spawner
            .spawn(control_task::create_control_task(hardware))
            .unwrap();
    })
}

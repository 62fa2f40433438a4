use defmt::info;
use embassy_stm32::gpio::{Input, Level, Output, Pull, Speed};
use embassy_stm32::i2c::I2c;
use embassy_stm32::mode::Blocking;
use embassy_stm32::time::Hertz;

pub struct Hardware<'a> {
    pub led_power: Output<'a>,
    pub toggle_button: Input<'a>,
    pub momentary_button: Input<'a>,
    pub display_i2c: I2c<'a, Blocking>,
}

impl<'a> Hardware<'a> {
    pub fn get() -> Hardware<'a> {
        info!("Initializing");
        let peripherals = embassy_stm32::init(Default::default());

        // KY-034 supply pin, low at reset so the module starts dark
        let led_power = Output::new(peripherals.PA4, Level::Low, Speed::Low);

        // B1 user button, active high on the Nucleo board
        let toggle_button = Input::new(peripherals.PC13, Pull::Down);

        // external push button to ground
        let momentary_button = Input::new(peripherals.PC0, Pull::Up);

        let display_i2c = I2c::new_blocking(
            peripherals.I2C1,
            peripherals.PB8,
            peripherals.PB9,
            Hertz::khz(400),
            Default::default(),
        );

        Hardware {
            led_power,
            toggle_button,
            momentary_button,
            display_i2c,
        }
    }
}

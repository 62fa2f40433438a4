use control::ButtonLevel;
use embassy_stm32::gpio::Input;

pub enum Polarity {
    ActiveLow,
    ActiveHigh,
}

pub struct Button<'a> {
    pin: Input<'a>,
    polarity: Polarity,
}

impl<'a> Button<'a> {
    pub fn new(pin: Input<'a>, polarity: Polarity) -> Button<'a> {
        Button { pin, polarity }
    }

    /// Current polarity-normalized level of the button.
    pub fn level(&self) -> ButtonLevel {
        let active = match self.polarity {
            Polarity::ActiveHigh => self.pin.is_high(),
            Polarity::ActiveLow => self.pin.is_low(),
        };

        if active {
            ButtonLevel::Pressed
        } else {
            ButtonLevel::Released
        }
    }
}

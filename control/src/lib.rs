#![cfg_attr(not(test), no_std)]

use defmt::Format;

/// Polarity-normalized reading of a button input.
#[derive(Format, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonLevel {
    Released,
    Pressed,
}

impl ButtonLevel {
    pub fn is_pressed(self) -> bool {
        matches!(self, ButtonLevel::Pressed)
    }
}

/// Decides the LED power output from the two buttons.
///
/// The toggle button latches an override: while it is active the momentary
/// button cannot move the LED. Edges are detected against the previous tick's
/// raw levels, without debouncing.
#[derive(Format, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlState {
    led_on: bool,
    override_active: bool,
    last_toggle: ButtonLevel,
    last_momentary: ButtonLevel,
}

impl ControlState {
    pub const fn new() -> Self {
        ControlState {
            led_on: false,
            override_active: false,
            last_toggle: ButtonLevel::Released,
            last_momentary: ButtonLevel::Released,
        }
    }

    pub fn led_on(&self) -> bool {
        self.led_on
    }

    pub fn override_active(&self) -> bool {
        self.override_active
    }

    /// Advances one polling tick. Returns true when the rendered state text
    /// must be repainted.
    ///
    /// The toggle edge is evaluated before the momentary edge, so when both
    /// buttons transition in the same tick the toggle wins. A toggle press
    /// while the momentary button is held locks the momentary button out
    /// until its next edge after the override clears; the LED is not
    /// re-synchronized to the held level.
    pub fn step(&mut self, toggle: ButtonLevel, momentary: ButtonLevel) -> bool {
        let mut display_dirty = false;

        if toggle != self.last_toggle {
            if toggle.is_pressed() {
                self.override_active = !self.override_active;
                self.led_on = !self.led_on;
                display_dirty = true;
            }

            self.last_toggle = toggle;
        }

        if momentary != self.last_momentary {
            if !self.override_active {
                self.led_on = momentary.is_pressed();
                display_dirty = true;
            }

            // recorded even while overridden, so clearing the override does
            // not replay a stale edge
            self.last_momentary = momentary;
        }

        display_dirty
    }
}

impl Default for ControlState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod test;

use embassy_stm32::i2c::I2c;
use embassy_stm32::mode::Blocking;
use embedded_graphics::{
    mono_font::{MonoTextStyle, MonoTextStyleBuilder, ascii::FONT_6X10},
    pixelcolor::BinaryColor,
    prelude::*,
    text::{Baseline, Text},
};
use ssd1306::{I2CDisplayInterface, Ssd1306, mode::BufferedGraphicsMode, prelude::*};

type Oled<'a> = Ssd1306<
    I2CInterface<I2c<'a, Blocking>>,
    DisplaySize128x64,
    BufferedGraphicsMode<DisplaySize128x64>,
>;

const HEADER_RULE: &str = "---------------------";
const HEADER_TITLE: &str = "KY-034 flashing LED";
const STATE_LABEL: &str = "LED state:";

const STATE_LABEL_POSITION: Point = Point::new(0, 40);
const STATE_VALUE_POSITION: Point = Point::new(0, 52);

/// Status screen on the SSD1306. The fixed layout is drawn once; afterwards
/// only the state text is repainted.
pub struct StatusDisplay<'a> {
    oled: Oled<'a>,
    label_style: MonoTextStyle<'static, BinaryColor>,
    value_style: MonoTextStyle<'static, BinaryColor>,
}

impl<'a> StatusDisplay<'a> {
    pub fn new(i2c: I2c<'a, Blocking>) -> Result<StatusDisplay<'a>, DisplayError> {
        let interface = I2CDisplayInterface::new(i2c);
        let mut oled = Ssd1306::new(interface, DisplaySize128x64, DisplayRotation::Rotate0)
            .into_buffered_graphics_mode();
        oled.init()?;

        let label_style = MonoTextStyle::new(&FONT_6X10, BinaryColor::On);

        // value text carries its own background so repainting it overwrites
        // the previous value without clearing the screen
        let value_style = MonoTextStyleBuilder::new()
            .font(&FONT_6X10)
            .text_color(BinaryColor::On)
            .background_color(BinaryColor::Off)
            .build();

        Ok(StatusDisplay {
            oled,
            label_style,
            value_style,
        })
    }

    pub fn draw_static_layout(&mut self) -> Result<(), DisplayError> {
        self.oled.clear(BinaryColor::Off)?;

        for (text, y) in [(HEADER_RULE, 0), (HEADER_TITLE, 12), (HEADER_RULE, 24)] {
            Text::with_baseline(text, Point::new(0, y), self.label_style, Baseline::Top)
                .draw(&mut self.oled)?;
        }

        Text::with_baseline(
            STATE_LABEL,
            STATE_LABEL_POSITION,
            self.label_style,
            Baseline::Top,
        )
        .draw(&mut self.oled)?;

        self.oled.flush()
    }

    pub fn set_state_text(&mut self, led_on: bool) -> Result<(), DisplayError> {
        // equal width so either value fully overwrites the other
        let text = if led_on { "ON " } else { "OFF" };

        Text::with_baseline(text, STATE_VALUE_POSITION, self.value_style, Baseline::Top)
            .draw(&mut self.oled)?;

        self.oled.flush()
    }
}

use embedded_hal::adc::{Channel, OneShot};
use embedded_hal::blocking::delay::DelayMs;
use embedded_hal::digital::v2::{InputPin, OutputPin};

use crate::analog::Potentiometer;
use crate::clock::Elapsed;
use crate::display::{Reading, SegmentDisplay};
use crate::error::Result;
use crate::input::{Buttons, Pressed};
use crate::DEBOUNCE_MS;

/// What one pass of the control loop did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Reset,
    Voltage(Reading),
    Elapsed(Reading),
}

impl Mode {
    /// True when `other` is the same kind of mode, whatever it displayed.
    pub fn same_kind(&self, other: &Mode) -> bool {
        core::mem::discriminant(self) == core::mem::discriminant(other)
    }
}

/// Everything the polling loop touches, apart from the shared stopwatch.
pub struct Panel<R, V, ADC, A, P, L, C, D> {
    buttons: Buttons<R, V>,
    pot: Potentiometer<ADC, A, P>,
    display: SegmentDisplay<L, C, D>,
}

impl<R, V, ADC, A, P, L, C, D, E> Panel<R, V, ADC, A, P, L, C, D>
where
    R: InputPin<Error = E>,
    V: InputPin<Error = E>,
    A: OneShot<ADC, u16, P>,
    P: Channel<ADC>,
    L: OutputPin<Error = E>,
    C: OutputPin<Error = E>,
    D: OutputPin<Error = E>,
{
    pub fn new(
        buttons: Buttons<R, V>,
        pot: Potentiometer<ADC, A, P>,
        display: SegmentDisplay<L, C, D>,
    ) -> Self {
        Panel {
            buttons,
            pot,
            display,
        }
    }

    /// One pass of the main loop.
    ///
    /// A reset press zeroes the stopwatch and then blocks for the debounce
    /// interval without drawing anything. The display stays dark for as long
    /// as reset is held, since every pass is another reset and another
    /// debounce. Otherwise one refresh pass shows either the potentiometer
    /// voltage (while held) or the elapsed MM.SS.
    pub fn poll<T, W>(&mut self, elapsed: &mut T, delay: &mut W) -> Result<Mode, E>
    where
        T: Elapsed,
        W: DelayMs<u16>,
    {
        let mode = match self.buttons.pressed()? {
            Pressed::Reset => {
                elapsed.reset();
                delay.delay_ms(DEBOUNCE_MS);
                return Ok(Mode::Reset);
            }
            Pressed::ShowVoltage => {
                Mode::Voltage(Reading::millivolts(self.pot.read_millivolts::<E>()?))
            }
            Pressed::None => Mode::Elapsed(Reading::elapsed(elapsed.display_value())),
        };

        match mode {
            Mode::Voltage(reading) | Mode::Elapsed(reading) => {
                self.display.show_reading(reading, delay)?
            }
            Mode::Reset => {}
        }
        Ok(mode)
    }
}

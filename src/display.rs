use core::fmt::Write;

use embedded_hal::blocking::delay::DelayMs;
use embedded_hal::digital::v2::OutputPin;
use heapless::String;

use crate::error::Result;
use crate::segments;
use crate::shift_register::ShiftRegister;
use crate::DIGIT_HOLD_MS;

/// A number to put on the display and where its decimal point goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reading {
    pub value: u16,
    pub decimal: Option<usize>,
}

impl Reading {
    /// Elapsed time as MM.SS.
    pub fn elapsed(value: u16) -> Self {
        Reading {
            value,
            decimal: Some(1),
        }
    }

    /// Millivolts shown as V.mmm.
    pub fn millivolts(value: u16) -> Self {
        Reading {
            value,
            decimal: Some(0),
        }
    }

    /// What the four digits read, e.g. "04.00".
    pub fn render(&self) -> String<8> {
        let mut text = String::new();
        for (slot, digit) in segments::digits(self.value).iter().enumerate() {
            // capacity covers four digits and a point
            let _ = write!(text, "{}", digit);
            if self.decimal == Some(slot) {
                let _ = text.push('.');
            }
        }
        text
    }
}

/// Four multiplexed digits behind a pair of shift registers.
pub struct SegmentDisplay<L, C, D> {
    register: ShiftRegister<L, C, D>,
}

impl<L, C, D, E> SegmentDisplay<L, C, D>
where
    L: OutputPin<Error = E>,
    C: OutputPin<Error = E>,
    D: OutputPin<Error = E>,
{
    pub fn new(register: ShiftRegister<L, C, D>) -> Self {
        SegmentDisplay { register }
    }

    /// Runs one refresh pass: each digit is lit alone for `DIGIT_HOLD_MS`.
    ///
    /// Only one digit is on at any moment, so this has to be called in a
    /// loop for the whole number to look steady.
    pub fn show<W>(&mut self, number: u16, decimal: Option<usize>, delay: &mut W) -> Result<(), E>
    where
        W: DelayMs<u16>,
    {
        for (segments, digit) in segments::frame(number, decimal) {
            self.register.write(segments, digit)?;
            delay.delay_ms(DIGIT_HOLD_MS);
        }
        Ok(())
    }

    pub fn show_reading<W>(&mut self, reading: Reading, delay: &mut W) -> Result<(), E>
    where
        W: DelayMs<u16>,
    {
        self.show(reading.value, reading.decimal, delay)
    }
}

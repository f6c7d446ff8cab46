use embedded_hal::digital::v2::OutputPin;

use crate::error::{Error, Result};

/// Bit-banged serial-in/parallel-out register (74HC595 style), two chained.
///
/// Bits are clocked in on the rising edge of `clock` and only reach the
/// outputs when `latch` goes high.
pub struct ShiftRegister<L, C, D> {
    latch: L,
    clock: C,
    data: D,
}

impl<L, C, D, E> ShiftRegister<L, C, D>
where
    L: OutputPin<Error = E>,
    C: OutputPin<Error = E>,
    D: OutputPin<Error = E>,
{
    /// Takes the three lines and drives them all low.
    pub fn new(latch: L, clock: C, data: D) -> Result<Self, E> {
        let mut register = ShiftRegister { latch, clock, data };
        register.latch.set_low().map_err(Error::Pin)?;
        register.clock.set_low().map_err(Error::Pin)?;
        register.data.set_low().map_err(Error::Pin)?;
        Ok(register)
    }

    /// Sends `segments` then `digit` and latches both at once.
    ///
    /// The segment byte goes first so it ends up in the far register.
    pub fn write(&mut self, segments: u8, digit: u8) -> Result<(), E> {
        self.latch.set_low().map_err(Error::Pin)?;
        self.shift_out(segments)?;
        self.shift_out(digit)?;
        self.latch.set_high().map_err(Error::Pin)
    }

    /// Clocks out 8 bits, MSB first.
    pub fn shift_out(&mut self, value: u8) -> Result<(), E> {
        for i in (0..8).rev() {
            if (value >> i) & 0x01 == 1 {
                self.data.set_high().map_err(Error::Pin)?;
            } else {
                self.data.set_low().map_err(Error::Pin)?;
            }
            self.clock.set_high().map_err(Error::Pin)?;
            self.clock.set_low().map_err(Error::Pin)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{Bus, Event, Line, MockPin};

    fn register(bus: &Bus) -> ShiftRegister<MockPin, MockPin, MockPin> {
        ShiftRegister::new(bus.pin(Line::Latch), bus.pin(Line::Clock), bus.pin(Line::Data)).unwrap()
    }

    #[test]
    fn new_drives_lines_low() {
        let bus = Bus::new();
        let _ = register(&bus);
        assert_eq!(
            bus.events(),
            [
                Event::Set(Line::Latch, false),
                Event::Set(Line::Clock, false),
                Event::Set(Line::Data, false),
            ]
        );
    }

    #[test]
    fn shifts_msb_first() {
        let bus = Bus::new();
        let mut register = register(&bus);
        bus.clear();

        register.shift_out(0b1000_0001).unwrap();

        let events = bus.events();
        assert_eq!(events.len(), 8 * 3);
        let bits: Vec<bool> = events
            .chunks(3)
            .map(|chunk| {
                assert_eq!(chunk[1], Event::Set(Line::Clock, true));
                assert_eq!(chunk[2], Event::Set(Line::Clock, false));
                match chunk[0] {
                    Event::Set(Line::Data, level) => level,
                    other => panic!("expected data line, got {:?}", other),
                }
            })
            .collect();
        assert_eq!(bits, [true, false, false, false, false, false, false, true]);
    }

    #[test]
    fn write_latches_segments_then_digit() {
        let bus = Bus::new();
        let mut register = register(&bus);
        bus.clear();

        register.write(0xC0, 0x02).unwrap();

        let events = bus.events();
        assert_eq!(events.first(), Some(&Event::Set(Line::Latch, false)));
        assert_eq!(events.last(), Some(&Event::Set(Line::Latch, true)));
        // latch stays low for the whole transfer
        let latch_edges = events
            .iter()
            .filter(|e| matches!(e, Event::Set(Line::Latch, _)))
            .count();
        assert_eq!(latch_edges, 2);
        assert_eq!(bus.latched(), [(0xC0, 0x02)]);
    }
}

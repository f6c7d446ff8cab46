//! Recording stand-ins for the board peripherals.

use std::cell::{Cell, RefCell};
use std::convert::Infallible;
use std::rc::Rc;
use std::vec::Vec;

use embedded_hal::adc::{Channel, OneShot};
use embedded_hal::blocking::delay::DelayMs;
use embedded_hal::digital::v2::{InputPin, OutputPin};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line {
    Latch,
    Clock,
    Data,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Set(Line, bool),
    Delay(u16),
}

/// Shared, ordered log of everything the doubles observed.
#[derive(Clone, Default)]
pub struct Bus(Rc<RefCell<Vec<Event>>>);

impl Bus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pin(&self, line: Line) -> MockPin {
        MockPin {
            line,
            bus: self.clone(),
        }
    }

    pub fn delay(&self) -> MockDelay {
        MockDelay { bus: self.clone() }
    }

    pub fn events(&self) -> Vec<Event> {
        self.0.borrow().clone()
    }

    pub fn clear(&self) {
        self.0.borrow_mut().clear();
    }

    /// Bytes committed by each latch rising edge, as (first, second).
    pub fn latched(&self) -> Vec<(u8, u8)> {
        let mut out = Vec::new();
        let mut data = false;
        let mut bits: Vec<bool> = Vec::new();
        for event in self.events() {
            match event {
                Event::Set(Line::Data, level) => data = level,
                Event::Set(Line::Clock, true) => bits.push(data),
                Event::Set(Line::Latch, true) if bits.len() >= 16 => {
                    let tail = &bits[bits.len() - 16..];
                    let byte = |b: &[bool]| b.iter().fold(0u8, |acc, &bit| acc << 1 | bit as u8);
                    out.push((byte(&tail[..8]), byte(&tail[8..])));
                    bits.clear();
                }
                _ => {}
            }
        }
        out
    }

    pub fn delays(&self) -> Vec<u16> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                Event::Delay(ms) => Some(ms),
                _ => None,
            })
            .collect()
    }
}

pub struct MockPin {
    line: Line,
    bus: Bus,
}

impl OutputPin for MockPin {
    type Error = Infallible;

    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.bus.0.borrow_mut().push(Event::Set(self.line, false));
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.bus.0.borrow_mut().push(Event::Set(self.line, true));
        Ok(())
    }
}

pub struct MockDelay {
    bus: Bus,
}

impl DelayMs<u16> for MockDelay {
    fn delay_ms(&mut self, ms: u16) {
        self.bus.0.borrow_mut().push(Event::Delay(ms));
    }
}

/// Button whose level the test flips from outside.
#[derive(Clone, Default)]
pub struct MockButton(Rc<Cell<bool>>);

impl MockButton {
    pub fn press(&self) {
        self.0.set(true);
    }

    pub fn release(&self) {
        self.0.set(false);
    }
}

impl InputPin for MockButton {
    type Error = Infallible;

    fn is_high(&self) -> Result<bool, Self::Error> {
        Ok(!self.0.get())
    }

    fn is_low(&self) -> Result<bool, Self::Error> {
        Ok(self.0.get())
    }
}

pub struct MockAdc;

pub struct MockChannel;

impl Channel<MockAdc> for MockChannel {
    type ID = u8;

    fn channel() -> u8 {
        0
    }
}

/// Converter returning a fixed 12-bit reading, or failing when `None`.
#[derive(Clone)]
pub struct MockConverter(pub Rc<Cell<Option<u16>>>);

impl MockConverter {
    pub fn new(raw: Option<u16>) -> Self {
        Self(Rc::new(Cell::new(raw)))
    }
}

impl OneShot<MockAdc, u16, MockChannel> for MockConverter {
    type Error = ();

    fn read(&mut self, _pin: &mut MockChannel) -> nb::Result<u16, Self::Error> {
        self.0.get().ok_or(nb::Error::Other(()))
    }
}

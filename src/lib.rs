#![cfg_attr(not(test), no_std)]

pub mod analog;
pub mod clock;
pub mod display;
pub mod error;
pub mod input;
pub mod panel;
pub mod segments;
pub mod shift_register;

#[cfg(test)]
mod mock;

/// Crystal on the Pico board.
pub const XOSC_FREQ_HZ: u32 = 12_000_000;
/// Period of the stopwatch alarm.
pub const TICK_PERIOD_US: u32 = 1_000_000;
/// How long each digit stays lit before the next one is selected.
pub const DIGIT_HOLD_MS: u16 = 2;
/// Hold after a reset press so one press does not register twice.
pub const DEBOUNCE_MS: u16 = 200;
/// Full-scale ADC input, in millivolts.
pub const ADC_REFERENCE_MV: u32 = 3300;
pub const DIGIT_COUNT: usize = 4;

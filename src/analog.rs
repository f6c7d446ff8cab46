use core::marker::PhantomData;

use embedded_hal::adc::{Channel, OneShot};

use crate::error::{Error, Result};
use crate::ADC_REFERENCE_MV;

/// Stretches a 12-bit conversion over the full 16-bit range.
///
/// The top nibble is repeated in the low bits so 0xFFF maps to 0xFFFF.
pub fn widen_12bit(raw: u16) -> u16 {
    let raw = raw & 0x0FFF;
    (raw << 4) | (raw >> 8)
}

/// Input voltage in millivolts for a 16-bit sample, 0..=3300.
pub fn millivolts(raw: u16) -> u16 {
    // integer math, the M0+ has no FPU
    (raw as u32 * ADC_REFERENCE_MV / u16::MAX as u32) as u16
}

/// Potentiometer wiper on an ADC channel.
pub struct Potentiometer<ADC, A, P> {
    adc: A,
    pin: P,
    _adc: PhantomData<ADC>,
}

impl<ADC, A, P> Potentiometer<ADC, A, P>
where
    A: OneShot<ADC, u16, P>,
    P: Channel<ADC>,
{
    pub fn new(adc: A, pin: P) -> Self {
        Potentiometer {
            adc,
            pin,
            _adc: PhantomData,
        }
    }

    /// Blocking conversion, scaled to 16 bits.
    pub fn read_u16<E>(&mut self) -> Result<u16, E> {
        let raw = nb::block!(self.adc.read(&mut self.pin)).map_err(|_| Error::Adc)?;
        Ok(widen_12bit(raw))
    }

    pub fn read_millivolts<E>(&mut self) -> Result<u16, E> {
        self.read_u16().map(millivolts)
    }
}

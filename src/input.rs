use embedded_hal::digital::v2::InputPin;

use crate::error::{Error, Result};

/// Which button, if any, is held during this pass of the loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pressed {
    Reset,
    ShowVoltage,
    None,
}

/// The two panel buttons. Both are pulled up and read low while pressed.
pub struct Buttons<R, V> {
    reset: R,
    show_voltage: V,
}

impl<R, V, E> Buttons<R, V>
where
    R: InputPin<Error = E>,
    V: InputPin<Error = E>,
{
    pub fn new(reset: R, show_voltage: V) -> Self {
        Buttons {
            reset,
            show_voltage,
        }
    }

    /// Reset wins when both are held.
    pub fn pressed(&self) -> Result<Pressed, E> {
        if self.reset.is_low().map_err(Error::Pin)? {
            Ok(Pressed::Reset)
        } else if self.show_voltage.is_low().map_err(Error::Pin)? {
            Ok(Pressed::ShowVoltage)
        } else {
            Ok(Pressed::None)
        }
    }
}

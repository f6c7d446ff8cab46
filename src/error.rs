pub type Result<T, E> = core::result::Result<T, Error<E>>;

#[derive(Debug, PartialEq, Eq)]
pub enum Error<PIN> {
    // GPIO error from one of the display or button lines
    Pin(PIN),
    // Analog conversion failed
    Adc,
}

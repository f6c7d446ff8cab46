/// Elapsed time of the stopwatch.
///
/// Minutes run 0..=99 and wrap at 100, not 60, so the display can show
/// up to "99.59" before starting over.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Stopwatch {
    pub mins: u8,
    pub secs: u8,
}

impl Stopwatch {
    pub const fn new() -> Self {
        Self { mins: 0, secs: 0 }
    }

    /// Advances by one second. Called from the 1 Hz alarm interrupt.
    pub fn tick(&mut self) {
        self.secs += 1;
        if self.secs >= 60 {
            self.secs = 0;
            self.add_minute();
        }
    }

    /// Increments the minute, wrapping at 100.
    pub fn add_minute(&mut self) {
        self.mins += 1;
        if self.mins >= 100 {
            self.mins = 0;
        }
    }

    pub fn reset(&mut self) {
        self.mins = 0;
        self.secs = 0;
    }

    /// Combined MMSS value, e.g. 4 min 0 s is 400.
    pub fn display_value(&self) -> u16 {
        self.mins as u16 * 100 + self.secs as u16
    }
}

/// Access to the elapsed time from the polling loop.
///
/// The firmware implements this on top of the shared RTIC resource so every
/// access happens under the resource lock.
pub trait Elapsed {
    fn reset(&mut self);
    fn display_value(&mut self) -> u16;
}

impl Elapsed for Stopwatch {
    fn reset(&mut self) {
        Stopwatch::reset(self)
    }

    fn display_value(&mut self) -> u16 {
        Stopwatch::display_value(self)
    }
}

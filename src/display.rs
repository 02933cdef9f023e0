use core::convert::Infallible;

use embedded_hal::blocking::delay::DelayMs;
use embedded_hal::digital::v2::OutputPin;

use crate::clock::{ClockState, DIGIT_COUNT};
use crate::infallible;

/// Inputs of the BCD-to-7-segment decoder, bit 0 first.
pub const BCD_LINES: usize = 4;

/// The four decoder input levels for a decimal digit, bit 0 first.
pub fn bcd_levels(digit: u8) -> [bool; BCD_LINES] {
    [
        digit & 0b0001 != 0,
        digit & 0b0010 != 0,
        digit & 0b0100 != 0,
        digit & 0b1000 != 0,
    ]
}

/// Scans the six clock digits onto one shared decoder.
///
/// Every digit has its own active-high enable line. A sweep lights the digits
/// left to right, one at a time: the BCD lines are set while every enable is
/// low, then that digit's enable is raised for the dwell time and lowered
/// again. No two enables are ever high together.
pub struct Multiplexer<P> {
    bcd: [P; BCD_LINES],
    enables: [P; DIGIT_COUNT],
    dwell_ms: u32,
}

impl<P: OutputPin<Error = Infallible>> Multiplexer<P> {
    /// Takes ownership of the lines and drives them all low.
    pub fn new(bcd: [P; BCD_LINES], enables: [P; DIGIT_COUNT], dwell_ms: u32) -> Self {
        let mut display = Self {
            bcd,
            enables,
            dwell_ms,
        };
        display.blank();
        display
    }

    /// Turns every digit off and clears the decoder inputs.
    pub fn blank(&mut self) {
        for line in self.enables.iter_mut().chain(self.bcd.iter_mut()) {
            infallible(line.set_low());
        }
    }

    /// Lights each digit of `clock` once, blocking for six dwell periods.
    pub fn sweep<D: DelayMs<u32>>(&mut self, clock: &ClockState, delay: &mut D) {
        let digits = (0..).map_while(|position| clock.digit(position));
        for (enable, digit) in self.enables.iter_mut().zip(digits) {
            for (line, high) in self.bcd.iter_mut().zip(bcd_levels(digit)) {
                infallible(if high { line.set_high() } else { line.set_low() });
            }
            infallible(enable.set_high());
            delay.delay_ms(self.dwell_ms);
            infallible(enable.set_low());
        }
    }
}

/// Number of digits on the display, `A B : C D : E F`.
pub const DIGIT_COUNT: usize = 6;

pub const HOURS_PER_DAY: u8 = 24;
pub const MINUTES_PER_HOUR: u8 = 60;
pub const SECONDS_PER_MINUTE: u8 = 60;

const HOURS_TENS: usize = 0;
const HOURS_UNITS: usize = 1;
const MINUTES_TENS: usize = 2;
const MINUTES_UNITS: usize = 3;
const SECONDS_TENS: usize = 4;
const SECONDS_UNITS: usize = 5;

/// Wall-clock time held as six decimal digits.
///
/// Digit 0 is the hours tens (`A`), digit 5 the seconds units (`F`).
/// Hours stay in 0..=23 and minutes and seconds in 0..=59.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ClockState {
    digits: [u8; DIGIT_COUNT],
}

impl ClockState {
    /// Out-of-range fields wrap, e.g. 25 hours becomes 01.
    pub fn new(hours: u8, mins: u8, secs: u8) -> Self {
        let mut clock = Self::default();
        clock.set_hours(hours);
        clock.set_minutes(mins);
        clock.set_seconds(secs);
        clock
    }

    /// Advances by one second.
    ///
    /// Seconds and minutes ripple digit by digit (units mod 10, tens mod 6).
    /// A carry out of the minutes advances hours modulo 24, so 23:59:59 rolls
    /// over to 00:00:00.
    pub fn tick(&mut self) {
        let [_, _, min_tens, min_units, sec_tens, sec_units] = &mut self.digits;
        let hour_carry = roll(sec_units, 10)
            && roll(sec_tens, 6)
            && roll(min_units, 10)
            && roll(min_tens, 6);
        if hour_carry {
            self.add_hour();
        }
    }

    /// Advances the hour, wrapping 23 to 0. Minutes and seconds are untouched.
    pub fn add_hour(&mut self) {
        self.set_hours(self.hours() + 1);
    }

    /// Advances the minute, wrapping 59 to 0 without carrying into the hour.
    pub fn add_minute(&mut self) {
        self.set_minutes(self.minutes() + 1);
    }

    pub fn hours(&self) -> u8 {
        join(self.digits[HOURS_TENS], self.digits[HOURS_UNITS])
    }

    pub fn minutes(&self) -> u8 {
        join(self.digits[MINUTES_TENS], self.digits[MINUTES_UNITS])
    }

    pub fn seconds(&self) -> u8 {
        join(self.digits[SECONDS_TENS], self.digits[SECONDS_UNITS])
    }

    pub fn set_hours(&mut self, hours: u8) {
        self.split_into(HOURS_TENS, hours % HOURS_PER_DAY);
    }

    pub fn set_minutes(&mut self, mins: u8) {
        self.split_into(MINUTES_TENS, mins % MINUTES_PER_HOUR);
    }

    pub fn set_seconds(&mut self, secs: u8) {
        self.split_into(SECONDS_TENS, secs % SECONDS_PER_MINUTE);
    }

    /// The digit shown at `position` (0 = hours tens), or `None` past the last digit.
    pub fn digit(&self, position: usize) -> Option<u8> {
        self.digits.get(position).copied()
    }

    pub fn digits(&self) -> [u8; DIGIT_COUNT] {
        self.digits
    }

    fn split_into(&mut self, tens: usize, value: u8) {
        self.digits[tens] = value / 10;
        self.digits[tens + 1] = value % 10;
    }
}

/// Increments one digit, wrapping at `modulus`. Returns true on wrap.
fn roll(digit: &mut u8, modulus: u8) -> bool {
    *digit += 1;
    if *digit >= modulus {
        *digit = 0;
        true
    } else {
        false
    }
}

fn join(tens: u8, units: u8) -> u8 {
    tens * 10 + units
}

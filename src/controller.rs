//! The clock's main loop body.

use core::convert::Infallible;

use embedded_hal::blocking::delay::DelayMs;
use embedded_hal::digital::v2::{InputPin, OutputPin};

use crate::button::Button;
use crate::clock::ClockState;
use crate::config::ClockConfig;
use crate::display::Multiplexer;
use crate::millis::Millis;

/// What happened during one pass of the main loop.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Step {
    pub second_elapsed: bool,
    pub hour_advanced: bool,
    pub minute_advanced: bool,
}

/// Owns the time, the buttons and the display.
pub struct Controller<I, O> {
    clock: ClockState,
    hour_button: Button<I>,
    minute_button: Button<I>,
    display: Multiplexer<O>,
    last_second: Millis,
    second_ms: u32,
}

impl<I, O> Controller<I, O>
where
    I: InputPin<Error = Infallible>,
    O: OutputPin<Error = Infallible>,
{
    /// `now` is taken as the most recent second boundary.
    pub fn new(
        clock: ClockState,
        hour_button: Button<I>,
        minute_button: Button<I>,
        display: Multiplexer<O>,
        config: &ClockConfig,
        now: Millis,
    ) -> Self {
        Self {
            clock,
            hour_button,
            minute_button,
            display,
            last_second: now,
            second_ms: config.second_ms,
        }
    }

    pub fn clock(&self) -> &ClockState {
        &self.clock
    }

    /// Runs one loop iteration: advance time if a second has passed, handle
    /// the buttons, then sweep the display once.
    ///
    /// The second boundary moves to `now` rather than by a fixed step, so a
    /// late iteration delays the following second instead of bunching ticks.
    pub fn step<D: DelayMs<u32>>(&mut self, now: Millis, delay: &mut D) -> Step {
        let mut step = Step::default();

        if now.since(self.last_second) >= self.second_ms {
            self.last_second = now;
            self.clock.tick();
            step.second_elapsed = true;
            #[cfg(feature = "defmt")]
            {
                defmt::trace!("tick {}", self.clock);
                if self.clock.minutes() == 0 && self.clock.seconds() == 0 {
                    defmt::debug!("hour rollover to {=u8}", self.clock.hours());
                }
            }
        }

        if self.hour_button.poll(now) {
            self.clock.add_hour();
            step.hour_advanced = true;
            #[cfg(feature = "defmt")]
            defmt::info!("hour set to {=u8}", self.clock.hours());
        }
        if self.minute_button.poll(now) {
            self.clock.add_minute();
            step.minute_advanced = true;
            #[cfg(feature = "defmt")]
            defmt::info!("minute set to {=u8}", self.clock.minutes());
        }

        self.display.sweep(&self.clock, delay);
        step
    }
}

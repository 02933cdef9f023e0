use core::convert::Infallible;

use embedded_hal::digital::v2::InputPin;

use crate::infallible;
use crate::millis::Millis;

/// Turns a sampled button level into discrete press events.
///
/// A press is reported on a released-to-pressed edge, and only when more than
/// `interval_ms` has passed since the last reported press. The sampled level
/// is always remembered, so contact bounce inside the window cannot re-arm
/// the edge early.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Debouncer {
    was_pressed: bool,
    last_press: Millis,
    interval_ms: u32,
}

impl Debouncer {
    pub const fn new(interval_ms: u32) -> Self {
        Self {
            was_pressed: false,
            last_press: Millis(0),
            interval_ms,
        }
    }

    /// Feeds one sample. Returns true if it completes an accepted press.
    pub fn update(&mut self, pressed: bool, now: Millis) -> bool {
        let fired =
            pressed && !self.was_pressed && now.since(self.last_press) > self.interval_ms;
        if fired {
            self.last_press = now;
        }
        self.was_pressed = pressed;
        fired
    }
}

/// An active-low push-button (pressed pulls the pin to ground).
pub struct Button<P> {
    pin: P,
    debouncer: Debouncer,
}

impl<P: InputPin<Error = Infallible>> Button<P> {
    pub fn new(pin: P, debounce_ms: u32) -> Self {
        Self {
            pin,
            debouncer: Debouncer::new(debounce_ms),
        }
    }

    pub fn is_pressed(&self) -> bool {
        infallible(self.pin.is_low())
    }

    /// Samples the pin. Returns true once per accepted press.
    pub fn poll(&mut self, now: Millis) -> bool {
        let pressed = self.is_pressed();
        self.debouncer.update(pressed, now)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    /// Input pin whose level is set from the test through a shared handle.
    #[derive(Clone, Default)]
    pub(crate) struct FakeButtonPin {
        pressed: Rc<Cell<bool>>,
    }

    impl FakeButtonPin {
        pub(crate) fn press(&self) {
            self.pressed.set(true);
        }

        pub(crate) fn release(&self) {
            self.pressed.set(false);
        }
    }

    impl InputPin for FakeButtonPin {
        type Error = Infallible;

        fn is_high(&self) -> Result<bool, Infallible> {
            Ok(!self.pressed.get())
        }

        fn is_low(&self) -> Result<bool, Infallible> {
            Ok(self.pressed.get())
        }
    }

    const DEBOUNCE_MS: u32 = 200;

    #[test]
    fn test_single_press_fires_once() {
        let mut debouncer = Debouncer::new(DEBOUNCE_MS);
        assert!(debouncer.update(true, Millis(1000)));
        // Held down
        assert!(!debouncer.update(true, Millis(1001)));
        assert!(!debouncer.update(true, Millis(1500)));
        assert!(!debouncer.update(false, Millis(1600)));
    }

    #[test]
    fn test_presses_closer_than_interval_fire_once() {
        let mut debouncer = Debouncer::new(DEBOUNCE_MS);
        assert!(debouncer.update(true, Millis(1000)));
        assert!(!debouncer.update(false, Millis(1080)));
        assert!(!debouncer.update(true, Millis(1150)));
    }

    #[test]
    fn test_presses_farther_than_interval_fire_twice() {
        let mut debouncer = Debouncer::new(DEBOUNCE_MS);
        assert!(debouncer.update(true, Millis(1000)));
        assert!(!debouncer.update(false, Millis(1100)));
        assert!(debouncer.update(true, Millis(1250)));
    }

    #[test]
    fn test_interval_is_exclusive() {
        let mut debouncer = Debouncer::new(DEBOUNCE_MS);
        assert!(debouncer.update(true, Millis(1000)));
        debouncer.update(false, Millis(1100));
        assert!(!debouncer.update(true, Millis(1200)));
        debouncer.update(false, Millis(1201));
        assert!(debouncer.update(true, Millis(1202)));
    }

    #[test]
    fn test_bounce_absorbed() {
        let mut debouncer = Debouncer::new(DEBOUNCE_MS);
        let samples = [true, false, true, false, true, true, true];
        let fired = samples
            .iter()
            .enumerate()
            .filter(|&(i, &level)| debouncer.update(level, Millis(5000 + i as u32)))
            .count();
        assert_eq!(fired, 1);
    }

    #[test]
    fn test_press_held_through_window_does_not_refire() {
        let mut debouncer = Debouncer::new(DEBOUNCE_MS);
        assert!(debouncer.update(true, Millis(1000)));
        assert!(!debouncer.update(true, Millis(2000)));
    }

    #[test]
    fn test_ignores_press_right_after_power_up() {
        let mut debouncer = Debouncer::new(DEBOUNCE_MS);
        assert!(!debouncer.update(true, Millis(150)));
        debouncer.update(false, Millis(180));
        assert!(debouncer.update(true, Millis(201)));
    }

    #[test]
    fn test_interval_across_counter_wrap() {
        let mut debouncer = Debouncer::new(DEBOUNCE_MS);
        assert!(debouncer.update(true, Millis(u32::MAX - 50)));
        debouncer.update(false, Millis(u32::MAX));
        assert!(!debouncer.update(true, Millis(100)));
        debouncer.update(false, Millis(120));
        assert!(debouncer.update(true, Millis(200)));
    }

    #[test]
    fn test_button_reads_active_low_pin() {
        let pin = FakeButtonPin::default();
        let mut button = Button::new(pin.clone(), DEBOUNCE_MS);
        assert!(!button.is_pressed());
        assert!(!button.poll(Millis(1000)));

        pin.press();
        assert!(button.is_pressed());
        assert!(button.poll(Millis(1010)));
        assert!(!button.poll(Millis(1020)));

        pin.release();
        assert!(!button.poll(Millis(1300)));
        pin.press();
        assert!(button.poll(Millis(1310)));
    }
}

//! Millisecond counter shared between the tick interrupt and the main loop.

use core::cell::Cell;

use critical_section::Mutex;

/// A reading of the millisecond counter.
///
/// The counter wraps after roughly 49.7 days, so readings are only ever
/// compared through [`Millis::since`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Millis(pub u32);

impl Millis {
    /// Milliseconds elapsed from `earlier` to `self`, correct across a wrap.
    #[must_use]
    pub const fn since(self, earlier: Millis) -> u32 {
        self.0.wrapping_sub(earlier.0)
    }
}

/// Source of the current time in milliseconds.
pub trait Monotonic {
    fn now(&self) -> Millis;
}

/// Counter advanced once per millisecond by the tick interrupt.
///
/// Both sides access the value inside a critical section, so a read never
/// observes a half-written update.
pub struct MillisCounter {
    count: Mutex<Cell<u32>>,
}

impl MillisCounter {
    #[must_use]
    pub const fn new() -> Self {
        Self::starting_at(0)
    }

    #[must_use]
    pub const fn starting_at(ms: u32) -> Self {
        Self {
            count: Mutex::new(Cell::new(ms)),
        }
    }

    /// Advances the counter by one millisecond. Called from interrupt context.
    pub fn tick(&self) {
        critical_section::with(|cs| {
            let count = self.count.borrow(cs);
            count.set(count.get().wrapping_add(1));
        });
    }
}

impl Default for MillisCounter {
    fn default() -> Self {
        Self::new()
    }
}

impl Monotonic for MillisCounter {
    fn now(&self) -> Millis {
        critical_section::with(|cs| Millis(self.count.borrow(cs).get()))
    }
}

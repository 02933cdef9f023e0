/// Timing parameters for the clock's main loop.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ClockConfig {
    /// Interval between time advances.
    pub second_ms: u32,
    /// Minimum spacing between two accepted presses of the same button.
    pub debounce_ms: u32,
    /// How long each digit stays lit during a display sweep.
    pub dwell_ms: u32,
}

impl ClockConfig {
    pub const DEFAULT: Self = Self {
        second_ms: 1000,
        debounce_ms: 200,
        dwell_ms: 3,
    };
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

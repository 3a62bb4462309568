use core::fmt;
use core::ops::Div;
use std::time::Duration;

/// Precision threshold for the approximate comparisons, in Hz.
const APPROX_TOLERANCE_HZ: f32 = 0.001;

/// Frames per second, stored as a floating-point frequency paired with its
/// period in whole nanoseconds.
///
/// The two fields are kept consistent by construction: one factory derives
/// the period from the frequency (rounded to the nearest nanosecond), the
/// other derives the frequency from the period. Non-positive input is not an
/// error — it normalizes to the invalid sentinel (`0.0` Hz, `0` ns), which
/// every operation treats as the numeric value `0`.
///
/// ```
/// use cadence_core::{Fps, approx};
///
/// let fps = Fps::from_value(60.0);
/// assert!(approx::eq(fps, Fps::from_period_nsecs(16_666_667)));
/// ```
///
/// The derived `PartialEq` is exact float equality. Tolerance-based
/// comparison is opt-in via [`crate::approx`].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Fps {
    frequency: f32,
    period: i64,
}

impl Fps {
    /// Builds an `Fps` from a frequency in Hz.
    ///
    /// The period is `1e9 / frequency` rounded to the nearest nanosecond, so
    /// round-tripping through [`Fps::period_nsecs`] and
    /// [`Fps::from_period_nsecs`] does not in general reproduce `frequency`
    /// exactly. Non-positive input yields the invalid sentinel.
    #[inline]
    pub fn from_value(frequency: f32) -> Self {
        if frequency > 0.0 {
            let period = (1.0e9_f64 / f64::from(frequency)).round() as i64;
            Self { frequency, period }
        } else {
            Self::default()
        }
    }

    /// Builds an `Fps` from a period in nanoseconds.
    ///
    /// Non-positive input yields the invalid sentinel.
    #[inline]
    pub fn from_period_nsecs(period: i64) -> Self {
        if period > 0 {
            Self { frequency: (1.0e9_f64 / period as f64) as f32, period }
        } else {
            Self::default()
        }
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self.frequency > 0.0
    }

    /// Frequency in Hz. `0.0` for the invalid sentinel.
    #[inline]
    pub fn value(self) -> f32 {
        self.frequency
    }

    /// Frequency rounded to the nearest whole Hz.
    #[inline]
    pub fn int_value(self) -> i32 {
        self.frequency.round() as i32
    }

    /// Period as a `Duration`. Zero for the invalid sentinel.
    #[inline]
    pub fn period(self) -> Duration {
        Duration::from_nanos(self.period as u64)
    }

    /// Period in nanoseconds. `0` for the invalid sentinel.
    #[inline]
    pub fn period_nsecs(self) -> i64 {
        self.period
    }
}

/// Plain floating-point `<` on the frequencies.
///
/// This is the exact comparison; the [`crate::approx`] operators do not use
/// it directly without the tolerance band.
#[inline]
pub fn is_strictly_less(lhs: Fps, rhs: Fps) -> bool {
    lhs.value() < rhs.value()
}

/// True when the frequencies differ by less than 0.001 Hz.
///
/// Does not satisfy equivalence: a chain of values each within tolerance of
/// its neighbor can span more than the tolerance end to end, so the relation
/// is not transitive.
#[inline]
pub fn is_approx_equal(lhs: Fps, rhs: Fps) -> bool {
    (lhs.value() - rhs.value()).abs() < APPROX_TOLERANCE_HZ
}

/// True when `lhs` is strictly below `rhs` by more than the tolerance.
///
/// Does not satisfy strict weak order (consequence of the non-transitive
/// [`is_approx_equal`]).
#[inline]
pub fn is_approx_less(lhs: Fps, rhs: Fps) -> bool {
    is_strictly_less(lhs, rhs) && !is_approx_equal(lhs, rhs)
}

impl Div<u32> for Fps {
    type Output = Fps;

    /// Divides a rate by multiplying its period, preserving whole-nanosecond
    /// precision instead of dividing the float frequency.
    #[inline]
    fn div(self, divisor: u32) -> Fps {
        Fps::from_period_nsecs(self.period * i64::from(divisor))
    }
}

impl fmt::Display for Fps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} Hz", self.frequency)
    }
}

use core::fmt;

use crate::approx;
use crate::fps::{Fps, is_approx_equal};

/// Closed interval of frame rates.
///
/// `min <= max` is not enforced: callers may build transiently inverted
/// ranges, and containment simply evaluates over whatever bounds are
/// present. The default range spans everything, `[0 Hz, f32::MAX]`.
///
/// There is no `PartialEq`; range equality is tolerance-based and opt-in via
/// [`FpsRange::approx_eq`].
#[derive(Debug, Clone, Copy)]
pub struct FpsRange {
    pub min: Fps,
    pub max: Fps,
}

impl Default for FpsRange {
    fn default() -> Self {
        // The upper bound's derived period rounds to 0 ns; it exists only to
        // make the default range all-inclusive.
        Self { min: Fps::from_value(0.0), max: Fps::from_value(f32::MAX) }
    }
}

impl FpsRange {
    /// Boundary-inclusive, tolerance-aware containment.
    #[inline]
    pub fn includes(self, fps: Fps) -> bool {
        approx::le(self.min, fps) && approx::le(fps, self.max)
    }

    /// True when `other` lies entirely within `self` (tolerance-aware).
    #[inline]
    pub fn includes_range(self, other: FpsRange) -> bool {
        approx::le(self.min, other.min) && approx::ge(self.max, other.max)
    }

    /// Componentwise tolerance equality of the bounds.
    #[inline]
    pub fn approx_eq(self, other: FpsRange) -> bool {
        is_approx_equal(self.min, other.min) && is_approx_equal(self.max, other.max)
    }
}

impl fmt::Display for FpsRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.min, self.max)
    }
}

/// The refresh-rate interval of a display mode (`physical`) paired with the
/// frame-swap-rate interval permitted within it (`render`).
#[derive(Debug, Clone, Copy, Default)]
pub struct FpsRanges {
    /// Refresh rates the display mode may run at.
    pub physical: FpsRange,

    /// Rates frames may be swapped at; expected to sit within `physical`.
    pub render: FpsRange,
}

impl FpsRanges {
    /// True when the render ceiling does not exceed the physical ceiling
    /// (tolerance-aware). A queried invariant, never enforced — violating
    /// ranges are constructible and callers check this where it matters.
    #[inline]
    pub fn valid(self) -> bool {
        approx::ge(self.physical.max, self.render.max)
    }

    /// Componentwise tolerance equality of both ranges.
    #[inline]
    pub fn approx_eq(self, other: FpsRanges) -> bool {
        self.physical.approx_eq(other.physical) && self.render.approx_eq(other.render)
    }
}

impl fmt::Display for FpsRanges {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{physical={}, render={}}}", self.physical, self.render)
    }
}

//! Tolerance-banded comparison of [`Fps`] values.
//!
//! Ordinary `==`/`<` on [`Fps`] (where exposed) is exact float comparison.
//! Code that wants the 0.001 Hz tolerance band opts in by calling these
//! functions qualified — `approx::eq(a, b)` — so tolerance semantics never
//! leak in silently.
//!
//! The underlying relation is not an equivalence ([`is_approx_equal`] is not
//! transitive) and [`lt`] is not a strict weak order; callers must not feed
//! these into sort or dedup routines that assume those laws.

use crate::fps::{Fps, is_approx_equal, is_approx_less};

/// `lhs == rhs` within tolerance. Not transitive.
#[inline]
pub fn eq(lhs: Fps, rhs: Fps) -> bool {
    is_approx_equal(lhs, rhs)
}

/// Negation of [`eq`].
#[inline]
pub fn ne(lhs: Fps, rhs: Fps) -> bool {
    !is_approx_equal(lhs, rhs)
}

/// `lhs < rhs` by more than the tolerance. Not a strict weak order.
#[inline]
pub fn lt(lhs: Fps, rhs: Fps) -> bool {
    is_approx_less(lhs, rhs)
}

/// `lhs > rhs` by more than the tolerance.
#[inline]
pub fn gt(lhs: Fps, rhs: Fps) -> bool {
    is_approx_less(rhs, lhs)
}

/// `lhs <= rhs` with tolerance: true unless `rhs` is approx-less than `lhs`.
#[inline]
pub fn le(lhs: Fps, rhs: Fps) -> bool {
    !is_approx_less(rhs, lhs)
}

/// `lhs >= rhs` with tolerance: true unless `lhs` is approx-less than `rhs`.
#[inline]
pub fn ge(lhs: Fps, rhs: Fps) -> bool {
    !is_approx_less(lhs, rhs)
}

/// How many whole `rhs`-periods fit in one `lhs`-period.
///
/// `ceil(lhs / rhs - 1e-5)`: the epsilon keeps a ratio that is an integer up
/// to float noise (e.g. `2.000000001`) from ceiling one too high, while a
/// genuinely fractional ratio like `90 / 60 = 1.5` still ceils to `2`.
#[inline]
pub fn div(lhs: Fps, rhs: Fps) -> u32 {
    (f64::from(lhs.value() / rhs.value()) - 1e-5).ceil() as u32
}

/// Equality policy for tolerance-based lookup, e.g. grouping rates into
/// buckets of "the same" frequency.
///
/// Because the relation is not transitive, bucket membership can depend on
/// insertion order when values straddle the tolerance band. That imprecision
/// is bounded and accepted; do not use this where a true equivalence is
/// required.
#[derive(Debug, Clone, Copy, Default)]
pub struct FpsApproxEq;

impl FpsApproxEq {
    #[inline]
    pub fn eq(self, lhs: Fps, rhs: Fps) -> bool {
        is_approx_equal(lhs, rhs)
    }
}

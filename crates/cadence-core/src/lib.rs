//! Frequency/period value types for display timing.
//!
//! This crate is intentionally dependency-free so scheduler, compositor, and
//! tooling layers can consume it without pulling in any engine or GPU code.
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`fps`] | `Fps` — frequency in Hz paired with its nanosecond period |
//! | [`approx`] | opt-in tolerance-banded comparisons and rate division |
//! | [`range`] | `FpsRange`, `FpsRanges` — closed rate intervals |
//! | [`category`] | `FrameRateCategory` — ordinal rate tiers |
//!
//! # Quick start
//!
//! ```rust
//! use cadence_core::{Fps, FpsRange, approx};
//!
//! let fps = Fps::from_value(60.0);
//! assert_eq!(fps.period_nsecs(), 16_666_667);
//! assert!(approx::eq(fps, Fps::from_period_nsecs(16_666_667)));
//!
//! let supported = FpsRange { min: Fps::from_value(24.0), max: Fps::from_value(120.0) };
//! assert!(supported.includes(fps));
//! assert_eq!(fps.to_string(), "60.00 Hz");
//! ```
//!
//! All types are plain `Copy` values; nothing here allocates, blocks, or
//! mutates shared state. The approximate comparisons deliberately trade the
//! equivalence/ordering laws for float-noise tolerance — see [`approx`] for
//! the caveats before using them in anything law-sensitive.

pub mod approx;
pub mod category;
pub mod fps;
pub mod range;

pub use category::FrameRateCategory;
pub use fps::{Fps, is_approx_equal, is_approx_less, is_strictly_less};
pub use range::{FpsRange, FpsRanges};

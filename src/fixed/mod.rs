//! This module and its submodules contain the software implementation of a binary fixed-point
//! type, generic over the machine integer used for storage and over the split between integer and
//! fractional bits.
//!
//! Some notation used in the comments:
//!
//!   - **Leftmost bits/msb**: most-significant bits.
//!   - **Rightmost bits/lsb**: least-significant bits.
//!   - **Bit 0, bit 1, .. bit N-1**: numbered least significant to most significant, starts at 0.
//!   - **raw**: the machine integer stored in a [`Fixed`], i.e. the represented value times `2^F`.
//!   - **ulp**: one unit in the last place, i.e. `2^-F`.

/// A binary fixed-point number with `I` integer bits and `F` fractional bits, stored in an `Int`.
///
/// The value represented is `raw / 2^F`, where `raw` is the stored machine integer. If `Int` is
/// signed, so is the fixed-point number, and its sign bit counts as one of the `I` integer bits.
/// `I + F` must be exactly the width of `Int`; any other choice fails to compile.
///
/// Examples:
///
/// ```
/// # use soft_fixed::Fixed;
/// type Foo = Fixed::<16, 16, i32>;  // Q16.16: range [-32768, 32768[, resolution 2^-16
/// type Bar = Fixed::<2, 6, u8>;     // Q2.6 unsigned: range [0, 4[, resolution 2^-6
/// ```
pub struct Fixed<
  const I: u32,
  const F: u32,
  Int: crate::Int,
> (Int);

/// Basics
mod basics;

/// Constants (zero, one, min, max, etc)
mod consts;

/// Manual implementation of `derive`able traits for [`Fixed`].
mod traits;

/// Conversions to and from floats.
pub mod convert;
pub use convert::OutOfRange;

/// Unary operations (negation, ulp stepping).
mod unary;

/// Binary arithmetic operators.
mod ops;

/// Elementary functions, and the tables they use.
mod math;
pub use math::lut;

/// Debug, Display, and the diagnostic dump.
mod fmt;
pub use fmt::Dump;


/// Exact rational values, used as a test oracle.
#[cfg(test)]
mod rational;

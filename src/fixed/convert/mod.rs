use super::*;

/// Used to do value-to-value conversions that may *round*, and that may *wrap around* if the
/// value is out of range, exactly as integer hardware would. It is the reciprocal of
/// [`RoundInto`].
///
/// The interface is identical to the standard [`From`], but unlike the
/// [convention for the `From` trait](core::convert::From#when-to-implement-from), these
/// conversions are _not necessarily lossless_. If you need the conversion to fail instead of
/// wrapping, use [`TryFrom`], which is also implemented for [`Fixed`].
///
/// Many of the usage guidelines for [`From`] also apply to [`RoundFrom`]: if you do implement it
/// for your types, prefer implementing [`RoundFrom`] over [`RoundInto`] because implementing
/// [`RoundFrom`] automatically provides one with an implementation of [`RoundInto`], and prefer
/// using [`RoundInto`] over [`RoundFrom`] when specifying trait bounds on a generic function.
/// There's also a blanket implementation of `RoundFrom<T> for T`, and `RoundFrom<T> for U`
/// implies `RoundInto<U> for T`.
///
/// # Encoding floats
///
/// A float `x` is encoded into a `Fixed<I, F, _>` as follows:
///
///   - Compute `x * 2^F`, and round it to the nearest integer, ties away from zero (i.e. add
///     `0.5` if `x` is non-negative, `-0.5` if it is negative, and truncate toward zero).
///   - Keep the lowest `I + F` bits of that integer, in two's complement. In other words, if `x` is
///     outside `MIN ..= MAX`, it *silently wraps around*, just like `as` between machine integers.
///   - NaN is encoded as `0`.
///
/// # Decoding floats
///
/// A `Fixed` is decoded as `raw / 2^F`, computed in the destination float type. Decoding to `f64`
/// is exact for up to 53 significant bits, decoding to `f32` for up to 24.
///
/// # Examples
///
/// ```
/// # use soft_fixed::*;
/// assert_eq!(u4f4::round_from(0.1_f64).to_bits(), 0b0000_0010);  // 1.6 rounds up to 2
/// assert_eq!(u4f4::round_from(16.0_f64), u4f4::ZERO);              // wraps around
/// assert_eq!(i4f4::round_from(-0.03125_f64), -i4f4::MIN_POSITIVE); // tie rounds away from 0
///
/// assert_eq!(f64::round_from(i16f16::MIN_POSITIVE), 1.52587890625e-5);
/// assert_eq!(f32::round_from(u4f4::MAX), 15.9375);
/// ```
pub trait RoundFrom<T> {
  /// Converts to this type from the input type, rounding if needed and wrapping around if out of
  /// range (see [`RoundFrom`]).
  ///
  /// If you're looking for the usual Rust-y conversions ([`From`] if exact, [`TryFrom`] if
  /// fallible), use those traits instead.
  #[must_use]
  fn round_from(value: T) -> Self;
}

/// Used to do value-to-value conversions that may *round*, and that may *wrap around* if the
/// value is out of range. It is the reciprocal of [`RoundFrom`]; see there for the exact rules.
///
/// # Examples
///
/// ```
/// # use soft_fixed::*;
/// let x: i8f8 = 1.5_f64.round_into();
/// let y: f64 = (x * x).round_into();
/// assert_eq!(y, 2.25);
/// ```
pub trait RoundInto<T> {
  /// Converts this type into the (usually inferred) input type, rounding if needed and wrapping
  /// around if out of range (see [`RoundFrom`]).
  ///
  /// If you're looking for the usual Rust-y conversions ([`Into`] if exact, [`TryInto`] if
  /// fallible), use those traits instead.
  #[must_use]
  fn round_into(self) -> T;
}

impl<T> RoundFrom<T> for T {
  fn round_from(value: T) -> Self {
    value
  }
}

impl<T, U> RoundInto<U> for T where U: RoundFrom<T> {
  fn round_into(self) -> U {
    U::round_from(self)
  }
}

/// The error type returned when a checked conversion ([`TryFrom`]) into a [`Fixed`] fails,
/// because the value is NaN, infinite, or would round to something outside `MIN ..= MAX`.
#[derive(Debug)]
#[derive(Clone, Copy)]
#[derive(PartialEq, Eq)]
pub struct OutOfRange;

impl core::fmt::Display for OutOfRange {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.write_str("value out of the representable range of the fixed-point type")
  }
}

impl core::error::Error for OutOfRange {}

mod float;

#![cfg_attr(not(test), no_std)]
//! This crate provides a deterministic, integer-only software implementation of binary
//! [fixed-point arithmetic](https://en.wikipedia.org/wiki/Fixed-point_arithmetic), including an
//! exponential function that is computed purely from bit decomposition and lookup tables.
//!
//! # Introduction
//!
//! A fixed-point number in the format *Q I.F* is an integer of `I + F` bits, read as
//! `raw / 2^F`. Arithmetic on such numbers needs nothing but integer instructions, which makes
//! them attractive on targets without an FPU, in code that must be bit-for-bit reproducible across
//! machines, or in code destined for high-level synthesis.
//!
//! This crate implements them for any split of an 8, 16, 32, or 64-bit machine integer, signed or
//! unsigned:
//!
//!   - Encoding from and decoding to `f32`/`f64` (round to nearest, ties away from zero).
//!   - `+`, `-`, `*`, `/` and comparisons. Multiplication and division are computed in an integer
//!     twice as wide as the storage, so no precision is lost before the final narrowing.
//!   - [`Fixed::exp`], an approximation of `e^x` from two tables of precomputed `exp(2^±k)`.
//!
//! # Usage
//!
//! ```
//! // Use the predefined types, or define your own.
//! # use soft_fixed::Fixed;
//! use soft_fixed::{u4f4, i16f16, u32f32};
//! type MyFixed = Fixed<6, 10, i16>;  // 6 integer bits (incl. sign), 10 fractional bits
//!
//! // Create values from floats, constants, or a raw bit representation.
//! use soft_fixed::{RoundFrom, RoundInto};
//! let a = i16f16::round_from(2.71_f64);
//! let b = MyFixed::round_from(-3.5_f32);
//! let c = u4f4::from_bits(0b0011_1000);
//! let d = u32f32::MIN_POSITIVE;
//!
//! // Perform basic arithmetic and comparisons with the usual operators.
//! assert_eq!(u4f4::round_from(5.0_f64) + u4f4::round_from(6.0_f64), u4f4::round_from(11.0_f64));
//! assert_eq!(c * u4f4::round_from(2.0_f64), u4f4::round_from(7.0_f64));
//! let e: f64 = c.round_into();
//! assert_eq!(e, 3.5);
//! assert!(b < MyFixed::ZERO);
//! assert!(d > u32f32::ZERO);
//!
//! // Convert back to floats, or to the raw bit representation.
//! assert_eq!(f64::round_from(c), 3.5);
//! assert_eq!(u4f4::ONE.to_bits(), 0b0001_0000);
//!
//! // Exponential, without any floating point operation.
//! assert!((f64::round_from(a.exp()) - 2.71_f64.exp()).abs() < 1e-3);
//! ```
//!
//! # Overflow
//!
//! This type models raw integer hardware: encoding an out-of-range value, or an arithmetic result
//! that does not fit, silently wraps around (see [`RoundFrom`] for the exact encoding rule). Use
//! [`TryFrom`] for a checked encoding. Division by zero panics, exactly like integer division.
//! [`Fixed::exp`] is the exception: it saturates at [`Fixed::MAX`].

mod fixed;
mod underlying;

pub use fixed::Fixed;
pub use fixed::{Dump, OutOfRange};
pub use fixed::lut;
pub use underlying::{Int, Promoted};

/// Unsigned 8-bit fixed-point number with 4 integer and 4 fractional bits (Q4.4).
#[allow(non_camel_case_types)]
pub type u4f4 = Fixed<4, 4, u8>;

/// Signed 8-bit fixed-point number with 4 integer bits (including the sign) and 4 fractional bits.
#[allow(non_camel_case_types)]
pub type i4f4 = Fixed<4, 4, i8>;

/// Unsigned 16-bit fixed-point number with 8 integer and 8 fractional bits (Q8.8).
#[allow(non_camel_case_types)]
pub type u8f8 = Fixed<8, 8, u16>;

/// Signed 16-bit fixed-point number with 8 integer bits (including the sign) and 8 fractional bits.
#[allow(non_camel_case_types)]
pub type i8f8 = Fixed<8, 8, i16>;

/// Unsigned 32-bit fixed-point number with 16 integer and 16 fractional bits (Q16.16).
#[allow(non_camel_case_types)]
pub type u16f16 = Fixed<16, 16, u32>;

/// Signed 32-bit fixed-point number with 16 integer bits (including the sign) and 16 fractional
/// bits.
#[allow(non_camel_case_types)]
pub type i16f16 = Fixed<16, 16, i32>;

/// Unsigned 64-bit fixed-point number with 32 integer and 32 fractional bits (Q32.32).
#[allow(non_camel_case_types)]
pub type u32f32 = Fixed<32, 32, u64>;

/// Signed 64-bit fixed-point number with 32 integer bits (including the sign) and 32 fractional
/// bits.
#[allow(non_camel_case_types)]
pub type i32f32 = Fixed<32, 32, i64>;

pub use fixed::convert::{RoundFrom, RoundInto};

#[cfg(test)]
const PROPTEST_CASES: u32 = if cfg!(debug_assertions) {0x1000} else {0x10000};

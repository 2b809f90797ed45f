//! This module contains all the implementations of the necessary underlying integer operations
//! needed for integer-only fixed-point arithmetic. These are hidden from the end-user, which only
//! sees the sealed [`Int`] trait, implemented for `i8`, `i16`, `i32`, `i64`, `u8`, `u16`, `u32`,
//! and `u64`, and the [`Promoted`] type alias.

/// The trait for the underlying machine integer types that can be used to store a fixed-point
/// number (only satisfied by `i8`, `i16`, `i32`, `i64`, `u8`, `u16`, `u32`, and `u64`). Signed
/// storage gives a signed fixed-point number, unsigned storage an unsigned one.
///
/// This is a *sealed* type.
pub trait Int: Sealed {}

/// The machine integer with twice the width of `T` and the same signedness (e.g.
/// `Promoted<i32>` = `i64`, `Promoted<u64>` = `u128`).
///
/// This mapping is closed: it is only defined for the eight types implementing [`Int`], and
/// naming it for anything else does not compile.
///
/// ```
/// # use soft_fixed::Promoted;
/// let wide: Promoted<u8> = 255u16 * 255u16;
/// assert_eq!(wide, 65025);
/// ```
pub type Promoted<T> = <T as Sealed>::Double;

/// Actual operations implemented here.
pub trait Sealed:
  core::fmt::Debug + core::fmt::Display + core::fmt::Binary + core::fmt::LowerHex +
  Copy + Clone +
  Eq + Ord +
  core::hash::Hash + Default +
  core::ops::Shl<u32, Output=Self> +
  core::ops::Shr<u32, Output=Self> +
  core::ops::BitAnd<Output=Self> +
  core::ops::BitOr<Output=Self> +
  core::ops::Not<Output=Self> +
  Into<i128>
{
  /// The width promotion of `Self`; see [`Promoted`].
  type Double: Double<Single = Self>;

  const ZERO: Self;
  const ONE: Self;
  const MIN: Self;
  const MAX: Self;
  const BITS: u32;
  const SIGNED: bool;

  /// Whether the sign bit is set. Always `false` for unsigned types.
  fn is_negative(self) -> bool;

  /// Whether bit `n` (counting from the lsb, starting at 0) is set.
  fn get_bit(self, n: u32) -> bool;

  /// Set all bits more significant than `n` to 0.
  ///
  /// ```ignore
  /// assert_eq!(0xabcd_u16.mask_lsb(4), 0x000d_u16)
  /// ```
  fn mask_lsb(self, n: u32) -> Self;

  fn wrapping_add(self, other: Self) -> Self;
  fn wrapping_sub(self, other: Self) -> Self;
  fn wrapping_neg(self) -> Self;

  /// Multiply without overflow or loss of precision, by returning a type that's twice as wide as
  /// `Self`.
  fn doubling_mul(self, other: Self) -> Self::Double;

  /// Compute `(self << precision) / other` in a type twice as wide as `Self`, truncating toward
  /// zero, and narrow the quotient back to `Self` (wrapping).
  ///
  /// `precision` may be as large as `Self::BITS`.
  ///
  /// # Panics
  ///
  /// If `other` is zero, exactly like native integer division.
  fn shift_div(self, other: Self, precision: u32) -> Self;

  /// Short for `x as i128 as Self`: truncate toward zero, saturate at the `i128` range (NaN is
  /// 0), then wrap into `Self`.
  fn of_f64_wrapping(x: f64) -> Self;

  fn to_f64(self) -> f64;
  fn to_f32(self) -> f32;
}

/// This trait models the type that is an `Int` with twice the precision (e.g. `i32::Double` =
/// `i64`, `u64::Double` = `u128`). The ways to convert between the two are:
///
///   - Multiplying two `Int`s with no loss of precision, fitting into a `Double`
///     ([`Sealed::doubling_mul`]), or widening a single one ([`Double::widen`]).
///   - Narrowing a `Double` back to its `Int`, either wrapping ([`Double::narrow`]) or
///     saturating ([`Double::narrow_saturating`]).
pub trait Double:
  core::fmt::Debug +
  Copy + Clone +
  Eq + Ord +
  core::ops::Add<Output=Self> +
  core::ops::Mul<Output=Self> +
  core::ops::Div<Output=Self> +
  core::ops::Shl<u32, Output=Self> +
  core::ops::Shr<u32, Output=Self> +
{
  type Single: Int;

  const BITS: u32;
  const SIGNED: bool;

  fn widen(x: Self::Single) -> Self;

  /// Keep the low `Self::Single::BITS` bits.
  fn narrow(self) -> Self::Single;

  /// Narrow, clamping to `Self::Single::MIN ..= Self::Single::MAX` instead of wrapping.
  fn narrow_saturating(self) -> Self::Single;

  /// `x` as `Self`, or `None` if it does not fit.
  fn try_of_u128(x: u128) -> Option<Self>;
}

mod int;
mod double;
mod const_as;
pub use const_as::const_from_i128;

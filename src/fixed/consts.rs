use super::*;
use crate::underlying::const_from_i128;

impl<
  const I: u32,
  const F: u32,
  Int: crate::Int,
> Fixed<I, F, Int> {
  /// Zero (`0`), the additive identity element.
  pub const ZERO: Self = Self::from_bits(Int::ZERO);

  /// One (`1`), the multiplicative identity element.
  ///
  /// Only exists if `1` is representable, i.e. if there is at least one integer bit besides the
  /// sign bit; otherwise, naming it fails to compile.
  //
  // Represented by the bit pattern `0b0..01_0..0`, with `F` trailing 0s.
  pub const ONE: Self = {
    assert!(
      Self::INT_BITS > Int::SIGNED as u32,
      "One is not representable in a fixed-point number with no integer bits (besides the sign).",
    );
    Self::from_bits(const_from_i128(1i128 << F))
  };

  /// Smallest representable value: `-2^(I-1)` if signed, `0` if unsigned.
  pub const MIN: Self = Self::from_bits(Int::MIN);

  /// Largest representable value: `2^(I-1) - 2^-F` if signed, `2^I - 2^-F` if unsigned.
  pub const MAX: Self = Self::from_bits(Int::MAX);

  /// Smallest *positive* value, and also the distance between consecutive values: `2^-F`.
  //
  // Represented by the bit pattern `0b000...01`.
  pub const MIN_POSITIVE: Self = Self::from_bits(Int::ONE);
}


mod tests_compile_fail {
  /// ```compile_fail
  /// use soft_fixed::Fixed;
  /// pub fn foo() -> Fixed<0, 8, u8> { Fixed::<0, 8, u8>::ONE }
  /// ```
  #[allow(dead_code)]
  fn one_fail_unsigned() {}

  /// ```compile_fail
  /// use soft_fixed::Fixed;
  /// pub fn foo() -> Fixed<1, 15, i16> { Fixed::<1, 15, i16>::ONE }
  /// ```
  #[allow(dead_code)]
  fn one_fail_signed() {}
}

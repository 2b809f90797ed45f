use super::*;

impl<
  const I: u32,
  const F: u32,
  Int: crate::Int,
> Fixed<I, F, Int> {
  /// Returns the next representable value, i.e. `self + 2^-F`. Wraps around from `MAX` to `MIN`.
  ///
  /// ```
  /// # use soft_fixed::*;
  /// assert_eq!(u4f4::ZERO.next(), u4f4::MIN_POSITIVE);
  /// assert_eq!(u4f4::MAX.next(), u4f4::MIN);
  /// ```
  #[inline]
  pub fn next(self) -> Self {
    Self::from_bits(self.0.wrapping_add(Int::ONE))
  }

  /// Returns the previous representable value, i.e. `self - 2^-F`. Wraps around from `MIN` to
  /// `MAX`.
  #[inline]
  pub fn prior(self) -> Self {
    Self::from_bits(self.0.wrapping_sub(Int::ONE))
  }
}

// Negation only makes sense for signed storage, so it's only implemented where `Int` is `Neg`.
// `-MIN` wraps around to `MIN`, as with machine integers.

impl<const I: u32, const F: u32, Int: crate::Int + core::ops::Neg<Output = Int>>
core::ops::Neg for Fixed<I, F, Int> {
  type Output = Fixed<I, F, Int>;

  #[inline]
  fn neg(self) -> Self::Output {
    Fixed::from_bits(self.0.wrapping_neg())
  }
}

impl<const I: u32, const F: u32, Int: crate::Int + core::ops::Neg<Output = Int>>
core::ops::Neg for &Fixed<I, F, Int> {
  type Output = Fixed<I, F, Int>;

  #[inline]
  fn neg(self) -> Self::Output {
    Fixed::from_bits(self.0.wrapping_neg())
  }
}


mod tests_compile_fail {
  /// ```compile_fail
  /// use soft_fixed::u16f16;
  /// pub fn foo(x: u16f16) -> u16f16 { -x }
  /// ```
  #[allow(dead_code)]
  fn neg_unsigned() {}
}

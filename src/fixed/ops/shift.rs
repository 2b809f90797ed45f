use super::*;

impl<
  const I: u32,
  const F: u32,
  Int: crate::Int,
> Fixed<I, F, Int> {
  /// Multiply by `2^n`, i.e. shift the raw bits left by `n`. Bits shifted past the msb are lost,
  /// and shifting by `n ≥ BITS` gives zero.
  #[inline]
  pub(crate) fn shl(self, n: u32) -> Self {
    if n >= Self::BITS {
      Self::ZERO
    } else {
      Self::from_bits(self.0 << n)
    }
  }

  /// Divide by `2^n`, rounding down, i.e. shift the raw bits right by `n` (arithmetic shift if
  /// signed). Shifting by `n ≥ BITS` gives zero, or `-2^-F` if `self` is negative.
  #[inline]
  pub(crate) fn shr(self, n: u32) -> Self {
    if n < Self::BITS {
      Self::from_bits(self.0 >> n)
    } else if self.0.is_negative() {
      Self::from_bits(!Int::ZERO)
    } else {
      Self::ZERO
    }
  }
}

// Not generated by `mk_ops`, since the right-hand side is a bit count, not a `Fixed`.

impl<const I: u32, const F: u32, Int: crate::Int>
core::ops::Shl<u32> for Fixed<I, F, Int> {
  type Output = Fixed<I, F, Int>;

  #[inline]
  fn shl(self, rhs: u32) -> Self::Output { Fixed::shl(self, rhs) }
}

impl<const I: u32, const F: u32, Int: crate::Int>
core::ops::Shr<u32> for Fixed<I, F, Int> {
  type Output = Fixed<I, F, Int>;

  #[inline]
  fn shr(self, rhs: u32) -> Self::Output { Fixed::shr(self, rhs) }
}

impl<const I: u32, const F: u32, Int: crate::Int>
core::ops::ShlAssign<u32> for Fixed<I, F, Int> {
  #[inline]
  fn shl_assign(&mut self, rhs: u32) { *self = Fixed::shl(*self, rhs) }
}

impl<const I: u32, const F: u32, Int: crate::Int>
core::ops::ShrAssign<u32> for Fixed<I, F, Int> {
  #[inline]
  fn shr_assign(&mut self, rhs: u32) { *self = Fixed::shr(*self, rhs) }
}

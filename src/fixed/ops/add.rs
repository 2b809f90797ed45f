use super::*;

impl<
  const I: u32,
  const F: u32,
  Int: crate::Int,
> Fixed<I, F, Int> {
  // Both operands share the scale `2^F`, so adding or subtracting the raw integers adds or
  // subtracts the reals; no widening is needed. Overflow wraps around.

  #[inline]
  pub(crate) fn add(self, other: Self) -> Self {
    Self::from_bits(self.0.wrapping_add(other.0))
  }

  #[inline]
  pub(crate) fn sub(self, other: Self) -> Self {
    Self::from_bits(self.0.wrapping_sub(other.0))
  }
}

use core::ops::{Add, AddAssign, Sub, SubAssign};
super::mk_ops!{Add, AddAssign, add, add_assign}
super::mk_ops!{Sub, SubAssign, sub, sub_assign}

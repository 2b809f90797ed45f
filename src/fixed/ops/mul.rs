use super::*;

impl<
  const I: u32,
  const F: u32,
  Int: crate::Int,
> Fixed<I, F, Int> {
  pub(crate) fn mul(self, other: Self) -> Self {
    // The product of two raw values is
    //
    //   (a * 2^F) * (b * 2^F) = (a * b) * 2^2F
    //
    // so to get back to a raw value with scale `2^F`, we just need to shift right by `F`. The
    // product can have up to twice as many bits as the operands, so it has to be computed in the
    // `Double` type, otherwise the high bits would be lost before the shift.
    //
    // The shift is arithmetic, so the result is rounded down (toward -∞). What doesn't fit in
    // `Int` after the shift is truncated (i.e. wraps around).
    use crate::underlying::Double;
    let product = self.0.doubling_mul(other.0);
    Self::from_bits((product >> Self::FRAC_BITS).narrow())
  }
}

use core::ops::{Mul, MulAssign};
super::mk_ops!{Mul, MulAssign, mul, mul_assign}

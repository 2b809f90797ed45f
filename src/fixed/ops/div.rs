use super::*;

impl<
  const I: u32,
  const F: u32,
  Int: crate::Int,
> Fixed<I, F, Int> {
  pub(crate) fn div(self, other: Self) -> Self {
    // The quotient of two raw values has no scale left:
    //
    //   (a * 2^F) / (b * 2^F) = a / b
    //
    // so we need to scale the dividend by an extra `2^F` beforehand, i.e. compute
    // `(a * 2^2F) / (b * 2^F)`. The shifted dividend needs twice the bits, so the division is done
    // in the `Double` type.
    //
    // Integer division truncates toward zero (unlike `mul`, which rounds toward -∞), and a zero
    // divisor panics, same as any integer division.
    Self::from_bits(self.0.shift_div(other.0, Self::FRAC_BITS))
  }
}

use core::ops::{Div, DivAssign};
super::mk_ops!{Div, DivAssign, div, div_assign}

use super::*;

use malachite::rational::Rational;
use malachite::base::num::arithmetic::traits::{PowerOf2, Floor, Ceiling};

impl<
  const I: u32,
  const F: u32,
  Int: crate::Int,
> From<Fixed<I, F, Int>> for Rational {
  /// The exact value `raw / 2^F`.
  fn from(value: Fixed<I, F, Int>) -> Self {
    let raw: i128 = value.to_bits().into();
    Rational::from(raw) / Rational::power_of_2(F as i64)
  }
}

/// Check whether `fixed` is what you get by taking the exact real `exact`, scaling it by `2^F`,
/// rounding it to an integer with `round`, and wrapping that integer around to `I + F` bits.
///
/// In other words, `fixed` and `round(exact)` must be equal modulo `2^I`.
fn is_wrapped<const I: u32, const F: u32, Int: crate::Int>(
  exact: Rational,
  fixed: Fixed<I, F, Int>,
  round: impl FnOnce(Rational) -> Rational,
) -> bool {
  let scale = Rational::power_of_2(F as i64);
  let rounded = round(exact * &scale) / scale;
  let turns = (rounded - Rational::from(fixed)) / Rational::power_of_2(I as i64);
  Rational::from((&turns).floor()) == turns
}

/// Check whether `fixed` is `exact` rounded *down* (toward -∞) to a multiple of `2^-F`, then
/// wrapped around.
pub fn is_floor_wrapped<const I: u32, const F: u32, Int: crate::Int>(
  exact: Rational,
  fixed: Fixed<I, F, Int>,
) -> bool {
  is_wrapped(exact, fixed, |x| Rational::from(x.floor()))
}

/// Check whether `fixed` is `exact` rounded *toward zero* to a multiple of `2^-F`, then wrapped
/// around.
pub fn is_trunc_wrapped<const I: u32, const F: u32, Int: crate::Int>(
  exact: Rational,
  fixed: Fixed<I, F, Int>,
) -> bool {
  is_wrapped(exact, fixed, |x| {
    if x >= Rational::from(0) {
      Rational::from(x.floor())
    } else {
      Rational::from(x.ceiling())
    }
  })
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  #[allow(overflowing_literals)]
  fn examples() {
    assert_eq!(Rational::from(Fixed::<4, 4, u8>::from_bits(0b0011_1000)), Rational::from_signeds(7, 2));
    assert_eq!(Rational::from(Fixed::<4, 4, u8>::from_bits(0xff)), Rational::from_signeds(255, 16));
    assert_eq!(Rational::from(Fixed::<4, 4, i8>::from_bits(0xff)), Rational::from_signeds(-1, 16));
    assert_eq!(Rational::from(Fixed::<4, 4, i8>::MIN), Rational::from(-8));
    assert_eq!(Rational::from(Fixed::<1, 15, i16>::MIN), Rational::from(-1));
    assert_eq!(Rational::from(Fixed::<0, 64, u64>::MIN_POSITIVE), Rational::power_of_2(-64_i64));
    assert_eq!(Rational::from(Fixed::<64, 0, i64>::MAX), Rational::from(i64::MAX));
    assert_eq!(Rational::from(Fixed::<32, 32, u64>::MAX), Rational::from(u64::MAX) / Rational::power_of_2(32_i64));
  }

  #[test]
  fn floor_wrapped() {
    type Q = Fixed<4, 4, i8>;
    let q = |bits: i8| Q::from_bits(bits);
    // in range
    assert!(is_floor_wrapped(Rational::from_signeds(33, 32), q(16)));
    assert!(!is_floor_wrapped(Rational::from_signeds(33, 32), q(17)));
    assert!(is_floor_wrapped(Rational::from_signeds(-33, 32), q(-17)));
    assert!(!is_floor_wrapped(Rational::from_signeds(-33, 32), q(-16)));
    // wraps around
    assert!(is_floor_wrapped(Rational::from(8), Q::MIN));
    assert!(is_floor_wrapped(Rational::from(-9), q(0x70)));
    assert!(is_floor_wrapped(Rational::from(100), q(0x40)));
    assert!(!is_floor_wrapped(Rational::from(100), q(0x41)));
  }

  #[test]
  fn trunc_wrapped() {
    type Q = Fixed<4, 4, i8>;
    let q = |bits: i8| Q::from_bits(bits);
    assert!(is_trunc_wrapped(Rational::from_signeds(33, 32), q(16)));
    assert!(is_trunc_wrapped(Rational::from_signeds(-33, 32), q(-16)));
    assert!(!is_trunc_wrapped(Rational::from_signeds(-33, 32), q(-17)));
    assert!(is_trunc_wrapped(Rational::from_signeds(1, 3), q(5)));
    assert!(is_trunc_wrapped(Rational::from_signeds(-1, 3), q(-5)));
  }
}

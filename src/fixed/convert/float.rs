use super::*;

impl<
  const I: u32,
  const F: u32,
  Int: crate::Int,
> Fixed<I, F, Int> {
  /// `x * 2^F ± 0.5`, so that truncating it toward zero rounds to nearest, ties away from zero.
  #[inline]
  fn scale_half(x: f64) -> f64 {
    let half = if x >= 0. {0.5} else {-0.5};
    x * Self::SCALE + half
  }

  /// Encode `x`, wrapping around if it's out of range.
  #[inline]
  fn encode_f64(x: f64) -> Self {
    Self::from_bits(Int::of_f64_wrapping(Self::scale_half(x)))
  }

  /// Encode `x`, or return `Err(OutOfRange)` if it would wrap around (or is NaN).
  fn try_encode_f64(x: f64) -> Result<Self, OutOfRange> {
    if x.is_nan() {
      return Err(OutOfRange)
    }
    // Infinities and huge values saturate at the `i128` range, which is wider than any `Int`, so
    // they're caught by the range check.
    let raw = Self::scale_half(x) as i128;
    if raw < Int::MIN.into() || raw > Int::MAX.into() {
      Err(OutOfRange)
    } else {
      Ok(Self::encode_f64(x))
    }
  }
}

impl<
  const I: u32,
  const F: u32,
  Int: crate::Int,
> RoundFrom<f64> for Fixed<I, F, Int> {
  /// Convert an `f64` into a `Fixed`, [rounding to nearest and wrapping](RoundFrom#encoding-floats).
  fn round_from(value: f64) -> Self {
    Self::encode_f64(value)
  }
}

impl<
  const I: u32,
  const F: u32,
  Int: crate::Int,
> RoundFrom<f32> for Fixed<I, F, Int> {
  /// Convert an `f32` into a `Fixed`, [rounding to nearest and wrapping](RoundFrom#encoding-floats).
  fn round_from(value: f32) -> Self {
    // `f32` → `f64` is lossless.
    Self::encode_f64(value.into())
  }
}

impl<
  const I: u32,
  const F: u32,
  Int: crate::Int,
> RoundFrom<Fixed<I, F, Int>> for f64 {
  /// Convert a `Fixed` into an `f64`, i.e. `raw / 2^F`.
  fn round_from(value: Fixed<I, F, Int>) -> Self {
    value.0.to_f64() / Fixed::<I, F, Int>::SCALE
  }
}

impl<
  const I: u32,
  const F: u32,
  Int: crate::Int,
> RoundFrom<Fixed<I, F, Int>> for f32 {
  /// Convert a `Fixed` into an `f32`, i.e. `raw / 2^F`.
  fn round_from(value: Fixed<I, F, Int>) -> Self {
    // `2^F` is exact in an `f32` for any `F` up to 64.
    value.0.to_f32() / Fixed::<I, F, Int>::SCALE as f32
  }
}

impl<
  const I: u32,
  const F: u32,
  Int: crate::Int,
> TryFrom<f64> for Fixed<I, F, Int> {
  type Error = OutOfRange;

  /// Convert an `f64` into a `Fixed`, rounding to nearest (ties away from zero). Fails if `value`
  /// is NaN or if the rounded value is not in `MIN ..= MAX`.
  ///
  /// ```
  /// # use soft_fixed::*;
  /// assert_eq!(u4f4::try_from(15.9375_f64), Ok(u4f4::MAX));
  /// assert_eq!(u4f4::try_from(15.97_f64), Err(OutOfRange));
  /// assert_eq!(u4f4::try_from(-0.01_f64), Ok(u4f4::ZERO));
  /// assert_eq!(u4f4::try_from(-0.04_f64), Err(OutOfRange));
  /// ```
  fn try_from(value: f64) -> Result<Self, Self::Error> {
    Self::try_encode_f64(value)
  }
}

impl<
  const I: u32,
  const F: u32,
  Int: crate::Int,
> TryFrom<f32> for Fixed<I, F, Int> {
  type Error = OutOfRange;

  /// Same as the conversion from `f64`, which is lossless from `f32`.
  fn try_from(value: f32) -> Result<Self, Self::Error> {
    Self::try_encode_f64(value.into())
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::{u4f4, i4f4, i16f16, u32f32, i32f32};
  use proptest::prelude::*;

  #[test]
  fn q4_4_unsigned() {
    assert_eq!(f64::round_from(u4f4::round_from(15.0_f64)), 15.0);
    assert_eq!(u4f4::round_from(15.0_f64).to_bits(), 0xf0);
  }

  #[test]
  fn q4_4_signed() {
    let pos = i4f4::round_from(7.0_f64);
    let neg = i4f4::round_from(-7.0_f64);
    assert_eq!(f64::round_from(pos), 7.0);
    assert_eq!(f64::round_from(neg), -7.0);
    assert_eq!(neg.to_bits(), -0x70);
  }

  #[test]
  fn round_ties_away_from_zero() {
    // 1/32 is exactly half an ulp of a Q4.4
    assert_eq!(u4f4::round_from(0.03125_f64).to_bits(), 1);
    assert_eq!(i4f4::round_from(0.03125_f64).to_bits(), 1);
    assert_eq!(i4f4::round_from(-0.03125_f64).to_bits(), -1);
    assert_eq!(i4f4::round_from(0.09375_f64).to_bits(), 2);
    assert_eq!(i4f4::round_from(-0.09375_f64).to_bits(), -2);
    assert_eq!(i4f4::round_from(0.03_f64).to_bits(), 0);
    assert_eq!(i4f4::round_from(-0.03_f64).to_bits(), 0);
  }

  #[test]
  fn wraps_around() {
    assert_eq!(u4f4::round_from(16.0_f64).to_bits(), 0);
    assert_eq!(u4f4::round_from(17.5_f64).to_bits(), 0x18);
    assert_eq!(u4f4::round_from(-1.0_f64).to_bits(), 0xf0);
    assert_eq!(i4f4::round_from(8.0_f64), i4f4::MIN);
    assert_eq!(i4f4::round_from(-8.0625_f64), i4f4::MAX);
  }

  #[test]
  fn nan() {
    assert_eq!(i16f16::round_from(f64::NAN), i16f16::ZERO);
    assert_eq!(i16f16::round_from(f32::NAN), i16f16::ZERO);
  }

  #[test]
  fn to_f32() {
    assert_eq!(i16f16::round_from(-2.5_f32), i16f16::round_from(-2.5_f64));
    assert_eq!(f32::round_from(i16f16::round_from(-2.5_f32)), -2.5);
    assert_eq!(f32::round_from(u32f32::round_from(1e9_f64)), 1e9);
  }

  #[test]
  fn try_from() {
    assert_eq!(i4f4::try_from(-8.0_f64), Ok(i4f4::MIN));
    assert_eq!(i4f4::try_from(-8.01_f64), Ok(i4f4::MIN));
    assert_eq!(i4f4::try_from(-8.04_f64), Err(OutOfRange));
    assert_eq!(i4f4::try_from(7.9375_f64), Ok(i4f4::MAX));
    assert_eq!(i4f4::try_from(8.0_f64), Err(OutOfRange));
    assert_eq!(i16f16::try_from(f64::NAN), Err(OutOfRange));
    assert_eq!(i16f16::try_from(f64::INFINITY), Err(OutOfRange));
    assert_eq!(i16f16::try_from(f64::NEG_INFINITY), Err(OutOfRange));
    assert_eq!(u32f32::try_from(-1.0_f32), Err(OutOfRange));
    assert_eq!(u32f32::try_from(4294967295.0_f64), Ok(u32f32::from_bits(0xffff_ffff_0000_0000)));
    assert_eq!(u32f32::try_from(4294967296.0_f64), Err(OutOfRange));
  }

  macro_rules! make_tests {
    ($fixed:ty, $int:ty) => {
      use super::*;

      proptest!{
        #![proptest_config(ProptestConfig::with_cases(crate::PROPTEST_CASES))]

        /// Decoding then encoding any value gives back the same bits.
        #[test]
        fn roundtrip_bits(x in <$fixed>::cases_proptest()) {
          prop_assert_eq!(<$fixed>::round_from(f64::round_from(x)), x)
        }

        /// Encoding then decoding any in-range real is off by at most half an ulp.
        #[test]
        fn roundtrip_real(real in <$fixed>::cases_proptest_real()) {
          let x = <$fixed>::round_from(real);
          let error = (f64::round_from(x) - real).abs();
          prop_assert!(error <= 0.5 / <$fixed>::SCALE, "{real} → {x:?}, error {error}")
        }

        /// Checked encoding agrees with wrapping encoding whenever it succeeds.
        #[test]
        fn try_from_agrees(scaled in -1e3 * <$fixed>::SCALE .. 1e3 * <$fixed>::SCALE) {
          let real: f64 = scaled / <$fixed>::SCALE;
          match <$fixed>::try_from(real) {
            Ok(x) => prop_assert_eq!(x, <$fixed>::round_from(real)),
            Err(OutOfRange) => {
              let raw = (real * <$fixed>::SCALE).round() as i128;
              prop_assert!(raw < i128::from(<$int>::MIN) || raw > i128::from(<$int>::MAX))
            },
          }
        }
      }
    };
  }

  // 64-bit types are left out: not every raw value survives the trip through an `f64`.
  mod fixed_4_4_u8 { make_tests!{crate::u4f4, u8} }
  mod fixed_4_4_i8 { make_tests!{crate::i4f4, i8} }
  mod fixed_8_8_u16 { make_tests!{crate::u8f8, u16} }
  mod fixed_8_8_i16 { make_tests!{crate::i8f8, i16} }
  mod fixed_16_16_i32 { make_tests!{crate::i16f16, i32} }
  mod fixed_16_16_u32 { make_tests!{crate::u16f16, u32} }
  mod fixed_3_13_i16 { make_tests!{Fixed<3, 13, i16>, i16} }
  mod fixed_1_7_u8 { make_tests!{Fixed<1, 7, u8>, u8} }

  #[test]
  fn signed_symmetric() {
    for raw in 0 ..= 0x7f_i8 {
      let v = f64::round_from(i4f4::from_bits(raw));
      assert_eq!(i4f4::round_from(-v), -i4f4::round_from(v));
      assert_eq!(f64::round_from(i4f4::round_from(-v)), -v);
    }
  }

  #[test]
  fn exhaustive_q4_4() {
    for raw in 0 ..= 0xff_u8 {
      let x = u4f4::from_bits(raw);
      assert_eq!(f64::round_from(x), raw as f64 / 16.);
      assert_eq!(u4f4::round_from(f64::round_from(x)), x);
      assert_eq!(u4f4::try_from(f64::round_from(x)), Ok(x));
    }
    for raw in i8::MIN ..= i8::MAX {
      let x = i4f4::from_bits(raw);
      assert_eq!(f64::round_from(x), raw as f64 / 16.);
      assert_eq!(i4f4::round_from(f64::round_from(x)), x);
    }
  }

  #[test]
  fn i32f32_extremes() {
    assert_eq!(f64::round_from(i32f32::MIN), -2147483648.);
    assert_eq!(i32f32::round_from(-2147483648.0_f64), i32f32::MIN);
    assert_eq!(i32f32::round_from(1.0_f64 / 4294967296.), i32f32::MIN_POSITIVE);
  }
}

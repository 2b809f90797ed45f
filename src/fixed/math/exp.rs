use super::*;
use crate::Promoted;
use crate::underlying::Double;

impl<
  const I: u32,
  const F: u32,
  Int: crate::Int,
> Fixed<I, F, Int> {
  /// Convert a Q32.32 table entry to a raw value with `F` fractional bits, rounding to nearest, in
  /// the `Double` type. Returns `None` if `entry` is [`lut::SATURATED`], or if it doesn't fit.
  #[inline]
  fn lut_entry(entry: u64) -> Option<Promoted<Int>> {
    if entry == lut::SATURATED {
      return None
    }
    let entry = entry as u128;
    let rescaled =
      if Self::FRAC_BITS >= 32 {
        entry << (Self::FRAC_BITS - 32)
      } else {
        (entry + (1 << (31 - Self::FRAC_BITS))) >> (32 - Self::FRAC_BITS)
      };
    <Promoted<Int> as Double>::try_of_u128(rescaled)
  }

  /// `exp(2^k)`, as a raw value in the `Double` type, or `None` if it's too large.
  #[inline]
  fn exp_int_factor(k: u32) -> Option<Promoted<Int>> {
    lut::EXP_INT.get(k as usize).and_then(|&entry| Self::lut_entry(entry))
  }

  /// `exp(2^-k)`, as a raw value in the `Double` type, for `k` in `1 ..= F`.
  #[inline]
  fn exp_frac_factor(k: u32, one: Promoted<Int>) -> Promoted<Int> {
    match lut::EXP_FRAC.get(k as usize - 1) {
      // All of these are below 2, so they always fit in `Double`.
      Some(&entry) => match Self::lut_entry(entry) {
        Some(factor) => factor,
        None => unreachable!(),
      },
      // Past the table `exp(2^-k)` is `1 + 2^-k`, to well within the precision of `F` bits.
      None => one + (one >> k),
    }
  }

  /// Multiply `result` by `exp(int)`, where `int` is the integer part of `self` (rounded toward
  /// -∞), or divide it by `exp(-int)` if that is negative. Returns `None` if the result goes out
  /// of range: above `max`, or below `2^-F` for a negative `self`.
  fn exp_int_part(self, mut result: Promoted<Int>, max: Promoted<Int>) -> Option<Promoted<Int>> {
    let f = Self::FRAC_BITS;
    if self.0.is_negative() {
      // `~(raw >> F) + 1`, and bits `0 ..= I-1` of that, from the least significant.
      let int = (self.0 >> f).wrapping_neg();
      for k in 0 .. Self::INT_BITS {
        if int.get_bit(k) {
          // If `exp(2^k)` doesn't even fit in `Double`, then `exp(x)` is below `2^-F`.
          let divisor = Self::exp_int_factor(k)?;
          result = (result << f) / divisor;
        }
      }
    } else {
      for k in (0 .. Self::INT_BITS).rev() {
        if self.0.get_bit(k + f) {
          let factor = Self::exp_int_factor(k).filter(|&factor| factor <= max)?;
          result = (result * factor) >> f;
          if result > max {
            return None
          }
        }
      }
    }
    Some(result)
  }

  /// Returns `e^self`, computed without any floating point operation.
  ///
  /// The value `x` of `self` is decomposed into its bits, each standing for a power of two
  /// `2^k`, so that `e^x` is a product of factors `exp(2^k)` (or `1 / exp(2^k)` for the integer
  /// part of a negative `x`), which are looked up in the [tables](crate::lut). Starting from 1, the
  /// result is multiplied by the factor of each set fractional bit, from `2^-1` down to `2^-F`,
  /// then by (or divided by) the factor of each set integer bit. Each step is computed like the
  /// `*` and `/` operators: in an integer type twice as wide as the storage, rounding down.
  ///
  /// # Precision
  ///
  /// Each table entry and each step rounds, so the error grows with the number of set bits and
  /// with the magnitude of the integer part. As a guideline:
  ///
  ///   - For [`u32f32`](crate::u32f32) and [`i32f32`](crate::i32f32) on `[-4, 4)` the absolute
  ///     error is at most about `1e-7`, and for `x ≥ 0` the relative error is below `1e-8` all the
  ///     way up to the saturation point.
  ///   - For [`i16f16`](crate::i16f16) and [`u16f16`](crate::u16f16) and `x ≥ 0`, the relative
  ///     error is below `2e-4`.
  ///   - For [`i16f16`](crate::i16f16) and `x < 0` the absolute error is below `1e-4` (a few ulps),
  ///     so the relative error grows as the result approaches 0: it's below `2e-3` for results
  ///     down to `0.01`.
  ///   - Very coarse types (e.g. 4 fractional bits) can be off by several ulps.
  ///
  /// # Saturation
  ///
  /// Unlike the arithmetic operators, `exp` does not wrap around: if the result is larger than
  /// [`MAX`](Self::MAX), it returns `MAX`, and if it is too small to be represented, it returns
  /// [`ZERO`](Self::ZERO). In particular, `exp(x)` is `MAX` for any `x ≥ 32`, as the tables
  /// only go up to `exp(16)`. Since every step rounds down, a result whose exact value is barely
  /// above `MAX` may come out a few ulps below it instead.
  ///
  /// # Example
  ///
  /// ```
  /// # use soft_fixed::*;
  /// let e = i16f16::ONE.exp();
  /// assert!((f64::round_from(e) - core::f64::consts::E).abs() < 1e-4);
  ///
  /// assert_eq!(u4f4::ZERO.exp(), u4f4::ONE);
  /// assert_eq!(i16f16::round_from(20.0_f64).exp(), i16f16::MAX);
  /// assert_eq!(i16f16::round_from(-20.0_f64).exp(), i16f16::ZERO);
  /// ```
  pub fn exp(self) -> Self {
    let f = Self::FRAC_BITS;
    let one = <Promoted<Int> as Double>::widen(Int::ONE) << f;
    let max = <Promoted<Int> as Double>::widen(Int::MAX);
    let negative = self.0.is_negative();

    // `exp(x) ≥ 1` for non-negative `x`, so if 1 is not representable, we're done.
    if !negative && one > max {
      return Self::MAX
    }

    // We have `x = ±int + frac`, where `int` is a non-negative integer and `0 ≤ frac < 1`, so
    //
    //   exp(x) = exp(frac) * exp(int)          if x ≥ 0,
    //   exp(x) = exp(frac) / exp(int)          if x < 0.
    //
    // Each of these is further decomposed into the bits of `int` and `frac`:
    //
    //   exp(int)  = Π exp(2^k),  for every bit `k` set in `int`
    //   exp(frac) = Π exp(2^-k), for every bit `F - k` set in the raw `frac`
    //
    // The fractional part goes first. The one exception is a signed type whose only integer bit
    // is the sign: there `exp(frac)` times a fractional factor can overflow `Double`, so the
    // division by `e` goes first to keep the intermediate result below 1.
    let int_first = negative && Self::INT_BITS == 1;

    let mut result = one;
    if int_first {
      match self.exp_int_part(result, max) {
        Some(x) => result = x,
        None => return Self::ZERO,
      }
    }

    for k in 1 ..= f {
      if self.0.get_bit(f - k) {
        result = (result * Self::exp_frac_factor(k, one)) >> f;
        if !negative && result > max {
          return Self::MAX
        }
      }
    }

    if !int_first {
      match self.exp_int_part(result, max) {
        Some(x) => result = x,
        None if negative => return Self::ZERO,
        None => return Self::MAX,
      }
    }

    Self::from_bits(result.narrow_saturating())
  }
}

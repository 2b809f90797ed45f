use super::{Int, Sealed};

/// Implementation of all functions; signed and unsigned types only differ in `SIGNED`.
macro_rules! impl_common {
  ($int:ty, $double:ty, $signed:literal) => {
    type Double = $double;

    const ZERO: Self = 0;
    const ONE: Self = 1;
    const MIN: Self = <$int>::MIN;
    const MAX: Self = <$int>::MAX;
    const BITS: u32 = <$int>::BITS;
    const SIGNED: bool = $signed;

    #[inline]
    fn is_negative(self) -> bool {
      Self::SIGNED && self.get_bit(Self::BITS - 1)
    }

    #[inline]
    fn get_bit(self, n: u32) -> bool {
      debug_assert!(n < Self::BITS);
      (self >> n) & 1 == 1
    }

    #[inline]
    fn mask_lsb(self, n: u32) -> Self {
      if n >= Self::BITS {
        self
      } else {
        let mask = ((1 as $int) << n).wrapping_sub(1);
        self & mask
      }
    }

    #[inline]
    fn wrapping_add(self, other: Self) -> Self { self.wrapping_add(other) }

    #[inline]
    fn wrapping_sub(self, other: Self) -> Self { self.wrapping_sub(other) }

    #[inline]
    fn wrapping_neg(self) -> Self { self.wrapping_neg() }

    #[inline]
    fn doubling_mul(self, other: Self) -> Self::Double {
      self as $double * other as $double
    }

    #[inline]
    fn shift_div(self, other: Self, precision: u32) -> Self {
      // Rust division rounds towards 0, which is what we want here; unlike construction, division
      // does not round to nearest.
      let a = (self as $double) << precision;
      let b = other as $double;
      (a / b) as $int
    }

    #[inline]
    fn of_f64_wrapping(x: f64) -> Self {
      x as i128 as $int
    }

    #[inline]
    fn to_f64(self) -> f64 { self as f64 }

    #[inline]
    fn to_f32(self) -> f32 { self as f32 }
  }
}

impl Int for i64 {}
impl Sealed for i64 {
  impl_common!{i64, i128, true}
}

impl Int for i32 {}
impl Sealed for i32 {
  impl_common!{i32, i64, true}
}

impl Int for i16 {}
impl Sealed for i16 {
  impl_common!{i16, i32, true}
}

impl Int for i8 {}
impl Sealed for i8 {
  impl_common!{i8, i16, true}
}

impl Int for u64 {}
impl Sealed for u64 {
  impl_common!{u64, u128, false}
}

impl Int for u32 {}
impl Sealed for u32 {
  impl_common!{u32, u64, false}
}

impl Int for u16 {}
impl Sealed for u16 {
  impl_common!{u16, u32, false}
}

impl Int for u8 {}
impl Sealed for u8 {
  impl_common!{u8, u16, false}
}

#[cfg(test)]
#[allow(overflowing_literals)]
mod tests {
  use super::*;

  #[test]
  fn mask_lsb() {
    assert_eq!(0b01111110_i8.mask_lsb(3), 0b00000110_i8);
    assert_eq!(0xabcd_i16.mask_lsb(4), 0x000d_i16);
    assert_eq!(0xabcd_u16.mask_lsb(4), 0x000d_u16);
    assert_eq!(0xabcdabcd_i32.mask_lsb(4), 0x0000000d_i32);
    assert_eq!(0xdeadbeefdeadbeef_i64.mask_lsb(6), 0x2f_i64);
    assert_eq!(0xdeadbeefdeadbeef_u64.mask_lsb(64), 0xdeadbeefdeadbeef_u64);
  }

  #[test]
  fn is_negative() {
    assert!((-1_i8).is_negative());
    assert!(i64::MIN.is_negative());
    assert!(!0_i32.is_negative());
    assert!(!i16::MAX.is_negative());
    assert!(!0xff_u8.is_negative());
    assert!(!u64::MAX.is_negative());
  }

  #[test]
  fn get_bit() {
    assert!(0b0100_u8.get_bit(2));
    assert!(!0b0100_u8.get_bit(3));
    assert!(0b1000_0000_i8.get_bit(7));
    assert!((-1_i32).get_bit(31));
    assert!((1_u64 << 63).get_bit(63));
  }

  #[test]
  fn doubling_mul() {
    assert_eq!(0xff_u8.doubling_mul(0xff), 0xfe01_u16);
    assert_eq!(i8::MIN.doubling_mul(i8::MIN), 0x4000_i16);
    assert_eq!(i8::MIN.doubling_mul(i8::MAX), -0x3f80_i16);
    assert_eq!(u64::MAX.doubling_mul(2), (u64::MAX as u128) << 1);
    assert_eq!(i64::MIN.doubling_mul(-1), -(i64::MIN as i128));
  }

  #[test]
  fn shift_div() {
    assert_eq!(7_i8.shift_div(2, 4), 56);
    assert_eq!((-7_i8).shift_div(2, 4), -56);
    assert_eq!(1_u8.shift_div(3, 4), 5);  // 16 / 3, truncated
    assert_eq!((-1_i8).shift_div(3, 4), -5);  // truncated toward zero, not down
    assert_eq!(0xff_u8.shift_div(0xff, 8), 0);  // 0x100 wraps to 0
    assert_eq!(u64::MAX.shift_div(u64::MAX, 32), 1 << 32);
  }

  #[test]
  #[should_panic]
  fn shift_div_zero() {
    let zero = core::hint::black_box(0_i32);
    let _ = 1_i32.shift_div(zero, 16);
  }

  #[test]
  fn of_f64_wrapping() {
    assert_eq!(u8::of_f64_wrapping(15.9), 15);
    assert_eq!(i8::of_f64_wrapping(-15.9), -15);
    assert_eq!(u8::of_f64_wrapping(256.0), 0);
    assert_eq!(u8::of_f64_wrapping(-1.0), 0xff);
    assert_eq!(i8::of_f64_wrapping(128.0), -128);
    assert_eq!(u64::of_f64_wrapping(18446744073709549568.0), 0xffff_ffff_ffff_f800);
    assert_eq!(i32::of_f64_wrapping(f64::NAN), 0);
  }
}

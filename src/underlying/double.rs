use super::Double;

macro_rules! impl_common {
  ($double:ty, $single:ty, $signed:literal) => {
    impl Double for $double {
      type Single = $single;

      const BITS: u32 = <$double>::BITS;
      const SIGNED: bool = $signed;

      #[inline]
      fn widen(x: $single) -> Self {
        x as $double
      }

      #[inline]
      fn narrow(self) -> $single {
        self as $single
      }

      #[inline]
      fn narrow_saturating(self) -> $single {
        if self > <$single>::MAX as $double {
          <$single>::MAX
        } else if self < <$single>::MIN as $double {
          <$single>::MIN
        } else {
          self as $single
        }
      }

      #[inline]
      fn try_of_u128(x: u128) -> Option<Self> {
        <$double>::try_from(x).ok()
      }
    }
  };
}

impl_common!{i16, i8, true}
impl_common!{i32, i16, true}
impl_common!{i64, i32, true}
impl_common!{i128, i64, true}
impl_common!{u16, u8, false}
impl_common!{u32, u16, false}
impl_common!{u64, u32, false}
impl_common!{u128, u64, false}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::Promoted;
  use core::any::TypeId;

  #[test]
  fn promotion_is_next_width_same_signedness() {
    assert_eq!(TypeId::of::<Promoted<i8>>(), TypeId::of::<i16>());
    assert_eq!(TypeId::of::<Promoted<i16>>(), TypeId::of::<i32>());
    assert_eq!(TypeId::of::<Promoted<i32>>(), TypeId::of::<i64>());
    assert_eq!(TypeId::of::<Promoted<i64>>(), TypeId::of::<i128>());
    assert_eq!(TypeId::of::<Promoted<u8>>(), TypeId::of::<u16>());
    assert_eq!(TypeId::of::<Promoted<u16>>(), TypeId::of::<u32>());
    assert_eq!(TypeId::of::<Promoted<u32>>(), TypeId::of::<u64>());
    assert_eq!(TypeId::of::<Promoted<u64>>(), TypeId::of::<u128>());
  }

  #[test]
  fn promotion_width_and_sign() {
    assert!(<Promoted<i8> as Double>::BITS >= 16);
    assert!(<Promoted<i8> as Double>::SIGNED);
    assert!(<Promoted<u32> as Double>::BITS >= 64);
    assert!(!<Promoted<u32> as Double>::SIGNED);
  }

  #[test]
  fn narrow() {
    assert_eq!(0x1234_u16.narrow(), 0x34_u8);
    assert_eq!((-1_i128).narrow(), -1_i64);
    assert_eq!(0x1_0000_0001_u64.narrow(), 1_u32);
  }

  #[test]
  fn narrow_saturating() {
    assert_eq!(0x1234_u16.narrow_saturating(), 0xff_u8);
    assert_eq!(0x12_u16.narrow_saturating(), 0x12_u8);
    assert_eq!(200_i16.narrow_saturating(), i8::MAX);
    assert_eq!((-200_i16).narrow_saturating(), i8::MIN);
    assert_eq!(((i64::MAX as i128) + 1).narrow_saturating(), i64::MAX);
  }

  #[test]
  fn try_of_u128() {
    assert_eq!(u16::try_of_u128(0xffff), Some(0xffff));
    assert_eq!(u16::try_of_u128(0x1_0000), None);
    assert_eq!(i16::try_of_u128(0x8000), None);
    assert_eq!(u128::try_of_u128(u128::MAX), Some(u128::MAX));
  }
}

use super::*;

/// Addition and subtraction.
mod add;

/// Multiplication.
mod mul;

/// Division.
mod div;

/// Shifts by a number of bits.
mod shift;

/// Helper macro for implementing operators for all combinations of value and reference
macro_rules! mk_ops {
  ($trait:ident, $trait_assign:ident, $name:ident, $name_assign:ident) => {
    impl<const I: u32, const F: u32, Int: crate::Int>
    $trait<Fixed<I, F, Int>> for Fixed<I, F, Int> {
      type Output = Fixed<I, F, Int>;

      #[inline]
      fn $name(self, rhs: Self) -> Self::Output { self.$name(rhs) }
    }

    impl<const I: u32, const F: u32, Int: crate::Int>
    $trait<&Fixed<I, F, Int>> for Fixed<I, F, Int> {
      type Output = Fixed<I, F, Int>;

      #[inline]
      fn $name(self, rhs: &Self) -> Self::Output { self.$name(*rhs) }
    }

    impl<const I: u32, const F: u32, Int: crate::Int>
    $trait<Fixed<I, F, Int>> for &Fixed<I, F, Int> {
      type Output = Fixed<I, F, Int>;

      #[inline]
      fn $name(self, rhs: Fixed<I, F, Int>) -> Self::Output { (*self).$name(rhs) }
    }

    impl<const I: u32, const F: u32, Int: crate::Int>
    $trait<&Fixed<I, F, Int>> for &Fixed<I, F, Int> {
      type Output = Fixed<I, F, Int>;

      #[inline]
      fn $name(self, rhs: &Fixed<I, F, Int>) -> Self::Output { (*self).$name(*rhs) }
    }

    impl<const I: u32, const F: u32, Int: crate::Int>
    $trait_assign<Fixed<I, F, Int>> for Fixed<I, F, Int> {
      #[inline]
      fn $name_assign(&mut self, rhs: Fixed<I, F, Int>) { *self = self.$name(rhs) }
    }

    impl<const I: u32, const F: u32, Int: crate::Int>
    $trait_assign<&Fixed<I, F, Int>> for Fixed<I, F, Int> {
      #[inline]
      fn $name_assign(&mut self, rhs: &Fixed<I, F, Int>) { *self = self.$name(*rhs) }
    }
  }
}

pub(crate) use mk_ops;

/// Macro for instantating the suite of tests for a binary operator of fixed-point numbers, given
/// the operator and the function (from [`super::rational`]) that checks a result against the exact
/// rational one.
macro_rules! mk_tests {
  ($op:tt, $op_assign:tt, $check:path) => {
    use crate::Fixed;
    use malachite::rational::Rational;
    use proptest::prelude::*;

    #[allow(dead_code)]
    fn ops() {
      let mut a = crate::i16f16::ONE;
      let mut b = crate::i16f16::MAX;
      let _ = a $op b;
      let _ = &a $op b;
      let _ = a $op &b;
      let _ = &a $op &b;
      a $op_assign b;
      b $op_assign &a;
    }

    /// Aux function: check that `a $op b` is computed correctly (division by zero is skipped).
    fn is_correct<const I: u32, const F: u32, Int: crate::Int>(
      a: Fixed<I, F, Int>,
      b: Fixed<I, F, Int>,
    ) -> bool {
      if stringify!($op) == "/" && b == Fixed::ZERO {
        return true
      }
      let fixed = a $op b;
      let exact = Rational::from(a) $op Rational::from(b);
      $check(exact, fixed)
    }

    macro_rules! test_exhaustive {
      ($name:ident, $fixed:ty) => {
        #[test]
        fn $name() {
          for a in <$fixed>::cases_exhaustive() {
            for b in <$fixed>::cases_exhaustive() {
              assert!(is_correct(a, b), "{:?} {} {:?}", a, stringify!($op), b)
            }
          }
        }
      };
    }

    macro_rules! test_proptest {
      ($name:ident, $fixed:ty) => {
        proptest!{
          #![proptest_config(ProptestConfig::with_cases(crate::PROPTEST_CASES))]
          #[test]
          fn $name(
            a in <$fixed>::cases_proptest(),
            b in <$fixed>::cases_proptest(),
          ) {
            assert!(is_correct(a, b), "{:?} {} {:?}", a, stringify!($op), b)
          }
        }
      };
    }

    // 8 bits = 2^16 pairs, which is still cheap to test exhaustively.
    test_exhaustive!{u4f4_exhaustive, crate::u4f4}
    test_exhaustive!{i4f4_exhaustive, crate::i4f4}
    test_exhaustive!{fixed_0_8_u8_exhaustive, Fixed::<0, 8, u8>}
    test_exhaustive!{fixed_1_7_i8_exhaustive, Fixed::<1, 7, i8>}
    test_exhaustive!{fixed_8_0_i8_exhaustive, Fixed::<8, 0, i8>}
    test_exhaustive!{fixed_6_2_u8_exhaustive, Fixed::<6, 2, u8>}

    test_proptest!{u8f8_proptest, crate::u8f8}
    test_proptest!{i8f8_proptest, crate::i8f8}
    test_proptest!{u16f16_proptest, crate::u16f16}
    test_proptest!{i16f16_proptest, crate::i16f16}
    test_proptest!{u32f32_proptest, crate::u32f32}
    test_proptest!{i32f32_proptest, crate::i32f32}
    test_proptest!{fixed_1_63_i64_proptest, Fixed::<1, 63, i64>}
    test_proptest!{fixed_0_64_u64_proptest, Fixed::<0, 64, u64>}
    test_proptest!{fixed_60_4_i64_proptest, Fixed::<60, 4, i64>}
  }
}

pub(crate) use mk_tests;

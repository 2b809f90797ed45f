use super::*;

impl<
  const I: u32,
  const F: u32,
  Int: crate::Int,
> Fixed<I, F, Int> {
  /// The size of this type in bits, i.e. `I + F`, which is also the width of the underlying `Int`.
  pub const BITS: u32 = {
    assert!(
      I + F == Int::BITS,
      "The integer and fractional bits of a fixed-point number must add up to the width of its \
      underlying Int machine type.",
    );
    Int::BITS
  };

  /// The number of integer bits (i.e. parameter `I`). For a signed `Int`, this includes the sign
  /// bit.
  pub const INT_BITS: u32 = {
    assert!(
      Self::BITS == I + F,
      "Unreachable: checked in `BITS`",
    );
    assert!(
      !Int::SIGNED || I >= 1,
      "A signed fixed-point number needs at least one integer bit, for the sign.",
    );
    I
  };

  /// The number of fractional bits (i.e. parameter `F`).
  pub const FRAC_BITS: u32 = {
    assert!(
      Self::INT_BITS + F == Int::BITS,
      "Unreachable: checked in `BITS`",
    );
    F
  };

  /// The scale `2^F`: a real value `x` is stored as the integer `x * SCALE`.
  pub const SCALE: f64 = (1u128 << Self::FRAC_BITS) as f64;

  /// Construct a fixed-point number from its raw bit representation, i.e. `bits / 2^F`.
  #[inline]
  pub const fn from_bits(bits: Int) -> Self {
    let _ = Self::FRAC_BITS;
    Self(bits)
  }

  /// Return the underlying bit representation of `self` as a machine int, i.e. `self * 2^F`.
  #[inline]
  pub const fn to_bits(self) -> Int {
    self.0
  }
}


mod tests_compile_fail {
  /// ```compile_fail
  /// use soft_fixed::Fixed;
  /// pub fn foo() -> u32 { Fixed::<4, 5, u8>::BITS }
  /// ```
  #[allow(dead_code)]
  fn bits_fail_8_many() {}

  /// ```compile_fail
  /// use soft_fixed::Fixed;
  /// pub fn foo() -> u32 { Fixed::<8, 7, i16>::BITS }
  /// ```
  #[allow(dead_code)]
  fn bits_fail_16_few() {}

  /// ```compile_fail
  /// use soft_fixed::Fixed;
  /// pub fn foo() -> u32 { Fixed::<32, 0, u64>::FRAC_BITS }
  /// ```
  #[allow(dead_code)]
  fn bits_fail_64_few() {}

  /// ```compile_fail
  /// use soft_fixed::Fixed;
  /// pub fn foo() -> Fixed<16, 16, i32> { Fixed::<16, 16, i32>::ZERO + Fixed::<8, 24, i32>::ZERO }
  /// ```
  #[allow(dead_code)]
  fn mixed_split_add() {}

  /// ```compile_fail
  /// use soft_fixed::Fixed;
  /// pub fn foo() -> u32 { Fixed::<0, 8, i8>::INT_BITS }
  /// ```
  #[allow(dead_code)]
  fn signed_without_sign_bit() {}

  /// ```compile_fail
  /// use soft_fixed::Fixed;
  /// pub type Foo = Fixed<64, 64, i128>;
  /// pub fn foo() -> u32 { Foo::BITS }
  /// ```
  #[allow(dead_code)]
  fn storage_i128() {}

  /// ```compile_fail
  /// use soft_fixed::Fixed;
  /// pub type Foo = Fixed<16, 16, f32>;
  /// pub fn foo() -> u32 { Foo::BITS }
  /// ```
  #[allow(dead_code)]
  fn storage_f32() {}

  /// ```compile_fail
  /// use soft_fixed::Promoted;
  /// pub fn foo(x: Promoted<f64>) -> Promoted<f64> { x }
  /// ```
  #[allow(dead_code)]
  fn promote_f64() {}

  /// ```compile_fail
  /// use soft_fixed::Promoted;
  /// pub fn foo(x: Promoted<u128>) -> Promoted<u128> { x }
  /// ```
  #[allow(dead_code)]
  fn promote_u128() {}

  /// ```compile_fail
  /// use soft_fixed::Promoted;
  /// pub fn foo(x: Promoted<usize>) -> Promoted<usize> { x }
  /// ```
  #[allow(dead_code)]
  fn promote_usize() {}
}

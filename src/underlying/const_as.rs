use super::*;

/// One line of the [`const_from_i128`] function.
macro_rules! const_from_i128_line {
  ($x:ident, $t:ty, $signed:literal) => {
    if const { T::BITS == <$t>::BITS && T::SIGNED == $signed } {
      let t = $x as $t;
      // SAFETY: `Int` is sealed, and the only implementor with this width and signedness is `$t`;
      // therefore `T` is `$t` and the transmute_copy is a no-op.
      return unsafe { ::core::mem::transmute_copy::<$t, T>(&t) }
    }
  }
}

/// A type-generic and `const` version of `x as T`, for casting an `i128` to any [`Int`] (wrapping,
/// exactly like `as`).
///
/// ```ignore
/// # use soft_fixed::underlying::const_from_i128;
/// assert_eq!(const_from_i128::<i16>(1234), 1234i16);
/// assert_eq!(const_from_i128::<u8>(-1), 0xffu8);
/// ```
pub const fn const_from_i128<T: Int>(x: i128) -> T {
  const_from_i128_line!(x, i8, true);
  const_from_i128_line!(x, i16, true);
  const_from_i128_line!(x, i32, true);
  const_from_i128_line!(x, i64, true);
  const_from_i128_line!(x, u8, false);
  const_from_i128_line!(x, u16, false);
  const_from_i128_line!(x, u32, false);
  const_from_i128_line!(x, u64, false);
  unreachable!() // cannot be const { unreachable!() }
}

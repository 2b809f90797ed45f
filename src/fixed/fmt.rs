use super::*;
use crate::RoundFrom;

use core::fmt::{Debug, Display, Formatter};

impl<
  const I: u32,
  const F: u32,
  Int: crate::Int,
> Debug for Fixed<I, F, Int> {
  /// The raw bits, with the integer and fractional fields separated by `_`.
  fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
    if const { Self::INT_BITS == 0 || Self::FRAC_BITS == 0 } {
      let bits = self.0;
      f.debug_tuple("Fixed")
        .field(&format_args!("0b{bits:0w$b}", w=Self::BITS as usize))
        .finish()
    } else {
      let bits_int = (self.0 >> Self::FRAC_BITS).mask_lsb(Self::INT_BITS);
      let bits_frac = self.0.mask_lsb(Self::FRAC_BITS);
      f.debug_tuple("Fixed")
        .field(&format_args!("0b{bits_int:0wi$b}_{bits_frac:0wf$b}", wi=Self::INT_BITS as usize, wf=Self::FRAC_BITS as usize))
        .finish()
    }
  }
}

impl<
  const I: u32,
  const F: u32,
  Int: crate::Int,
> Display for Fixed<I, F, Int> {
  /// The decoded value, as an `f64` (so any formatting options for `f64` are honoured).
  ///
  /// ```
  /// # use soft_fixed::*;
  /// let x = i16f16::round_from(-2.5_f64);
  /// assert_eq!(format!("{x}"), "-2.5");
  /// assert_eq!(format!("{x:.3}"), "-2.500");
  /// ```
  fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
    Display::fmt(&f64::round_from(*self), f)
  }
}

/// A description of a [`Fixed`] value and of its type, meant for diagnostics; see
/// [`Fixed::dump`].
pub struct Dump<
  const I: u32,
  const F: u32,
  Int: crate::Int,
> (Fixed<I, F, Int>);

impl<
  const I: u32,
  const F: u32,
  Int: crate::Int,
> Fixed<I, F, Int> {
  /// Returns a [`Display`]able description of `self`: its type (number of fractional and integer
  /// bits, storage type and whether it's signed), its stored raw value, and the real value that
  /// represents.
  ///
  /// This only formats, it's up to the caller where to write it.
  ///
  /// ```
  /// # use soft_fixed::*;
  /// let x = i16f16::round_from(2.5_f64);
  /// assert_eq!(format!("{}", x.dump()), "\
  /// Fixed<16, 16, i32>
  ///   fractional bits: 16
  ///   integer bits:    16
  ///   storage:         i32 (signed)
  ///   raw:             0x28000
  ///   value:           2.5
  /// ");
  /// ```
  pub fn dump(self) -> Dump<I, F, Int> {
    Dump(self)
  }
}

impl<
  const I: u32,
  const F: u32,
  Int: crate::Int,
> Display for Dump<I, F, Int> {
  fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
    let storage = core::any::type_name::<Int>();
    let signedness = if Int::SIGNED {"signed"} else {"unsigned"};
    let x = self.0;
    writeln!(f, "Fixed<{}, {}, {storage}>", I, F)?;
    writeln!(f, "  fractional bits: {}", Fixed::<I, F, Int>::FRAC_BITS)?;
    writeln!(f, "  integer bits:    {}", Fixed::<I, F, Int>::INT_BITS)?;
    writeln!(f, "  storage:         {storage} ({signedness})")?;
    writeln!(f, "  raw:             {:#x}", x.to_bits())?;
    writeln!(f, "  value:           {x}")
  }
}

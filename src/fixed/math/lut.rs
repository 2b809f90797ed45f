//! Precomputed tables of `exp(2^k)`, for every bit position `k` of a fixed-point number, used by
//! [`Fixed::exp`](crate::Fixed::exp).
//!
//! All entries are in *Q32.32*: a `u64` whose value is `entry / 2^32`, rounded to nearest. This
//! precision is fixed, whatever the `I`/`F` split of the number `exp` is called on; entries are
//! rounded to `F` fractional bits when they're used.

/// Sentinel for entries of [`EXP_INT`] whose value does not fit in a Q32.32 `u64`, i.e. is
/// `2^32` or larger. Any `exp` that needs one of these saturates.
pub const SATURATED: u64 = u64::MAX;

/// `exp(2^-k)` in Q32.32, rounded to nearest, at index `k - 1` (for `k` in `1 ..= 32`).
///
/// From `k = 17` onwards, `exp(2^-k)` is `1 + 2^-k` to within half an ulp of Q32.32.
pub const EXP_FRAC: [u64; 32] = [
  0x00000001_a61298e2,  // exp(2^-1)
  0x00000001_48b5e3c4,  // exp(2^-2)
  0x00000001_2216045b,  // exp(2^-3)
  0x00000001_1082b578,  // exp(2^-4)
  0x00000001_08205601,  // exp(2^-5)
  0x00000001_04080ab5,  // exp(2^-6)
  0x00000001_02020156,  // exp(2^-7)
  0x00000001_0100802b,  // exp(2^-8)
  0x00000001_00802005,  // exp(2^-9)
  0x00000001_00400801,  // exp(2^-10)
  0x00000001_00200200,  // exp(2^-11)
  0x00000001_00100080,  // exp(2^-12)
  0x00000001_00080020,  // exp(2^-13)
  0x00000001_00040008,  // exp(2^-14)
  0x00000001_00020002,  // exp(2^-15)
  0x00000001_00010001,  // exp(2^-16)
  0x00000001_00008000,  // exp(2^-17)
  0x00000001_00004000,  // exp(2^-18)
  0x00000001_00002000,  // exp(2^-19)
  0x00000001_00001000,  // exp(2^-20)
  0x00000001_00000800,  // exp(2^-21)
  0x00000001_00000400,  // exp(2^-22)
  0x00000001_00000200,  // exp(2^-23)
  0x00000001_00000100,  // exp(2^-24)
  0x00000001_00000080,  // exp(2^-25)
  0x00000001_00000040,  // exp(2^-26)
  0x00000001_00000020,  // exp(2^-27)
  0x00000001_00000010,  // exp(2^-28)
  0x00000001_00000008,  // exp(2^-29)
  0x00000001_00000004,  // exp(2^-30)
  0x00000001_00000002,  // exp(2^-31)
  0x00000001_00000001,  // exp(2^-32)
];

/// `exp(2^k)` in Q32.32, rounded to nearest, at index `k` (for `k` in `0 .. 32`). Entries that
/// do not fit in 64 bits (`k ≥ 5`, i.e. `exp(32)` and beyond) are [`SATURATED`].
pub const EXP_INT: [u64; 32] = [
  0x00000002_b7e15163,  // exp(2^0)
  0x00000007_63992e35,  // exp(2^1)
  0x00000036_99205c4e,  // exp(2^2)
  0x00000ba4_f53ea386,  // exp(2^3)
  0x0087975e_85400102,  // exp(2^4)
  SATURATED,  // exp(2^5)
  SATURATED,  // exp(2^6)
  SATURATED,  // exp(2^7)
  SATURATED,  // exp(2^8)
  SATURATED,  // exp(2^9)
  SATURATED,  // exp(2^10)
  SATURATED,  // exp(2^11)
  SATURATED,  // exp(2^12)
  SATURATED,  // exp(2^13)
  SATURATED,  // exp(2^14)
  SATURATED,  // exp(2^15)
  SATURATED,  // exp(2^16)
  SATURATED,  // exp(2^17)
  SATURATED,  // exp(2^18)
  SATURATED,  // exp(2^19)
  SATURATED,  // exp(2^20)
  SATURATED,  // exp(2^21)
  SATURATED,  // exp(2^22)
  SATURATED,  // exp(2^23)
  SATURATED,  // exp(2^24)
  SATURATED,  // exp(2^25)
  SATURATED,  // exp(2^26)
  SATURATED,  // exp(2^27)
  SATURATED,  // exp(2^28)
  SATURATED,  // exp(2^29)
  SATURATED,  // exp(2^30)
  SATURATED,  // exp(2^31)
];

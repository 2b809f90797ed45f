use super::*;

// The `Int` trait has bounds indirectly, via `Sealed`. For example, we don't have `Int:
// PartialEq`, we have `Int: Sealed` and `Sealed: PartialEq`, so the derive macro derives
//
//   impl<const I: u32, const F: u32, Int: PartialEq + Int> PartialEq for Fixed<I, F, Int>
//
// but of course we know we can just have
//
//   impl<const I: u32, const F: u32, Int: Int> PartialEq for Fixed<I, F, Int>
//
// Because of that we just implement explicitly here.
//
// Eq and Ord are those of the raw integers: both operands share the same positive scale `2^F`, so
// comparing `a * 2^F` with `b * 2^F` is the same as comparing `a` with `b`.

impl<const I: u32, const F: u32, Int: crate::Int>
Clone for Fixed<I, F, Int> {
  #[inline]
  fn clone(&self) -> Self {
    *self
  }
}

impl<const I: u32, const F: u32, Int: crate::Int>
Copy for Fixed<I, F, Int> {}

impl<const I: u32, const F: u32, Int: crate::Int>
PartialEq for Fixed<I, F, Int> {
  #[inline]
  fn eq(&self, other: &Self) -> bool {
    self.0 == other.0
  }
}

impl<const I: u32, const F: u32, Int: crate::Int>
Eq for Fixed<I, F, Int> {}

impl<const I: u32, const F: u32, Int: crate::Int>
PartialOrd for Fixed<I, F, Int> {
  #[inline]
  fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
    Some(self.cmp(other))
  }
}

impl<const I: u32, const F: u32, Int: crate::Int>
Ord for Fixed<I, F, Int> {
  #[inline]
  fn cmp(&self, other: &Self) -> core::cmp::Ordering {
    self.0.cmp(&other.0)
  }
}

impl<const I: u32, const F: u32, Int: crate::Int>
core::hash::Hash for Fixed<I, F, Int> {
  #[inline]
  fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
    self.0.hash(state);
  }
}

impl<const I: u32, const F: u32, Int: crate::Int>
Default for Fixed<I, F, Int> {
  /// Zero.
  #[inline]
  fn default() -> Self {
    Self::ZERO
  }
}

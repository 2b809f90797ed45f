use super::*;

/// Tables of `exp(2^k)` for each bit position.
pub mod lut;

/// The exponential function.
mod exp;

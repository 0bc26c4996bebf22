// ============================================================================
// Scalar Module
// Terminal (leaf) number types backed by a single f64
// ============================================================================
//
// This module provides:
// - Real: strict real number, rejects infinities and NaN at construction
// - ExtendedReal: extended real number, permits infinities and NaN
//
// Conversions between the two are explicit named functions; there are no
// implicit conversions between scalar variants.

mod extended;
mod real;

pub use extended::{ExtendedReal, ExtendedRealOps};
pub use real::{Real, RealOps};

// ============================================================================
// Strict Real Scalar
// Leaf number type backed by a finite f64
// ============================================================================

use super::extended::ExtendedReal;
use crate::number::{Components, Number, NumberOps};
use crate::ops::{AlgebraError, AlgebraResult, BinaryOp, ComponentOp, Constant, UnaryOp};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// A real number with its value stored as a finite `f64`.
///
/// Not all `f64` values are allowed: infinities and NaN are rejected at
/// construction with `NonFiniteValue`, so an invalid value never exists.
/// Any operation whose result leaves the finite range fails the same way.
///
/// Negative zero is normalized to positive zero at construction so that
/// equality, ordering, and hashing agree bit-for-bit.
///
/// # Example
/// ```
/// use hyperalgebra::prelude::*;
///
/// let a = Real::new(3.0)?;
/// let b = Real::new(4.0)?;
/// assert_eq!(a.call_binary(BinaryOp::Add, &b)?, Real::new(7.0)?);
/// assert!(Real::new(f64::NAN).is_err());
/// # Ok::<(), hyperalgebra::AlgebraError>(())
/// ```
#[derive(Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Real(f64);

impl Real {
    /// Zero value
    pub const ZERO: Self = Real(0.0);

    /// One (1.0)
    pub const ONE: Self = Real(1.0);

    /// Create from an `f64` value.
    ///
    /// # Errors
    /// Returns `NonFiniteValue` if `value` is infinite or NaN.
    #[inline]
    pub fn new(value: f64) -> AlgebraResult<Self> {
        if !value.is_finite() {
            return Err(AlgebraError::NonFiniteValue);
        }
        // Collapse -0.0 so structural equality and hashing agree.
        Ok(Real(if value == 0.0 { 0.0 } else { value }))
    }

    /// Get the underlying `f64` value.
    #[inline]
    pub const fn value(self) -> f64 {
        self.0
    }

    /// Check if the value is zero.
    #[inline]
    pub fn is_zero(self) -> bool {
        self.0 == 0.0
    }

    /// Convert to the extended scalar variant. Always succeeds.
    #[inline]
    pub fn to_extended(self) -> ExtendedReal {
        ExtendedReal::new(self.0)
    }

    /// Convert from `rust_decimal::Decimal`.
    ///
    /// This is intended for API boundaries only (accepting user input).
    ///
    /// # Errors
    /// Returns `NonFiniteValue` if the decimal does not convert to a finite
    /// `f64`.
    pub fn from_decimal(d: rust_decimal::Decimal) -> AlgebraResult<Self> {
        use rust_decimal::prelude::ToPrimitive;
        let value = d.to_f64().ok_or(AlgebraError::NonFiniteValue)?;
        Self::new(value)
    }

    /// Convert to `rust_decimal::Decimal`.
    ///
    /// This is intended for display/reporting boundaries only.
    ///
    /// # Errors
    /// Returns `OutOfRange` if the value does not fit the decimal range.
    pub fn to_decimal(self) -> AlgebraResult<rust_decimal::Decimal> {
        use rust_decimal::prelude::FromPrimitive;
        rust_decimal::Decimal::from_f64(self.0).ok_or(AlgebraError::OutOfRange)
    }
}

impl Number for Real {
    type Ops = RealOps;

    #[inline]
    fn is_invertible(&self) -> bool {
        self.0 != 0.0
    }

    #[inline]
    fn is_finite(&self) -> bool {
        true
    }

    fn call_unary(&self, op: UnaryOp) -> AlgebraResult<Self> {
        let v = self.0;
        let result = match op {
            UnaryOp::Negate => -v,
            UnaryOp::Increment => v + 1.0,
            UnaryOp::Decrement => v - 1.0,
            UnaryOp::Inverse => 1.0 / v,
            UnaryOp::Conjugate => v,
            UnaryOp::Modulus => v.abs(),
            UnaryOp::Double => v * 2.0,
            UnaryOp::Half => v * 0.5,
            UnaryOp::Square => v * v,
            UnaryOp::SquareRoot => v.sqrt(),
            UnaryOp::Exponentiate => v.exp(),
            UnaryOp::Logarithm => v.ln(),
            UnaryOp::Sine => v.sin(),
            UnaryOp::Cosine => v.cos(),
            UnaryOp::Tangent => v.tan(),
            UnaryOp::HyperbolicSine => v.sinh(),
            UnaryOp::HyperbolicCosine => v.cosh(),
            UnaryOp::HyperbolicTangent => v.tanh(),
            UnaryOp::ArcSine => v.asin(),
            UnaryOp::ArcCosine => v.acos(),
            UnaryOp::ArcTangent => v.atan(),
        };
        Self::new(result)
    }

    fn call_binary(&self, op: BinaryOp, other: &Self) -> AlgebraResult<Self> {
        let (a, b) = (self.0, other.0);
        let result = match op {
            BinaryOp::Add => a + b,
            BinaryOp::Subtract => a - b,
            BinaryOp::Multiply => a * b,
            BinaryOp::Divide => a / b,
            BinaryOp::Power => a.powf(b),
            BinaryOp::Atan2 => a.atan2(b),
        };
        Self::new(result)
    }

    fn call_component(&self, op: ComponentOp) -> AlgebraResult<f64> {
        match op {
            ComponentOp::AbsoluteValue => Ok(self.0.abs()),
            ComponentOp::RealValue => Ok(self.0),
        }
    }

    fn write_components(&self, out: &mut Components) {
        out.push(self.0);
    }
}

// ============================================================================
// Structural Equality, Ordering, Hashing
// ============================================================================
//
// The finiteness invariant (and -0.0 normalization) makes bit equality,
// `==`, and `total_cmp` agree, so Eq/Ord/Hash are mutually consistent.

impl PartialEq for Real {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl Eq for Real {}

impl PartialOrd for Real {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Real {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl Hash for Real {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.to_bits().hash(state);
    }
}

impl Default for Real {
    #[inline]
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Debug for Real {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Real({})", self.0)
    }
}

impl fmt::Display for Real {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Real {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = f64::deserialize(deserializer)?;
        Real::new(value).map_err(serde::de::Error::custom)
    }
}

// ============================================================================
// Operations Singleton
// ============================================================================

/// Operations singleton for [`Real`].
#[derive(Default)]
pub struct RealOps;

impl NumberOps<Real> for RealOps {
    #[inline]
    fn dimension(&self) -> i32 {
        1
    }

    fn create(&self, constant: Constant) -> Real {
        match constant {
            Constant::RealOne | Constant::UnitsOne | Constant::AllOne => Real(1.0),
            Constant::NegativeOne => Real(-1.0),
            Constant::Two => Real(2.0),
            Constant::Zero
            | Constant::SpecialOne
            | Constant::NonRealUnitsOne
            | Constant::CombinedOne => Real(0.0),
        }
    }

    fn create_from_components(
        &self,
        components: &mut dyn Iterator<Item = f64>,
    ) -> AlgebraResult<Real> {
        let value = components.next().ok_or(AlgebraError::OutOfRange)?;
        Real::new(value)
    }
}

// ============================================================================
// Tests
// ============================================================================

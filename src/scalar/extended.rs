// ============================================================================
// Extended Real Scalar
// Leaf number type permitting infinities and NaN
// ============================================================================

use super::real::Real;
use crate::number::{Components, Number, NumberOps};
use crate::ops::{AlgebraError, AlgebraResult, BinaryOp, ComponentOp, Constant, UnaryOp};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// A real number extended with infinities and NaN, stored as an `f64`.
///
/// Construction never fails. Every value is considered invertible (the
/// inverse of zero is representable as infinity); `is_finite` reports
/// whether the stored value is an ordinary real.
///
/// Structural equality treats every NaN as equal to NaN, ordering is total
/// with NaN above positive infinity, and hashing canonicalizes NaN, so the
/// three stay mutually consistent.
#[derive(Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ExtendedReal(f64);

impl ExtendedReal {
    /// Zero value
    pub const ZERO: Self = ExtendedReal(0.0);

    /// One (1.0)
    pub const ONE: Self = ExtendedReal(1.0);

    /// Create from any `f64` value, including infinities and NaN.
    #[inline]
    pub fn new(value: f64) -> Self {
        // Collapse -0.0 so structural equality and hashing agree.
        ExtendedReal(if value == 0.0 { 0.0 } else { value })
    }

    /// Get the underlying `f64` value.
    #[inline]
    pub const fn value(self) -> f64 {
        self.0
    }

    /// Convert to the strict scalar variant.
    ///
    /// # Errors
    /// Returns `NonFiniteValue` if the stored value is infinite or NaN.
    #[inline]
    pub fn to_real(self) -> AlgebraResult<Real> {
        Real::new(self.0)
    }
}

impl Number for ExtendedReal {
    type Ops = ExtendedRealOps;

    #[inline]
    fn is_invertible(&self) -> bool {
        true
    }

    #[inline]
    fn is_finite(&self) -> bool {
        self.0.is_finite()
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
        Ok(Self::new(result))
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
        Ok(Self::new(result))
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

impl PartialEq for ExtendedReal {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0 || (self.0.is_nan() && other.0.is_nan())
    }
}

impl Eq for ExtendedReal {}

impl PartialOrd for ExtendedReal {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ExtendedReal {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.0.is_nan(), other.0.is_nan()) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            (false, false) => self.0.total_cmp(&other.0),
        }
    }
}

impl Hash for ExtendedReal {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // All NaN payloads are equal, so they must hash alike.
        let bits = if self.0.is_nan() {
            f64::NAN.to_bits()
        } else {
            self.0.to_bits()
        };
        bits.hash(state);
    }
}

impl Default for ExtendedReal {
    #[inline]
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Debug for ExtendedReal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ExtendedReal({})", self.0)
    }
}

impl fmt::Display for ExtendedReal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

// Deserialization goes through `new` so -0.0 is collapsed the same way
// every other construction path collapses it.
#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for ExtendedReal {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Ok(ExtendedReal::new(f64::deserialize(deserializer)?))
    }
}

// ============================================================================
// Operations Singleton
// ============================================================================

/// Operations singleton for [`ExtendedReal`].
#[derive(Default)]
pub struct ExtendedRealOps;

impl NumberOps<ExtendedReal> for ExtendedRealOps {
    #[inline]
    fn dimension(&self) -> i32 {
        1
    }

    fn create(&self, constant: Constant) -> ExtendedReal {
        match constant {
            Constant::RealOne | Constant::UnitsOne | Constant::AllOne => ExtendedReal(1.0),
            Constant::NegativeOne => ExtendedReal(-1.0),
            Constant::Two => ExtendedReal(2.0),
            Constant::Zero
            | Constant::SpecialOne
            | Constant::NonRealUnitsOne
            | Constant::CombinedOne => ExtendedReal(0.0),
        }
    }

    fn create_from_components(
        &self,
        components: &mut dyn Iterator<Item = f64>,
    ) -> AlgebraResult<ExtendedReal> {
        let value = components.next().ok_or(AlgebraError::OutOfRange)?;
        Ok(ExtendedReal::new(value))
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_non_finite_values() {
        let nan = ExtendedReal::new(f64::NAN);
        assert!(!nan.is_finite());
        assert!(nan.is_invertible());

        let inf = ExtendedReal::new(f64::INFINITY);
        assert!(!inf.is_finite());
        assert!(ExtendedReal::ONE.is_finite());
    }

    #[test]
    fn test_nan_is_structurally_equal_to_nan() {
        let a = ExtendedReal::new(f64::NAN);
        let b = ExtendedReal::new(0.0f64 / 0.0);
        assert_eq!(a, b);
        assert_eq!(a.cmp(&b), Ordering::Equal);

        use std::collections::hash_map::DefaultHasher;
        let mut ha = DefaultHasher::new();
        let mut hb = DefaultHasher::new();
        a.hash(&mut ha);
        b.hash(&mut hb);
        assert_eq!(ha.finish(), hb.finish());
    }

    #[test]
    fn test_total_order_places_nan_last() {
        let mut values = vec![
            ExtendedReal::new(f64::NAN),
            ExtendedReal::new(f64::NEG_INFINITY),
            ExtendedReal::new(1.0),
            ExtendedReal::new(f64::INFINITY),
            ExtendedReal::new(-3.0),
        ];
        values.sort();
        let raw: Vec<f64> = values.iter().map(|v| v.value()).collect();
        assert_eq!(raw[0], f64::NEG_INFINITY);
        assert_eq!(raw[1], -3.0);
        assert_eq!(raw[2], 1.0);
        assert_eq!(raw[3], f64::INFINITY);
        assert!(raw[4].is_nan());
    }

    #[test]
    fn test_operations_never_fail() {
        let zero = ExtendedReal::ZERO;
        let inv = zero.call_unary(UnaryOp::Inverse).unwrap();
        assert_eq!(inv.value(), f64::INFINITY);

        let neg = ExtendedReal::new(-1.0);
        let root = neg.call_unary(UnaryOp::SquareRoot).unwrap();
        assert!(root.value().is_nan());
    }

    #[test]
    fn test_conversion_to_strict() {
        assert_eq!(
            ExtendedReal::new(2.0).to_real().unwrap(),
            Real::new(2.0).unwrap()
        );
        assert_eq!(
            ExtendedReal::new(f64::NAN).to_real(),
            Err(AlgebraError::NonFiniteValue)
        );
    }

    #[test]
    fn test_constants_match_strict_scalar() {
        let ops = ExtendedReal::ops();
        assert_eq!(ops.create(Constant::RealOne), ExtendedReal::ONE);
        assert_eq!(ops.create(Constant::SpecialOne), ExtendedReal::ZERO);
        assert_eq!(ops.create(Constant::NegativeOne), ExtendedReal::new(-1.0));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialization_normalizes_negative_zero() {
        use serde::de::IntoDeserializer;
        use std::collections::hash_map::DefaultHasher;

        let de: serde::de::value::F64Deserializer<serde::de::value::Error> =
            (-0.0f64).into_deserializer();
        let value = <ExtendedReal as serde::Deserialize>::deserialize(de).unwrap();

        assert_eq!(value, ExtendedReal::ZERO);
        assert_eq!(value.cmp(&ExtendedReal::ZERO), Ordering::Equal);

        let mut ha = DefaultHasher::new();
        let mut hb = DefaultHasher::new();
        value.hash(&mut ha);
        ExtendedReal::ZERO.hash(&mut hb);
        assert_eq!(ha.finish(), hb.finish());
    }

    #[test]
    fn test_create_from_components_accepts_nan() {
        let ops = ExtendedReal::ops();
        let mut seq = std::iter::once(f64::NAN);
        let value = ops.create_from_components(&mut seq).unwrap();
        assert!(!value.is_finite());
    }
}

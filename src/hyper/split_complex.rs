// ============================================================================
// Split-Complex Doubling
// Hyperbolic pair algebra: the adjoined unit squares to positive one
// ============================================================================

use super::{
    componentwise_binary, componentwise_unary, constant_pair, double_dimension, embed_real,
    pair_from_components, PairNumber,
};
use crate::number::{Components, Number, NumberOps};
use crate::ops::{AlgebraError, AlgebraResult, BinaryOp, ComponentOp, Constant, UnaryOp};
use std::fmt;
use std::marker::PhantomData;

/// Split-complex doubling of an inner number type.
///
/// Multiplication follows `(a, b)(c, d) = (ac + conj(d) b, da + b conj(c))`.
/// The norm `a conj(a) - conj(b) b` is indefinite, so nonzero values on the
/// light cone (`|first| = |second|`) have no inverse.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SplitComplex<T: Number> {
    first: T,
    second: T,
}

impl<T: Number> SplitComplex<T> {
    /// Builds a split-complex value from its two components.
    #[inline]
    pub fn new(first: T, second: T) -> Self {
        SplitComplex { first, second }
    }

    fn product(&self, rhs: &Self) -> AlgebraResult<Self> {
        let (a, b) = (&self.first, &self.second);
        let (c, d) = (&rhs.first, &rhs.second);
        let cross = d
            .call_unary(UnaryOp::Conjugate)?
            .call_binary(BinaryOp::Multiply, b)?;
        let first = a
            .call_binary(BinaryOp::Multiply, c)?
            .call_binary(BinaryOp::Add, &cross)?;
        let tail = b.call_binary(BinaryOp::Multiply, &c.call_unary(UnaryOp::Conjugate)?)?;
        let second = d
            .call_binary(BinaryOp::Multiply, a)?
            .call_binary(BinaryOp::Add, &tail)?;
        Ok(SplitComplex::new(first, second))
    }

    /// The indefinite norm `a conj(a) - conj(b) b`.
    fn norm(&self) -> AlgebraResult<T> {
        let (a, b) = (&self.first, &self.second);
        let head = a.call_binary(BinaryOp::Multiply, &a.call_unary(UnaryOp::Conjugate)?)?;
        let tail = b
            .call_unary(UnaryOp::Conjugate)?
            .call_binary(BinaryOp::Multiply, b)?;
        head.call_binary(BinaryOp::Subtract, &tail)
    }

    fn reciprocal(&self) -> AlgebraResult<Self> {
        let norm = self.norm()?;
        let first = self
            .first
            .call_unary(UnaryOp::Conjugate)?
            .call_binary(BinaryOp::Divide, &norm)?;
        let second = self
            .second
            .call_binary(BinaryOp::Divide, &norm)?
            .call_unary(UnaryOp::Negate)?;
        Ok(SplitComplex::new(first, second))
    }

    /// Modulus of the indefinite quadratic form, `sqrt(|x^2 - y^2|)`.
    fn absolute(&self) -> AlgebraResult<f64> {
        let x = self.first.call_component(ComponentOp::AbsoluteValue)?;
        let y = self.second.call_component(ComponentOp::AbsoluteValue)?;
        Ok((x * x - y * y).abs().sqrt())
    }
}

impl<T: Number> PairNumber for SplitComplex<T> {
    type Inner = T;

    #[inline]
    fn from_pair(first: T, second: T) -> Self {
        SplitComplex { first, second }
    }

    #[inline]
    fn first(&self) -> &T {
        &self.first
    }

    #[inline]
    fn second(&self) -> &T {
        &self.second
    }

    #[inline]
    fn into_pair(self) -> (T, T) {
        (self.first, self.second)
    }
}

impl<T: Number> Number for SplitComplex<T> {
    type Ops = SplitComplexOps<T>;

    fn is_invertible(&self) -> bool {
        self.norm().map(|n| n.is_invertible()).unwrap_or(false)
    }

    fn is_finite(&self) -> bool {
        self.first.is_finite() && self.second.is_finite()
    }

    fn call_unary(&self, op: UnaryOp) -> AlgebraResult<Self> {
        match op {
            UnaryOp::Negate | UnaryOp::Double | UnaryOp::Half => componentwise_unary(self, op),
            UnaryOp::Increment | UnaryOp::Decrement => self.first_unary(op),
            UnaryOp::Inverse => self.reciprocal(),
            UnaryOp::Conjugate => Ok(SplitComplex::new(
                self.first.call_unary(UnaryOp::Conjugate)?,
                self.second.call_unary(UnaryOp::Negate)?,
            )),
            UnaryOp::Modulus => embed_real(self.absolute()?),
            UnaryOp::Square => self.product(self),
            other => Err(AlgebraError::unsupported(other)),
        }
    }

    fn call_binary(&self, op: BinaryOp, other: &Self) -> AlgebraResult<Self> {
        match op {
            BinaryOp::Add | BinaryOp::Subtract => componentwise_binary(self, op, other),
            BinaryOp::Multiply => self.product(other),
            BinaryOp::Divide => self.product(&other.reciprocal()?),
            unsupported => Err(AlgebraError::unsupported(unsupported)),
        }
    }

    fn call_component(&self, op: ComponentOp) -> AlgebraResult<f64> {
        match op {
            ComponentOp::AbsoluteValue => self.absolute(),
            ComponentOp::RealValue => self.first.call_component(ComponentOp::RealValue),
        }
    }

    fn write_components(&self, out: &mut Components) {
        self.first.write_components(out);
        self.second.write_components(out);
    }
}

impl<T: Number> Default for SplitComplex<T> {
    fn default() -> Self {
        SplitComplex::from_pair(T::zero(), T::zero())
    }
}

impl<T: Number> fmt::Debug for SplitComplex<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SplitComplex({:?}, {:?})", self.first, self.second)
    }
}

impl<T: Number> fmt::Display for SplitComplex<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SplitComplex({}, {})", self.first, self.second)
    }
}

// ============================================================================
// Operations Singleton
// ============================================================================

/// Operations singleton for [`SplitComplex<T>`].
pub struct SplitComplexOps<T>(PhantomData<fn() -> T>);

impl<T> Default for SplitComplexOps<T> {
    fn default() -> Self {
        SplitComplexOps(PhantomData)
    }
}

impl<T: Number> NumberOps<SplitComplex<T>> for SplitComplexOps<T> {
    #[inline]
    fn dimension(&self) -> i32 {
        double_dimension(T::ops().dimension())
    }

    fn create(&self, constant: Constant) -> SplitComplex<T> {
        constant_pair(constant)
    }

    fn create_from_components(
        &self,
        components: &mut dyn Iterator<Item = f64>,
    ) -> AlgebraResult<SplitComplex<T>> {
        pair_from_components(components)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scalar::Real;

    fn real(v: f64) -> Real {
        Real::new(v).unwrap()
    }

    fn j(x: f64, y: f64) -> SplitComplex<Real> {
        SplitComplex::new(real(x), real(y))
    }

    #[test]
    fn test_special_one_squares_to_real_one() {
        let ops = SplitComplex::<Real>::ops();
        let unit = ops.create(Constant::SpecialOne);
        let squared = unit.call_unary(UnaryOp::Square).unwrap();
        assert_eq!(squared, ops.create(Constant::RealOne));
    }

    #[test]
    fn test_multiplication_matches_split_arithmetic() {
        // (1 + 2j)(3 + 4j) = 3 + 8 + (4 + 6)j = 11 + 10j
        let product = j(1.0, 2.0)
            .call_binary(BinaryOp::Multiply, &j(3.0, 4.0))
            .unwrap();
        assert_eq!(product, j(11.0, 10.0));
    }

    #[test]
    fn test_inverse_against_known_value() {
        // norm(5 + 3j) = 25 - 9 = 16
        let v = j(5.0, 3.0);
        let inv = v.call_unary(UnaryOp::Inverse).unwrap();
        assert_eq!(inv, j(5.0 / 16.0, -3.0 / 16.0));

        let product = v.call_binary(BinaryOp::Multiply, &inv).unwrap();
        assert_eq!(product, SplitComplex::<Real>::one());
    }

    #[test]
    fn test_light_cone_values_are_not_invertible() {
        // |first| = |second| zeroes the indefinite norm.
        assert!(!j(2.0, 2.0).is_invertible());
        assert!(!j(2.0, -2.0).is_invertible());
        assert!(j(2.0, 1.0).is_invertible());
    }

    #[test]
    fn test_absolute_value_is_indefinite_modulus() {
        assert_eq!(j(5.0, 3.0).call_component(ComponentOp::AbsoluteValue).unwrap(), 4.0);
        assert_eq!(j(3.0, 5.0).call_component(ComponentOp::AbsoluteValue).unwrap(), 4.0);
        assert_eq!(j(2.0, 2.0).call_component(ComponentOp::AbsoluteValue).unwrap(), 0.0);
    }

    #[test]
    fn test_conjugate_negates_second_axis() {
        assert_eq!(j(1.0, 2.0).call_unary(UnaryOp::Conjugate).unwrap(), j(1.0, -2.0));
    }

    #[test]
    fn test_increment_touches_first_axis_only() {
        assert_eq!(j(1.0, 2.0).call_unary(UnaryOp::Increment).unwrap(), j(2.0, 2.0));
    }

    #[test]
    fn test_display() {
        assert_eq!(j(1.0, -2.0).to_string(), "SplitComplex(1, -2)");
    }
}

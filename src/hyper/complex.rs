// ============================================================================
// Complex Doubling
// Elliptic pair algebra: the adjoined unit squares to negative one
// ============================================================================

use super::{
    componentwise_binary, componentwise_unary, constant_pair, double_dimension, embed_real,
    pair_from_components, PairNumber,
};
use crate::number::{Components, Number, NumberOps};
use crate::ops::{AlgebraError, AlgebraResult, BinaryOp, ComponentOp, Constant, UnaryOp};
use std::fmt;
use std::marker::PhantomData;

/// Complex doubling of an inner number type.
///
/// Multiplication follows `(a, b)(c, d) = (ac - conj(d) b, da + b conj(c))`,
/// which reduces to ordinary complex arithmetic when the inner type is a
/// scalar and to quaternion-like algebras when nested.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Complex<T: Number> {
    first: T,
    second: T,
}

impl<T: Number> Complex<T> {
    /// Builds a complex value from its real and adjoined-axis components.
    #[inline]
    pub fn new(first: T, second: T) -> Self {
        Complex { first, second }
    }

    fn product(&self, rhs: &Self) -> AlgebraResult<Self> {
        let (a, b) = (&self.first, &self.second);
        let (c, d) = (&rhs.first, &rhs.second);
        let cross = d
            .call_unary(UnaryOp::Conjugate)?
            .call_binary(BinaryOp::Multiply, b)?;
        let first = a
            .call_binary(BinaryOp::Multiply, c)?
            .call_binary(BinaryOp::Subtract, &cross)?;
        let tail = b.call_binary(BinaryOp::Multiply, &c.call_unary(UnaryOp::Conjugate)?)?;
        let second = d
            .call_binary(BinaryOp::Multiply, a)?
            .call_binary(BinaryOp::Add, &tail)?;
        Ok(Complex::new(first, second))
    }

    /// The multiplicative norm `a conj(a) + conj(b) b`, an inner value.
    fn norm(&self) -> AlgebraResult<T> {
        let (a, b) = (&self.first, &self.second);
        let head = a.call_binary(BinaryOp::Multiply, &a.call_unary(UnaryOp::Conjugate)?)?;
        let tail = b
            .call_unary(UnaryOp::Conjugate)?
            .call_binary(BinaryOp::Multiply, b)?;
        head.call_binary(BinaryOp::Add, &tail)
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
        Ok(Complex::new(first, second))
    }

    /// Euclidean absolute value over the component absolute values.
    fn absolute(&self) -> AlgebraResult<f64> {
        let x = self.first.call_component(ComponentOp::AbsoluteValue)?;
        let y = self.second.call_component(ComponentOp::AbsoluteValue)?;
        Ok(x.hypot(y))
    }
}

impl<T: Number> PairNumber for Complex<T> {
    type Inner = T;

    #[inline]
    fn from_pair(first: T, second: T) -> Self {
        Complex { first, second }
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

impl<T: Number> Number for Complex<T> {
    type Ops = ComplexOps<T>;

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
            UnaryOp::Conjugate => Ok(Complex::new(
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

impl<T: Number> Default for Complex<T> {
    fn default() -> Self {
        Complex::from_pair(T::zero(), T::zero())
    }
}

impl<T: Number> fmt::Debug for Complex<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Complex({:?}, {:?})", self.first, self.second)
    }
}

impl<T: Number> fmt::Display for Complex<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Complex({}, {})", self.first, self.second)
    }
}

// ============================================================================
// Operations Singleton
// ============================================================================

/// Operations singleton for [`Complex<T>`].
pub struct ComplexOps<T>(PhantomData<fn() -> T>);

impl<T> Default for ComplexOps<T> {
    fn default() -> Self {
        ComplexOps(PhantomData)
    }
}

impl<T: Number> NumberOps<Complex<T>> for ComplexOps<T> {
    #[inline]
    fn dimension(&self) -> i32 {
        double_dimension(T::ops().dimension())
    }

    fn create(&self, constant: Constant) -> Complex<T> {
        constant_pair(constant)
    }

    fn create_from_components(
        &self,
        components: &mut dyn Iterator<Item = f64>,
    ) -> AlgebraResult<Complex<T>> {
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
    use quickcheck::{quickcheck, TestResult};

    fn real(v: f64) -> Real {
        Real::new(v).unwrap()
    }

    fn z(x: f64, y: f64) -> Complex<Real> {
        Complex::new(real(x), real(y))
    }

    #[test]
    fn test_special_one_squares_to_negative_one() {
        let ops = Complex::<Real>::ops();
        let i = ops.create(Constant::SpecialOne);
        let squared = i.call_unary(UnaryOp::Square).unwrap();
        assert_eq!(squared, ops.create(Constant::NegativeOne));
    }

    #[test]
    fn test_multiplication_matches_complex_arithmetic() {
        // (3 + 4i)(1 + 2i) = -5 + 10i
        let product = z(3.0, 4.0)
            .call_binary(BinaryOp::Multiply, &z(1.0, 2.0))
            .unwrap();
        assert_eq!(product, z(-5.0, 10.0));
    }

    #[test]
    fn test_inverse_against_known_value() {
        // |2 + 2i|^2 = 8, so the inverse is (0.25, -0.25).
        let v = z(2.0, 2.0);
        let inv = v.call_unary(UnaryOp::Inverse).unwrap();
        assert_eq!(inv, z(0.25, -0.25));

        let product = v.call_binary(BinaryOp::Multiply, &inv).unwrap();
        assert_eq!(product, Complex::<Real>::one());
    }

    #[test]
    fn test_divide_is_multiplication_by_inverse() {
        let a = z(6.0, 2.0);
        let b = z(2.0, 0.0);
        assert_eq!(a.call_binary(BinaryOp::Divide, &b).unwrap(), z(3.0, 1.0));
    }

    #[test]
    fn test_conjugate_negates_second_axis() {
        assert_eq!(z(3.0, 4.0).call_unary(UnaryOp::Conjugate).unwrap(), z(3.0, -4.0));
    }

    #[test]
    fn test_absolute_value_is_euclidean() {
        let v = z(3.0, 4.0);
        assert_eq!(v.call_component(ComponentOp::AbsoluteValue).unwrap(), 5.0);
        // Modulus re-embeds the absolute value as a pure-real number.
        assert_eq!(v.call_unary(UnaryOp::Modulus).unwrap(), z(5.0, 0.0));
    }

    #[test]
    fn test_zero_is_not_invertible() {
        assert!(!Complex::<Real>::zero().is_invertible());
        assert!(z(0.0, 2.0).is_invertible());
    }

    #[test]
    fn test_transcendental_ops_unsupported() {
        let err = z(1.0, 1.0).call_unary(UnaryOp::Sine).unwrap_err();
        assert_eq!(err, AlgebraError::UnsupportedOperation(UnaryOp::Sine.into()));
        let err = z(1.0, 1.0)
            .call_binary(BinaryOp::Power, &z(2.0, 0.0))
            .unwrap_err();
        assert_eq!(
            err,
            AlgebraError::UnsupportedOperation(BinaryOp::Power.into())
        );
    }

    #[test]
    fn test_display_and_dimension() {
        assert_eq!(z(3.0, -4.0).to_string(), "Complex(3, -4)");
        assert_eq!(z(0.0, 0.0).dimension(), 2);
        assert_eq!(Complex::<Complex<Real>>::ops().dimension(), 4);
    }

    #[test]
    fn test_ordering_is_lexicographic() {
        assert!(z(1.0, 9.0) < z(2.0, 0.0));
        assert!(z(1.0, 1.0) < z(1.0, 2.0));
    }

    fn bounded(values: &[f64]) -> bool {
        values.iter().all(|v| v.is_finite() && v.abs() < 1.0e100)
    }

    quickcheck! {
        fn prop_addition_commutes(ax: f64, ay: f64, bx: f64, by: f64) -> TestResult {
            if !bounded(&[ax, ay, bx, by]) {
                return TestResult::discard();
            }
            let a = z(ax, ay);
            let b = z(bx, by);
            let left = a.call_binary(BinaryOp::Add, &b).unwrap();
            let right = b.call_binary(BinaryOp::Add, &a).unwrap();
            TestResult::from_bool(left == right)
        }

        fn prop_conjugation_is_involutive(x: f64, y: f64) -> TestResult {
            if !bounded(&[x, y]) {
                return TestResult::discard();
            }
            let v = z(x, y);
            let back = v
                .call_unary(UnaryOp::Conjugate)
                .unwrap()
                .call_unary(UnaryOp::Conjugate)
                .unwrap();
            TestResult::from_bool(back == v)
        }

        fn prop_one_is_multiplicative_identity(x: f64, y: f64) -> TestResult {
            if !bounded(&[x, y]) {
                return TestResult::discard();
            }
            let v = z(x, y);
            let product = v
                .call_binary(BinaryOp::Multiply, &Complex::<Real>::one())
                .unwrap();
            TestResult::from_bool(product == v)
        }
    }
}

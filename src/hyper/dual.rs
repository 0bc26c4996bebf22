// ============================================================================
// Dual Doubling
// Parabolic pair algebra: the adjoined unit squares to zero
// ============================================================================

use super::{
    componentwise_binary, componentwise_unary, constant_pair, double_dimension, embed_real,
    pair_from_components, PairNumber,
};
use crate::number::{Components, Number, NumberOps};
use crate::ops::{AlgebraError, AlgebraResult, BinaryOp, ComponentOp, Constant, UnaryOp};
use std::fmt;
use std::marker::PhantomData;

/// Dual doubling of an inner number type.
///
/// Multiplication follows `(a, b)(c, d) = (ac, da + b conj(c))`; the second
/// axis is nilpotent, which makes dual numbers the classic vehicle for
/// forward-mode differentiation.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Dual<T: Number> {
    first: T,
    second: T,
}

impl<T: Number> Dual<T> {
    /// Builds a dual value from its real and infinitesimal components.
    #[inline]
    pub fn new(first: T, second: T) -> Self {
        Dual { first, second }
    }

    fn product(&self, rhs: &Self) -> AlgebraResult<Self> {
        let (a, b) = (&self.first, &self.second);
        let (c, d) = (&rhs.first, &rhs.second);
        let first = a.call_binary(BinaryOp::Multiply, c)?;
        let tail = b.call_binary(BinaryOp::Multiply, &c.call_unary(UnaryOp::Conjugate)?)?;
        let second = d
            .call_binary(BinaryOp::Multiply, a)?
            .call_binary(BinaryOp::Add, &tail)?;
        Ok(Dual::new(first, second))
    }

    /// `(a, b)^-1 = (a^-1, -b / a^2)`; fails when the real part has none.
    fn reciprocal(&self) -> AlgebraResult<Self> {
        let first = self.first.call_unary(UnaryOp::Inverse)?;
        let second = self
            .second
            .call_binary(BinaryOp::Divide, &self.first.call_unary(UnaryOp::Square)?)?
            .call_unary(UnaryOp::Negate)?;
        Ok(Dual::new(first, second))
    }

    /// The infinitesimal axis does not contribute to magnitude.
    fn absolute(&self) -> AlgebraResult<f64> {
        self.first.call_component(ComponentOp::AbsoluteValue)
    }
}

impl<T: Number> PairNumber for Dual<T> {
    type Inner = T;

    #[inline]
    fn from_pair(first: T, second: T) -> Self {
        Dual { first, second }
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

impl<T: Number> Number for Dual<T> {
    type Ops = DualOps<T>;

    fn is_invertible(&self) -> bool {
        self.first.is_invertible()
    }

    fn is_finite(&self) -> bool {
        self.first.is_finite() && self.second.is_finite()
    }

    fn call_unary(&self, op: UnaryOp) -> AlgebraResult<Self> {
        match op {
            UnaryOp::Negate | UnaryOp::Double | UnaryOp::Half => componentwise_unary(self, op),
            UnaryOp::Increment | UnaryOp::Decrement => self.first_unary(op),
            UnaryOp::Inverse => self.reciprocal(),
            UnaryOp::Conjugate => Ok(Dual::new(
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

impl<T: Number> Default for Dual<T> {
    fn default() -> Self {
        Dual::from_pair(T::zero(), T::zero())
    }
}

impl<T: Number> fmt::Debug for Dual<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Dual({:?}, {:?})", self.first, self.second)
    }
}

impl<T: Number> fmt::Display for Dual<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Dual({}, {})", self.first, self.second)
    }
}

// ============================================================================
// Operations Singleton
// ============================================================================

/// Operations singleton for [`Dual<T>`].
pub struct DualOps<T>(PhantomData<fn() -> T>);

impl<T> Default for DualOps<T> {
    fn default() -> Self {
        DualOps(PhantomData)
    }
}

impl<T: Number> NumberOps<Dual<T>> for DualOps<T> {
    #[inline]
    fn dimension(&self) -> i32 {
        double_dimension(T::ops().dimension())
    }

    fn create(&self, constant: Constant) -> Dual<T> {
        constant_pair(constant)
    }

    fn create_from_components(
        &self,
        components: &mut dyn Iterator<Item = f64>,
    ) -> AlgebraResult<Dual<T>> {
        pair_from_components(components)
    }
}

// ============================================================================
// Tests
// ============================================================================

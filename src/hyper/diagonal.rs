// ============================================================================
// Diagonal Doubling
// Direct-sum pair algebra: the axes never mix
// ============================================================================

use super::{
    componentwise_binary, componentwise_unary, constant_pair, double_dimension, embed_real,
    pair_from_components, PairNumber,
};
use crate::number::{Components, Number, NumberOps};
use crate::ops::{AlgebraError, AlgebraResult, BinaryOp, ComponentOp, Constant, UnaryOp};
use std::fmt;
use std::marker::PhantomData;

/// Diagonal doubling of an inner number type.
///
/// Multiplication is componentwise, `(a, b)(c, d) = (ac, bd)`, so the pair
/// behaves as a direct sum of two independent copies of the inner algebra.
/// The adjoined unit `(0, 1)` is idempotent rather than a root of a scalar.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Diagonal<T: Number> {
    first: T,
    second: T,
}

impl<T: Number> Diagonal<T> {
    /// Builds a diagonal value from its two independent components.
    #[inline]
    pub fn new(first: T, second: T) -> Self {
        Diagonal { first, second }
    }

    /// Sup norm over the component absolute values.
    fn absolute(&self) -> AlgebraResult<f64> {
        let x = self.first.call_component(ComponentOp::AbsoluteValue)?;
        let y = self.second.call_component(ComponentOp::AbsoluteValue)?;
        Ok(x.max(y))
    }
}

impl<T: Number> PairNumber for Diagonal<T> {
    type Inner = T;

    #[inline]
    fn from_pair(first: T, second: T) -> Self {
        Diagonal { first, second }
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

impl<T: Number> Number for Diagonal<T> {
    type Ops = DiagonalOps<T>;

    fn is_invertible(&self) -> bool {
        self.first.is_invertible() && self.second.is_invertible()
    }

    fn is_finite(&self) -> bool {
        self.first.is_finite() && self.second.is_finite()
    }

    fn call_unary(&self, op: UnaryOp) -> AlgebraResult<Self> {
        match op {
            UnaryOp::Negate
            | UnaryOp::Double
            | UnaryOp::Half
            | UnaryOp::Inverse
            | UnaryOp::Conjugate => componentwise_unary(self, op),
            UnaryOp::Increment | UnaryOp::Decrement => self.first_unary(op),
            UnaryOp::Modulus => embed_real(self.absolute()?),
            UnaryOp::Square => componentwise_unary(self, UnaryOp::Square),
            other => Err(AlgebraError::unsupported(other)),
        }
    }

    fn call_binary(&self, op: BinaryOp, other: &Self) -> AlgebraResult<Self> {
        match op {
            BinaryOp::Add | BinaryOp::Subtract | BinaryOp::Multiply | BinaryOp::Divide => {
                componentwise_binary(self, op, other)
            }
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

impl<T: Number> Default for Diagonal<T> {
    fn default() -> Self {
        Diagonal::from_pair(T::zero(), T::zero())
    }
}

impl<T: Number> fmt::Debug for Diagonal<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Diagonal({:?}, {:?})", self.first, self.second)
    }
}

impl<T: Number> fmt::Display for Diagonal<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Diagonal({}, {})", self.first, self.second)
    }
}

// ============================================================================
// Operations Singleton
// ============================================================================

/// Operations singleton for [`Diagonal<T>`].
pub struct DiagonalOps<T>(PhantomData<fn() -> T>);

impl<T> Default for DiagonalOps<T> {
    fn default() -> Self {
        DiagonalOps(PhantomData)
    }
}

impl<T: Number> NumberOps<Diagonal<T>> for DiagonalOps<T> {
    #[inline]
    fn dimension(&self) -> i32 {
        double_dimension(T::ops().dimension())
    }

    fn create(&self, constant: Constant) -> Diagonal<T> {
        constant_pair(constant)
    }

    fn create_from_components(
        &self,
        components: &mut dyn Iterator<Item = f64>,
    ) -> AlgebraResult<Diagonal<T>> {
        pair_from_components(components)
    }
}

// ============================================================================
// Tests
// ============================================================================

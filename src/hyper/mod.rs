// ============================================================================
// Hyper Module
// Cayley-Dickson doubling constructors over an arbitrary inner number type
// ============================================================================
//
// Four parallel variants, one per file, differing only in their closure rule:
// - Complex: the elliptic doubling, SpecialOne squares to NegativeOne
// - SplitComplex: the hyperbolic doubling, SpecialOne squares to RealOne
// - Dual: the parabolic doubling, SpecialOne squares to Zero
// - Diagonal: independent axes, SpecialOne is idempotent
//
// Everything structural (pair construction, axis-selective dispatch, constant
// mapping, component flattening) is shared here; the variant files supply the
// product, conjugation, inverse, and absolute value.

mod complex;
mod diagonal;
mod dual;
mod split_complex;

pub use complex::{Complex, ComplexOps};
pub use diagonal::{Diagonal, DiagonalOps};
pub use dual::{Dual, DualOps};
pub use split_complex::{SplitComplex, SplitComplexOps};

use crate::components::ComponentView;
use crate::number::{Number, NumberOps};
use crate::ops::{AlgebraResult, BinaryOp, Constant, UnaryOp};

/// A number built as an immutable ordered pair of an inner number type.
///
/// The required methods are the structural core every doubling variant
/// shares; the provided methods are the axis-selective primitives generic
/// algorithms use to act on one component of a pair without knowing the
/// variant's algebra.
pub trait PairNumber: Number {
    /// The component type of the pair.
    type Inner: Number;

    /// Builds a pair from its two components.
    fn from_pair(first: Self::Inner, second: Self::Inner) -> Self;

    /// Borrows the first (real-axis) component.
    fn first(&self) -> &Self::Inner;

    /// Borrows the second (adjoined-axis) component.
    fn second(&self) -> &Self::Inner;

    /// Consumes the pair, yielding its components.
    fn into_pair(self) -> (Self::Inner, Self::Inner);

    /// Embeds an inner value on the real axis, zero on the second.
    fn from_real(value: Self::Inner) -> Self {
        Self::from_pair(value, Self::Inner::zero())
    }

    /// Copy of this pair with the first component replaced.
    fn with_first(&self, first: Self::Inner) -> Self {
        Self::from_pair(first, self.second().clone())
    }

    /// Copy of this pair with the second component replaced.
    fn with_second(&self, second: Self::Inner) -> Self {
        Self::from_pair(self.first().clone(), second)
    }

    /// Applies a unary operation to the first component only.
    fn first_unary(&self, op: UnaryOp) -> AlgebraResult<Self> {
        Ok(self.with_first(self.first().call_unary(op)?))
    }

    /// Applies a unary operation to the second component only.
    fn second_unary(&self, op: UnaryOp) -> AlgebraResult<Self> {
        Ok(self.with_second(self.second().call_unary(op)?))
    }

    /// Combines the first component with an inner operand, `op(first, x)`.
    fn first_binary(&self, op: BinaryOp, operand: &Self::Inner) -> AlgebraResult<Self> {
        Ok(self.with_first(self.first().call_binary(op, operand)?))
    }

    /// Combines the first component with an inner operand, `op(x, first)`.
    fn first_binary_reversed(&self, op: BinaryOp, operand: &Self::Inner) -> AlgebraResult<Self> {
        Ok(self.with_first(self.first().call_binary_reversed(op, operand)?))
    }

    /// Combines the second component with an inner operand, `op(second, x)`.
    fn second_binary(&self, op: BinaryOp, operand: &Self::Inner) -> AlgebraResult<Self> {
        Ok(self.with_second(self.second().call_binary(op, operand)?))
    }

    /// Combines the second component with an inner operand, `op(x, second)`.
    fn second_binary_reversed(&self, op: BinaryOp, operand: &Self::Inner) -> AlgebraResult<Self> {
        Ok(self.with_second(self.second().call_binary_reversed(op, operand)?))
    }

    /// Read-only two-element view over the pair.
    fn component_view(&self) -> ComponentView<'_, Self> {
        ComponentView::new(self)
    }
}

// ============================================================================
// Shared Structural Helpers
// ============================================================================

/// Dimension of a pair type given its inner dimension; -1 propagates.
#[inline]
pub(crate) fn double_dimension(inner: i32) -> i32 {
    if inner < 0 {
        -1
    } else {
        inner * 2
    }
}

/// Named-constant mapping shared by every doubling variant.
///
/// The special constants place units on specific axes; everything else embeds
/// the inner constant on the real axis.
pub(crate) fn constant_pair<P: PairNumber>(constant: Constant) -> P {
    let ops = P::Inner::ops();
    let (first, second) = match constant {
        Constant::SpecialOne => (ops.create(Constant::Zero), ops.create(Constant::RealOne)),
        Constant::UnitsOne => (ops.create(Constant::UnitsOne), ops.create(Constant::RealOne)),
        Constant::NonRealUnitsOne => (
            ops.create(Constant::NonRealUnitsOne),
            ops.create(Constant::RealOne),
        ),
        Constant::CombinedOne => (
            ops.create(Constant::Zero),
            ops.create(Constant::CombinedOne),
        ),
        Constant::AllOne => (ops.create(Constant::AllOne), ops.create(Constant::AllOne)),
        other => (ops.create(other), ops.create(Constant::Zero)),
    };
    P::from_pair(first, second)
}

/// Applies a unary operation to both components.
pub(crate) fn componentwise_unary<P: PairNumber>(num: &P, op: UnaryOp) -> AlgebraResult<P> {
    Ok(P::from_pair(
        num.first().call_unary(op)?,
        num.second().call_unary(op)?,
    ))
}

/// Applies a binary operation componentwise across two pairs.
pub(crate) fn componentwise_binary<P: PairNumber>(
    lhs: &P,
    op: BinaryOp,
    rhs: &P,
) -> AlgebraResult<P> {
    Ok(P::from_pair(
        lhs.first().call_binary(op, rhs.first())?,
        lhs.second().call_binary(op, rhs.second())?,
    ))
}

/// Builds a pair by consuming the first component's leaf values from the
/// sequence, then the second's. Exact-arity consumption is what lets a flat
/// sequence populate an entire tower level by level.
pub(crate) fn pair_from_components<P: PairNumber>(
    components: &mut dyn Iterator<Item = f64>,
) -> AlgebraResult<P> {
    let ops = P::Inner::ops();
    let first = ops.create_from_components(components)?;
    let second = ops.create_from_components(components)?;
    Ok(P::from_pair(first, second))
}

/// Embeds a leaf value as a pure-real number of type `N`, padding every
/// remaining component slot with zero.
pub(crate) fn embed_real<N: Number>(value: f64) -> AlgebraResult<N> {
    let mut seq = std::iter::once(value).chain(std::iter::repeat(0.0));
    N::ops().create_from_components(&mut seq)
}

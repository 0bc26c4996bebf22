// ============================================================================
// Operation Vocabulary
// Closed enumerations identifying the computations a number type can perform
// ============================================================================

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Named constants that every operations singleton must be able to materialize.
///
/// The vocabulary is closed: the nine constants below are total for every
/// number type in this crate, which is why constant construction is
/// infallible (see `NumberOps::create`).
///
/// The doubling constructors give the non-scalar constants their meaning:
/// `SpecialOne` is the doubling axis unit `(0, 1)` whose square reproduces
/// each variant's defining identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Constant {
    /// The additive identity.
    Zero,
    /// The multiplicative identity on the real axis.
    RealOne,
    /// The negation of `RealOne`.
    NegativeOne,
    /// `RealOne` doubled.
    Two,
    /// The doubling axis unit: the outermost non-real unit at magnitude one.
    SpecialOne,
    /// All non-scalar axes at unit magnitude.
    UnitsOne,
    /// All axes except the real one at unit magnitude.
    NonRealUnitsOne,
    /// The combined non-real unit.
    CombinedOne,
    /// Every axis at unit magnitude.
    AllOne,
}

/// Unary operations on a number.
///
/// The algebraic subset (`Negate` through `Square`) is supported at every
/// depth; the transcendental tags are leaf-only and produce
/// `AlgebraError::UnsupportedOperation` on composite types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum UnaryOp {
    Negate,
    Increment,
    Decrement,
    Inverse,
    Conjugate,
    Modulus,
    Double,
    Half,
    Square,
    SquareRoot,
    Exponentiate,
    Logarithm,
    Sine,
    Cosine,
    Tangent,
    HyperbolicSine,
    HyperbolicCosine,
    HyperbolicTangent,
    ArcSine,
    ArcCosine,
    ArcTangent,
}

/// Binary operations on two numbers of the same type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BinaryOp {
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
    Atan2,
}

/// Unary operations whose result collapses to the leaf representation
/// (`f64`), independent of algebraic depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ComponentOp {
    /// The variant-specific absolute value (Euclidean norm for complex).
    AbsoluteValue,
    /// The projection onto the real axis, taken recursively.
    RealValue,
}

/// Any executable operation tag, used as the payload of
/// unsupported-operation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Operation {
    Unary(UnaryOp),
    Binary(BinaryOp),
    Component(ComponentOp),
}

impl From<UnaryOp> for Operation {
    #[inline]
    fn from(op: UnaryOp) -> Self {
        Operation::Unary(op)
    }
}

impl From<BinaryOp> for Operation {
    #[inline]
    fn from(op: BinaryOp) -> Self {
        Operation::Binary(op)
    }
}

impl From<ComponentOp> for Operation {
    #[inline]
    fn from(op: ComponentOp) -> Self {
        Operation::Component(op)
    }
}

// ============================================================================
// Number Protocol
// The operation-dispatch capability contract every number type implements
// ============================================================================
//
// The contract has two halves:
// - Number: the per-instance half (equality, ordering, predicates, and
//   instance methods executing operations)
// - NumberOps: the per-type half, a stateless singleton responsible for
//   dimension, constant construction, and sequence-based construction
//
// Doubling constructors and decorators implement both halves in terms of
// their inner type's halves, so a generic routine written once against this
// contract works for every depth of nesting.

use crate::ops::{AlgebraResult, BinaryOp, ComponentOp, Constant, UnaryOp};
use smallvec::SmallVec;
use std::any::Any;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Buffer type used when flattening a number into its leaf components.
///
/// Eight inline slots cover towers up to three doublings without allocating.
pub type Components = SmallVec<[f64; 8]>;

/// The per-instance half of the number contract.
///
/// Values are immutable; every operation returns a new value. Equality,
/// ordering, and hashing are structural (component-by-component in
/// construction order) and mutually consistent.
pub trait Number:
    Clone + PartialEq + Eq + PartialOrd + Ord + Hash + fmt::Debug + fmt::Display + Send + Sync + Sized + 'static
{
    /// The stateless operations singleton type for this number type.
    type Ops: NumberOps<Self> + Default + Any;

    /// Resolves this type's operations singleton through the process-wide
    /// registry. The singleton is constructed at most once and is safe to
    /// read concurrently thereafter.
    fn ops() -> &'static Self::Ops {
        crate::registry::ops_for::<Self>()
    }

    /// Vector-space dimension of the type, or -1 if unbounded/undefined.
    fn dimension(&self) -> i32 {
        Self::ops().dimension()
    }

    /// True if a multiplicative inverse of this value can be calculated.
    fn is_invertible(&self) -> bool;

    /// True if this value is finite: no component holds an infinity or NaN,
    /// so arithmetic cannot start from an already-unrepresentable state.
    fn is_finite(&self) -> bool;

    /// Invokes a unary operation on this number.
    ///
    /// # Errors
    /// Returns `UnsupportedOperation` if the operation is not implemented by
    /// this type, or `NonFiniteValue` if a strict leaf result overflows.
    fn call_unary(&self, op: UnaryOp) -> AlgebraResult<Self>;

    /// Invokes a binary operation on `(self, other)`.
    fn call_binary(&self, op: BinaryOp, other: &Self) -> AlgebraResult<Self>;

    /// Invokes a binary operation on `(other, self)`.
    ///
    /// The reversed form lets a value of an inner type combine with a
    /// wrapper value in either operand position without losing which side
    /// is self.
    fn call_binary_reversed(&self, op: BinaryOp, other: &Self) -> AlgebraResult<Self> {
        other.call_binary(op, self)
    }

    /// Invokes an operation whose result collapses to the leaf
    /// representation, independent of algebraic depth.
    fn call_component(&self, op: ComponentOp) -> AlgebraResult<f64>;

    /// Appends this value's leaf components to `out` in construction order.
    fn write_components(&self, out: &mut Components);

    /// Flattens this value into its leaf components.
    fn components(&self) -> Components {
        let mut out = Components::new();
        self.write_components(&mut out);
        out
    }

    /// Materializes the additive identity for this type.
    fn zero() -> Self {
        Self::ops().create(Constant::Zero)
    }

    /// Materializes the real multiplicative identity for this type.
    fn one() -> Self {
        Self::ops().create(Constant::RealOne)
    }
}

/// The per-type half of the number contract: one long-lived, stateless
/// dispatch object per concrete number type.
///
/// Logically a pure function table; obtain it via [`Number::ops`]. The
/// `call_*` and comparison methods delegate to the instance half by default,
/// so implementors only provide `dimension` and the two constructors.
///
/// The trait is object-safe: `&dyn NumberOps<N>` is a valid capability
/// object for generic algorithms that resolve types at runtime.
pub trait NumberOps<N: Number>: Send + Sync {
    /// Vector-space dimension of the type, or -1 if unbounded/undefined.
    fn dimension(&self) -> i32;

    /// Materializes one of the named constants.
    ///
    /// The constant vocabulary is closed and total for every type in this
    /// crate, so construction is infallible.
    fn create(&self, constant: Constant) -> N;

    /// Builds one value by consuming leaf components from a lazy sequence,
    /// advancing it exactly as many steps as this type's dimension requires.
    ///
    /// # Errors
    /// Returns `OutOfRange` if the sequence is exhausted early, or
    /// `NonFiniteValue` if a strict leaf rejects a component.
    fn create_from_components(
        &self,
        components: &mut dyn Iterator<Item = f64>,
    ) -> AlgebraResult<N>;

    fn is_invertible(&self, num: &N) -> bool {
        num.is_invertible()
    }

    fn is_finite(&self, num: &N) -> bool {
        num.is_finite()
    }

    /// Deep copy; composite types clone each component independently.
    fn clone_value(&self, num: &N) -> N {
        num.clone()
    }

    fn call_unary(&self, op: UnaryOp, num: &N) -> AlgebraResult<N> {
        num.call_unary(op)
    }

    fn call_binary(&self, op: BinaryOp, lhs: &N, rhs: &N) -> AlgebraResult<N> {
        lhs.call_binary(op, rhs)
    }

    /// Binary dispatch with the operands swapped: computes `op(rhs, lhs)`.
    fn call_binary_reversed(&self, op: BinaryOp, lhs: &N, rhs: &N) -> AlgebraResult<N> {
        lhs.call_binary_reversed(op, rhs)
    }

    fn call_component(&self, op: ComponentOp, num: &N) -> AlgebraResult<f64> {
        num.call_component(op)
    }

    /// Structural equality; agrees with `cmp_values` and `hash_value`.
    fn eq_values(&self, a: &N, b: &N) -> bool {
        a == b
    }

    /// Structural ordering; lexicographic over components on composites.
    fn cmp_values(&self, a: &N, b: &N) -> Ordering {
        a.cmp(b)
    }

    /// Hashing consistent with `eq_values`.
    fn hash_value(&self, num: &N, mut state: &mut dyn Hasher) {
        num.hash(&mut state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scalar::Real;
    use std::collections::hash_map::DefaultHasher;

    #[test]
    fn test_ops_delegates_to_instance() {
        let ops = Real::ops();
        let a = Real::new(3.0).unwrap();
        let b = Real::new(4.0).unwrap();

        assert!(ops.is_invertible(&a));
        assert!(ops.is_finite(&a));
        assert_eq!(ops.clone_value(&a), a);
        assert_eq!(
            ops.call_binary(BinaryOp::Add, &a, &b).unwrap(),
            Real::new(7.0).unwrap()
        );
        assert_eq!(
            ops.call_binary_reversed(BinaryOp::Subtract, &a, &b).unwrap(),
            Real::new(1.0).unwrap()
        );
    }

    #[test]
    fn test_hash_consistent_with_eq() {
        let ops = Real::ops();
        let a = Real::new(2.5).unwrap();
        let b = Real::new(2.5).unwrap();
        assert!(ops.eq_values(&a, &b));

        let mut ha = DefaultHasher::new();
        let mut hb = DefaultHasher::new();
        ops.hash_value(&a, &mut ha);
        ops.hash_value(&b, &mut hb);
        assert_eq!(ha.finish(), hb.finish());
    }

    #[test]
    fn test_zero_and_one_shortcuts() {
        assert_eq!(Real::zero(), Real::new(0.0).unwrap());
        assert_eq!(Real::one(), Real::new(1.0).unwrap());
    }
}

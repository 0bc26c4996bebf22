// ============================================================================
// Transformed Decorator
// Stores a forward-transformed representation, undoes it on output
// ============================================================================

use crate::number::{Components, Number, NumberOps};
use crate::ops::{AlgebraResult, BinaryOp, ComponentOp, Constant, UnaryOp};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

/// A bijective change of representation for values of `T`.
///
/// Both directions must be total, and `backward(forward(x)) == x` must hold
/// for every `x`; a violating implementation surfaces as values comparing
/// unequal after a round trip, not as an error.
pub trait Transformation<T: Number>: Send + Sync + 'static {
    /// Maps a logical value to the representation stored internally.
    fn forward(value: T) -> T;

    /// Maps a stored representation back to the logical value.
    fn backward(value: T) -> T;
}

/// The sign-flip transformation; it is its own inverse.
pub struct Negation;

impl<T: Number> Transformation<T> for Negation {
    fn forward(value: T) -> T {
        value
            .call_unary(UnaryOp::Negate)
            .expect("negation is supported by every number type")
    }

    fn backward(value: T) -> T {
        value
            .call_unary(UnaryOp::Negate)
            .expect("negation is supported by every number type")
    }
}

/// A number stored as `X::forward` of its logical value.
///
/// All operations act on the stored representation directly; only
/// [`Transformed::value`] and `Display` apply the backward transform. The
/// wrapper therefore computes in transformed space, which is the point: for
/// a linear transform like [`Negation`], addition in either space agrees,
/// while multiplication deliberately does not.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(bound(
        serialize = "T: serde::Serialize",
        deserialize = "T: serde::Deserialize<'de>"
    ))
)]
pub struct Transformed<T: Number, X: Transformation<T>> {
    repr: T,
    #[cfg_attr(feature = "serde", serde(skip))]
    _transform: PhantomData<fn() -> X>,
}

impl<T: Number, X: Transformation<T>> Transformed<T, X> {
    /// Wraps a logical value, storing its forward transform.
    pub fn new(value: T) -> Self {
        Self::from_repr(X::forward(value))
    }

    // Raw-representation construction stays private so every public value
    // went through the forward transform exactly once.
    fn from_repr(repr: T) -> Self {
        Transformed {
            repr,
            _transform: PhantomData,
        }
    }

    /// The logical value, recovered through the backward transform.
    pub fn value(&self) -> T {
        X::backward(self.repr.clone())
    }

    /// Borrows the stored (forward-transformed) representation.
    pub fn representation(&self) -> &T {
        &self.repr
    }
}

impl<T: Number, X: Transformation<T>> Number for Transformed<T, X> {
    type Ops = TransformedOps<T, X>;

    fn is_invertible(&self) -> bool {
        self.repr.is_invertible()
    }

    fn is_finite(&self) -> bool {
        self.repr.is_finite()
    }

    fn call_unary(&self, op: UnaryOp) -> AlgebraResult<Self> {
        Ok(Self::from_repr(self.repr.call_unary(op)?))
    }

    fn call_binary(&self, op: BinaryOp, other: &Self) -> AlgebraResult<Self> {
        Ok(Self::from_repr(self.repr.call_binary(op, &other.repr)?))
    }

    fn call_component(&self, op: ComponentOp) -> AlgebraResult<f64> {
        self.repr.call_component(op)
    }

    fn write_components(&self, out: &mut Components) {
        self.repr.write_components(out);
    }
}

impl<T: Number, X: Transformation<T>> Clone for Transformed<T, X> {
    fn clone(&self) -> Self {
        Self::from_repr(self.repr.clone())
    }
}

impl<T: Number, X: Transformation<T>> Default for Transformed<T, X> {
    fn default() -> Self {
        Transformed::new(T::zero())
    }
}

impl<T: Number, X: Transformation<T>> PartialEq for Transformed<T, X> {
    fn eq(&self, other: &Self) -> bool {
        self.repr == other.repr
    }
}

impl<T: Number, X: Transformation<T>> Eq for Transformed<T, X> {}

impl<T: Number, X: Transformation<T>> PartialOrd for Transformed<T, X> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: Number, X: Transformation<T>> Ord for Transformed<T, X> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.repr.cmp(&other.repr)
    }
}

impl<T: Number, X: Transformation<T>> Hash for Transformed<T, X> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.repr.hash(state);
    }
}

impl<T: Number, X: Transformation<T>> fmt::Debug for Transformed<T, X> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Transformed(repr: {:?})", self.repr)
    }
}

impl<T: Number, X: Transformation<T>> fmt::Display for Transformed<T, X> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.value(), f)
    }
}

// ============================================================================
// Operations Singleton
// ============================================================================

/// Operations singleton for [`Transformed<T, X>`].
pub struct TransformedOps<T, X>(PhantomData<fn() -> (T, X)>);

impl<T, X> Default for TransformedOps<T, X> {
    fn default() -> Self {
        TransformedOps(PhantomData)
    }
}

impl<T: Number, X: Transformation<T>> NumberOps<Transformed<T, X>> for TransformedOps<T, X> {
    #[inline]
    fn dimension(&self) -> i32 {
        T::ops().dimension()
    }

    fn create(&self, constant: Constant) -> Transformed<T, X> {
        Transformed::new(T::ops().create(constant))
    }

    fn create_from_components(
        &self,
        components: &mut dyn Iterator<Item = f64>,
    ) -> AlgebraResult<Transformed<T, X>> {
        Ok(Transformed::new(
            T::ops().create_from_components(components)?,
        ))
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scalar::Real;

    type Negated = Transformed<Real, Negation>;

    fn real(v: f64) -> Real {
        Real::new(v).unwrap()
    }

    #[test]
    fn test_round_trip_recovers_logical_value() {
        let wrapped = Negated::new(real(3.5));
        assert_eq!(wrapped.value(), real(3.5));
        assert_eq!(*wrapped.representation(), real(-3.5));
    }

    #[test]
    fn test_display_shows_logical_value() {
        assert_eq!(Negated::new(real(3.5)).to_string(), "3.5");
        assert_eq!(format!("{:?}", Negated::new(real(3.5))), "Transformed(repr: Real(-3.5))");
    }

    #[test]
    fn test_addition_acts_on_representation() {
        // Negation is linear, so addition agrees in both spaces.
        let sum = Negated::new(real(3.0))
            .call_binary(BinaryOp::Add, &Negated::new(real(4.0)))
            .unwrap();
        assert_eq!(sum.value(), real(7.0));
    }

    #[test]
    fn test_multiplication_acts_on_representation() {
        // (-3)(-4) = 12 in representation space; the logical value is its
        // backward transform, not the product of the logical values.
        let product = Negated::new(real(3.0))
            .call_binary(BinaryOp::Multiply, &Negated::new(real(4.0)))
            .unwrap();
        assert_eq!(*product.representation(), real(12.0));
        assert_eq!(product.value(), real(-12.0));
    }

    #[test]
    fn test_constants_wrap_inner_constants() {
        let one = Negated::ops().create(Constant::RealOne);
        assert_eq!(one.value(), real(1.0));
        assert_eq!(*one.representation(), real(-1.0));
    }

    #[test]
    fn test_equality_and_order_follow_representation() {
        assert_eq!(Negated::new(real(2.0)), Negated::new(real(2.0)));
        // Negation reverses the representation order.
        assert!(Negated::new(real(1.0)) > Negated::new(real(2.0)));
    }

    #[test]
    fn test_components_expose_representation() {
        let wrapped = Negated::new(real(2.0));
        assert_eq!(wrapped.components().as_slice(), &[-2.0]);
        assert_eq!(wrapped.dimension(), 1);
    }

    #[test]
    fn test_create_from_components_takes_logical_values() {
        let mut seq = std::iter::once(5.0);
        let wrapped = Negated::ops().create_from_components(&mut seq).unwrap();
        assert_eq!(wrapped.value(), real(5.0));
    }
}

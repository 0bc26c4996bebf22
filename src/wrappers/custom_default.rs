// ============================================================================
// Custom Default Decorator
// Overrides what an uninitialized value resolves to
// ============================================================================

use crate::number::{Components, Number, NumberOps};
use crate::ops::{AlgebraResult, BinaryOp, ComponentOp, Constant, UnaryOp};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

/// Supplies the value an uninitialized [`CustomDefault`] resolves to.
///
/// Implementors are zero-sized tags; the provider never sees the wrapper,
/// only produces inner values.
pub trait DefaultProvider<T: Number>: Send + Sync + 'static {
    fn default_value() -> T;
}

/// Resolves uninitialized values to the real multiplicative identity.
pub struct OneDefault;

impl<T: Number> DefaultProvider<T> for OneDefault {
    fn default_value() -> T {
        T::one()
    }
}

/// Resolves uninitialized values to zero, making the wrapper an identity
/// decorator over the inner type.
pub struct ZeroDefault;

impl<T: Number> DefaultProvider<T> for ZeroDefault {
    fn default_value() -> T {
        T::zero()
    }
}

/// A number whose uninitialized state stands for `P::default_value()`.
///
/// The wrapper never materializes the default eagerly: every read and every
/// operand position resolves independently, then delegates to the inner
/// type's dispatch. Equality, ordering, and hashing compare resolved values,
/// so an uninitialized wrapper is indistinguishable from an initialized one
/// holding the default.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(bound(
        serialize = "T: serde::Serialize",
        deserialize = "T: serde::Deserialize<'de>"
    ))
)]
pub struct CustomDefault<T: Number, P: DefaultProvider<T>> {
    value: Option<T>,
    #[cfg_attr(feature = "serde", serde(skip))]
    _provider: PhantomData<fn() -> P>,
}

impl<T: Number, P: DefaultProvider<T>> CustomDefault<T, P> {
    /// Wraps an inner value in the initialized state.
    #[inline]
    pub fn new(value: T) -> Self {
        CustomDefault {
            value: Some(value),
            _provider: PhantomData,
        }
    }

    /// True if an inner value is stored; false for the default state.
    #[inline]
    pub fn is_initialized(&self) -> bool {
        self.value.is_some()
    }

    /// Resolves to the stored value or the provider's default.
    pub fn value(&self) -> T {
        self.value.clone().unwrap_or_else(P::default_value)
    }
}

impl<T: Number, P: DefaultProvider<T>> Number for CustomDefault<T, P> {
    type Ops = CustomDefaultOps<T, P>;

    fn is_invertible(&self) -> bool {
        self.value().is_invertible()
    }

    fn is_finite(&self) -> bool {
        self.value().is_finite()
    }

    fn call_unary(&self, op: UnaryOp) -> AlgebraResult<Self> {
        Ok(Self::new(self.value().call_unary(op)?))
    }

    fn call_binary(&self, op: BinaryOp, other: &Self) -> AlgebraResult<Self> {
        // Both operands resolve independently before delegation.
        Ok(Self::new(self.value().call_binary(op, &other.value())?))
    }

    fn call_component(&self, op: ComponentOp) -> AlgebraResult<f64> {
        self.value().call_component(op)
    }

    fn write_components(&self, out: &mut Components) {
        self.value().write_components(out);
    }
}

impl<T: Number, P: DefaultProvider<T>> Clone for CustomDefault<T, P> {
    fn clone(&self) -> Self {
        CustomDefault {
            value: self.value.clone(),
            _provider: PhantomData,
        }
    }
}

impl<T: Number, P: DefaultProvider<T>> Default for CustomDefault<T, P> {
    /// The uninitialized state; reads resolve to the provider's value.
    fn default() -> Self {
        CustomDefault {
            value: None,
            _provider: PhantomData,
        }
    }
}

impl<T: Number, P: DefaultProvider<T>> PartialEq for CustomDefault<T, P> {
    fn eq(&self, other: &Self) -> bool {
        self.value() == other.value()
    }
}

impl<T: Number, P: DefaultProvider<T>> Eq for CustomDefault<T, P> {}

impl<T: Number, P: DefaultProvider<T>> PartialOrd for CustomDefault<T, P> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: Number, P: DefaultProvider<T>> Ord for CustomDefault<T, P> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value().cmp(&other.value())
    }
}

impl<T: Number, P: DefaultProvider<T>> Hash for CustomDefault<T, P> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value().hash(state);
    }
}

impl<T: Number, P: DefaultProvider<T>> fmt::Debug for CustomDefault<T, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(value) => write!(f, "CustomDefault({:?})", value),
            None => write!(f, "CustomDefault(default: {:?})", self.value()),
        }
    }
}

impl<T: Number, P: DefaultProvider<T>> fmt::Display for CustomDefault<T, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.value(), f)
    }
}

// ============================================================================
// Operations Singleton
// ============================================================================

/// Operations singleton for [`CustomDefault<T, P>`].
pub struct CustomDefaultOps<T, P>(PhantomData<fn() -> (T, P)>);

impl<T, P> Default for CustomDefaultOps<T, P> {
    fn default() -> Self {
        CustomDefaultOps(PhantomData)
    }
}

impl<T: Number, P: DefaultProvider<T>> NumberOps<CustomDefault<T, P>> for CustomDefaultOps<T, P> {
    #[inline]
    fn dimension(&self) -> i32 {
        T::ops().dimension()
    }

    fn create(&self, constant: Constant) -> CustomDefault<T, P> {
        CustomDefault::new(T::ops().create(constant))
    }

    fn create_from_components(
        &self,
        components: &mut dyn Iterator<Item = f64>,
    ) -> AlgebraResult<CustomDefault<T, P>> {
        Ok(CustomDefault::new(
            T::ops().create_from_components(components)?,
        ))
    }
}

// ============================================================================
// Tests
// ============================================================================

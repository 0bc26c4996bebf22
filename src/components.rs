// ============================================================================
// Component View
// Read-only two-element adapter over a pair number
// ============================================================================

use crate::hyper::PairNumber;
use crate::ops::{AlgebraError, AlgebraResult};
use arrayvec::ArrayVec;

/// A fixed two-element, indexable, iterable view over a pair's components.
///
/// The view carries no algebraic behavior and rejects every mutation;
/// numbers are immutable, so replacing a component goes through
/// [`PairNumber::with_first`] and [`PairNumber::with_second`] instead.
#[derive(Debug)]
pub struct ComponentView<'a, P: PairNumber> {
    items: ArrayVec<&'a P::Inner, 2>,
}

impl<'a, P: PairNumber> ComponentView<'a, P> {
    pub fn new(pair: &'a P) -> Self {
        ComponentView {
            items: ArrayVec::from([pair.first(), pair.second()]),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Borrows the component at `index`.
    ///
    /// # Errors
    /// Returns `OutOfRange` past the pair's arity.
    pub fn get(&self, index: usize) -> AlgebraResult<&'a P::Inner> {
        self.items.get(index).copied().ok_or(AlgebraError::OutOfRange)
    }

    /// Always fails: component views are read-only.
    pub fn set(&mut self, _index: usize, _value: P::Inner) -> AlgebraResult<()> {
        Err(AlgebraError::ReadOnlyComponents)
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a P::Inner> + '_ {
        self.items.iter().copied()
    }

    /// Position of the first component equal to `value`, if any.
    pub fn index_of(&self, value: &P::Inner) -> Option<usize> {
        self.items.iter().position(|item| *item == value)
    }

    pub fn contains(&self, value: &P::Inner) -> bool {
        self.index_of(value).is_some()
    }
}

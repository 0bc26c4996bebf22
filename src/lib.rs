// ============================================================================
// Hyperalgebra Library
// Generic Cayley-Dickson number systems with uniform operation dispatch
// ============================================================================

//! # Hyperalgebra
//!
//! A generic numeric algebra framework. Starting from a leaf scalar, the
//! doubling constructors in [`hyper`] build richer number systems as pairs
//! of an inner type, nestable to any depth, while every type keeps the same
//! operation-dispatch contract so generic algorithms never need
//! per-combination code.
//!
//! ## Features
//!
//! - **Four doubling variants**: [`hyper::Complex`], [`hyper::Dual`],
//!   [`hyper::SplitComplex`], and [`hyper::Diagonal`], differing only in how
//!   the adjoined unit squares
//! - **Uniform dispatch**: one [`number::Number`] / [`number::NumberOps`]
//!   contract for leaves, pairs, towers, and decorators
//! - **Named constants**: every type materializes the same closed constant
//!   vocabulary, so identities like `i^2 = -1` are checkable generically
//! - **Decorators**: default-override and change-of-representation wrappers
//!   compose with any conforming type
//!
//! ## Example
//!
//! ```rust
//! use hyperalgebra::prelude::*;
//!
//! // The complex imaginary unit, built from the named constant vocabulary.
//! let i = Complex::<Real>::ops().create(Constant::SpecialOne);
//! let squared = i.call_unary(UnaryOp::Square)?;
//! assert_eq!(squared, Complex::<Real>::ops().create(Constant::NegativeOne));
//!
//! // The same code shape works two levels deep.
//! let tower = Complex::<Complex<Real>>::ops()
//!     .create_from_components(&mut [1.0, 2.0, 3.0, 4.0].into_iter())?;
//! assert_eq!(tower.dimension(), 4);
//! assert_eq!(tower.components().as_slice(), &[1.0, 2.0, 3.0, 4.0]);
//! # Ok::<(), hyperalgebra::AlgebraError>(())
//! ```

pub mod components;
pub mod hyper;
pub mod number;
pub mod ops;
pub mod registry;
pub mod scalar;
pub mod wrappers;

pub use ops::{AlgebraError, AlgebraResult};

// Re-exports for convenience
pub mod prelude {
    pub use crate::components::ComponentView;
    pub use crate::hyper::{Complex, Diagonal, Dual, PairNumber, SplitComplex};
    pub use crate::number::{Components, Number, NumberOps};
    pub use crate::ops::{
        AlgebraError, AlgebraResult, BinaryOp, ComponentOp, Constant, Operation, UnaryOp,
    };
    pub use crate::scalar::{ExtendedReal, Real};
    pub use crate::wrappers::{
        CustomDefault, DefaultProvider, Negation, OneDefault, Transformation, Transformed,
        ZeroDefault,
    };
}

#[cfg(test)]
mod integration_tests {
    use super::prelude::*;

    fn real(v: f64) -> Real {
        Real::new(v).unwrap()
    }

    #[test]
    fn test_tower_dimension_doubles_per_level() {
        assert_eq!(Real::ops().dimension(), 1);
        assert_eq!(Complex::<Real>::ops().dimension(), 2);
        assert_eq!(Dual::<Complex<Real>>::ops().dimension(), 4);
        assert_eq!(Complex::<Dual<Complex<Real>>>::ops().dimension(), 8);
    }

    #[test]
    fn test_tower_round_trips_through_flat_components() {
        let flat = [1.0, 2.0, 3.0, 4.0];
        let tower = Complex::<Complex<Real>>::ops()
            .create_from_components(&mut flat.into_iter())
            .unwrap();

        assert_eq!(*tower.first(), Complex::new(real(1.0), real(2.0)));
        assert_eq!(*tower.second(), Complex::new(real(3.0), real(4.0)));
        assert_eq!(tower.components().as_slice(), &flat);
    }

    #[test]
    fn test_exhausted_sequence_is_out_of_range() {
        let result =
            Complex::<Complex<Real>>::ops().create_from_components(&mut [1.0, 2.0, 3.0].into_iter());
        assert_eq!(result, Err(AlgebraError::OutOfRange));
    }

    #[test]
    fn test_generic_algorithms_cross_tower_levels() {
        // Written once against the contract, exercised at two depths.
        fn double_then_halve<N: Number>(value: &N) -> AlgebraResult<N> {
            value.call_unary(UnaryOp::Double)?.call_unary(UnaryOp::Half)
        }

        let scalar = real(21.0);
        assert_eq!(double_then_halve(&scalar).unwrap(), scalar);

        let nested = Dual::new(
            Complex::new(real(1.0), real(2.0)),
            Complex::new(real(3.0), real(4.0)),
        );
        assert_eq!(double_then_halve(&nested).unwrap(), nested);
    }

    #[test]
    fn test_quaternion_like_non_commutativity() {
        // Two levels of complex doubling stop commuting, as they should.
        let ops = Complex::<Complex<Real>>::ops();
        let j = ops.create(Constant::SpecialOne);
        let i = Complex::new(
            Complex::<Real>::ops().create(Constant::SpecialOne),
            Complex::<Real>::zero(),
        );

        let ij = i.call_binary(BinaryOp::Multiply, &j).unwrap();
        let ji = j.call_binary(BinaryOp::Multiply, &i).unwrap();
        assert_eq!(ji, ij.call_unary(UnaryOp::Negate).unwrap());
        assert_ne!(ij, ji);
    }

    #[test]
    fn test_decorators_compose_with_pairs() {
        type Wrapped = CustomDefault<Complex<Real>, OneDefault>;

        let product = Wrapped::default()
            .call_binary(BinaryOp::Multiply, &Wrapped::new(Complex::new(real(0.0), real(1.0))))
            .unwrap();
        assert_eq!(product.value(), Complex::new(real(0.0), real(1.0)));

        let negated = Transformed::<Complex<Real>, Negation>::new(Complex::new(real(1.0), real(2.0)));
        assert_eq!(negated.value(), Complex::new(real(1.0), real(2.0)));
        assert_eq!(
            *negated.representation(),
            Complex::new(real(-1.0), real(-2.0))
        );
    }

    #[test]
    fn test_strict_and_extended_leaves_disagree_on_overflow() {
        let huge = real(f64::MAX);
        assert_eq!(
            huge.call_unary(UnaryOp::Double),
            Err(AlgebraError::NonFiniteValue)
        );

        let extended = ExtendedReal::new(f64::MAX);
        let doubled = extended.call_unary(UnaryOp::Double).unwrap();
        assert!(!doubled.is_finite());
    }

    #[test]
    fn test_display_nests_with_variant_names() {
        let nested = SplitComplex::new(
            Dual::new(real(1.0), real(2.0)),
            Dual::new(real(3.0), real(4.0)),
        );
        assert_eq!(
            nested.to_string(),
            "SplitComplex(Dual(1, 2), Dual(3, 4))"
        );
    }
}

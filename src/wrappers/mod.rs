// ============================================================================
// Wrappers Module
// Decorator number types that compose with any conforming inner type
// ============================================================================
//
// - CustomDefault: replaces the inner type's default with a provided value,
//   resolving lazily on every read and operand position
// - Transformed: stores a forward-transformed representation and undoes the
//   transform on output

mod custom_default;
mod transformed;

pub use custom_default::{CustomDefault, CustomDefaultOps, DefaultProvider, OneDefault, ZeroDefault};
pub use transformed::{Negation, Transformation, Transformed, TransformedOps};

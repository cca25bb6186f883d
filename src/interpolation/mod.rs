pub mod interpolant;
pub mod kind;
pub use interpolant::*;
pub use kind::*;

/// Interpolation trait
pub trait Interpolation {
    type Input: ?Sized;
    type Output;
    fn interpolate(input: &Self::Input, kind: InterpolationKind) -> Self::Output;
}

pub mod arc_length;
pub mod spline2d;
pub use arc_length::*;
pub use spline2d::*;

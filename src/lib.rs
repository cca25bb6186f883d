//! Chord-length parameterized spline interpolation of planar waypoints.
//!
//! ```
//! use arc_spline::prelude::*;
//!
//! let xs = [-2.5, 0.0, 2.5, 5.0, 7.5, 3.0, -1.0];
//! let ys = [0.7, -6., -5., -3.5, 0.0, 5.0, -2.0];
//! let spline = ArcLengthSpline2D::try_new(&xs, &ys, InterpolationKind::Cubic).unwrap();
//! let samples = spline.sample(&SampleOptions::default()).unwrap();
//! assert!(!samples.is_empty());
//! ```

mod error;
mod interpolation;
mod knot;
mod misc;
mod sampling;
mod spline;

pub mod prelude {
    pub use crate::error::*;
    pub use crate::interpolation::*;
    pub use crate::knot::*;
    pub use crate::misc::*;
    pub use crate::sampling::*;
    pub use crate::spline::*;
}

use nalgebra::Point2;

use crate::{error::SplineError, misc::FloatingPoint};

use super::SplineSample;

/// Consumer of sampled paths, e.g. a plotting backend
pub trait PathSink<T: FloatingPoint> {
    type Error: From<SplineError>;

    /// Receive the waypoints a path was fitted through
    fn waypoints(&mut self, label: &str, points: &[Point2<T>]) -> Result<(), Self::Error>;

    /// Receive a sampled path
    fn path(&mut self, label: &str, samples: &[SplineSample<T>]) -> Result<(), Self::Error>;
}

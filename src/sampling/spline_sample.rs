use nalgebra::Point2;

use crate::misc::FloatingPoint;

/// A point on a spline together with the parameter it was evaluated at
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SplineSample<T: FloatingPoint> {
    parameter: T,
    point: Point2<T>,
}

impl<T: FloatingPoint> SplineSample<T> {
    pub fn new(parameter: T, point: Point2<T>) -> Self {
        Self { parameter, point }
    }

    pub fn parameter(&self) -> T {
        self.parameter
    }

    pub fn point(&self) -> Point2<T> {
        self.point
    }
}

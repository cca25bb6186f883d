use std::fmt;

use nalgebra::{Point2, Vector2};

use crate::{
    error::{InvalidInput, SplineResult},
    interpolation::{Interpolant, Interpolation, InterpolationKind},
    misc::FloatingPoint,
};

use super::try_chord_length_parameterize;

/// Planar spline through waypoints, parameterized by cumulative chord length
/// Each axis is an independent `Interpolant` over the same parameter sequence,
/// so `x` and `y` are always evaluated at the identical parameter.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArcLengthSpline2D<T: FloatingPoint> {
    waypoints: Vec<Point2<T>>,
    /// chord length of each segment, one less than the number of waypoints
    segment_lengths: Vec<T>,
    /// parameter of each waypoint, `parameters[0] == 0`
    parameters: Vec<T>,
    sx: Interpolant<T>,
    sy: Interpolant<T>,
}

impl<T: FloatingPoint> ArcLengthSpline2D<T> {
    /// Create a spline from separate coordinate sequences
    /// # Failures
    /// - `xs` and `ys` differ in length
    /// - fewer than two waypoints
    /// - a coordinate is not finite
    /// - two consecutive waypoints coincide
    ///
    /// # Example
    /// ```
    /// use arc_spline::prelude::*;
    /// use approx::assert_relative_eq;
    ///
    /// let spline = ArcLengthSpline2D::try_new(&[0., 1., 2.], &[0., 1., 0.], InterpolationKind::Linear).unwrap();
    /// let (_, end) = spline.domain();
    /// assert_relative_eq!(end, 2. * 2f64.sqrt(), epsilon = 1e-12);
    ///
    /// let p = spline.evaluate(2f64.sqrt() / 2.).unwrap();
    /// assert_relative_eq!(p.x, 0.5, epsilon = 1e-12);
    /// assert_relative_eq!(p.y, 0.5, epsilon = 1e-12);
    /// ```
    pub fn try_new(xs: &[T], ys: &[T], kind: InterpolationKind) -> SplineResult<Self> {
        if xs.len() != ys.len() {
            return Err(InvalidInput::LengthMismatch {
                expected: xs.len(),
                actual: ys.len(),
            }
            .into());
        }
        let points: Vec<_> = xs
            .iter()
            .zip(ys.iter())
            .map(|(x, y)| Point2::new(*x, *y))
            .collect();
        Self::try_from_points(&points, kind)
    }

    /// Create a spline from a sequence of waypoints
    pub fn try_from_points(points: &[Point2<T>], kind: InterpolationKind) -> SplineResult<Self> {
        if points.len() < 2 {
            return Err(InvalidInput::TooFewPoints {
                required: 2,
                actual: points.len(),
            }
            .into());
        }

        if let Some(index) = points
            .iter()
            .position(|p| !p.x.is_finite() || !p.y.is_finite())
        {
            return Err(InvalidInput::NonFinite { index }.into());
        }

        let (segment_lengths, parameters) = try_chord_length_parameterize(points)?;
        let xs: Vec<T> = points.iter().map(|p| p.x).collect();
        let ys: Vec<T> = points.iter().map(|p| p.y).collect();
        let sx = Interpolant::try_new(&parameters, &xs, kind)?;
        let sy = Interpolant::try_new(&parameters, &ys, kind)?;

        #[cfg(feature = "log")]
        log::debug!(
            "fitted {} spline through {} waypoints, length {}",
            kind,
            points.len(),
            parameters[parameters.len() - 1].to_f64_lossy()
        );

        Ok(Self {
            waypoints: points.to_vec(),
            segment_lengths,
            parameters,
            sx,
            sy,
        })
    }

    pub fn kind(&self) -> InterpolationKind {
        self.sx.kind()
    }

    pub fn waypoints(&self) -> &[Point2<T>] {
        &self.waypoints
    }

    pub fn parameters(&self) -> &[T] {
        &self.parameters
    }

    pub fn segment_lengths(&self) -> &[T] {
        &self.segment_lengths
    }

    /// Chord length of the whole polyline, the upper end of the domain
    pub fn total_length(&self) -> T {
        self.parameters[self.parameters.len() - 1]
    }

    pub fn domain(&self) -> (T, T) {
        (self.parameters[0], self.total_length())
    }

    /// Interpolant of the x coordinate
    pub fn sx(&self) -> &Interpolant<T> {
        &self.sx
    }

    /// Interpolant of the y coordinate
    pub fn sy(&self) -> &Interpolant<T> {
        &self.sy
    }

    /// Evaluate the position at parameter `s`
    /// Fails with `OutOfDomain` when `s` is outside `domain()`; there is no extrapolation.
    pub fn evaluate(&self, s: T) -> SplineResult<Point2<T>> {
        let x = self.sx.evaluate(s)?;
        let y = self.sy.evaluate(s)?;
        Ok(Point2::new(x, y))
    }

    /// Lazily evaluate the positions at each parameter in order
    pub fn evaluate_many<'a, I>(
        &'a self,
        parameters: I,
    ) -> impl Iterator<Item = SplineResult<Point2<T>>> + 'a
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: 'a,
    {
        parameters.into_iter().map(move |s| self.evaluate(s))
    }

    /// Evaluate the `order`-th derivative with respect to the parameter
    /// Order 1 is the tangent, of roughly unit length since the parameter approximates arc length.
    pub fn derivative_at(&self, s: T, order: usize) -> SplineResult<Vector2<T>> {
        let dx = self.sx.derivative(s, order)?;
        let dy = self.sy.derivative(s, order)?;
        Ok(Vector2::new(dx, dy))
    }
}

impl<T: FloatingPoint> Interpolation for ArcLengthSpline2D<T> {
    type Input = [Point2<T>];
    type Output = SplineResult<Self>;

    /// Try to create a spline through a set of waypoints
    /// # Example
    /// ```
    /// use arc_spline::prelude::*;
    /// use nalgebra::Point2;
    /// use approx::assert_relative_eq;
    ///
    /// let points = vec![
    ///     Point2::new(-1.0, -1.0),
    ///     Point2::new(1.0, -1.0),
    ///     Point2::new(1.0, 1.0),
    ///     Point2::new(-1.0, 1.0),
    /// ];
    /// let spline = ArcLengthSpline2D::interpolate(&points, InterpolationKind::Cubic).unwrap();
    /// let (start, end) = spline.domain();
    /// assert_relative_eq!(spline.evaluate(start).unwrap(), points[0], epsilon = 1e-10);
    /// assert_relative_eq!(spline.evaluate(end).unwrap(), points[3], epsilon = 1e-10);
    /// ```
    fn interpolate(input: &Self::Input, kind: InterpolationKind) -> Self::Output {
        Self::try_from_points(input, kind)
    }
}

impl<T: FloatingPoint> fmt::Display for ArcLengthSpline2D<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ArcLengthSpline2D(kind={}, points={})",
            self.kind(),
            self.waypoints.len()
        )
    }
}

use itertools::Itertools;
use nalgebra::Point2;

use crate::{
    error::{SplineError, SplineResult},
    misc::FloatingPoint,
};

/// Chord length between each pair of consecutive waypoints
pub fn segment_lengths<T: FloatingPoint>(points: &[Point2<T>]) -> Vec<T> {
    points
        .iter()
        .tuple_windows()
        .map(|(a, b)| (b - a).norm())
        .collect()
}

/// Cumulative sum of segment lengths starting at zero
/// The result has one more element than `lengths`.
pub fn cumulative_lengths<T: FloatingPoint>(lengths: &[T]) -> Vec<T> {
    let mut us: Vec<T> = Vec::with_capacity(lengths.len() + 1);
    us.push(T::zero());
    for (i, chord) in lengths.iter().enumerate() {
        let last = us[i];
        us.push(last + *chord);
    }
    us
}

/// Parameterize waypoints by cumulative chord length
/// Returns the segment lengths and the parameter of each waypoint.
/// Fails with `DegenerateParameter` when two consecutive waypoints coincide.
///
/// # Example
/// ```
/// use arc_spline::prelude::*;
/// use nalgebra::Point2;
///
/// let points = [Point2::new(0., 0.), Point2::new(3., 4.), Point2::new(3., 5.)];
/// let (lengths, parameters) = try_chord_length_parameterize(&points).unwrap();
/// assert_eq!(lengths, vec![5., 1.]);
/// assert_eq!(parameters, vec![0., 5., 6.]);
/// ```
pub fn try_chord_length_parameterize<T: FloatingPoint>(
    points: &[Point2<T>],
) -> SplineResult<(Vec<T>, Vec<T>)> {
    let lengths = segment_lengths(points);
    if let Some(index) = lengths.iter().position(|d| *d <= T::zero()) {
        return Err(SplineError::DegenerateParameter { index });
    }
    let parameters = cumulative_lengths(&lengths);
    Ok((lengths, parameters))
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn parameters_start_at_zero_and_increase() {
        let points = [
            Point2::new(-2.5, 0.7),
            Point2::new(0.0, -6.),
            Point2::new(2.5, -5.),
            Point2::new(5.0, -3.5),
            Point2::new(7.5, 0.0),
            Point2::new(3.0, 5.0),
            Point2::new(-1.0, -2.0),
        ];
        let (lengths, parameters) = try_chord_length_parameterize(&points).unwrap();
        assert_eq!(lengths.len(), points.len() - 1);
        assert_eq!(parameters.len(), points.len());
        assert_eq!(parameters[0], 0.);
        assert!(parameters.windows(2).all(|w| w[1] > w[0]));

        let total: f64 = lengths.iter().sum();
        assert_relative_eq!(parameters[parameters.len() - 1], total, epsilon = 1e-12);
    }

    #[test]
    fn coincident_waypoints_are_degenerate() {
        let points = [
            Point2::new(0., 0.),
            Point2::new(1., 1.),
            Point2::new(1., 1.),
        ];
        assert_eq!(
            try_chord_length_parameterize(&points).unwrap_err(),
            SplineError::DegenerateParameter { index: 1 }
        );
    }
}

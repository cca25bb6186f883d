use itertools::Itertools;
use nalgebra::{DMatrix, DVector};

use crate::{
    error::{InvalidInput, SplineError, SplineResult},
    knot::KnotVector,
    misc::FloatingPoint,
};

use super::InterpolationKind;

/// Scalar B-spline interpolant over a strictly increasing parameter sequence
/// The curve passes through every `(parameter, value)` sample.
/// With fewer samples than `kind.degree() + 1` the degree drops to `samples - 1`,
/// i.e. a single polynomial through all of them.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Interpolant<T: FloatingPoint> {
    kind: InterpolationKind,
    /// effective polynomial degree
    degree: usize,
    knots: KnotVector<T>,
    /// one coefficient per sample
    coefficients: Vec<T>,
}

impl<T: FloatingPoint> Interpolant<T> {
    /// Fit an interpolant through `values` sampled at `parameters`
    /// # Failures
    /// - the two sequences differ in length
    /// - fewer than two samples
    /// - a parameter or value is not finite
    /// - the parameters are not strictly increasing
    ///
    /// # Example
    /// ```
    /// use arc_spline::prelude::*;
    /// use approx::assert_relative_eq;
    ///
    /// let s = [0., 1., 2., 3.];
    /// let x = [0., 1., 4., 9.];
    /// let sx = Interpolant::try_new(&s, &x, InterpolationKind::Quadratic).unwrap();
    /// assert_relative_eq!(sx.evaluate(1.5).unwrap(), 2.25, epsilon = 1e-12);
    /// assert!(sx.evaluate(3.5).is_err());
    /// ```
    pub fn try_new(parameters: &[T], values: &[T], kind: InterpolationKind) -> SplineResult<Self> {
        if parameters.len() != values.len() {
            return Err(InvalidInput::LengthMismatch {
                expected: parameters.len(),
                actual: values.len(),
            }
            .into());
        }

        let n = parameters.len();
        if n < 2 {
            return Err(InvalidInput::TooFewPoints {
                required: 2,
                actual: n,
            }
            .into());
        }

        if let Some(index) = parameters
            .iter()
            .zip(values.iter())
            .position(|(p, v)| !p.is_finite() || !v.is_finite())
        {
            return Err(InvalidInput::NonFinite { index }.into());
        }

        if let Some(index) = parameters.iter().tuple_windows().position(|(a, b)| b <= a) {
            return Err(SplineError::DegenerateParameter { index });
        }

        let degree = kind.degree().min(n - 1);
        let knots = KnotVector::try_interpolating(parameters, degree)?;
        let coefficients = if degree == 1 {
            // hat functions are already cardinal at the samples
            values.to_vec()
        } else {
            try_solve_collocation(&knots, parameters, values, degree)?
        };

        Ok(Self {
            kind,
            degree,
            knots,
            coefficients,
        })
    }

    pub fn kind(&self) -> InterpolationKind {
        self.kind
    }

    pub fn degree(&self) -> usize {
        self.degree
    }

    pub fn coefficients(&self) -> &[T] {
        &self.coefficients
    }

    /// Get the parameter range the interpolant is defined on
    pub fn domain(&self) -> (T, T) {
        self.knots.domain(self.degree())
    }

    /// Parameters where consecutive polynomial pieces join
    pub fn breakpoints(&self) -> Vec<T> {
        self.knots.breakpoints(self.degree())
    }

    /// Check that `u` lies within the closed domain
    pub fn contains(&self, u: T) -> bool {
        let (min, max) = self.domain();
        u >= min && u <= max
    }

    /// Evaluate the interpolant at `u`
    /// Fails with `OutOfDomain` outside the fitted parameter range.
    pub fn evaluate(&self, u: T) -> SplineResult<T> {
        self.ensure_domain(u)?;
        Ok(self.value_at(u))
    }

    /// Evaluate the `order`-th derivative at `u`
    /// Derivatives above the degree vanish.
    /// At a breakpoint the piece starting there is used.
    pub fn derivative(&self, u: T, order: usize) -> SplineResult<T> {
        self.ensure_domain(u)?;
        if order == 0 {
            return Ok(self.value_at(u));
        }

        let degree = self.degree();
        if order > degree {
            return Ok(T::zero());
        }

        let span = self.span(u);
        let ders = self
            .knots
            .derivative_basis_functions(span, u, degree, order);
        Ok(self.combine(span, &ders[order]))
    }

    fn ensure_domain(&self, u: T) -> SplineResult<()> {
        if self.contains(u) {
            Ok(())
        } else {
            let (min, max) = self.domain();
            Err(SplineError::OutOfDomain {
                parameter: u.to_f64_lossy(),
                min: min.to_f64_lossy(),
                max: max.to_f64_lossy(),
            })
        }
    }

    fn span(&self, u: T) -> usize {
        let n = self.coefficients.len() - 1;
        self.knots.find_knot_span_index(n, self.degree(), u)
    }

    fn value_at(&self, u: T) -> T {
        let span = self.span(u);
        let basis = self.knots.basis_functions(span, u, self.degree());
        self.combine(span, &basis)
    }

    /// Weighted sum of the coefficients supported on `span`
    fn combine(&self, span: usize, weights: &[T]) -> T {
        let offset = span - self.degree();
        weights
            .iter()
            .enumerate()
            .fold(T::zero(), |acc, (j, w)| acc + *w * self.coefficients[offset + j])
    }
}

/// Solve the collocation system `A c = values` where `A[i][j] = N_j(parameters[i])`
fn try_solve_collocation<T: FloatingPoint>(
    knots: &KnotVector<T>,
    parameters: &[T],
    values: &[T],
    degree: usize,
) -> SplineResult<Vec<T>> {
    let n = parameters.len();
    let mut m_a = DMatrix::<T>::zeros(n, n);

    for (i, u) in parameters.iter().enumerate() {
        let span = knots.find_knot_span_index(n - 1, degree, *u);
        let basis = knots.basis_functions(span, *u, degree);
        let ls = span - degree;
        for (j, b) in basis.into_iter().enumerate() {
            m_a[(i, ls + j)] = b;
        }
    }

    let b = DVector::from_column_slice(values);
    let solved = m_a.lu().solve(&b).ok_or(SplineError::SingularSystem)?;
    Ok(solved.iter().copied().collect())
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    const H: f64 = 1e-7;

    fn samples() -> (Vec<f64>, Vec<f64>) {
        let s = vec![0., 0.8, 1.5, 2.9, 3.4, 4.6, 6.0];
        let v = vec![0.7, -6., -5., -3.5, 0., 5., -2.];
        (s, v)
    }

    #[test]
    fn passes_through_samples() {
        let (s, v) = samples();
        for kind in InterpolationKind::ALL {
            let f = Interpolant::try_new(&s, &v, kind).unwrap();
            assert_eq!(f.coefficients().len(), s.len());
            for (u, expected) in s.iter().zip(v.iter()) {
                assert_relative_eq!(f.evaluate(*u).unwrap(), *expected, epsilon = 1e-10);
            }
        }
    }

    #[test]
    fn reproduces_polynomials_of_its_degree() {
        let s: Vec<f64> = vec![0., 0.5, 1.25, 2., 3.5, 4.];
        let line = |u: f64| 2. * u - 1.;
        let parabola = |u: f64| u * u - 3. * u + 2.;
        let cubic = |u: f64| 0.5 * u * u * u - u * u + u;

        let cases: [(InterpolationKind, &dyn Fn(f64) -> f64); 3] = [
            (InterpolationKind::Linear, &line),
            (InterpolationKind::Quadratic, &parabola),
            (InterpolationKind::Cubic, &cubic),
        ];
        for (kind, p) in cases {
            let v: Vec<f64> = s.iter().map(|u| p(*u)).collect();
            let f = Interpolant::try_new(&s, &v, kind).unwrap();
            for i in 0..=40 {
                let u = 4. * i as f64 / 40.;
                assert_relative_eq!(f.evaluate(u).unwrap(), p(u), epsilon = 1e-9);
            }
        }
    }

    #[test]
    fn linear_slope_jumps_at_corner() {
        let f = Interpolant::try_new(&[0., 1., 2.], &[0., 1., 0.], InterpolationKind::Linear)
            .unwrap();
        assert_eq!(f.breakpoints(), vec![1.]);
        assert_relative_eq!(f.derivative(1. - H, 1).unwrap(), 1., epsilon = 1e-12);
        assert_relative_eq!(f.derivative(1. + H, 1).unwrap(), -1., epsilon = 1e-12);
        assert_eq!(f.derivative(0.5, 2).unwrap(), 0.);
    }

    #[test]
    fn quadratic_is_c1_across_breakpoints() {
        let (s, v) = samples();
        let f = Interpolant::try_new(&s, &v, InterpolationKind::Quadratic).unwrap();
        let breakpoints = f.breakpoints();
        assert_eq!(breakpoints.len(), s.len() - 3);
        for b in breakpoints {
            let left = f.derivative(b - H, 1).unwrap();
            let right = f.derivative(b + H, 1).unwrap();
            assert_relative_eq!(left, right, epsilon = 1e-4);
        }
    }

    #[test]
    fn cubic_is_c2_across_breakpoints() {
        let (s, v) = samples();
        let f = Interpolant::try_new(&s, &v, InterpolationKind::Cubic).unwrap();
        let breakpoints = f.breakpoints();
        assert_eq!(breakpoints.len(), s.len() - 4);
        for b in breakpoints {
            for order in 1..=2 {
                let left = f.derivative(b - H, order).unwrap();
                let right = f.derivative(b + H, order).unwrap();
                assert_relative_eq!(left, right, epsilon = 1e-4);
            }
        }
    }

    #[test]
    fn rejects_non_increasing_parameters() {
        let s = [0., 1., 1., 2.];
        let err = Interpolant::try_new(&s, &[0., 1., 2., 3.], InterpolationKind::Linear).unwrap_err();
        assert_eq!(err, SplineError::DegenerateParameter { index: 1 });

        let err = Interpolant::try_new(&[0., 2., 1.], &[0., 1., 2.], InterpolationKind::Quadratic)
            .unwrap_err();
        assert_eq!(err, SplineError::DegenerateParameter { index: 1 });
    }

    #[test]
    fn rejects_invalid_samples() {
        let err = Interpolant::try_new(&[0., 1.], &[0.], InterpolationKind::Linear).unwrap_err();
        assert_eq!(
            err,
            SplineError::from(InvalidInput::LengthMismatch {
                expected: 2,
                actual: 1
            })
        );

        let err = Interpolant::try_new(&[0.], &[1.], InterpolationKind::Linear).unwrap_err();
        assert_eq!(
            err,
            SplineError::from(InvalidInput::TooFewPoints {
                required: 2,
                actual: 1
            })
        );

        let err = Interpolant::try_new(&[0., 1.], &[0., f64::NAN], InterpolationKind::Linear)
            .unwrap_err();
        assert_eq!(err, SplineError::from(InvalidInput::NonFinite { index: 1 }));
    }

    #[test]
    fn degree_drops_with_few_samples() {
        let f = Interpolant::try_new(&[0., 1., 3.], &[0., 2., 1.], InterpolationKind::Cubic)
            .unwrap();
        assert_eq!(f.kind(), InterpolationKind::Cubic);
        assert_eq!(f.degree(), 2);
        assert!(f.breakpoints().is_empty());
        assert_relative_eq!(f.evaluate(1.).unwrap(), 2., epsilon = 1e-12);

        let f = Interpolant::try_new(&[0., 2.], &[1., 5.], InterpolationKind::Quadratic).unwrap();
        assert_eq!(f.degree(), 1);
        assert_relative_eq!(f.evaluate(0.5).unwrap(), 2., epsilon = 1e-12);
    }

    #[test]
    fn strict_domain() {
        let f = Interpolant::try_new(&[0., 1., 2.], &[0., 1., 0.], InterpolationKind::Quadratic)
            .unwrap();
        assert!(f.evaluate(0.).is_ok());
        assert!(f.evaluate(2.).is_ok());
        assert_eq!(
            f.evaluate(-0.1).unwrap_err(),
            SplineError::OutOfDomain {
                parameter: -0.1,
                min: 0.,
                max: 2.
            }
        );
        assert!(f.evaluate(f64::NAN).is_err());
        assert!(f.derivative(2.1, 1).is_err());
    }

    #[test]
    fn single_precision() {
        let f = Interpolant::<f32>::try_new(
            &[0., 1., 2., 3.],
            &[1., 2., 0., 1.],
            InterpolationKind::Cubic,
        )
        .unwrap();
        assert_relative_eq!(f.evaluate(2.).unwrap(), 0., epsilon = 1e-5);
    }
}

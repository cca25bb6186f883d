use std::ops::Index;

use itertools::Itertools;
use nalgebra::convert;

use crate::{
    error::{InvalidInput, SplineResult},
    misc::FloatingPoint,
};

/// Knot vector representation
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KnotVector<T>(Vec<T>);

impl<T: FloatingPoint> KnotVector<T> {
    pub fn new(knots: Vec<T>) -> Self {
        Self(knots)
    }

    /// Create the knot vector of an interpolating spline through samples at `parameters`
    /// End knots are repeated `degree + 1` times.
    /// Interior knots follow the parity of the degree:
    /// - odd degree: not-a-knot, the parameters without `(degree + 1) / 2` samples at each end
    ///   (degree 1 keeps every interior parameter)
    /// - even degree: midpoints between consecutive parameters without `degree / 2` at each end
    ///
    /// # Example
    /// ```
    /// use arc_spline::prelude::KnotVector;
    /// let knots = KnotVector::try_interpolating(&[0., 1., 2., 3., 4.], 3).unwrap();
    /// assert_eq!(knots.to_vec(), vec![0., 0., 0., 0., 2., 4., 4., 4., 4.]);
    ///
    /// let knots = KnotVector::try_interpolating(&[0., 1., 2., 3.], 2).unwrap();
    /// assert_eq!(knots.to_vec(), vec![0., 0., 0., 1.5, 3., 3., 3.]);
    /// ```
    pub fn try_interpolating(parameters: &[T], degree: usize) -> SplineResult<Self> {
        let n = parameters.len();
        if n < degree + 1 || n < 2 {
            return Err(InvalidInput::TooFewPoints {
                required: (degree + 1).max(2),
                actual: n,
            }
            .into());
        }

        let first = parameters[0];
        let last = parameters[n - 1];

        let interior: Vec<T> = if degree % 2 == 1 {
            let m = (degree + 1) / 2;
            parameters[m..(n - m)].to_vec()
        } else {
            let half: T = convert(0.5);
            let m = degree / 2;
            let midpoints = parameters
                .iter()
                .tuple_windows()
                .map(|(a, b)| (*a + *b) * half)
                .collect_vec();
            midpoints[m..(midpoints.len() - m)].to_vec()
        };

        let knots = std::iter::repeat_n(first, degree + 1)
            .chain(interior)
            .chain(std::iter::repeat_n(last, degree + 1))
            .collect();
        Ok(Self(knots))
    }

    pub fn to_vec(&self) -> Vec<T> {
        self.0.clone()
    }

    /// Get the domain of the knot vector by degree
    pub fn domain(&self, degree: usize) -> (T, T) {
        (self.0[degree], self.0[self.0.len() - 1 - degree])
    }

    /// Distinct interior knots, where two polynomial pieces meet
    pub fn breakpoints(&self, degree: usize) -> Vec<T> {
        let end = self.0.len().saturating_sub(degree + 1);
        if end <= degree + 1 {
            return vec![];
        }
        self.0[(degree + 1)..end].iter().copied().dedup().collect()
    }

    /// Find the knot span index by binary search
    /// `n` is the number of basis functions - 1
    /// The ends are compared exactly, so parameter ranges of any scale resolve to the right span.
    ///
    /// # Example
    /// ```
    /// use arc_spline::prelude::KnotVector;
    /// let knots = KnotVector::new(vec![0., 0., 0., 1., 2., 3., 3., 3.]);
    /// let idx = knots.find_knot_span_index(4, 2, 2.5);
    /// assert_eq!(idx, 4);
    /// ```
    pub fn find_knot_span_index(&self, n: usize, degree: usize, u: T) -> usize {
        if u >= self[n + 1] {
            return n;
        }

        if u <= self[degree] {
            return degree;
        }

        let mut low = degree;
        let mut high = n + 1;
        let mut mid = (low + high) / 2;
        while u < self[mid] || self[mid + 1] <= u {
            if u < self[mid] {
                high = mid;
            } else {
                low = mid;
            }
            let next = (low + high) / 2;
            if mid == next {
                break;
            }
            mid = next;
        }

        mid
    }

    /// Compute the non-vanishing basis functions
    pub fn basis_functions(&self, knot_span_index: usize, u: T, degree: usize) -> Vec<T> {
        let mut basis_functions = vec![T::zero(); degree + 1];
        let mut left = vec![T::zero(); degree + 1];
        let mut right = vec![T::zero(); degree + 1];

        basis_functions[0] = T::one();

        for j in 1..=degree {
            left[j] = u - self[knot_span_index + 1 - j];
            right[j] = self[knot_span_index + j] - u;
            let mut saved = T::zero();

            for r in 0..j {
                let temp = basis_functions[r] / (right[r + 1] + left[j - r]);
                basis_functions[r] = saved + right[r + 1] * temp;
                saved = left[j - r] * temp;
            }

            basis_functions[j] = saved;
        }

        basis_functions
    }

    /// Compute the non-vanishing basis functions and their derivatives up to order `n` (`n <= degree`)
    /// Row `k` of the result holds the `k`-th derivatives, row 0 the basis function values.
    pub fn derivative_basis_functions(
        &self,
        knot_index: usize,
        u: T,
        degree: usize,
        n: usize,
    ) -> Vec<Vec<T>> {
        let mut ndu = vec![vec![T::zero(); degree + 1]; degree + 1];
        let mut left = vec![T::zero(); degree + 1];
        let mut right = vec![T::zero(); degree + 1];

        ndu[0][0] = T::one();

        for j in 1..=degree {
            left[j] = u - self[knot_index + 1 - j];
            right[j] = self[knot_index + j] - u;

            let mut saved = T::zero();
            for r in 0..j {
                // lower triangle
                ndu[j][r] = right[r + 1] + left[j - r];
                let temp = ndu[r][j - 1] / ndu[j][r];

                // upper triangle
                ndu[r][j] = saved + right[r + 1] * temp;
                saved = left[j - r] * temp;
            }
            ndu[j][j] = saved;
        }

        let mut ders = vec![vec![T::zero(); degree + 1]; n + 1];
        let mut a = vec![vec![T::zero(); degree + 1]; 2];

        for j in 0..=degree {
            ders[0][j] = ndu[j][degree];
        }

        let idegree = degree as isize;
        let n = n as isize;

        for r in 0..=idegree {
            // alternate rows in array a
            let mut s1 = 0;
            let mut s2 = 1;
            a[0][0] = T::one();

            for k in 1..=n {
                let mut d = T::zero();
                let rk = r - k;
                let pk = idegree - k;

                if r >= k {
                    a[s2][0] = a[s1][0] / ndu[(pk + 1) as usize][rk as usize];
                    d = a[s2][0] * ndu[rk as usize][pk as usize];
                }

                let j1 = if rk >= -1 { 1 } else { -rk };
                let j2 = if r - 1 <= pk { k - 1 } else { idegree - r };

                for j in j1..=j2 {
                    a[s2][j as usize] = (a[s1][j as usize] - a[s1][j as usize - 1])
                        / ndu[(pk + 1) as usize][(rk + j) as usize];
                    d += a[s2][j as usize] * ndu[(rk + j) as usize][pk as usize];
                }

                let uk = k as usize;
                let ur = r as usize;
                if r <= pk {
                    a[s2][uk] = -a[s1][(k - 1) as usize] / ndu[(pk + 1) as usize][ur];
                    d += a[s2][uk] * ndu[ur][pk as usize];
                }

                ders[uk][ur] = d;

                std::mem::swap(&mut s1, &mut s2);
            }
        }

        let mut acc = idegree;
        for k in 1..=n {
            let factor: T = convert(acc as f64);
            for j in 0..=degree {
                ders[k as usize][j] *= factor;
            }
            acc *= idegree - k;
        }
        ders
    }
}

impl<T> Index<usize> for KnotVector<T> {
    type Output = T;
    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

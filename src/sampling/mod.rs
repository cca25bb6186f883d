pub mod path_sink;
pub mod sample_options;
pub mod spline_sample;
pub use path_sink::*;
pub use sample_options::*;
pub use spline_sample::*;

use nalgebra::convert;

use crate::{
    error::{InvalidInput, SplineResult},
    misc::FloatingPoint,
    spline::ArcLengthSpline2D,
};

/// Evenly spaced values over the closed interval `[start, end]`
/// `num == 0` gives nothing and `num == 1` gives `[start]`.
///
/// # Example
/// ```
/// use arc_spline::prelude::linspace;
/// assert_eq!(linspace(0., 1., 5), vec![0., 0.25, 0.5, 0.75, 1.]);
/// assert_eq!(linspace(0., 1., 1), vec![0.]);
/// ```
pub fn linspace<T: FloatingPoint>(start: T, end: T, num: usize) -> Vec<T> {
    match num {
        0 => vec![],
        1 => vec![start],
        _ => {
            let last = num - 1;
            let divs: T = convert(last as f64);
            (0..num)
                .map(|i| {
                    if i == last {
                        end
                    } else {
                        let i: T = convert(i as f64);
                        start + (end - start) * i / divs
                    }
                })
                .collect()
        }
    }
}

impl<T: FloatingPoint> ArcLengthSpline2D<T> {
    /// Sample the spline at a regular parameter step
    /// Produces `floor(total_length / step)` samples spread evenly over the whole domain,
    /// both ends included.
    /// Fails with `TooManySamples` when that count exceeds `options.max_samples`.
    pub fn sample(&self, options: &SampleOptions<T>) -> SplineResult<Vec<SplineSample<T>>> {
        let step = options.step;
        if !(step > T::zero() && step.is_finite()) {
            return Err(InvalidInput::InvalidStep(step.to_f64_lossy()).into());
        }

        let (start, end) = self.domain();
        let count = ((end - start) / step).floor();
        let limit: T = convert(options.max_samples as f64);
        if count > limit {
            return Err(InvalidInput::TooManySamples {
                requested: count.to_f64_lossy(),
                limit: options.max_samples,
            }
            .into());
        }
        let num = count
            .to_usize()
            .ok_or(InvalidInput::InvalidStep(step.to_f64_lossy()))?;

        #[cfg(feature = "log")]
        log::trace!("sampling {} spline with {} samples", self.kind(), num);

        linspace(start, end, num)
            .into_iter()
            .map(|s| self.evaluate(s).map(|p| SplineSample::new(s, p)))
            .collect()
    }

    /// Hand the waypoints and the sampled path to a sink under `label`
    pub fn render_into<S: PathSink<T>>(
        &self,
        label: &str,
        options: &SampleOptions<T>,
        sink: &mut S,
    ) -> Result<(), S::Error> {
        sink.waypoints(label, self.waypoints())?;
        let samples = self.sample(options)?;
        sink.path(label, &samples)
    }
}

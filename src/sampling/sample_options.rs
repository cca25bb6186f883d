use nalgebra::convert;

use crate::misc::FloatingPoint;

/// Options for sampling a spline at a regular parameter step
#[derive(Clone, Debug, PartialEq)]
pub struct SampleOptions<T: FloatingPoint> {
    /// Distance between consecutive samples along the parameter
    pub step: T,
    /// Upper bound on the number of samples a single call may produce
    pub max_samples: usize,
}

impl<T: FloatingPoint> Default for SampleOptions<T> {
    fn default() -> Self {
        Self {
            step: convert(0.1),
            max_samples: 1_000_000,
        }
    }
}

impl<T: FloatingPoint> SampleOptions<T> {
    pub fn with_step(mut self, step: T) -> Self {
        self.step = step;
        self
    }

    pub fn with_max_samples(mut self, max_samples: usize) -> Self {
        self.max_samples = max_samples;
        self
    }
}

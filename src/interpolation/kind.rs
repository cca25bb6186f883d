use std::{fmt, str::FromStr};

use crate::error::SplineError;

/// Polynomial order of the piecewise interpolant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum InterpolationKind {
    /// Degree 1, C0 continuous
    Linear,
    /// Degree 2, C0 & C1 continuous
    Quadratic,
    /// Degree 3, C0 & C1 & C2 continuous
    #[default]
    Cubic,
}

impl InterpolationKind {
    pub const ALL: [InterpolationKind; 3] = [
        InterpolationKind::Linear,
        InterpolationKind::Quadratic,
        InterpolationKind::Cubic,
    ];

    pub fn degree(&self) -> usize {
        match self {
            InterpolationKind::Linear => 1,
            InterpolationKind::Quadratic => 2,
            InterpolationKind::Cubic => 3,
        }
    }

    /// Highest derivative order that stays continuous across breakpoints
    pub fn continuity(&self) -> usize {
        self.degree() - 1
    }

    pub fn name(&self) -> &'static str {
        match self {
            InterpolationKind::Linear => "linear",
            InterpolationKind::Quadratic => "quadratic",
            InterpolationKind::Cubic => "cubic",
        }
    }
}

impl fmt::Display for InterpolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for InterpolationKind {
    type Err = SplineError;

    /// # Example
    /// ```
    /// use arc_spline::prelude::InterpolationKind;
    /// let kind: InterpolationKind = "quadratic".parse().unwrap();
    /// assert_eq!(kind.degree(), 2);
    /// assert!("spline".parse::<InterpolationKind>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "linear" => Ok(InterpolationKind::Linear),
            "quadratic" => Ok(InterpolationKind::Quadratic),
            "cubic" => Ok(InterpolationKind::Cubic),
            _ => Err(SplineError::UnknownKind(s.to_string())),
        }
    }
}

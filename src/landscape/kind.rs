//! Raw objective functions the landscape can discretize

use crate::error::OptimizationError;
use serde::{Deserialize, Serialize};
use std::f64::consts::{E, PI, SQRT_2};
use std::fmt;
use std::str::FromStr;

/// Scalar function of two variables sampled onto the landscape grid.
///
/// Every variant is minimized by the search: fitness is measured as the
/// distance of the raw value from the grid maximum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LandscapeKind {
    /// `x² + y²`
    Sphere,
    /// `1 + x²/4000 + y²/4000 − cos(x/√2) − cos(y/√2)`
    Griewank,
    /// `(x² + y − 11)² + (x + y² − 7)²`
    Himmelblau,
    /// Standard 2D Ackley with a = 20, b = 0.2, c = 2π
    Ackley,
    /// `20 + x² − 10cos(2πx) − 10cos(2πy)`
    ///
    /// Unlike the textbook Rastrigin there is no `y²` term.
    Rastrigin,
}

impl LandscapeKind {
    pub const ALL: [LandscapeKind; 5] = [
        LandscapeKind::Sphere,
        LandscapeKind::Griewank,
        LandscapeKind::Himmelblau,
        LandscapeKind::Ackley,
        LandscapeKind::Rastrigin,
    ];

    /// Raw function value at `(x, y)`.
    pub fn raw_value(&self, x: f64, y: f64) -> f64 {
        match self {
            LandscapeKind::Sphere => x * x + y * y,
            LandscapeKind::Griewank => {
                1.0 + x * x / 4000.0 + y * y / 4000.0 - (x / SQRT_2).cos() - (y / SQRT_2).cos()
            }
            LandscapeKind::Himmelblau => {
                (x * x + y - 11.0).powi(2) + (x + y * y - 7.0).powi(2)
            }
            LandscapeKind::Ackley => {
                let radial = -20.0 * (-0.2 * (0.5 * (x * x + y * y)).sqrt()).exp();
                let periodic = -(0.5 * ((2.0 * PI * x).cos() + (2.0 * PI * y).cos())).exp();
                radial + periodic + E + 20.0
            }
            LandscapeKind::Rastrigin => {
                20.0 + x * x - 10.0 * (2.0 * PI * x).cos() - 10.0 * (2.0 * PI * y).cos()
            }
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            LandscapeKind::Sphere => "sphere",
            LandscapeKind::Griewank => "griewank",
            LandscapeKind::Himmelblau => "himmelblau",
            LandscapeKind::Ackley => "ackley",
            LandscapeKind::Rastrigin => "rastrigin",
        }
    }
}

impl fmt::Display for LandscapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for LandscapeKind {
    type Err = OptimizationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        LandscapeKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.name() == lower)
            .ok_or_else(|| OptimizationError::config(format!("unknown landscape: {}", s)))
    }
}

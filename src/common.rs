use crate::error::{OptimizationError, OptimizationResult};
use serde::{Deserialize, Serialize};

/// A position in the 2D search domain.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_squared(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Point::new(x, y)
    }
}

/// Rectangular search domain `(x_min, x_max, y_min, y_max)`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "[f64; 4]", into = "[f64; 4]")]
pub struct Bounds {
    x_min: f64,
    x_max: f64,
    y_min: f64,
    y_max: f64,
}

impl Bounds {
    /// Validates that both axes are finite and strictly increasing.
    pub fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> OptimizationResult<Self> {
        let values = [x_min, x_max, y_min, y_max];
        if values.iter().any(|v| !v.is_finite()) {
            return Err(OptimizationError::config(format!(
                "bounds must be finite, got {:?}",
                values
            )));
        }
        if x_min >= x_max || y_min >= y_max {
            return Err(OptimizationError::config(format!(
                "bounds must satisfy x_min < x_max and y_min < y_max, got {:?}",
                values
            )));
        }
        Ok(Self { x_min, x_max, y_min, y_max })
    }

    pub fn x_min(&self) -> f64 {
        self.x_min
    }

    pub fn x_max(&self) -> f64 {
        self.x_max
    }

    pub fn y_min(&self) -> f64 {
        self.y_min
    }

    pub fn y_max(&self) -> f64 {
        self.y_max
    }

    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }

    /// Closed-interval containment on both axes.
    pub fn contains(&self, point: &Point) -> bool {
        point.x >= self.x_min
            && point.x <= self.x_max
            && point.y >= self.y_min
            && point.y <= self.y_max
    }

    pub fn as_array(&self) -> [f64; 4] {
        [self.x_min, self.x_max, self.y_min, self.y_max]
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self { x_min: -5.0, x_max: 5.0, y_min: -3.0, y_max: 3.0 }
    }
}

impl TryFrom<[f64; 4]> for Bounds {
    type Error = OptimizationError;

    fn try_from(v: [f64; 4]) -> Result<Self, Self::Error> {
        Bounds::new(v[0], v[1], v[2], v[3])
    }
}

impl From<Bounds> for [f64; 4] {
    fn from(b: Bounds) -> Self {
        b.as_array()
    }
}

/// The contract a search needs from a fitness surface.
pub trait Landscape: Send + Sync {
    /// Fitness to maximize at `point`. No bounds check is performed.
    fn evaluate_fitness(&self, point: &Point) -> f64;

    /// Domain the search must stay inside.
    fn bounds(&self) -> Bounds;
}

/// Configuration for the cuckoo search.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Number of nests.
    pub num_individuals: usize,
    /// Lévy step scale (alpha).
    pub step_scale: f64,
    /// Scale of the Lévy step-length distribution (c), conventionally in [1, 3].
    pub tail_parameter: f64,
    /// Redraw budget for one Lévy flight before giving up.
    pub max_flight_attempts: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            num_individuals: 25,
            step_scale: 1.0,
            tail_parameter: 1.5,
            max_flight_attempts: 100_000,
        }
    }
}

impl SearchConfig {
    pub fn with_individuals(num_individuals: usize) -> Self {
        Self { num_individuals, ..Self::default() }
    }

    pub fn validate(&self) -> OptimizationResult<()> {
        if self.num_individuals < 2 {
            return Err(OptimizationError::config(format!(
                "num_individuals must be at least 2, got {}",
                self.num_individuals
            )));
        }
        if !(self.step_scale.is_finite() && self.step_scale > 0.0) {
            return Err(OptimizationError::config(format!(
                "step_scale must be finite and positive, got {}",
                self.step_scale
            )));
        }
        if !(self.tail_parameter.is_finite() && self.tail_parameter > 0.0) {
            return Err(OptimizationError::config(format!(
                "tail_parameter must be finite and positive, got {}",
                self.tail_parameter
            )));
        }
        if self.max_flight_attempts == 0 {
            return Err(OptimizationError::config("max_flight_attempts must be positive"));
        }
        Ok(())
    }
}

/// The result of a search run.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SearchReport {
    pub seed: Option<u64>,
    pub iterations: usize,
    pub best_fitness: f64,
    pub replacements: usize,
    pub population: Vec<Point>,
    pub history: Vec<f64>,
}

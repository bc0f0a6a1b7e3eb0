//! Gridded fitness landscapes
//!
//! A [`FitnessLandscape`] samples one of the [`LandscapeKind`] functions on a
//! `resolution × resolution` grid spanning the domain bounds. Queries snap a
//! continuous point to its nearest grid point and report fitness as
//! `|raw − max_value|`, so the search maximizes fitness by moving towards the
//! raw function's minimum.

pub mod index;
pub mod kind;

pub use index::SpatialIndex;
pub use kind::LandscapeKind;

use crate::common::{Bounds, Landscape, Point};
use crate::error::{OptimizationError, OptimizationResult};
use ndarray::{Array1, Array2};
use tracing::debug;

/// Immutable grid discretization of a raw objective
#[derive(Clone, Debug)]
pub struct FitnessLandscape {
    kind: LandscapeKind,
    bounds: Bounds,
    resolution: usize,
    x_axis: Array1<f64>,
    y_axis: Array1<f64>,
    /// Raw values; row `i` follows the y axis, column `j` the x axis
    function_values: Array2<f64>,
    max_value: f64,
    min_value: f64,
    spatial_index: SpatialIndex,
}

impl FitnessLandscape {
    /// Sample `kind` over `bounds` and build the nearest-point index.
    pub fn new(kind: LandscapeKind, bounds: Bounds, resolution: usize) -> OptimizationResult<Self> {
        if resolution < 2 {
            return Err(OptimizationError::config(format!(
                "resolution must be at least 2, got {}",
                resolution
            )));
        }
        let x_axis = axis(bounds.x_min(), bounds.x_max(), resolution);
        let y_axis = axis(bounds.y_min(), bounds.y_max(), resolution);

        let function_values =
            Array2::from_shape_fn((resolution, resolution), |(i, j)| kind.raw_value(x_axis[j], y_axis[i]));

        let max_value = function_values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let min_value = function_values.iter().copied().fold(f64::INFINITY, f64::min);

        let points = y_axis
            .iter()
            .flat_map(|&y| x_axis.iter().map(move |&x| Point::new(x, y)))
            .collect();
        let spatial_index = SpatialIndex::build(points);

        debug!(
            landscape = %kind,
            resolution,
            max_value,
            min_value,
            "Built fitness landscape"
        );

        Ok(Self {
            kind,
            bounds,
            resolution,
            x_axis,
            y_axis,
            function_values,
            max_value,
            min_value,
            spatial_index,
        })
    }

    /// Linear index (`row * resolution + col`) of the grid point nearest to `point`.
    pub fn nearest_index(&self, point: &Point) -> usize {
        // the index always holds resolution² >= 4 points
        self.spatial_index.nearest(point).unwrap_or(0)
    }

    /// Fitness at `point`: `|raw(nearest grid point) − max_value|`.
    ///
    /// Points outside the bounds are not rejected; they resolve to the nearest
    /// edge grid point.
    pub fn evaluate_fitness(&self, point: &Point) -> f64 {
        let linear = self.nearest_index(point);
        let raw = self.function_values[[linear / self.resolution, linear % self.resolution]];
        (raw - self.max_value).abs()
    }

    pub fn grid_point(&self, linear: usize) -> Option<Point> {
        self.spatial_index.point(linear).copied()
    }

    pub fn kind(&self) -> LandscapeKind {
        self.kind
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn resolution(&self) -> usize {
        self.resolution
    }

    pub fn x_axis(&self) -> &Array1<f64> {
        &self.x_axis
    }

    pub fn y_axis(&self) -> &Array1<f64> {
        &self.y_axis
    }

    pub fn function_values(&self) -> &Array2<f64> {
        &self.function_values
    }

    pub fn max_value(&self) -> f64 {
        self.max_value
    }

    pub fn min_value(&self) -> f64 {
        self.min_value
    }

    /// Highest attainable fitness, reached at the raw minimum.
    pub fn max_fitness(&self) -> f64 {
        self.max_value - self.min_value
    }
}

/// Evenly spaced samples with both endpoints hit exactly.
fn axis(start: f64, end: f64, n: usize) -> Array1<f64> {
    let mut values = Array1::linspace(start, end, n);
    values[n - 1] = end;
    values
}

impl Landscape for FitnessLandscape {
    fn evaluate_fitness(&self, point: &Point) -> f64 {
        FitnessLandscape::evaluate_fitness(self, point)
    }

    fn bounds(&self) -> Bounds {
        self.bounds
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sphere() -> FitnessLandscape {
        FitnessLandscape::new(LandscapeKind::Sphere, Bounds::default(), 100).unwrap()
    }

    #[test]
    fn test_rejects_low_resolution() {
        assert!(matches!(
            FitnessLandscape::new(LandscapeKind::Sphere, Bounds::default(), 1),
            Err(OptimizationError::Configuration(_))
        ));
        assert!(FitnessLandscape::new(LandscapeKind::Sphere, Bounds::default(), 2).is_ok());
    }

    #[test]
    fn test_grid_spans_bounds_inclusive() {
        let l = sphere();
        assert_eq!(l.x_axis()[0], -5.0);
        assert_eq!(l.x_axis()[99], 5.0);
        assert_eq!(l.y_axis()[0], -3.0);
        assert_eq!(l.y_axis()[99], 3.0);
        assert_eq!(l.function_values().dim(), (100, 100));
    }

    #[test]
    fn test_sphere_scenario() {
        let l = sphere();
        assert!((l.max_value() - 34.0).abs() < 1e-9);
        assert!((l.evaluate_fitness(&Point::new(0.0, 0.0)) - 34.0).abs() < 0.01);
        assert!(l.evaluate_fitness(&Point::new(5.0, 3.0)).abs() < 1e-9);
        assert!(l.evaluate_fitness(&Point::new(-5.0, -3.0)).abs() < 1e-9);
    }

    #[test]
    fn test_grid_points_round_trip() {
        let l = FitnessLandscape::new(LandscapeKind::Himmelblau, Bounds::default(), 37).unwrap();
        for i in (0..37).step_by(5) {
            for j in (0..37).step_by(3) {
                let p = Point::new(l.x_axis()[j], l.y_axis()[i]);
                assert_eq!(l.nearest_index(&p), i * 37 + j);
                let expected = (l.function_values()[[i, j]] - l.max_value()).abs();
                assert_eq!(l.evaluate_fitness(&p), expected);
            }
        }
    }

    #[test]
    fn test_out_of_domain_snaps_to_edge() {
        let l = sphere();
        let far_corner = l.evaluate_fitness(&Point::new(50.0, 30.0));
        assert_eq!(far_corner, l.evaluate_fitness(&Point::new(5.0, 3.0)));
        let idx = l.nearest_index(&Point::new(-100.0, 0.0));
        assert_eq!(idx % 100, 0);
    }

    #[test]
    fn test_fitness_within_range_for_all_kinds() {
        for kind in LandscapeKind::ALL {
            let l = FitnessLandscape::new(kind, Bounds::default(), 50).unwrap();
            for &x in &[-5.0, -2.3, 0.0, 1.7, 4.9] {
                for &y in &[-3.0, -0.4, 0.0, 2.2] {
                    let f = l.evaluate_fitness(&Point::new(x, y));
                    assert!(f >= 0.0, "{} fitness {} < 0", kind, f);
                    assert!(f <= l.max_fitness() + 1e-12, "{} fitness {} above max", kind, f);
                }
            }
        }
    }
}

//! Experiment configuration
//!
//! Defaults reproduce the reference experiment: a sphere landscape over
//! `(-5, 5, -3, 3)` sampled at 100 points per axis, 10 nests with step scale
//! 0.5, 200 iterations, seed 1234.

use crate::common::{Bounds, SearchConfig};
use crate::error::{OptimizationError, OptimizationResult};
use crate::landscape::{FitnessLandscape, LandscapeKind};
use serde::{Deserialize, Deserializer, Serialize};
use std::path::Path;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExperimentConfig {
    pub landscape: LandscapeKind,
    pub bounds: Bounds,
    pub resolution: usize,
    pub iterations: usize,
    /// Seed of the first run; run `k` uses `seed + k`
    pub seed: u64,
    pub runs: usize,
    /// Fields left out of a `search` section keep the reference values
    #[serde(deserialize_with = "search_over_reference")]
    pub search: SearchConfig,
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self {
            landscape: LandscapeKind::Sphere,
            bounds: Bounds::default(),
            resolution: 100,
            iterations: 200,
            seed: 1234,
            runs: 1,
            search: reference_search(),
        }
    }
}

fn reference_search() -> SearchConfig {
    SearchConfig {
        num_individuals: 10,
        step_scale: 0.5,
        ..SearchConfig::default()
    }
}

fn search_over_reference<'de, D>(deserializer: D) -> Result<SearchConfig, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    struct PartialSearch {
        num_individuals: Option<usize>,
        step_scale: Option<f64>,
        tail_parameter: Option<f64>,
        max_flight_attempts: Option<usize>,
    }

    let partial = PartialSearch::deserialize(deserializer)?;
    let reference = reference_search();
    Ok(SearchConfig {
        num_individuals: partial.num_individuals.unwrap_or(reference.num_individuals),
        step_scale: partial.step_scale.unwrap_or(reference.step_scale),
        tail_parameter: partial.tail_parameter.unwrap_or(reference.tail_parameter),
        max_flight_attempts: partial.max_flight_attempts.unwrap_or(reference.max_flight_attempts),
    })
}

impl ExperimentConfig {
    /// Load from a `.yaml`/`.yml` or `.json` file.
    pub fn from_path(path: impl AsRef<Path>) -> OptimizationResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());

        let config: ExperimentConfig = match extension.as_deref() {
            Some("yaml") | Some("yml") => serde_yaml::from_str(&text)?,
            Some("json") => serde_json::from_str(&text)?,
            _ => {
                return Err(OptimizationError::config(format!(
                    "unsupported config format: {}",
                    path.display()
                )))
            }
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> OptimizationResult<()> {
        if self.resolution < 2 {
            return Err(OptimizationError::config(format!(
                "resolution must be at least 2, got {}",
                self.resolution
            )));
        }
        if self.runs == 0 {
            return Err(OptimizationError::config("runs must be at least 1"));
        }
        self.search.validate()
    }

    pub fn build_landscape(&self) -> OptimizationResult<FitnessLandscape> {
        FitnessLandscape::new(self.landscape, self.bounds, self.resolution)
    }

    /// Seeds for each run, consecutive from `seed`.
    pub fn seeds(&self) -> Vec<u64> {
        (0..self.runs as u64).map(|k| self.seed.wrapping_add(k)).collect()
    }
}

//! Iteration drivers
//!
//! Fixed-length runs of a [`CuckooSearch`], and batches of independently
//! seeded runs executed in parallel against one shared landscape.

use crate::algorithms::CuckooSearch;
use crate::common::{Landscape, SearchConfig, SearchReport};
use crate::error::OptimizationResult;
use rand::prelude::*;
use rayon::prelude::*;
use tracing::info;

/// Step `search` `iterations` times and summarize the run.
pub fn run<L, R>(
    search: &mut CuckooSearch<'_, L>,
    iterations: usize,
    rng: &mut R,
) -> OptimizationResult<SearchReport>
where
    L: Landscape + ?Sized,
    R: Rng + ?Sized,
{
    let mut history = Vec::with_capacity(iterations);
    let mut replacements = 0;

    for _ in 0..iterations {
        let outcome = search.step(rng)?;
        if outcome.replaced {
            replacements += 1;
        }
        history.push(search.best_fitness());
    }

    info!(
        iterations,
        replacements,
        best_fitness = search.best_fitness(),
        "Cuckoo search finished"
    );

    Ok(SearchReport {
        seed: None,
        iterations: search.iterations(),
        best_fitness: search.best_fitness(),
        replacements,
        population: search.population().to_vec(),
        history,
    })
}

/// One independent search per seed, in parallel. Reports come back in seed order.
pub fn run_batch<L>(
    landscape: &L,
    config: &SearchConfig,
    iterations: usize,
    seeds: &[u64],
) -> OptimizationResult<Vec<SearchReport>>
where
    L: Landscape + ?Sized,
{
    config.validate()?;

    seeds
        .par_iter()
        .map(|&seed| {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut search = CuckooSearch::new(landscape, config.clone(), &mut rng)?;
            let mut report = run(&mut search, iterations, &mut rng)?;
            report.seed = Some(seed);
            Ok(report)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::Bounds;
    use crate::landscape::{FitnessLandscape, LandscapeKind};

    #[test]
    fn test_run_records_history() {
        let landscape = FitnessLandscape::new(LandscapeKind::Ackley, Bounds::default(), 60).unwrap();
        let mut rng = StdRng::seed_from_u64(11);
        let mut search = CuckooSearch::new(&landscape, SearchConfig::with_individuals(8), &mut rng).unwrap();

        let report = run(&mut search, 120, &mut rng).unwrap();
        assert_eq!(report.iterations, 120);
        assert_eq!(report.history.len(), 120);
        assert_eq!(report.population.len(), 8);
        assert_eq!(report.history.last().copied(), Some(report.best_fitness));
        assert!(report.history.windows(2).all(|w| w[1] >= w[0]));
        assert!(report.replacements <= 120);
    }

    #[test]
    fn test_batch_is_deterministic_per_seed() {
        let landscape = FitnessLandscape::new(LandscapeKind::Griewank, Bounds::default(), 40).unwrap();
        let config = SearchConfig::with_individuals(6);
        let seeds = [1, 2, 3, 1];

        let reports = run_batch(&landscape, &config, 50, &seeds).unwrap();
        assert_eq!(reports.len(), 4);
        for (report, seed) in reports.iter().zip(seeds) {
            assert_eq!(report.seed, Some(seed));
        }
        assert_eq!(reports[0].population, reports[3].population);
        assert_eq!(reports[0].history, reports[3].history);
    }

    #[test]
    fn test_batch_rejects_bad_config() {
        let landscape = FitnessLandscape::new(LandscapeKind::Sphere, Bounds::default(), 10).unwrap();
        let result = run_batch(&landscape, &SearchConfig::with_individuals(1), 10, &[1]);
        assert!(result.is_err());
    }
}

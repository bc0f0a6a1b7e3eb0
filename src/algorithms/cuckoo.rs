use crate::algorithms::levy::Levy;
use crate::common::{Landscape, Point, SearchConfig};
use crate::error::{OptimizationError, OptimizationResult};
use rand::prelude::*;
use rand::seq::index;
use rand_distr::Distribution;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use tracing::{debug, warn};

/// What happened during one [`CuckooSearch::step`].
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct StepOutcome {
    /// Nest the Lévy flight started from
    pub source: usize,
    /// Nest the candidate competed against
    pub target: usize,
    pub candidate: Point,
    pub candidate_fitness: f64,
    pub target_fitness: f64,
    /// Whether the candidate overwrote the target nest
    pub replaced: bool,
}

/// Cuckoo search via Lévy flights over a 2D landscape.
///
/// Each step moves a copy of one random nest by a Lévy flight and lets it
/// replace a second random nest if it scores strictly higher.
pub struct CuckooSearch<'a, L: Landscape + ?Sized> {
    config: SearchConfig,
    landscape: &'a L,
    levy: Levy,
    population: Vec<Point>,
    best_fitness: f64,
    iterations: usize,
}

impl<'a, L: Landscape + ?Sized> CuckooSearch<'a, L> {
    /// Place `config.num_individuals` nests uniformly at random inside the landscape bounds.
    pub fn new<R: Rng + ?Sized>(
        landscape: &'a L,
        config: SearchConfig,
        rng: &mut R,
    ) -> OptimizationResult<Self> {
        config.validate()?;
        let levy = Levy::new(config.tail_parameter)?;

        let bounds = landscape.bounds();
        let population = (0..config.num_individuals)
            .map(|_| {
                let x = bounds.width() * rng.gen::<f64>() + bounds.x_min();
                let y = bounds.height() * rng.gen::<f64>() + bounds.y_min();
                Point::new(x, y)
            })
            .collect();

        Ok(Self {
            config,
            landscape,
            levy,
            population,
            best_fitness: f64::NEG_INFINITY,
            iterations: 0,
        })
    }

    /// Run one iteration.
    ///
    /// `best_fitness` only ever absorbs the candidate's fitness, never the
    /// rest of the population.
    pub fn step<R: Rng + ?Sized>(&mut self, rng: &mut R) -> OptimizationResult<StepOutcome> {
        let picked = index::sample(rng, self.population.len(), 2);
        let (source, target) = (picked.index(0), picked.index(1));

        let candidate = self.levy_flight(source, rng)?;
        let candidate_fitness = self.landscape.evaluate_fitness(&candidate);
        let target_fitness = self.landscape.evaluate_fitness(&self.population[target]);

        let replaced = candidate_fitness > target_fitness;
        if replaced {
            self.population[target] = candidate;
        }
        self.best_fitness = self.best_fitness.max(candidate_fitness);
        self.iterations += 1;

        debug!(
            iteration = self.iterations,
            source,
            target,
            candidate_fitness,
            target_fitness,
            replaced,
            "Cuckoo step"
        );

        Ok(StepOutcome {
            source,
            target,
            candidate,
            candidate_fitness,
            target_fitness,
            replaced,
        })
    }

    /// Random-direction Lévy jump from nest `source`, redrawn until it lands in bounds.
    fn levy_flight<R: Rng + ?Sized>(&self, source: usize, rng: &mut R) -> OptimizationResult<Point> {
        let bounds = self.landscape.bounds();
        let origin = self.population[source];

        for _ in 0..self.config.max_flight_attempts {
            let angle = 2.0 * PI * rng.gen::<f64>();
            let length = self.config.step_scale * self.levy.sample(rng);
            let candidate = Point::new(
                origin.x + length * angle.cos(),
                origin.y + length * angle.sin(),
            );
            if bounds.contains(&candidate) {
                return Ok(candidate);
            }
        }

        warn!(
            attempts = self.config.max_flight_attempts,
            step_scale = self.config.step_scale,
            tail_parameter = self.config.tail_parameter,
            "Lévy flight never landed inside the bounds"
        );
        Err(OptimizationError::Sampling { attempts: self.config.max_flight_attempts })
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn population(&self) -> &[Point] {
        &self.population
    }

    pub fn best_fitness(&self) -> f64 {
        self.best_fitness
    }

    pub fn iterations(&self) -> usize {
        self.iterations
    }

    pub fn landscape(&self) -> &'a L {
        self.landscape
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::Bounds;
    use crate::landscape::{FitnessLandscape, LandscapeKind};

    fn sphere() -> FitnessLandscape {
        FitnessLandscape::new(LandscapeKind::Sphere, Bounds::default(), 100).unwrap()
    }

    #[test]
    fn test_rejects_single_individual() {
        let landscape = sphere();
        let mut rng = StdRng::seed_from_u64(1);
        let result = CuckooSearch::new(&landscape, SearchConfig::with_individuals(1), &mut rng);
        assert!(matches!(result, Err(OptimizationError::Configuration(_))));
    }

    #[test]
    fn test_initial_population_in_bounds() {
        let landscape = sphere();
        let mut rng = StdRng::seed_from_u64(2);
        let search = CuckooSearch::new(&landscape, SearchConfig::with_individuals(50), &mut rng).unwrap();
        assert_eq!(search.population().len(), 50);
        assert!(search.population().iter().all(|p| landscape.bounds().contains(p)));
        assert_eq!(search.best_fitness(), f64::NEG_INFINITY);
        assert_eq!(search.iterations(), 0);
    }

    #[test]
    fn test_two_nest_single_step() {
        let landscape = sphere();
        let mut rng = StdRng::seed_from_u64(3);
        let mut search = CuckooSearch::new(&landscape, SearchConfig::with_individuals(2), &mut rng).unwrap();
        let before = search.population().to_vec();

        let outcome = search.step(&mut rng).unwrap();
        assert_ne!(outcome.source, outcome.target);
        assert_eq!(search.best_fitness(), outcome.candidate_fitness);
        assert!(landscape.bounds().contains(&outcome.candidate));

        let after = search.population();
        assert_eq!(after[outcome.source], before[outcome.source]);
        if outcome.replaced {
            assert!(outcome.candidate_fitness > outcome.target_fitness);
            assert_eq!(after[outcome.target], outcome.candidate);
        } else {
            assert_eq!(after[outcome.target], before[outcome.target]);
        }
    }

    #[test]
    fn test_best_fitness_tracks_candidates_only() {
        let landscape = sphere();
        let mut rng = StdRng::seed_from_u64(4);
        let config = SearchConfig { step_scale: 0.5, ..SearchConfig::with_individuals(10) };
        let mut search = CuckooSearch::new(&landscape, config, &mut rng).unwrap();

        let mut expected = f64::NEG_INFINITY;
        for _ in 0..300 {
            let previous = search.best_fitness();
            let outcome = search.step(&mut rng).unwrap();
            expected = expected.max(outcome.candidate_fitness);
            assert_eq!(search.best_fitness(), expected);
            assert!(search.best_fitness() >= previous);
            assert!(search.population().iter().all(|p| landscape.bounds().contains(p)));
        }
        assert_eq!(search.iterations(), 300);
    }

    /// Every point scores the same.
    struct Plateau;

    impl Landscape for Plateau {
        fn evaluate_fitness(&self, _point: &Point) -> f64 {
            1.0
        }

        fn bounds(&self) -> Bounds {
            Bounds::default()
        }
    }

    #[test]
    fn test_equal_fitness_never_replaces() {
        let mut rng = StdRng::seed_from_u64(6);
        let mut search = CuckooSearch::new(&Plateau, SearchConfig::with_individuals(3), &mut rng).unwrap();
        let before = search.population().to_vec();

        for _ in 0..200 {
            let outcome = search.step(&mut rng).unwrap();
            assert_eq!(outcome.candidate_fitness, outcome.target_fitness);
            assert!(!outcome.replaced);
        }
        assert_eq!(search.population(), before.as_slice());
        assert_eq!(search.best_fitness(), 1.0);
    }

    #[test]
    fn test_sampling_cap_surfaces_error() {
        // steps of at least 1e6 can never stay inside a 10 × 6 box
        let landscape = sphere();
        let mut rng = StdRng::seed_from_u64(5);
        let config = SearchConfig {
            step_scale: 1e6,
            tail_parameter: 3.0,
            max_flight_attempts: 50,
            ..SearchConfig::with_individuals(4)
        };
        let mut search = CuckooSearch::new(&landscape, config, &mut rng).unwrap();
        let before = search.population().to_vec();

        let err = search.step(&mut rng).unwrap_err();
        assert!(matches!(err, OptimizationError::Sampling { attempts: 50 }));
        assert_eq!(search.population(), before.as_slice());
        assert_eq!(search.best_fitness(), f64::NEG_INFINITY);
        assert_eq!(search.iterations(), 0);
    }
}

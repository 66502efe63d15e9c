use crate::engines::evaluation::ContentionModel;
use crate::engines::generation::{
    best_tracker::BestTracker,
    genome::Genome,
    operators::{crossover, roulette_selection, tournament_selection},
    progress::ProgressCallback,
};
use crate::error::{DiningError, Result};
use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

/// How parents are drawn from an evaluated population.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum SelectionMethod {
    Roulette,
    Tournament { size: usize },
}

/// How parents are recombined into offspring.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum CrossoverScheme {
    /// Always splice; both complementary children join the next generation.
    Paired,
    /// Splice with probability `rate` and keep only the first child,
    /// otherwise copy the first parent.
    Single { rate: f64 },
}

#[derive(Debug, Clone, PartialEq)]
pub struct EvolutionConfig {
    pub population_size: usize,
    pub generations: usize,
    pub selection: SelectionMethod,
    pub crossover: CrossoverScheme,
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvolutionResult<G> {
    pub best_genome: Genome<G>,
    pub best_fitness: f64,
    /// Generation in which the best genome was first seen.
    pub found_in_generation: usize,
    /// Best-so-far fitness at the end of each generation.
    pub history: Vec<f64>,
}

/// Generational genetic search over any [`ContentionModel`].
pub struct EvolutionEngine<M: ContentionModel> {
    config: EvolutionConfig,
    model: M,
    best: BestTracker<M::Gene>,
    rng: StdRng,
}

impl<M: ContentionModel> EvolutionEngine<M> {
    pub fn new(config: EvolutionConfig, model: M) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        if let SelectionMethod::Tournament { size } = config.selection {
            if size > config.population_size {
                log::warn!(
                    "Tournament size {} exceeds population size {}; tournaments will use the whole population",
                    size,
                    config.population_size
                );
            }
        }

        Self {
            config,
            model,
            best: BestTracker::new(),
            rng,
        }
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    /// Run the evolution process
    pub fn run<C: ProgressCallback<M::Gene>>(
        &mut self,
        mut callback: C,
    ) -> Result<EvolutionResult<M::Gene>> {
        if self.config.population_size == 0 {
            return Err(DiningError::EmptyPopulation);
        }
        if self.config.generations == 0 {
            return Err(DiningError::Configuration(
                "at least one generation is required".to_string(),
            ));
        }

        self.best = BestTracker::new();
        let mut history = Vec::with_capacity(self.config.generations);
        let mut population = self.initialize_population();

        for generation in 0..self.config.generations {
            callback.on_generation_start(generation);

            let evaluated = self.evaluate_population(population, &mut callback)?;

            for (genome, fitness) in &evaluated {
                self.best.try_update(genome, *fitness, generation);
            }

            let champion = self.best.champion().ok_or(DiningError::EmptyPopulation)?;
            history.push(champion.fitness);
            log::debug!(
                "Generation {}: best fitness so far {:.4}",
                generation + 1,
                champion.fitness
            );
            callback.on_generation_complete(generation, champion.fitness, &champion.genome);

            // Check termination
            if generation == self.config.generations - 1 {
                break;
            }

            population = self.create_next_generation(&evaluated)?;
        }

        let champion = self
            .best
            .champion()
            .cloned()
            .ok_or(DiningError::EmptyPopulation)?;

        Ok(EvolutionResult {
            best_genome: champion.genome,
            best_fitness: champion.fitness,
            found_in_generation: champion.generation,
            history,
        })
    }

    fn initialize_population(&mut self) -> Vec<Genome<M::Gene>> {
        (0..self.config.population_size)
            .map(|_| self.model.random_genome(&mut self.rng))
            .collect()
    }

    fn evaluate_population<C: ProgressCallback<M::Gene>>(
        &mut self,
        population: Vec<Genome<M::Gene>>,
        callback: &mut C,
    ) -> Result<Vec<(Genome<M::Gene>, f64)>> {
        let total = population.len();
        let mut results = Vec::with_capacity(total);

        for (i, genome) in population.into_iter().enumerate() {
            let fitness = self.model.fitness(&genome, &mut self.rng)?;
            callback.on_candidate_evaluated(i + 1, total);
            results.push((genome, fitness));
        }

        Ok(results)
    }

    fn select<'a>(
        &mut self,
        evaluated: &'a [(Genome<M::Gene>, f64)],
    ) -> Result<&'a Genome<M::Gene>> {
        match self.config.selection {
            SelectionMethod::Roulette => roulette_selection(evaluated, &mut self.rng),
            SelectionMethod::Tournament { size } => {
                tournament_selection(evaluated, size, &mut self.rng)
            }
        }
    }

    fn create_next_generation(
        &mut self,
        evaluated: &[(Genome<M::Gene>, f64)],
    ) -> Result<Vec<Genome<M::Gene>>> {
        let target = self.config.population_size;
        let mut next_generation = Vec::with_capacity(target + 1);

        while next_generation.len() < target {
            let parent1 = self.select(evaluated)?;
            let parent2 = self.select(evaluated)?;

            match self.config.crossover {
                CrossoverScheme::Paired => {
                    let (mut child1, mut child2) = crossover(parent1, parent2, &mut self.rng)?;
                    self.model.mutate(&mut child1, &mut self.rng);
                    self.model.mutate(&mut child2, &mut self.rng);
                    next_generation.push(child1);
                    next_generation.push(child2);
                }
                CrossoverScheme::Single { rate } => {
                    let mut child = if self.rng.gen::<f64>() < rate {
                        crossover(parent1, parent2, &mut self.rng)?.0
                    } else {
                        parent1.clone()
                    };
                    self.model.mutate(&mut child, &mut self.rng);
                    next_generation.push(child);
                }
            }
        }

        next_generation.truncate(target);
        Ok(next_generation)
    }
}

use super::model::ContentionModel;
use crate::{
    config::{ConfigSection, ScheduleConfig, TableConfig},
    engines::generation::{operators::gaussian_mutation, Genome},
    engines::simulation::ArrivalScheduleSimulator,
    error::{DiningError, Result},
};
use rand::Rng;
use rand_distr::Normal;

/// Arrival-schedule model: fitness is the number of diners in one
/// deterministic pass, so no averaging is needed.
pub struct ScheduleModel {
    simulator: ArrivalScheduleSimulator,
    bounds: (f64, f64),
    mutation_rate: f64,
    noise: Normal<f64>,
}

impl ScheduleModel {
    pub fn new(table: &TableConfig, config: &ScheduleConfig) -> Result<Self> {
        table.validate()?;
        config.validate()?;

        let noise = Normal::new(0.0, config.mutation_std_dev).map_err(|e| {
            DiningError::Configuration(format!("invalid mutation noise: {}", e))
        })?;

        Ok(Self {
            simulator: ArrivalScheduleSimulator::new(table.num_philosophers, table.eat_duration),
            bounds: config.delay_bounds(),
            mutation_rate: config.mutation_rate,
            noise,
        })
    }

    pub fn simulator(&self) -> &ArrivalScheduleSimulator {
        &self.simulator
    }
}

impl ContentionModel for ScheduleModel {
    type Gene = f64;

    fn genome_length(&self) -> usize {
        self.simulator.seats()
    }

    fn random_genome<R: Rng + ?Sized>(&self, rng: &mut R) -> Genome<f64> {
        let (lo, hi) = self.bounds;
        (0..self.genome_length())
            .map(|_| rng.gen_range(lo..=hi))
            .collect()
    }

    fn mutate<R: Rng + ?Sized>(&self, genome: &mut [f64], rng: &mut R) {
        gaussian_mutation(genome, self.mutation_rate, &self.noise, self.bounds, rng);
    }

    fn fitness<R: Rng + ?Sized>(&self, genome: &[f64], _rng: &mut R) -> Result<f64> {
        let (lo, hi) = self.bounds;
        if let Some(delay) = genome.iter().find(|d| !(lo..=hi).contains(*d)) {
            return Err(DiningError::InvalidGene(format!(
                "delay {} outside [{}, {}]",
                delay, lo, hi
            )));
        }
        Ok(self.simulator.run(genome)?.successes() as f64)
    }
}

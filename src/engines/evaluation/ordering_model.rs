use super::model::ContentionModel;
use crate::{
    config::{OrderingConfig, TableConfig},
    engines::generation::{operators::flip_mutation, Genome},
    engines::simulation::ForkOrderingSimulator,
    error::Result,
    types::ForkOrder,
};
use rand::Rng;

/// Fork-ordering model: fitness is the mean number of diners over
/// `trials` random wake-up orders.
pub struct OrderingModel {
    simulator: ForkOrderingSimulator,
    trials: usize,
    mutation_rate: f64,
}

impl OrderingModel {
    pub fn new(table: &TableConfig, config: &OrderingConfig) -> Self {
        Self {
            simulator: ForkOrderingSimulator::new(table.num_philosophers),
            trials: config.trials,
            mutation_rate: config.mutation_rate,
        }
    }
}

impl ContentionModel for OrderingModel {
    type Gene = ForkOrder;

    fn genome_length(&self) -> usize {
        self.simulator.seats()
    }

    fn random_genome<R: Rng + ?Sized>(&self, rng: &mut R) -> Genome<ForkOrder> {
        (0..self.genome_length())
            .map(|_| {
                if rng.gen_bool(0.5) {
                    ForkOrder::RightFirst
                } else {
                    ForkOrder::LeftFirst
                }
            })
            .collect()
    }

    fn mutate<R: Rng + ?Sized>(&self, genome: &mut [ForkOrder], rng: &mut R) {
        flip_mutation(genome, self.mutation_rate, rng);
    }

    fn fitness<R: Rng + ?Sized>(&self, genome: &[ForkOrder], rng: &mut R) -> Result<f64> {
        let mut total = 0usize;
        for _ in 0..self.trials {
            total += self.simulator.run_trial(genome, rng)?.successes();
        }
        Ok(total as f64 / self.trials as f64)
    }
}

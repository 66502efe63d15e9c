use crate::engines::generation::Genome;
use crate::error::Result;
use rand::Rng;
use std::fmt::Debug;

/// A contention model the evolution engine can optimize.
///
/// Supplies the gene representation, how random genomes are drawn, how a
/// genome is perturbed, and how it scores. Selection and crossover are
/// chosen on the engine side.
pub trait ContentionModel {
    type Gene: Clone + Debug;

    /// Number of genes in every genome (one per philosopher).
    fn genome_length(&self) -> usize;

    fn random_genome<R: Rng + ?Sized>(&self, rng: &mut R) -> Genome<Self::Gene>;

    fn mutate<R: Rng + ?Sized>(&self, genome: &mut [Self::Gene], rng: &mut R);

    /// Fitness in `[0, genome_length]`; higher is better.
    fn fitness<R: Rng + ?Sized>(&self, genome: &[Self::Gene], rng: &mut R) -> Result<f64>;
}

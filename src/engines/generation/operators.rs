use crate::engines::generation::genome::Genome;
use crate::error::{DiningError, Result};
use crate::types::ForkOrder;
use rand::seq::index;
use rand::Rng;
use rand_distr::{Distribution, Normal};

/// Tournament selection: best of `tournament_size` distinct random candidates.
///
/// The sample is clamped to the population size. Ties keep the candidate
/// sampled first.
pub fn tournament_selection<'a, G, R: Rng + ?Sized>(
    population: &'a [(Genome<G>, f64)],
    tournament_size: usize,
    rng: &mut R,
) -> Result<&'a Genome<G>> {
    if population.is_empty() {
        return Err(DiningError::EmptyPopulation);
    }

    let sample_size = tournament_size.clamp(1, population.len());
    let mut contenders = index::sample(rng, population.len(), sample_size).into_iter();

    // sample_size >= 1, so there is always a first contender
    let mut best_idx = contenders.next().unwrap_or(0);
    for idx in contenders {
        if population[idx].1 > population[best_idx].1 {
            best_idx = idx;
        }
    }

    Ok(&population[best_idx].0)
}

/// Roulette wheel selection: probability proportional to fitness
pub fn roulette_selection<'a, G, R: Rng + ?Sized>(
    population: &'a [(Genome<G>, f64)],
    rng: &mut R,
) -> Result<&'a Genome<G>> {
    if population.is_empty() {
        return Err(DiningError::EmptyPopulation);
    }

    let total_fitness: f64 = population.iter().map(|(_, f)| f.max(0.0)).sum();

    if total_fitness <= 0.0 {
        // Nothing to weight by, pick uniformly
        return Ok(&population[rng.gen_range(0..population.len())].0);
    }

    let spin = rng.gen_range(0.0..=total_fitness);
    let mut cumulative = 0.0;

    for (genome, fitness) in population {
        cumulative += fitness.max(0.0);
        if cumulative >= spin {
            return Ok(genome);
        }
    }

    // Rounding can leave the sum a hair short of the spin
    Ok(&population[population.len() - 1].0)
}

/// Single-point crossover: swap genome tails after a cut in `[1, len - 1]`.
pub fn crossover<G: Clone, R: Rng + ?Sized>(
    parent1: &[G],
    parent2: &[G],
    rng: &mut R,
) -> Result<(Genome<G>, Genome<G>)> {
    if parent1.len() != parent2.len() {
        return Err(DiningError::GenomeLength {
            expected: parent1.len(),
            actual: parent2.len(),
        });
    }
    let len = parent1.len();
    if len < 2 {
        return Err(DiningError::InvalidGene(format!(
            "crossover needs at least 2 genes, got {}",
            len
        )));
    }

    let point = rng.gen_range(1..len);

    let mut child1 = parent1[..point].to_vec();
    child1.extend_from_slice(&parent2[point..]);
    let mut child2 = parent2[..point].to_vec();
    child2.extend_from_slice(&parent1[point..]);

    Ok((child1, child2))
}

/// Bit-flip mutation for fork-ordering genomes.
pub fn flip_mutation<R: Rng + ?Sized>(genome: &mut [ForkOrder], mutation_rate: f64, rng: &mut R) {
    for gene in genome.iter_mut() {
        if rng.gen::<f64>() < mutation_rate {
            *gene = gene.flipped();
        }
    }
}

/// Gaussian mutation for delay genomes, clamped back into `bounds` after
/// every perturbation.
pub fn gaussian_mutation<R: Rng + ?Sized>(
    genome: &mut [f64],
    mutation_rate: f64,
    noise: &Normal<f64>,
    bounds: (f64, f64),
    rng: &mut R,
) {
    let (lo, hi) = bounds;
    for gene in genome.iter_mut() {
        if rng.gen::<f64>() < mutation_rate {
            *gene = (*gene + noise.sample(rng)).clamp(lo, hi);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const TOLERANCE: f64 = 0.07;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    #[test]
    fn test_roulette_proportions() {
        let population = vec![(vec![0u8], 1.0), (vec![1u8], 3.0), (vec![2u8], 6.0)];
        let mut rng = rng();
        let mut counts = [0usize; 3];

        for _ in 0..2000 {
            let picked = roulette_selection(&population, &mut rng).unwrap();
            counts[picked[0] as usize] += 1;
        }

        assert!((counts[0] as f64 / 2000.0 - 0.1).abs() < TOLERANCE);
        assert!((counts[1] as f64 / 2000.0 - 0.3).abs() < TOLERANCE);
        assert!((counts[2] as f64 / 2000.0 - 0.6).abs() < TOLERANCE);
    }

    #[test]
    fn test_roulette_zero_fitness_falls_back_to_uniform() {
        let population = vec![(vec![0u8], 0.0), (vec![1u8], 0.0), (vec![2u8], 0.0)];
        let mut rng = rng();
        let mut counts = [0usize; 3];

        for _ in 0..900 {
            let picked = roulette_selection(&population, &mut rng).unwrap();
            counts[picked[0] as usize] += 1;
        }

        assert!(counts.iter().all(|&c| c > 200), "counts {:?}", counts);
    }

    #[test]
    fn test_roulette_never_picks_zero_weight_candidate() {
        let population = vec![(vec![0u8], 0.0), (vec![1u8], 2.0)];
        let mut rng = rng();
        for _ in 0..500 {
            assert_eq!(roulette_selection(&population, &mut rng).unwrap()[0], 1);
        }
    }

    #[test]
    fn test_empty_population_is_an_error() {
        let population: Vec<(Genome<f64>, f64)> = Vec::new();
        let mut rng = rng();
        assert!(matches!(
            roulette_selection(&population, &mut rng),
            Err(DiningError::EmptyPopulation)
        ));
        assert!(matches!(
            tournament_selection(&population, 3, &mut rng),
            Err(DiningError::EmptyPopulation)
        ));
    }

    #[test]
    fn test_tournament_covering_population_picks_best() {
        let population = vec![(vec![0.0], 1.0), (vec![1.0], 4.0), (vec![2.0], 2.0)];
        let mut rng = rng();
        // Size larger than the population is clamped, so every tournament sees everyone.
        for _ in 0..50 {
            assert_eq!(tournament_selection(&population, 10, &mut rng).unwrap()[0], 1.0);
        }
    }

    #[test]
    fn test_tournament_of_one_is_uniform() {
        let population = vec![(vec![0.0], 0.0), (vec![1.0], 100.0)];
        let mut rng = rng();
        let low_picks = (0..1000)
            .filter(|_| tournament_selection(&population, 1, &mut rng).unwrap()[0] == 0.0)
            .count();
        assert!((low_picks as f64 / 1000.0 - 0.5).abs() < TOLERANCE);
    }

    #[test]
    fn test_tournament_never_returns_worst_with_full_sample_minus_one() {
        // With 3 of 4 sampled, the single worst candidate can never win.
        let population = vec![
            (vec![0.0], 0.5),
            (vec![1.0], 1.0),
            (vec![2.0], 2.0),
            (vec![3.0], 3.0),
        ];
        let mut rng = rng();
        for _ in 0..200 {
            assert_ne!(tournament_selection(&population, 3, &mut rng).unwrap()[0], 0.0);
        }
    }

    #[test]
    fn test_crossover_genes_come_from_parents() {
        let parent1 = vec![ForkOrder::LeftFirst; 5];
        let parent2 = vec![ForkOrder::RightFirst; 5];
        let mut rng = rng();

        for _ in 0..100 {
            let (child1, child2) = crossover(&parent1, &parent2, &mut rng).unwrap();
            assert_eq!(child1.len(), 5);
            assert_eq!(child2.len(), 5);

            // Cut point is in [1, 4]: both children start with their own parent's
            // gene and end with the other parent's gene.
            assert_eq!(child1[0], ForkOrder::LeftFirst);
            assert_eq!(child1[4], ForkOrder::RightFirst);
            assert_eq!(child2[0], ForkOrder::RightFirst);
            assert_eq!(child2[4], ForkOrder::LeftFirst);

            for i in 0..5 {
                assert_eq!(child1[i].flipped(), child2[i]);
            }
        }
    }

    #[test]
    fn test_crossover_never_blends_delays() {
        let parent1 = vec![0.0, 1.0, 2.0, 3.0, 4.0];
        let parent2 = vec![9.0, 8.0, 7.0, 6.0, 5.0];
        let mut rng = rng();

        for _ in 0..100 {
            let (child, _) = crossover(&parent1, &parent2, &mut rng).unwrap();
            for (i, gene) in child.iter().enumerate() {
                assert!(*gene == parent1[i] || *gene == parent2[i]);
            }
        }
    }

    #[test]
    fn test_crossover_rejects_mismatched_or_short_parents() {
        let mut rng = rng();
        assert!(crossover(&[1.0, 2.0], &[1.0, 2.0, 3.0], &mut rng).is_err());
        assert!(crossover(&[1.0], &[2.0], &mut rng).is_err());
    }

    #[test]
    fn test_flip_mutation_extremes() {
        let mut rng = rng();
        let mut genome = vec![ForkOrder::LeftFirst, ForkOrder::RightFirst, ForkOrder::LeftFirst];

        flip_mutation(&mut genome, 0.0, &mut rng);
        assert_eq!(genome, vec![ForkOrder::LeftFirst, ForkOrder::RightFirst, ForkOrder::LeftFirst]);

        flip_mutation(&mut genome, 1.0, &mut rng);
        assert_eq!(
            genome,
            vec![ForkOrder::RightFirst, ForkOrder::LeftFirst, ForkOrder::RightFirst]
        );
    }

    #[test]
    fn test_gaussian_mutation_stays_in_bounds() {
        let mut rng = rng();
        let noise = Normal::new(0.0, 25.0).unwrap();
        let mut genome = vec![0.0, 10.0, 5.0, 0.1, 9.9];

        for _ in 0..200 {
            gaussian_mutation(&mut genome, 1.0, &noise, (0.0, 10.0), &mut rng);
            assert_eq!(genome.len(), 5);
            assert!(genome.iter().all(|g| (0.0..=10.0).contains(g)), "{:?}", genome);
        }
    }

    #[test]
    fn test_gaussian_mutation_rate_zero_is_identity() {
        let mut rng = rng();
        let noise = Normal::new(0.0, 0.5).unwrap();
        let mut genome = vec![1.0, 2.0, 3.0];
        gaussian_mutation(&mut genome, 0.0, &noise, (0.0, 10.0), &mut rng);
        assert_eq!(genome, vec![1.0, 2.0, 3.0]);
    }
}

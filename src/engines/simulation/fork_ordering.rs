use crate::{
    error::{DiningError, Result},
    types::ForkOrder,
};
use rand::seq::SliceRandom;
use rand::Rng;

/// Result of one pass of acquisition attempts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundOutcome {
    /// Order in which philosophers woke up and tried their forks.
    pub order: Vec<usize>,
    /// Philosophers that got both forks, in the order they ate.
    pub diners: Vec<usize>,
}

impl RoundOutcome {
    pub fn successes(&self) -> usize {
        self.diners.len()
    }
}

/// Binary fork state for a single pass. Every fork starts free.
struct ForkTable {
    held: Vec<bool>,
}

impl ForkTable {
    fn new(seats: usize) -> Self {
        Self {
            held: vec![false; seats],
        }
    }

    fn try_acquire(&mut self, fork: usize) -> bool {
        if self.held[fork] {
            return false;
        }
        self.held[fork] = true;
        true
    }

    fn release(&mut self, fork: usize) {
        self.held[fork] = false;
    }

    fn all_free(&self) -> bool {
        self.held.iter().all(|held| !held)
    }
}

/// Replays one-shot, non-blocking fork acquisition for the fork-ordering model.
///
/// Each philosopher gets exactly one attempt. A philosopher that cannot take
/// its first fork gives up; one that takes the first but not the second puts
/// the first back and gives up. A philosopher that takes both eats and
/// immediately returns both, so later philosophers in the same pass may use
/// them.
pub struct ForkOrderingSimulator {
    seats: usize,
}

impl ForkOrderingSimulator {
    pub fn new(seats: usize) -> Self {
        Self { seats }
    }

    pub fn seats(&self) -> usize {
        self.seats
    }

    /// Runs one pass with an explicit wake-up order.
    pub fn run_round(&self, genome: &[ForkOrder], order: &[usize]) -> Result<RoundOutcome> {
        self.check_genome(genome)?;
        self.check_order(order)?;

        let mut forks = ForkTable::new(self.seats);
        let mut diners = Vec::with_capacity(self.seats);

        for &philosopher in order {
            let (first, second) = genome[philosopher].forks(philosopher, self.seats);

            if !forks.try_acquire(first) {
                continue;
            }
            if !forks.try_acquire(second) {
                forks.release(first);
                continue;
            }

            diners.push(philosopher);
            forks.release(first);
            forks.release(second);
        }

        debug_assert!(forks.all_free());

        Ok(RoundOutcome {
            order: order.to_vec(),
            diners,
        })
    }

    /// Runs one pass with a uniformly random wake-up order drawn from `rng`.
    pub fn run_trial<R: Rng + ?Sized>(
        &self,
        genome: &[ForkOrder],
        rng: &mut R,
    ) -> Result<RoundOutcome> {
        let mut order: Vec<usize> = (0..self.seats).collect();
        order.shuffle(rng);
        self.run_round(genome, &order)
    }

    fn check_genome(&self, genome: &[ForkOrder]) -> Result<()> {
        if genome.len() != self.seats {
            return Err(DiningError::GenomeLength {
                expected: self.seats,
                actual: genome.len(),
            });
        }
        Ok(())
    }

    fn check_order(&self, order: &[usize]) -> Result<()> {
        if order.len() != self.seats {
            return Err(DiningError::InvalidGene(format!(
                "wake-up order has {} entries for {} seats",
                order.len(),
                self.seats
            )));
        }
        let mut seen = vec![false; self.seats];
        for &philosopher in order {
            if philosopher >= self.seats || seen[philosopher] {
                return Err(DiningError::InvalidGene(format!(
                    "wake-up order {:?} is not a permutation of 0..{}",
                    order, self.seats
                )));
            }
            seen[philosopher] = true;
        }
        Ok(())
    }
}

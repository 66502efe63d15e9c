use crate::engines::generation::genome::Genome;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Champion<G> {
    pub genome: Genome<G>,
    pub fitness: f64,
    pub generation: usize, // Generation in which it was first seen
}

/// Best candidate seen across a whole run.
///
/// Only a strictly greater fitness replaces the current champion, so under
/// equal fitness the first one found is kept and the recorded fitness never
/// decreases.
#[derive(Clone, Debug)]
pub struct BestTracker<G> {
    champion: Option<Champion<G>>,
}

impl<G: Clone> BestTracker<G> {
    pub fn new() -> Self {
        Self { champion: None }
    }

    /// Offers a candidate; returns whether it became the new champion.
    pub fn try_update(&mut self, genome: &[G], fitness: f64, generation: usize) -> bool {
        let improves = match &self.champion {
            Some(current) => fitness > current.fitness,
            None => !fitness.is_nan(),
        };

        if improves {
            self.champion = Some(Champion {
                genome: genome.to_vec(),
                fitness,
                generation,
            });
        }
        improves
    }

    pub fn champion(&self) -> Option<&Champion<G>> {
        self.champion.as_ref()
    }

    pub fn best_fitness(&self) -> Option<f64> {
        self.champion.as_ref().map(|c| c.fitness)
    }

    pub fn into_champion(self) -> Option<Champion<G>> {
        self.champion
    }
}

impl<G: Clone> Default for BestTracker<G> {
    fn default() -> Self {
        Self::new()
    }
}

use super::traits::{check_positive, check_rate, ConfigSection};
use crate::error::DiningError;
use serde::{Deserialize, Serialize};

/// Search settings for the fork-ordering model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderingConfig {
    pub population_size: usize,
    pub generations: usize,
    pub mutation_rate: f64,
    /// Random wake-up orders averaged per fitness evaluation.
    pub trials: usize,
}

impl Default for OrderingConfig {
    fn default() -> Self {
        Self {
            population_size: 20,
            generations: 50,
            mutation_rate: 0.1,
            trials: 100,
        }
    }
}

impl ConfigSection for OrderingConfig {
    fn section_name() -> &'static str {
        "ordering"
    }

    fn validate(&self) -> Result<(), DiningError> {
        let section = Self::section_name();
        check_positive(section, "population_size", self.population_size)?;
        check_positive(section, "trials", self.trials)?;
        check_positive(section, "generations", self.generations)?;
        check_rate(section, "mutation_rate", self.mutation_rate)?;
        Ok(())
    }
}

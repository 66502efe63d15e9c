use super::traits::{check_positive, check_rate, ConfigSection};
use crate::error::DiningError;
use serde::{Deserialize, Serialize};

/// Search settings for the arrival-schedule model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScheduleConfig {
    pub population_size: usize,
    pub generations: usize,
    pub mutation_rate: f64,
    pub mutation_std_dev: f64,
    pub crossover_rate: f64,
    pub tournament_size: usize,
    pub delay_min: f64,
    pub delay_max: f64,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            population_size: 30,
            generations: 100,
            mutation_rate: 0.3,
            mutation_std_dev: 0.5,
            crossover_rate: 0.8,
            tournament_size: 3,
            delay_min: 0.0,
            delay_max: 10.0,
        }
    }
}

impl ScheduleConfig {
    pub fn delay_bounds(&self) -> (f64, f64) {
        (self.delay_min, self.delay_max)
    }
}

impl ConfigSection for ScheduleConfig {
    fn section_name() -> &'static str {
        "schedule"
    }

    fn validate(&self) -> Result<(), DiningError> {
        let section = Self::section_name();
        check_positive(section, "population_size", self.population_size)?;
        check_positive(section, "tournament_size", self.tournament_size)?;
        check_positive(section, "generations", self.generations)?;
        check_rate(section, "mutation_rate", self.mutation_rate)?;
        check_rate(section, "crossover_rate", self.crossover_rate)?;

        if !self.mutation_std_dev.is_finite() || self.mutation_std_dev < 0.0 {
            return Err(DiningError::Configuration(format!(
                "schedule.mutation_std_dev must be a non-negative number, got {}",
                self.mutation_std_dev
            )));
        }
        if !self.delay_min.is_finite() || !self.delay_max.is_finite() {
            return Err(DiningError::Configuration(
                "schedule delay bounds must be finite".to_string(),
            ));
        }
        if self.delay_min > self.delay_max {
            return Err(DiningError::Configuration(format!(
                "schedule.delay_min ({}) exceeds schedule.delay_max ({})",
                self.delay_min, self.delay_max
            )));
        }
        if !(self.delay_max - self.delay_min).is_finite() {
            return Err(DiningError::Configuration(format!(
                "schedule delay range [{}, {}] is too wide",
                self.delay_min, self.delay_max
            )));
        }
        Ok(())
    }
}

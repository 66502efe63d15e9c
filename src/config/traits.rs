use crate::error::DiningError;
use serde::{Deserialize, Serialize};

/// Trait for configuration sections
pub trait ConfigSection: Serialize + for<'de> Deserialize<'de> + Default + Clone {
    fn section_name() -> &'static str;
    fn validate(&self) -> Result<(), DiningError>;
}

/// Shared check for probabilities such as mutation and crossover rates.
pub(crate) fn check_rate(section: &str, name: &str, value: f64) -> Result<(), DiningError> {
    if !(0.0..=1.0).contains(&value) {
        return Err(DiningError::Configuration(format!(
            "{}.{} must be between 0 and 1, got {}",
            section, name, value
        )));
    }
    Ok(())
}

pub(crate) fn check_positive(section: &str, name: &str, value: usize) -> Result<(), DiningError> {
    if value == 0 {
        return Err(DiningError::Configuration(format!(
            "{}.{} must be at least 1",
            section, name
        )));
    }
    Ok(())
}

use super::traits::ConfigSection;
use crate::error::DiningError;
use serde::{Deserialize, Serialize};

/// The shared table: how many philosophers (and forks) sit around it and
/// how long a meal occupies a fork in the arrival-schedule model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    pub num_philosophers: usize,
    pub eat_duration: f64,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            num_philosophers: 5,
            eat_duration: 1.0,
        }
    }
}

impl ConfigSection for TableConfig {
    fn section_name() -> &'static str {
        "table"
    }

    fn validate(&self) -> Result<(), DiningError> {
        if self.num_philosophers < 2 {
            return Err(DiningError::Configuration(
                "table.num_philosophers must be at least 2".to_string(),
            ));
        }
        if !self.eat_duration.is_finite() || self.eat_duration <= 0.0 {
            return Err(DiningError::Configuration(format!(
                "table.eat_duration must be a positive number, got {}",
                self.eat_duration
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table_is_valid() {
        assert!(TableConfig::default().validate().is_ok());
    }

    #[test]
    fn test_single_seat_rejected() {
        let table = TableConfig {
            num_philosophers: 1,
            ..Default::default()
        };
        assert!(table.validate().is_err());
    }

    #[test]
    fn test_non_positive_eat_duration_rejected() {
        for eat_duration in [0.0, -1.0, f64::NAN] {
            let table = TableConfig {
                eat_duration,
                ..Default::default()
            };
            assert!(table.validate().is_err(), "accepted {}", eat_duration);
        }
    }
}

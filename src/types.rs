use crate::error::DiningError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which fork a philosopher reaches for first.
///
/// Encoded as a single bit: `0` for left-first, `1` for right-first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ForkOrder {
    LeftFirst,
    RightFirst,
}

impl ForkOrder {
    pub fn flipped(self) -> Self {
        match self {
            ForkOrder::LeftFirst => ForkOrder::RightFirst,
            ForkOrder::RightFirst => ForkOrder::LeftFirst,
        }
    }

    pub fn as_bit(self) -> u8 {
        match self {
            ForkOrder::LeftFirst => 0,
            ForkOrder::RightFirst => 1,
        }
    }

    /// Forks requested by `philosopher`, in request order, on a table of `seats`.
    pub fn forks(self, philosopher: usize, seats: usize) -> (usize, usize) {
        let left = philosopher;
        let right = (philosopher + 1) % seats;
        match self {
            ForkOrder::LeftFirst => (left, right),
            ForkOrder::RightFirst => (right, left),
        }
    }
}

impl TryFrom<u8> for ForkOrder {
    type Error = DiningError;

    fn try_from(bit: u8) -> Result<Self, Self::Error> {
        match bit {
            0 => Ok(ForkOrder::LeftFirst),
            1 => Ok(ForkOrder::RightFirst),
            other => Err(DiningError::InvalidGene(format!(
                "fork order must be 0 or 1, got {}",
                other
            ))),
        }
    }
}

/// Converts raw bits into a fork-ordering genome.
pub fn fork_orders_from_bits(bits: &[u8]) -> Result<Vec<ForkOrder>, DiningError> {
    bits.iter().map(|&b| ForkOrder::try_from(b)).collect()
}

pub fn fork_orders_to_bits(genome: &[ForkOrder]) -> Vec<u8> {
    genome.iter().map(|g| g.as_bit()).collect()
}

/// The two contention models the search can optimize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Variant {
    /// Discrete fork-ordering strategies, averaged over random wake-up orders.
    Ordering,
    /// Continuous arrival delays with interval-based fork occupancy.
    Schedule,
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Variant::Ordering => write!(f, "ordering"),
            Variant::Schedule => write!(f, "schedule"),
        }
    }
}

impl FromStr for Variant {
    type Err = DiningError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "ordering" | "a" => Ok(Variant::Ordering),
            "schedule" | "b" => Ok(Variant::Schedule),
            other => Err(DiningError::Configuration(format!(
                "unknown variant '{}'",
                other
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forks_wrap_around_the_table() {
        assert_eq!(ForkOrder::LeftFirst.forks(4, 5), (4, 0));
        assert_eq!(ForkOrder::RightFirst.forks(4, 5), (0, 4));
        assert_eq!(ForkOrder::RightFirst.forks(1, 5), (2, 1));
    }

    #[test]
    fn test_bits_conversion() {
        let genome = fork_orders_from_bits(&[0, 1, 1, 0]).unwrap();
        assert_eq!(
            genome,
            vec![
                ForkOrder::LeftFirst,
                ForkOrder::RightFirst,
                ForkOrder::RightFirst,
                ForkOrder::LeftFirst
            ]
        );
        assert_eq!(fork_orders_to_bits(&genome), vec![0, 1, 1, 0]);
        assert!(fork_orders_from_bits(&[0, 2]).is_err());
    }

    #[test]
    fn test_variant_parsing() {
        assert_eq!("ordering".parse::<Variant>().unwrap(), Variant::Ordering);
        assert_eq!("Schedule".parse::<Variant>().unwrap(), Variant::Schedule);
        assert!("both".parse::<Variant>().is_err());
    }
}

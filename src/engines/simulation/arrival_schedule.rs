use crate::error::{DiningError, Result};
use serde::{Deserialize, Serialize};

/// Half-open occupancy window `[start, end)` on a fork.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Interval {
    pub start: f64,
    pub end: f64,
}

impl Interval {
    pub fn new(start: f64, duration: f64) -> Self {
        Self {
            start,
            end: start + duration,
        }
    }

    pub fn contains(&self, time: f64) -> bool {
        self.start <= time && time < self.end
    }

    pub fn overlaps(&self, other: &Interval) -> bool {
        self.start < other.end && other.start < self.end
    }
}

/// A philosopher that got both forks and when.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Meal {
    pub philosopher: usize,
    pub interval: Interval,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleOutcome {
    /// Meals in processing order (ascending arrival time).
    pub meals: Vec<Meal>,
}

impl ScheduleOutcome {
    pub fn successes(&self) -> usize {
        self.meals.len()
    }

    pub fn ate(&self, philosopher: usize) -> bool {
        self.meals.iter().any(|m| m.philosopher == philosopher)
    }
}

/// Deterministic interval-scheduling simulator for the arrival-schedule model.
///
/// Philosophers arrive at their delay, ascending, ties in seat order. One who
/// finds both forks free at the arrival instant occupies them for
/// `eat_duration`; otherwise the arrival is dropped with no effect.
pub struct ArrivalScheduleSimulator {
    seats: usize,
    eat_duration: f64,
}

impl ArrivalScheduleSimulator {
    pub fn new(seats: usize, eat_duration: f64) -> Self {
        Self { seats, eat_duration }
    }

    pub fn seats(&self) -> usize {
        self.seats
    }

    pub fn run(&self, delays: &[f64]) -> Result<ScheduleOutcome> {
        if delays.len() != self.seats {
            return Err(DiningError::GenomeLength {
                expected: self.seats,
                actual: delays.len(),
            });
        }
        if let Some((seat, delay)) = delays.iter().enumerate().find(|(_, d)| !d.is_finite()) {
            return Err(DiningError::InvalidGene(format!(
                "delay {} for philosopher {} is not finite",
                delay, seat
            )));
        }

        let mut arrivals: Vec<(usize, f64)> = delays.iter().copied().enumerate().collect();
        // sort_by is stable, so equal delays keep seat order
        arrivals.sort_by(|a, b| a.1.total_cmp(&b.1));

        let mut occupancy: Vec<Vec<Interval>> = vec![Vec::new(); self.seats];
        let mut meals = Vec::with_capacity(self.seats);

        for (philosopher, arrival) in arrivals {
            let left = philosopher;
            let right = (philosopher + 1) % self.seats;

            let is_free = |fork: usize| !occupancy[fork].iter().any(|iv| iv.contains(arrival));
            if !(is_free(left) && is_free(right)) {
                continue;
            }

            let interval = Interval::new(arrival, self.eat_duration);
            occupancy[left].push(interval);
            occupancy[right].push(interval);
            meals.push(Meal {
                philosopher,
                interval,
            });
        }

        Ok(ScheduleOutcome { meals })
    }
}

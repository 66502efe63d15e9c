//! Entry points that turn an [`AppConfig`] into a finished search.
//!
//! [`run_ordering_search`] and [`run_schedule_search`] return the typed
//! result of one model; [`run_genetic_search`] picks the model at runtime
//! and returns a serializable [`SearchReport`].

use crate::{
    config::AppConfig,
    engines::evaluation::{OrderingModel, ScheduleModel},
    engines::generation::{
        CrossoverScheme, EvolutionConfig, EvolutionEngine, EvolutionResult, ProgressCallback,
        SelectionMethod,
    },
    engines::simulation::Meal,
    error::Result,
    types::{fork_orders_to_bits, ForkOrder, Variant},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Engine settings for the fork-ordering model: roulette selection and
/// paired crossover.
pub fn ordering_engine_config(config: &AppConfig) -> EvolutionConfig {
    EvolutionConfig {
        population_size: config.ordering.population_size,
        generations: config.ordering.generations,
        selection: SelectionMethod::Roulette,
        crossover: CrossoverScheme::Paired,
        seed: config.seed,
    }
}

/// Engine settings for the arrival-schedule model: tournament selection and
/// single-child crossover.
pub fn schedule_engine_config(config: &AppConfig) -> EvolutionConfig {
    EvolutionConfig {
        population_size: config.schedule.population_size,
        generations: config.schedule.generations,
        selection: SelectionMethod::Tournament {
            size: config.schedule.tournament_size,
        },
        crossover: CrossoverScheme::Single {
            rate: config.schedule.crossover_rate,
        },
        seed: config.seed,
    }
}

pub fn run_ordering_search<C: ProgressCallback<ForkOrder>>(
    config: &AppConfig,
    callback: C,
) -> Result<EvolutionResult<ForkOrder>> {
    config.validate()?;
    let model = OrderingModel::new(&config.table, &config.ordering);
    EvolutionEngine::new(ordering_engine_config(config), model).run(callback)
}

pub fn run_schedule_search<C: ProgressCallback<f64>>(
    config: &AppConfig,
    callback: C,
) -> Result<EvolutionResult<f64>> {
    schedule_engine(config)?.run(callback)
}

fn schedule_engine(config: &AppConfig) -> Result<EvolutionEngine<ScheduleModel>> {
    config.validate()?;
    let model = ScheduleModel::new(&config.table, &config.schedule)?;
    Ok(EvolutionEngine::new(schedule_engine_config(config), model))
}

/// Best genome in a model-neutral form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BestGenome {
    /// `0` = left fork first, `1` = right fork first.
    Ordering(Vec<u8>),
    /// Arrival delay per philosopher.
    Schedule(Vec<f64>),
}

impl fmt::Display for BestGenome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BestGenome::Ordering(bits) => write!(f, "{:?}", bits),
            BestGenome::Schedule(delays) => {
                let rendered: Vec<String> = delays.iter().map(|d| format!("{:.3}", d)).collect();
                write!(f, "[{}]", rendered.join(", "))
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchReport {
    pub variant: Variant,
    pub best_genome: BestGenome,
    pub best_fitness: f64,
    pub found_in_generation: usize,
    pub generations: usize,
    pub history: Vec<f64>,
    /// Meals of the best schedule; only the arrival-schedule model is
    /// deterministic enough to replay.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub best_schedule: Option<Vec<Meal>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

impl fmt::Display for SearchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Best solution found ({} model):", self.variant)?;
        match self.variant {
            Variant::Ordering => writeln!(f, "  Strategy per philosopher: {}", self.best_genome)?,
            Variant::Schedule => {
                writeln!(f, "  Arrival delay per philosopher: {}", self.best_genome)?
            }
        }
        writeln!(
            f,
            "  Fitness (philosophers that ate): {:.2}, first seen in generation {}",
            self.best_fitness,
            self.found_in_generation + 1
        )?;
        if let Some(meals) = &self.best_schedule {
            for meal in meals {
                writeln!(
                    f,
                    "  Philosopher {} eats during [{:.3}, {:.3})",
                    meal.philosopher, meal.interval.start, meal.interval.end
                )?;
            }
        }
        Ok(())
    }
}

/// Runs the chosen model and packages the outcome as a [`SearchReport`].
pub fn run_genetic_search<C>(
    variant: Variant,
    config: &AppConfig,
    callback: C,
) -> Result<SearchReport>
where
    C: ProgressCallback<ForkOrder> + ProgressCallback<f64>,
{
    let started_at = Utc::now();
    log::info!("Starting {} search (seed: {:?})", variant, config.seed);

    let (best_genome, best_fitness, found_in_generation, history, best_schedule) = match variant {
        Variant::Ordering => {
            let result = run_ordering_search(config, callback)?;
            (
                BestGenome::Ordering(fork_orders_to_bits(&result.best_genome)),
                result.best_fitness,
                result.found_in_generation,
                result.history,
                None,
            )
        }
        Variant::Schedule => {
            let mut engine = schedule_engine(config)?;
            let result = engine.run(callback)?;
            let meals = engine.model().simulator().run(&result.best_genome)?.meals;
            (
                BestGenome::Schedule(result.best_genome),
                result.best_fitness,
                result.found_in_generation,
                result.history,
                Some(meals),
            )
        }
    };

    log::info!("Finished {} search with best fitness {:.2}", variant, best_fitness);

    Ok(SearchReport {
        variant,
        best_genome,
        best_fitness,
        found_in_generation,
        generations: history.len(),
        history,
        best_schedule,
        seed: config.seed,
        started_at,
        finished_at: Utc::now(),
    })
}

pub mod best_tracker;
pub mod evolution_engine;
pub mod genome;
pub mod operators;
pub mod progress;

pub use best_tracker::{BestTracker, Champion};
pub use evolution_engine::{
    CrossoverScheme, EvolutionConfig, EvolutionEngine, EvolutionResult, SelectionMethod,
};
pub use genome::Genome;
pub use progress::{
    ChannelProgressCallback, ConsoleProgressCallback, ProgressCallback, ProgressMessage,
};

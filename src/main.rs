use anyhow::Context;
use clap::{Parser, ValueEnum};
use dining_search::{
    config::ConfigManager,
    engines::generation::ConsoleProgressCallback,
    search::{run_genetic_search, SearchReport},
    types::Variant,
};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum VariantArg {
    Ordering,
    Schedule,
    Both,
}

#[derive(Parser, Debug)]
#[command(
    name = "dining-search",
    version,
    about = "Genetic search for dining-philosophers configurations"
)]
struct Cli {
    /// TOML or JSON configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Contention model to optimize
    #[arg(short, long, value_enum, default_value = "both")]
    variant: VariantArg,

    /// Seed for a reproducible run
    #[arg(long)]
    seed: Option<u64>,

    /// Override the population size of the selected model(s)
    #[arg(long)]
    population: Option<usize>,

    /// Override the generation count of the selected model(s)
    #[arg(long)]
    generations: Option<usize>,

    /// Print reports as JSON
    #[arg(long)]
    json: bool,

    /// Write the effective configuration to this path and exit
    #[arg(long)]
    write_default_config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let manager = ConfigManager::new();
    manager
        .load_layered(cli.config.as_deref())
        .context("failed to load configuration")?;
    manager
        .update(|config| {
            if cli.seed.is_some() {
                config.seed = cli.seed;
            }
            if let Some(population) = cli.population {
                config.ordering.population_size = population;
                config.schedule.population_size = population;
            }
            if let Some(generations) = cli.generations {
                config.ordering.generations = generations;
                config.schedule.generations = generations;
            }
        })
        .context("invalid command-line overrides")?;

    if let Some(path) = &cli.write_default_config {
        manager
            .save_to_file(path)
            .with_context(|| format!("failed to write {}", path.display()))?;
        println!("Configuration written to {}", path.display());
        return Ok(());
    }

    let config = manager.get();
    let variants = match cli.variant {
        VariantArg::Ordering => vec![Variant::Ordering],
        VariantArg::Schedule => vec![Variant::Schedule],
        VariantArg::Both => vec![Variant::Ordering, Variant::Schedule],
    };

    let mut reports: Vec<SearchReport> = Vec::with_capacity(variants.len());
    for variant in variants {
        let mut progress = ConsoleProgressCallback::new(variant.to_string());
        let report = run_genetic_search(variant, &config, &mut progress)
            .with_context(|| format!("{} search failed", variant))?;
        reports.push(report);
    }

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    } else {
        for report in &reports {
            println!("\n{}", report);
        }
    }

    Ok(())
}

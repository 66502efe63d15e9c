use dining_search::config::AppConfig;
use dining_search::engines::evaluation::{ContentionModel, ScheduleModel};
use dining_search::engines::generation::{
    ChannelProgressCallback, ProgressCallback, ProgressMessage,
};
use dining_search::engines::simulation::{ArrivalScheduleSimulator, ForkOrderingSimulator};
use dining_search::search::{
    run_genetic_search, run_ordering_search, run_schedule_search, BestGenome,
};
use dining_search::types::{ForkOrder, Variant};
use dining_search::DiningError;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::mpsc;

/// Records best fitness per generation for both gene types.
#[derive(Default)]
struct FitnessLog {
    best: Vec<f64>,
}

impl<G> ProgressCallback<G> for FitnessLog {
    fn on_generation_complete(
        &mut self,
        _generation: usize,
        best_fitness: f64,
        _best_genome: &[G],
    ) {
        self.best.push(best_fitness);
    }
}

fn small_config(seed: u64) -> AppConfig {
    let mut config = AppConfig {
        seed: Some(seed),
        ..Default::default()
    };
    config.ordering.generations = 8;
    config.ordering.trials = 20;
    config.schedule.generations = 40;
    config
}

#[test]
fn test_ordering_end_to_end_in_seat_order() {
    let simulator = ForkOrderingSimulator::new(5);
    let outcome = simulator
        .run_round(&[ForkOrder::LeftFirst; 5], &[0, 1, 2, 3, 4])
        .unwrap();
    assert_eq!(outcome.successes(), 5);
}

#[test]
fn test_schedule_end_to_end_simultaneous_arrivals() {
    let simulator = ArrivalScheduleSimulator::new(5, 1.0);
    assert_eq!(simulator.run(&[0.0; 5]).unwrap().successes(), 2);
}

#[test]
fn test_ordering_search_reaches_full_table() {
    let result = run_ordering_search(&small_config(11), ()).unwrap();
    assert_eq!(result.best_genome.len(), 5);
    assert_eq!(result.best_fitness, 5.0);
    assert_eq!(result.history.len(), 8);
}

#[test]
fn test_schedule_search_finds_a_good_schedule() {
    let config = small_config(3);
    let result = run_schedule_search(&config, ()).unwrap();

    assert_eq!(result.best_genome.len(), 5);
    assert!(result.best_genome.iter().all(|d| (0.0..=10.0).contains(d)));
    // Simultaneous arrival already feeds two; the search should do at least that well.
    assert!(result.best_fitness >= 2.0);
    assert!(result.best_fitness <= 5.0);

    let model = ScheduleModel::new(&config.table, &config.schedule).unwrap();
    let mut rng = StdRng::seed_from_u64(0);
    assert_eq!(model.fitness(&result.best_genome, &mut rng).unwrap(), result.best_fitness);
}

#[test]
fn test_best_fitness_never_regresses() {
    for variant in [Variant::Ordering, Variant::Schedule] {
        let mut log = FitnessLog::default();
        let report = run_genetic_search(variant, &small_config(21), &mut log).unwrap();

        assert_eq!(log.best.len(), report.generations);
        assert!(log.best.windows(2).all(|w| w[1] >= w[0]), "{:?}", log.best);
        assert_eq!(log.best, report.history);
    }
}

#[test]
fn test_seeded_runs_are_reproducible() {
    let config = small_config(99);
    let first = run_schedule_search(&config, ()).unwrap();
    let second = run_schedule_search(&config, ()).unwrap();
    assert_eq!(first, second);

    let first = run_ordering_search(&config, ()).unwrap();
    let second = run_ordering_search(&config, ()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_report_contents() {
    let report = run_genetic_search(Variant::Schedule, &small_config(5), ()).unwrap();
    assert_eq!(report.variant, Variant::Schedule);
    assert_eq!(report.seed, Some(5));
    assert!(matches!(report.best_genome, BestGenome::Schedule(ref d) if d.len() == 5));

    let meals = report.best_schedule.as_ref().unwrap();
    assert_eq!(meals.len() as f64, report.best_fitness);

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["variant"], "schedule");
    assert_eq!(json["history"].as_array().unwrap().len(), 40);

    let report = run_genetic_search(Variant::Ordering, &small_config(5), ()).unwrap();
    match report.best_genome {
        BestGenome::Ordering(bits) => assert!(bits.iter().all(|b| *b <= 1)),
        other => panic!("unexpected genome {:?}", other),
    }
    assert!(report.best_schedule.is_none());
}

#[test]
fn test_channel_progress_reports_each_generation() {
    let (sender, receiver) = mpsc::channel();
    let callback = ChannelProgressCallback::new(sender);
    let config = small_config(8);
    run_schedule_search(&config, callback).unwrap();

    let mut starts = 0;
    let mut evaluated = 0;
    let mut completed = Vec::new();
    for message in receiver.try_iter() {
        match message {
            ProgressMessage::GenerationStart(_) => starts += 1,
            ProgressMessage::CandidateEvaluated { .. } => evaluated += 1,
            ProgressMessage::GenerationComplete { generation, best_genome, .. } => {
                assert_eq!(best_genome.len(), 5);
                completed.push(generation);
            }
        }
    }

    assert_eq!(starts, 40);
    assert_eq!(evaluated, 40 * config.schedule.population_size);
    assert_eq!(completed, (0..40).collect::<Vec<_>>());
}

#[test]
fn test_tournament_larger_than_population_is_clamped() {
    let mut config = small_config(4);
    config.schedule.population_size = 2;
    config.schedule.tournament_size = 10;
    let result = run_schedule_search(&config, ()).unwrap();
    assert_eq!(result.best_genome.len(), 5);
}

#[test]
fn test_invalid_config_is_rejected_before_running() {
    let mut config = small_config(1);
    config.ordering.population_size = 0;
    assert!(matches!(
        run_ordering_search(&config, ()),
        Err(DiningError::Configuration(_))
    ));

    let mut config = small_config(1);
    config.table.num_philosophers = 1;
    assert!(run_schedule_search(&config, ()).is_err());
}

#[test]
fn test_larger_table() {
    let mut config = small_config(17);
    config.table.num_philosophers = 8;
    config.schedule.delay_max = 3.0;

    let result = run_schedule_search(&config, ()).unwrap();
    assert_eq!(result.best_genome.len(), 8);
    assert!(result.best_genome.iter().all(|d| (0.0..=3.0).contains(d)));
    assert!(result.best_fitness <= 8.0);
}

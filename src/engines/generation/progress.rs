use std::fmt::Debug;
use std::sync::mpsc::Sender;

/// Observer for a running search. Purely informational: nothing a callback
/// does can influence the search.
pub trait ProgressCallback<G> {
    fn on_generation_start(&mut self, _generation: usize) {}

    fn on_candidate_evaluated(&mut self, _candidate: usize, _total: usize) {}

    fn on_generation_complete(&mut self, generation: usize, best_fitness: f64, best_genome: &[G]);
}

/// No-op observer.
impl<G> ProgressCallback<G> for () {
    fn on_generation_complete(
        &mut self,
        _generation: usize,
        _best_fitness: f64,
        _best_genome: &[G],
    ) {
    }
}

impl<G, C: ProgressCallback<G> + ?Sized> ProgressCallback<G> for &mut C {
    fn on_generation_start(&mut self, generation: usize) {
        (**self).on_generation_start(generation);
    }

    fn on_candidate_evaluated(&mut self, candidate: usize, total: usize) {
        (**self).on_candidate_evaluated(candidate, total);
    }

    fn on_generation_complete(&mut self, generation: usize, best_fitness: f64, best_genome: &[G]) {
        (**self).on_generation_complete(generation, best_fitness, best_genome);
    }
}

/// Reports each finished generation through the `log` facade.
pub struct ConsoleProgressCallback {
    label: String,
}

impl ConsoleProgressCallback {
    pub fn new(label: impl Into<String>) -> Self {
        Self { label: label.into() }
    }
}

impl<G: Debug> ProgressCallback<G> for ConsoleProgressCallback {
    fn on_generation_start(&mut self, generation: usize) {
        log::debug!("[{}] Generation {} starting...", self.label, generation + 1);
    }

    fn on_candidate_evaluated(&mut self, candidate: usize, total: usize) {
        if candidate == total {
            log::trace!("[{}] Evaluated {}/{} candidates", self.label, candidate, total);
        }
    }

    fn on_generation_complete(&mut self, generation: usize, best_fitness: f64, best_genome: &[G]) {
        log::info!(
            "[{}] Generation {} | best fitness {:.2} | best genome {:?}",
            self.label,
            generation + 1,
            best_fitness,
            best_genome
        );
    }
}

// For handing progress to another thread
pub enum ProgressMessage<G> {
    GenerationStart(usize),
    CandidateEvaluated { current: usize, total: usize },
    GenerationComplete { generation: usize, best_fitness: f64, best_genome: Vec<G> },
}

pub struct ChannelProgressCallback<G> {
    sender: Sender<ProgressMessage<G>>,
}

impl<G> ChannelProgressCallback<G> {
    pub fn new(sender: Sender<ProgressMessage<G>>) -> Self {
        Self { sender }
    }
}

impl<G: Clone> ProgressCallback<G> for ChannelProgressCallback<G> {
    fn on_generation_start(&mut self, generation: usize) {
        let _ = self.sender.send(ProgressMessage::GenerationStart(generation));
    }

    fn on_candidate_evaluated(&mut self, candidate: usize, total: usize) {
        let _ = self.sender.send(ProgressMessage::CandidateEvaluated {
            current: candidate,
            total,
        });
    }

    fn on_generation_complete(&mut self, generation: usize, best_fitness: f64, best_genome: &[G]) {
        let _ = self.sender.send(ProgressMessage::GenerationComplete {
            generation,
            best_fitness,
            best_genome: best_genome.to_vec(),
        });
    }
}

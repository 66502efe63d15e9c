/// Genome representation for the dining search
///
/// A genome holds one gene per philosopher, indexed by seat. The gene type
/// depends on the contention model:
/// - fork ordering: [`ForkOrder`](crate::types::ForkOrder), which fork is
///   requested first
/// - arrival schedule: `f64`, the philosopher's arrival delay
///
/// Every operator preserves the length, so a genome built for a table of
/// `F` seats stays exactly `F` genes long for the whole run.
///
/// # Example
///
/// ```
/// use dining_search::engines::generation::Genome;
///
/// let delays: Genome<f64> = vec![0.0, 1.5, 3.0, 4.5, 6.0];
/// assert_eq!(delays.len(), 5);
/// ```
pub type Genome<G> = Vec<G>;

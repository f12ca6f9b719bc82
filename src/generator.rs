//! Random workload generation.
//!
//! Produces valid batches (positive bursts, non-negative arrivals, unique
//! IDs `1..=count`) for experiments and for property-style tests.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::models::Process;

/// Random batch generator.
///
/// All ranges are inclusive. Inverted ranges are normalized, and bursts are
/// clamped to at least 1 and arrivals to at least 0, so the output always
/// passes [`validate_batch`](crate::validation::validate_batch).
///
/// # Example
/// ```
/// use u_cpusched::generator::BatchGenerator;
///
/// let batch = BatchGenerator::new(5).with_burst_range(1, 10).generate_seeded(42);
/// assert_eq!(batch.len(), 5);
/// assert!(batch.iter().all(|p| (1..=10).contains(&p.burst_time)));
/// ```
#[derive(Debug, Clone)]
pub struct BatchGenerator {
    count: usize,
    burst_range: (i64, i64),
    arrival_range: (i64, i64),
    priority_range: (i32, i32),
}

impl BatchGenerator {
    /// Creates a generator for `count` processes.
    ///
    /// Defaults: bursts 1..=10, all arrivals at 0, priorities 0..=9.
    pub fn new(count: usize) -> Self {
        Self {
            count,
            burst_range: (1, 10),
            arrival_range: (0, 0),
            priority_range: (0, 9),
        }
    }

    /// Sets the burst-time range.
    pub fn with_burst_range(mut self, min: i64, max: i64) -> Self {
        self.burst_range = ordered(min.max(1), max.max(1));
        self
    }

    /// Sets the arrival-time range.
    pub fn with_arrival_range(mut self, min: i64, max: i64) -> Self {
        self.arrival_range = ordered(min.max(0), max.max(0));
        self
    }

    /// Sets the priority range.
    pub fn with_priority_range(mut self, min: i32, max: i32) -> Self {
        self.priority_range = ordered(min, max);
        self
    }

    /// Generates a batch from the given RNG.
    pub fn generate<R: Rng>(&self, rng: &mut R) -> Vec<Process> {
        (1..=self.count)
            .map(|i| {
                let burst = rng.random_range(self.burst_range.0..=self.burst_range.1);
                let arrival = rng.random_range(self.arrival_range.0..=self.arrival_range.1);
                let priority = rng.random_range(self.priority_range.0..=self.priority_range.1);
                Process::new(i as u32, burst)
                    .with_arrival_time(arrival)
                    .with_priority(priority)
            })
            .collect()
    }

    /// Generates a reproducible batch from a seed.
    pub fn generate_seeded(&self, seed: u64) -> Vec<Process> {
        let mut rng = StdRng::seed_from_u64(seed);
        self.generate(&mut rng)
    }
}

fn ordered<T: PartialOrd>(a: T, b: T) -> (T, T) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

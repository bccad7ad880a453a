#![forbid(unsafe_code)]

//! Test dataset generation.
//!
//! One parameterized generator covers both deployments of the original
//! tool: integer-valued and real-valued uniform data over a configurable
//! range. Seeding makes a dataset reproducible across runs; without a seed
//! the generator draws from OS entropy.

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// Whether generated values are whole numbers or reals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValueMode {
    /// Uniform whole numbers in `[min, max]`.
    #[default]
    Integer,
    /// Uniform reals in `[min, max)`.
    Real,
}

/// Configuration for one generated dataset.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Number of values to produce.
    pub count: usize,
    /// Lower bound of the value range.
    pub min: f64,
    /// Upper bound of the value range.
    pub max: f64,
    /// Integer or real generation.
    pub mode: ValueMode,
    /// Fixed RNG seed for reproducible datasets; `None` uses OS entropy.
    pub seed: Option<u64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            count: 20,
            min: 0.0,
            max: 100.0,
            mode: ValueMode::default(),
            seed: None,
        }
    }
}

/// Generate a dataset per the configuration.
///
/// A reversed range (`min > max`) is normalized by swapping the bounds.
pub fn generate(config: &GeneratorConfig) -> Vec<f64> {
    let (lo, hi) = if config.min <= config.max {
        (config.min, config.max)
    } else {
        (config.max, config.min)
    };
    let mut rng = match config.seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_os_rng(),
    };
    (0..config.count)
        .map(|_| match config.mode {
            ValueMode::Integer => (lo + rng.random::<f64>() * (hi - lo + 1.0)).floor(),
            ValueMode::Real => lo + rng.random::<f64>() * (hi - lo),
        })
        .collect()
}

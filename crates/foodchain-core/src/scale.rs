//! Population-to-dot scaling for the diagram.
//!
//! Each level is drawn as a grid of dots. One dot stands for `scale`
//! individuals, where the scale is chosen from the largest population in
//! the chain so dot counts stay readable:
//! - up to 120: 1
//! - up to 500: 5
//! - up to 1000: 10
//! - up to 5000: 50
//! - above: 100

use foodchain_types::{Chain, TrophicLevel};

/// Default ceiling on dots drawn for a single level.
pub const DEFAULT_MAX_DOTS: u64 = 80;

/// Individuals represented by one dot, given the largest population.
pub const fn dot_scale(max_population: u64) -> u64 {
    if max_population <= 120 {
        1
    } else if max_population <= 500 {
        5
    } else if max_population <= 1000 {
        10
    } else if max_population <= 5000 {
        50
    } else {
        100
    }
}

/// Dots to draw for one level: `ceil(population / scale)`, at least one for
/// any non-zero population, and never more than `max_dots`.
pub const fn dot_count(population: u64, scale: u64, max_dots: u64) -> u64 {
    if population == 0 {
        return 0;
    }
    let dots = match (population.checked_div(scale), population.checked_rem(scale)) {
        (Some(whole), Some(0)) => whole,
        (Some(whole), _) => whole.saturating_add(1),
        _ => population,
    };
    let dots = if dots == 0 { 1 } else { dots };
    if dots > max_dots { max_dots } else { dots }
}

/// Dot scale and per-level dot counts for a whole chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PopulationScale {
    /// Individuals per dot.
    pub scale: u64,
    /// Dots per level, producer first.
    pub dots: [u64; TrophicLevel::COUNT],
}

impl PopulationScale {
    /// Compute the scale for a chain with the given per-level dot ceiling.
    pub fn for_chain(chain: &Chain, max_dots: u64) -> Self {
        let scale = dot_scale(chain.max_population());
        let dots = chain.populations().map(|population| dot_count(population, scale, max_dots));
        Self { scale, dots }
    }

    /// Dots for one level.
    pub const fn dots_for(&self, level: TrophicLevel) -> u64 {
        *level.pick(&self.dots)
    }
}

//! Population propagation along the chain ("what-if" updates).
//!
//! When one level is set to a new population, the change spreads outward
//! one hop at a time. Each neighbor is rescaled from the change ratio of the
//! level next to it:
//!
//! ```text
//! ratio        = new / old          (0 when old is 0)
//! new_neighbor = round(max(0, old_neighbor * (1 + c * (ratio - 1))))
//! ```
//!
//! `c` is the model's `downward` coefficient when moving toward the producer
//! and its `upward` coefficient when moving toward the top predator. Hops
//! past the first use the ratio of the already-updated (rounded) neighbor.
//! Rounding is to the nearest integer with halves away from zero.
//!
//! All arithmetic is exact [`Decimal`] math with checked operations.

use foodchain_types::{Chain, Coefficients, TrophicLevel};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use tracing::debug;

use crate::error::PropagationError;

/// Apply a population change at chain position `index`.
///
/// # Errors
///
/// Returns [`PropagationError::InvalidLevelIndex`] if `index` is outside
/// `0..4`, or [`PropagationError::ArithmeticOverflow`] if a recomputed
/// population does not fit.
pub fn propagate(
    chain: &Chain,
    index: usize,
    new_value: u64,
    coefficients: &Coefficients,
) -> Result<Chain, PropagationError> {
    let level =
        TrophicLevel::from_index(index).ok_or(PropagationError::InvalidLevelIndex(index))?;
    propagate_level(chain, level, new_value, coefficients)
}

/// Apply a population change at `changed` and recompute the other levels.
///
/// Setting a level to its current value returns the chain unchanged.
///
/// # Errors
///
/// Returns [`PropagationError::ArithmeticOverflow`] if a recomputed
/// population does not fit.
pub fn propagate_level(
    chain: &Chain,
    changed: TrophicLevel,
    new_value: u64,
    coefficients: &Coefficients,
) -> Result<Chain, PropagationError> {
    let old_value = chain.population(changed);
    if new_value == old_value {
        return Ok(chain.clone());
    }

    let mut updated = chain.clone();
    updated.set_population(changed, new_value);
    spread(chain, &mut updated, changed, coefficients.downward, TrophicLevel::below)?;
    spread(chain, &mut updated, changed, coefficients.upward, TrophicLevel::above)?;

    debug!(
        trophic_level = %changed,
        old_value,
        new_value,
        before = ?chain.populations(),
        after = ?updated.populations(),
        "population change propagated"
    );
    Ok(updated)
}

/// Walk from `from` in one direction, rescaling each level from the one
/// before it.
fn spread(
    original: &Chain,
    updated: &mut Chain,
    from: TrophicLevel,
    coefficient: Decimal,
    step: fn(TrophicLevel) -> Option<TrophicLevel>,
) -> Result<(), PropagationError> {
    let mut source = from;
    while let Some(target) = step(source) {
        let overflow = PropagationError::ArithmeticOverflow { level: target };
        let ratio = change_ratio(updated.population(source), original.population(source))
            .ok_or_else(|| overflow.clone())?;
        let value = scale_neighbor(original.population(target), ratio, coefficient)
            .ok_or(overflow)?;
        updated.set_population(target, value);
        source = target;
    }
    Ok(())
}

/// Ratio of a level's new population to its old one.
///
/// Defined as 0 whenever the old value is 0, even if the new value is also
/// 0. Returns `None` only if the division overflows.
pub fn change_ratio(new: u64, old: u64) -> Option<Decimal> {
    if old == 0 {
        return Some(Decimal::ZERO);
    }
    Decimal::from(new).checked_div(Decimal::from(old))
}

/// Rescale a neighbor's population by `1 + coefficient * (ratio - 1)`,
/// clamped at zero and rounded half away from zero.
///
/// Returns `None` on overflow.
pub fn scale_neighbor(old: u64, ratio: Decimal, coefficient: Decimal) -> Option<u64> {
    let delta = ratio.checked_sub(Decimal::ONE)?;
    let factor = Decimal::ONE.checked_add(coefficient.checked_mul(delta)?)?;
    let scaled = Decimal::from(old).checked_mul(factor)?;
    scaled
        .max(Decimal::ZERO)
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_u64()
}

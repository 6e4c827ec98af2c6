//! Built-in example food chains.
//!
//! Three classroom chains ship with the simulator, each starting from the
//! default population pyramid (1000, 100, 10, 1). Examples are constants;
//! every lookup hands back a fresh [`Chain`] copy.

use foodchain_types::{Chain, TrophicLevel};
use rand::Rng;

use crate::validation::DEFAULT_POPULATIONS;

/// A named example chain definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExampleChain {
    /// Short title used for lookup, e.g. `"Grassland"`.
    pub title: &'static str,
    /// Organism names, producer first.
    pub names: [&'static str; TrophicLevel::COUNT],
}

impl ExampleChain {
    /// A fresh chain with this example's names and the default populations.
    pub fn to_chain(&self) -> Chain {
        Chain::from_parts(self.names, DEFAULT_POPULATIONS)
    }
}

const EXAMPLE_COUNT: usize = 3;

static EXAMPLES: [ExampleChain; EXAMPLE_COUNT] = [
    ExampleChain {
        title: "Grassland",
        names: ["Grass", "Rabbit", "Snake", "Hawk"],
    },
    ExampleChain {
        title: "Ocean",
        names: ["Phytoplankton", "Zooplankton", "Small Fish", "Tuna"],
    },
    ExampleChain {
        title: "Woodland",
        names: ["Oak Tree", "Caterpillar", "Robin", "Fox"],
    },
];

/// Iterate all examples in library order. Each call starts from the first.
pub fn examples() -> impl Iterator<Item = &'static ExampleChain> {
    EXAMPLES.iter()
}

/// Number of bundled examples.
pub const fn example_count() -> usize {
    EXAMPLE_COUNT
}

/// Look up an example by position.
pub fn by_index(index: usize) -> Option<&'static ExampleChain> {
    EXAMPLES.get(index)
}

/// Look up an example by title (case-insensitive, surrounding whitespace ignored).
pub fn by_name(name: &str) -> Option<&'static ExampleChain> {
    let wanted = name.trim();
    EXAMPLES
        .iter()
        .find(|example| example.title.eq_ignore_ascii_case(wanted))
}

/// Pick a uniformly random example position.
pub fn random_index<R: Rng>(rng: &mut R) -> usize {
    rng.random_range(0..example_count())
}

/// Position of the next example in cyclic order.
///
/// A fresh cursor yields the first example; after the last it wraps around.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExampleCursor {
    next: usize,
}

impl ExampleCursor {
    /// Return the next example and the cursor that follows it.
    #[must_use]
    pub fn advance(self) -> (Self, &'static ExampleChain) {
        let [first, ..] = &EXAMPLES;
        let current = by_index(self.next).unwrap_or(first);
        let following = self
            .next
            .checked_add(1)
            .filter(|n| *n < example_count())
            .unwrap_or(0);
        (Self { next: following }, current)
    }

    /// Position the next call to [`advance`](Self::advance) will return.
    pub const fn position(self) -> usize {
        self.next
    }
}

//! Random strike feed for simulations.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::coin::Pocketed;
use crate::strike::{StrikeEvent, StrikeKind};

/// An endless, seeded stream of random strikes.
///
/// Codes are drawn uniformly from the six kinds, black and white counts
/// from `0..10`, and the red flag from a fair coin. Many of the events are
/// invalid for the board they land on, which exercises the rejection paths.
///
/// ```
/// use carrom::RandomStrikes;
///
/// let a: Vec<_> = RandomStrikes::new(7).take(5).collect();
/// let b: Vec<_> = RandomStrikes::new(7).take(5).collect();
/// assert_eq!(a, b);
/// ```
#[derive(Debug, Clone)]
pub struct RandomStrikes {
    rng: ChaCha8Rng,
}

impl RandomStrikes {
    /// Upper bound (exclusive) for random black and white counts.
    pub const MAX_COINS: u8 = 10;

    /// Creates a feed with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl Iterator for RandomStrikes {
    type Item = StrikeEvent;

    fn next(&mut self) -> Option<Self::Item> {
        let code = self.rng.random_range(0..StrikeKind::ALL.len() as u8);
        let mut pocketed = Pocketed::new(
            self.rng.random_range(0..Self::MAX_COINS),
            self.rng.random_range(0..Self::MAX_COINS),
        );
        if self.rng.random_bool(0.5) {
            pocketed = pocketed.with_red();
        }

        Some(StrikeEvent::from_code(code, pocketed))
    }
}

//! Seedable randomness for round generation.
//!
//! Every builder takes `&mut R where R: Rng`, so tests pass a seeded
//! [`StdRng`] and get reproducible rounds.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Build the generator for a session.
///
/// With a seed the output is deterministic; without one it is seeded from the OS.
pub fn game_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Shuffle a vector and return it along with the new position of `index`.
pub fn shuffle_tracking<T, R: Rng + ?Sized>(
    items: Vec<T>,
    index: usize,
    rng: &mut R,
) -> (Vec<T>, usize) {
    let mut tagged: Vec<(usize, T)> = items.into_iter().enumerate().collect();
    tagged.shuffle(rng);

    let position = tagged
        .iter()
        .position(|(original, _)| *original == index)
        .unwrap_or(0);
    (tagged.into_iter().map(|(_, item)| item).collect(), position)
}

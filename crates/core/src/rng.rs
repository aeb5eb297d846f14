//! RNG module - uniform piece selection
//!
//! Wraps `ChaCha8Rng` so a seed reproduces the same piece sequence on every
//! platform. Unseeded catalogs draw their seed from the thread RNG and log it,
//! so a surprising game can be replayed with `--seed`.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use crate::pieces::{get_shape, Shape};
use crate::types::PieceKind;

/// Deterministic RNG for piece selection
#[derive(Debug, Clone)]
pub struct PieceRng {
    rng: ChaCha8Rng,
    seed: u64,
}

impl PieceRng {
    /// Create an RNG seeded from the given `u64` value
    pub fn from_seed_u64(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG with a fresh random seed
    pub fn from_random_seed() -> Self {
        let seed = rand::random();
        debug!(seed, "seeded piece rng");
        Self::from_seed_u64(seed)
    }

    /// Seed this RNG was created with
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Draw a piece kind uniformly
    pub fn next_kind(&mut self) -> PieceKind {
        PieceKind::ALL[self.rng.gen_range(0..PieceKind::ALL.len())]
    }
}

/// Registry of the piece templates with uniform random selection
#[derive(Debug, Clone)]
pub struct ShapeCatalog {
    rng: PieceRng,
}

impl ShapeCatalog {
    /// Create a catalog, seeded when `seed` is given
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => PieceRng::from_seed_u64(seed),
            None => PieceRng::from_random_seed(),
        };
        Self { rng }
    }

    /// A fresh copy of a uniformly chosen template
    pub fn random(&mut self) -> (PieceKind, Shape) {
        let kind = self.rng.next_kind();
        (kind, get_shape(kind))
    }

    /// Seed of the underlying RNG
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }
}

//! Deterministic pseudo-embedding used when no provider answers.
//!
//! The blake3 hash of the text is reduced to a phase `h` in `[0, 1_000_000)`
//! and projected as `v[i] = 0.1 * sin(i + h)`. No network, no state.

use copilot_core::constants::{FALLBACK_AMPLITUDE, FALLBACK_HASH_MODULUS};
use copilot_core::errors::EmbeddingError;
use copilot_core::traits::IEmbeddingProvider;

pub const NAME: &str = "hash_fallback";

#[derive(Debug, Clone, Copy)]
pub struct HashFallback {
    dimensions: usize,
}

impl HashFallback {
    pub fn new(dimensions: usize) -> Self {
        Self { dimensions }
    }

    /// Stable phase derived from the text.
    pub fn phase(text: &str) -> u64 {
        let hash = blake3::hash(text.as_bytes());
        let mut prefix = [0u8; 8];
        prefix.copy_from_slice(&hash.as_bytes()[..8]);
        u64::from_le_bytes(prefix) % FALLBACK_HASH_MODULUS
    }

    pub fn generate(&self, text: &str) -> Vec<f32> {
        let phase = Self::phase(text);
        (0..self.dimensions)
            .map(|i| (FALLBACK_AMPLITUDE * ((i as u64 + phase) as f64).sin()) as f32)
            .collect()
    }
}

impl IEmbeddingProvider for HashFallback {
    fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        Ok(self.generate(text))
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn name(&self) -> &str {
        NAME
    }

    fn is_available(&self) -> bool {
        true
    }
}

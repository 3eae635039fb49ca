//! Deterministic random number generation.
//!
//! RULE: Nothing in the dashboard may call a platform RNG directly.
//! All randomness flows through SimRng instances derived from a single
//! master seed. The runner picks that seed (or takes it from --seed)
//! and logs it, so any view can be reproduced.
//!
//! Each stream is seeded from (master_seed, slot, generation):
//!   - Adding a new slot never changes existing slots' streams.
//!   - Each dashboard refresh (generation) is reproducible in isolation.

use rand::SeedableRng;
use rand_pcg::Pcg64Mcg;

/// A named, deterministic random stream.
pub struct SimRng {
    pub name: &'static str,
    inner: Pcg64Mcg,
}

impl SimRng {
    /// Create a stream directly from a seed.
    pub fn new(seed: u64) -> Self {
        Self {
            name: "unnamed",
            inner: Pcg64Mcg::seed_from_u64(seed),
        }
    }

    pub fn with_name(mut self, name: &'static str) -> Self {
        self.name = name;
        self
    }

    /// Roll a float in [0.0, 1.0).
    pub fn next_f64(&mut self) -> f64 {
        use rand::RngCore;
        let bits = self.inner.next_u64();
        (bits >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
    }

    /// Draw a raw u64 (full range).
    pub fn next_u64(&mut self) -> u64 {
        use rand::RngCore;
        self.inner.next_u64()
    }

    /// Roll a float uniformly in [min, max).
    pub fn uniform(&mut self, min: f64, max: f64) -> f64 {
        min + self.next_f64() * (max - min)
    }

    /// Roll a float uniformly in [-half_width, half_width).
    pub fn jitter(&mut self, half_width: f64) -> f64 {
        (self.next_f64() - 0.5) * 2.0 * half_width
    }

    /// Fill 16 bytes, used for reproducible identifiers.
    pub fn next_bytes16(&mut self) -> [u8; 16] {
        let mut bytes = [0u8; 16];
        bytes[..8].copy_from_slice(&self.next_u64().to_le_bytes());
        bytes[8..].copy_from_slice(&self.next_u64().to_le_bytes());
        bytes
    }
}

/// Hands out every stream for one dashboard session.
#[derive(Debug, Clone)]
pub struct RngBank {
    master_seed: u64,
}

impl RngBank {
    pub fn new(master_seed: u64) -> Self {
        Self { master_seed }
    }

    /// A bank seeded from the thread RNG. The seed is returned by
    /// `master_seed()` so callers can log it.
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    pub fn master_seed(&self) -> u64 {
        self.master_seed
    }

    /// Stream for `slot` at refresh number `generation`.
    pub fn for_stream(&self, slot: StreamSlot, generation: u64) -> SimRng {
        let derived_seed = self.master_seed
            ^ (slot as u64).wrapping_mul(0x9e37_79b9_7f4a_7c15)
            ^ generation.wrapping_mul(0xbf58_476d_1ce4_e5b9);
        SimRng::new(derived_seed).with_name(slot.name())
    }
}

/// Stable stream slot assignments.
/// NEVER reorder or remove entries; only append.
/// Reordering changes every stream's seed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u64)]
pub enum StreamSlot {
    Snapshot = 0,
    Overlay = 1,
    // Add new streams here, append only.
}

impl StreamSlot {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Snapshot => "snapshot",
            Self::Overlay => "overlay",
        }
    }
}

//! Smooth scalar noise for Brownian drift.
//!
//! Bodies wander by sampling a continuous noise function at a slowly
//! advancing per-body phase, not by taking independent random draws each
//! frame. That is what makes the motion look like drift instead of static.
//!
//! This is hash-lattice value noise: integer lattice points get a
//! deterministic pseudo-random value, samples in between are smoothstep
//! interpolations, and a few octaves are layered fractally. Same seed and
//! same phase always produce the same sample, which keeps the noise path of
//! the motion pipeline reproducible.

/// Number of fractal octaves layered per sample.
const OCTAVES: u32 = 4;

/// A seeded 1-D value-noise field with samples in `[0, 1)`.
#[derive(Debug, Clone, Copy)]
pub struct NoiseField {
    seed: u32,
}

impl NoiseField {
    /// Create a noise field with the default seed.
    pub fn new() -> Self {
        Self { seed: 0x9e3779b9 }
    }

    /// Create a noise field with an explicit seed.
    pub fn with_seed(seed: u32) -> Self {
        Self { seed }
    }

    /// Deterministic lattice value in `[0, 1)` for an integer coordinate.
    fn lattice(&self, i: i32) -> f32 {
        let mut h = (i as u32).wrapping_mul(0x85eb_ca6b) ^ self.seed;
        h ^= h >> 13;
        h = h.wrapping_mul(0xc2b2_ae35);
        h ^= h >> 16;
        (h >> 8) as f32 / (1u32 << 24) as f32
    }

    /// Single-octave smooth noise at `x`.
    fn smooth(&self, x: f32) -> f32 {
        let x0 = x.floor();
        let f = x - x0;
        let i = x0 as i32;
        // smoothstep fade
        let u = f * f * (3.0 - 2.0 * f);
        let a = self.lattice(i);
        let b = self.lattice(i.wrapping_add(1));
        a + (b - a) * u
    }

    /// Fractal sample at `phase`, in `[0, 1)`.
    ///
    /// Amplitudes halve and frequencies double per octave; the result is
    /// normalized back to the unit interval.
    pub fn sample(&self, phase: f32) -> f32 {
        let mut value = 0.0;
        let mut amplitude = 0.5;
        let mut x = phase;
        for _ in 0..OCTAVES {
            value += amplitude * self.smooth(x);
            x *= 2.0;
            amplitude *= 0.5;
        }
        // Octave amplitudes sum to 1 - 0.5^OCTAVES; rescale to [0, 1).
        value / (1.0 - 0.5f32.powi(OCTAVES as i32))
    }

    /// Sample remapped from `[0, 1)` to `[-1, 1)`.
    pub fn sample_signed(&self, phase: f32) -> f32 {
        (self.sample(phase) - 0.5) * 2.0
    }
}

impl Default for NoiseField {
    fn default() -> Self {
        Self::new()
    }
}

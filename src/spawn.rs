//! Spawn context for body factories, plus shared random-direction helpers.
//!
//! Region construction calls the body factory once per body with a
//! [`SpawnContext`] so factories don't have to set up their own RNG:
//!
//! ```ignore
//! Simulation::new().with_region("H2", 5, false, |ctx| {
//!     let mut body = substance::diatomic(Element::H, Element::H, col, col);
//!     body.rotation = ctx.random_rotation();
//!     body
//! })
//! ```

use crate::Vec3;
use rand::rngs::SmallRng;
use rand::Rng;
use std::f32::consts::TAU;

/// Uniformly distributed unit vector.
///
/// Used everywhere the pipeline needs a random direction: degenerate-pair
/// nudges, tangential wall jitter, anti-stall impulses.
pub fn random_unit<R: Rng>(rng: &mut R) -> Vec3 {
    // Uniform on the sphere: z uniform in [-1, 1], azimuth uniform in [0, TAU).
    let z: f32 = rng.gen_range(-1.0..1.0f32);
    let theta: f32 = rng.gen_range(0.0..TAU);
    let r = (1.0 - z * z).max(0.0).sqrt();
    Vec3::new(r * theta.cos(), r * theta.sin(), z)
}

/// Context provided to body factories with helpers for common spawn
/// patterns.
pub struct SpawnContext<'a> {
    /// Index of the body being spawned (0 to count-1).
    pub index: u32,
    /// Total number of bodies being spawned into the region.
    pub count: u32,
    /// Edge length of the region being populated.
    pub region_size: f32,
    rng: &'a mut SmallRng,
}

impl<'a> SpawnContext<'a> {
    pub(crate) fn new(index: u32, count: u32, region_size: f32, rng: &'a mut SmallRng) -> Self {
        Self {
            index,
            count,
            region_size,
            rng,
        }
    }

    /// Random f32 between 0.0 and 1.0.
    #[inline]
    pub fn random(&mut self) -> f32 {
        self.rng.gen()
    }

    /// Random f32 in the given range.
    #[inline]
    pub fn random_range(&mut self, min: f32, max: f32) -> f32 {
        self.rng.gen_range(min..max)
    }

    /// Uniformly distributed unit vector.
    #[inline]
    pub fn random_unit(&mut self) -> Vec3 {
        random_unit(self.rng)
    }

    /// Random point inside a sphere of given radius, centered at origin.
    /// Uniform throughout the volume.
    pub fn random_in_sphere(&mut self, radius: f32) -> Vec3 {
        // Cube root for uniform volume distribution.
        let r = radius * self.rng.gen::<f32>().cbrt();
        random_unit(self.rng) * r
    }

    /// Random Euler angles, each axis uniform in [0, 2π).
    pub fn random_rotation(&mut self) -> Vec3 {
        Vec3::new(
            self.rng.gen_range(0.0..TAU),
            self.rng.gen_range(0.0..TAU),
            self.rng.gen_range(0.0..TAU),
        )
    }

    /// Random noise-phase origin, each axis uniform in [0, 1000).
    pub(crate) fn random_phase(&mut self) -> Vec3 {
        Vec3::new(
            self.rng.gen_range(0.0..1000.0),
            self.rng.gen_range(0.0..1000.0),
            self.rng.gen_range(0.0..1000.0),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_random_unit_has_unit_length() {
        let mut rng = SmallRng::seed_from_u64(7);
        for _ in 0..100 {
            let v = random_unit(&mut rng);
            assert!((v.length() - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn test_random_in_sphere_stays_inside() {
        let mut rng = SmallRng::seed_from_u64(11);
        let mut ctx = SpawnContext::new(0, 1, 220.0, &mut rng);
        for _ in 0..200 {
            assert!(ctx.random_in_sphere(3.5).length() <= 3.5 + 1e-5);
        }
    }

    #[test]
    fn test_random_range_bounds() {
        let mut rng = SmallRng::seed_from_u64(13);
        let mut ctx = SpawnContext::new(2, 5, 220.0, &mut rng);
        for _ in 0..100 {
            let v = ctx.random_range(1.2, 2.6);
            assert!((1.2..2.6).contains(&v));
        }
    }
}

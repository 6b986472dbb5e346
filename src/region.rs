//! Regions: cubic bounded volumes owning a set of bodies.
//!
//! A region places its bodies at construction (random scatter for free
//! bodies, a deterministic floor seat for a crystal), relaxes them into a
//! valid starting configuration with [`Region::settle_initial`], and then
//! advances them one frame at a time with [`Region::step`]. Static regions
//! skip physics entirely; the crystal lattice never moves.
//!
//! Region coordinates are local: body positions are offsets from
//! `center`, which is what panning and selection move.

use crate::body::{Body, BodyKind};
use crate::collision;
use crate::motion::brownian_drift;
use crate::noise::NoiseField;
use crate::spawn::SpawnContext;
use crate::tuning::Tuning;
use crate::Vec3;
use rand::rngs::SmallRng;
use rand::Rng;

/// A cubic bounded volume containing and constraining bodies.
#[derive(Debug)]
pub struct Region {
    /// Display name ("H2", "NaCl", ...).
    pub name: String,
    /// World placement of the region's local origin.
    pub center: Vec3,
    /// Edge length of the cubic boundary.
    pub size: f32,
    pub bodies: Vec<Body>,
    /// Static regions skip all per-frame physics.
    pub is_static: bool,
    /// Hidden regions are excluded from update and render.
    pub visible: bool,
}

impl Region {
    /// Create a region and populate it by invoking `factory` `count` times.
    ///
    /// The factory is called immediately and not retained; bodies are never
    /// added after construction. Free bodies get a random in-bounds
    /// position, a random initial speed (1.2-2.6), spin and rotation;
    /// crystal bodies are seated on the region floor with zero motion.
    pub fn new<F>(
        name: impl Into<String>,
        center: Vec3,
        size: f32,
        count: u32,
        is_static: bool,
        mut factory: F,
        tuning: &Tuning,
        rng: &mut SmallRng,
    ) -> Self
    where
        F: FnMut(&mut SpawnContext) -> Body,
    {
        let mut bodies = Vec::with_capacity(count as usize);
        for index in 0..count {
            let mut ctx = SpawnContext::new(index, count, size, rng);
            let mut body = factory(&mut ctx);
            body.recompute_bound_radius();

            match body.kind {
                BodyKind::Crystal => Self::seat_crystal(&mut body, size, tuning),
                BodyKind::Free => {
                    let center_limit = (size * 0.5 - body.bound_radius).max(0.0);
                    let mut ctx = SpawnContext::new(index, count, size, rng);
                    if center_limit > 0.0 {
                        body.position =
                            ctx.random_unit() * ctx.random_range(0.0, center_limit);
                    }
                    body.velocity = ctx.random_unit() * ctx.random_range(1.2, 2.6);
                    body.angular_velocity =
                        ctx.random_unit() * ctx.random_range(0.003, 0.01);
                    body.rotation = ctx.random_rotation();
                    body.noise_phase = ctx.random_phase();
                }
            }
            bodies.push(body);
        }

        Self {
            name: name.into(),
            center,
            size,
            bodies,
            is_static,
            visible: true,
        }
    }

    /// Seat a crystal so its lowest atom rests just below the region floor,
    /// lowered a little further so the lattice reads as sitting on the
    /// ground rather than floating.
    fn seat_crystal(body: &mut Body, size: f32, tuning: &Tuning) {
        let lowest = body
            .atoms
            .iter()
            .map(|a| a.offset.y - a.radius)
            .fold(f32::INFINITY, f32::min);
        let floor = -size * 0.5;
        body.position = Vec3::new(0.0, floor - lowest - tuning.crystal_drop, 0.0);
        body.velocity = Vec3::ZERO;
        body.angular_velocity = Vec3::ZERO;
        body.rotation = Vec3::ZERO;
    }

    /// Run the startup relaxation so the first frame begins from a
    /// non-overlapping, in-bounds configuration.
    ///
    /// Returns `false` if the iteration cap was hit before a fixed point.
    pub fn settle_initial(&mut self, tuning: &Tuning, rng: &mut SmallRng) -> bool {
        collision::settle(&mut self.bodies, self.size, tuning, rng)
    }

    /// Advance the region one frame: Brownian drift and integration per
    /// free body, then one pairwise separation pass, then wall resolution
    /// (which applies the per-frame global damping).
    ///
    /// Static and hidden regions are skipped.
    pub fn step<R: Rng>(&mut self, tuning: &Tuning, noise: &NoiseField, rng: &mut R) {
        if self.is_static || !self.visible {
            return;
        }
        for body in &mut self.bodies {
            if body.is_free() {
                brownian_drift(body, tuning.brownian_scale, noise, tuning, rng);
                body.integrate();
            }
        }
        collision::separate_pairs(&mut self.bodies, tuning, rng);
        for body in &mut self.bodies {
            collision::bounce_walls(body, self.size, tuning, rng);
        }
    }

    /// Whether any body in this region is a crystal lattice.
    pub fn has_crystal(&self) -> bool {
        self.bodies.iter().any(|b| b.kind == BodyKind::Crystal)
    }
}

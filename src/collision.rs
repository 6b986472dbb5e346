//! Collision resolution: pairwise separation, wall bounce, startup settle.
//!
//! Bodies are bounding spheres and regions are axis-aligned cubes, so all
//! of this is sphere-vs-sphere and sphere-vs-plane math. There are three
//! passes:
//!
//! - [`separate_pairs`] runs once per frame and relaxes overlapping body
//!   pairs. It is a single pass, not iterated to convergence - persistent
//!   overlaps resolve gradually across frames, which trades strict
//!   non-penetration for stability under continuous motion.
//! - [`bounce_walls`] confines each body to the region cube with a
//!   penetration snap and a lossy velocity reflection per axis.
//! - [`settle`] runs once at startup and iterates the pair relaxation to a
//!   fixed point (or an iteration cap) so the first frame starts from a
//!   non-overlapping, in-bounds configuration.
//!
//! All three only ever move [`BodyKind::Free`] bodies; crystals are
//! immovable obstacles.

use crate::body::{Body, BodyKind};
use crate::spawn::random_unit;
use crate::tuning::{Tuning, WALL_EXTENT};
use crate::Vec3;
use rand::Rng;

/// Distance below which two body centers are treated as coincident during
/// the steady-state pass.
const COINCIDENT_EPS: f32 = 0.0001;

/// Coincidence threshold for the startup settle (slightly looser; the
/// settle nudge is also larger).
const SETTLE_COINCIDENT_EPS: f32 = 0.001;

/// Usable half-extent for a body's center along each axis of a cubic
/// region: the wall margin minus the body's own bounding radius.
#[inline]
pub fn wall_limit(region_size: f32, bound_radius: f32) -> f32 {
    region_size * WALL_EXTENT - bound_radius
}

/// One steady-state relaxation pass over every unordered body pair.
///
/// O(n²) over the slice, which is fine at the body counts regions hold
/// (tens at most). Overlapping pairs are pushed apart along their center
/// line by `pair_split * overlap`, half per free body so the pair midpoint
/// is preserved, and both velocities are damped by `pair_damping` - the
/// only energy loss for body-body contact. Coincident centers get a random
/// nudge instead, since the push direction is undefined there.
pub fn separate_pairs<R: Rng>(bodies: &mut [Body], tuning: &Tuning, rng: &mut R) {
    for i in 0..bodies.len() {
        for j in (i + 1)..bodies.len() {
            let (head, tail) = bodies.split_at_mut(j);
            let a = &mut head[i];
            let b = &mut tail[0];

            if a.kind == BodyKind::Crystal && b.kind == BodyKind::Crystal {
                continue;
            }

            let dir = b.position - a.position;
            let d = dir.length();
            let min_dist = a.bound_radius + b.bound_radius + tuning.pair_gap;

            if d <= COINCIDENT_EPS {
                // Degenerate: centers on top of each other. Break the
                // singularity with a random nudge and a matching velocity kick.
                let target = if b.is_free() { b } else { a };
                let nudge = random_unit(rng);
                target.position += nudge;
                target.velocity += nudge * 0.02;
            } else if d < min_dist {
                let overlap = min_dist - d;
                let push = dir / d * (overlap * tuning.pair_split);
                match (a.is_free(), b.is_free()) {
                    (true, true) => {
                        a.position -= push * 0.5;
                        b.position += push * 0.5;
                    }
                    // Against a crystal the free body takes the whole push.
                    (true, false) => a.position -= push,
                    (false, true) => b.position += push,
                    (false, false) => unreachable!(),
                }
                if a.is_free() {
                    a.velocity *= tuning.pair_damping;
                }
                if b.is_free() {
                    b.velocity *= tuning.pair_damping;
                }
            }
        }
    }
}

/// Confine a body to the region cube, reflecting velocity off any wall the
/// bounding sphere has crossed.
///
/// Axes are resolved independently and in order (x, y, z); a corner hit is
/// up to three single-axis reflections in the same frame, not one combined
/// reflection. Per penetrated axis:
///
/// - snap the coordinate just inside the limit,
/// - reflect the outward velocity component with restitution
///   (`v -= n * (1 + e) * (v·n)` when `v·n > 0`, `n` the outward wall
///   normal),
/// - add a small purely tangential jitter so repeat bounces vary,
/// - if the remaining normal speed is below the unstick threshold, push the
///   body away from the wall along `-n`.
///
/// After all three axes the global per-frame damping is applied once, the
/// counterweight to the energy the Brownian pass keeps injecting.
pub fn bounce_walls<R: Rng>(body: &mut Body, region_size: f32, tuning: &Tuning, rng: &mut R) {
    if !body.is_free() {
        return;
    }

    let limit = wall_limit(region_size, body.bound_radius);
    for axis in 0..3 {
        let coord = body.position[axis];
        let outward = if coord > limit {
            body.position[axis] = limit - tuning.wall_epsilon;
            1.0
        } else if coord < -limit {
            body.position[axis] = -limit + tuning.wall_epsilon;
            -1.0
        } else {
            continue;
        };

        let mut n = Vec3::ZERO;
        n[axis] = outward;

        let vn = body.velocity.dot(n);
        if vn > 0.0 {
            body.velocity -= n * ((1.0 + tuning.restitution) * vn);
        }

        // Tangential jitter: random direction with its normal component
        // projected out, so it never pushes through the wall.
        let jitter = random_unit(rng) * tuning.wall_jitter;
        body.velocity += jitter - n * jitter.dot(n);

        if body.velocity.dot(n).abs() < tuning.min_vel_unstick {
            let strength = tuning.unstick_impulse * (0.6 + rng.gen::<f32>() * 0.8);
            body.velocity -= n * strength;
        }
    }

    body.velocity *= tuning.global_damping;
}

/// Iterative startup relaxation: establish a non-overlapping, in-bounds
/// configuration before the first frame.
///
/// Uses the wider `settle_gap` for a safer starting margin and pushes
/// *both* bodies of a pair by `settle_split * overlap` (an over-correction
/// that speeds convergence). After each body's pair scan its position is
/// clamped to the region's inner bounds; crystals are exempt, they are
/// placed deterministically. Runs to a fixed point or `settle_max_iters`.
///
/// Returns `true` if a fixed point was reached, `false` if the iteration
/// cap cut the relaxation short (best effort, not a hard guarantee).
pub fn settle<R: Rng>(bodies: &mut [Body], region_size: f32, tuning: &Tuning, rng: &mut R) -> bool {
    for _ in 0..tuning.settle_max_iters {
        let mut moved = false;
        for i in 0..bodies.len() {
            for j in (i + 1)..bodies.len() {
                let (head, tail) = bodies.split_at_mut(j);
                let a = &mut head[i];
                let b = &mut tail[0];

                if a.kind == BodyKind::Crystal && b.kind == BodyKind::Crystal {
                    continue;
                }

                let dir = b.position - a.position;
                let d = dir.length();

                if d < SETTLE_COINCIDENT_EPS {
                    let target = if b.is_free() { b } else { a };
                    target.position += random_unit(rng) * 1.5;
                    moved = true;
                    continue;
                }

                let min_dist = a.bound_radius + b.bound_radius + tuning.settle_gap;
                if d < min_dist {
                    let push = dir / d * ((min_dist - d) * tuning.settle_split);
                    match (a.is_free(), b.is_free()) {
                        (true, true) => {
                            a.position -= push;
                            b.position += push;
                        }
                        (true, false) => a.position -= push * 2.0,
                        (false, true) => b.position += push * 2.0,
                        (false, false) => unreachable!(),
                    }
                    moved = true;
                }
            }

            let body = &mut bodies[i];
            if body.is_free() {
                let limit = wall_limit(region_size, body.bound_radius);
                body.position = body.position.clamp(Vec3::splat(-limit), Vec3::splat(limit));
            }
        }
        if !moved {
            return true;
        }
    }
    false
}

//! Physics tuning constants.
//!
//! Every knob the motion and collision pipeline reads lives here, gathered
//! into a [`Tuning`] struct so a host can tweak individual values through
//! the simulation builder:
//!
//! ```ignore
//! let tuning = Tuning {
//!     restitution: 0.9,
//!     ..Tuning::default()
//! };
//! Simulation::new().with_tuning(tuning);
//! ```
//!
//! The defaults are tuned for visual plausibility, not physical accuracy.
//! Bodies should drift, bounce and jostle without ever freezing in place
//! or picking up unbounded speed.

/// Fraction of a region's edge usable by body centers. The remaining
/// `0.05 * size` per side is a visual margin so spheres never touch the
/// wireframe walls on screen.
pub const WALL_EXTENT: f32 = 0.45;

/// Tunable constants for the per-frame motion and collision pipeline.
///
/// Note that the startup settle pass and the steady-state pairwise pass use
/// *different* gaps and split factors (`settle_gap`/`settle_split` vs
/// `pair_gap`/`pair_split`). The settle pass wants a wider starting margin;
/// the steady-state pass trades strictness for stability. They are kept as
/// separate knobs on purpose.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tuning {
    /// Fraction of normal velocity retained (negated) after a wall bounce.
    pub restitution: f32,
    /// Distance inside the wall limit a penetrating body is snapped to.
    pub wall_epsilon: f32,
    /// Tangential jitter magnitude added after each wall reflection.
    pub wall_jitter: f32,
    /// Speeds below this are considered stalled and receive an impulse.
    pub min_vel_unstick: f32,
    /// Base magnitude of anti-stall and anti-stick impulses.
    pub unstick_impulse: f32,
    /// Hard cap on body speed.
    pub max_speed: f32,

    /// Per-axis velocity gain applied to each noise sample.
    pub brownian_accel: f32,
    /// Default caller-side multiplier on the Brownian gain.
    pub brownian_scale: f32,
    /// Per-frame advance of each noise phase component.
    pub phase_step: f32,
    /// Magnitude of the random angular velocity kick per frame.
    pub angular_jitter: f32,
    /// Per-frame angular velocity retention (first-order low-pass).
    pub angular_damping: f32,

    /// Steady-state clearance kept between body bounding spheres.
    pub pair_gap: f32,
    /// Fraction of the overlap corrected in one steady-state pass.
    pub pair_split: f32,
    /// Velocity retention applied to both bodies of an overlapping pair.
    pub pair_damping: f32,

    /// Startup clearance between bounding spheres, wider than `pair_gap`.
    pub settle_gap: f32,
    /// Per-body fraction of the overlap corrected per settle iteration.
    pub settle_split: f32,
    /// Iteration cap for the startup settle relaxation.
    pub settle_max_iters: u32,

    /// Uniform per-frame velocity retention, applied once per body after
    /// wall resolution.
    pub global_damping: f32,

    /// Extra distance a crystal is lowered below the region floor.
    pub crystal_drop: f32,
    /// Screen-space +y offset given to a crystal region on selection.
    pub crystal_screen_shift: f32,

    /// Zoom clamp for view fitting.
    pub zoom_min: f32,
    pub zoom_max: f32,
    /// Pixel margin reserved around the fitted scene.
    pub fit_margin: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            restitution: 0.78,
            wall_epsilon: 0.0001,
            wall_jitter: 0.06,
            min_vel_unstick: 0.03,
            unstick_impulse: 0.08,
            max_speed: 6.0,

            brownian_accel: 0.08,
            brownian_scale: 0.7,
            phase_step: 0.0042,
            angular_jitter: 0.00025,
            angular_damping: 0.995,

            pair_gap: 1.5,
            pair_split: 0.55,
            pair_damping: 0.95,

            settle_gap: 4.0,
            settle_split: 0.52,
            settle_max_iters: 300,

            global_damping: 0.987,

            crystal_drop: 14.0,
            crystal_screen_shift: 120.0,

            zoom_min: 0.35,
            zoom_max: 2.2,
            fit_margin: 240.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_sane() {
        let t = Tuning::default();
        assert!(t.restitution > 0.0 && t.restitution < 1.0);
        assert!(t.global_damping < 1.0);
        assert!(t.angular_damping < 1.0);
        // The startup pass keeps a wider margin than steady state.
        assert!(t.settle_gap > t.pair_gap);
        assert!(t.min_vel_unstick < t.max_speed);
    }
}

//! Simulation builder and frame driver.
//!
//! Use method chaining to configure, then call `.build()` to get a running
//! [`Engine`]:
//!
//! ```ignore
//! use molbox::prelude::*;
//!
//! let mut engine = Simulation::new()
//!     .with_standard_substances()
//!     .with_seed(7)
//!     .build()?;
//!
//! loop {
//!     // host: forward window events to engine.input_mut()
//!     engine.frame();
//!     // host: draw engine.scene()
//! }
//! ```
//!
//! The engine owns everything a session needs - scene state, tuning,
//! noise field, RNG, timing, input - and advances it one frame per
//! [`Engine::frame`] call. Rendering is entirely the host's business: it
//! reads body and region state through [`Engine::scene`] after each frame.

use crate::body::Body;
use crate::error::BuildError;
use crate::input::Input;
use crate::noise::NoiseField;
use crate::region::Region;
use crate::scene::SceneState;
use crate::spawn::SpawnContext;
use crate::substance::Substance;
use crate::time::Time;
use crate::tuning::Tuning;
use crate::Vec3;
use rand::rngs::SmallRng;
use rand::SeedableRng;

type BodyFactory = Box<dyn FnMut(&mut SpawnContext) -> Body>;

struct RegionSpec {
    name: String,
    count: u32,
    is_static: bool,
    factory: BodyFactory,
}

/// A bouncing-molecule simulation builder.
pub struct Simulation {
    region_size: f32,
    seed: Option<u64>,
    tuning: Tuning,
    specs: Vec<RegionSpec>,
}

impl Simulation {
    /// Create a new simulation with default settings.
    pub fn new() -> Self {
        Self {
            region_size: 220.0,
            seed: None,
            tuning: Tuning::default(),
            specs: Vec::new(),
        }
    }

    /// Set the cubic region edge length (default 220).
    pub fn with_region_size(mut self, size: f32) -> Self {
        self.region_size = size;
        self
    }

    /// Seed the RNG for a reproducible run. Unseeded runs draw from
    /// entropy and differ each execution.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Replace the physics tuning constants.
    pub fn with_tuning(mut self, tuning: Tuning) -> Self {
        self.tuning = tuning;
        self
    }

    /// Add a region for one of the built-in substances.
    pub fn with_substance(mut self, substance: Substance) -> Self {
        self.specs.push(RegionSpec {
            name: substance.name().to_string(),
            count: substance.body_count(),
            is_static: substance.is_static(),
            factory: Box::new(move |ctx| substance.build(ctx)),
        });
        self
    }

    /// Add all six built-in substances in display order
    /// (H2, Cl2, HCl, NaCl, He, Ne).
    pub fn with_standard_substances(mut self) -> Self {
        for substance in Substance::ALL {
            self = self.with_substance(substance);
        }
        self
    }

    /// Add a region with custom body geometry. The factory is invoked
    /// `count` times at build and not retained.
    pub fn with_region<F>(mut self, name: impl Into<String>, count: u32, is_static: bool, factory: F) -> Self
    where
        F: FnMut(&mut SpawnContext) -> Body + 'static,
    {
        self.specs.push(RegionSpec {
            name: name.into(),
            count,
            is_static,
            factory: Box::new(factory),
        });
        self
    }

    /// Construct the engine: populate every region, relax each into a
    /// non-overlapping start configuration, and select the first region.
    pub fn build(self) -> Result<Engine, BuildError> {
        if self.specs.is_empty() {
            return Err(BuildError::NoRegions);
        }

        let mut rng = match self.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        };
        let tuning = self.tuning;

        let mut regions = Vec::with_capacity(self.specs.len());
        for mut spec in self.specs {
            let region = Region::new(
                spec.name.clone(),
                Vec3::ZERO,
                self.region_size,
                spec.count,
                spec.is_static,
                &mut spec.factory,
                &tuning,
                &mut rng,
            );
            if region.bodies.iter().any(|b| b.atoms.is_empty()) {
                return Err(BuildError::EmptyBody { region: spec.name });
            }
            regions.push(region);
        }

        for region in &mut regions {
            region.settle_initial(&tuning, &mut rng);
        }

        let mut scene = SceneState::new(regions);
        scene.select(0, &tuning);

        Ok(Engine {
            scene,
            tuning,
            noise: NoiseField::new(),
            rng,
            time: Time::new(),
            input: Input::new(),
        })
    }
}

impl Default for Simulation {
    fn default() -> Self {
        Self::new()
    }
}

/// A built, running simulation.
pub struct Engine {
    scene: SceneState,
    tuning: Tuning,
    noise: NoiseField,
    rng: SmallRng,
    time: Time,
    input: Input,
}

impl Engine {
    /// Advance one frame: timing, queued input gestures, then physics for
    /// every visible dynamic region.
    pub fn frame(&mut self) {
        self.time.update();
        self.input.apply(&mut self.scene, &self.tuning);
        self.scene.update(&self.tuning, &self.noise, &mut self.rng);
        self.input.begin_frame();
    }

    /// Select the region at `index`, hiding all others.
    pub fn select(&mut self, index: usize) {
        self.scene.select(index, &self.tuning);
    }

    /// Re-fit the zoom to the given window size in pixels.
    pub fn fit_to_view(&mut self, width: f32, height: f32) {
        self.scene.fit_to_view(width, height, &self.tuning);
    }

    /// Scene state, for the host renderer.
    pub fn scene(&self) -> &SceneState {
        &self.scene
    }

    pub fn scene_mut(&mut self) -> &mut SceneState {
        &mut self.scene
    }

    /// Input tracker; the host forwards window events here.
    pub fn input_mut(&mut self) -> &mut Input {
        &mut self.input
    }

    pub fn time(&self) -> &Time {
        &self.time
    }

    pub fn time_mut(&mut self) -> &mut Time {
        &mut self.time
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::body::BodyKind;
    use crate::collision::wall_limit;

    #[test]
    fn test_build_requires_regions() {
        assert!(matches!(
            Simulation::new().build(),
            Err(BuildError::NoRegions)
        ));
    }

    #[test]
    fn test_empty_body_is_rejected() {
        let result = Simulation::new()
            .with_region("broken", 1, false, |_ctx| {
                Body::new(BodyKind::Free, Vec::new())
            })
            .build();
        match result {
            Err(BuildError::EmptyBody { region }) => assert_eq!(region, "broken"),
            other => panic!("expected EmptyBody, got {:?}", other.is_ok()),
        }
    }

    #[test]
    fn test_standard_substances_layout() {
        let engine = Simulation::new()
            .with_standard_substances()
            .with_seed(1)
            .build()
            .unwrap();
        let regions = engine.scene().regions();
        let names: Vec<&str> = regions.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["H2", "Cl2", "HCl", "NaCl", "He", "Ne"]);

        let nacl = &regions[3];
        assert!(nacl.is_static);
        assert_eq!(nacl.bodies.len(), 1);
        assert_eq!(nacl.bodies[0].atoms.len(), 64);
        assert_eq!(nacl.bodies[0].kind, BodyKind::Crystal);

        // Build selects the first region.
        assert!(regions[0].visible);
        assert!(!regions[1].visible);
    }

    #[test]
    fn test_build_starts_without_overlaps() {
        let engine = Simulation::new()
            .with_substance(Substance::He)
            .with_seed(3)
            .build()
            .unwrap();
        let region = &engine.scene().regions()[0];
        let t = engine.tuning();
        for i in 0..region.bodies.len() {
            for j in (i + 1)..region.bodies.len() {
                let a = &region.bodies[i];
                let b = &region.bodies[j];
                let d = (b.position - a.position).length();
                assert!(d >= a.bound_radius + b.bound_radius + t.settle_gap - 1e-3);
            }
        }
    }

    #[test]
    fn test_frames_preserve_invariants() {
        let mut engine = Simulation::new()
            .with_standard_substances()
            .with_seed(9)
            .build()
            .unwrap();
        engine.select(2); // HCl
        for _ in 0..300 {
            engine.frame();
        }
        let region = &engine.scene().regions()[2];
        for body in &region.bodies {
            assert!(body.velocity.length() <= engine.tuning().max_speed + 0.25);
            let limit = wall_limit(region.size, body.bound_radius);
            for axis in 0..3 {
                assert!(body.position[axis].abs() <= limit + 1e-3);
            }
        }
        assert_eq!(engine.time().frame(), 300);
    }

    #[test]
    fn test_seeded_runs_are_reproducible() {
        let run = |seed: u64| {
            let mut engine = Simulation::new()
                .with_substance(Substance::H2)
                .with_seed(seed)
                .build()
                .unwrap();
            for _ in 0..100 {
                engine.frame();
            }
            engine.scene().regions()[0]
                .bodies
                .iter()
                .map(|b| b.position)
                .collect::<Vec<_>>()
        };
        assert_eq!(run(42), run(42));
        assert_ne!(run(42), run(43));
    }
}

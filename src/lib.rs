//! # molbox - bouncing-molecule box simulations
//!
//! An interactive-visualization engine for simple molecular scenes:
//! diatomic gases, noble gases and an ionic crystal lattice drifting,
//! spinning and bouncing inside cubic regions. molbox owns the motion and
//! collision pipeline; a host application owns the window, camera,
//! lighting and draw calls and reads body state back after every frame.
//!
//! ## Quick Start
//!
//! ```ignore
//! use molbox::prelude::*;
//!
//! fn main() -> Result<(), BuildError> {
//!     let mut engine = Simulation::new()
//!         .with_standard_substances() // H2, Cl2, HCl, NaCl, He, Ne
//!         .with_seed(7)
//!         .build()?;
//!
//!     loop {
//!         // host: forward winit events to engine.input_mut()
//!         engine.frame();
//!         for region in engine.scene().regions().iter().filter(|r| r.visible) {
//!             for body in &region.bodies {
//!                 // host: draw each atom sphere at
//!                 // region.center + body.position + rotated atom offset
//!             }
//!         }
//!     }
//! }
//! ```
//!
//! ## The pipeline
//!
//! Each frame, every visible dynamic region runs, per body:
//!
//! 1. **Brownian drift** ([`motion`]) - a smooth noise field nudges the
//!    velocity so bodies wander instead of flying straight or freezing.
//! 2. **Integration** - explicit Euler, one step per frame.
//! 3. **Pairwise separation** ([`collision`]) - one relaxation pass pushes
//!    overlapping bounding spheres apart.
//! 4. **Wall bounce** ([`collision`]) - per-axis penetration snap plus a
//!    lossy velocity reflection, then a global damping that balances the
//!    energy the noise keeps injecting.
//!
//! Everything is tuned for visual plausibility, not physical accuracy:
//! bodies should look alive and never interpenetrate or escape, and that
//! is the whole contract.
//!
//! ## Interaction
//!
//! [`SceneState`](scene::SceneState) tracks selection (exactly one region
//! visible at a time), zoom fitting and the Ctrl+drag "move the whole
//! system" gesture; [`Input`](input::Input) turns raw `winit` window
//! events into those operations. The engine is strictly single-threaded:
//! events are applied between frames and a frame always runs to
//! completion.

pub mod body;
pub mod collision;
pub mod error;
pub mod input;
pub mod motion;
pub mod noise;
pub mod region;
pub mod scene;
pub mod simulation;
pub mod spawn;
pub mod substance;
pub mod time;
pub mod tuning;

pub use glam::{Vec2, Vec3};

/// Convenient re-exports for common usage.
///
/// ```ignore
/// use molbox::prelude::*;
/// ```
pub mod prelude {
    pub use crate::body::{Atom, Body, BodyKind, Element};
    pub use crate::error::BuildError;
    pub use crate::input::{Input, KeyCode, MouseButton};
    pub use crate::noise::NoiseField;
    pub use crate::region::Region;
    pub use crate::scene::SceneState;
    pub use crate::simulation::{Engine, Simulation};
    pub use crate::spawn::SpawnContext;
    pub use crate::substance::Substance;
    pub use crate::time::Time;
    pub use crate::tuning::Tuning;
    pub use crate::{Vec2, Vec3};
}

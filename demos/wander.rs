//! A single custom body wandering in a box.
//!
//! Shows the custom-region API: one three-atom cluster drifting under
//! Brownian noise, with its position traced to stdout. Run with:
//!
//! ```sh
//! cargo run --example wander
//! ```

use molbox::prelude::*;

fn main() -> Result<(), BuildError> {
    let mut engine = Simulation::new()
        .with_region_size(160.0)
        .with_seed(21)
        .with_region("triatom", 1, false, |ctx| {
            let blue = Vec3::new(0.3, 0.5, 1.0);
            let atoms = (0..3)
                .map(|i| {
                    let angle = i as f32 / 3.0 * std::f32::consts::TAU;
                    let mut atom = Atom::new(
                        Vec3::new(angle.cos(), angle.sin(), 0.0) * 10.0,
                        blue,
                        8.0,
                        None,
                    );
                    atom.glow_phase = ctx.random_range(0.0, 1000.0);
                    atom
                })
                .collect();
            Body::new(BodyKind::Free, atoms)
        })
        .build()?;

    for frame in 0..600u32 {
        engine.frame();
        if frame % 60 == 0 {
            let body = &engine.scene().regions()[0].bodies[0];
            println!(
                "frame {:>3}  pos ({:+7.2}, {:+7.2}, {:+7.2})  speed {:.3}",
                frame,
                body.position.x,
                body.position.y,
                body.position.z,
                body.velocity.length(),
            );
        }
    }
    Ok(())
}

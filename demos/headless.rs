//! Headless run of the full six-substance scene.
//!
//! Builds the standard substances, steps a few hundred frames for each
//! selectable region and prints a motion summary. Run with:
//!
//! ```sh
//! cargo run --example headless
//! ```

use molbox::prelude::*;

fn main() -> Result<(), BuildError> {
    let mut engine = Simulation::new()
        .with_standard_substances()
        .with_seed(7)
        .build()?;

    for index in 0..engine.scene().regions().len() {
        engine.select(index);
        for _ in 0..300 {
            engine.frame();
        }

        let region = &engine.scene().regions()[index];
        let speeds: Vec<f32> = region.bodies.iter().map(|b| b.velocity.length()).collect();
        let avg = speeds.iter().sum::<f32>() / speeds.len() as f32;
        let max = speeds.iter().cloned().fold(0.0, f32::max);
        println!(
            "{:>5}  bodies: {}  avg speed: {:.3}  max speed: {:.3}{}",
            region.name,
            region.bodies.len(),
            avg,
            max,
            if region.is_static { "  (static)" } else { "" },
        );
    }

    println!("total frames: {}", engine.time().frame());
    Ok(())
}

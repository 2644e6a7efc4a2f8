//! Fills a grid with stock shapes, lets the central attractor pull them together, and logs
//! the collision pass as they meet.
//!
//! Run with `RUST_LOG=debug cargo run --example orbiting_bodies` for per-pair details.

use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rs_narrowphase::models::ConvexBody;
use rs_narrowphase::simulation::SimulationContext;
use rs_narrowphase::utils::{CollisionError, SimulationConfig};

const FRAME_DT: f64 = 1.0 / 60.0;
const FRAMES: usize = 600;

fn main() -> Result<(), CollisionError> {
    env_logger::init();

    let config = SimulationConfig::new(None, None, Some(4.0), None);
    let mut context = SimulationContext::new(config)?;
    let mut rng = StdRng::seed_from_u64(2024);
    let count = context.populate_grid(3, 10.0, &mut rng)?;
    info!("populated {} bodies", count);

    // Give the first body a sideways push, like a steering input would
    context.add_velocity(0, (0.0, 0.0, 3.0))?;

    for frame in 0..FRAMES {
        context.advance(FRAME_DT)?;

        if frame % 60 == 0 {
            let report = context.last_report();
            let touching = context.bodies().iter().filter(|body| body.in_contact()).count();
            info!(
                "frame {}: {} collisions, {} bodies in contact, body 0 at {:?}",
                frame,
                report.stats.collisions,
                touching,
                context.bodies()[0].position()
            );
        }
    }

    let stats = context.stats();
    println!("steps run:         {}", context.step_count());
    println!("pairs tested:      {}", stats.pairs_tested);
    println!("collisions:        {}", stats.collisions);
    println!("fallback contacts: {}", stats.fallback_contacts);
    println!("iteration limits:  {}", stats.iteration_limits);

    Ok(())
}

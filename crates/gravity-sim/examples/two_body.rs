//! Two equal masses falling toward each other
//!
//! Reads an optional JSON configuration from the first argument, e.g.
//!
//! ```text
//! cargo run --package gravity-sim --example two_body -- '{"ordering": "synchronous"}'
//! ```

use gravity_sim::config::SimulationConfig;
use gravity_sim::physics::gravitational_force;
use gravity_sim::{Body, BodyStore, Simulation};
use nalgebra::{Point2, Vector2};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let config: SimulationConfig = match std::env::args().nth(1) {
        Some(json) => serde_json::from_str(&json)?,
        None => SimulationConfig::default(),
    };
    println!("Configuration: {}", serde_json::to_string(&config)?);

    let mass = 1.0e24;
    let radius = 1.0e6;
    let separation = 1.0e8;

    let store = BodyStore::new();
    let a = store.insert(Body::new(mass, radius, Point2::new(0.0, 0.0), Vector2::zeros())?);
    let b = store.insert(Body::new(
        mass,
        radius,
        Point2::new(separation, 0.0),
        Vector2::zeros(),
    )?);

    let expected = gravitational_force(mass, mass, separation)? / mass;
    println!("Initial acceleration: {expected:.6e}");

    let mut sim = Simulation::new(store.clone(), config)?;
    let mut ticks = 0;
    loop {
        let report = sim.step()?;
        ticks += 1;

        if report.collisions > 0 {
            println!("Contact after {ticks} ticks (t = {:.0})", sim.time());
            break;
        }
        if ticks % 500 == 0 {
            let (a, b) = (store.get(a), store.get(b));
            if let (Some(a), Some(b)) = (a, b) {
                println!(
                    "t={:10.0}: separation {:.4e}, closing speed {:.3}",
                    sim.time(),
                    a.distance_to(&b),
                    b.velocity.x - a.velocity.x
                );
            }
        }
    }

    let state = store.snapshot();
    println!("Total momentum after contact: {:?}", state.total_momentum());
    Ok(())
}

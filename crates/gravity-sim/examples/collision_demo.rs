//! Collision demo
//!
//! A ring of small moons falls toward an anchored planet, bouncing off it
//! and off each other.
//!
//! Run with: RUST_LOG=debug cargo run --package gravity-sim --example collision_demo

use gravity_sim::config::SimulationConfig;
use gravity_sim::physics::mass_from_density;
use gravity_sim::{Body, BodyStore, Simulation};
use nalgebra::{Point2, Vector2};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    println!("Collision Demo: moons falling onto an anchored planet\n");
    println!("{}", "=".repeat(60));

    let store = BodyStore::new();

    // Rocky planet, about 5.5 g/cm³
    let planet_radius = 6.4e6;
    let planet = Body::anchored(
        mass_from_density(5_500.0, planet_radius),
        planet_radius,
        Point2::new(0.0, 0.0),
    )?;
    store.insert(planet);
    println!("  {planet}");

    let moon_radius = 4.0e5;
    let moon_mass = mass_from_density(3_300.0, moon_radius);
    for i in 0..12 {
        let angle = (i as f64) * std::f64::consts::TAU / 12.0;
        let r = 2.0e7 + (i as f64) * 5.0e5;
        let position = Point2::new(r * angle.cos(), r * angle.sin());
        // A little tangential drift so they do not all fall straight in
        let velocity = Vector2::new(-angle.sin(), angle.cos()) * 300.0;

        let moon = Body::new(moon_mass, moon_radius, position, velocity)?;
        store.insert(moon);
        println!("  {moon}");
    }

    let mut sim = Simulation::new(store.clone(), SimulationConfig::default())?;
    let total_ticks = 2_000;

    println!("\nSimulation parameters:");
    println!("  Time step: {}", sim.config().time_step);
    println!("  Ticks: {}", total_ticks);
    println!("\n{}", "=".repeat(60));

    let mut collisions = 0;
    for tick in 0..total_ticks {
        let report = sim.step()?;
        collisions += report.collisions;

        if report.collisions > 0 && tick % 50 == 0 {
            println!(
                "t={:8.0}: {} collision(s) this tick",
                sim.time(),
                report.collisions
            );
        }
    }

    let state = store.snapshot();
    println!("{}", "=".repeat(60));
    println!("Simulation complete!\n");
    println!("  Final time: {:.0}", sim.time());
    println!("  Bodies: {}", state.body_count());
    println!("  Total collisions: {}", collisions);
    println!("  Total kinetic energy: {:.3e}", state.total_kinetic_energy());

    println!("\nFinal positions:");
    for body in &state.bodies {
        println!("  {body}, speed {:.1}", body.speed());
    }

    Ok(())
}

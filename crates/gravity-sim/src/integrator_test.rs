use approx::assert_relative_eq;
use nalgebra::{Point2, Vector2};

use crate::body::Body;
use crate::config::TickOrdering;
use crate::error::SimError;
use crate::forces::{AxisSignGravity, DirectGravity};
use crate::integrator::{ExplicitEuler, Integrator};
use crate::physics::gravitational_force;
use crate::state::SystemState;

fn body(mass: f64, x: f64, y: f64) -> Body {
    Body::new(mass, 1.0e6, Point2::new(x, y), Vector2::zeros()).unwrap()
}

fn two_body_state() -> SystemState {
    SystemState::from_bodies(vec![body(1.0e24, 0.0, 0.0), body(1.0e24, 1.0e8, 0.0)])
}

fn three_body_line() -> SystemState {
    SystemState::from_bodies(vec![
        body(1.0e24, 0.0, 0.0),
        body(1.0e24, 1.0e7, 0.0),
        body(1.0e24, 2.0e7, 0.0),
    ])
}

#[test]
fn test_two_bodies_accelerate_toward_each_other() {
    for ordering in [TickOrdering::Sequential, TickOrdering::Synchronous] {
        let mut state = two_body_state();
        ExplicitEuler::new(ordering)
            .step(&mut state, 20.0, &AxisSignGravity)
            .unwrap();

        assert!(state.bodies[0].velocity.x > 0.0);
        assert!(state.bodies[1].velocity.x < 0.0);
    }
}

#[test]
fn test_synchronous_two_body_acceleration_magnitude() {
    let mut state = two_body_state();
    let dt = 20.0;

    ExplicitEuler::new(TickOrdering::Synchronous)
        .step(&mut state, dt, &AxisSignGravity)
        .unwrap();

    let expected = gravitational_force(1.0e24, 1.0e24, 1.0e8).unwrap() / 1.0e24 * dt;
    assert_relative_eq!(state.bodies[0].velocity.x, expected, max_relative = 1e-12);
    assert_relative_eq!(state.bodies[1].velocity.x, -expected, max_relative = 1e-12);
}

#[test]
fn test_synchronous_conserves_momentum_in_one_step() {
    let mut state = three_body_line();
    ExplicitEuler::new(TickOrdering::Synchronous)
        .step(&mut state, 20.0, &DirectGravity)
        .unwrap();

    let p = state.total_momentum();
    let scale = state.bodies[0].momentum().magnitude();
    assert!(p.magnitude() <= scale * 1e-12);
}

#[test]
fn test_orderings_differ_when_bodies_see_moved_neighbours() {
    let mut sequential = three_body_line();
    let mut synchronous = three_body_line();

    ExplicitEuler::new(TickOrdering::Sequential)
        .step(&mut sequential, 100.0, &AxisSignGravity)
        .unwrap();
    ExplicitEuler::new(TickOrdering::Synchronous)
        .step(&mut synchronous, 100.0, &AxisSignGravity)
        .unwrap();

    // The first body sees the same start-of-tick state in both orderings
    assert_eq!(sequential.bodies[0].velocity, synchronous.bodies[0].velocity);
    // The last body sees already-moved neighbours only in sequential order
    assert_ne!(sequential.bodies[2].velocity, synchronous.bodies[2].velocity);
}

#[test]
fn test_anchor_is_never_moved() {
    let anchor = Body::anchored(1.0, 1.0e6, Point2::new(0.0, 0.0)).unwrap();
    let mut state = SystemState::from_bodies(vec![anchor, body(1.0e30, 1.0e7, 0.0)]);

    for ordering in [TickOrdering::Sequential, TickOrdering::Synchronous] {
        ExplicitEuler::new(ordering)
            .integrate(&mut state, 20.0, 5, &AxisSignGravity)
            .unwrap();
        assert_eq!(state.bodies[0].position, Point2::new(0.0, 0.0));
        assert_eq!(state.bodies[0].velocity, Vector2::zeros());
    }
}

#[test]
fn test_degenerate_state_is_reported() {
    let mut state = SystemState::from_bodies(vec![body(1.0, 3.0, 3.0), body(1.0, 3.0, 3.0)]);

    let result = ExplicitEuler::default().step(&mut state, 20.0, &AxisSignGravity);
    assert!(matches!(
        result,
        Err(SimError::DegenerateConfiguration { .. })
    ));
}

#[test]
fn test_invalid_time_step() {
    let mut state = two_body_state();
    let result = ExplicitEuler::default().step(&mut state, 0.0, &AxisSignGravity);
    assert_eq!(result, Err(SimError::InvalidTimeStep(0.0)));
}

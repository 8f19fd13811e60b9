use approx::{assert_abs_diff_eq, assert_relative_eq};
use nalgebra::Point2;
use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

use crate::error::SimError;
use crate::physics::*;

#[test]
fn test_force_known_value() {
    // 1 kg and 1 kg at 1 m
    assert_relative_eq!(gravitational_force(1.0, 1.0, 1.0).unwrap(), G);

    let f = gravitational_force(1.0e24, 1.0e24, 1.0e8).unwrap();
    assert_relative_eq!(f, G * 1.0e48 / 1.0e16, max_relative = 1e-12);
}

#[test]
fn test_force_symmetric_in_masses() {
    let f1 = gravitational_force(3.0e20, 7.0e22, 4.0e6).unwrap();
    let f2 = gravitational_force(7.0e22, 3.0e20, 4.0e6).unwrap();
    assert_relative_eq!(f1, f2, max_relative = 1e-12);
}

#[test]
fn test_force_decreases_with_distance() {
    let forces: Vec<f64> = [0.5, 1.0, 2.0, 10.0, 1.0e6]
        .iter()
        .map(|&r| gravitational_force(5.0, 5.0, r).unwrap())
        .collect();

    assert!(forces.windows(2).all(|w| w[0] > w[1]));
}

#[test]
fn test_force_grows_without_bound_near_zero() {
    let far = gravitational_force(1.0, 1.0, 1.0e-3).unwrap();
    let near = gravitational_force(1.0, 1.0, 1.0e-6).unwrap();
    assert!(near > far * 1.0e5);
}

#[test]
fn test_force_rejects_degenerate_separation() {
    for r in [0.0, -1.0, f64::NAN] {
        assert!(matches!(
            gravitational_force(1.0, 1.0, r),
            Err(SimError::ZeroSeparation { .. })
        ));
    }
}

#[test]
fn test_distance() {
    let d = distance(Point2::new(1.0, 1.0), Point2::new(4.0, 5.0));
    assert_eq!(d, 5.0);
    assert_eq!(distance(Point2::new(2.0, 3.0), Point2::new(2.0, 3.0)), 0.0);
}

#[test]
fn test_unsigned_axis_angle_ignores_quadrant() {
    let origin = Point2::new(0.0, 0.0);

    for target in [
        Point2::new(1.0, 1.0),
        Point2::new(-1.0, 1.0),
        Point2::new(-1.0, -1.0),
        Point2::new(1.0, -1.0),
    ] {
        assert_relative_eq!(unsigned_axis_angle(origin, target).unwrap(), FRAC_PI_4);
    }
}

#[test]
fn test_unsigned_axis_angle_on_axes() {
    let origin = Point2::new(0.0, 0.0);
    assert_eq!(unsigned_axis_angle(origin, Point2::new(-3.0, 0.0)).unwrap(), 0.0);
    assert_relative_eq!(
        unsigned_axis_angle(origin, Point2::new(0.0, -3.0)).unwrap(),
        FRAC_PI_2
    );
    assert!(unsigned_axis_angle(origin, origin).is_err());
}

#[test]
fn test_directed_angle_covers_all_quadrants() {
    let origin = Point2::new(0.0, 0.0);

    assert_abs_diff_eq!(directed_angle(origin, Point2::new(1.0, 0.0)).unwrap(), 0.0);
    assert_relative_eq!(directed_angle(origin, Point2::new(0.0, 1.0)).unwrap(), FRAC_PI_2);
    assert_relative_eq!(directed_angle(origin, Point2::new(-1.0, 0.0)).unwrap(), PI);
    assert_relative_eq!(
        directed_angle(origin, Point2::new(-1.0, -1.0)).unwrap(),
        -3.0 * FRAC_PI_4
    );
    assert!(directed_angle(origin, origin).is_err());
}

#[test]
fn test_direction_sign() {
    assert_eq!(direction_sign(0.0, 5.0), 1.0);
    assert_eq!(direction_sign(5.0, 0.0), -1.0);
    assert_eq!(direction_sign(2.0, 2.0), 1.0);
}

#[test]
fn test_mass_from_density_unit_sphere() {
    assert_relative_eq!(mass_from_density(1.0, 1.0), 4.0 / 3.0 * PI);
}

#[test]
fn test_mass_from_density_scales_with_cube_of_radius() {
    let small = mass_from_density(5.5, 1.0);
    let large = mass_from_density(5.5, 2.0);
    assert_relative_eq!(large / small, 8.0);
    assert_relative_eq!(sphere_volume(3.0), 36.0 * PI, max_relative = 1e-12);
}

#[test]
fn test_force_overflow_is_an_error() {
    // r² underflows to a subnormal and the quotient overflows
    assert_eq!(
        gravitational_force(1.0, 1.0, 1.0e-160),
        Err(SimError::ZeroSeparation {
            separation: 1.0e-160
        })
    );
    // m1·m2 overflows on its own
    assert_eq!(
        gravitational_force(1.0e200, 1.0e200, 10.0),
        Err(SimError::ZeroSeparation { separation: 10.0 })
    );
}

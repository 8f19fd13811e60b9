use nalgebra::{Point2, Vector2};

use crate::body::Body;
use crate::collisions::detection::*;

fn disc(radius: f64, x: f64, y: f64) -> Body {
    Body::new(1.0, radius, Point2::new(x, y), Vector2::zeros()).unwrap()
}

#[test]
fn test_overlap_test_strict() {
    let origin = Point2::new(0.0, 0.0);

    assert!(overlap_test(origin, 1.0, Point2::new(1.0, 0.0), 1.0));
    // Tangent discs are not colliding
    assert!(!overlap_test(origin, 1.0, Point2::new(2.0, 0.0), 1.0));
    assert!(!overlap_test(origin, 1.0, Point2::new(0.0, 5.0), 1.0));
}

#[test]
fn test_overlap_test_symmetric() {
    let cases = [
        (Point2::new(0.0, 0.0), 1.0, Point2::new(0.5, 0.5), 0.2),
        (Point2::new(3.0, -1.0), 0.5, Point2::new(4.0, -1.0), 0.6),
        (Point2::new(3.0, -1.0), 0.5, Point2::new(4.0, -1.0), 0.4),
    ];

    for (a, ra, b, rb) in cases {
        assert_eq!(overlap_test(a, ra, b, rb), overlap_test(b, rb, a, ra));
    }
}

#[test]
fn test_contained_disc_overlaps() {
    assert!(overlap_test(
        Point2::new(0.0, 0.0),
        10.0,
        Point2::new(1.0, 1.0),
        0.5
    ));
}

#[test]
fn test_find_collision_pairs_none() {
    let bodies = vec![disc(1.0, 0.0, 0.0), disc(1.0, 5.0, 0.0), disc(1.0, 0.0, 5.0)];
    assert!(find_collision_pairs(&bodies).is_empty());
}

#[test]
fn test_find_collision_pairs_reports_each_pair_once() {
    let bodies = vec![
        disc(1.0, 0.0, 0.0),
        disc(1.0, 1.5, 0.0),
        disc(1.0, 100.0, 0.0),
        disc(1.0, 0.0, 1.0),
    ];

    let pairs = find_collision_pairs(&bodies);

    // (0,1), (0,3), (1,3)
    assert_eq!(pairs.len(), 3);
    assert_eq!(pairs[0].body_a, bodies[0].id());
    assert_eq!(pairs[0].body_b, bodies[1].id());
    assert_eq!(pairs[1].body_b, bodies[3].id());
    assert_eq!(pairs[2].body_a, bodies[1].id());

    assert_eq!(pairs[0].separation, 1.5);
    assert_eq!(pairs[0].overlap, 0.5);
    assert!(pairs.iter().all(|p| p.overlap > 0.0));
}

#[test]
fn test_find_collision_pairs_diagonal_overlap() {
    // Bounding boxes overlap but discs do not
    let bodies = vec![disc(1.0, 0.0, 0.0), disc(1.0, 1.5, 1.5)];
    assert!(find_collision_pairs(&bodies).is_empty());

    let bodies = vec![disc(1.0, 0.0, 0.0), disc(1.0, 1.2, 1.2)];
    assert_eq!(find_collision_pairs(&bodies).len(), 1);
}

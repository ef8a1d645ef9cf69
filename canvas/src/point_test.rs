#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn point_new() {
    let p = Point::new(3.0, 4.0);
    assert_eq!(p.x, 3.0);
    assert_eq!(p.y, 4.0);
}

#[test]
fn point_default_is_origin() {
    assert_eq!(Point::default(), Point::new(0.0, 0.0));
}

#[test]
fn distance_is_euclidean() {
    assert_eq!(Point::new(0.0, 0.0).distance(Point::new(3.0, 4.0)), 5.0);
}

#[test]
fn distance_is_symmetric() {
    let a = Point::new(-2.5, 7.0);
    let b = Point::new(10.0, -1.0);
    assert_eq!(a.distance(b), b.distance(a));
    assert_eq!(a.distance(a), 0.0);
}

use super::*;
use crate::track::LayerId;

fn track(x1: i64, y1: i64, x2: i64, y2: i64) -> Track {
    Track::new(Point::new(x1, y1), Point::new(x2, y2), LayerId(0))
}

fn endpoints(t: &Track) -> (Point, Point) {
    (t.start, t.end)
}

#[test]
fn test_connect_horizontal_vertical() {
    let mut h = track(0, 0, 10, 0);
    let mut v = track(5, -5, 5, 5);

    let point = connect(&mut [&mut h, &mut v]).unwrap();
    assert_eq!(point, Point::new(5, 0));

    // Both endpoints are equidistant, so start moves
    assert_eq!(endpoints(&h), (Point::new(5, 0), Point::new(10, 0)));
    assert_eq!(endpoints(&v), (Point::new(5, 0), Point::new(5, 5)));
}

#[test]
fn test_connect_extends_toward_corner() {
    // Classic L: horizontal stops short, vertical starts below
    let mut h = track(0, 0, 8, 0);
    let mut v = track(10, 3, 10, 20);

    connect_pair(&mut h, &mut v).unwrap();
    assert_eq!(endpoints(&h), (Point::new(0, 0), Point::new(10, 0)));
    assert_eq!(endpoints(&v), (Point::new(10, 0), Point::new(10, 20)));
}

#[test]
fn test_connect_parallel_fails_untouched() {
    let mut a = track(0, 0, 10, 0);
    let mut b = track(0, 5, 10, 5);
    let (before_a, before_b) = (a.clone(), b.clone());

    let err = connect(&mut [&mut a, &mut b]).unwrap_err();
    assert_eq!(err, ConnectError::Parallel);
    assert_eq!(err.kind(), ErrorKind::NoIntersection);
    assert_eq!(a, before_a);
    assert_eq!(b, before_b);
}

#[test]
fn test_connect_colinear_merges() {
    let mut a = track(0, 0, 5, 0);
    let mut b = track(8, 0, 12, 0);

    let point = connect(&mut [&mut a, &mut b]).unwrap();
    assert_eq!(point, Point::new(5, 0));
    assert_eq!(endpoints(&a), (Point::new(0, 0), Point::new(5, 0)));
    assert_eq!(endpoints(&b), (Point::new(5, 0), Point::new(12, 0)));
}

#[test]
fn test_connect_colinear_slanted() {
    let mut a = track(0, 0, 2, 2);
    let mut b = track(6, 6, 4, 4);

    // Nearest endpoint of `a` to b.start (6, 6) is (2, 2)
    let point = connect_pair(&mut a, &mut b).unwrap();
    assert_eq!(point, Point::new(2, 2));
    assert_eq!(endpoints(&a), (Point::new(0, 0), Point::new(2, 2)));
    assert_eq!(endpoints(&b), (Point::new(6, 6), Point::new(2, 2)));
}

#[test]
fn test_connect_slanted_cross() {
    let mut a = track(0, 0, 4, 4);
    let mut b = track(0, 4, 4, 0);

    let point = connect(&mut [&mut a, &mut b]).unwrap();
    assert_eq!(point, Point::new(2, 2));
    assert!(a.start == point || a.end == point);
    assert!(b.start == point || b.end == point);
}

#[test]
fn test_connect_wrong_count() {
    let mut a = track(0, 0, 10, 0);
    let mut b = track(5, -5, 5, 5);
    let mut c = track(0, 3, 10, 9);
    let before = (a.clone(), b.clone(), c.clone());

    let err = connect(&mut [&mut a]).unwrap_err();
    assert_eq!(err, ConnectError::WrongCount(1));
    assert_eq!(err.kind(), ErrorKind::Precondition);

    let err = connect(&mut [&mut a, &mut b, &mut c]).unwrap_err();
    assert_eq!(err, ConnectError::WrongCount(3));
    assert_eq!(err.kind(), ErrorKind::Precondition);

    assert_eq!(connect(&mut []).unwrap_err(), ConnectError::WrongCount(0));
    assert_eq!((a, b, c), before);
}

#[test]
fn test_connect_layer_mismatch() {
    let mut a = track(0, 0, 10, 0);
    let mut b = Track::new(Point::new(5, -5), Point::new(5, 5), LayerId(31));
    let (before_a, before_b) = (a.clone(), b.clone());

    let err = connect_pair(&mut a, &mut b).unwrap_err();
    assert_eq!(err, ConnectError::LayerMismatch { a: LayerId(0), b: LayerId(31) });
    assert_eq!(err.kind(), ErrorKind::Precondition);
    assert_eq!(a, before_a);
    assert_eq!(b, before_b);
}

#[test]
fn test_connect_truncated_point_shared_by_both() {
    // Lines meet at (1.5, 1.5); both tracks must land on the same truncated point
    let mut a = track(-10, -10, 0, 0);
    let mut b = track(3, 0, 10, -7);

    let point = connect_pair(&mut a, &mut b).unwrap();
    assert_eq!(point, Point::new(1, 1));
    assert_eq!(a.end, point);
    assert_eq!(b.start, point);
}

#[test]
fn test_connect_nearly_parallel_fails_untouched() {
    // Both within a metre of the origin, but the lines meet around x = 1e24
    let mut a = track(-1_000_000_000, -1, 1_000_000_000, 1);
    let mut b = track(0, 1_000_000, 1_000_000_001, 1_000_001);
    let (before_a, before_b) = (a.clone(), b.clone());

    let err = connect(&mut [&mut a, &mut b]).unwrap_err();
    assert_eq!(err, ConnectError::OutOfRange);
    assert_eq!(err.kind(), ErrorKind::NoIntersection);
    assert_eq!(err.code(), "INTERSECTION_OUT_OF_RANGE");
    assert_eq!(a, before_a);
    assert_eq!(b, before_b);
}

#[test]
fn test_connect_far_apart_coordinates() {
    let mut h = track(-5_000_000_000_000_000_000, 0, 5_000_000_000_000_000_000, 0);
    let mut v = track(6_000_000_000_000_000_000, -1, 6_000_000_000_000_000_000, 1);

    let point = connect_pair(&mut h, &mut v).unwrap();
    assert_eq!(point, Point::new(6_000_000_000_000_000_000, 0));
    assert_eq!(h.start, Point::new(-5_000_000_000_000_000_000, 0));
    assert_eq!(h.end, point);
    assert_eq!(v.start, point);
    assert_eq!(v.end, Point::new(6_000_000_000_000_000_000, 1));
}

#[test]
fn test_connect_twice_is_stable() {
    let mut a = track(0, 0, 8, 0);
    let mut b = track(10, 3, 10, 20);
    connect_pair(&mut a, &mut b).unwrap();
    let (after_a, after_b) = (a.clone(), b.clone());

    connect_pair(&mut a, &mut b).unwrap();
    assert_eq!(a, after_a);
    assert_eq!(b, after_b);
}

#[test]
fn test_error_messages() {
    assert_eq!(
        ConnectError::WrongCount(3).to_string(),
        "Wrong amount of tracks, must select 2 (got 3)."
    );
    assert_eq!(
        ConnectError::LayerMismatch { a: LayerId(0), b: LayerId(31) }.to_string(),
        "Tracks are on different layers (layer 0 and layer 31)."
    );
    assert_eq!(ConnectError::Parallel.to_string(), "Lines are parallel and won't connect.");
    assert_eq!(ConnectError::Parallel.code(), "PARALLEL_TRACKS");
}

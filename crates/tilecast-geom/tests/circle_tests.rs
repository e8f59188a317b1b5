// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![allow(missing_docs, clippy::unwrap_used)]
//! Circle construction, radius validation and circle/point/circle queries.

use tilecast_geom::{Circle, Collide, Distance, GeomError, Rect, Vec2};

#[test]
fn negative_radius_is_rejected() {
    assert_eq!(
        Circle::new(Vec2::new(0.0_f32, 0.0), -1.0),
        Err(GeomError::NegativeRadius { radius: -1.0 })
    );
    assert!(Circle::new(Vec2::new(0.0_f32, 0.0), f32::NAN).is_err());

    let mut c = Circle::new(Vec2::new(0.0_f32, 0.0), 2.0).unwrap();
    assert_eq!(
        c.set_radius(-1.0),
        Err(GeomError::NegativeRadius { radius: -1.0 })
    );
    assert_eq!(c.radius(), 2.0, "a rejected radius leaves the circle as it was");
    assert_eq!(c.set_radius(3.0), Ok(()));
    assert_eq!(c.radius(), 3.0);
}

#[test]
fn error_message_names_the_value() {
    let err = Circle::new(Vec2::new(0.0_f64, 0.0), -1.5).unwrap_err();
    assert!(err.to_string().contains("-1.5"));
}

#[test]
fn point_on_the_circle_is_inclusive_only() {
    let c = Circle::new(Vec2::new(0.0_f32, 0.0), 5.0).unwrap();
    let p = Vec2::new(3.0, 4.0);
    assert!(c.collide(&p));
    assert!(!c.collide_i(&p));
    assert!(p.collide(&c));
    assert!(c.collide_i(&Vec2::new(1.0, 1.0)));
}

#[test]
fn zero_radius_matches_only_its_center() {
    let c = Circle::new(Vec2::new(1.0_f32, 1.0), 0.0).unwrap();
    assert!(c.collide(&Vec2::new(1.0, 1.0)));
    assert!(!c.collide_i(&Vec2::new(1.0, 1.0)));
    assert!(!c.collide(&Vec2::new(1.0, 1.001)));
}

#[test]
fn circles_touching_externally() {
    let a = Circle::new(Vec2::new(0.0_f32, 0.0), 2.0).unwrap();
    let b = Circle::new(Vec2::new(5.0, 0.0), 3.0).unwrap();
    assert!(a.collide(&b));
    assert!(!a.collide_i(&b));
    let far = Circle::new(Vec2::new(10.0, 0.0), 3.0).unwrap();
    assert_eq!(a.distance(&far), 5.0);
    assert_eq!(a.distance_squared(&far), 25.0);
    assert_eq!(a.distance(&b), 0.0);
}

#[test]
fn distance_to_points() {
    let c = Circle::new(Vec2::new(0.0_f32, 0.0), 5.0).unwrap();
    assert_eq!(c.distance(&Vec2::new(6.0, 8.0)), 5.0);
    assert_eq!(c.distance(&Vec2::new(1.0, 1.0)), 0.0);
    assert_eq!(Distance::distance(&Vec2::new(6.0, 8.0), &c), 5.0);
}

#[test]
fn move_and_enclose() {
    let mut c = Circle::new(Vec2::new(0.0_f32, 0.0), 1.5).unwrap();
    c.move_to(Vec2::new(2.0, 3.0));
    assert_eq!(c.center, Vec2::new(2.0, 3.0));
    assert_eq!(c.enclosing_rect(), Rect::new(0.5, 1.5, 3.0, 3.0));
}

// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![allow(missing_docs)]
//! Directed interval: ranges, inclusive/exclusive overlap, distance.

use tilecast_geom::{Collide, Distance, Interval};

#[test]
fn range_reports_sorted_bounds_and_direction() {
    let iv = Interval::new(5.0_f32, 1.0);
    assert_eq!(iv.range(), (1.0, 5.0));
    assert_eq!(iv.range_with_direction(), (1.0, 5.0, true));
    assert_eq!((iv.left(), iv.right()), (1.0, 5.0));
    assert_eq!(iv.length(), 4.0);
    assert!(!Interval::new(1.0_f32, 5.0).is_reversed());
}

#[test]
fn touching_ranges_collide_only_inclusively() {
    let iv = Interval::new(0.0_f32, 4.0);
    assert!(iv.collide_range(4.0, 8.0));
    assert!(iv.collide_range(8.0, 4.0), "second range is unordered");
    assert!(!iv.collide_range_i(4.0, 8.0));
    assert!(iv.collide_range_i(3.9, 8.0));
    assert!(!iv.collide_range(4.1, 8.0));
}

#[test]
fn reversed_intervals_collide_like_forward_ones() {
    let a = Interval::new(4.0_f64, 0.0);
    let b = Interval::new(6.0_f64, 3.0);
    assert!(a.collide(&b));
    assert!(a.collide_i(&b));
    assert!(b.collide(&a));
}

#[test]
fn point_containment() {
    let iv = Interval::new(4.0_f32, 0.0);
    assert!(iv.contains(4.0));
    assert!(!iv.contains_i(4.0));
    assert!(iv.contains_i(2.0));
    assert!(!iv.contains(-0.5));
}

#[test]
fn point_interval_still_collides() {
    let point = Interval::new(2.0_f32, 2.0);
    assert!(point.collide(&Interval::new(0.0, 4.0)));
    assert!(point.collide_i(&Interval::new(0.0, 4.0)));
    assert!(point.collide(&Interval::new(2.0, 4.0)));
    assert!(!point.collide_i(&Interval::new(2.0, 4.0)));
}

#[test]
fn distance_is_the_gap_between_ranges() {
    let iv = Interval::new(0.0_f32, 4.0);
    assert_eq!(iv.distance(&Interval::new(9.0, 6.0)), 2.0);
    assert_eq!(iv.distance(&Interval::new(-3.0, -1.0)), 1.0);
    assert_eq!(iv.distance(&Interval::new(4.0, 8.0)), 0.0);
    assert_eq!(iv.distance(&Interval::new(3.0, 1.0)), 0.0);
    assert_eq!(iv.distance_squared(&Interval::new(7.0, 8.0)), 9.0);
    assert_eq!(iv.distance_point(-2.0), 2.0);
    assert_eq!(iv.distance_point(3.0), 0.0);
}

#[test]
fn make_positive_swaps_once() {
    let mut iv = Interval::new(3.0_f32, -1.0);
    iv.make_positive();
    assert_eq!(iv, Interval::new(-1.0, 3.0));
    iv.make_positive();
    assert_eq!(iv, Interval::new(-1.0, 3.0));
    assert_eq!(Interval::new(3.0_f32, -1.0).positive(), iv);
}

#[test]
fn intersection_and_entry_position() {
    let iv = Interval::new(0.0_f32, 10.0);
    let other = Interval::new(12.0, 4.0);
    assert_eq!(iv.collide_range_of(&other), Some(Interval::new(4.0, 10.0)));
    assert_eq!(iv.collide_position(&other), Some(4.0));
    assert_eq!(
        Interval::new(10.0_f32, 0.0).collide_position(&other),
        Some(10.0)
    );
    assert_eq!(iv.collide_range_of(&Interval::new(11.0, 12.0)), None);
    assert_eq!(iv.collide_position(&Interval::new(11.0, 12.0)), None);
}

fn overlaps<A: Collide<B>, B>(a: &A, b: &B) -> (bool, bool) {
    (a.collide(b), a.collide_i(b))
}

#[test]
fn scalar_points_dispatch_through_the_traits() {
    let iv = Interval::new(4.0_f32, 0.0);
    assert_eq!(overlaps(&iv, &4.0_f32), (true, false));
    assert_eq!(overlaps(&iv, &2.0_f32), (true, true));
    assert_eq!(overlaps(&iv, &Interval::new(4.0_f32, 6.0)), (true, false));
    assert_eq!(Distance::distance(&iv, &-2.0_f32), 2.0);
    assert_eq!(Distance::distance_squared(&iv, &7.0_f32), 9.0);
    assert_eq!(Distance::distance(&iv, &3.0_f32), 0.0);
}

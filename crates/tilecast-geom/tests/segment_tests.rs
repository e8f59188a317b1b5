// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![allow(missing_docs, clippy::unwrap_used)]
//! Segment clipping, line evaluation and hit positions.

use tilecast_geom::{Circle, Collide, Interval, Rect, Segment, Vec2};

fn seg(x0: f32, y0: f32, x1: f32, y1: f32) -> Segment<f32> {
    Segment::new(Vec2::new(x0, y0), Vec2::new(x1, y1))
}

fn circle(x: f32, y: f32, r: f32) -> Circle<f32> {
    Circle::new(Vec2::new(x, y), r).unwrap()
}

#[test]
fn cut_by_x_keeps_direction() {
    let forward = seg(0.0, 0.0, 10.0, 10.0);
    assert_eq!(
        forward.cut_by_x(Interval::new(2.0, 5.0)),
        Some(seg(2.0, 2.0, 5.0, 5.0))
    );
    let backward = seg(10.0, 10.0, 0.0, 0.0);
    assert_eq!(
        backward.cut_by_x(Interval::new(5.0, 2.0)),
        Some(seg(5.0, 5.0, 2.0, 2.0))
    );
}

#[test]
fn cut_by_x_misses_disjoint_ranges() {
    assert_eq!(seg(0.0, 0.0, 10.0, 10.0).cut_by_x(Interval::new(11.0, 20.0)), None);
    assert_eq!(seg(0.0, 0.0, 10.0, 10.0).cut_by_y(Interval::new(-3.0, -1.0)), None);
}

#[test]
fn vertical_segment_is_kept_or_dropped_whole() {
    let s = seg(3.0, 0.0, 3.0, 10.0);
    assert_eq!(s.cut_by_x(Interval::new(0.0, 5.0)), Some(s));
    assert_eq!(s.cut_by_x(Interval::new(3.0, 5.0)), Some(s));
    assert_eq!(s.cut_by_x(Interval::new(4.0, 5.0)), None);
}

#[test]
fn single_point_range_yields_a_point_segment() {
    let s = seg(0.0, 0.0, 10.0, 20.0);
    assert_eq!(s.cut_by_x(Interval::new(5.0, 5.0)), Some(seg(5.0, 10.0, 5.0, 10.0)));
}

#[test]
fn cut_by_rect_ignores_rect_orientation() {
    let s = seg(-5.0, 5.0, 15.0, 5.0);
    let expected = Some(seg(0.0, 5.0, 10.0, 5.0));
    assert_eq!(s.cut_by_rect(&Rect::new(0.0, 0.0, 10.0, 10.0)), expected);
    assert_eq!(s.cut_by_rect(&Rect::new(10.0, 10.0, -10.0, -10.0)), expected);
    assert_eq!(s.cut_by_rect(&Rect::new(0.0, 6.0, 10.0, 10.0)), None);
}

#[test]
fn line_evaluation_rejects_degenerate_axes() {
    assert_eq!(seg(3.0, 0.0, 3.0, 10.0).y_on_line_at_x(3.0), None);
    assert_eq!(seg(0.0, 4.0, 10.0, 4.0).x_on_line_at_y(4.0), None);
    let s = seg(0.0, 0.0, 4.0, 2.0);
    assert_eq!(s.y_on_line_at_x(2.0), Some(1.0));
    assert_eq!(s.x_on_line_at_y(3.0), Some(6.0), "evaluates the infinite line");
}

#[test]
fn basic_measures() {
    let s = seg(1.0, 1.0, 4.0, 5.0);
    assert_eq!(s.delta(), Vec2::new(3.0, 4.0));
    assert_eq!(s.length(), 5.0);
    assert_eq!(s.length_squared(), 25.0);
    assert_eq!(s.reversed(), seg(4.0, 5.0, 1.0, 1.0));
    assert_eq!(s.point_at(0.0), s.start);
    assert_eq!(s.point_at(1.0), s.end);
    assert_eq!(seg(5.0, 1.0, 2.0, 7.0).range(), Rect::new(2.0, 1.0, 3.0, 6.0));
}

#[test]
fn segment_rect_inclusive_and_exclusive() {
    let rect = Rect::new(0.0_f32, 0.0, 10.0, 10.0);
    let through = seg(-5.0, 5.0, 15.0, 5.0);
    assert!(through.collide(&rect));
    assert!(through.collide_i(&rect));

    let along_edge = seg(-5.0, 0.0, 15.0, 0.0);
    assert!(along_edge.collide(&rect));
    assert!(!along_edge.collide_i(&rect));

    let ending_on_edge = seg(-5.0, 5.0, 0.0, 5.0);
    assert!(ending_on_edge.collide(&rect));
    assert!(!ending_on_edge.collide_i(&rect));

    let beside = seg(-5.0, -5.0, -1.0, 20.0);
    assert!(!beside.collide(&rect));
    assert_eq!(rect.collide(&beside), beside.collide(&rect));
    assert_eq!(rect.collide_i(&through), through.collide_i(&rect));
}

#[test]
fn collide_position_is_first_contact_from_start() {
    let rect = Rect::new(0.0_f32, 0.0, 10.0, 10.0);
    assert_eq!(
        seg(-10.0, 5.0, 20.0, 5.0).collide_position(&rect),
        Some(Vec2::new(0.0, 5.0))
    );
    assert_eq!(
        seg(20.0, 5.0, -10.0, 5.0).collide_position(&rect),
        Some(Vec2::new(10.0, 5.0))
    );
    assert_eq!(
        seg(5.0, -10.0, 5.0, 20.0).collide_position(&rect),
        Some(Vec2::new(5.0, 0.0))
    );
    assert_eq!(
        seg(5.0, 20.0, 5.0, -10.0).collide_position(&rect),
        Some(Vec2::new(5.0, 10.0))
    );
}

#[test]
fn collide_position_on_diagonals() {
    let rect = Rect::new(0.0_f32, 0.0, 10.0, 10.0);
    assert_eq!(
        seg(-4.0, -2.0, 8.0, 4.0).collide_position(&rect),
        Some(Vec2::new(0.0, 0.0))
    );
    assert_eq!(
        seg(2.0, -6.0, 8.0, 6.0).collide_position(&rect),
        Some(Vec2::new(5.0, 0.0))
    );
    assert_eq!(seg(12.0, -6.0, 18.0, 6.0).collide_position(&rect), None);
    assert_eq!(seg(2.0, -6.0, 8.0, -1.0).collide_position(&rect), None);
}

#[test]
fn segment_circle_inclusive_and_exclusive() {
    let c = circle(0.0, 0.0, 5.0);
    let through = seg(-10.0, 0.0, 10.0, 0.0);
    assert!(through.collide(&c));
    assert!(through.collide_i(&c));

    let tangent = seg(-10.0, 5.0, 10.0, 5.0);
    assert!(tangent.collide(&c));
    assert!(!tangent.collide_i(&c));

    let ends_on_circle = seg(-10.0, 0.0, -5.0, 0.0);
    assert!(ends_on_circle.collide(&c));
    assert!(!ends_on_circle.collide_i(&c));

    let chord = seg(-5.0, 0.0, 5.0, 0.0);
    assert!(chord.collide_i(&c));

    assert!(!seg(-10.0, 6.0, 10.0, 6.0).collide(&c));
    assert!(seg(1.0, 1.0, 1.0, 1.0).collide_i(&c));
    assert_eq!(c.collide(&tangent), tangent.collide(&c));
}

#[test]
fn outline_tests_ignore_the_interior() {
    let c = circle(0.0, 0.0, 5.0);
    let inside = seg(-1.0, 0.0, 1.0, 0.0);
    assert!(inside.collide(&c));
    assert!(!inside.collide_o(&c));
    assert!(!inside.collide_oi(&c));

    let crossing = seg(0.0, 0.0, 10.0, 0.0);
    assert!(crossing.collide_o(&c));
    assert!(crossing.collide_oi(&c));

    let tangent = seg(-10.0, 5.0, 10.0, 5.0);
    assert!(tangent.collide_o(&c));
    assert!(!tangent.collide_oi(&c));

    assert!(seg(3.0, 4.0, 3.0, 4.0).collide_o(&c));
    assert!(!seg(1.0, 1.0, 1.0, 1.0).collide_o(&c));
}

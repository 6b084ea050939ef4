// Copyright 2024 the Geom SVG Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Reference fragments for every geometry kind.

use anyhow::Result;
use geom_svg::kurbo;
use geom_svg::{svg, Linestring, Point, Rect, Ring};
use geom_svg_tests::{polygon, ring, snapshot_test};

#[test]
fn point_default_radius() -> Result<()> {
    snapshot_test("point_default_radius", &svg(&Point::new(3, 4), "fill:red"))?.assert_matches()
}

#[test]
fn point_sized() -> Result<()> {
    let point = Point::new(12.5, -3.25);
    snapshot_test("point_sized", &svg(&point, "fill:blue;stroke:none").with_size(2))?
        .assert_matches()
}

#[test]
fn box_simple() -> Result<()> {
    let rect = Rect::new(Point::new(0, 0), Point::new(10, 5));
    snapshot_test("box_simple", &svg(&rect, "stroke:black"))?.assert_matches()
}

#[test]
fn box_inverted() -> Result<()> {
    let rect = Rect::new(Point::new(10, 5), Point::new(0, 0));
    snapshot_test("box_inverted", &svg(&rect, "stroke:black"))?.assert_matches()
}

#[test]
fn linestring() -> Result<()> {
    let line = Linestring::from(vec![Point::new(0, 0), Point::new(1, 1), Point::new(2, 0)]);
    snapshot_test("linestring", &svg(&line, "stroke:blue"))?.assert_matches()
}

#[test]
fn ring_square() -> Result<()> {
    let ring = Ring::from(vec![
        Point::new(0, 0),
        Point::new(1, 0),
        Point::new(1, 1),
        Point::new(0, 1),
    ]);
    snapshot_test("ring_square", &svg(&ring, "fill:green"))?.assert_matches()
}

#[test]
fn polygon_with_hole() -> Result<()> {
    let polygon = polygon(
        &[(0, 0), (4, 0), (4, 4), (0, 4)],
        &[&[(1, 1), (2, 1), (2, 2), (1, 2)]],
    );
    snapshot_test("polygon_with_hole", &svg(&polygon, "fill:gray"))?.assert_matches()
}

#[test]
fn polygon_two_holes() -> Result<()> {
    let polygon = polygon(
        &[(0, 0), (10, 0), (10, 10), (0, 10)],
        &[
            &[(1, 1), (3, 1), (3, 3), (1, 3)],
            &[(6, 6), (8, 6), (8, 8)],
        ],
    );
    snapshot_test(
        "polygon_two_holes",
        &svg(&polygon, "fill:orange;stroke:black"),
    )?
    .assert_matches()
}

#[test]
fn polygon_empty() -> Result<()> {
    let polygon = polygon(&[], &[]);
    snapshot_test("polygon_empty", &svg(&polygon, ""))?.assert_matches()
}

#[test]
fn ring_empty() -> Result<()> {
    snapshot_test("ring_empty", &svg(&ring(&[]), "fill:green"))?.assert_matches()
}

#[test]
fn kurbo_rect() -> Result<()> {
    let rect = kurbo::Rect::new(1.5, 2.0, 4.0, 8.5);
    snapshot_test("kurbo_rect", &svg(&rect, "fill:none;stroke:red"))?.assert_matches()
}

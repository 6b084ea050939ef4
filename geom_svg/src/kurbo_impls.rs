// Copyright 2024 the Geom SVG Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Geometry support for kurbo types.

use peniko::kurbo::{Line, Point, Rect};

use crate::kind::{Geometry, LinestringTag, PointTag, RectTag};
use crate::point::PointLike;
use crate::range::PointRange;
use crate::rect::RectLike;

impl PointLike for Point {
    type Scalar = f64;

    fn x(&self) -> f64 {
        self.x
    }

    fn y(&self) -> f64 {
        self.y
    }
}

impl Geometry for Point {
    type Tag = PointTag;
}

/// `(x0, y0)` is the minimum corner and `(x1, y1)` the maximum corner, as
/// stored; call [`Rect::abs`] first to encode a normalized rectangle.
impl RectLike for Rect {
    type Point = Point;

    fn min_corner(&self) -> Point {
        Point::new(self.x0, self.y0)
    }

    fn max_corner(&self) -> Point {
        Point::new(self.x1, self.y1)
    }
}

impl Geometry for Rect {
    type Tag = RectTag;
}

impl PointRange for Line {
    type Point = Point;
    type Iter<'a> = core::array::IntoIter<&'a Point, 2>;

    fn points(&self) -> Self::Iter<'_> {
        [&self.p0, &self.p1].into_iter()
    }
}

impl Geometry for Line {
    type Tag = LinestringTag;
}

#[cfg(test)]
mod tests {
    use peniko::kurbo::{Line, Point, Rect};

    use crate::svg;

    #[test]
    fn kurbo_point() {
        assert_eq!(
            svg(&Point::new(3.0, 4.0), "fill:red").to_string(),
            r#"<circle cx="3" cy="4" r="5" style="fill:red"/>"#
        );
    }

    #[test]
    fn kurbo_rect() {
        assert_eq!(
            svg(&Rect::new(0.0, 0.0, 10.0, 5.0), "stroke:black").to_string(),
            r#"<rect x="0" y="0" width="10" height="5" style="stroke:black"/>"#
        );
        assert_eq!(
            svg(&Rect::new(10.0, 5.0, 0.0, 0.0), "").to_string(),
            r#"<rect x="10" y="5" width="10" height="5" style=""/>"#
        );
        assert_eq!(
            svg(&Rect::new(10.0, 5.0, 0.0, 0.0).abs(), "").to_string(),
            r#"<rect x="0" y="0" width="10" height="5" style=""/>"#
        );
    }

    #[test]
    fn kurbo_line() {
        assert_eq!(
            svg(&Line::new((0.0, 0.5), (2.0, 1.0)), "stroke:green").to_string(),
            r#"<polyline points="0,0.5 2,1" style="stroke:green;fill:none"/>"#
        );
    }
}

// Copyright 2024 the Geom SVG Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt::{self, Write};

use crate::point::{write_coords, PointLike};

/// An ordered sequence of points.
///
/// Implemented by both open paths and closed rings; which one a type is gets
/// decided by its [`Geometry::Tag`](crate::Geometry::Tag).
pub trait PointRange {
    /// Type of the points.
    type Point: PointLike;

    /// Iterator over the points, in order.
    type Iter<'a>: Iterator<Item = &'a Self::Point>
    where
        Self: 'a;

    /// Returns the points in order.
    fn points(&self) -> Self::Iter<'_>;
}

impl<P: PointLike> PointRange for [P] {
    type Point = P;
    type Iter<'a>
        = core::slice::Iter<'a, P>
    where
        Self: 'a;

    fn points(&self) -> Self::Iter<'_> {
        self.iter()
    }
}

impl<P: PointLike, const N: usize> PointRange for [P; N] {
    type Point = P;
    type Iter<'a>
        = core::slice::Iter<'a, P>
    where
        Self: 'a;

    fn points(&self) -> Self::Iter<'_> {
        self.iter()
    }
}

impl<P: PointLike> PointRange for Vec<P> {
    type Point = P;
    type Iter<'a>
        = core::slice::Iter<'a, P>
    where
        Self: 'a;

    fn points(&self) -> Self::Iter<'_> {
        self.iter()
    }
}

/// Element name and style suffix of a point range primitive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RangeFlavor {
    /// Name of the emitted element.
    pub element: &'static str,
    /// Appended to the caller's style.
    pub style_suffix: &'static str,
}

impl RangeFlavor {
    /// Open paths, emitted as `polyline`. They never get an implicit fill.
    pub const LINESTRING: Self = Self {
        element: "polyline",
        style_suffix: ";fill:none",
    };

    /// Closed rings, emitted as `polygon` with the style untouched.
    pub const RING: Self = Self {
        element: "polygon",
        style_suffix: "",
    };
}

/// Encodes a sequence of points as a `points` list element.
///
/// `size` is ignored.
pub fn encode_range<W, R>(
    out: &mut W,
    range: &R,
    flavor: RangeFlavor,
    style: &str,
    _size: i32,
) -> fmt::Result
where
    W: Write + ?Sized,
    R: PointRange + ?Sized,
{
    write!(out, "<{} points=\"", flavor.element)?;
    let mut first = true;
    for point in range.points() {
        if !first {
            out.write_char(' ')?;
        }
        first = false;
        write_coords(out, point)?;
    }
    write!(out, "\" style=\"{style}{}\"/>", flavor.style_suffix)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encoded<R: PointRange + ?Sized>(range: &R, flavor: RangeFlavor, style: &str) -> String {
        let mut out = String::new();
        encode_range(&mut out, range, flavor, style, -1).unwrap();
        out
    }

    #[test]
    fn linestring() {
        assert_eq!(
            encoded(&[[0, 0], [1, 1], [2, 0]], RangeFlavor::LINESTRING, "stroke:blue"),
            r#"<polyline points="0,0 1,1 2,0" style="stroke:blue;fill:none"/>"#
        );
    }

    #[test]
    fn ring() {
        let ring = vec![(0, 0), (1, 0), (1, 1), (0, 1)];
        assert_eq!(
            encoded(&ring, RangeFlavor::RING, "fill:green"),
            r#"<polygon points="0,0 1,0 1,1 0,1" style="fill:green"/>"#
        );
    }

    #[test]
    fn empty_range() {
        let empty: &[[f64; 2]] = &[];
        assert_eq!(
            encoded(empty, RangeFlavor::RING, "fill:green"),
            r#"<polygon points="" style="fill:green"/>"#
        );
        assert_eq!(
            encoded(empty, RangeFlavor::LINESTRING, ""),
            r#"<polyline points="" style=";fill:none"/>"#
        );
    }

    #[test]
    fn single_point_has_no_separator() {
        assert_eq!(
            encoded(&[[0.25, 8.0]], RangeFlavor::LINESTRING, "stroke:red"),
            r#"<polyline points="0.25,8" style="stroke:red;fill:none"/>"#
        );
    }
}

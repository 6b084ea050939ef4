// Copyright 2024 the Geom SVG Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt::{self, Write};

use crate::point::{abs_diff, PointLike};

/// Read access to the two corners of an axis-aligned box.
pub trait RectLike {
    /// Type of both corners.
    type Point: PointLike;

    /// Returns the corner the rectangle is positioned at.
    fn min_corner(&self) -> Self::Point;

    /// Returns the opposite corner.
    fn max_corner(&self) -> Self::Point;
}

/// Encodes a box as a `rect` element.
///
/// The origin is the minimum corner as given, and the extent is the absolute
/// difference between the corners, so boxes with swapped corners still get a
/// non-negative width and height. The origin is not re-sorted in that case.
///
/// `size` is ignored.
pub fn encode_rect<W, R>(out: &mut W, rect: &R, style: &str, _size: i32) -> fmt::Result
where
    W: Write + ?Sized,
    R: RectLike + ?Sized,
{
    let min = rect.min_corner();
    let max = rect.max_corner();
    let (x, y) = (min.x(), min.y());
    if max.x() < x || max.y() < y {
        log::debug!("Box corners are inverted, origin ({x},{y}) is not the lower corner");
    }
    let width = abs_diff(max.x(), x);
    let height = abs_diff(max.y(), y);
    write!(
        out,
        "<rect x=\"{x}\" y=\"{y}\" width=\"{width}\" height=\"{height}\" style=\"{style}\"/>"
    )
}

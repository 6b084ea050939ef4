// Copyright 2024 the Geom SVG Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt::{self, Display, Write};
use core::ops::Sub;

/// Radius of a point marker when no size is given.
pub const DEFAULT_POINT_RADIUS: i32 = 5;

/// A scalar usable as a coordinate.
///
/// Coordinates are written with their [`Display`] implementation, so the output
/// uses the native representation of the scalar: `3_i32` and `3.0_f64` both
/// render as `3`, while `0.5_f32` renders as `0.5`.
///
/// This is implemented for every type satisfying the bounds, which covers all
/// primitive integers and floats.
pub trait Coordinate: Copy + PartialOrd + Sub<Output = Self> + Display {}

impl<T: Copy + PartialOrd + Sub<Output = T> + Display> Coordinate for T {}

/// Absolute difference that never underflows unsigned scalars.
pub(crate) fn abs_diff<T: Coordinate>(a: T, b: T) -> T {
    if a >= b {
        a - b
    } else {
        b - a
    }
}

/// Read access to the two coordinates of a point.
pub trait PointLike {
    /// Scalar type of both coordinates.
    type Scalar: Coordinate;

    /// Returns the x coordinate.
    fn x(&self) -> Self::Scalar;

    /// Returns the y coordinate.
    fn y(&self) -> Self::Scalar;
}

impl<T: Coordinate> PointLike for [T; 2] {
    type Scalar = T;

    fn x(&self) -> T {
        self[0]
    }

    fn y(&self) -> T {
        self[1]
    }
}

impl<T: Coordinate> PointLike for (T, T) {
    type Scalar = T;

    fn x(&self) -> T {
        self.0
    }

    fn y(&self) -> T {
        self.1
    }
}

/// Writes `x,y`.
pub(crate) fn write_coords<W, P>(out: &mut W, point: &P) -> fmt::Result
where
    W: Write + ?Sized,
    P: PointLike + ?Sized,
{
    write!(out, "{},{}", point.x(), point.y())
}

/// Encodes a point as a `circle` marker.
///
/// The radius is `size` when it is non-negative, and [`DEFAULT_POINT_RADIUS`]
/// otherwise.
pub fn encode_point<W, P>(out: &mut W, point: &P, style: &str, size: i32) -> fmt::Result
where
    W: Write + ?Sized,
    P: PointLike + ?Sized,
{
    let radius = if size < 0 { DEFAULT_POINT_RADIUS } else { size };
    write!(
        out,
        "<circle cx=\"{}\" cy=\"{}\" r=\"{radius}\" style=\"{style}\"/>",
        point.x(),
        point.y()
    )
}

// Copyright 2024 the Geom SVG Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ready-made geometry types.

use crate::kind::{Geometry, LinestringTag, PointTag, PolygonTag, RectTag, RingTag};
use crate::point::{Coordinate, PointLike};
use crate::polygon::PolygonLike;
use crate::range::PointRange;
use crate::rect::RectLike;

/// A two-dimensional point.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point<T> {
    pub x: T,
    pub y: T,
}

impl<T> Point<T> {
    /// Creates a new point.
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }
}

impl<T> From<(T, T)> for Point<T> {
    fn from((x, y): (T, T)) -> Self {
        Self { x, y }
    }
}

impl<T> From<[T; 2]> for Point<T> {
    fn from([x, y]: [T; 2]) -> Self {
        Self { x, y }
    }
}

impl<T: Coordinate> PointLike for Point<T> {
    type Scalar = T;

    fn x(&self) -> T {
        self.x
    }

    fn y(&self) -> T {
        self.y
    }
}

impl<T: Coordinate> Geometry for Point<T> {
    type Tag = PointTag;
}

impl<T: Coordinate> Geometry for [T; 2] {
    type Tag = PointTag;
}

impl<T: Coordinate> Geometry for (T, T) {
    type Tag = PointTag;
}

/// An axis-aligned box given by two corners.
///
/// The corners are kept as given and are not normalized.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect<P> {
    pub min: P,
    pub max: P,
}

impl<P> Rect<P> {
    /// Creates a new box from its minimum and maximum corners.
    pub const fn new(min: P, max: P) -> Self {
        Self { min, max }
    }
}

impl<P: PointLike + Clone> RectLike for Rect<P> {
    type Point = P;

    fn min_corner(&self) -> P {
        self.min.clone()
    }

    fn max_corner(&self) -> P {
        self.max.clone()
    }
}

impl<P: PointLike + Clone> Geometry for Rect<P> {
    type Tag = RectTag;
}

macro_rules! point_sequence {
    ($(#[$meta:meta])* $name:ident, $tag:ty) => {
        $(#[$meta])*
        #[derive(Clone, Debug, Default, PartialEq)]
        pub struct $name<P>(pub Vec<P>);

        impl<P> $name<P> {
            /// Creates an empty sequence.
            pub const fn new() -> Self {
                Self(Vec::new())
            }

            /// Appends a point.
            pub fn push(&mut self, point: impl Into<P>) {
                self.0.push(point.into());
            }

            /// Returns the number of points.
            pub fn len(&self) -> usize {
                self.0.len()
            }

            /// Returns `true` if there are no points.
            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }

            /// Returns the points as a slice.
            pub fn as_slice(&self) -> &[P] {
                &self.0
            }
        }

        impl<P> From<Vec<P>> for $name<P> {
            fn from(points: Vec<P>) -> Self {
                Self(points)
            }
        }

        impl<P> FromIterator<P> for $name<P> {
            fn from_iter<I: IntoIterator<Item = P>>(iter: I) -> Self {
                Self(iter.into_iter().collect())
            }
        }

        impl<P: PointLike> PointRange for $name<P> {
            type Point = P;
            type Iter<'a>
                = core::slice::Iter<'a, P>
            where
                Self: 'a;

            fn points(&self) -> Self::Iter<'_> {
                self.0.iter()
            }
        }

        impl<P: PointLike> Geometry for $name<P> {
            type Tag = $tag;
        }
    };
}

point_sequence!(
    /// An open path through a sequence of points.
    Linestring,
    LinestringTag
);

point_sequence!(
    /// A closed boundary. The last point does not need to repeat the first.
    Ring,
    RingTag
);

/// A polygon: one exterior ring and any number of interior rings (holes).
///
/// Interior rings are expected to lie inside the exterior and not to overlap
/// each other; this is not checked.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Polygon<P> {
    pub exterior: Ring<P>,
    pub interiors: Vec<Ring<P>>,
}

impl<P> Polygon<P> {
    /// Creates a polygon without holes.
    pub const fn new(exterior: Ring<P>) -> Self {
        Self {
            exterior,
            interiors: Vec::new(),
        }
    }

    /// Builder style method for adding a hole.
    #[must_use]
    pub fn with_interior(mut self, interior: Ring<P>) -> Self {
        self.interiors.push(interior);
        self
    }

    /// Adds a hole.
    pub fn push_interior(&mut self, interior: Ring<P>) {
        self.interiors.push(interior);
    }
}

impl<P: PointLike> PolygonLike for Polygon<P> {
    type Ring = Ring<P>;
    type Interiors<'a>
        = core::slice::Iter<'a, Ring<P>>
    where
        Self: 'a;

    fn exterior(&self) -> &Ring<P> {
        &self.exterior
    }

    fn interiors(&self) -> Self::Interiors<'_> {
        self.interiors.iter()
    }
}

impl<P: PointLike> Geometry for Polygon<P> {
    type Tag = PolygonTag;
}

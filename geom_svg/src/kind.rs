// Copyright 2024 the Geom SVG Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Compile-time dispatch from a geometry's kind tag to its encoder.

use core::fmt::{self, Write};

use crate::point::{encode_point, PointLike};
use crate::polygon::{encode_polygon, PolygonLike};
use crate::range::{encode_range, PointRange, RangeFlavor};
use crate::rect::{encode_rect, RectLike};

/// The closed set of geometry kinds.
///
/// This is descriptive only: dispatch goes through the tag types, never
/// through a value of this enum.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GeometryKind {
    Point,
    Rect,
    Linestring,
    Ring,
    Polygon,
}

impl fmt::Display for GeometryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Point => "point",
            Self::Rect => "box",
            Self::Linestring => "linestring",
            Self::Ring => "ring",
            Self::Polygon => "polygon",
        })
    }
}

/// A type that can be written as an SVG fragment.
///
/// The associated tag picks the encoder, and that encoder's capability trait
/// must be implemented as well:
///
/// | Tag               | Required trait   |
/// |-------------------|------------------|
/// | [`PointTag`]      | [`PointLike`]    |
/// | [`RectTag`]       | [`RectLike`]     |
/// | [`LinestringTag`] | [`PointRange`]   |
/// | [`RingTag`]       | [`PointRange`]   |
/// | [`PolygonTag`]    | [`PolygonLike`]  |
///
/// ```
/// use geom_svg::{svg, Geometry, PointLike, PointTag};
///
/// struct LatLng {
///     lat: f64,
///     lng: f64,
/// }
///
/// impl PointLike for LatLng {
///     type Scalar = f64;
///
///     fn x(&self) -> f64 {
///         self.lng
///     }
///
///     fn y(&self) -> f64 {
///         self.lat
///     }
/// }
///
/// impl Geometry for LatLng {
///     type Tag = PointTag;
/// }
///
/// let amsterdam = LatLng { lat: 52.5, lng: 4.75 };
/// assert_eq!(
///     svg(&amsterdam, "fill:red").to_string(),
///     r#"<circle cx="4.75" cy="52.5" r="5" style="fill:red"/>"#
/// );
/// ```
///
/// Declaring a tag without the matching capability does not compile:
///
/// ```compile_fail
/// use geom_svg::{Geometry, RingTag};
///
/// struct NotARing;
///
/// impl Geometry for NotARing {
///     type Tag = RingTag;
/// }
/// ```
pub trait Geometry {
    /// Kind tag selecting the encoder.
    type Tag: GeometryTag<Self>;
}

/// Encoder selection for geometries of type `G`.
///
/// This trait is sealed; the set of kinds is closed.
pub trait GeometryTag<G: ?Sized>: private::Sealed {
    /// The kind this tag stands for.
    const KIND: GeometryKind;

    /// Writes `geometry` to `out`.
    fn encode<W: Write + ?Sized>(out: &mut W, geometry: &G, style: &str, size: i32)
        -> fmt::Result;
}

/// Tag of points, encoded as `circle` markers.
#[derive(Debug)]
pub enum PointTag {}

/// Tag of axis-aligned boxes, encoded as `rect` elements.
#[derive(Debug)]
pub enum RectTag {}

/// Tag of open paths, encoded as `polyline` elements.
#[derive(Debug)]
pub enum LinestringTag {}

/// Tag of closed rings, encoded as `polygon` elements.
#[derive(Debug)]
pub enum RingTag {}

/// Tag of polygons with holes, encoded as an even-odd `path`.
#[derive(Debug)]
pub enum PolygonTag {}

impl<G: PointLike + ?Sized> GeometryTag<G> for PointTag {
    const KIND: GeometryKind = GeometryKind::Point;

    fn encode<W: Write + ?Sized>(out: &mut W, point: &G, style: &str, size: i32) -> fmt::Result {
        encode_point(out, point, style, size)
    }
}

impl<G: RectLike + ?Sized> GeometryTag<G> for RectTag {
    const KIND: GeometryKind = GeometryKind::Rect;

    fn encode<W: Write + ?Sized>(out: &mut W, rect: &G, style: &str, size: i32) -> fmt::Result {
        encode_rect(out, rect, style, size)
    }
}

impl<G: PointRange + ?Sized> GeometryTag<G> for LinestringTag {
    const KIND: GeometryKind = GeometryKind::Linestring;

    fn encode<W: Write + ?Sized>(out: &mut W, range: &G, style: &str, size: i32) -> fmt::Result {
        encode_range(out, range, RangeFlavor::LINESTRING, style, size)
    }
}

impl<G: PointRange + ?Sized> GeometryTag<G> for RingTag {
    const KIND: GeometryKind = GeometryKind::Ring;

    fn encode<W: Write + ?Sized>(out: &mut W, range: &G, style: &str, size: i32) -> fmt::Result {
        encode_range(out, range, RangeFlavor::RING, style, size)
    }
}

impl<G: PolygonLike + ?Sized> GeometryTag<G> for PolygonTag {
    const KIND: GeometryKind = GeometryKind::Polygon;

    fn encode<W: Write + ?Sized>(
        out: &mut W,
        polygon: &G,
        style: &str,
        size: i32,
    ) -> fmt::Result {
        encode_polygon(out, polygon, style, size)
    }
}

/// Encodes `geometry` with the encoder chosen by its kind tag.
pub fn encode<W, G>(out: &mut W, geometry: &G, style: &str, size: i32) -> fmt::Result
where
    W: Write + ?Sized,
    G: Geometry + ?Sized,
{
    log::trace!("Encoding {} as SVG", <G::Tag as GeometryTag<G>>::KIND);
    <G::Tag as GeometryTag<G>>::encode(out, geometry, style, size)
}

mod private {
    #[allow(unnameable_types, reason = "Sealed trait pattern.")]
    pub trait Sealed {}

    impl Sealed for super::PointTag {}
    impl Sealed for super::RectTag {}
    impl Sealed for super::LinestringTag {}
    impl Sealed for super::RingTag {}
    impl Sealed for super::PolygonTag {}
}

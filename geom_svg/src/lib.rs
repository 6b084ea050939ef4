// Copyright 2024 the Geom SVG Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Streaming SVG fragments for generic geometries.
//!
//! Any type can take part in encoding by implementing one of the structural
//! capability traits ([`PointLike`], [`RectLike`], [`PointRange`] or
//! [`PolygonLike`]) and declaring its kind through [`Geometry::Tag`]. The tag
//! selects the encoder statically; there is no runtime type inspection.
//!
//! # Usage
//!
//! ```
//! use geom_svg::{svg, Point, Polygon, Ring};
//!
//! let square = Polygon::new(Ring::from(vec![
//!     Point::new(0, 0),
//!     Point::new(4, 0),
//!     Point::new(4, 4),
//!     Point::new(0, 4),
//! ]))
//! .with_interior(Ring::from(vec![
//!     Point::new(1, 1),
//!     Point::new(2, 1),
//!     Point::new(2, 2),
//!     Point::new(1, 2),
//! ]));
//!
//! let mut out = Vec::new();
//! svg(&square, "fill:gray").write_to(&mut out).unwrap();
//! assert_eq!(
//!     String::from_utf8(out).unwrap(),
//!     "<g fill-rule=\"evenodd\"><path d=\"M 0,0 L 4,0 L 4,4 L 0,4 \
//!      M 1,1 L 2,1 L 2,2 L 1,2 z\" style=\"fill:gray\"/></g>"
//! );
//! ```
//!
//! # Features
//!
//! - `kurbo` (enabled by default): Treat [`kurbo::Point`], [`kurbo::Rect`] and
//!   [`kurbo::Line`] as geometries. The [`kurbo`] crate is re-exported through
//!   `peniko`.

// LINEBENDER LINT SET - lib.rs - v3
// See https://linebender.org/wiki/canonical-lints/
// These lints shouldn't apply to examples or tests.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
// These lints shouldn't apply to examples.
#![warn(clippy::print_stdout, clippy::print_stderr)]
// Targeting e.g. 32-bit means structs containing usize can give false positives for 64-bit.
#![cfg_attr(target_pointer_width = "64", warn(clippy::trivially_copy_pass_by_ref))]
// END LINEBENDER LINT SET
#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

mod kind;
#[cfg(feature = "kurbo")]
mod kurbo_impls;
mod model;
mod point;
mod polygon;
mod range;
mod rect;
mod svg;

pub use kind::{
    encode, Geometry, GeometryKind, GeometryTag, LinestringTag, PointTag, PolygonTag, RectTag,
    RingTag,
};
pub use model::{Linestring, Point, Polygon, Rect, Ring};
pub use point::{encode_point, Coordinate, PointLike, DEFAULT_POINT_RADIUS};
pub use polygon::{encode_polygon, PolygonLike};
pub use range::{encode_range, PointRange, RangeFlavor};
pub use rect::{encode_rect, RectLike};
pub use svg::{svg, Svg, DEFAULT_SIZE};

/// Re-export of the kurbo geometry types supported as geometries.
#[cfg(feature = "kurbo")]
pub use peniko::kurbo;

// Copyright 2024 the Geom SVG Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt::{self, Write};

use crate::point::write_coords;
use crate::range::PointRange;

/// Read access to the rings of a polygon with holes.
pub trait PolygonLike {
    /// Type of the exterior and interior rings.
    type Ring: PointRange;

    /// Iterator over the interior rings, in order.
    type Interiors<'a>: Iterator<Item = &'a Self::Ring>
    where
        Self: 'a;

    /// Returns the outer boundary.
    fn exterior(&self) -> &Self::Ring;

    /// Returns the hole boundaries.
    fn interiors(&self) -> Self::Interiors<'_>;
}

/// Path data writer that separates consecutive commands with a single space.
struct PathData<'w, W: ?Sized> {
    out: &'w mut W,
    empty: bool,
}

impl<W: Write + ?Sized> PathData<'_, W> {
    fn separate(&mut self) -> fmt::Result {
        if !self.empty {
            self.out.write_char(' ')?;
        }
        self.empty = false;
        Ok(())
    }

    /// Writes one ring as its own subpath: a move to the first point, then
    /// lines to the rest.
    fn ring<R: PointRange + ?Sized>(&mut self, ring: &R) -> fmt::Result {
        let mut first = true;
        for point in ring.points() {
            self.separate()?;
            self.out.write_str(if first { "M " } else { "L " })?;
            write_coords(self.out, point)?;
            first = false;
        }
        Ok(())
    }

    fn close(&mut self) -> fmt::Result {
        self.separate()?;
        self.out.write_char('z')
    }
}

/// Encodes a polygon as a single compound `path` inside an even-odd group.
///
/// The exterior and every interior ring each become their own subpath, so the
/// even-odd fill rule renders the interior rings as holes.
///
/// `size` is ignored.
pub fn encode_polygon<W, P>(out: &mut W, polygon: &P, style: &str, _size: i32) -> fmt::Result
where
    W: Write + ?Sized,
    P: PolygonLike + ?Sized,
{
    out.write_str("<g fill-rule=\"evenodd\"><path d=\"")?;
    let mut data = PathData {
        out: &mut *out,
        empty: true,
    };
    data.ring(polygon.exterior())?;
    for interior in polygon.interiors() {
        data.ring(interior)?;
    }
    data.close()?;
    write!(out, "\" style=\"{style}\"/></g>")
}

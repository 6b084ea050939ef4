// Copyright 2024 the Geom SVG Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;
use std::io;

use crate::kind::{encode, Geometry};

/// Size hint meaning "use the encoder's default".
pub const DEFAULT_SIZE: i32 = -1;

/// A geometry bound to a style, ready to be written as an SVG fragment.
///
/// Created with [`svg`]. Nothing is encoded until the value is written, and
/// every write encodes the geometry again from scratch.
#[derive(Debug)]
pub struct Svg<'a, G: ?Sized> {
    geometry: &'a G,
    style: &'a str,
    size: i32,
}

// Manual impls, since deriving would require `G: Clone`.
impl<G: ?Sized> Clone for Svg<'_, G> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<G: ?Sized> Copy for Svg<'_, G> {}

static_assertions::assert_impl_all!(Svg<'static, crate::Point<f64>>: Send, Sync, Copy);
static_assertions::assert_impl_all!(Svg<'static, [crate::Point<f64>]>: Send, Sync, Copy);

/// Binds `geometry` and `style` for writing.
///
/// The style is copied into the `style` attribute verbatim; it is neither
/// parsed nor escaped.
pub fn svg<'a, G: Geometry + ?Sized>(geometry: &'a G, style: &'a str) -> Svg<'a, G> {
    Svg {
        geometry,
        style,
        size: DEFAULT_SIZE,
    }
}

impl<'a, G: Geometry + ?Sized> Svg<'a, G> {
    /// Sets the size hint.
    ///
    /// Only points use it, as the marker radius. Negative values select the
    /// default radius.
    #[must_use]
    pub fn with_size(mut self, size: i32) -> Self {
        self.size = size;
        self
    }

    /// Returns the bound geometry.
    pub fn geometry(&self) -> &'a G {
        self.geometry
    }

    /// Returns the style.
    pub fn style(&self) -> &'a str {
        self.style
    }

    /// Returns the size hint.
    pub fn size(&self) -> i32 {
        self.size
    }

    /// Writes the fragment to a text sink.
    pub fn render<W: fmt::Write + ?Sized>(&self, out: &mut W) -> fmt::Result {
        encode(out, self.geometry, self.style, self.size)
    }

    /// Writes the fragment to a byte sink, then flushes it.
    ///
    /// Errors reported by the sink are returned as they are.
    pub fn write_to<W: io::Write + ?Sized>(&self, sink: &mut W) -> io::Result<()> {
        write!(sink, "{self}")?;
        sink.flush()
    }
}

impl<G: Geometry + ?Sized> fmt::Display for Svg<'_, G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.render(f)
    }
}

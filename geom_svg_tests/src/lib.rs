// Copyright 2024 the Geom SVG Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Geom SVG tests.

// LINEBENDER LINT SET - lib.rs - v2
// See https://linebender.org/wiki/canonical-lints/
// These lints aren't included in Cargo.toml because they
// shouldn't apply to examples and tests
#![warn(unused_crate_dependencies)]
#![warn(clippy::print_stdout, clippy::print_stderr)]
// Targeting e.g. 32-bit means structs containing usize can give false positives for 64-bit.
#![cfg_attr(target_pointer_width = "64", warn(clippy::trivially_copy_pass_by_ref))]
// END LINEBENDER LINT SET
#![cfg_attr(docsrs, feature(doc_cfg))]
#![allow(
    missing_debug_implementations,
    unreachable_pub,
    missing_docs,
    clippy::missing_assert_message,
    clippy::print_stderr,
    clippy::print_stdout,
    clippy::allow_attributes_without_reason
)]

use std::env;

use geom_svg::{Geometry, Point, Polygon, Ring, Svg};

mod snapshot;

pub use snapshot::{snapshot_test, Snapshot};

/// Renders the fragment into a fresh string.
pub fn render<G: Geometry + ?Sized>(svg: &Svg<'_, G>) -> String {
    let mut out = String::new();
    svg.render(&mut out).expect("writing to a String can't fail");
    out
}

/// Builds a ring of integer points.
pub fn ring(points: &[(i32, i32)]) -> Ring<Point<i32>> {
    points.iter().copied().map(Point::from).collect()
}

/// Builds a polygon of integer points.
pub fn polygon(exterior: &[(i32, i32)], interiors: &[&[(i32, i32)]]) -> Polygon<Point<i32>> {
    let mut polygon = Polygon::new(ring(exterior));
    for interior in interiors {
        polygon.push_interior(ring(interior));
    }
    polygon
}

/// Returns the value of the first attribute called `name`.
pub fn attribute<'a>(fragment: &'a str, name: &str) -> Option<&'a str> {
    let needle = format!(" {name}=\"");
    let start = fragment.find(&needle)? + needle.len();
    let len = fragment[start..].find('"')?;
    Some(&fragment[start..start + len])
}

/// Command counts of SVG path data.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct PathCommands {
    pub move_to: usize,
    pub line_to: usize,
    pub close: usize,
}

impl PathCommands {
    pub fn count(data: &str) -> Self {
        let mut commands = Self::default();
        for token in data.split(' ') {
            match token {
                "M" => commands.move_to += 1,
                "L" => commands.line_to += 1,
                "z" => commands.close += 1,
                _ => {}
            }
        }
        commands
    }
}

fn env_var_relates_to(env_var: &'static str, name: &str) -> bool {
    if let Ok(val) = env::var(env_var) {
        if val.eq_ignore_ascii_case("all") {
            return true;
        }
        for test in val.split(',') {
            if test.trim().eq_ignore_ascii_case(name) {
                return true;
            }
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attribute_lookup() {
        let fragment = r#"<rect x="1" y="2" width="3" height="4" style="fill:red"/>"#;
        assert_eq!(attribute(fragment, "x"), Some("1"));
        assert_eq!(attribute(fragment, "height"), Some("4"));
        assert_eq!(attribute(fragment, "style"), Some("fill:red"));
        assert_eq!(attribute(fragment, "r"), None);
    }

    #[test]
    fn command_counts() {
        assert_eq!(
            PathCommands::count("M 0,0 L 1,0 L 1,1 M 5,5 L 6,6 z"),
            PathCommands {
                move_to: 2,
                line_to: 3,
                close: 1,
            }
        );
    }
}

// Copyright 2024 the Geom SVG Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::{bail, Result};
use geom_svg::{Geometry, Svg};

use crate::{env_var_relates_to, render};

fn snapshot_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("snapshots")
}

/// The outcome of comparing a rendered fragment with its stored reference.
#[must_use]
pub struct Snapshot {
    pub name: String,
    pub reference_path: PathBuf,
    pub update_path: PathBuf,
    pub rendered: String,
}

impl Snapshot {
    /// Checks the fragment against the reference.
    ///
    /// On a mismatch the new output is written next to the reference as
    /// `<name>.new.svg`, unless `GEOM_SVG_TEST_UPDATE` names this test, in
    /// which case the reference itself is replaced.
    pub fn assert_matches(self) -> Result<()> {
        let expected = std::fs::read_to_string(&self.reference_path)?;
        let expected = expected.trim_end_matches(['\n', '\r']);
        if expected == self.rendered {
            return self.handle_success();
        }
        if env_var_relates_to("GEOM_SVG_TEST_UPDATE", &self.name) {
            std::fs::write(&self.reference_path, &self.rendered)?;
            eprintln!(
                "Updated result for updated test {} to {:?}",
                self.name, &self.reference_path
            );
            return Ok(());
        }
        std::fs::write(&self.update_path, &self.rendered)?;
        bail!(
            "Snapshot {} differs.\n  expected: {expected}\n  rendered: {}\n\
            Wrote result to {:?}\n\
            Use `GEOM_SVG_TEST_UPDATE=all` to update",
            self.name,
            self.rendered,
            self.update_path
        );
    }

    fn handle_success(&self) -> Result<()> {
        match std::fs::remove_file(&self.update_path) {
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            res => res.map_err(Into::into),
        }
    }
}

/// Renders `svg` and prepares the comparison with `snapshots/<name>.svg`.
///
/// A missing reference is an error, unless `GEOM_SVG_TEST_CREATE` names this
/// test, in which case it gets written.
pub fn snapshot_test<G: Geometry + ?Sized>(name: &str, svg: &Svg<'_, G>) -> Result<Snapshot> {
    let rendered = render(svg);
    let reference_path = snapshot_dir().join(name).with_extension("svg");
    let update_path = snapshot_dir().join(name).with_extension("new.svg");

    match std::fs::metadata(&reference_path) {
        Ok(_) => {}
        Err(e) if e.kind() == ErrorKind::NotFound => {
            if env_var_relates_to("GEOM_SVG_TEST_CREATE", name) {
                std::fs::write(&reference_path, &rendered)?;
                eprintln!("Wrote result for new test {name} to {reference_path:?}");
            } else {
                std::fs::write(&update_path, &rendered)?;
                bail!(
                    "Couldn't find snapshot for test {name}. Searched at {reference_path:?}\n\
                    Test result written to {update_path:?}\n\
                    Use `GEOM_SVG_TEST_CREATE=all` to update"
                );
            }
        }
        Err(e) => return Err(e.into()),
    }

    Ok(Snapshot {
        name: name.to_owned(),
        reference_path,
        update_path,
        rendered,
    })
}

// ABOUTME: Checks that every Rust source in the workspace carries the project license header
// ABOUTME: Walks src, crates, tests and benches and inspects the leading comment block
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealwise Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::fs;
use std::path::{Path, PathBuf};

const LICENSE_LINE: &str = "// SPDX-License-Identifier: MIT OR Apache-2.0";
const COPYRIGHT_LINE: &str = "// Copyright (c) 2025 Mealwise Contributors";

fn rust_sources(dir: &Path, found: &mut Vec<PathBuf>) {
    for entry in fs::read_dir(dir).unwrap() {
        let path = entry.unwrap().path();
        if path.is_dir() {
            rust_sources(&path, found);
        } else if path.extension().is_some_and(|ext| ext == "rs") {
            found.push(path);
        }
    }
}

#[test]
fn test_every_source_names_the_project_as_copyright_holder() {
    let root = Path::new(env!("CARGO_MANIFEST_DIR"));
    let mut sources = Vec::new();
    for dir in ["src", "crates", "tests", "benches"] {
        rust_sources(&root.join(dir), &mut sources);
    }
    assert!(sources.len() > 20, "expected the workspace sources, found {}", sources.len());

    for path in sources {
        let text = fs::read_to_string(&path).unwrap();
        let header: Vec<&str> = text.lines().take(6).collect();
        assert!(header.contains(&LICENSE_LINE), "{} lacks the SPDX line", path.display());
        assert!(
            header.contains(&COPYRIGHT_LINE),
            "{} lacks the Mealwise copyright line",
            path.display()
        );
    }
}

use std::path::PathBuf;

use anyhow::{bail, Result};

/// Resolves a demo asset by name.
///
/// Looks in `assets/` under the current directory first (the layout of a
/// packaged build), then under the crate's own source tree.
pub fn asset_path(name: &str) -> Result<PathBuf> {
    let local = PathBuf::from("assets").join(name);
    if local.exists() {
        return Ok(local);
    }

    let source = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("assets")
        .join(name);
    if source.exists() {
        return Ok(source);
    }

    bail!(
        "asset {name} not found (looked in ./assets and {})",
        source.display()
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_bundled_assets() {
        for name in ["quad.wgsl", "ember.png", "frost.png"] {
            let path = asset_path(name).unwrap();
            assert!(path.exists(), "{name} should resolve to an existing file");
        }
    }

    #[test]
    fn unknown_asset_errors_with_name() {
        let err = asset_path("does-not-exist.bin").unwrap_err();
        assert!(err.to_string().contains("does-not-exist.bin"));
    }
}

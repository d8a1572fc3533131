use std::path::Path;

use anyhow::{Context, Result};

/// Reads WGSL shader source from disk.
///
/// Validation happens later at module creation; this only performs I/O so that
/// a missing or unreadable file surfaces as a clear error with the path.
pub fn load_wgsl<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read shader {}", path.display()))?;

    log::debug!("loaded shader source from {}", path.display());
    Ok(source)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_source_from_disk() {
        let dir = std::env::temp_dir();
        let path = dir.join(format!("glint-shader-test-{}.wgsl", std::process::id()));
        std::fs::write(&path, "@fragment fn fs_main() {}").unwrap();

        let src = load_wgsl(&path).unwrap();
        assert!(src.contains("fs_main"));

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn missing_file_error_names_the_path() {
        let err = load_wgsl("/nonexistent/glint/missing.wgsl").unwrap_err();
        assert!(format!("{err:#}").contains("missing.wgsl"));
    }
}

use crate::manifest::checksum;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use walkdir::WalkDir;

pub const ARCHIVE_SUFFIX: &str = ".zip";

/// Writes a manifest of every archive under `root` to `output_path` and
/// returns the number of archives recorded. The manifest pairs each
/// archive's uppercase SHA-256 digest with its root-relative path, one
/// record per two lines, in directory-traversal order.
pub fn write_manifest(root: &Path, output_path: &Path) -> Result<usize, String> {
    let mut out = File::create(output_path)
        .map_err(|e| format!("Cannot create {}: {}", output_path.display(), e))?;

    let mut count = 0;
    for entry in WalkDir::new(root) {
        let entry = entry.map_err(|e| format!("Cannot walk {}: {}", root.display(), e))?;
        if !entry.file_type().is_file() {
            continue;
        }
        if !entry.file_name().to_string_lossy().ends_with(ARCHIVE_SUFFIX) {
            continue;
        }

        let digest = checksum::sha256_file(entry.path())?;
        let relative = entry
            .path()
            .strip_prefix(root)
            .map_err(|e| format!("Cannot relativize {}: {}", entry.path().display(), e))?;

        writeln!(out, "{}", digest.to_uppercase())
            .map_err(|e| format!("Cannot write {}: {}", output_path.display(), e))?;
        writeln!(out, "{}", relative.display())
            .map_err(|e| format!("Cannot write {}: {}", output_path.display(), e))?;
        count += 1;
    }

    Ok(count)
}

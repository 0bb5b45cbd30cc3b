use crate::report::Report;
use std::path::Path;

const DIGEST_LEN: usize = 64;

// The manifest format consumed by mirrors: alternating lines, a 64-character
// hex digest followed by the archive's relative path.
pub fn validate(manifest: &Path, report: &mut Report) {
    let content = match std::fs::read_to_string(manifest) {
        Ok(c) => c,
        Err(e) => {
            report.fail(None, &format!("Cannot read {}: {}", manifest.display(), e));
            return;
        }
    };

    let lines: Vec<&str> = content.lines().collect();
    if lines.is_empty() {
        report.warn(None, "Manifest is empty (no data packs listed)");
        return;
    }

    if lines.len() % 2 != 0 {
        report.fail(
            None,
            &format!(
                "Odd line count ({}): the last digest line has no path line",
                lines.len()
            ),
        );
    }

    let mut records = 0;
    for (i, pair) in lines.chunks(2).enumerate() {
        let digest_line = 2 * i + 1;
        let digest = pair[0];
        if digest.len() != DIGEST_LEN {
            report.fail(
                Some(digest_line),
                &format!(
                    "Digest is {} characters, expected {}",
                    digest.len(),
                    DIGEST_LEN
                ),
            );
        } else if !digest.bytes().all(|b| b.is_ascii_hexdigit()) {
            report.fail(Some(digest_line), "Digest contains non-hexadecimal characters");
        }

        if pair.len() == 2 {
            if pair[1].is_empty() {
                report.fail(Some(digest_line + 1), "Path line is empty");
            }
            records += 1;
        }
    }

    if !report.has_failures() {
        report.pass(None, &format!("{} data pack(s) listed", records));
    }
}

use crate::report::Report;
use crate::validation;
use std::path::Path;

pub fn run(manifest: &Path) -> Result<(), String> {
    let mut report = Report::new();
    validation::format::validate(manifest, &mut report);
    report.print();

    if report.has_failures() {
        Err("Validation failed".to_string())
    } else {
        Ok(())
    }
}

use crate::manifest::writer;
use colored::Colorize;
use std::path::Path;

pub fn run(root: &Path, output: &Path) -> Result<(), String> {
    let root = std::fs::canonicalize(root).map_err(|e| format!("Invalid search root: {}", e))?;

    println!(
        "{}",
        format!("Generating manifest for {}...", root.display()).bold()
    );
    println!();

    print!("  Hashing archives... ");
    let count = writer::write_manifest(&root, output)?;
    println!("{}", "done".green());

    println!();
    println!(
        "  {} {} data pack(s) written to {}",
        "OK".green().bold(),
        count,
        output.display()
    );
    println!();

    Ok(())
}

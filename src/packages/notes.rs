//! Setup notes shown after a package is installed

use crate::catalog::SetupNote;
use colored::Colorize;
use std::io::{self, Write};

/// Print the notes of `package_name` to stdout.
pub fn display_notes(notes: &[SetupNote], package_name: &str) {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    // Nothing sensible to do if stdout is gone
    let _ = write_notes(&mut out, notes, package_name);
}

/// Write a header naming the package, then each note as `n. title` followed
/// by its content exactly as declared.
pub fn write_notes<W: Write>(
    out: &mut W,
    notes: &[SetupNote],
    package_name: &str,
) -> io::Result<()> {
    if notes.is_empty() {
        return Ok(());
    }

    let header = format!("Setup notes for {}", package_name);
    writeln!(out)?;
    writeln!(out, "{}", header.bold())?;
    for (i, note) in notes.iter().enumerate() {
        let number = format!("{}.", i + 1);
        writeln!(out)?;
        writeln!(out, "{} {}", number.cyan(), note.title.bold())?;
        writeln!(out, "{}", note.content)?;
    }
    Ok(())
}

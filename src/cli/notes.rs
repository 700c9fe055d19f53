//! `depwiz notes` command implementation
//!
//! Reprints the setup notes of a catalog entry without installing anything.

use crate::catalog::Catalog;
use crate::error::{Error, Result};
use crate::packages::notes::display_notes;
use clap::Args;

#[derive(Args, Debug)]
#[command(after_help = "\
Examples:
  depwiz notes tailwindcss                Show Tailwind setup steps")]
pub struct NotesArgs {
    /// Catalog package name
    #[arg(value_name = "PACKAGE")]
    pub package: String,
}

pub fn execute(args: &NotesArgs) -> Result<()> {
    let catalog = Catalog::builtin()?;
    let entry = catalog.find(&args.package).ok_or_else(|| {
        Error::Config(format!(
            "'{}' is not in the catalog. Run 'depwiz list' to see available packages.",
            args.package
        ))
    })?;

    if entry.notes.is_empty() {
        println!("{} has no setup notes.", entry.name);
    } else {
        display_notes(entry.notes, entry.name);
    }
    Ok(())
}

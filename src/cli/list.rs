//! `depwiz list` command implementation

use crate::catalog::{Catalog, PackageDescriptor};
use crate::error::Result;
use clap::Args;
use colored::Colorize;

#[derive(Args, Debug, Default)]
pub struct ListArgs {}

pub fn execute(_args: &ListArgs) -> Result<()> {
    let catalog = Catalog::builtin()?;

    println!("{} packages in the catalog:", catalog.len());
    println!();
    for entry in catalog.entries() {
        println!("{}", format_entry(entry));
    }
    println!();
    println!("  * runs post-install steps    + prints setup notes");

    Ok(())
}

fn format_entry(entry: &PackageDescriptor) -> String {
    let mut markers = String::new();
    if entry.has_post_install() {
        markers.push('*');
    }
    if entry.has_notes() {
        markers.push('+');
    }

    let mut line = format!(
        "  {:<14} {:<4} {:<2}",
        entry.name.bold(),
        entry.dep_type.as_str(),
        markers
    );

    if !entry.external_dependencies.is_empty() {
        let externals: Vec<_> = entry.external_dependencies.iter().map(|e| e.name).collect();
        let with = format!(" with {}", externals.join(", "));
        line.push_str(&with.dimmed().to_string());
    }

    line.trim_end().to_string()
}

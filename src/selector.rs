//! Interactive package selection
//!
//! The catalog is offered as a multi-select; each chosen entry then gets a
//! yes/no confirmation of its declared dependency type. Declining flips the
//! entry and all of its external dependencies between prod and dev.

use crate::catalog::{Catalog, DependencyType, ExternalDependency, PackageDescriptor};
use crate::error::{Error, Result};
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, MultiSelect};

const SELECT_PROMPT: &str = "Select packages (space to toggle, enter to confirm)";

/// Source of user answers
pub trait Prompter {
    /// Indices of the chosen items
    fn multi_select(&mut self, prompt: &str, items: &[&str]) -> Result<Vec<usize>>;

    fn confirm(&mut self, prompt: &str, default: bool) -> Result<bool>;
}

/// Prompts on the terminal via dialoguer
pub struct TerminalPrompter {
    theme: ColorfulTheme,
}

impl Default for TerminalPrompter {
    fn default() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }
}

impl Prompter for TerminalPrompter {
    fn multi_select(&mut self, prompt: &str, items: &[&str]) -> Result<Vec<usize>> {
        MultiSelect::with_theme(&self.theme)
            .with_prompt(prompt)
            .items(items)
            .interact_opt()?
            .ok_or_else(|| Error::Prompt("selection cancelled".to_string()))
    }

    fn confirm(&mut self, prompt: &str, default: bool) -> Result<bool> {
        Confirm::with_theme(&self.theme)
            .with_prompt(prompt)
            .default(default)
            .interact_opt()?
            .ok_or_else(|| Error::Prompt("confirmation cancelled".to_string()))
    }
}

/// Accepts every confirmation with its default answer
pub struct AssumeYes<P>(pub P);

impl<P: Prompter> Prompter for AssumeYes<P> {
    fn multi_select(&mut self, prompt: &str, items: &[&str]) -> Result<Vec<usize>> {
        self.0.multi_select(prompt, items)
    }

    fn confirm(&mut self, _prompt: &str, default: bool) -> Result<bool> {
        Ok(default)
    }
}

/// A chosen catalog entry with its confirmed placement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub descriptor: &'static PackageDescriptor,
    /// The user declined the declared type
    pub flipped: bool,
}

impl Selection {
    pub fn dep_type(&self) -> DependencyType {
        self.apply(self.descriptor.dep_type)
    }

    /// Effective type of one of this entry's external dependencies
    pub fn external_type(&self, external: &ExternalDependency) -> DependencyType {
        self.apply(external.dep_type)
    }

    fn apply(&self, declared: DependencyType) -> DependencyType {
        if self.flipped {
            declared.inverted()
        } else {
            declared
        }
    }
}

/// Offer every catalog entry and return the chosen ones in catalog order.
pub fn select_packages(
    catalog: &Catalog,
    prompter: &mut dyn Prompter,
) -> Result<Vec<&'static PackageDescriptor>> {
    let labels: Vec<&str> = catalog.entries().iter().map(|e| e.name).collect();
    let mut picked = prompter.multi_select(SELECT_PROMPT, &labels)?;
    picked.sort_unstable();
    picked.dedup();

    picked
        .into_iter()
        .map(|i| catalog.entries().get(i).ok_or_else(|| out_of_range(i)))
        .collect()
}

fn out_of_range(index: usize) -> Error {
    Error::Prompt(format!("selection index {} out of range", index))
}

/// Select entries by name instead of prompting, in catalog order.
pub fn select_by_name(
    catalog: &Catalog,
    names: &[String],
) -> Result<Vec<&'static PackageDescriptor>> {
    let mut indices = Vec::new();
    for name in names {
        let index = catalog
            .entries()
            .iter()
            .position(|e| e.name.eq_ignore_ascii_case(name))
            .ok_or_else(|| unknown_package(catalog, name))?;
        indices.push(index);
    }
    indices.sort_unstable();
    indices.dedup();
    Ok(indices.into_iter().map(|i| &catalog.entries()[i]).collect())
}

fn unknown_package(catalog: &Catalog, name: &str) -> Error {
    let similar = catalog.suggest(name);
    if similar.is_empty() {
        Error::Config(format!(
            "'{}' is not in the catalog. Run 'depwiz list' to see available packages.",
            name
        ))
    } else {
        Error::Config(format!(
            "'{}' is not in the catalog\n\nDid you mean '{}'?",
            name,
            similar.join("', '")
        ))
    }
}

/// Ask whether `descriptor` should be added with its declared type.
pub fn confirm_type(descriptor: &PackageDescriptor, prompter: &mut dyn Prompter) -> Result<bool> {
    let prompt = format!(
        "Add {} as {} dependency?",
        descriptor.name, descriptor.dep_type
    );
    prompter.confirm(&prompt, true)
}

/// Confirm every selected entry in order.
pub fn confirm_types(
    selected: &[&'static PackageDescriptor],
    prompter: &mut dyn Prompter,
) -> Result<Vec<Selection>> {
    selected
        .iter()
        .map(|&descriptor| {
            let keep = confirm_type(descriptor, prompter)?;
            if !keep {
                tracing::debug!(package = descriptor.name, "dependency type flipped");
            }
            Ok(Selection {
                descriptor,
                flipped: !keep,
            })
        })
        .collect()
}

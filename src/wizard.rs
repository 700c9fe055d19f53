//! The add pipeline
//!
//! select → confirm types → resolve versions → write package.json →
//! install → post-install scripts and notes. Each step finishes before the
//! next one starts.

use crate::catalog::{Catalog, DependencyType, BASELINE};
use crate::error::{Error, Result};
use crate::packages::installer::{Installer, PostInstallReport};
use crate::packages::registry::RegistryClient;
use crate::packages::ResolvedPackage;
use crate::project::Manifest;
use crate::selector::{confirm_types, select_by_name, select_packages, Prompter, Selection};
use crate::utils::output::{print_info, print_step, print_success, print_warning};
use std::path::PathBuf;

/// What a run should do besides prompting
#[derive(Debug, Clone)]
pub struct WizardOptions {
    pub project_root: PathBuf,
    pub install_command: String,
    /// Stop after writing package.json
    pub skip_install: bool,
    /// Catalog names chosen up front; empty means prompt
    pub preselected: Vec<String>,
    /// Print setup notes after post-install
    pub show_notes: bool,
}

/// Outcome of a completed run
#[derive(Debug, Default)]
pub struct RunSummary {
    pub manifest_path: PathBuf,
    /// Packages written to the manifest, in resolution order
    pub resolved: Vec<ResolvedPackage>,
    /// One [`Error::VersionLookup`] per skipped package
    pub failed_lookups: Vec<Error>,
    /// Nothing was selected and the baseline was added instead
    pub used_baseline: bool,
    /// Present when the install command ran and succeeded
    pub post_install: Option<PostInstallReport>,
}

impl RunSummary {
    pub fn count(&self, dep_type: DependencyType) -> usize {
        self.resolved
            .iter()
            .filter(|p| p.dep_type == dep_type)
            .count()
    }
}

/// Run the whole pipeline against `catalog`.
///
/// Lookup and post-install failures are recorded in the summary; a prompt
/// failure, unreadable manifest, or failed install command aborts the run.
pub fn run(
    catalog: &Catalog,
    registry: &RegistryClient,
    prompter: &mut dyn Prompter,
    options: &WizardOptions,
) -> Result<RunSummary> {
    let selected = if options.preselected.is_empty() {
        select_packages(catalog, prompter)?
    } else {
        select_by_name(catalog, &options.preselected)?
    };

    if selected.is_empty() {
        return add_baseline(registry, options);
    }

    let selections = confirm_types(&selected, prompter)?;

    // Fail on a broken manifest before touching the network
    let mut manifest = Manifest::load_or_create(&options.project_root)?;

    print_step("Resolving latest versions");
    let (resolved, failed_lookups) = resolve_selections(registry, &selections);

    manifest.apply(&resolved);
    manifest.persist()?;
    report_manifest_write(&manifest, &resolved);

    let mut summary = RunSummary {
        manifest_path: manifest.path().to_path_buf(),
        resolved,
        failed_lookups,
        used_baseline: false,
        post_install: None,
    };

    if options.skip_install {
        print_info("Skipping install (--skip-install)");
        return Ok(summary);
    }
    if summary.resolved.is_empty() {
        print_warning("No package could be resolved; skipping install");
        return Ok(summary);
    }

    print_step("Installing");
    let mut installer = Installer::new(&options.project_root, options.install_command.clone());
    if !options.show_notes {
        installer = installer.without_notes();
    }
    summary.post_install = Some(installer.install_and_setup(&summary.resolved)?);

    Ok(summary)
}

/// Resolve every selection, each followed by its external dependencies.
///
/// A failed lookup skips only that one package.
pub fn resolve_selections(
    registry: &RegistryClient,
    selections: &[Selection],
) -> (Vec<ResolvedPackage>, Vec<Error>) {
    let mut resolved = Vec::new();
    let mut failures = Vec::new();

    for selection in selections {
        let entry = selection.descriptor;
        let dep_type = selection.dep_type();
        let outcome = registry
            .resolve_latest_version(entry.name)
            .map(|v| ResolvedPackage::from_descriptor(entry, v, dep_type));
        record(outcome, &mut resolved, &mut failures);

        for external in entry.external_dependencies {
            let dep_type = selection.external_type(external);
            let outcome = registry
                .resolve_latest_version(external.name)
                .map(|v| ResolvedPackage::from_external(external, v, dep_type));
            record(outcome, &mut resolved, &mut failures);
        }
    }

    (resolved, failures)
}

fn record(
    outcome: Result<ResolvedPackage>,
    resolved: &mut Vec<ResolvedPackage>,
    failures: &mut Vec<Error>,
) {
    match outcome {
        Ok(pkg) => {
            println!("  + {}@{} ({})", pkg.name, pkg.version, pkg.dep_type);
            resolved.push(pkg);
        }
        Err(e) => {
            print_warning(&format!("Skipping: {}", e));
            failures.push(e);
        }
    }
}

/// Fallback when nothing was selected: add the baseline pair, no install.
fn add_baseline(registry: &RegistryClient, options: &WizardOptions) -> Result<RunSummary> {
    print_info(&format!(
        "No packages selected; adding {} and {}",
        BASELINE[0].name, BASELINE[1].name
    ));

    let mut manifest = Manifest::load_or_create(&options.project_root)?;

    let mut resolved = Vec::new();
    let mut failed_lookups = Vec::new();
    for entry in &BASELINE {
        let outcome = registry
            .resolve_latest_version(entry.name)
            .map(|v| ResolvedPackage::from_external(entry, v, entry.dep_type));
        record(outcome, &mut resolved, &mut failed_lookups);
    }

    manifest.apply(&resolved);
    manifest.persist()?;
    report_manifest_write(&manifest, &resolved);

    Ok(RunSummary {
        manifest_path: manifest.path().to_path_buf(),
        resolved,
        failed_lookups,
        used_baseline: true,
        post_install: None,
    })
}

fn report_manifest_write(manifest: &Manifest, resolved: &[ResolvedPackage]) {
    let verb = if manifest.existed() {
        "Updated"
    } else {
        "Created"
    };
    print_success(&format!(
        "{} {} with {} package(s)",
        verb,
        manifest.path().display(),
        resolved.len()
    ));
}

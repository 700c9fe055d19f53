//! Bulk install and per-package post-install steps
//!
//! The package manager's install command runs once for the whole manifest.
//! Only if it succeeds do the packages' post-install scripts run, one package
//! at a time in resolution order. A failing script stops the rest of that
//! package's scripts but never the next package.

use crate::error::{Error, Result};
use crate::packages::notes::display_notes;
use crate::packages::ResolvedPackage;
use crate::utils::output::{print_captured, print_error, print_success};
use crate::utils::shell::{run_shell, ShellOutput};
use crate::utils::spinner::Spinner;
use std::path::{Path, PathBuf};

/// Outcome of the post-install phase
#[derive(Debug, Default)]
pub struct PostInstallReport {
    /// Packages whose scripts all succeeded
    pub completed: Vec<String>,
    /// One error per package whose scripts stopped early
    pub failures: Vec<Error>,
}

impl PostInstallReport {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Runs install and post-install commands inside a project directory
pub struct Installer {
    project_root: PathBuf,
    install_command: String,
    show_notes: bool,
}

impl Installer {
    pub fn new(project_root: &Path, install_command: impl Into<String>) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            install_command: install_command.into(),
            show_notes: true,
        }
    }

    /// Suppress setup notes (used by tests)
    pub fn without_notes(mut self) -> Self {
        self.show_notes = false;
        self
    }

    /// Install, then run post-install scripts and print notes.
    ///
    /// An install failure is returned as [`Error::Install`] and nothing else
    /// runs. Post-install failures are collected in the report instead.
    pub fn install_and_setup(&self, packages: &[ResolvedPackage]) -> Result<PostInstallReport> {
        self.install(packages)?;
        Ok(self.run_post_install_phase(packages))
    }

    /// Run the bulk install command once for all packages and relay its output.
    pub fn install(&self, packages: &[ResolvedPackage]) -> Result<()> {
        let spinner = Spinner::new(format!(
            "Installing {} package(s) with `{}`",
            packages.len(),
            self.install_command
        ));
        let output = run_shell(&self.install_command, &self.project_root);
        spinner.clear();

        let output = output.map_err(|e| {
            Error::Install(format!("could not run `{}`: {}", self.install_command, e))
        })?;
        print_captured(&output.stdout, &output.stderr);

        if !output.success() {
            return Err(Error::Install(format!(
                "`{}` failed with {}",
                self.install_command,
                output.describe_exit()
            )));
        }

        print_success(&format!("Installed with `{}`", self.install_command));
        Ok(())
    }

    /// Post-install scripts and notes for every package, in order.
    pub fn run_post_install_phase(&self, packages: &[ResolvedPackage]) -> PostInstallReport {
        let mut report = PostInstallReport::default();

        for pkg in packages {
            if !pkg.post_install_scripts.is_empty() {
                match self.run_post_install(pkg) {
                    Ok(()) => report.completed.push(pkg.name.clone()),
                    Err(e) => {
                        print_error(&e.to_string());
                        report.failures.push(e);
                    }
                }
            }

            if self.show_notes && !pkg.notes.is_empty() {
                display_notes(pkg.notes, &pkg.name);
            }
        }

        report
    }

    /// Run one package's scripts in order, stopping at the first failure.
    ///
    /// A script fails if it exits non-zero or writes to stderr.
    pub fn run_post_install(&self, pkg: &ResolvedPackage) -> Result<()> {
        for script in pkg.post_install_scripts {
            println!("  {} $ {}", pkg.name, script);
            let output = run_shell(script, &self.project_root)
                .map_err(|e| post_install_error(pkg, script, e.to_string()))?;
            print_captured(&output.stdout, &output.stderr);

            if let Some(reason) = post_install_failure(&output) {
                return Err(post_install_error(pkg, script, reason));
            }
        }
        print_success(&format!("Post-install steps for {} finished", pkg.name));
        Ok(())
    }
}

fn post_install_failure(output: &ShellOutput) -> Option<String> {
    if !output.success() {
        return Some(output.describe_exit());
    }
    let stderr = output.stderr.trim();
    if !stderr.is_empty() {
        let first = stderr.lines().next().unwrap_or(stderr);
        return Some(format!("wrote to stderr: {}", first));
    }
    None
}

fn post_install_error(pkg: &ResolvedPackage, command: &str, reason: String) -> Error {
    Error::PostInstall {
        package: pkg.name.clone(),
        command: command.to_string(),
        reason,
    }
}

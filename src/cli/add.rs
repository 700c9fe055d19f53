//! `depwiz add` command implementation
//!
//! Picks packages from the catalog, resolves their latest versions, writes
//! package.json, and runs the install and post-install steps.

use crate::catalog::{Catalog, DependencyType};
use crate::error::Result;
use crate::packages::registry::RegistryClient;
use crate::project::config::{PackageManager, Settings};
use crate::project::project_root;
use crate::project::user_config::load_user_config;
use crate::selector::{AssumeYes, TerminalPrompter};
use crate::utils::output::{print_step, print_warning};
use crate::wizard::{self, RunSummary, WizardOptions};
use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug, Default)]
#[command(after_help = "\
Examples:
  depwiz add                              Pick packages interactively
  depwiz add express cors dotenv          Skip the picker
  depwiz add typescript --yes             Accept declared prod/dev placement
  depwiz add jest --skip-install          Only update package.json
  depwiz add --package-manager pnpm       Install with pnpm")]
pub struct AddArgs {
    /// Catalog packages to add (skips the interactive picker)
    #[arg(value_name = "PACKAGE")]
    pub packages: Vec<String>,

    /// Accept each package's declared dependency type without asking
    #[arg(short, long)]
    pub yes: bool,

    /// Write package.json but do not run install or post-install steps
    #[arg(long)]
    pub skip_install: bool,

    /// Do not print setup notes after installation
    #[arg(long)]
    pub no_notes: bool,

    /// Project directory (default: current directory)
    #[arg(long, value_name = "PATH")]
    pub dir: Option<PathBuf>,

    /// Registry base URL used for version lookups
    #[arg(long, env = "DEPWIZ_REGISTRY", value_name = "URL")]
    pub registry: Option<String>,

    /// Package manager used for the install step
    #[arg(long, value_enum, env = "DEPWIZ_PACKAGE_MANAGER")]
    pub package_manager: Option<PackageManager>,
}

pub fn execute(args: &AddArgs) -> Result<()> {
    let project_root = project_root(args.dir.as_deref())?;
    let settings = Settings::resolve(
        args.registry.clone(),
        args.package_manager,
        load_user_config()?,
    )?;
    tracing::debug!(?settings, root = %project_root.display(), "effective settings");

    let catalog = Catalog::builtin()?;
    let registry = RegistryClient::new(&settings.registry, settings.request_timeout)?;

    let options = WizardOptions {
        project_root,
        install_command: settings.install_command.clone(),
        skip_install: args.skip_install,
        preselected: args.packages.clone(),
        show_notes: !args.no_notes,
    };

    let summary = if args.yes {
        let mut prompter = AssumeYes(TerminalPrompter::default());
        wizard::run(&catalog, &registry, &mut prompter, &options)?
    } else {
        let mut prompter = TerminalPrompter::default();
        wizard::run(&catalog, &registry, &mut prompter, &options)?
    };

    print_human_summary(&summary);
    Ok(())
}

fn print_human_summary(summary: &RunSummary) {
    print_step("Summary");

    let mut parts = Vec::new();
    let prod = summary.count(DependencyType::Prod);
    let dev = summary.count(DependencyType::Dev);
    if prod > 0 {
        parts.push(format!("{} prod", prod));
    }
    if dev > 0 {
        parts.push(format!("{} dev", dev));
    }

    if parts.is_empty() {
        println!("No packages added.");
    } else {
        println!(
            "Wrote {} to {}",
            parts.join(", "),
            summary.manifest_path.display()
        );
    }

    if summary.used_baseline {
        println!("Nothing was selected, so the baseline packages were added.");
        println!("Run your package manager's install command when ready.");
    }

    if !summary.failed_lookups.is_empty() {
        print_warning(&format!(
            "{} package(s) skipped because their version could not be resolved",
            summary.failed_lookups.len()
        ));
    }

    if let Some(report) = &summary.post_install {
        if !report.is_clean() {
            print_warning(&format!(
                "{} package(s) had failing post-install steps; see messages above",
                report.failures.len()
            ));
        }
    }
}

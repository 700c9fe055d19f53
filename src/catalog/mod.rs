//! Curated package catalog
//!
//! The catalog is an immutable static table of package descriptors. Each entry
//! declares its default dependency type and may carry companion packages,
//! post-install shell commands, and setup notes shown after installation.

pub mod entries;

use crate::error::{Error, Result};

/// Where a package lands in package.json
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DependencyType {
    /// Needed at runtime (`dependencies`)
    Prod,
    /// Only needed during development or build (`devDependencies`)
    Dev,
}

impl DependencyType {
    /// Get the display name for this type
    pub fn as_str(&self) -> &'static str {
        match self {
            DependencyType::Prod => "prod",
            DependencyType::Dev => "dev",
        }
    }

    /// The other type (prod <-> dev)
    pub fn inverted(self) -> Self {
        match self {
            DependencyType::Prod => DependencyType::Dev,
            DependencyType::Dev => DependencyType::Prod,
        }
    }

    /// Manifest key holding packages of this type
    pub fn manifest_section(&self) -> &'static str {
        match self {
            DependencyType::Prod => "dependencies",
            DependencyType::Dev => "devDependencies",
        }
    }
}

impl std::fmt::Display for DependencyType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A companion package pulled in alongside a catalog entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExternalDependency {
    pub name: &'static str,
    pub dep_type: DependencyType,
}

/// Follow-up instruction printed after a package is installed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetupNote {
    pub title: &'static str,
    /// Printed verbatim; may span several lines or hold code samples
    pub content: &'static str,
}

/// One selectable catalog entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PackageDescriptor {
    pub name: &'static str,
    pub dep_type: DependencyType,
    pub external_dependencies: &'static [ExternalDependency],
    pub post_install_scripts: &'static [&'static str],
    pub notes: &'static [SetupNote],
}

impl PackageDescriptor {
    /// Template for struct-update syntax in static tables
    pub const BARE: PackageDescriptor = PackageDescriptor {
        name: "",
        dep_type: DependencyType::Prod,
        external_dependencies: &[],
        post_install_scripts: &[],
        notes: &[],
    };

    pub fn has_post_install(&self) -> bool {
        !self.post_install_scripts.is_empty()
    }

    pub fn has_notes(&self) -> bool {
        !self.notes.is_empty()
    }
}

/// Packages added when nothing is selected: a runtime and a dev reloader
pub const BASELINE: [ExternalDependency; 2] = [
    ExternalDependency {
        name: "express",
        dep_type: DependencyType::Prod,
    },
    ExternalDependency {
        name: "nodemon",
        dep_type: DependencyType::Dev,
    },
];

/// Validated, read-only view over a static descriptor table
#[derive(Debug, Clone, Copy)]
pub struct Catalog {
    entries: &'static [PackageDescriptor],
}

impl Catalog {
    /// The built-in catalog shipped with depwiz
    pub fn builtin() -> Result<Self> {
        Self::from_entries(entries::CATALOG)
    }

    /// Build a catalog from a static table, rejecting malformed entries
    pub fn from_entries(entries: &'static [PackageDescriptor]) -> Result<Self> {
        for entry in entries {
            validate_entry(entry)?;
        }
        Ok(Self { entries })
    }

    pub fn entries(&self) -> &'static [PackageDescriptor] {
        self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// First entry with the given name (case-insensitive)
    pub fn find(&self, name: &str) -> Option<&'static PackageDescriptor> {
        self.entries
            .iter()
            .find(|entry| entry.name.eq_ignore_ascii_case(name))
    }

    /// Names that share a prefix with `name`, for "did you mean" hints
    pub fn suggest(&self, name: &str) -> Vec<&'static str> {
        let needle = name.to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }
        let prefix: String = needle.chars().take(3).collect();
        self.entries
            .iter()
            .map(|entry| entry.name)
            .filter(|c| c.starts_with(&prefix) || c.contains(&needle))
            .collect()
    }
}

fn validate_entry(entry: &PackageDescriptor) -> Result<()> {
    validate_name(entry.name)?;

    for external in entry.external_dependencies {
        validate_name(external.name).map_err(|_| {
            Error::Config(format!(
                "Catalog entry '{}' has an invalid external dependency name '{}'",
                entry.name, external.name
            ))
        })?;
    }

    let scripts = entry.post_install_scripts;
    if scripts.iter().any(|s| s.trim().is_empty()) {
        return Err(Error::Config(format!(
            "Catalog entry '{}' has a blank post-install script",
            entry.name
        )));
    }

    if entry.notes.iter().any(|note| note.title.trim().is_empty()) {
        return Err(Error::Config(format!(
            "Catalog entry '{}' has a note without a title",
            entry.name
        )));
    }

    Ok(())
}

fn validate_name(name: &str) -> Result<()> {
    if name.is_empty() || name.chars().any(char::is_whitespace) {
        return Err(Error::Config(format!(
            "Invalid catalog package name: '{}'",
            name
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    static BLANK_SCRIPT: &[PackageDescriptor] = &[PackageDescriptor {
        name: "broken",
        post_install_scripts: &["  "],
        ..PackageDescriptor::BARE
    }];

    static SPACED_NAME: &[PackageDescriptor] = &[PackageDescriptor {
        name: "two words",
        ..PackageDescriptor::BARE
    }];

    static DUPLICATES: &[PackageDescriptor] = &[
        PackageDescriptor {
            name: "dup",
            ..PackageDescriptor::BARE
        },
        PackageDescriptor {
            name: "dup",
            dep_type: DependencyType::Dev,
            ..PackageDescriptor::BARE
        },
    ];

    #[test]
    fn test_builtin_catalog_is_valid() {
        let catalog = Catalog::builtin().unwrap();
        assert!(!catalog.is_empty());
    }

    #[test]
    fn test_builtin_catalog_has_both_types() {
        let catalog = Catalog::builtin().unwrap();
        assert!(catalog
            .entries()
            .iter()
            .any(|e| e.dep_type == DependencyType::Prod));
        assert!(catalog
            .entries()
            .iter()
            .any(|e| e.dep_type == DependencyType::Dev));
    }

    #[test]
    fn test_rejects_blank_script() {
        let err = Catalog::from_entries(BLANK_SCRIPT).unwrap_err();
        assert!(err.to_string().contains("broken"));
    }

    #[test]
    fn test_rejects_name_with_whitespace() {
        assert!(Catalog::from_entries(SPACED_NAME).is_err());
    }

    #[test]
    fn test_duplicates_allowed_find_returns_first() {
        let catalog = Catalog::from_entries(DUPLICATES).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.find("dup").unwrap().dep_type, DependencyType::Prod);
    }

    #[test]
    fn test_find_is_case_insensitive() {
        let catalog = Catalog::builtin().unwrap();
        assert_eq!(catalog.find("TypeScript").unwrap().name, "typescript");
        assert!(catalog.find("left-pad").is_none());
    }

    #[test]
    fn test_suggest_by_prefix() {
        let catalog = Catalog::builtin().unwrap();
        let suggestions = catalog.suggest("typscript");
        assert!(suggestions.contains(&"typescript"));
        assert!(catalog.suggest("").is_empty());
    }

    #[test]
    fn test_dependency_type_inversion() {
        assert_eq!(DependencyType::Prod.inverted(), DependencyType::Dev);
        assert_eq!(DependencyType::Dev.inverted(), DependencyType::Prod);
        assert_eq!(DependencyType::Prod.manifest_section(), "dependencies");
        assert_eq!(DependencyType::Dev.manifest_section(), "devDependencies");
    }

    #[test]
    fn test_baseline_covers_both_sections() {
        assert_eq!(BASELINE[0].dep_type, DependencyType::Prod);
        assert_eq!(BASELINE[1].dep_type, DependencyType::Dev);
    }
}

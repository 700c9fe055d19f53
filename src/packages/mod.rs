pub mod installer;
pub mod notes;
pub mod registry;

use crate::catalog::{DependencyType, ExternalDependency, PackageDescriptor, SetupNote};

/// A package with its latest version and effective dependency type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPackage {
    pub name: String,
    /// Latest published version, without range prefix
    pub version: String,
    pub dep_type: DependencyType,
    pub post_install_scripts: &'static [&'static str],
    pub notes: &'static [SetupNote],
}

impl ResolvedPackage {
    /// A catalog entry resolved at `version` with the confirmed type
    pub fn from_descriptor(
        descriptor: &PackageDescriptor,
        version: String,
        dep_type: DependencyType,
    ) -> Self {
        Self {
            name: descriptor.name.to_string(),
            version,
            dep_type,
            post_install_scripts: descriptor.post_install_scripts,
            notes: descriptor.notes,
        }
    }

    /// An external dependency; these never carry scripts or notes
    pub fn from_external(
        external: &ExternalDependency,
        version: String,
        dep_type: DependencyType,
    ) -> Self {
        Self::bare(external.name, &version, dep_type)
    }

    pub fn bare(name: &str, version: &str, dep_type: DependencyType) -> Self {
        Self {
            name: name.to_string(),
            version: version.to_string(),
            dep_type,
            post_install_scripts: &[],
            notes: &[],
        }
    }

    /// Range written into package.json
    pub fn version_range(&self) -> String {
        format!("^{}", self.version)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_range_has_caret() {
        let pkg = ResolvedPackage::bare("axios", "1.7.2", DependencyType::Prod);
        assert_eq!(pkg.version_range(), "^1.7.2");
    }

    #[test]
    fn test_from_descriptor_keeps_scripts_and_notes() {
        let catalog = crate::catalog::Catalog::builtin().unwrap();
        let ts = catalog.find("typescript").unwrap();
        let pkg = ResolvedPackage::from_descriptor(ts, "5.4.5".to_string(), DependencyType::Prod);
        assert_eq!(pkg.dep_type, DependencyType::Prod);
        assert_eq!(pkg.post_install_scripts, ts.post_install_scripts);
        assert!(!pkg.notes.is_empty());
    }
}

//! package.json loading, merging, and writing
//!
//! The manifest is read once and written once per run. Unknown top-level
//! keys of an existing manifest are carried through untouched and keep their
//! position; only `dependencies` and `devDependencies` are rewritten.

use crate::catalog::DependencyType;
use crate::error::{Error, Result};
use crate::packages::ResolvedPackage;
use crate::project::name::normalize_project_name;
use serde_json::{json, Map, Value};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Manifest file name at the project root
pub const MANIFEST_FILE: &str = "package.json";

type Section = BTreeMap<String, Value>;

/// In-memory package.json
#[derive(Debug, Clone)]
pub struct Manifest {
    path: PathBuf,
    document: Map<String, Value>,
    dependencies: Section,
    dev_dependencies: Section,
    existed: bool,
}

impl Manifest {
    /// Load `package.json` from the project root, or scaffold a new one.
    ///
    /// The scaffold is named after the project directory (normalized).
    /// Nothing is written until [`Manifest::persist`].
    pub fn load_or_create(project_root: &Path) -> Result<Self> {
        let path = project_root.join(MANIFEST_FILE);

        if !path.exists() {
            let dir_name = project_root
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or_default();
            let document = scaffold_document(&normalize_project_name(dir_name));
            tracing::debug!(path = %path.display(), "scaffolding new manifest");
            return Self::from_document(path, document, false);
        }

        let content = std::fs::read_to_string(&path).map_err(|e| {
            Error::Parse(format!("Failed to read {}: {}", path.display(), e))
        })?;

        let value: Value = serde_json::from_str(&content).map_err(|e| {
            Error::Parse(format!(
                "{} is not valid JSON (line {}, column {}): {}",
                path.display(),
                e.line(),
                e.column(),
                e
            ))
        })?;

        let Value::Object(document) = value else {
            let message = format!("{} must contain a JSON object", path.display());
            return Err(Error::Parse(message));
        };

        Self::from_document(path, document, true)
    }

    fn from_document(path: PathBuf, document: Map<String, Value>, existed: bool) -> Result<Self> {
        let dependencies = read_section(&document, DependencyType::Prod, &path)?;
        let dev_dependencies = read_section(&document, DependencyType::Dev, &path)?;
        Ok(Self {
            path,
            document,
            dependencies,
            dev_dependencies,
            existed,
        })
    }

    /// Merge resolved packages into their dependency sections.
    ///
    /// Every package is first added to its effective section as `^version`;
    /// afterwards each name is removed from the opposite section. A package
    /// moved between sections therefore never leaves a stale copy behind.
    pub fn apply(&mut self, packages: &[ResolvedPackage]) {
        for pkg in packages {
            self.section_mut(pkg.dep_type)
                .insert(pkg.name.clone(), Value::String(pkg.version_range()));
        }
        for pkg in packages {
            self.section_mut(pkg.dep_type.inverted()).remove(&pkg.name);
        }
    }

    /// Overwrite the manifest file with the current document.
    pub fn persist(&self) -> Result<()> {
        let content = self.to_json_string()?;
        std::fs::write(&self.path, content).map_err(|e| {
            Error::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to write {}: {}", self.path.display(), e),
            ))
        })?;
        tracing::debug!(path = %self.path.display(), "manifest written");
        Ok(())
    }

    /// Serialize as 2-space indented JSON with a trailing newline
    pub fn to_json_string(&self) -> Result<String> {
        let mut document = self.document.clone();
        for (dep_type, section) in [
            (DependencyType::Prod, &self.dependencies),
            (DependencyType::Dev, &self.dev_dependencies),
        ] {
            let key = dep_type.manifest_section();
            // Skip sections that never existed and stayed empty
            if document.contains_key(key) || !section.is_empty() {
                let map: Map<String, Value> = section.clone().into_iter().collect();
                document.insert(key.to_string(), Value::Object(map));
            }
        }

        let mut content = serde_json::to_string_pretty(&Value::Object(document))?;
        content.push('\n');
        Ok(content)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the file was present on disk when loaded
    pub fn existed(&self) -> bool {
        self.existed
    }

    /// Project name from the `name` field
    pub fn name(&self) -> Option<&str> {
        self.document.get("name").and_then(Value::as_str)
    }

    /// Version range recorded for `name` in the given section
    pub fn version_of(&self, dep_type: DependencyType, name: &str) -> Option<&str> {
        self.section(dep_type).get(name).and_then(Value::as_str)
    }

    pub fn section(&self, dep_type: DependencyType) -> &BTreeMap<String, Value> {
        match dep_type {
            DependencyType::Prod => &self.dependencies,
            DependencyType::Dev => &self.dev_dependencies,
        }
    }

    fn section_mut(&mut self, dep_type: DependencyType) -> &mut Section {
        match dep_type {
            DependencyType::Prod => &mut self.dependencies,
            DependencyType::Dev => &mut self.dev_dependencies,
        }
    }
}

fn read_section(
    document: &Map<String, Value>,
    dep_type: DependencyType,
    path: &Path,
) -> Result<Section> {
    let key = dep_type.manifest_section();
    match document.get(key) {
        None | Some(Value::Null) => Ok(Section::new()),
        Some(Value::Object(map)) => Ok(map.clone().into_iter().collect()),
        Some(_) => {
            let message = format!("\"{}\" in {} must be an object", key, path.display());
            Err(Error::Parse(message))
        }
    }
}

/// Default document for a project without a manifest
fn scaffold_document(project_name: &str) -> Map<String, Value> {
    let value = json!({
        "name": project_name,
        "version": "1.0.0",
        "description": "",
        "main": "index.js",
        "scripts": {
            "test": "echo \"Error: no test specified\" && exit 1"
        },
        "keywords": [],
        "author": "",
        "license": "ISC",
        "dependencies": {},
        "devDependencies": {}
    });

    match value {
        Value::Object(map) => map,
        _ => Map::new(),
    }
}

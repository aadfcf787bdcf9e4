//! Template set layout and lookup.

use crate::constants::{TEMPLATES_DIR, VALUES_FILES};
use crate::error::{Error, Result};
use std::path::{Path, PathBuf};

/// A named template set under the templates root: one parameter document
/// plus a subtree of template entries.
#[derive(Debug)]
pub struct TemplateSet {
    /// Set name, cleaned of any leading relative-path marker
    pub name: String,
    root: PathBuf,
}

impl TemplateSet {
    /// Locates `name` under `templates_root`.
    ///
    /// # Errors
    /// * `Error::TemplateDoesNotExistsError` if the set has no templates
    ///   directory
    pub fn locate<P: AsRef<Path>>(templates_root: P, name: &str) -> Result<Self> {
        let name = name.trim_start_matches("./").trim_end_matches('/').to_string();
        let root = templates_root.as_ref().join(&name);
        let set = Self { name, root };

        if !set.templates_dir().is_dir() {
            return Err(Error::TemplateDoesNotExistsError {
                template_dir: set.templates_dir().display().to_string(),
            });
        }

        Ok(set)
    }

    /// Directory holding the set's template entries.
    pub fn templates_dir(&self) -> PathBuf {
        self.root.join(TEMPLATES_DIR)
    }

    /// Path of the parameter document: the first existing candidate, or
    /// the canonical location when none exists yet.
    pub fn values_path(&self) -> PathBuf {
        for candidate in VALUES_FILES {
            let path = self.root.join(candidate);
            if path.is_file() {
                return path;
            }
        }
        self.root.join(VALUES_FILES[0])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_locate_strips_relative_marker() {
        let root = TempDir::new().unwrap();
        fs::create_dir_all(root.path().join("myapp/templates")).unwrap();

        let set = TemplateSet::locate(root.path(), "./myapp/").unwrap();
        assert_eq!(set.name, "myapp");
        assert_eq!(set.templates_dir(), root.path().join("myapp/templates"));
    }

    #[test]
    fn test_locate_missing_set() {
        let root = TempDir::new().unwrap();
        assert!(TemplateSet::locate(root.path(), "nope").is_err());
    }

    #[test]
    fn test_values_path_prefers_existing_candidate() {
        let root = TempDir::new().unwrap();
        fs::create_dir_all(root.path().join("myapp/templates")).unwrap();
        fs::write(root.path().join("myapp/values.json"), "{}").unwrap();

        let set = TemplateSet::locate(root.path(), "myapp").unwrap();
        assert_eq!(set.values_path(), root.path().join("myapp/values.json"));
    }

    #[test]
    fn test_values_path_defaults_to_canonical() {
        let root = TempDir::new().unwrap();
        fs::create_dir_all(root.path().join("myapp/templates")).unwrap();

        let set = TemplateSet::locate(root.path(), "myapp").unwrap();
        assert_eq!(set.values_path(), root.path().join("myapp/values.yaml"));
    }
}

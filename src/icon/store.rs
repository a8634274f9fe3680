//! On-disk icon store.
//!
//! Each persisted icon is a colocated `.svg`/`.json` pair under
//! `packages/core/icons/<branch>/<category>/<name>.{svg,json}`.

use super::IconMetadata;
use crate::debug;
use crate::error::IconError;
use std::fs;
use std::path::{Path, PathBuf};

/// A metadata record together with its on-disk location
#[derive(Debug, Clone)]
pub struct StoredIcon {
    pub metadata: IconMetadata,
    /// Path of the `.json` metadata file
    pub path: PathBuf,
}

impl StoredIcon {
    /// Path of the colocated `.svg` source file
    pub fn svg_path(&self) -> PathBuf {
        self.path.with_extension("svg")
    }
}

/// Scans and queries the asset tree
#[derive(Debug, Clone)]
pub struct IconStore {
    icons_dir: PathBuf,
}

impl IconStore {
    pub fn new(icons_dir: PathBuf) -> Self {
        Self { icons_dir }
    }

    pub fn icons_dir(&self) -> &Path {
        &self.icons_dir
    }

    /// Directory for a given branch/category pair
    pub fn category_dir(&self, meta: &IconMetadata) -> PathBuf {
        self.icons_dir
            .join(meta.branch.as_str())
            .join(meta.category.as_str())
    }

    /// Path of the metadata JSON for `meta`
    pub fn metadata_path(&self, meta: &IconMetadata) -> PathBuf {
        self.category_dir(meta).join(format!("{}.json", meta.name))
    }

    /// Path of the SVG source for `meta`
    pub fn svg_path(&self, meta: &IconMetadata) -> PathBuf {
        self.category_dir(meta).join(format!("{}.svg", meta.name))
    }

    /// Collect every icon in the tree, sorted by display name.
    ///
    /// Unparsable metadata files are skipped with a debug note, matching the
    /// scan-tolerant behavior expected of `list` and `remove`.
    pub fn scan(&self) -> Result<Vec<StoredIcon>, IconError> {
        let mut icons = Vec::new();
        if self.icons_dir.exists() {
            collect_icons(&self.icons_dir, &mut icons)?;
        }
        icons.sort_by(|a, b| a.metadata.display_name.cmp(&b.metadata.display_name));
        Ok(icons)
    }

    /// Whether an icon with this exact slug already exists
    pub fn contains(&self, name: &str) -> Result<bool, IconError> {
        Ok(self.scan()?.iter().any(|i| i.metadata.name == name))
    }

    /// Three-stage removal lookup.
    ///
    /// Stages are tried in order and the first non-empty stage wins:
    /// 1. exact `name` (case-insensitive)
    /// 2. exact `acronym` (case-insensitive)
    /// 3. case-insensitive substring of `displayName`
    ///
    /// A multi-element result means the caller must disambiguate.
    pub fn find(&self, key: &str) -> Result<Vec<StoredIcon>, IconError> {
        let icons = self.scan()?;
        let key_lower = key.to_lowercase();

        let by_name: Vec<_> = icons
            .iter()
            .filter(|i| i.metadata.name.to_lowercase() == key_lower)
            .cloned()
            .collect();
        if !by_name.is_empty() {
            return Ok(by_name);
        }

        let by_acronym: Vec<_> = icons
            .iter()
            .filter(|i| i.metadata.acronym.to_lowercase() == key_lower)
            .cloned()
            .collect();
        if !by_acronym.is_empty() {
            return Ok(by_acronym);
        }

        Ok(icons
            .into_iter()
            .filter(|i| i.metadata.display_name.to_lowercase().contains(&key_lower))
            .collect())
    }

    /// Load the SVG source for a stored icon
    pub fn read_svg(&self, icon: &StoredIcon) -> Result<String, IconError> {
        let path = icon.svg_path();
        fs::read_to_string(&path).map_err(|e| IconError::Io(path, e))
    }
}

/// Recursive descent over the two-level branch/category tree
fn collect_icons(dir: &Path, icons: &mut Vec<StoredIcon>) -> Result<(), IconError> {
    let entries = fs::read_dir(dir).map_err(|e| IconError::Io(dir.to_path_buf(), e))?;
    for entry in entries {
        let entry = entry.map_err(|e| IconError::Io(dir.to_path_buf(), e))?;
        let path = entry.path();
        if path.is_dir() {
            collect_icons(&path, icons)?;
        } else if path.extension().is_some_and(|ext| ext == "json") {
            let text = fs::read_to_string(&path).map_err(|e| IconError::Io(path.clone(), e))?;
            match serde_json::from_str::<IconMetadata>(&text) {
                Ok(metadata) => icons.push(StoredIcon { metadata, path }),
                Err(e) => {
                    debug!("store"; "skipping unparsable metadata `{}`: {e}", path.display());
                }
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::icon::{Branch, Category, IconDraft};

    fn meta(agency: &str, acronym: &str) -> IconMetadata {
        IconDraft {
            agency_name: agency.to_string(),
            official_name: agency.to_string(),
            acronym: acronym.to_string(),
            branch: Branch::Executive,
            category: Category::CabinetDepartments,
            description: None,
            keywords: vec![],
            official_website: None,
            author: "Test".to_string(),
            license: "MIT".to_string(),
            is_official: true,
            has_permission: true,
        }
        .into_metadata()
        .unwrap()
    }

    fn store_with(icons: &[IconMetadata]) -> (tempfile::TempDir, IconStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = IconStore::new(dir.path().join("packages/core/icons"));
        for m in icons {
            let cat_dir = store.category_dir(m);
            fs::create_dir_all(&cat_dir).unwrap();
            fs::write(
                store.metadata_path(m),
                serde_json::to_string_pretty(m).unwrap(),
            )
            .unwrap();
            fs::write(store.svg_path(m), "<svg></svg>").unwrap();
        }
        (dir, store)
    }

    #[test]
    fn test_scan_sorted_by_display_name() {
        let (_dir, store) = store_with(&[
            meta("Department of Tourism", "DOT"),
            meta("Department of Health", "DOH"),
        ]);
        let icons = store.scan().unwrap();
        assert_eq!(icons.len(), 2);
        assert_eq!(icons[0].metadata.acronym, "DOH");
        assert_eq!(icons[1].metadata.acronym, "DOT");
    }

    #[test]
    fn test_scan_skips_unparsable_json() {
        let (dir, store) = store_with(&[meta("Department of Health", "DOH")]);
        let junk = dir
            .path()
            .join("packages/core/icons/executive/cabinet-departments/junk.json");
        fs::write(junk, "{ not json").unwrap();
        assert_eq!(store.scan().unwrap().len(), 1);
    }

    #[test]
    fn test_find_name_beats_acronym() {
        // an icon whose *name* equals another icon's *acronym*
        let mut doh_named = meta("doh", "XYZ");
        doh_named.name = "doh".to_string();
        let (_dir, store) = store_with(&[doh_named, meta("Department of Health", "DOH")]);
        let found = store.find("doh").unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].metadata.acronym, "XYZ");
    }

    #[test]
    fn test_find_acronym_beats_substring() {
        let (_dir, store) = store_with(&[
            meta("Department of Health", "DOH"),
            meta("DOH Regional Office", "DRO"),
        ]);
        let found = store.find("DOH").unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].metadata.name, "department-of-health");
    }

    #[test]
    fn test_find_substring_of_display_name() {
        let (_dir, store) = store_with(&[
            meta("Department of Health", "DOH"),
            meta("Department of Tourism", "DOT"),
        ]);
        let found = store.find("department").unwrap();
        assert_eq!(found.len(), 2);
    }

    #[test]
    fn test_find_nothing() {
        let (_dir, store) = store_with(&[meta("Department of Health", "DOH")]);
        assert!(store.find("comelec").unwrap().is_empty());
    }

    #[test]
    fn test_missing_tree_scans_empty() {
        let store = IconStore::new(PathBuf::from("/nonexistent/icons"));
        assert!(store.scan().unwrap().is_empty());
    }
}

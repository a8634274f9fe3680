//! Package index registries.
//!
//! Each framework package keeps an `src/index.ts` whose lines look like
//! `export { DOHLogo } from './icons/department-of-health';`. The file is
//! parsed into a name-to-symbol map and always serialized sorted by icon
//! name, so regeneration is deterministic and diffs stay minimal.

use super::Target;
use regex::Regex;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

static EXPORT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^export \{ (?P<symbol>[A-Za-z_$][A-Za-z0-9_$]*) \} from '\./icons/(?P<name>[^']+)';$")
        .unwrap()
});

/// In-memory model of one package index file
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct IndexRegistry {
    exports: BTreeMap<String, String>,
}

impl IndexRegistry {
    /// Parse index content; unrecognized lines are dropped
    pub fn parse(content: &str) -> Self {
        let exports = content
            .lines()
            .filter_map(|line| {
                EXPORT_RE
                    .captures(line.trim())
                    .map(|c| (c["name"].to_string(), c["symbol"].to_string()))
            })
            .collect();
        Self { exports }
    }

    /// Load from disk; a missing file is an empty registry
    pub fn load(path: &Path) -> std::io::Result<Self> {
        match fs::read_to_string(path) {
            Ok(content) => Ok(Self::parse(&content)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(e),
        }
    }

    pub fn insert(&mut self, name: &str, symbol: &str) {
        self.exports.insert(name.to_string(), symbol.to_string());
    }

    pub fn remove(&mut self, name: &str) -> bool {
        self.exports.remove(name).is_some()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.exports.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.exports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exports.is_empty()
    }

    /// Render back to index file content, sorted by icon name.
    ///
    /// An empty registry serializes to an empty string, not a lone newline.
    pub fn serialize(&self) -> String {
        let mut out = String::new();
        for (name, symbol) in &self.exports {
            out.push_str(&format!("export {{ {symbol} }} from './icons/{name}';\n"));
        }
        out
    }
}

/// The updated content of `target`'s index after registering `name`.
///
/// Returns `None` for targets without an index file.
pub fn index_with_export(
    root: &Path,
    target: Target,
    name: &str,
    acronym: &str,
) -> std::io::Result<Option<String>> {
    let Some(path) = target.index_path(root) else {
        return Ok(None);
    };
    let symbol = target.symbol(acronym).unwrap_or_else(|| acronym.to_string());
    let mut registry = IndexRegistry::load(&path)?;
    registry.insert(name, &symbol);
    Ok(Some(registry.serialize()))
}

/// The updated content of `target`'s index after dropping `name`
pub fn index_without_export(
    root: &Path,
    target: Target,
    name: &str,
) -> std::io::Result<Option<String>> {
    let Some(path) = target.index_path(root) else {
        return Ok(None);
    };
    let mut registry = IndexRegistry::load(&path)?;
    registry.remove(name);
    Ok(Some(registry.serialize()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_round_trip() {
        let content = "export { DOHLogo } from './icons/department-of-health';\n\
                       export { DALogo } from './icons/department-of-agriculture';\n";
        let registry = IndexRegistry::parse(content);
        assert_eq!(registry.len(), 2);
        // serialized output is sorted by name, so DA comes first
        assert_eq!(
            registry.serialize(),
            "export { DALogo } from './icons/department-of-agriculture';\n\
             export { DOHLogo } from './icons/department-of-health';\n"
        );
    }

    #[test]
    fn test_unrecognized_lines_dropped() {
        let content = "// comment\n\nexport { DOHLogo } from './icons/department-of-health';\nexport * from './types';\n";
        let registry = IndexRegistry::parse(content);
        assert_eq!(registry.len(), 1);
        assert!(registry.contains("department-of-health"));
    }

    #[test]
    fn test_insert_is_idempotent() {
        let mut registry = IndexRegistry::default();
        registry.insert("department-of-health", "DOHLogo");
        registry.insert("department-of-health", "DOHLogo");
        assert_eq!(
            registry.serialize(),
            "export { DOHLogo } from './icons/department-of-health';\n"
        );
    }

    #[test]
    fn test_remove() {
        let mut registry =
            IndexRegistry::parse("export { DOHLogo } from './icons/department-of-health';\n");
        assert!(registry.remove("department-of-health"));
        assert!(!registry.remove("department-of-health"));
        assert_eq!(registry.serialize(), "");
    }

    #[test]
    fn test_missing_file_loads_empty() {
        let registry = IndexRegistry::load(Path::new("/nonexistent/index.ts")).unwrap();
        assert!(registry.is_empty());
    }

    #[test]
    fn test_index_with_export_symbols() {
        let dir = tempfile::tempdir().unwrap();
        let content =
            index_with_export(dir.path(), Target::React, "department-of-health", "DOH")
                .unwrap()
                .unwrap();
        assert_eq!(
            content,
            "export { DOHLogo } from './icons/department-of-health';\n"
        );

        let content = index_with_export(dir.path(), Target::Css, "department-of-health", "DOH")
            .unwrap()
            .unwrap();
        assert_eq!(
            content,
            "export { DOH } from './icons/department-of-health';\n"
        );

        assert!(
            index_with_export(dir.path(), Target::Preview, "department-of-health", "DOH")
                .unwrap()
                .is_none()
        );
    }
}

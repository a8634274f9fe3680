//! Artifact generation with two-phase commit.
//!
//! Every write for one icon, the core `.svg`/`.json` pair, the six target
//! artifacts, and the five package indexes, is staged in memory first and
//! only then applied. A failure mid-apply rolls back everything already
//! written, restoring prior content or deleting files that did not exist,
//! so a partially-generated icon never lands on disk.

pub mod index;
pub mod target;
pub mod templates;

pub use target::Target;

use crate::error::IconError;
use crate::icon::{IconMetadata, IconStore};
use std::fs;
use std::path::{Path, PathBuf};

/// One pending write, with enough state to undo it
#[derive(Debug)]
pub struct StagedWrite {
    pub path: PathBuf,
    pub content: String,
    /// Content before the write; `None` means the file did not exist
    previous: Option<String>,
}

impl StagedWrite {
    fn stage(path: PathBuf, content: String) -> Result<Self, IconError> {
        let previous = match fs::read_to_string(&path) {
            Ok(text) => Some(text),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
            Err(e) => return Err(IconError::Io(path, e)),
        };
        Ok(Self {
            path,
            content,
            previous,
        })
    }

    fn write(&self) -> Result<(), IconError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| IconError::Io(parent.to_path_buf(), e))?;
        }
        fs::write(&self.path, &self.content).map_err(|e| IconError::Io(self.path.clone(), e))
    }

    fn undo(&self) {
        let result = match &self.previous {
            Some(text) => fs::write(&self.path, text),
            None => fs::remove_file(&self.path),
        };
        if let Err(e) = result {
            crate::debug!("generate"; "rollback of `{}` failed: {e}", self.path.display());
        }
    }
}

/// Write all staged content, rolling everything back on the first failure
pub fn apply(stages: &[StagedWrite]) -> Result<Vec<PathBuf>, IconError> {
    for (i, stage) in stages.iter().enumerate() {
        if let Err(e) = stage.write() {
            for done in stages[..i].iter().rev() {
                done.undo();
            }
            return Err(e);
        }
    }
    Ok(stages.iter().map(|s| s.path.clone()).collect())
}

/// Stage the full write set for one icon.
///
/// `include_core` also stages the `.svg`/`.json` pair under
/// `packages/core/icons`; regeneration from already-persisted icons passes
/// `false` and leaves the core pair untouched.
pub fn stage_icon(
    root: &Path,
    meta: &IconMetadata,
    svg: &str,
    class_prefix: &str,
    include_core: bool,
) -> Result<Vec<StagedWrite>, IconError> {
    let mut stages = Vec::new();

    if include_core {
        let store = IconStore::new(root.join("packages/core/icons"));
        stages.push(StagedWrite::stage(
            store.svg_path(meta),
            svg.to_string(),
        )?);
        let json = serde_json::to_string_pretty(meta)
            .map_err(|e| IconError::Io(store.metadata_path(meta), e.into()))?;
        stages.push(StagedWrite::stage(store.metadata_path(meta), json)?);
    }

    for t in Target::ALL {
        stages.push(StagedWrite::stage(
            t.artifact_path(root, &meta.name),
            t.render(meta, svg, class_prefix),
        )?);
    }

    for t in Target::PACKAGES {
        let Some(path) = t.index_path(root) else {
            continue;
        };
        if let Some(content) = index::index_with_export(root, t, &meta.name, &meta.acronym)
            .map_err(|e| IconError::Io(path.clone(), e))?
        {
            stages.push(StagedWrite::stage(path, content)?);
        }
    }

    Ok(stages)
}

/// Stage and apply the full write set for one icon
pub fn write_icon(
    root: &Path,
    meta: &IconMetadata,
    svg: &str,
    class_prefix: &str,
    include_core: bool,
) -> Result<Vec<PathBuf>, IconError> {
    let stages = stage_icon(root, meta, svg, class_prefix, include_core)?;
    apply(&stages)
}

/// Whether every generated artifact for `name` is already on disk
pub fn artifacts_exist(root: &Path, name: &str) -> bool {
    Target::ALL
        .iter()
        .all(|t| t.artifact_path(root, name).exists())
}

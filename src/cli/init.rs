//! Init command - create the project directory skeleton.

use anyhow::Result;
use std::fs;

use crate::config::IconsConfig;
use crate::error::IconError;
use crate::generate::Target;
use crate::log;

/// Run the init command
pub fn init_project(config: &IconsConfig) -> Result<()> {
    let mut created = 0usize;

    for dir in [config.icons_dir(), config.docs_dir()] {
        if !dir.exists() {
            fs::create_dir_all(&dir).map_err(|e| IconError::Io(dir.clone(), e))?;
            log!("init"; "created {}", dir.display());
            created += 1;
        }
    }

    for t in Target::PACKAGES {
        let icons_dir = t
            .artifact_path(&config.root, "placeholder")
            .parent()
            .map(|p| p.to_path_buf())
            .unwrap_or_default();
        if !icons_dir.exists() {
            fs::create_dir_all(&icons_dir).map_err(|e| IconError::Io(icons_dir.clone(), e))?;
            log!("init"; "created {}", icons_dir.display());
            created += 1;
        }

        // seed an empty index so package builds work before the first icon
        if let Some(index_path) = t.index_path(&config.root)
            && !index_path.exists()
        {
            fs::write(&index_path, "").map_err(|e| IconError::Io(index_path.clone(), e))?;
            log!("init"; "created {}", index_path.display());
            created += 1;
        }
    }

    if created == 0 {
        log!("init"; "project already initialized");
    } else {
        log!("init"; "initialized project layout ({created} entries)");
    }
    Ok(())
}

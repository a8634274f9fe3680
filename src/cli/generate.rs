//! Generate command - rebuild framework artifacts for every stored icon.

use anyhow::Result;

use crate::config::IconsConfig;
use crate::generate;
use crate::icon::IconStore;
use crate::log;

/// Run the generate command
pub fn generate_all(force: bool, config: &IconsConfig) -> Result<()> {
    let store = IconStore::new(config.icons_dir());
    let icons = store.scan()?;

    if icons.is_empty() {
        log!("generate"; "no icons found under `{}`", store.icons_dir().display());
        return Ok(());
    }

    let mut generated = 0usize;
    let mut skipped = 0usize;
    let mut failed = 0usize;

    for icon in &icons {
        let name = &icon.metadata.name;

        if !force && generate::artifacts_exist(&config.root, name) {
            skipped += 1;
            continue;
        }

        let svg = match store.read_svg(icon) {
            Ok(svg) => svg,
            Err(e) => {
                log!("warn"; "skipping `{name}`: {e}");
                failed += 1;
                continue;
            }
        };

        // one failed icon never blocks the rest
        match generate::write_icon(
            &config.root,
            &icon.metadata,
            &svg,
            &config.class_prefix,
            false,
        ) {
            Ok(_) => {
                log!("generate"; "{name}");
                generated += 1;
            }
            Err(e) => {
                log!("warn"; "failed to generate `{name}`: {e}");
                failed += 1;
            }
        }
    }

    log!("generate"; "{generated} generated, {skipped} up to date, {failed} failed");
    Ok(())
}

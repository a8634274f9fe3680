//! Remove command - delete an icon and every generated artifact.

use anyhow::Result;
use owo_colors::OwoColorize;
use std::fs;
use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;

use crate::cli::args::RemoveArgs;
use crate::config::IconsConfig;
use crate::error::IconError;
use crate::generate::{self, Target};
use crate::icon::{IconStore, StoredIcon};
use crate::log;

/// Run the remove command
pub fn remove_icon(name: &str, args: &RemoveArgs, config: &IconsConfig) -> Result<()> {
    let store = IconStore::new(config.icons_dir());
    let matches = store.find(name)?;

    let icon = match matches.len() {
        0 => {
            log!("remove"; "no icon matches `{name}`");
            log!("remove"; "try `bettergovicon list` to see available icons");
            return Ok(());
        }
        1 => matches.into_iter().next().unwrap(),
        _ => disambiguate(name, matches, args.force)?,
    };

    let slug = icon.metadata.name.clone();
    let files = removal_set(&icon, config);

    println!(
        "{} removing `{}` ({})",
        "→".bright_blue(),
        slug,
        icon.metadata.display_name
    );
    for path in &files {
        println!("  {}", path.display().to_string().dimmed());
    }

    if args.dry_run {
        log!("remove"; "dry run, nothing deleted");
        return Ok(());
    }

    let mut deleted = 0usize;
    for path in &files {
        match fs::remove_file(path) {
            Ok(()) => deleted += 1,
            // already-missing artifacts are fine, removal is idempotent
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => return Err(IconError::Io(path.clone(), e).into()),
        }
    }

    for t in Target::PACKAGES {
        let Some(path) = t.index_path(&config.root) else {
            continue;
        };
        if let Some(content) = generate::index::index_without_export(&config.root, t, &slug)
            .map_err(|e| IconError::Io(path.clone(), e))?
        {
            fs::write(&path, content).map_err(|e| IconError::Io(path, e))?;
        }
    }

    log!("remove"; "deleted {deleted} file(s) and updated package indexes");
    Ok(())
}

// =============================================================================
// Helpers
// =============================================================================

/// Every file belonging to an icon: the core pair, the five package
/// artifacts, and the preview page
fn removal_set(icon: &StoredIcon, config: &IconsConfig) -> Vec<PathBuf> {
    let mut files = vec![icon.svg_path(), icon.path.clone()];
    for t in Target::ALL {
        files.push(t.artifact_path(&config.root, &icon.metadata.name));
    }
    files
}

/// Resolve an ambiguous match.
///
/// `--force` takes the first candidate with a warning; an interactive
/// session prompts; anything else is a hard error so scripts never delete
/// the wrong icon.
fn disambiguate(key: &str, matches: Vec<StoredIcon>, force: bool) -> Result<StoredIcon> {
    if force {
        let first = matches.into_iter().next().unwrap();
        log!("warn"; "`{key}` is ambiguous, --force selected `{}`", first.metadata.name);
        return Ok(first);
    }

    if !io::stdin().is_terminal() {
        let names = matches.iter().map(|i| i.metadata.name.clone()).collect();
        return Err(IconError::AmbiguousMatch(key.to_string(), names).into());
    }

    println!("`{key}` matches {} icons:", matches.len());
    for (i, icon) in matches.iter().enumerate() {
        println!(
            "  {} {} ({})",
            format!("{}.", i + 1).bright_blue(),
            icon.metadata.name,
            icon.metadata.display_name
        );
    }
    eprint!("Select icon to remove [1-{}]: ", matches.len());
    io::stderr().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    let choice: usize = input.trim().parse().unwrap_or(0);

    if choice == 0 || choice > matches.len() {
        let names = matches.iter().map(|i| i.metadata.name.clone()).collect();
        return Err(IconError::AmbiguousMatch(key.to_string(), names).into());
    }
    Ok(matches.into_iter().nth(choice - 1).unwrap())
}

//! Generation targets.
//!
//! Each icon fans out to five framework packages plus a standalone preview
//! page. The target enum centralizes per-target naming so artifact paths,
//! export symbols, and index locations never drift apart.

use crate::icon::IconMetadata;
use std::path::PathBuf;

/// A generated artifact family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
    React,
    Vue,
    Angular,
    WebComponent,
    Css,
    Preview,
}

impl Target {
    /// Every target, including the preview page
    pub const ALL: [Target; 6] = [
        Target::React,
        Target::Vue,
        Target::Angular,
        Target::WebComponent,
        Target::Css,
        Target::Preview,
    ];

    /// Targets that live under `packages/` and carry an index file
    pub const PACKAGES: [Target; 5] = [
        Target::React,
        Target::Vue,
        Target::Angular,
        Target::WebComponent,
        Target::Css,
    ];

    /// Package directory name under `packages/`
    pub fn package_name(&self) -> Option<&'static str> {
        match self {
            Target::React => Some("react"),
            Target::Vue => Some("vue"),
            Target::Angular => Some("angular"),
            Target::WebComponent => Some("web-components"),
            Target::Css => Some("css"),
            Target::Preview => None,
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            Target::React => "tsx",
            Target::Vue => "vue",
            Target::Angular | Target::WebComponent => "ts",
            Target::Css => "css",
            Target::Preview => "html",
        }
    }

    /// Exported symbol registered in the package index.
    ///
    /// Component targets suffix the acronym (`DOHLogo`, `DOHIcon`); the CSS
    /// package exports the bare acronym; the preview page exports nothing.
    pub fn symbol(&self, acronym: &str) -> Option<String> {
        match self {
            Target::React | Target::Vue | Target::Angular => Some(format!("{acronym}Logo")),
            Target::WebComponent => Some(format!("{acronym}Icon")),
            Target::Css => Some(acronym.to_string()),
            Target::Preview => None,
        }
    }

    /// Where this target's artifact for `name` lives, relative to the
    /// project root.
    pub fn artifact_path(&self, root: &std::path::Path, name: &str) -> PathBuf {
        match self.package_name() {
            Some(pkg) => root
                .join("packages")
                .join(pkg)
                .join("src")
                .join("icons")
                .join(format!("{name}.{}", self.extension())),
            None => root.join(format!("test-{name}.html")),
        }
    }

    /// The package index file, for targets that have one
    pub fn index_path(&self, root: &std::path::Path) -> Option<PathBuf> {
        self.package_name()
            .map(|pkg| root.join("packages").join(pkg).join("src").join("index.ts"))
    }

    /// Render this target's artifact for an icon
    pub fn render(&self, meta: &IconMetadata, svg: &str, class_prefix: &str) -> String {
        match self {
            Target::React => super::templates::react::render(meta, svg, class_prefix),
            Target::Vue => super::templates::vue::render(meta, svg, class_prefix),
            Target::Angular => super::templates::angular::render(meta, svg, class_prefix),
            Target::WebComponent => super::templates::web_component::render(meta, svg, class_prefix),
            Target::Css => super::templates::css::render(meta, svg, class_prefix),
            Target::Preview => super::templates::preview::render(meta, svg, class_prefix),
        }
    }
}

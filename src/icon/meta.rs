//! Icon metadata model.
//!
//! The JSON field names are camelCase to match the on-disk contract under
//! `packages/core/icons/<branch>/<category>/<name>.json`.

use super::{Branch, Category};
use crate::error::IconError;
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use url::Url;

/// The canonical record describing one icon
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IconMetadata {
    /// Unique kebab-case slug, primary key across the asset tree
    pub name: String,
    pub display_name: String,
    pub official_name: String,
    /// Symbol name exported by every generated target
    pub acronym: String,
    pub branch: Branch,
    pub category: Category,
    pub description: String,
    pub keywords: Vec<String>,
    pub author: String,
    pub version: String,
    pub license: String,
    pub is_official: bool,
    pub has_permission: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub official_website: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

/// Unvalidated input for a new icon, typically assembled from CLI flags or
/// the filename auto-detect table.
#[derive(Debug, Clone)]
pub struct IconDraft {
    pub agency_name: String,
    pub official_name: String,
    pub acronym: String,
    pub branch: Branch,
    pub category: Category,
    pub description: Option<String>,
    pub keywords: Vec<String>,
    pub official_website: Option<String>,
    pub author: String,
    pub license: String,
    pub is_official: bool,
    pub has_permission: bool,
}

impl IconDraft {
    /// Validate the draft and produce the canonical metadata record.
    ///
    /// Checks branch→category legality and URL well-formedness here so that
    /// no persisted record can carry an illegal pair.
    pub fn into_metadata(self) -> Result<IconMetadata, IconError> {
        if !self.branch.allows(self.category) {
            return Err(IconError::IllegalCategory {
                branch: self.branch.as_str().to_string(),
                category: self.category.as_str().to_string(),
            });
        }
        if let Some(website) = &self.official_website
            && Url::parse(website).is_err()
        {
            return Err(IconError::InvalidUrl(website.clone()));
        }

        let name = icon_slug(&self.agency_name);
        let now = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);

        let description = self
            .description
            .unwrap_or_else(|| format!("Official logo of {}", self.agency_name));
        let keywords = if self.keywords.is_empty() {
            vec![
                self.acronym.to_lowercase(),
                self.agency_name.to_lowercase(),
                "government".to_string(),
                "philippines".to_string(),
            ]
        } else {
            self.keywords
        };

        Ok(IconMetadata {
            name,
            display_name: self.agency_name,
            official_name: self.official_name,
            acronym: self.acronym,
            branch: self.branch,
            category: self.category,
            description,
            keywords,
            author: self.author,
            version: "1.0.0".to_string(),
            license: self.license,
            is_official: self.is_official,
            has_permission: self.has_permission,
            official_website: self.official_website,
            created_at: now.clone(),
            updated_at: now,
        })
    }
}

/// Derive the kebab-case slug for an agency name.
///
/// Transliterates to ASCII, lowercases, and collapses every non-alphanumeric
/// run into a single hyphen.
pub fn icon_slug(input: &str) -> String {
    let ascii = deunicode::deunicode(input).to_lowercase();
    let mut slug = String::with_capacity(ascii.len());
    let mut pending_hyphen = false;
    for c in ascii.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(c);
        } else {
            pending_hyphen = true;
        }
    }
    slug
}

//! Process command - add an icon with metadata auto-detected from the
//! filename.

use anyhow::Result;
use std::path::Path;

use crate::cli::args::ProcessArgs;
use crate::config::IconsConfig;
use crate::error::IconError;
use crate::icon::{Branch, Category, IconDraft};
use crate::log;

/// One known agency in the auto-detect table
struct KnownAgency {
    key: &'static str,
    display_name: &'static str,
    acronym: &'static str,
    keywords: &'static [&'static str],
}

/// Well-known cabinet departments, matched against the input filename.
/// Exact basename matches win; otherwise the first substring match in
/// table order is used.
const AGENCIES: &[KnownAgency] = &[
    KnownAgency {
        key: "da",
        display_name: "Department of Agriculture",
        acronym: "DA",
        keywords: &["da", "agriculture", "farming", "food"],
    },
    KnownAgency {
        key: "deped",
        display_name: "Department of Education",
        acronym: "DepEd",
        keywords: &["deped", "education", "school", "learning"],
    },
    KnownAgency {
        key: "doh",
        display_name: "Department of Health",
        acronym: "DOH",
        keywords: &["doh", "health", "medical", "hospital"],
    },
    KnownAgency {
        key: "dotr",
        display_name: "Department of Transportation",
        acronym: "DOTr",
        keywords: &["dotr", "transportation", "transport", "mobility"],
    },
    KnownAgency {
        key: "dpwh",
        display_name: "Department of Public Works and Highways",
        acronym: "DPWH",
        keywords: &["dpwh", "public works", "infrastructure", "highways"],
    },
    KnownAgency {
        key: "dti",
        display_name: "Department of Trade and Industry",
        acronym: "DTI",
        keywords: &["dti", "trade", "industry", "business"],
    },
    KnownAgency {
        key: "dole",
        display_name: "Department of Labor and Employment",
        acronym: "DOLE",
        keywords: &["dole", "labor", "employment", "work"],
    },
    KnownAgency {
        key: "dswd",
        display_name: "Department of Social Welfare and Development",
        acronym: "DSWD",
        keywords: &["dswd", "social welfare", "development", "social"],
    },
    KnownAgency {
        key: "dilg",
        display_name: "Department of Interior and Local Government",
        acronym: "DILG",
        keywords: &["dilg", "interior", "local government", "lgus"],
    },
    KnownAgency {
        key: "dnd",
        display_name: "Department of National Defense",
        acronym: "DND",
        keywords: &["dnd", "defense", "military", "security"],
    },
    KnownAgency {
        key: "dof",
        display_name: "Department of Finance",
        acronym: "DOF",
        keywords: &["dof", "finance", "fiscal", "budget"],
    },
    KnownAgency {
        key: "doj",
        display_name: "Department of Justice",
        acronym: "DOJ",
        keywords: &["doj", "justice", "legal", "law"],
    },
    KnownAgency {
        key: "denr",
        display_name: "Department of Environment and Natural Resources",
        acronym: "DENR",
        keywords: &["denr", "environment", "natural resources", "ecology"],
    },
    KnownAgency {
        key: "doe",
        display_name: "Department of Energy",
        acronym: "DOE",
        keywords: &["doe", "energy", "power", "electricity"],
    },
    KnownAgency {
        key: "dot",
        display_name: "Department of Tourism",
        acronym: "DOT",
        keywords: &["dot", "tourism", "travel", "visitor"],
    },
    KnownAgency {
        key: "dost",
        display_name: "Department of Science and Technology",
        acronym: "DOST",
        keywords: &["dost", "science", "technology", "research"],
    },
    KnownAgency {
        key: "dict",
        display_name: "Department of Information and Communications Technology",
        acronym: "DICT",
        keywords: &["dict", "information", "communications", "technology"],
    },
    KnownAgency {
        key: "dfa",
        display_name: "Department of Foreign Affairs",
        acronym: "DFA",
        keywords: &["dfa", "foreign affairs", "diplomacy", "international"],
    },
    KnownAgency {
        key: "dbm",
        display_name: "Department of Budget and Management",
        acronym: "DBM",
        keywords: &["dbm", "budget", "management", "fiscal"],
    },
    KnownAgency {
        key: "dar",
        display_name: "Department of Agrarian Reform",
        acronym: "DAR",
        keywords: &["dar", "agrarian reform", "land", "agriculture"],
    },
];

/// Run the process command
pub fn process_icon(svg_path: &Path, args: &ProcessArgs, config: &IconsConfig) -> Result<()> {
    if !svg_path.exists() {
        return Err(IconError::InputNotFound(svg_path.to_path_buf()).into());
    }

    let file_name = svg_path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    let draft = match detect_agency(&file_name) {
        Some(agency) => {
            log!("process"; "auto-detected {} ({})", agency.display_name, agency.acronym);
            IconDraft {
                agency_name: agency.display_name.to_string(),
                official_name: agency.display_name.to_string(),
                acronym: agency.acronym.to_string(),
                branch: Branch::Executive,
                category: Category::CabinetDepartments,
                description: None,
                keywords: agency.keywords.iter().map(|k| k.to_string()).collect(),
                official_website: None,
                author: config.author.clone(),
                license: config.license.clone(),
                is_official: true,
                has_permission: true,
            }
        }
        None => {
            log!("process"; "no agency match for `{file_name}`, using filename defaults");
            IconDraft {
                agency_name: file_name.clone(),
                official_name: file_name.clone(),
                acronym: file_name.to_uppercase(),
                branch: Branch::Executive,
                category: Category::CabinetDepartments,
                description: None,
                keywords: vec![
                    file_name.to_lowercase(),
                    "government".to_string(),
                    "philippines".to_string(),
                ],
                official_website: None,
                author: config.author.clone(),
                license: config.license.clone(),
                is_official: true,
                has_permission: true,
            }
        }
    };

    super::add::run_pipeline(svg_path, draft, args.dry_run, config)
}

/// Match a filename against the known-agency table
fn detect_agency(file_name: &str) -> Option<&'static KnownAgency> {
    let lower = file_name.to_lowercase();
    AGENCIES
        .iter()
        .find(|a| a.key == lower)
        .or_else(|| AGENCIES.iter().find(|a| lower.contains(a.key)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_match_wins() {
        // "dot" is a substring of "dotr", exact match must win
        assert_eq!(detect_agency("dot").unwrap().acronym, "DOT");
        assert_eq!(detect_agency("dotr").unwrap().acronym, "DOTr");
    }

    #[test]
    fn test_substring_match_in_table_order() {
        assert_eq!(detect_agency("doh-logo-final").unwrap().acronym, "DOH");
        assert_eq!(detect_agency("new-deped-seal").unwrap().acronym, "DepEd");
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(detect_agency("DOH").unwrap().acronym, "DOH");
    }

    #[test]
    fn test_unknown_filename() {
        assert!(detect_agency("mystery-agency").is_none());
    }
}

//! Government branch and category taxonomy.
//!
//! Both levels are closed enumerations. The branch→category legality table
//! mirrors the two-level directory partition under `packages/core/icons/`,
//! and is checked at metadata construction time rather than left to the UI.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// First-level partition: branch of government
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Branch {
    Executive,
    Legislative,
    Judicial,
    Constitutional,
    Local,
    Gocc,
    Other,
}

/// Second-level partition: sub-unit type, scoped per branch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    OfficeOfThePresident,
    CabinetDepartments,
    ExecutiveAgencies,
    Senate,
    HouseOfRepresentatives,
    CongressionalCommittees,
    SupremeCourt,
    CourtOfAppeals,
    RegionalTrialCourts,
    MunicipalTrialCourts,
    Comelec,
    Coa,
    Csc,
    Chr,
    Provinces,
    Cities,
    Municipalities,
    Barangays,
    Transportation,
    Utilities,
    Financial,
    Development,
    Other,
}

impl Branch {
    pub const ALL: [Branch; 7] = [
        Branch::Executive,
        Branch::Legislative,
        Branch::Judicial,
        Branch::Constitutional,
        Branch::Local,
        Branch::Gocc,
        Branch::Other,
    ];

    /// Directory / JSON name (kebab-case)
    pub fn as_str(self) -> &'static str {
        match self {
            Branch::Executive => "executive",
            Branch::Legislative => "legislative",
            Branch::Judicial => "judicial",
            Branch::Constitutional => "constitutional",
            Branch::Local => "local",
            Branch::Gocc => "gocc",
            Branch::Other => "other",
        }
    }

    /// Categories legal under this branch
    pub fn categories(self) -> &'static [Category] {
        use Category::*;
        match self {
            Branch::Executive => &[OfficeOfThePresident, CabinetDepartments, ExecutiveAgencies],
            Branch::Legislative => &[Senate, HouseOfRepresentatives, CongressionalCommittees],
            Branch::Judicial => &[
                SupremeCourt,
                CourtOfAppeals,
                RegionalTrialCourts,
                MunicipalTrialCourts,
            ],
            Branch::Constitutional => &[Comelec, Coa, Csc, Chr],
            Branch::Local => &[Provinces, Cities, Municipalities, Barangays],
            Branch::Gocc => &[Transportation, Utilities, Financial, Development],
            Branch::Other => &[Other],
        }
    }

    /// Whether `category` belongs to this branch's legal set
    pub fn allows(self, category: Category) -> bool {
        self.categories().contains(&category)
    }

    /// Human-readable name for listings
    pub fn display_name(self) -> &'static str {
        match self {
            Branch::Executive => "Executive Branch",
            Branch::Legislative => "Legislative Branch",
            Branch::Judicial => "Judicial Branch",
            Branch::Constitutional => "Constitutional Bodies",
            Branch::Local => "Local Government Units",
            Branch::Gocc => "Government-Owned Corporations",
            Branch::Other => "Other",
        }
    }
}

impl Category {
    /// Directory / JSON name (kebab-case)
    pub fn as_str(self) -> &'static str {
        match self {
            Category::OfficeOfThePresident => "office-of-the-president",
            Category::CabinetDepartments => "cabinet-departments",
            Category::ExecutiveAgencies => "executive-agencies",
            Category::Senate => "senate",
            Category::HouseOfRepresentatives => "house-of-representatives",
            Category::CongressionalCommittees => "congressional-committees",
            Category::SupremeCourt => "supreme-court",
            Category::CourtOfAppeals => "court-of-appeals",
            Category::RegionalTrialCourts => "regional-trial-courts",
            Category::MunicipalTrialCourts => "municipal-trial-courts",
            Category::Comelec => "comelec",
            Category::Coa => "coa",
            Category::Csc => "csc",
            Category::Chr => "chr",
            Category::Provinces => "provinces",
            Category::Cities => "cities",
            Category::Municipalities => "municipalities",
            Category::Barangays => "barangays",
            Category::Transportation => "transportation",
            Category::Utilities => "utilities",
            Category::Financial => "financial",
            Category::Development => "development",
            Category::Other => "other",
        }
    }

    /// Human-readable name for listings
    pub fn display_name(self) -> &'static str {
        match self {
            Category::OfficeOfThePresident => "Office of the President",
            Category::CabinetDepartments => "Cabinet Departments",
            Category::ExecutiveAgencies => "Executive Agencies",
            Category::Senate => "Senate",
            Category::HouseOfRepresentatives => "House of Representatives",
            Category::CongressionalCommittees => "Congressional Committees",
            Category::SupremeCourt => "Supreme Court",
            Category::CourtOfAppeals => "Court of Appeals",
            Category::RegionalTrialCourts => "Regional Trial Courts",
            Category::MunicipalTrialCourts => "Municipal Trial Courts",
            Category::Comelec => "Commission on Elections (COMELEC)",
            Category::Coa => "Commission on Audit (COA)",
            Category::Csc => "Civil Service Commission (CSC)",
            Category::Chr => "Commission on Human Rights (CHR)",
            Category::Provinces => "Provinces",
            Category::Cities => "Cities",
            Category::Municipalities => "Municipalities",
            Category::Barangays => "Barangays",
            Category::Transportation => "Transportation",
            Category::Utilities => "Utilities",
            Category::Financial => "Financial",
            Category::Development => "Development",
            Category::Other => "Other",
        }
    }
}

impl fmt::Display for Branch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_legality_table() {
        assert!(Branch::Executive.allows(Category::CabinetDepartments));
        assert!(Branch::Legislative.allows(Category::Senate));
        assert!(Branch::Judicial.allows(Category::SupremeCourt));
        assert!(Branch::Constitutional.allows(Category::Comelec));
        assert!(Branch::Local.allows(Category::Barangays));
        assert!(Branch::Gocc.allows(Category::Financial));
        assert!(Branch::Other.allows(Category::Other));

        assert!(!Branch::Executive.allows(Category::Senate));
        assert!(!Branch::Judicial.allows(Category::CabinetDepartments));
        assert!(!Branch::Gocc.allows(Category::Other));
    }

    #[test]
    fn test_every_category_belongs_to_exactly_one_branch() {
        // "other" is the only category, and it belongs only to branch "other"
        for branch in Branch::ALL {
            for &category in branch.categories() {
                let owners = Branch::ALL
                    .iter()
                    .filter(|b| b.allows(category))
                    .count();
                assert_eq!(owners, 1, "{category} owned by {owners} branches");
            }
        }
    }

    #[test]
    fn test_display_names() {
        assert_eq!(Branch::Gocc.display_name(), "Government-Owned Corporations");
        assert_eq!(
            Category::Comelec.display_name(),
            "Commission on Elections (COMELEC)"
        );
    }

    #[test]
    fn test_serde_kebab_case() {
        assert_eq!(
            serde_json::to_string(&Branch::Executive).unwrap(),
            "\"executive\""
        );
        assert_eq!(
            serde_json::to_string(&Category::OfficeOfThePresident).unwrap(),
            "\"office-of-the-president\""
        );
        let c: Category = serde_json::from_str("\"house-of-representatives\"").unwrap();
        assert_eq!(c, Category::HouseOfRepresentatives);
    }

    #[test]
    fn test_as_str_matches_serde_name() {
        for branch in Branch::ALL {
            let json = serde_json::to_string(&branch).unwrap();
            assert_eq!(json, format!("\"{}\"", branch.as_str()));
            for &category in branch.categories() {
                let json = serde_json::to_string(&category).unwrap();
                assert_eq!(json, format!("\"{}\"", category.as_str()));
            }
        }
    }
}

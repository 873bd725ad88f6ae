//! The closed set of academic departments.
//!
//! Posts are partitioned per department, and each department corresponds to
//! exactly one access level. Both mappings are fixed at compile time: an
//! unknown slug or access level is unrepresentable past this boundary, so a
//! raw request string can never address a storage partition directly.

use core::fmt;

use serde::{Deserialize, Serialize};

/// A user's access level.
///
/// Determines which single department, if any, the user may author posts in.
/// Level 0 is reserved for the anonymous identity and maps to no department.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccessLevel(i32);

impl AccessLevel {
    /// Create an access level from its raw database value.
    #[must_use]
    pub const fn new(level: i32) -> Self {
        Self(level)
    }

    /// Get the underlying i32 value.
    #[must_use]
    pub const fn as_i32(&self) -> i32 {
        self.0
    }
}

impl fmt::Display for AccessLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i32> for AccessLevel {
    fn from(level: i32) -> Self {
        Self(level)
    }
}

/// An academic department.
///
/// Serializes as its URL slug. The slug doubles as the name of the
/// department's post partition, so partition addressing always goes through
/// this enum rather than through request input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Department {
    #[serde(rename = "kafaiml")]
    Aiml,
    #[serde(rename = "kafvmat")]
    Vmat,
    #[serde(rename = "kafvychmat")]
    VychMat,
    #[serde(rename = "kafedra-vychislitelnykh-sistem")]
    VychSyst,
    #[serde(rename = "kafgitp")]
    Gitp,
    #[serde(rename = "kafgidro")]
    Gidro,
    #[serde(rename = "kafdmi")]
    Dmi,
    #[serde(rename = "kafdur")]
    Dur,
    #[serde(rename = "kafedra-matematicheskikh-metodov-geofiziki")]
    Mmgf,
    #[serde(rename = "kafma")]
    Ma,
    #[serde(rename = "kafmatmod")]
    MatMod,
    #[serde(rename = "kafmatek")]
    Matek,
    #[serde(rename = "kafmmmns")]
    Mmmns,
    #[serde(rename = "kafpm")]
    Pm,
    #[serde(rename = "kafprog")]
    Prog,
    #[serde(rename = "kaftk")]
    Tk,
    #[serde(rename = "kaftmeh")]
    Tmeh,
    #[serde(rename = "kaftvims")]
    Tvims,
    #[serde(rename = "kaftf")]
    Tf,
    #[serde(rename = "kafstudents")]
    Students,
}

impl Department {
    /// Every department, in access-level order.
    pub const ALL: [Self; 20] = [
        Self::Aiml,
        Self::Vmat,
        Self::VychMat,
        Self::VychSyst,
        Self::Gitp,
        Self::Gidro,
        Self::Dmi,
        Self::Dur,
        Self::Mmgf,
        Self::Ma,
        Self::MatMod,
        Self::Matek,
        Self::Mmmns,
        Self::Pm,
        Self::Prog,
        Self::Tk,
        Self::Tmeh,
        Self::Tvims,
        Self::Tf,
        Self::Students,
    ];

    /// The department's URL slug.
    ///
    /// All slugs match `kaf[a-z]*` except the two historically long-form
    /// identifiers, which have no provisioned partition.
    #[must_use]
    pub const fn slug(&self) -> &'static str {
        match self {
            Self::Aiml => "kafaiml",
            Self::Vmat => "kafvmat",
            Self::VychMat => "kafvychmat",
            Self::VychSyst => "kafedra-vychislitelnykh-sistem",
            Self::Gitp => "kafgitp",
            Self::Gidro => "kafgidro",
            Self::Dmi => "kafdmi",
            Self::Dur => "kafdur",
            Self::Mmgf => "kafedra-matematicheskikh-metodov-geofiziki",
            Self::Ma => "kafma",
            Self::MatMod => "kafmatmod",
            Self::Matek => "kafmatek",
            Self::Mmmns => "kafmmmns",
            Self::Pm => "kafpm",
            Self::Prog => "kafprog",
            Self::Tk => "kaftk",
            Self::Tmeh => "kaftmeh",
            Self::Tvims => "kaftvims",
            Self::Tf => "kaftf",
            Self::Students => "kafstudents",
        }
    }

    /// The access level whose holders may author posts in this department.
    #[must_use]
    pub const fn access_level(&self) -> AccessLevel {
        AccessLevel::new(match self {
            Self::Aiml => 1,
            Self::Vmat => 2,
            Self::VychMat => 3,
            Self::VychSyst => 4,
            Self::Gitp => 5,
            Self::Gidro => 6,
            Self::Dmi => 7,
            Self::Dur => 8,
            Self::Mmgf => 9,
            Self::Ma => 10,
            Self::MatMod => 11,
            Self::Matek => 12,
            Self::Mmmns => 13,
            Self::Pm => 14,
            Self::Prog => 15,
            Self::Tk => 16,
            Self::Tmeh => 17,
            Self::Tvims => 18,
            Self::Tf => 19,
            Self::Students => 20,
        })
    }

    /// The name of this department's post partition.
    ///
    /// Always a `&'static str` from the closed set; the only values that are
    /// ever interpolated into partition-addressing SQL.
    #[must_use]
    pub const fn table(&self) -> &'static str {
        self.slug()
    }

    /// Resolve the department a given access level may write to.
    ///
    /// Returns `None` for unmapped levels (including 0, the anonymous level).
    /// The mapping is injective: each configured level resolves to exactly
    /// one department.
    #[must_use]
    pub const fn from_access(level: AccessLevel) -> Option<Self> {
        match level.as_i32() {
            1 => Some(Self::Aiml),
            2 => Some(Self::Vmat),
            3 => Some(Self::VychMat),
            4 => Some(Self::VychSyst),
            5 => Some(Self::Gitp),
            6 => Some(Self::Gidro),
            7 => Some(Self::Dmi),
            8 => Some(Self::Dur),
            9 => Some(Self::Mmgf),
            10 => Some(Self::Ma),
            11 => Some(Self::MatMod),
            12 => Some(Self::Matek),
            13 => Some(Self::Mmmns),
            14 => Some(Self::Pm),
            15 => Some(Self::Prog),
            16 => Some(Self::Tk),
            17 => Some(Self::Tmeh),
            18 => Some(Self::Tvims),
            19 => Some(Self::Tf),
            20 => Some(Self::Students),
            _ => None,
        }
    }

    /// Look up a department by its URL slug.
    ///
    /// This is the authoritative validator for department identifiers taken
    /// from a request path; anything not in the closed set returns `None`.
    #[must_use]
    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|d| d.slug() == slug)
    }
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl std::str::FromStr for Department {
    type Err = UnknownDepartment;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_slug(s).ok_or_else(|| UnknownDepartment(s.to_owned()))
    }
}

/// Error returned when a string is not a known department slug.
#[derive(Debug, Clone, thiserror::Error)]
#[error("unknown department: {0}")]
pub struct UnknownDepartment(pub String);

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_access_mapping_is_injective() {
        let levels: HashSet<i32> = Department::ALL
            .iter()
            .map(|d| d.access_level().as_i32())
            .collect();
        assert_eq!(levels.len(), Department::ALL.len());

        let slugs: HashSet<&str> = Department::ALL.iter().map(Department::slug).collect();
        assert_eq!(slugs.len(), Department::ALL.len());
    }

    #[test]
    fn test_access_roundtrip() {
        for dept in Department::ALL {
            assert_eq!(Department::from_access(dept.access_level()), Some(dept));
        }
    }

    #[test]
    fn test_slug_roundtrip() {
        for dept in Department::ALL {
            assert_eq!(Department::from_slug(dept.slug()), Some(dept));
        }
    }

    #[test]
    fn test_configured_levels_cover_one_through_twenty() {
        for level in 1..=20 {
            assert!(Department::from_access(AccessLevel::new(level)).is_some());
        }
    }

    #[test]
    fn test_unmapped_levels_resolve_to_none() {
        for level in [0, -1, 21, 99, i32::MAX] {
            assert_eq!(Department::from_access(AccessLevel::new(level)), None);
        }
    }

    #[test]
    fn test_programming_department_is_level_fifteen() {
        let dept = Department::from_access(AccessLevel::new(15)).unwrap();
        assert_eq!(dept, Department::Prog);
        assert_eq!(dept.slug(), "kafprog");
    }

    #[test]
    fn test_from_slug_rejects_unknown_identifiers() {
        assert_eq!(Department::from_slug(""), None);
        assert_eq!(Department::from_slug("kafunknown"), None);
        assert_eq!(Department::from_slug("users"), None);
        assert_eq!(Department::from_slug("kafprog; DROP TABLE users"), None);
        assert_eq!(Department::from_slug("KAFPROG"), None);
    }

    #[test]
    fn test_all_slugs_carry_department_prefix() {
        for dept in Department::ALL {
            assert!(dept.slug().starts_with("kaf"), "bad slug: {}", dept.slug());
        }
    }

    #[test]
    fn test_serde_uses_slug() {
        let json = serde_json::to_string(&Department::Prog).unwrap();
        assert_eq!(json, "\"kafprog\"");
        let back: Department = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Department::Prog);
    }

    #[test]
    fn test_table_names_come_from_the_closed_set() {
        for dept in Department::ALL {
            assert_eq!(dept.table(), dept.slug());
        }
    }
}

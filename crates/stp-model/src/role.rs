//! Logical field roles located among arbitrary spreadsheet columns.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// A logical field identity the resolver must find in the input columns.
///
/// Declaration order is the order roles appear in reports.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    FirstName,
    LastName,
    HouseNumber,
    StreetName,
    StreetSuffix,
    Unit,
    City,
    State,
    Zip,
}

impl Role {
    /// Every role, in report order.
    pub const ALL: [Role; 9] = [
        Role::FirstName,
        Role::LastName,
        Role::HouseNumber,
        Role::StreetName,
        Role::StreetSuffix,
        Role::Unit,
        Role::City,
        Role::State,
        Role::Zip,
    ];

    /// Whether the transformation can proceed without this role.
    ///
    /// Only the street suffix and unit are optional.
    #[must_use]
    pub const fn is_required(self) -> bool {
        !matches!(self, Role::StreetSuffix | Role::Unit)
    }

    /// Stable identifier, e.g. `FIRST_NAME`.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Role::FirstName => "FIRST_NAME",
            Role::LastName => "LAST_NAME",
            Role::HouseNumber => "HOUSE_NUMBER",
            Role::StreetName => "STREET_NAME",
            Role::StreetSuffix => "STREET_SUFFIX",
            Role::Unit => "UNIT",
            Role::City => "CITY",
            Role::State => "STATE",
            Role::Zip => "ZIP",
        }
    }

    /// Human-readable label used in messages.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Role::FirstName => "first name",
            Role::LastName => "last name",
            Role::HouseNumber => "house number",
            Role::StreetName => "street name",
            Role::StreetSuffix => "street suffix",
            Role::Unit => "unit",
            Role::City => "city",
            Role::State => "state",
            Role::Zip => "ZIP",
        }
    }

    /// Column labels this role usually appears under, most preferred first.
    ///
    /// The `MAIL ...` variants come from county and list-broker exports and
    /// win over the generic labels when both are present.
    #[must_use]
    pub const fn default_synonyms(self) -> &'static [&'static str] {
        match self {
            Role::FirstName => &["OWNER 1 FIRST NAME", "FIRST NAME"],
            Role::LastName => &["OWNER 1 LAST NAME", "LAST NAME"],
            Role::HouseNumber => &["MAIL HOUSE NUMBER", "HOUSE NUMBER"],
            Role::StreetName => &["MAIL STREET NAME", "STREET NAME"],
            Role::StreetSuffix => &["MAIL STREET NAME SUFFIX", "SUFFIX"],
            Role::Unit => &["MAIL UNIT NUMBER", "UNIT", "APT", "SUITE"],
            Role::City => &["MAIL CITY", "CITY"],
            Role::State => &["MAIL STATE", "STATE"],
            Role::Zip => &["MAIL ZIP/ZIP+4", "ZIP"],
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Role {
    type Err = ModelError;

    /// Parses a role code, accepting `FIRST_NAME`, `first-name` or `First Name`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .trim()
            .chars()
            .map(|ch| match ch {
                '-' | ' ' => '_',
                other => other.to_ascii_uppercase(),
            })
            .collect();
        Role::ALL
            .into_iter()
            .find(|role| role.code() == key)
            .ok_or_else(|| ModelError::UnknownRole(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn optional_roles_are_suffix_and_unit() {
        let optional: Vec<Role> = Role::ALL
            .into_iter()
            .filter(|role| !role.is_required())
            .collect();
        assert_eq!(optional, vec![Role::StreetSuffix, Role::Unit]);
    }

    #[test]
    fn parses_role_codes_loosely() {
        assert_eq!("FIRST_NAME".parse::<Role>().unwrap(), Role::FirstName);
        assert_eq!("street-suffix".parse::<Role>().unwrap(), Role::StreetSuffix);
        assert_eq!(" Zip ".parse::<Role>().unwrap(), Role::Zip);
        assert_eq!(
            "county".parse::<Role>(),
            Err(ModelError::UnknownRole("county".to_string()))
        );
    }

    #[test]
    fn every_role_has_synonyms() {
        for role in Role::ALL {
            assert!(!role.default_synonyms().is_empty(), "{role} has no synonyms");
        }
    }
}

//! Closed value sets used by the browse filters and the publish wizard.
//!
//! Every list here is fixed at compile time. Free strings coming from the UI
//! are checked against these tables instead of being used as lookup keys.

use crate::error::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};

/// Sentinel type value that disables the type predicate.
pub const ALL_TYPES: &str = "Todos";

pub const TYPES: [&str; 4] = [ALL_TYPES, "Machos", "Hembras", "Cría"];

pub const CATEGORIES: [&str; 9] = [
    "Becerros",
    "Vacas",
    "Vacas Preñadas",
    "Toros",
    "Mautes",
    "Novillas",
    "Novillas Preñadas",
    "Novillos",
    "Toros para padre",
];

pub const LOCATIONS: [&str; 10] = [
    "Anzoátegui",
    "Bolívar",
    "Carabobo",
    "Cojedes",
    "Lara",
    "Mérida",
    "Miranda",
    "Portuguesa",
    "Táchira",
    "Zulia",
];

/// A family of breeds. Each group carries its own fixed breed list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BreedGroup {
    #[serde(rename = "Cebú")]
    Cebu,
    Lecheras,
}

impl BreedGroup {
    pub const ALL: [BreedGroup; 2] = [BreedGroup::Cebu, BreedGroup::Lecheras];

    pub fn label(&self) -> &'static str {
        match self {
            BreedGroup::Cebu => "Cebú",
            BreedGroup::Lecheras => "Lecheras",
        }
    }

    pub fn breeds(&self) -> &'static [&'static str] {
        match self {
            BreedGroup::Cebu => &["Brahman", "Nelore", "Guzerát", "Gir"],
            BreedGroup::Lecheras => &["Carora", "Holstein", "Jersey", "Pardo Suizo"],
        }
    }

    /// First breed of the group, used as the wizard default.
    pub fn default_breed(&self) -> &'static str {
        self.breeds()[0]
    }

    pub fn contains(&self, breed: &str) -> bool {
        self.breeds().contains(&breed)
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|g| g.label() == label)
    }

    /// The group a breed belongs to, if any.
    pub fn of_breed(breed: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|g| g.contains(breed))
    }
}

impl std::fmt::Display for BreedGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for BreedGroup {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s).ok_or_else(|| CoreError::UnknownValue {
            kind: "breed group",
            value: s.to_string(),
        })
    }
}

/// Which closed list a value must belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Type,
    Category,
    Location,
}

impl Field {
    pub fn name(&self) -> &'static str {
        match self {
            Field::Type => "type",
            Field::Category => "category",
            Field::Location => "location",
        }
    }

    pub fn options(&self) -> &'static [&'static str] {
        match self {
            Field::Type => &TYPES,
            Field::Category => &CATEGORIES,
            Field::Location => &LOCATIONS,
        }
    }

    /// Resolve a UI string to its canonical `'static` entry.
    pub fn resolve(&self, value: &str) -> CoreResult<&'static str> {
        self.options()
            .iter()
            .copied()
            .find(|o| *o == value)
            .ok_or_else(|| CoreError::UnknownValue {
                kind: self.name(),
                value: value.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_breed_group_lookup() {
        assert_eq!(BreedGroup::from_label("Cebú"), Some(BreedGroup::Cebu));
        assert_eq!(BreedGroup::from_label("Cebu"), None);
        assert_eq!(BreedGroup::of_breed("Holstein"), Some(BreedGroup::Lecheras));
        assert_eq!(BreedGroup::Cebu.default_breed(), "Brahman");
        assert!("Angus".parse::<BreedGroup>().is_err());
    }

    #[test]
    fn test_field_resolve() {
        assert_eq!(Field::Category.resolve("Toros").unwrap(), "Toros");
        assert!(Field::Location.resolve("Caracas").is_err());
        assert_eq!(Field::Type.options()[0], ALL_TYPES);
    }

    #[test]
    fn test_breed_group_serialization() {
        let json = serde_json::to_string(&BreedGroup::Cebu).unwrap();
        assert_eq!(json, "\"Cebú\"");
    }
}

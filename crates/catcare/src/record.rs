//! Cat record types.
//!
//! A [`CatRecord`] is created with every nested section already initialized,
//! so callers never need to default a section on first access.

use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Placeholder shown for empty profile fields.
pub const EMPTY_FIELD: &str = "—";

/// How the cat came into the household.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CatType {
    /// A household pet.
    Owned,
    /// A feral or community cat.
    #[default]
    Feral,
    /// A cat in temporary foster care.
    Foster,
}

impl CatType {
    /// All cat types in form order.
    pub const ALL: [CatType; 3] = [Self::Owned, Self::Feral, Self::Foster];
}

impl std::fmt::Display for CatType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Owned => write!(f, "Owned"),
            Self::Feral => write!(f, "Feral"),
            Self::Foster => write!(f, "Foster"),
        }
    }
}

impl FromStr for CatType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "owned" => Ok(Self::Owned),
            "feral" => Ok(Self::Feral),
            "foster" => Ok(Self::Foster),
            other => Err(format!(
                "unknown cat type '{other}' (expected owned, feral or foster)"
            )),
        }
    }
}

/// Feeding details for one cat.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feeding {
    /// Food brand or type.
    pub food: String,
    /// When the cat is fed.
    pub schedule: String,
    /// Free-form feeding notes.
    pub notes: String,
}

/// Selects a single feeding field for in-place edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedingField {
    /// The food type.
    Food,
    /// The feeding schedule.
    Schedule,
    /// Feeding notes.
    Notes,
}

impl Feeding {
    /// Overwrite one field.
    pub fn set(&mut self, field: FeedingField, value: String) {
        match field {
            FeedingField::Food => self.food = value,
            FeedingField::Schedule => self.schedule = value,
            FeedingField::Notes => self.notes = value,
        }
    }
}

/// Litter box details for one cat.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Litter {
    /// Litter brand or material.
    #[serde(rename = "type")]
    pub litter_type: String,
    /// When the box was last cleaned (free-form).
    pub last_cleaned: String,
    /// Free-form litter notes.
    pub notes: String,
}

/// Selects a single litter field for in-place edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LitterField {
    /// The litter type.
    Type,
    /// When the box was last cleaned.
    LastCleaned,
    /// Litter notes.
    Notes,
}

impl Litter {
    /// Overwrite one field.
    pub fn set(&mut self, field: LitterField, value: String) {
        match field {
            LitterField::Type => self.litter_type = value,
            LitterField::LastCleaned => self.last_cleaned = value,
            LitterField::Notes => self.notes = value,
        }
    }
}

/// One medication entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Medication {
    /// Medication name, never blank.
    pub name: String,
    /// Dosage, may be blank.
    pub dosage: String,
    /// How often it is given, may be blank.
    pub frequency: String,
}

/// One vet visit entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VetVisit {
    /// Visit date, serialized as `YYYY-MM-DD`.
    pub date: NaiveDate,
    /// Reason for the visit, may be blank.
    pub reason: String,
}

/// Everything tracked about one cat.
///
/// The `name` is the record's identity within a store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatRecord {
    /// Unique, trimmed name.
    pub name: String,
    /// Owned, feral or foster.
    #[serde(rename = "type")]
    pub cat_type: CatType,
    /// Free-form age.
    pub age: String,
    /// Free-form profile notes.
    pub notes: String,
    /// Feeding section.
    pub feeding: Feeding,
    /// Medications in the order they were added.
    pub meds: Vec<Medication>,
    /// Vet visits in the order they were logged.
    pub vet: Vec<VetVisit>,
    /// Litter section.
    pub litter: Litter,
}

impl CatRecord {
    /// Create a record with empty care sections.
    ///
    /// The caller is responsible for trimming and validating `name`.
    #[must_use]
    pub fn new(name: String, cat_type: CatType, age: String, notes: String) -> Self {
        Self {
            name,
            cat_type,
            age,
            notes,
            feeding: Feeding::default(),
            meds: Vec::new(),
            vet: Vec::new(),
            litter: Litter::default(),
        }
    }

    /// Age for display, with a placeholder when blank.
    #[must_use]
    pub fn display_age(&self) -> &str {
        or_placeholder(&self.age)
    }

    /// Notes for display, with a placeholder when blank.
    #[must_use]
    pub fn display_notes(&self) -> &str {
        or_placeholder(&self.notes)
    }
}

fn or_placeholder(value: &str) -> &str {
    if value.is_empty() {
        EMPTY_FIELD
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mango() -> CatRecord {
        CatRecord::new(
            "Mango".to_string(),
            CatType::Feral,
            "3".to_string(),
            "shy".to_string(),
        )
    }

    #[test]
    fn test_new_record_sections_are_empty() {
        let cat = mango();
        assert_eq!(cat.feeding, Feeding::default());
        assert_eq!(cat.litter, Litter::default());
        assert!(cat.meds.is_empty());
        assert!(cat.vet.is_empty());
    }

    #[test]
    fn test_cat_type_display() {
        assert_eq!(CatType::Owned.to_string(), "Owned");
        assert_eq!(CatType::Feral.to_string(), "Feral");
        assert_eq!(CatType::Foster.to_string(), "Foster");
    }

    #[test]
    fn test_cat_type_from_str() {
        assert_eq!("owned".parse::<CatType>(), Ok(CatType::Owned));
        assert_eq!(" Feral ".parse::<CatType>(), Ok(CatType::Feral));
        assert_eq!("FOSTER".parse::<CatType>(), Ok(CatType::Foster));
        assert!("tiger".parse::<CatType>().is_err());
    }

    #[test]
    fn test_cat_type_default_is_feral() {
        assert_eq!(CatType::default(), CatType::Feral);
    }

    #[test]
    fn test_feeding_set_overwrites() {
        let mut feeding = Feeding::default();
        feeding.set(FeedingField::Food, "kibble".to_string());
        feeding.set(FeedingField::Food, "wet".to_string());
        feeding.set(FeedingField::Schedule, "8am".to_string());
        assert_eq!(feeding.food, "wet");
        assert_eq!(feeding.schedule, "8am");
        assert!(feeding.notes.is_empty());
    }

    #[test]
    fn test_litter_set_overwrites() {
        let mut litter = Litter::default();
        litter.set(LitterField::Type, "clay".to_string());
        litter.set(LitterField::LastCleaned, "Monday".to_string());
        litter.set(LitterField::LastCleaned, "Tuesday".to_string());
        assert_eq!(litter.litter_type, "clay");
        assert_eq!(litter.last_cleaned, "Tuesday");
    }

    #[test]
    fn test_display_placeholders() {
        let mut cat = mango();
        assert_eq!(cat.display_age(), "3");
        cat.age.clear();
        cat.notes.clear();
        assert_eq!(cat.display_age(), EMPTY_FIELD);
        assert_eq!(cat.display_notes(), EMPTY_FIELD);
    }

    #[test]
    fn test_record_serialization() {
        let mut cat = mango();
        cat.vet.push(VetVisit {
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            reason: String::new(),
        });
        cat.litter.litter_type = "clay".to_string();

        let json = serde_json::to_value(&cat).unwrap();
        assert_eq!(json["type"], "feral");
        assert_eq!(json["vet"][0]["date"], "2024-01-01");
        assert_eq!(json["vet"][0]["reason"], "");
        assert_eq!(json["litter"]["type"], "clay");
        assert_eq!(json["litter"]["last_cleaned"], "");
    }
}

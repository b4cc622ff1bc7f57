//! In-memory record store for one planner session.
//!
//! Records are kept in insertion order, which is also the sidebar order.
//! Names are unique after trimming and compared case-sensitively.

use chrono::NaiveDate;
use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::record::{CatRecord, CatType, Feeding, FeedingField, Litter, LitterField, Medication, VetVisit};

/// The ordered collection of cat records for one session.
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    cats: Vec<CatRecord>,
}

impl RecordStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a new cat.
    ///
    /// `name`, `age` and `notes` are trimmed. The new record starts with empty
    /// feeding and litter sections and no meds or vet visits.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyName`] if the name is blank after trimming, or
    /// [`Error::DuplicateName`] if a cat with the trimmed name already exists.
    /// The store is unchanged in both cases.
    pub fn add(
        &mut self,
        name: &str,
        cat_type: CatType,
        age: &str,
        notes: &str,
    ) -> Result<&CatRecord> {
        let name = name.trim();
        if name.is_empty() {
            return Err(Error::EmptyName);
        }
        if self.contains(name) {
            debug!("Rejecting duplicate cat name {name:?}");
            return Err(Error::duplicate_name(name));
        }

        self.cats.push(CatRecord::new(
            name.to_string(),
            cat_type,
            age.trim().to_string(),
            notes.trim().to_string(),
        ));
        debug!("Added cat {name:?} ({cat_type}), {} total", self.cats.len());
        Ok(&self.cats[self.cats.len() - 1])
    }

    /// Look up a cat by exact name.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&CatRecord> {
        self.cats.iter().find(|cat| cat.name == name)
    }

    fn find_mut(&mut self, name: &str) -> Result<&mut CatRecord> {
        self.cats
            .iter_mut()
            .find(|cat| cat.name == name)
            .ok_or_else(|| Error::missing_record(name))
    }

    /// Check whether a cat with this exact name exists.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.find(name).is_some()
    }

    /// Remove a cat. Returns whether a record was removed.
    pub fn remove(&mut self, name: &str) -> bool {
        let before = self.cats.len();
        self.cats.retain(|cat| cat.name != name);
        let removed = self.cats.len() < before;
        if removed {
            debug!("Removed cat {name:?}, {} remaining", self.cats.len());
        } else {
            trace!("No cat {name:?} to remove");
        }
        removed
    }

    /// Overwrite the whole feeding section.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingRecord`] if no cat has this name.
    pub fn update_feeding(
        &mut self,
        name: &str,
        food: &str,
        schedule: &str,
        notes: &str,
    ) -> Result<()> {
        let cat = self.find_mut(name)?;
        cat.feeding = Feeding {
            food: food.to_string(),
            schedule: schedule.to_string(),
            notes: notes.to_string(),
        };
        debug!("Updated feeding for {name:?}");
        Ok(())
    }

    /// Overwrite a single feeding field.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingRecord`] if no cat has this name.
    pub fn set_feeding_field(&mut self, name: &str, field: FeedingField, value: &str) -> Result<()> {
        self.find_mut(name)?.feeding.set(field, value.to_string());
        debug!("Set feeding {field:?} for {name:?}");
        Ok(())
    }

    /// Overwrite the whole litter section.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingRecord`] if no cat has this name.
    pub fn update_litter(
        &mut self,
        name: &str,
        litter_type: &str,
        last_cleaned: &str,
        notes: &str,
    ) -> Result<()> {
        let cat = self.find_mut(name)?;
        cat.litter = Litter {
            litter_type: litter_type.to_string(),
            last_cleaned: last_cleaned.to_string(),
            notes: notes.to_string(),
        };
        debug!("Updated litter for {name:?}");
        Ok(())
    }

    /// Overwrite a single litter field.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingRecord`] if no cat has this name.
    pub fn set_litter_field(&mut self, name: &str, field: LitterField, value: &str) -> Result<()> {
        self.find_mut(name)?.litter.set(field, value.to_string());
        debug!("Set litter {field:?} for {name:?}");
        Ok(())
    }

    /// Append a medication.
    ///
    /// Returns `Ok(false)` without touching the record when `med` is blank
    /// after trimming. Dosage and frequency may be blank.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingRecord`] if no cat has this name.
    pub fn add_medication(&mut self, name: &str, med: &str, dose: &str, freq: &str) -> Result<bool> {
        let cat = self.find_mut(name)?;
        let med = med.trim();
        if med.is_empty() {
            trace!("Ignoring medication with blank name for {name:?}");
            return Ok(false);
        }
        cat.meds.push(Medication {
            name: med.to_string(),
            dosage: dose.trim().to_string(),
            frequency: freq.trim().to_string(),
        });
        debug!("Added medication {med:?} for {name:?}");
        Ok(true)
    }

    /// Append a vet visit. A blank reason is allowed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingRecord`] if no cat has this name.
    pub fn add_vet_visit(&mut self, name: &str, date: NaiveDate, reason: &str) -> Result<()> {
        let cat = self.find_mut(name)?;
        cat.vet.push(VetVisit {
            date,
            reason: reason.trim().to_string(),
        });
        debug!("Logged vet visit on {date} for {name:?}");
        Ok(())
    }

    /// Iterate over records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &CatRecord> {
        self.cats.iter()
    }

    /// Names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.cats.iter().map(|cat| cat.name.as_str())
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cats.len()
    }

    /// Whether the store has no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cats.is_empty()
    }
}

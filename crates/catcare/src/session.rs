//! One planner session: a record store, a navigator and the input handlers.
//!
//! A [`Session`] is created empty, mutated only through [`Session::handle`]
//! (one handler per input type) and dropped when the user is done. Nothing
//! here is shared between sessions.

use chrono::NaiveDate;
use tracing::{debug, trace};

use crate::config::Config;
use crate::error::{Error, Result};
use crate::nav::{Destination, Navigator, Page};
use crate::record::{CatType, Feeding, FeedingField, Litter, LitterField};
use crate::store::RecordStore;
use crate::view::View;

/// The Add-Cat form contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCat {
    /// Cat name, trimmed on save.
    pub name: String,
    /// Owned, feral or foster.
    pub cat_type: CatType,
    /// Free-form age.
    pub age: String,
    /// Free-form notes.
    pub notes: String,
}

impl NewCat {
    /// A form with only the name filled in.
    #[must_use]
    pub fn named(name: impl Into<String>, cat_type: CatType) -> Self {
        Self {
            name: name.into(),
            cat_type,
            age: String::new(),
            notes: String::new(),
        }
    }
}

/// A user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Pick a sidebar entry.
    Navigate(Destination),
    /// "Get started" on Home.
    GetStarted,
    /// Submit the Add-Cat form.
    SubmitCat(NewCat),
    /// "Cancel" on the Add-Cat form.
    Cancel,
    /// Replace the current cat's feeding section.
    UpdateFeeding(Feeding),
    /// Edit one feeding field of the current cat.
    EditFeeding(FeedingField, String),
    /// Replace the current cat's litter section.
    UpdateLitter(Litter),
    /// Edit one litter field of the current cat.
    EditLitter(LitterField, String),
    /// "Add medication" on the current cat.
    AddMedication {
        /// Medication name; blank names are ignored.
        name: String,
        /// Dosage, may be blank.
        dosage: String,
        /// Frequency, may be blank.
        frequency: String,
    },
    /// "Add vet visit" on the current cat.
    AddVetVisit {
        /// Visit date.
        date: NaiveDate,
        /// Reason, may be blank.
        reason: String,
    },
    /// "Delete this cat" on the current cat.
    DeleteCat,
}

/// What handling an event did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The page or the store changed.
    Changed,
    /// The input does not apply here; nothing changed.
    Ignored,
}

impl Outcome {
    /// Whether anything changed.
    #[must_use]
    pub fn is_changed(self) -> bool {
        self == Self::Changed
    }
}

impl From<bool> for Outcome {
    fn from(changed: bool) -> Self {
        if changed {
            Self::Changed
        } else {
            Self::Ignored
        }
    }
}

/// State for one interactive session.
#[derive(Debug, Clone)]
pub struct Session {
    store: RecordStore,
    nav: Navigator,
    default_cat_type: CatType,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// Start an empty session on Home with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            store: RecordStore::new(),
            nav: Navigator::default(),
            default_cat_type: CatType::default(),
        }
    }

    /// Start an empty session using the given configuration.
    #[must_use]
    pub fn with_config(config: &Config) -> Self {
        Self {
            store: RecordStore::new(),
            nav: Navigator::new(config.navigation.show_feral_care),
            default_cat_type: config.session.default_cat_type,
        }
    }

    /// The current page.
    #[must_use]
    pub fn page(&self) -> &Page {
        self.nav.page()
    }

    /// The navigator.
    #[must_use]
    pub fn navigator(&self) -> &Navigator {
        &self.nav
    }

    /// The record store.
    #[must_use]
    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    /// Mutable access to the record store for direct per-name operations.
    pub fn store_mut(&mut self) -> &mut RecordStore {
        &mut self.store
    }

    /// Type preselected on the Add-Cat form.
    #[must_use]
    pub fn default_cat_type(&self) -> CatType {
        self.default_cat_type
    }

    /// Project the current state for rendering.
    #[must_use]
    pub fn view(&self) -> View<'_> {
        View::of(self)
    }

    /// Handle one input to completion.
    ///
    /// # Errors
    ///
    /// - [`Error::EmptyName`] / [`Error::DuplicateName`] when the Add-Cat form
    ///   is invalid; the session stays on the form.
    /// - [`Error::NotOnCatPage`] / [`Error::MissingRecord`] when a per-cat
    ///   input has no live cat to apply to.
    ///
    /// The session is unchanged whenever an error is returned.
    pub fn handle(&mut self, event: Event) -> Result<Outcome> {
        debug!("Handling {event:?} on {:?}", self.nav.page());
        let outcome: Outcome = match event {
            Event::Navigate(destination) => self.nav.select(&destination, &self.store).into(),
            Event::GetStarted => self.nav.get_started().into(),
            Event::Cancel => self.nav.cancel().into(),
            Event::SubmitCat(new_cat) => self.submit_cat(&new_cat)?,
            Event::UpdateFeeding(feeding) => {
                let name = self.current_cat()?;
                self.store
                    .update_feeding(&name, &feeding.food, &feeding.schedule, &feeding.notes)?;
                Outcome::Changed
            }
            Event::EditFeeding(field, value) => {
                let name = self.current_cat()?;
                self.store.set_feeding_field(&name, field, &value)?;
                Outcome::Changed
            }
            Event::UpdateLitter(litter) => {
                let name = self.current_cat()?;
                self.store.update_litter(
                    &name,
                    &litter.litter_type,
                    &litter.last_cleaned,
                    &litter.notes,
                )?;
                Outcome::Changed
            }
            Event::EditLitter(field, value) => {
                let name = self.current_cat()?;
                self.store.set_litter_field(&name, field, &value)?;
                Outcome::Changed
            }
            Event::AddMedication {
                name: med,
                dosage,
                frequency,
            } => {
                let name = self.current_cat()?;
                self.store
                    .add_medication(&name, &med, &dosage, &frequency)?
                    .into()
            }
            Event::AddVetVisit { date, reason } => {
                let name = self.current_cat()?;
                self.store.add_vet_visit(&name, date, &reason)?;
                Outcome::Changed
            }
            Event::DeleteCat => self.delete_cat()?,
        };
        if outcome == Outcome::Ignored {
            trace!("Input had no effect on {:?}", self.nav.page());
        }
        Ok(outcome)
    }

    fn submit_cat(&mut self, new_cat: &NewCat) -> Result<Outcome> {
        if self.nav.page() != &Page::AddCat {
            return Ok(Outcome::Ignored);
        }
        let name = self
            .store
            .add(&new_cat.name, new_cat.cat_type, &new_cat.age, &new_cat.notes)?
            .name
            .clone();
        self.nav.cat_saved(&name);
        Ok(Outcome::Changed)
    }

    fn delete_cat(&mut self) -> Result<Outcome> {
        let name = self.current_cat()?;
        self.store.remove(&name);
        self.nav.cat_deleted();
        debug!("Deleted {name:?} and returned Home");
        Ok(Outcome::Changed)
    }

    /// Name of the live cat on the current page.
    fn current_cat(&self) -> Result<String> {
        let name = self.nav.page().cat_name().ok_or(Error::NotOnCatPage)?;
        if self.store.contains(name) {
            Ok(name.to_string())
        } else {
            Err(Error::missing_record(name))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Medication;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn add_cat(session: &mut Session, name: &str) {
        session.handle(Event::Navigate(Destination::Home)).unwrap();
        session.handle(Event::GetStarted).unwrap();
        session
            .handle(Event::SubmitCat(NewCat::named(name, CatType::Owned)))
            .unwrap();
    }

    fn med(name: &str, dosage: &str, frequency: &str) -> Event {
        Event::AddMedication {
            name: name.to_string(),
            dosage: dosage.to_string(),
            frequency: frequency.to_string(),
        }
    }

    #[test]
    fn test_scenario_add_cat_jumps_to_cat_page() {
        let mut session = Session::new();
        session.handle(Event::GetStarted).unwrap();
        let outcome = session
            .handle(Event::SubmitCat(NewCat {
                name: "Mango".to_string(),
                cat_type: CatType::Feral,
                age: "3".to_string(),
                notes: "shy".to_string(),
            }))
            .unwrap();

        assert!(outcome.is_changed());
        assert_eq!(session.store().len(), 1);
        let cat = session.store().find("Mango").unwrap();
        assert_eq!(cat.cat_type, CatType::Feral);
        assert_eq!(cat.age, "3");
        assert_eq!(cat.notes, "shy");
        assert_eq!(session.page(), &Page::Cat("Mango".to_string()));
    }

    #[test]
    fn test_scenario_duplicate_with_trailing_space() {
        let mut session = Session::new();
        add_cat(&mut session, "Mango");

        session.handle(Event::Navigate(Destination::Home)).unwrap();
        session.handle(Event::GetStarted).unwrap();
        let err = session
            .handle(Event::SubmitCat(NewCat::named("Mango ", CatType::Feral)))
            .unwrap_err();

        assert!(matches!(err, Error::DuplicateName { .. }));
        assert_eq!(session.store().len(), 1);
        assert_eq!(session.page(), &Page::AddCat);
    }

    #[test]
    fn test_scenario_blank_medication_then_real_one() {
        let mut session = Session::new();
        add_cat(&mut session, "Mango");

        assert_eq!(session.handle(med("", "5mg", "daily")).unwrap(), Outcome::Ignored);
        assert!(session.store().find("Mango").unwrap().meds.is_empty());

        assert_eq!(
            session.handle(med("Amoxicillin", "5mg", "daily")).unwrap(),
            Outcome::Changed
        );
        assert_eq!(
            session.store().find("Mango").unwrap().meds,
            vec![Medication {
                name: "Amoxicillin".to_string(),
                dosage: "5mg".to_string(),
                frequency: "daily".to_string(),
            }]
        );
    }

    #[test]
    fn test_scenario_vet_visit_without_reason() {
        let mut session = Session::new();
        add_cat(&mut session, "Mango");

        session
            .handle(Event::AddVetVisit {
                date: date(2024, 1, 1),
                reason: String::new(),
            })
            .unwrap();

        let vet = &session.store().find("Mango").unwrap().vet;
        assert_eq!(vet.len(), 1);
        assert_eq!(vet[0].date.to_string(), "2024-01-01");
        assert_eq!(vet[0].reason, "");
    }

    #[test]
    fn test_scenario_delete_returns_home() {
        let mut session = Session::new();
        add_cat(&mut session, "Mango");

        assert!(session.handle(Event::DeleteCat).unwrap().is_changed());
        assert!(session.store().is_empty());
        assert_eq!(session.page(), &Page::Home);
    }

    #[test]
    fn test_empty_name_stays_on_form() {
        let mut session = Session::new();
        session.handle(Event::GetStarted).unwrap();
        let err = session
            .handle(Event::SubmitCat(NewCat::named("   ", CatType::Feral)))
            .unwrap_err();

        assert!(matches!(err, Error::EmptyName));
        assert!(session.store().is_empty());
        assert_eq!(session.page(), &Page::AddCat);
    }

    #[test]
    fn test_only_cancel_or_save_leave_add_cat() {
        let mut session = Session::new();
        add_cat(&mut session, "Olive");
        session.handle(Event::Navigate(Destination::Home)).unwrap();
        session.handle(Event::GetStarted).unwrap();

        let inputs = vec![
            Event::Navigate(Destination::Home),
            Event::Navigate(Destination::Faq),
            Event::Navigate(Destination::FeralCare),
            Event::Navigate(Destination::Cat("Olive".to_string())),
            Event::GetStarted,
            Event::EditFeeding(FeedingField::Food, "wet".to_string()),
            Event::EditLitter(LitterField::Type, "clay".to_string()),
            med("x", "", ""),
            Event::DeleteCat,
        ];
        for input in inputs {
            let _ = session.handle(input);
            assert_eq!(session.page(), &Page::AddCat);
        }
        assert_eq!(session.store().len(), 1);

        assert!(session.handle(Event::Cancel).unwrap().is_changed());
        assert_eq!(session.page(), &Page::Home);
    }

    #[test]
    fn test_submit_off_form_is_ignored() {
        let mut session = Session::new();
        let outcome = session
            .handle(Event::SubmitCat(NewCat::named("Mango", CatType::Feral)))
            .unwrap();
        assert_eq!(outcome, Outcome::Ignored);
        assert!(session.store().is_empty());
    }

    #[test]
    fn test_per_cat_input_off_cat_page() {
        let mut session = Session::new();
        let err = session
            .handle(Event::EditFeeding(FeedingField::Food, "wet".to_string()))
            .unwrap_err();
        assert!(matches!(err, Error::NotOnCatPage));
        assert!(session.handle(Event::DeleteCat).unwrap_err().is_missing_record());
    }

    #[test]
    fn test_stale_cat_page_changes_nothing() {
        let mut session = Session::new();
        add_cat(&mut session, "Mango");
        session.store_mut().remove("Mango");

        assert_eq!(session.page(), &Page::Cat("Mango".to_string()));
        let err = session.handle(med("Amoxicillin", "", "")).unwrap_err();
        assert!(matches!(err, Error::MissingRecord { ref name } if name == "Mango"));
        assert!(session.handle(Event::DeleteCat).is_err());
        assert_eq!(session.page(), &Page::Cat("Mango".to_string()));

        // Sidebar selections are ignored until a listed page is current again.
        for destination in [Destination::Home, Destination::Faq] {
            assert_eq!(
                session.handle(Event::Navigate(destination)).unwrap(),
                Outcome::Ignored
            );
        }
        assert_eq!(session.page(), &Page::Cat("Mango".to_string()));
    }

    #[test]
    fn test_edits_persist_across_navigation() {
        let mut session = Session::new();
        add_cat(&mut session, "Mango");
        session
            .handle(Event::UpdateFeeding(Feeding {
                food: "dry".to_string(),
                schedule: "8am".to_string(),
                notes: String::new(),
            }))
            .unwrap();
        session
            .handle(Event::EditFeeding(FeedingField::Food, "wet".to_string()))
            .unwrap();
        session
            .handle(Event::UpdateLitter(Litter {
                litter_type: "clay".to_string(),
                last_cleaned: "Monday".to_string(),
                notes: String::new(),
            }))
            .unwrap();
        session
            .handle(Event::EditLitter(LitterField::LastCleaned, "Friday".to_string()))
            .unwrap();

        session.handle(Event::Navigate(Destination::Faq)).unwrap();
        session
            .handle(Event::Navigate(Destination::Cat("Mango".to_string())))
            .unwrap();

        let cat = session.store().find("Mango").unwrap();
        assert_eq!(cat.feeding.food, "wet");
        assert_eq!(cat.feeding.schedule, "8am");
        assert_eq!(cat.litter.litter_type, "clay");
        assert_eq!(cat.litter.last_cleaned, "Friday");
    }

    #[test]
    fn test_delete_only_current_cat() {
        let mut session = Session::new();
        add_cat(&mut session, "Mango");
        add_cat(&mut session, "Olive");
        add_cat(&mut session, "Biscuit");
        session
            .handle(Event::Navigate(Destination::Cat("Olive".to_string())))
            .unwrap();

        session.handle(Event::DeleteCat).unwrap();
        assert_eq!(
            session.store().names().collect::<Vec<_>>(),
            vec!["Mango", "Biscuit"]
        );
    }

    #[test]
    fn test_with_config() {
        let mut config = Config::default();
        config.session.default_cat_type = CatType::Foster;
        config.navigation.show_feral_care = false;

        let mut session = Session::with_config(&config);
        assert_eq!(session.default_cat_type(), CatType::Foster);
        assert_eq!(
            session.handle(Event::Navigate(Destination::FeralCare)).unwrap(),
            Outcome::Ignored
        );
    }

    #[test]
    fn test_sessions_are_independent() {
        let mut first = Session::new();
        let second = Session::new();
        add_cat(&mut first, "Mango");
        assert_eq!(first.store().len(), 1);
        assert!(second.store().is_empty());
        assert_eq!(second.page(), &Page::Home);
    }
}

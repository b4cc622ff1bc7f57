//! Page navigation.
//!
//! [`Navigator`] owns the current [`Page`] and applies the transitions the
//! planner allows. The sidebar only lists [`Destination`]s; the Add-Cat page
//! is reachable solely through "Get started" on Home and is left solely
//! through Cancel or a successful save.

use serde::Serialize;
use tracing::trace;

use crate::store::RecordStore;

/// The page currently presented.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(tag = "page", content = "name", rename_all = "snake_case")]
pub enum Page {
    /// Landing page.
    #[default]
    Home,
    /// The Add-Cat form.
    AddCat,
    /// Frequently asked questions.
    Faq,
    /// The feral-care guide.
    FeralCare,
    /// One cat's page, addressed by the record's unique name.
    Cat(String),
}

impl Page {
    /// The cat addressed by this page, if any.
    #[must_use]
    pub fn cat_name(&self) -> Option<&str> {
        match self {
            Self::Cat(name) => Some(name),
            _ => None,
        }
    }
}

/// A page that can be picked from the sidebar.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "page", content = "name", rename_all = "snake_case")]
pub enum Destination {
    /// Landing page.
    Home,
    /// A cat's page.
    Cat(String),
    /// The feral-care guide.
    FeralCare,
    /// Frequently asked questions.
    Faq,
}

impl Destination {
    /// Sidebar label.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Home => "Home",
            Self::Cat(name) => name,
            Self::FeralCare => "Feral care",
            Self::Faq => "FAQ's",
        }
    }

    /// The page this destination leads to.
    #[must_use]
    pub fn page(&self) -> Page {
        match self {
            Self::Home => Page::Home,
            Self::Cat(name) => Page::Cat(name.clone()),
            Self::FeralCare => Page::FeralCare,
            Self::Faq => Page::Faq,
        }
    }
}

/// Tracks the current page and applies transitions.
#[derive(Debug, Clone)]
pub struct Navigator {
    page: Page,
    show_feral_care: bool,
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new(true)
    }
}

impl Navigator {
    /// Start on Home. `show_feral_care` controls whether the feral-care guide
    /// is listed in the sidebar.
    #[must_use]
    pub fn new(show_feral_care: bool) -> Self {
        Self {
            page: Page::Home,
            show_feral_care,
        }
    }

    /// The current page.
    #[must_use]
    pub fn page(&self) -> &Page {
        &self.page
    }

    /// Sidebar entries for the given store: Home, each cat in store order,
    /// the feral-care guide (when enabled), then the FAQ.
    #[must_use]
    pub fn sidebar(&self, store: &RecordStore) -> Vec<Destination> {
        let mut entries = Vec::with_capacity(store.len() + 3);
        entries.push(Destination::Home);
        entries.extend(store.names().map(|name| Destination::Cat(name.to_string())));
        if self.show_feral_care {
            entries.push(Destination::FeralCare);
        }
        entries.push(Destination::Faq);
        entries
    }

    /// Index of the sidebar entry to highlight. Pages that are not in the
    /// sidebar highlight Home.
    #[must_use]
    pub fn sidebar_selection(&self, store: &RecordStore) -> usize {
        self.sidebar(store)
            .iter()
            .position(|entry| entry.page() == self.page)
            .unwrap_or(0)
    }

    /// Whether the current page is one of the sidebar entries.
    #[must_use]
    pub fn on_sidebar_page(&self, store: &RecordStore) -> bool {
        self.sidebar(store).iter().any(|entry| entry.page() == self.page)
    }

    /// Apply a sidebar selection.
    ///
    /// Takes effect only when the current page is itself a sidebar entry and
    /// `destination` is currently listed. A cat page whose record is gone is
    /// not listed, so it ignores selections. Returns whether the page changed.
    pub fn select(&mut self, destination: &Destination, store: &RecordStore) -> bool {
        let sidebar = self.sidebar(store);
        if !sidebar.iter().any(|entry| entry.page() == self.page) {
            trace!("Sidebar selection ignored on {:?}", self.page);
            return false;
        }
        if !sidebar.contains(destination) {
            trace!("Sidebar selection {destination:?} is not listed");
            return false;
        }
        self.go(destination.page())
    }

    /// "Get started": Home to the Add-Cat form.
    pub fn get_started(&mut self) -> bool {
        if self.page != Page::Home {
            trace!("Get started ignored on {:?}", self.page);
            return false;
        }
        self.go(Page::AddCat)
    }

    /// "Cancel": the Add-Cat form back to Home.
    pub fn cancel(&mut self) -> bool {
        if self.page != Page::AddCat {
            trace!("Cancel ignored on {:?}", self.page);
            return false;
        }
        self.go(Page::Home)
    }

    /// A cat was saved from the Add-Cat form; jump to its page.
    pub fn cat_saved(&mut self, name: &str) -> bool {
        if self.page != Page::AddCat {
            return false;
        }
        self.go(Page::Cat(name.to_string()))
    }

    /// The current cat was deleted; return Home.
    pub fn cat_deleted(&mut self) -> bool {
        self.go(Page::Home)
    }

    fn go(&mut self, page: Page) -> bool {
        if self.page == page {
            return false;
        }
        trace!("Navigating {:?} -> {page:?}", self.page);
        self.page = page;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::CatType;

    fn store_with(names: &[&str]) -> RecordStore {
        let mut store = RecordStore::new();
        for name in names {
            store.add(name, CatType::Feral, "", "").unwrap();
        }
        store
    }

    #[test]
    fn test_initial_page_is_home() {
        assert_eq!(Navigator::default().page(), &Page::Home);
    }

    #[test]
    fn test_sidebar_order() {
        let store = store_with(&["Mango", "Olive"]);
        let nav = Navigator::new(true);
        let labels: Vec<_> = nav
            .sidebar(&store)
            .iter()
            .map(|d| d.label().to_string())
            .collect();
        assert_eq!(labels, vec!["Home", "Mango", "Olive", "Feral care", "FAQ's"]);
    }

    #[test]
    fn test_sidebar_without_feral_care() {
        let store = RecordStore::new();
        let nav = Navigator::new(false);
        assert_eq!(nav.sidebar(&store), vec![Destination::Home, Destination::Faq]);
    }

    #[test]
    fn test_get_started_only_from_home() {
        let store = RecordStore::new();
        let mut nav = Navigator::default();
        assert!(nav.select(&Destination::Faq, &store));
        assert!(!nav.get_started());
        assert_eq!(nav.page(), &Page::Faq);

        assert!(nav.select(&Destination::Home, &store));
        assert!(nav.get_started());
        assert_eq!(nav.page(), &Page::AddCat);
    }

    #[test]
    fn test_cancel_only_from_add_cat() {
        let mut nav = Navigator::default();
        assert!(!nav.cancel());
        nav.get_started();
        assert!(nav.cancel());
        assert_eq!(nav.page(), &Page::Home);
    }

    #[test]
    fn test_sidebar_cannot_leave_add_cat() {
        let store = store_with(&["Mango"]);
        let mut nav = Navigator::default();
        nav.get_started();

        assert!(!nav.on_sidebar_page(&store));
        assert!(!nav.select(&Destination::Faq, &store));
        assert!(!nav.select(&Destination::Home, &store));
        assert!(!nav.select(&Destination::Cat("Mango".to_string()), &store));
        assert_eq!(nav.page(), &Page::AddCat);
    }

    #[test]
    fn test_sidebar_highlights_home_on_add_cat() {
        let store = store_with(&["Mango"]);
        let mut nav = Navigator::default();
        nav.get_started();
        assert_eq!(nav.sidebar_selection(&store), 0);
    }

    #[test]
    fn test_sidebar_highlights_current_cat() {
        let store = store_with(&["Mango", "Olive"]);
        let mut nav = Navigator::default();
        assert!(nav.select(&Destination::Cat("Olive".to_string()), &store));
        assert_eq!(nav.page().cat_name(), Some("Olive"));
        assert_eq!(nav.sidebar_selection(&store), 2);
    }

    #[test]
    fn test_select_unlisted_cat_is_ignored() {
        let store = store_with(&["Mango"]);
        let mut nav = Navigator::default();
        assert!(!nav.select(&Destination::Cat("Ghost".to_string()), &store));
        assert_eq!(nav.page(), &Page::Home);
    }

    #[test]
    fn test_select_hidden_feral_care_is_ignored() {
        let store = RecordStore::new();
        let mut nav = Navigator::new(false);
        assert!(!nav.select(&Destination::FeralCare, &store));
        assert_eq!(nav.page(), &Page::Home);
    }

    #[test]
    fn test_cat_saved_jumps_to_cat() {
        let mut nav = Navigator::default();
        assert!(!nav.cat_saved("Mango"));
        nav.get_started();
        assert!(nav.cat_saved("Mango"));
        assert_eq!(nav.page(), &Page::Cat("Mango".to_string()));
    }

    #[test]
    fn test_stale_cat_page_ignores_sidebar() {
        let mut store = store_with(&["Mango"]);
        let mut nav = Navigator::default();
        nav.select(&Destination::Cat("Mango".to_string()), &store);
        store.remove("Mango");

        // The stale page is no longer a sidebar entry; Home is highlighted.
        assert_eq!(nav.sidebar_selection(&store), 0);
        assert!(!nav.on_sidebar_page(&store));
        assert!(!nav.select(&Destination::Faq, &store));
        assert!(!nav.select(&Destination::Home, &store));
        assert_eq!(nav.page(), &Page::Cat("Mango".to_string()));
    }

    #[test]
    fn test_page_serialization() {
        let json = serde_json::to_value(Page::Cat("Mango".to_string())).unwrap();
        assert_eq!(json["page"], "cat");
        assert_eq!(json["name"], "Mango");
        let json = serde_json::to_value(Page::AddCat).unwrap();
        assert_eq!(json["page"], "add_cat");
    }
}

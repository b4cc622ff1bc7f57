//! Read-only projection of a session for rendering.
//!
//! A [`View`] borrows from the session and carries everything an outer
//! renderer needs: the page title, the sidebar and the page body. It renders
//! as plain text through `Display` and as JSON through serde.

use std::fmt::{self, Display, Formatter, Write as _};

use serde::Serialize;

use crate::content::{
    FaqEntry, GuideSection, ADD_CAT_HINT, APP_TITLE, EMPTY_SIDEBAR_HINT, FAQ, FERAL_CARE,
    FERAL_CARE_NOTE, GET_STARTED_HINT, HOME_CARDS, TAGLINE,
};
use crate::nav::{Destination, Page};
use crate::record::{CatRecord, CatType};
use crate::session::Session;

/// One sidebar entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SidebarEntry {
    /// Display label.
    pub label: String,
    /// Where selecting it leads.
    pub destination: Destination,
}

/// The body of the current page.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Body<'a> {
    /// Landing page with feature cards.
    Home {
        /// Tagline under the title.
        tagline: &'static str,
        /// Feature cards.
        cards: &'static [&'static str],
        /// Prompt next to "Get started".
        hint: &'static str,
    },
    /// The Add-Cat form.
    AddCat {
        /// Type preselected on the form.
        default_type: CatType,
        /// Caption under the heading.
        hint: &'static str,
    },
    /// FAQ entries.
    Faq {
        /// Questions and answers.
        entries: &'static [FaqEntry],
    },
    /// The feral-care guide.
    FeralCare {
        /// Guide sections.
        sections: &'static [GuideSection],
        /// Closing note.
        note: &'static str,
    },
    /// A cat's page.
    Cat {
        /// The cat.
        record: &'a CatRecord,
    },
    /// A cat page whose record no longer exists. Renders nothing.
    Missing {
        /// The name the page still addresses.
        name: &'a str,
    },
}

/// Everything needed to render the current state.
#[derive(Debug, Clone, Serialize)]
pub struct View<'a> {
    /// The current page.
    pub page: &'a Page,
    /// Page heading.
    pub title: &'a str,
    /// Sidebar entries in display order.
    pub sidebar: Vec<SidebarEntry>,
    /// Index of the highlighted sidebar entry.
    pub selected: usize,
    /// Caption under the sidebar, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sidebar_hint: Option<&'static str>,
    /// Page body.
    pub body: Body<'a>,
}

impl<'a> View<'a> {
    /// Build the view for a session.
    #[must_use]
    pub fn of(session: &'a Session) -> Self {
        let store = session.store();
        let nav = session.navigator();
        let page = session.page();

        let (title, body) = match page {
            Page::Home => (
                APP_TITLE,
                Body::Home {
                    tagline: TAGLINE,
                    cards: &HOME_CARDS,
                    hint: GET_STARTED_HINT,
                },
            ),
            Page::AddCat => (
                "Add a cat",
                Body::AddCat {
                    default_type: session.default_cat_type(),
                    hint: ADD_CAT_HINT,
                },
            ),
            Page::Faq => ("FAQ's", Body::Faq { entries: FAQ }),
            Page::FeralCare => (
                "Feral Cat Care",
                Body::FeralCare {
                    sections: FERAL_CARE,
                    note: FERAL_CARE_NOTE,
                },
            ),
            Page::Cat(name) => match store.find(name) {
                Some(record) => (record.name.as_str(), Body::Cat { record }),
                None => ("", Body::Missing { name }),
            },
        };

        let sidebar = nav
            .sidebar(store)
            .into_iter()
            .map(|destination| SidebarEntry {
                label: destination.label().to_string(),
                destination,
            })
            .collect();

        Self {
            page,
            title,
            sidebar,
            selected: nav.sidebar_selection(store),
            sidebar_hint: store.is_empty().then_some(EMPTY_SIDEBAR_HINT),
            body,
        }
    }

    /// Render as pretty JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl Display for View<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let sidebar: Vec<String> = self
            .sidebar
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                if i == self.selected {
                    format!("[{}]", entry.label)
                } else {
                    entry.label.clone()
                }
            })
            .collect();
        writeln!(f, "Sidebar: {}", sidebar.join(" | "))?;
        if let Some(hint) = self.sidebar_hint {
            writeln!(f, "  {hint}")?;
        }
        writeln!(f)?;
        if self.title.is_empty() {
            return Ok(());
        }
        writeln!(f, "== {} ==", self.title)?;
        write!(f, "{}", self.body)
    }
}

impl Display for Body<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Home {
                tagline,
                cards,
                hint,
            } => {
                writeln!(f, "{tagline}")?;
                writeln!(f)?;
                writeln!(f, "{}", cards.join(" | "))?;
                writeln!(f)?;
                writeln!(f, "{hint}")
            }
            Self::AddCat { default_type, hint } => {
                writeln!(f, "{hint}")?;
                writeln!(f, "Fields: name, type (default {default_type}), age, notes")
            }
            Self::Faq { entries } => {
                for entry in *entries {
                    writeln!(f, "Q: {}", entry.question)?;
                    writeln!(f, "A: {}", entry.answer)?;
                    writeln!(f)?;
                }
                Ok(())
            }
            Self::FeralCare { sections, note } => {
                for section in *sections {
                    writeln!(f, "### {}", section.heading)?;
                    for point in section.points {
                        writeln!(f, "- {point}")?;
                    }
                    writeln!(f)?;
                }
                writeln!(f, "{note}")
            }
            Self::Cat { record } => write_cat(f, record),
            Self::Missing { .. } => Ok(()),
        }
    }
}

fn write_cat(f: &mut Formatter<'_>, cat: &CatRecord) -> fmt::Result {
    writeln!(f, "-- Profile --")?;
    writeln!(f, "Type:  {}", cat.cat_type)?;
    writeln!(f, "Age:   {}", cat.display_age())?;
    writeln!(f, "Notes: {}", cat.display_notes())?;

    writeln!(f, "-- Feeding --")?;
    writeln!(f, "Food type: {}", cat.feeding.food)?;
    writeln!(f, "Schedule:  {}", cat.feeding.schedule)?;
    writeln!(f, "Notes:     {}", cat.feeding.notes)?;

    writeln!(f, "-- Meds --")?;
    if !cat.meds.is_empty() {
        let rows: Vec<Vec<&str>> = cat
            .meds
            .iter()
            .map(|m| vec![m.name.as_str(), m.dosage.as_str(), m.frequency.as_str()])
            .collect();
        f.write_str(&table(&["name", "dosage", "frequency"], &rows))?;
    }

    writeln!(f, "-- Vet --")?;
    if !cat.vet.is_empty() {
        let dates: Vec<String> = cat.vet.iter().map(|v| v.date.to_string()).collect();
        let rows: Vec<Vec<&str>> = cat
            .vet
            .iter()
            .zip(&dates)
            .map(|(v, date)| vec![date.as_str(), v.reason.as_str()])
            .collect();
        f.write_str(&table(&["date", "reason"], &rows))?;
    }

    writeln!(f, "-- Litter & Supplies --")?;
    writeln!(f, "Litter type:  {}", cat.litter.litter_type)?;
    writeln!(f, "Last cleaned: {}", cat.litter.last_cleaned)?;
    writeln!(f, "Notes:        {}", cat.litter.notes)
}

/// Left-aligned text table with a header row.
fn table(header: &[&str], rows: &[Vec<&str>]) -> String {
    let mut widths: Vec<usize> = header.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_row(&mut out, header, &widths);
    for row in rows {
        push_row(&mut out, row, &widths);
    }
    out
}

fn push_row(out: &mut String, cells: &[&str], widths: &[usize]) {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{cell:<width$}"))
        .collect();
    let _ = writeln!(out, "{}", padded.join(" | ").trim_end());
}

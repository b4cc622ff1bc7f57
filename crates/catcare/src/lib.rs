//! `catcare` - a multi-cat care planner
//!
//! This library holds the in-memory record store for one planning session,
//! the page navigation state machine, and the view projection that renderers
//! draw from. Nothing is persisted: a [`Session`] starts empty and its data is
//! gone when it is dropped.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

pub mod assets;
pub mod cli;
pub mod config;
pub mod content;
pub mod error;
pub mod logging;
pub mod nav;
pub mod record;
pub mod session;
pub mod shell;
pub mod store;
pub mod view;

pub use config::Config;
pub use error::{Error, Result};
pub use logging::init_logging;
pub use nav::{Destination, Navigator, Page};
pub use record::{CatRecord, CatType, Feeding, FeedingField, Litter, LitterField, Medication, VetVisit};
pub use session::{Event, NewCat, Outcome, Session};
pub use store::RecordStore;
pub use view::View;

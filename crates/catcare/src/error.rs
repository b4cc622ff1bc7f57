//! Error types for catcare.
//!
//! Every error here is recoverable: validation failures keep the user on the
//! page they were on, and missing-record errors leave the session untouched.

use thiserror::Error;

/// The main error type for catcare operations.
#[derive(Error, Debug)]
pub enum Error {
    // === Validation Errors ===
    /// The Add-Cat form was submitted with a blank name.
    #[error("Please enter a cat name.")]
    EmptyName,

    /// The Add-Cat form was submitted with a name that is already taken.
    #[error("That cat name already exists. Use a unique name.")]
    DuplicateName {
        /// The trimmed name that collided.
        name: String,
    },

    // === Record Errors ===
    /// An update or navigation addressed a cat that is not in the store.
    #[error("no cat named '{name}'")]
    MissingRecord {
        /// The name that failed to resolve.
        name: String,
    },

    /// A per-cat input arrived while no cat page was shown.
    #[error("no cat page is open")]
    NotOnCatPage,

    // === Configuration Errors ===
    /// Failed to load configuration.
    #[error("failed to load configuration: {0}")]
    ConfigLoad(Box<figment::Error>),

    /// Configuration validation failed.
    #[error("invalid configuration: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },

    // === I/O Errors ===
    /// File system or terminal operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // === Serialization Errors ===
    /// JSON serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for catcare operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::ConfigLoad(Box::new(err))
    }
}

impl Error {
    /// Create a missing-record error for the given name.
    #[must_use]
    pub fn missing_record(name: impl Into<String>) -> Self {
        Self::MissingRecord { name: name.into() }
    }

    /// Create a duplicate-name error for the given name.
    #[must_use]
    pub fn duplicate_name(name: impl Into<String>) -> Self {
        Self::DuplicateName { name: name.into() }
    }

    /// Check if this error is an Add-Cat form validation failure.
    #[must_use]
    pub fn is_validation_error(&self) -> bool {
        matches!(self, Self::EmptyName | Self::DuplicateName { .. })
    }

    /// Check if this error comes from addressing an absent record.
    #[must_use]
    pub fn is_missing_record(&self) -> bool {
        matches!(self, Self::MissingRecord { .. } | Self::NotOnCatPage)
    }
}

//! # Error Types
//!
//! All fallible operations in the crate return [`FretboardError`].
//!
//! Two conditions are deliberately *not* errors:
//! - a master shape that cannot be played at a target root is `None`
//! - a lookup that matches nothing is an empty `Vec` or `None`
//!
//! ## Usage
//! ```rust
//! use fretboard::{semitone_distance, FretboardError};
//!
//! match semitone_distance("A", "H") {
//!     Ok(d) => println!("{} semitones", d),
//!     Err(FretboardError::UnknownNoteName(name)) => eprintln!("bad note: {}", name),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FretboardError {
    /// A note spelling that is not one of the 17 recognized names.
    ///
    /// # Example
    /// ```
    /// # use fretboard::FretboardError;
    /// let err = FretboardError::UnknownNoteName("H".to_string());
    /// assert_eq!(err.to_string(), "Unknown note name: 'H'");
    /// ```
    #[error("Unknown note name: '{0}'")]
    UnknownNoteName(String),

    /// A numeric pitch class of 12 or more.
    #[error("Pitch class out of range: {0}")]
    InvalidPitchClass(u8),

    /// A chord type symbol such as `"maj7"` that does not match any known type.
    #[error("Unknown chord type: '{0}'")]
    UnknownChordType(String),

    #[error("Unknown chord category: '{0}'")]
    UnknownCategory(String),

    /// The master shape YAML could not be deserialized.
    #[error("Invalid shape library: {0}")]
    LibraryError(String),

    /// A master shape violates a data-model invariant.
    ///
    /// # Example
    /// ```
    /// # use fretboard::FretboardError;
    /// let err = FretboardError::ShapeError {
    ///     shape: "maj/E/1".to_string(),
    ///     message: "difficulty must be between 1 and 5".to_string(),
    /// };
    /// assert_eq!(err.to_string(), "Invalid master shape maj/E/1: difficulty must be between 1 and 5");
    /// ```
    #[error("Invalid master shape {shape}: {message}")]
    ShapeError { shape: String, message: String },

    /// The configuration YAML could not be deserialized.
    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    #[error("I/O error for {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

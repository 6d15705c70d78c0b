//! Resource bundle snapshots.
//!
//! Parsing the CSV catalog on every start is unnecessary once it has been
//! loaded: a [`ResourceBundle`] can be written out with bincode (compact) or
//! JSON (inspectable) and read back as-is.
//!
//! # Example
//!
//! ```rust
//! use indic_phonetic::prelude::*;
//!
//! let bundle = ResourceBundle::default();
//! let mut buffer = Vec::new();
//! BincodeSerializer::serialize(&bundle, &mut buffer).unwrap();
//! let loaded = BincodeSerializer::deserialize(&buffer[..]).unwrap();
//! assert_eq!(bundle, loaded);
//! ```

use std::io::{Read, Write};

use crate::resources::ResourceBundle;

mod bincode_impl;
mod json_impl;

pub use self::bincode_impl::BincodeSerializer;
pub use self::json_impl::JsonSerializer;

/// Trait for writing and reading resource bundle snapshots.
pub trait BundleSerializer {
    /// Serialize a bundle to a writer.
    ///
    /// # Errors
    ///
    /// Returns an error if encoding or writing fails.
    fn serialize<W: Write>(bundle: &ResourceBundle, writer: W) -> Result<(), SerializationError>;

    /// Deserialize a bundle from a reader.
    ///
    /// # Errors
    ///
    /// Returns an error if reading or decoding fails.
    fn deserialize<R: Read>(reader: R) -> Result<ResourceBundle, SerializationError>;
}

/// Errors that can occur during serialization/deserialization.
#[derive(Debug, thiserror::Error)]
pub enum SerializationError {
    /// Error during bincode serialization
    #[error("Bincode error")]
    Bincode(#[from] bincode::Error),
    /// Error during JSON serialization
    #[error("JSON error")]
    Json(#[from] serde_json::Error),
    /// I/O error
    #[error("I/O error")]
    Io(#[from] std::io::Error),
}

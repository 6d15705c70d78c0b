//! JSON serializer for human-readable snapshots.

use std::io::{Read, Write};

use super::{BundleSerializer, SerializationError};
use crate::resources::ResourceBundle;

/// JSON serializer for human-readable format.
///
/// Useful for inspecting what a catalog actually loaded; bincode is the
/// better choice for shipping snapshots.
pub struct JsonSerializer;

impl BundleSerializer for JsonSerializer {
    fn serialize<W: Write>(bundle: &ResourceBundle, mut writer: W) -> Result<(), SerializationError> {
        serde_json::to_writer_pretty(&mut writer, bundle)?;
        Ok(())
    }

    fn deserialize<R: Read>(mut reader: R) -> Result<ResourceBundle, SerializationError> {
        let bundle = serde_json::from_reader(&mut reader)?;
        Ok(bundle)
    }
}

//! Bincode serializer for compact binary snapshots.

use std::io::{Read, Write};

use super::{BundleSerializer, SerializationError};
use crate::resources::ResourceBundle;

/// Bincode serializer for compact binary format.
///
/// Snapshots load much faster than re-parsing the CSV tables.
pub struct BincodeSerializer;

impl BundleSerializer for BincodeSerializer {
    fn serialize<W: Write>(bundle: &ResourceBundle, mut writer: W) -> Result<(), SerializationError> {
        bincode::serialize_into(&mut writer, bundle)?;
        Ok(())
    }

    fn deserialize<R: Read>(mut reader: R) -> Result<ResourceBundle, SerializationError> {
        let bundle = bincode::deserialize_from(&mut reader)?;
        Ok(bundle)
    }
}

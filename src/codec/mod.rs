//! Character to phonetic vector codec.
//!
//! [`PhoneticCodec`] borrows (or owns) an immutable [`PhoneticResources`] and
//! turns characters into feature vectors.
//!
//! The failure policy is split on purpose:
//!
//! - an unregistered language code is an error
//!   ([`PhoneticError::UnsupportedLanguage`]);
//! - a character outside the coordinated range, an offset past the end of
//!   the table, or a row flagged invalid all produce the invalid vector.
//!
//! Callers tell "no information" apart from a configuration error with
//! [`PhoneticVector::is_valid`].
//!
//! [`PhoneticError::UnsupportedLanguage`]: crate::error::PhoneticError::UnsupportedLanguage

use crate::error::{PhoneticError, Result};
use crate::resources::{PhoneticGroup, PhoneticResources, PhoneticTable};
use crate::script::{self, ENGLISH};
use crate::vector::PhoneticVector;

pub mod english;

pub use english::{enc_to_offset, in_range, ENGLISH_RANGE_END, ENGLISH_RANGE_START};

/// Phonetic vector codec over a resource bundle.
#[derive(Debug, Clone)]
pub struct PhoneticCodec<R> {
    resources: R,
}

impl<R: PhoneticResources> PhoneticCodec<R> {
    /// Create a codec over `resources`.
    pub fn new(resources: R) -> Self {
        Self { resources }
    }

    /// The underlying resources.
    pub fn resources(&self) -> &R {
        &self.resources
    }

    /// Configured vector width for Indic scripts.
    pub fn vector_width(&self) -> usize {
        self.resources.vector_width()
    }

    /// The invalid vector at the configured width.
    pub fn invalid_vector(&self) -> PhoneticVector {
        PhoneticVector::invalid(self.vector_width())
    }

    /// Table serving `lang`.
    ///
    /// English is accepted here even though it has no script range.
    pub fn phonetic_info(&self, lang: &str) -> Result<&PhoneticTable> {
        if lang != ENGLISH && !script::is_supported(lang) {
            return Err(PhoneticError::UnsupportedLanguage(lang.to_string()));
        }
        Ok(self.resources.table(PhoneticGroup::for_language(lang)))
    }

    /// Feature vector of `c` in `lang`.
    ///
    /// For [`ENGLISH`], `c` is the private-range encoding of a phoneme
    /// (see [`PhoneticCodec::phoneme_to_enc`]).
    pub fn feature_vector(&self, c: char, lang: &str) -> Result<PhoneticVector> {
        if lang == ENGLISH {
            return Ok(self.enc_feature_vector(c));
        }
        let offset = script::to_offset(c, lang)?;
        self.feature_vector_by_offset(offset, lang)
    }

    /// Feature vector stored at `offset` for `lang`.
    ///
    /// Offsets outside the coordinated range, past the end of the table, or on
    /// an invalid row yield the invalid vector.
    pub fn feature_vector_by_offset(&self, offset: i32, lang: &str) -> Result<PhoneticVector> {
        if lang == ENGLISH {
            return Ok(self.english_feature_vector_by_offset(offset));
        }
        let table = self.phonetic_info(lang)?;
        if !script::in_coordinated_range_offset(offset) {
            return Ok(self.invalid_vector());
        }
        Ok(self.lookup(table, offset).unwrap_or_else(|| self.invalid_vector()))
    }

    fn lookup(&self, table: &PhoneticTable, offset: i32) -> Option<PhoneticVector> {
        let offset = usize::try_from(offset).ok()?;
        table
            .row(offset)
            .filter(|row| row.valid)
            .map(|row| row.vector.clone())
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::{bundle, vector};
    use super::*;

    #[test]
    fn test_feature_vector() {
        let bundle = bundle();
        let codec = PhoneticCodec::new(&bundle);
        let v = codec.feature_vector('\u{0905}', "hi").unwrap();
        assert_eq!(v, vector(38, &[1, 13]));
        assert_eq!(codec.feature_vector('\u{0985}', "bn").unwrap(), v);
    }

    #[test]
    fn test_tamil_routes_to_tamil_table() {
        let bundle = bundle();
        let codec = PhoneticCodec::new(&bundle);
        let v = codec.feature_vector('\u{0B85}', "ta").unwrap();
        assert_eq!(v, vector(38, &[0, 31]));
    }

    #[test]
    fn test_invalid_row_degrades() {
        let bundle = bundle();
        let codec = PhoneticCodec::new(&bundle);
        let v = codec.feature_vector('\u{0903}', "hi").unwrap();
        assert!(!v.is_valid());
        assert_eq!(v.len(), codec.vector_width());
    }

    #[test]
    fn test_out_of_coordinated_range_degrades() {
        let bundle = bundle();
        let codec = PhoneticCodec::new(&bundle);
        assert_eq!(codec.feature_vector('\u{0964}', "ta").unwrap(), codec.invalid_vector());
        assert_eq!(codec.feature_vector('a', "hi").unwrap(), codec.invalid_vector());
        assert_eq!(codec.feature_vector_by_offset(-1, "hi").unwrap(), codec.invalid_vector());
    }

    #[test]
    fn test_offset_past_table_degrades() {
        let bundle = bundle();
        let codec = PhoneticCodec::new(&bundle);
        assert_eq!(codec.feature_vector_by_offset(8, "hi").unwrap(), codec.invalid_vector());
        assert_eq!(codec.feature_vector_by_offset(0x40, "ml").unwrap(), codec.invalid_vector());
        assert!(codec.feature_vector_by_offset(7, "hi").unwrap().is_valid());
    }

    #[test]
    fn test_unsupported_language() {
        let bundle = bundle();
        let codec = PhoneticCodec::new(&bundle);
        assert_eq!(
            codec.feature_vector('a', "fr"),
            Err(PhoneticError::UnsupportedLanguage("fr".to_string()))
        );
        assert!(codec.feature_vector_by_offset(0, "fr").is_err());
        assert!(codec.phonetic_info("fr").is_err());
    }

    #[test]
    fn test_owned_resources() {
        let codec = PhoneticCodec::new(std::sync::Arc::new(bundle()));
        assert_eq!(codec.vector_width(), 38);
        assert!(codec.feature_vector('\u{0A05}', "pa").unwrap().is_valid());
    }
}

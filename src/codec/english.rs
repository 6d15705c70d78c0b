//! ARPABET phonemes for English.
//!
//! English has no Unicode script block of its own. Each phoneme gets a
//! sequential ID from the ARPABET list, and the ID is placed in a private
//! codepoint range starting at [`ENGLISH_RANGE_START`] so that phonemes can
//! travel through the same `char`/offset vocabulary as Indic characters.

use crate::error::{PhoneticError, Result};
use crate::resources::{PhoneticGroup, PhoneticResources};
use crate::vector::PhoneticVector;

use super::PhoneticCodec;

/// First codepoint of the private phoneme range.
pub const ENGLISH_RANGE_START: u32 = 0x0D00;

/// One past the last codepoint of the private phoneme range.
pub const ENGLISH_RANGE_END: u32 = 0x0D2E;

/// Offset of a private-range character: `c - ENGLISH_RANGE_START`.
#[inline]
pub fn enc_to_offset(c: char) -> i32 {
    c as i32 - ENGLISH_RANGE_START as i32
}

/// Returns true if `offset` lies in the phoneme range.
#[inline]
pub fn in_range(offset: i32) -> bool {
    (0..(ENGLISH_RANGE_END - ENGLISH_RANGE_START) as i32).contains(&offset)
}

impl<R: PhoneticResources> PhoneticCodec<R> {
    /// ID of an ARPABET symbol.
    pub fn phoneme_to_offset(&self, phoneme: &str) -> Result<usize> {
        self.resources
            .arpabet()
            .id(phoneme)
            .ok_or_else(|| PhoneticError::UnknownPhoneme(phoneme.to_string()))
    }

    /// ARPABET symbol with `id`.
    pub fn offset_to_phoneme(&self, id: usize) -> Result<&str> {
        self.resources
            .arpabet()
            .symbol(id)
            .ok_or(PhoneticError::UnknownPhonemeId(id))
    }

    /// Private-range character encoding `phoneme`.
    pub fn phoneme_to_enc(&self, phoneme: &str) -> Result<char> {
        let id = self.phoneme_to_offset(phoneme)?;
        u32::try_from(id)
            .ok()
            .and_then(|id| ENGLISH_RANGE_START.checked_add(id))
            .and_then(char::from_u32)
            .ok_or(PhoneticError::UnknownPhonemeId(id))
    }

    /// ARPABET symbol encoded by the private-range character `c`.
    pub fn enc_to_phoneme(&self, c: char) -> Result<&str> {
        let id = usize::try_from(enc_to_offset(c))
            .map_err(|_| PhoneticError::UnknownPhoneme(c.to_string()))?;
        self.offset_to_phoneme(id)
    }

    /// Invalid vector at the English table's width.
    pub fn english_invalid_vector(&self) -> PhoneticVector {
        self.resources.table(PhoneticGroup::English).invalid_vector()
    }

    /// Feature vector of the phoneme with ID `offset`.
    pub fn english_feature_vector_by_offset(&self, offset: i32) -> PhoneticVector {
        if !in_range(offset) {
            return self.english_invalid_vector();
        }
        let table = self.resources.table(PhoneticGroup::English);
        usize::try_from(offset)
            .ok()
            .and_then(|o| table.row(o))
            .filter(|row| row.valid)
            .map(|row| row.vector.clone())
            .unwrap_or_else(|| table.invalid_vector())
    }

    /// Feature vector of a private-range character.
    pub fn enc_feature_vector(&self, c: char) -> PhoneticVector {
        self.english_feature_vector_by_offset(enc_to_offset(c))
    }

    /// Feature vector of an ARPABET symbol.
    ///
    /// Unknown symbols are an error; known symbols without a valid row give
    /// the invalid vector.
    pub fn phoneme_feature_vector(&self, phoneme: &str) -> Result<PhoneticVector> {
        let id = self.phoneme_to_offset(phoneme)?;
        Ok(match i32::try_from(id) {
            Ok(offset) => self.english_feature_vector_by_offset(offset),
            Err(_) => self.english_invalid_vector(),
        })
    }
}

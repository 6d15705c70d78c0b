//! Named property fields of a phonetic vector.
//!
//! Each [`PhoneticProperty`] owns a contiguous, non-overlapping bit range.
//! Fields are decoded most-significant bit first: reading the field left to
//! right, the first bit carries the highest place value.
//!
//! ```rust
//! use indic_phonetic::vector::{PhoneticVector, PhoneticProperty};
//! use indic_phonetic::vector::properties::property_value;
//!
//! let mut v = PhoneticVector::zeros(38);
//! // consonant_type occupies bits 13..18
//! v.set(15, true);
//! v.set(17, true);
//! assert_eq!(property_value(&v, PhoneticProperty::ConsonantType), 0b00101);
//! ```

use std::fmt;
use std::ops::Range;
use std::str::FromStr;

use crate::error::{PhoneticError, Result};

use super::PhoneticVector;

/// Index of the vowel bit in `basic_type`.
pub const PVIDX_BT_VOWEL: usize = 0;
/// Index of the consonant bit in `basic_type`.
pub const PVIDX_BT_CONSONANT: usize = 1;
/// Index of the nukta bit in `basic_type`.
pub const PVIDX_BT_NUKTA: usize = 2;
/// Index of the halant bit in `basic_type`.
pub const PVIDX_BT_HALANT: usize = 3;
/// Index of the anusvaar bit in `basic_type`.
pub const PVIDX_BT_ANUSVAAR: usize = 4;
/// Index of the miscellaneous bit in `basic_type`.
pub const PVIDX_BT_MISC: usize = 5;
/// Index of the dependent-vowel bit in `vowel_status`.
pub const PVIDX_VSTAT_DEP: usize = 12;

/// `consonant_type` code for plosives.
pub const CONSONANT_TYPE_PLOSIVE: u32 = 0;

/// Property fields in the order they occur in the vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PhoneticProperty {
    /// Vowel / consonant / nukta / halant / anusvaar / misc flags
    BasicType,
    /// Short or long vowel
    VowelLength,
    /// Vowel strength
    VowelStrength,
    /// Independent or dependent vowel
    VowelStatus,
    /// Manner of consonant articulation
    ConsonantType,
    /// Place of articulation
    ArticulationPlace,
    /// Aspirated or unaspirated
    Aspiration,
    /// Voiced or unvoiced
    Voicing,
    /// Nasalized or not
    Nasalization,
    /// Front / central / back
    VowelHorizontal,
    /// Vowel height
    VowelVertical,
    /// Rounded or unrounded
    VowelRoundness,
}

impl PhoneticProperty {
    /// Every property, in vector order.
    pub const ALL: [PhoneticProperty; 12] = [
        Self::BasicType,
        Self::VowelLength,
        Self::VowelStrength,
        Self::VowelStatus,
        Self::ConsonantType,
        Self::ArticulationPlace,
        Self::Aspiration,
        Self::Voicing,
        Self::Nasalization,
        Self::VowelHorizontal,
        Self::VowelVertical,
        Self::VowelRoundness,
    ];

    /// Field name as it appears in resource files and APIs.
    pub const fn name(self) -> &'static str {
        match self {
            Self::BasicType => "basic_type",
            Self::VowelLength => "vowel_length",
            Self::VowelStrength => "vowel_strength",
            Self::VowelStatus => "vowel_status",
            Self::ConsonantType => "consonant_type",
            Self::ArticulationPlace => "articulation_place",
            Self::Aspiration => "aspiration",
            Self::Voicing => "voicing",
            Self::Nasalization => "nasalization",
            Self::VowelHorizontal => "vowel_horizontal",
            Self::VowelVertical => "vowel_vertical",
            Self::VowelRoundness => "vowel_roundness",
        }
    }

    /// Bit range `[start, end)` of the field.
    pub const fn range(self) -> Range<usize> {
        match self {
            Self::BasicType => 0..6,
            Self::VowelLength => 6..8,
            Self::VowelStrength => 8..11,
            Self::VowelStatus => 11..13,
            Self::ConsonantType => 13..18,
            Self::ArticulationPlace => 18..23,
            Self::Aspiration => 23..25,
            Self::Voicing => 25..27,
            Self::Nasalization => 27..29,
            Self::VowelHorizontal => 29..32,
            Self::VowelVertical => 32..36,
            Self::VowelRoundness => 36..38,
        }
    }

    /// Number of bits in the field.
    pub const fn width(self) -> usize {
        let r = self.range();
        r.end - r.start
    }
}

impl FromStr for PhoneticProperty {
    type Err = PhoneticError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|p| p.name() == s)
            .ok_or_else(|| PhoneticError::UnknownProperty(s.to_string()))
    }
}

impl fmt::Display for PhoneticProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Bits of `property` as a sub-vector.
pub fn property_vector(v: &PhoneticVector, property: PhoneticProperty) -> PhoneticVector {
    v.slice(property.range())
}

/// Bits of the field called `name`.
///
/// # Errors
///
/// [`PhoneticError::UnknownProperty`] if `name` is not a field name.
pub fn property_vector_by_name(v: &PhoneticVector, name: &str) -> Result<PhoneticVector> {
    Ok(property_vector(v, name.parse()?))
}

/// Field value decoded as an unsigned integer, most-significant bit first.
pub fn property_value(v: &PhoneticVector, property: PhoneticProperty) -> u32 {
    debug_assert!(property.width() <= u32::BITS as usize);
    property
        .range()
        .fold(0u32, |acc, idx| (acc << 1) | u32::from(v.get(idx)))
}

/// Value of the field called `name`.
///
/// # Errors
///
/// [`PhoneticError::UnknownProperty`] if `name` is not a field name.
pub fn property_value_by_name(v: &PhoneticVector, name: &str) -> Result<u32> {
    Ok(property_value(v, name.parse()?))
}

/// Returns true unless `v` is the invalid (all-zero) vector.
#[inline]
pub fn is_valid(v: &PhoneticVector) -> bool {
    v.is_valid()
}

/// Vowel flag of `basic_type`.
#[inline]
pub fn is_vowel(v: &PhoneticVector) -> bool {
    v.get(PVIDX_BT_VOWEL)
}

/// Consonant flag of `basic_type`.
#[inline]
pub fn is_consonant(v: &PhoneticVector) -> bool {
    v.get(PVIDX_BT_CONSONANT)
}

/// Nukta flag of `basic_type`.
#[inline]
pub fn is_nukta(v: &PhoneticVector) -> bool {
    v.get(PVIDX_BT_NUKTA)
}

/// Halant flag of `basic_type`.
#[inline]
pub fn is_halant(v: &PhoneticVector) -> bool {
    v.get(PVIDX_BT_HALANT)
}

/// Anusvaar flag of `basic_type`.
#[inline]
pub fn is_anusvaar(v: &PhoneticVector) -> bool {
    v.get(PVIDX_BT_ANUSVAAR)
}

/// Miscellaneous flag of `basic_type`.
#[inline]
pub fn is_misc(v: &PhoneticVector) -> bool {
    v.get(PVIDX_BT_MISC)
}

/// A vowel sign (matra) rather than an independent vowel.
pub fn is_dependent_vowel(v: &PhoneticVector) -> bool {
    is_vowel(v) && v.get(PVIDX_VSTAT_DEP)
}

/// A consonant whose `consonant_type` decodes to [`CONSONANT_TYPE_PLOSIVE`].
pub fn is_plosive(v: &PhoneticVector) -> bool {
    is_consonant(v) && property_value(v, PhoneticProperty::ConsonantType) == CONSONANT_TYPE_PLOSIVE
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vector::DEFAULT_PHONETIC_VECTOR_LENGTH;

    fn with_bits(idx: &[usize]) -> PhoneticVector {
        let mut v = PhoneticVector::zeros(DEFAULT_PHONETIC_VECTOR_LENGTH);
        for &i in idx {
            v.set(i, true);
        }
        v
    }

    #[test]
    fn test_ranges_contiguous() {
        let mut expected_start = 0;
        for p in PhoneticProperty::ALL {
            assert_eq!(p.range().start, expected_start, "{} not contiguous", p);
            assert!(p.width() > 0);
            expected_start = p.range().end;
        }
        assert_eq!(expected_start, DEFAULT_PHONETIC_VECTOR_LENGTH);
    }

    #[test]
    fn test_from_str() {
        for p in PhoneticProperty::ALL {
            assert_eq!(p.name().parse::<PhoneticProperty>(), Ok(p));
        }
        assert_eq!(
            "not_a_field".parse::<PhoneticProperty>(),
            Err(PhoneticError::UnknownProperty("not_a_field".to_string()))
        );
    }

    #[test]
    fn test_property_vector_by_name() {
        let v = with_bits(&[23]);
        assert_eq!(property_vector_by_name(&v, "aspiration").unwrap().to_string(), "10");
        assert!(matches!(
            property_vector_by_name(&v, "not_a_field"),
            Err(PhoneticError::UnknownProperty(_))
        ));
    }

    #[test]
    fn test_property_value_msb_first() {
        // vowel_strength [8, 11) = 1,0,1
        let v = with_bits(&[8, 10]);
        assert_eq!(property_value(&v, PhoneticProperty::VowelStrength), 5);
        assert_eq!(property_value_by_name(&v, "vowel_strength"), Ok(5));

        let v = with_bits(&[18]);
        assert_eq!(property_value(&v, PhoneticProperty::ArticulationPlace), 16);
        let v = with_bits(&[5]);
        assert_eq!(property_value(&v, PhoneticProperty::BasicType), 1);
        let v = with_bits(&[0, 1, 2, 3, 4, 5]);
        assert_eq!(property_value(&v, PhoneticProperty::BasicType), 63);
    }

    #[test]
    fn test_basic_type_predicates() {
        let v = with_bits(&[PVIDX_BT_VOWEL]);
        assert!(is_vowel(&v) && !is_consonant(&v));
        let v = with_bits(&[PVIDX_BT_CONSONANT]);
        assert!(is_consonant(&v) && !is_vowel(&v));
        assert!(is_nukta(&with_bits(&[PVIDX_BT_NUKTA])));
        assert!(is_halant(&with_bits(&[PVIDX_BT_HALANT])));
        assert!(is_anusvaar(&with_bits(&[PVIDX_BT_ANUSVAAR])));
        assert!(is_misc(&with_bits(&[PVIDX_BT_MISC])));
    }

    #[test]
    fn test_dependent_vowel() {
        assert!(is_dependent_vowel(&with_bits(&[PVIDX_BT_VOWEL, PVIDX_VSTAT_DEP])));
        assert!(!is_dependent_vowel(&with_bits(&[PVIDX_BT_VOWEL, 11])));
        assert!(!is_dependent_vowel(&with_bits(&[PVIDX_BT_CONSONANT, PVIDX_VSTAT_DEP])));
    }

    #[test]
    fn test_plosive() {
        assert!(is_plosive(&with_bits(&[PVIDX_BT_CONSONANT])));
        assert!(!is_plosive(&with_bits(&[PVIDX_BT_CONSONANT, 17])));
        assert!(!is_plosive(&with_bits(&[PVIDX_BT_VOWEL])));
    }

    #[test]
    fn test_invalid_vector() {
        let v = PhoneticVector::invalid(DEFAULT_PHONETIC_VECTOR_LENGTH);
        assert!(!is_valid(&v));
        assert!(!is_vowel(&v) && !is_consonant(&v));
        assert!(is_valid(&with_bits(&[PVIDX_BT_MISC])));
    }

    #[test]
    fn test_short_vector_reads_zero() {
        let v = PhoneticVector::zeros(6);
        assert_eq!(property_value(&v, PhoneticProperty::VowelRoundness), 0);
        assert!(property_vector(&v, PhoneticProperty::VowelRoundness).is_empty());
    }
}

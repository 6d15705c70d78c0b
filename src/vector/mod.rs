//! Fixed-width phonetic feature vectors.
//!
//! A [`PhoneticVector`] is a bit vector whose contiguous sub-ranges encode
//! linguistic properties (see [`properties`]). Bits are packed 64 per `u64`
//! word; the default 38-bit vector fits in a single inline word.
//!
//! The all-zero vector is the *invalid vector*: every real character sets at
//! least one `basic_type` bit, so a zero vector always means "no phonetic
//! information" rather than "all properties false".

use std::fmt;
use std::ops::Range;

use smallvec::{smallvec, SmallVec};

use crate::error::{PhoneticError, Result};

pub mod properties;

pub use properties::PhoneticProperty;

/// Vector length used until a phonetic table says otherwise.
pub const DEFAULT_PHONETIC_VECTOR_LENGTH: usize = 38;

const WORD_BITS: usize = 64;

/// Packed phonetic feature vector.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawVector")
)]
pub struct PhoneticVector {
    words: SmallVec<[u64; 1]>,
    len: usize,
}

/// Unchecked wire form of [`PhoneticVector`].
#[cfg(feature = "serialization")]
#[derive(serde::Deserialize)]
struct RawVector {
    words: SmallVec<[u64; 1]>,
    len: usize,
}

#[cfg(feature = "serialization")]
impl TryFrom<RawVector> for PhoneticVector {
    type Error = PhoneticError;

    fn try_from(raw: RawVector) -> Result<Self> {
        Self::from_words(raw.words, raw.len)
    }
}

impl PhoneticVector {
    /// Create an all-zero vector of `len` bits.
    pub fn zeros(len: usize) -> Self {
        Self {
            words: smallvec![0; len.div_ceil(WORD_BITS)],
            len,
        }
    }

    /// The invalid vector of `len` bits. Same as [`PhoneticVector::zeros`].
    #[inline]
    pub fn invalid(len: usize) -> Self {
        Self::zeros(len)
    }

    /// Create a vector from bits in vector order.
    pub fn from_bits<I>(bits: I) -> Self
    where
        I: IntoIterator<Item = bool>,
    {
        let mut words: SmallVec<[u64; 1]> = SmallVec::new();
        let mut len = 0;
        for bit in bits {
            if len % WORD_BITS == 0 {
                words.push(0);
            }
            if bit {
                words[len / WORD_BITS] |= 1 << (len % WORD_BITS);
            }
            len += 1;
        }
        Self { words, len }
    }

    /// Create a vector from packed words, bit `i` at word `i / 64`, bit `i % 64`.
    ///
    /// # Errors
    ///
    /// [`PhoneticError::MalformedVector`] unless there are exactly
    /// `ceil(len / 64)` words and every bit at or above `len` is clear.
    pub fn from_words(words: SmallVec<[u64; 1]>, len: usize) -> Result<Self> {
        let malformed = PhoneticError::MalformedVector {
            len,
            words: words.len(),
        };
        if words.len() != len.div_ceil(WORD_BITS) {
            return Err(malformed);
        }
        let tail = len % WORD_BITS;
        if let Some(&last) = words.last() {
            if tail != 0 && last >> tail != 0 {
                return Err(malformed);
            }
        }
        Ok(Self { words, len })
    }

    /// Number of bits.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true for a zero-length vector.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Bit at `idx`, or `false` past the end.
    #[inline]
    pub fn get(&self, idx: usize) -> bool {
        idx < self.len && (self.words[idx / WORD_BITS] >> (idx % WORD_BITS)) & 1 == 1
    }

    /// Set the bit at `idx`.
    ///
    /// Meant for building tables in memory, where the index comes from the
    /// field layout rather than from input data. Lookups never call it.
    ///
    /// # Panics
    ///
    /// Panics if `idx >= len()`; an out-of-range index is a layout bug.
    pub fn set(&mut self, idx: usize, value: bool) {
        assert!(idx < self.len, "bit index {} out of range {}", idx, self.len);
        let mask = 1u64 << (idx % WORD_BITS);
        if value {
            self.words[idx / WORD_BITS] |= mask;
        } else {
            self.words[idx / WORD_BITS] &= !mask;
        }
    }

    /// Number of set bits.
    pub fn count_ones(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Returns true if any bit is set.
    ///
    /// This is what separates a real encoding from the invalid vector.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.words.iter().any(|&w| w != 0)
    }

    /// Iterate over bits in vector order.
    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        (0..self.len).map(move |i| self.get(i))
    }

    /// Copy of the bits in `range`, clamped to the vector length.
    pub fn slice(&self, range: Range<usize>) -> PhoneticVector {
        let end = range.end.min(self.len);
        let start = range.start.min(end);
        Self::from_bits((start..end).map(|i| self.get(i)))
    }

    /// Elementwise OR.
    ///
    /// # Errors
    ///
    /// [`PhoneticError::LengthMismatch`] if the lengths differ.
    pub fn or(&self, other: &PhoneticVector) -> Result<PhoneticVector> {
        self.zip_words(other, |a, b| a | b)
    }

    /// Elementwise XOR.
    ///
    /// # Errors
    ///
    /// [`PhoneticError::LengthMismatch`] if the lengths differ.
    pub fn xor(&self, other: &PhoneticVector) -> Result<PhoneticVector> {
        self.zip_words(other, |a, b| a ^ b)
    }

    fn zip_words(&self, other: &PhoneticVector, op: impl Fn(u64, u64) -> u64) -> Result<Self> {
        if self.len != other.len {
            return Err(PhoneticError::LengthMismatch {
                left: self.len,
                right: other.len,
            });
        }
        // Padding bits are zero in both operands, and OR/XOR keep them zero.
        let words = self
            .words
            .iter()
            .zip(other.words.iter())
            .map(|(&a, &b)| op(a, b))
            .collect();
        Ok(Self {
            words,
            len: self.len,
        })
    }
}

/// Elementwise OR of two equal-length vectors.
pub fn or_vectors(v1: &PhoneticVector, v2: &PhoneticVector) -> Result<PhoneticVector> {
    v1.or(v2)
}

/// Elementwise XOR of two equal-length vectors.
pub fn xor_vectors(v1: &PhoneticVector, v2: &PhoneticVector) -> Result<PhoneticVector> {
    v1.xor(v2)
}

impl fmt::Display for PhoneticVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in self.iter() {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

impl FromIterator<bool> for PhoneticVector {
    fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
        Self::from_bits(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bits(s: &str) -> PhoneticVector {
        s.chars().map(|c| c == '1').collect()
    }

    #[test]
    fn test_zeros_is_invalid() {
        let v = PhoneticVector::zeros(DEFAULT_PHONETIC_VECTOR_LENGTH);
        assert_eq!(v.len(), 38);
        assert!(!v.is_valid());
        assert_eq!(v.count_ones(), 0);
        assert_eq!(v, PhoneticVector::invalid(38));
    }

    #[test]
    fn test_get_set() {
        let mut v = PhoneticVector::zeros(70);
        v.set(0, true);
        v.set(63, true);
        v.set(64, true);
        assert!(v.get(0) && v.get(63) && v.get(64));
        assert!(!v.get(1));
        assert!(!v.get(500));
        assert_eq!(v.count_ones(), 3);
        v.set(63, false);
        assert!(!v.get(63));
    }

    #[test]
    #[should_panic]
    fn test_set_out_of_range() {
        PhoneticVector::zeros(4).set(4, true);
    }

    #[test]
    fn test_display_and_slice() {
        let v = bits("110010");
        assert_eq!(v.to_string(), "110010");
        assert_eq!(v.slice(1..4).to_string(), "100");
        assert_eq!(v.slice(4..100).to_string(), "10");
        assert!(v.slice(10..12).is_empty());
    }

    #[test]
    fn test_or_xor() {
        let a = bits("1100");
        let b = bits("1010");
        assert_eq!(a.or(&b).unwrap().to_string(), "1110");
        assert_eq!(a.xor(&b).unwrap().to_string(), "0110");
        assert_eq!(or_vectors(&a, &a).unwrap(), a);
        assert!(!xor_vectors(&a, &a).unwrap().is_valid());
    }

    #[test]
    fn test_length_mismatch() {
        let a = bits("1100");
        let b = bits("11000");
        assert_eq!(
            a.or(&b),
            Err(PhoneticError::LengthMismatch { left: 4, right: 5 })
        );
        assert!(a.xor(&b).is_err());
    }

    #[test]
    fn test_multiword_xor() {
        let a: PhoneticVector = (0..100).map(|i| i % 3 == 0).collect();
        let x = a.xor(&a).unwrap();
        assert_eq!(x, PhoneticVector::zeros(100));
    }

    #[test]
    fn test_from_words() {
        let v = PhoneticVector::from_words(smallvec![0b101], 3).unwrap();
        assert_eq!(v.to_string(), "101");
        assert_eq!(v, bits("101"));

        // set padding bit above len
        assert_eq!(
            PhoneticVector::from_words(smallvec![1 << 40], 38),
            Err(PhoneticError::MalformedVector { len: 38, words: 1 })
        );
        // too few words for len
        assert!(PhoneticVector::from_words(smallvec![0], 100).is_err());
        // too many words for len
        assert!(PhoneticVector::from_words(smallvec![0, 0], 38).is_err());
        assert!(PhoneticVector::from_words(SmallVec::new(), 0).unwrap().is_empty());
        assert!(PhoneticVector::from_words(smallvec![u64::MAX], 64).is_ok());
    }
}

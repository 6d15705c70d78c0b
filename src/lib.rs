//! # indic-phonetic
//!
//! Phonetic feature vectors for Brahmi-derived Indic scripts and English
//! ARPABET phonemes, with a cross-script Longest Common Subsequence Ratio.
//!
//! Indic Unicode blocks are laid out in parallel: the same sound sits at the
//! same offset from the start of each script's block. This crate exposes
//! that structure:
//!
//! - [`script`]: language → codepoint range registry and offset conversions
//! - [`vector`]: packed bit vectors, property fields and OR/XOR
//! - [`resources`]: the phonetic tables the codec reads from
//! - [`codec`]: character/phoneme → feature vector
//! - [`distance`]: LCSR within one script or across two
//!
//! ## Example
//!
//! ```rust
//! use indic_phonetic::prelude::*;
//!
//! let mut v = PhoneticVector::zeros(DEFAULT_PHONETIC_VECTOR_LENGTH);
//! v.set(1, true); // consonant
//! let bundle = ResourceBundle::new(
//!     PhoneticTable::from_rows(vec![PhoneticRow::new(true, v); 0x30]),
//!     PhoneticTable::empty(),
//!     PhoneticTable::empty(),
//!     ArpabetTable::default(),
//! );
//! let codec = PhoneticCodec::new(&bundle);
//!
//! let ka = codec.feature_vector('क', "hi").unwrap();
//! assert!(is_consonant(&ka));
//! assert!(is_plosive(&ka));
//!
//! assert_eq!(lcsr("कमल", "কমল", "hi", "bn").ratio, 1.0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod codec;
pub mod distance;
pub mod error;
pub mod resources;
pub mod script;
pub mod vector;

#[cfg(feature = "serialization")]
pub mod serialization;

/// Command-line front end
#[cfg(feature = "cli")]
pub mod cli;

/// Common imports for convenient usage
pub mod prelude {
    pub use crate::codec::PhoneticCodec;
    pub use crate::distance::{lcsr, lcsr_cross_script, lcsr_same_script, LcsrScore};
    pub use crate::error::{PhoneticError, Result};
    pub use crate::resources::{
        ArpabetTable, PhoneticGroup, PhoneticResources, PhoneticRow, PhoneticTable,
        ResourceBundle, ResourceConfig, ResourceError,
    };
    pub use crate::script::{ScriptRange, ENGLISH, TAMIL};
    pub use crate::vector::properties::{
        is_anusvaar, is_consonant, is_dependent_vowel, is_halant, is_misc, is_nukta, is_plosive,
        is_valid, is_vowel, property_value, property_vector,
    };
    pub use crate::vector::{
        or_vectors, xor_vectors, PhoneticProperty, PhoneticVector,
        DEFAULT_PHONETIC_VECTOR_LENGTH,
    };

    #[cfg(feature = "serialization")]
    pub use crate::serialization::{BincodeSerializer, BundleSerializer, JsonSerializer};
}

//! Script registry for Brahmi-derived Indic scripts.
//!
//! Every supported language is assigned a 128-codepoint Unicode block. The
//! Indic blocks are laid out in parallel: a character and its counterpart in
//! another script sit at the same *structural offset* from their block start.
//! Only offsets inside the coordinated range carry that guarantee; the rest of
//! each block is script-specific.
//!
//! ```rust
//! use indic_phonetic::script::{to_offset, from_offset, in_coordinated_range_offset};
//!
//! // DEVANAGARI LETTER KA and BENGALI LETTER KA share an offset.
//! let hi = to_offset('\u{0915}', "hi").unwrap();
//! let bn = to_offset('\u{0995}', "bn").unwrap();
//! assert_eq!(hi, bn);
//! assert!(in_coordinated_range_offset(hi));
//! assert_eq!(from_offset(hi, "ta").unwrap(), '\u{0B95}');
//! ```

use crate::error::{PhoneticError, Result};

/// Language code for Tamil, which has its own phonetic table.
pub const TAMIL: &str = "ta";

/// Language code for English, encoded as ARPABET phonemes.
pub const ENGLISH: &str = "en";

/// DEVANAGARI DANDA, shared by all Indic scripts.
pub const DANDA: u32 = 0x0964;

/// DEVANAGARI DOUBLE DANDA, shared by all Indic scripts.
pub const DOUBLE_DANDA: u32 = 0x0965;

/// First offset of a script block.
pub const SCRIPT_OFFSET_START: i32 = 0;

/// Number of offsets in a script block.
pub const SCRIPT_OFFSET_RANGE: i32 = 0x80;

/// First offset of the coordinated range (inclusive).
pub const COORDINATED_RANGE_START_INCLUSIVE: i32 = 0x00;

/// Last offset of the coordinated range (inclusive).
pub const COORDINATED_RANGE_END_INCLUSIVE: i32 = 0x4E;

/// Half-open codepoint interval `[start, end)` assigned to a language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScriptRange {
    /// First codepoint of the block
    pub start: u32,
    /// One past the last codepoint of the block
    pub end: u32,
}

impl ScriptRange {
    const fn block(start: u32) -> Self {
        Self {
            start,
            end: start + SCRIPT_OFFSET_RANGE as u32,
        }
    }

    /// Returns true if `c` lies in `[start, end)`.
    #[inline]
    pub fn contains(&self, c: char) -> bool {
        let cp = c as u32;
        cp >= self.start && cp < self.end
    }
}

static SCRIPT_RANGES: &[(&str, ScriptRange)] = &[
    ("pa", ScriptRange::block(0x0A00)),
    ("gu", ScriptRange::block(0x0A80)),
    ("or", ScriptRange::block(0x0B00)),
    ("ta", ScriptRange::block(0x0B80)),
    ("te", ScriptRange::block(0x0C00)),
    ("kn", ScriptRange::block(0x0C80)),
    ("ml", ScriptRange::block(0x0D00)),
    ("si", ScriptRange::block(0x0D80)),
    ("hi", ScriptRange::block(0x0900)),
    ("mr", ScriptRange::block(0x0900)),
    ("kK", ScriptRange::block(0x0900)),
    ("sa", ScriptRange::block(0x0900)),
    ("ne", ScriptRange::block(0x0900)),
    ("sd", ScriptRange::block(0x0900)),
    ("bn", ScriptRange::block(0x0980)),
    ("as", ScriptRange::block(0x0980)),
];

fn lookup(lang: &str) -> Option<ScriptRange> {
    SCRIPT_RANGES
        .iter()
        .find(|(code, _)| *code == lang)
        .map(|(_, range)| *range)
}

/// Returns true if `lang` is registered.
#[inline]
pub fn is_supported(lang: &str) -> bool {
    lookup(lang).is_some()
}

/// Iterate over every registered language code.
pub fn supported_languages() -> impl Iterator<Item = &'static str> {
    SCRIPT_RANGES.iter().map(|(code, _)| *code)
}

/// Codepoint range assigned to `lang`.
///
/// # Errors
///
/// [`PhoneticError::UnsupportedLanguage`] if `lang` is not registered.
pub fn range(lang: &str) -> Result<ScriptRange> {
    lookup(lang).ok_or_else(|| PhoneticError::UnsupportedLanguage(lang.to_string()))
}

/// Structural offset of `c`: its codepoint minus the block start of `lang`.
///
/// The result may be negative or past the block end when `c` belongs to
/// another script.
pub fn to_offset(c: char, lang: &str) -> Result<i32> {
    let range = range(lang)?;
    Ok(c as i32 - range.start as i32)
}

/// Inverse of [`to_offset`].
///
/// # Errors
///
/// [`PhoneticError::UnsupportedLanguage`] for an unregistered language and
/// [`PhoneticError::InvalidOffset`] if the codepoint is not a Unicode scalar value.
pub fn from_offset(offset: i32, lang: &str) -> Result<char> {
    let range = range(lang)?;
    i64::from(range.start)
        .checked_add(i64::from(offset))
        .and_then(|cp| u32::try_from(cp).ok())
        .and_then(char::from_u32)
        .ok_or_else(|| PhoneticError::InvalidOffset {
            offset,
            lang: lang.to_string(),
        })
}

/// Returns true if `c` belongs to the block of `lang`, or is one of the
/// shared danda codepoints.
///
/// The danda check compares absolute codepoints, so it holds for every
/// registered script even though the dandas sit in the Devanagari block.
pub fn is_script_char(c: char, lang: &str) -> Result<bool> {
    let offset = to_offset(c, lang)?;
    let cp = c as u32;
    Ok((SCRIPT_OFFSET_START..SCRIPT_OFFSET_RANGE).contains(&offset)
        || cp == DANDA
        || cp == DOUBLE_DANDA)
}

/// Returns true if `offset` is in the coordinated range shared by all scripts.
#[inline]
pub fn in_coordinated_range_offset(offset: i32) -> bool {
    (COORDINATED_RANGE_START_INCLUSIVE..=COORDINATED_RANGE_END_INCLUSIVE).contains(&offset)
}

/// Returns true if `c` falls in the coordinated range of `lang`.
pub fn in_coordinated_range(c: char, lang: &str) -> Result<bool> {
    Ok(in_coordinated_range_offset(to_offset(c, lang)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supported_languages() {
        assert!(is_supported("hi"));
        assert!(is_supported("ta"));
        assert!(is_supported("kK"));
        assert!(!is_supported("en"));
        assert!(!is_supported("xx"));
        assert!(!is_supported(""));
        assert_eq!(supported_languages().count(), 16);
    }

    #[test]
    fn test_range_unsupported() {
        assert_eq!(
            range("fr"),
            Err(PhoneticError::UnsupportedLanguage("fr".to_string()))
        );
        assert!(to_offset('a', "fr").is_err());
        assert!(from_offset(0, "fr").is_err());
        assert!(is_script_char('a', "fr").is_err());
        assert!(in_coordinated_range('a', "fr").is_err());
    }

    #[test]
    fn test_offsets() {
        assert_eq!(to_offset('\u{0905}', "hi"), Ok(5));
        assert_eq!(to_offset('\u{0985}', "bn"), Ok(5));
        assert_eq!(to_offset('\u{0B85}', "ta"), Ok(5));
        assert_eq!(to_offset('a', "hi"), Ok('a' as i32 - 0x0900));
        assert_eq!(from_offset(5, "ml"), Ok('\u{0D05}'));
    }

    #[test]
    fn test_from_offset_invalid() {
        assert!(matches!(
            from_offset(-0x1000, "hi"),
            Err(PhoneticError::InvalidOffset { offset: -0x1000, .. })
        ));
        // Lands in the surrogate block.
        assert!(from_offset(0xD800 - 0x0900, "hi").is_err());
    }

    #[test]
    fn test_is_script_char() {
        assert_eq!(is_script_char('\u{0915}', "hi"), Ok(true));
        assert_eq!(is_script_char('\u{097F}', "hi"), Ok(true));
        assert_eq!(is_script_char('\u{0980}', "hi"), Ok(false));
        assert_eq!(is_script_char('a', "hi"), Ok(false));
        assert_eq!(is_script_char('\u{0964}', "ta"), Ok(true));
        assert_eq!(is_script_char('\u{0965}', "kn"), Ok(true));
    }

    #[test]
    fn test_coordinated_range() {
        assert!(in_coordinated_range_offset(0));
        assert!(in_coordinated_range_offset(COORDINATED_RANGE_END_INCLUSIVE));
        assert!(!in_coordinated_range_offset(COORDINATED_RANGE_END_INCLUSIVE + 1));
        assert!(!in_coordinated_range_offset(-1));
        assert_eq!(in_coordinated_range('\u{0964}', "hi"), Ok(false));
        assert_eq!(in_coordinated_range('\u{0915}', "hi"), Ok(true));
    }

    #[test]
    fn test_range_contains() {
        let hi = range("hi").unwrap();
        assert!(hi.contains('\u{0900}'));
        assert!(hi.contains('\u{097F}'));
        assert!(!hi.contains('\u{0980}'));
    }
}

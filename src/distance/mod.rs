//! Longest Common Subsequence Ratio (LCSR).
//!
//! LCSR is the length of the longest common subsequence of two words divided
//! by the length of the longer word. Lengths are counted in `char`s.
//!
//! Two matching rules are available:
//! - **Same script**: characters match when they are equal.
//! - **Cross script**: characters match when they sit at the same structural
//!   offset inside the coordinated range of their respective scripts, or when
//!   both are outside the coordinated range and are the same character
//!   (shared punctuation such as the danda, ASCII digits, spaces).
//!
//! [`lcsr`] picks the rule from the language pair.
//!
//! # Example
//!
//! ```rust
//! use indic_phonetic::distance::lcsr;
//!
//! // "kamal" in Devanagari and in Bengali
//! let score = lcsr("कमल", "কমল", "hi", "bn");
//! assert_eq!(score.ratio, 1.0);
//! assert_eq!(score.as_tuple(), (1.0, 3.0, 3.0));
//! ```

use smallvec::SmallVec;

use crate::error::Result;
use crate::script;

/// LCSR result: the ratio and both word lengths in characters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LcsrScore {
    /// LCS length over the longer word's length; `0.0` when both are empty
    pub ratio: f64,
    /// Length of the source word
    pub source_len: f64,
    /// Length of the target word
    pub target_len: f64,
}

impl LcsrScore {
    fn new(lcs: usize, m: usize, n: usize) -> Self {
        let longest = m.max(n);
        let ratio = if longest == 0 {
            0.0
        } else {
            lcs as f64 / longest as f64
        };
        Self {
            ratio,
            source_len: m as f64,
            target_len: n as f64,
        }
    }

    /// `(ratio, source_len, target_len)`.
    pub fn as_tuple(&self) -> (f64, f64, f64) {
        (self.ratio, self.source_len, self.target_len)
    }
}

impl From<LcsrScore> for (f64, f64, f64) {
    fn from(score: LcsrScore) -> Self {
        score.as_tuple()
    }
}

/// LCSR between `source` in `source_lang` and `target` in `target_lang`.
///
/// Uses the cross-script rule when the languages differ and both are
/// registered; otherwise falls back to plain character equality. Never fails.
pub fn lcsr(source: &str, target: &str, source_lang: &str, target_lang: &str) -> LcsrScore {
    if source_lang == target_lang {
        return lcsr_same_script(source, target);
    }
    match (script::range(source_lang), script::range(target_lang)) {
        (Ok(s), Ok(t)) => lcsr_offsets(source, target, s.start, t.start),
        _ => lcsr_same_script(source, target),
    }
}

/// LCSR with raw character equality.
pub fn lcsr_same_script(source: &str, target: &str) -> LcsrScore {
    let source_chars: SmallVec<[char; 32]> = source.chars().collect();
    let target_chars: SmallVec<[char; 32]> = target.chars().collect();

    let lcs = lcs_length(&source_chars, &target_chars, |a, b| a == b);
    LcsrScore::new(lcs, source_chars.len(), target_chars.len())
}

/// LCSR with coordinated-offset matching between two scripts.
///
/// # Errors
///
/// [`PhoneticError::UnsupportedLanguage`](crate::error::PhoneticError::UnsupportedLanguage)
/// if either language is not registered.
pub fn lcsr_cross_script(
    source: &str,
    target: &str,
    source_lang: &str,
    target_lang: &str,
) -> Result<LcsrScore> {
    let source_start = script::range(source_lang)?.start;
    let target_start = script::range(target_lang)?.start;
    Ok(lcsr_offsets(source, target, source_start, target_start))
}

/// Cross-script LCSR given each word's block start.
fn lcsr_offsets(source: &str, target: &str, source_start: u32, target_start: u32) -> LcsrScore {
    let source_units: SmallVec<[ScriptUnit; 32]> = source
        .chars()
        .map(|c| ScriptUnit::new(c, source_start as i32))
        .collect();
    let target_units: SmallVec<[ScriptUnit; 32]> = target
        .chars()
        .map(|c| ScriptUnit::new(c, target_start as i32))
        .collect();

    let lcs = lcs_length(&source_units, &target_units, ScriptUnit::matches);
    LcsrScore::new(lcs, source_units.len(), target_units.len())
}

/// A character with its structural offset precomputed.
#[derive(Debug, Clone, Copy)]
struct ScriptUnit {
    c: char,
    offset: i32,
    coordinated: bool,
}

impl ScriptUnit {
    #[inline]
    fn new(c: char, start: i32) -> Self {
        let offset = c as i32 - start;
        Self {
            c,
            offset,
            coordinated: script::in_coordinated_range_offset(offset),
        }
    }

    #[inline]
    fn matches(a: &ScriptUnit, b: &ScriptUnit) -> bool {
        match (a.coordinated, b.coordinated) {
            (true, true) => a.offset == b.offset,
            (false, false) => a.c == b.c,
            _ => false,
        }
    }
}

/// Length of the longest common subsequence under `eq`.
///
/// Keeps two rows of the DP table: `row[j]` holds the LCS of the current
/// source prefix and `target[..j]`.
fn lcs_length<T, F>(source: &[T], target: &[T], eq: F) -> usize
where
    F: Fn(&T, &T) -> bool,
{
    let n = target.len();
    if source.is_empty() || n == 0 {
        return 0;
    }

    let mut prev_row = vec![0usize; n + 1];
    let mut curr_row = vec![0usize; n + 1];

    for s in source {
        curr_row[0] = 0;
        for (j, t) in target.iter().enumerate() {
            curr_row[j + 1] = if eq(s, t) {
                prev_row[j] + 1
            } else {
                curr_row[j].max(prev_row[j + 1])
            };
        }
        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[n]
}

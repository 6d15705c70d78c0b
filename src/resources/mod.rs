//! Phonetic resource bundle.
//!
//! The codec never reads files itself. It is handed an immutable
//! [`PhoneticResources`] implementation holding one [`PhoneticTable`] per
//! [`PhoneticGroup`] plus the ARPABET symbol list. [`ResourceBundle`] is the
//! concrete bundle, built in memory or loaded from disk with
//! [`ResourceBundle::load`].

use std::fmt;
use std::path::PathBuf;

use rustc_hash::FxHashMap;

use crate::error::PhoneticError;
use crate::script::{ENGLISH, TAMIL};
use crate::vector::{PhoneticProperty, PhoneticVector, DEFAULT_PHONETIC_VECTOR_LENGTH};

pub mod config;
pub mod loader;

pub use config::{ResourceConfig, RESOURCES_PATH_ENV};

/// Table selector for a language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhoneticGroup {
    /// Every Brahmi script except Tamil
    General,
    /// Tamil, whose inventory differs from the other scripts
    Tamil,
    /// ARPABET phonemes for English
    English,
}

impl PhoneticGroup {
    /// Group whose table serves `lang`.
    pub fn for_language(lang: &str) -> Self {
        match lang {
            TAMIL => Self::Tamil,
            ENGLISH => Self::English,
            _ => Self::General,
        }
    }
}

impl fmt::Display for PhoneticGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::General => write!(f, "general"),
            Self::Tamil => write!(f, "tamil"),
            Self::English => write!(f, "english"),
        }
    }
}

/// One table row: validity flag plus the stored vector.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serialization", derive(serde::Serialize, serde::Deserialize))]
pub struct PhoneticRow {
    /// `false` when the offset has no phonetic representation
    pub valid: bool,
    /// Stored feature vector
    pub vector: PhoneticVector,
}

impl PhoneticRow {
    /// Create a row.
    pub fn new(valid: bool, vector: PhoneticVector) -> Self {
        Self { valid, vector }
    }
}

/// Phonetic table indexed by structural offset (or phoneme ID for English).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawTable")
)]
pub struct PhoneticTable {
    rows: Vec<PhoneticRow>,
    width: usize,
}

/// Unchecked wire form of [`PhoneticTable`].
#[cfg(feature = "serialization")]
#[derive(serde::Deserialize)]
struct RawTable {
    rows: Vec<PhoneticRow>,
    width: usize,
}

#[cfg(feature = "serialization")]
impl TryFrom<RawTable> for PhoneticTable {
    type Error = PhoneticError;

    fn try_from(raw: RawTable) -> Result<Self, PhoneticError> {
        Self::try_new(raw.width, raw.rows)
    }
}

impl PhoneticTable {
    /// Create a table with an explicit vector width.
    ///
    /// The loader guarantees every row has `width` bits; in-memory callers
    /// are expected to do the same.
    pub fn new(width: usize, rows: Vec<PhoneticRow>) -> Self {
        debug_assert!(rows.iter().all(|r| r.vector.len() == width));
        Self { rows, width }
    }

    /// Create a table, checking every row against `width`.
    ///
    /// # Errors
    ///
    /// [`PhoneticError::RowWidthMismatch`] for the first row whose vector
    /// length differs from `width`.
    pub fn try_new(width: usize, rows: Vec<PhoneticRow>) -> Result<Self, PhoneticError> {
        if let Some((row, r)) = rows
            .iter()
            .enumerate()
            .find(|(_, r)| r.vector.len() != width)
        {
            return Err(PhoneticError::RowWidthMismatch {
                row,
                width,
                found: r.vector.len(),
            });
        }
        Ok(Self { rows, width })
    }

    /// Create a table whose width is taken from its first row.
    pub fn from_rows(rows: Vec<PhoneticRow>) -> Self {
        let width = rows
            .first()
            .map(|r| r.vector.len())
            .unwrap_or(DEFAULT_PHONETIC_VECTOR_LENGTH);
        Self::new(width, rows)
    }

    /// An empty table of the default width.
    pub fn empty() -> Self {
        Self::new(DEFAULT_PHONETIC_VECTOR_LENGTH, Vec::new())
    }

    /// Number of rows.
    #[inline]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Declared vector width.
    #[inline]
    pub fn vector_width(&self) -> usize {
        self.width
    }

    /// Row at `offset`, if present.
    #[inline]
    pub fn row(&self, offset: usize) -> Option<&PhoneticRow> {
        self.rows.get(offset)
    }

    /// Validity flag at `offset`; `false` past the end.
    #[inline]
    pub fn is_valid_row(&self, offset: usize) -> bool {
        self.row(offset).is_some_and(|r| r.valid)
    }

    /// Stored vector at `offset`, regardless of its validity flag.
    #[inline]
    pub fn vector(&self, offset: usize) -> Option<&PhoneticVector> {
        self.row(offset).map(|r| &r.vector)
    }

    /// Categorical code of `property` at `offset`.
    pub fn property_code(&self, offset: usize, property: PhoneticProperty) -> Option<u32> {
        self.vector(offset)
            .map(|v| crate::vector::properties::property_value(v, property))
    }

    /// The invalid vector for this table's width.
    pub fn invalid_vector(&self) -> PhoneticVector {
        PhoneticVector::invalid(self.width)
    }
}

impl Default for PhoneticTable {
    fn default() -> Self {
        Self::empty()
    }
}

/// Bidirectional mapping between ARPABET symbols and sequential IDs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "Vec<String>", into = "Vec<String>")
)]
pub struct ArpabetTable {
    symbols: Vec<String>,
    ids: FxHashMap<String, usize>,
}

impl ArpabetTable {
    /// Build from symbols in ID order.
    ///
    /// A symbol listed twice resolves to its last ID, while both IDs still
    /// map back to it.
    pub fn from_symbols<I, S>(symbols: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let symbols: Vec<String> = symbols.into_iter().map(Into::into).collect();
        let ids = symbols
            .iter()
            .enumerate()
            .map(|(id, s)| (s.clone(), id))
            .collect();
        Self { symbols, ids }
    }

    /// ID of `symbol`.
    #[inline]
    pub fn id(&self, symbol: &str) -> Option<usize> {
        self.ids.get(symbol).copied()
    }

    /// Symbol with `id`.
    #[inline]
    pub fn symbol(&self, id: usize) -> Option<&str> {
        self.symbols.get(id).map(String::as_str)
    }

    /// Number of IDs.
    #[inline]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Returns true if no symbols are loaded.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Symbols in ID order.
    pub fn symbols(&self) -> impl Iterator<Item = &str> {
        self.symbols.iter().map(String::as_str)
    }
}

impl From<Vec<String>> for ArpabetTable {
    fn from(symbols: Vec<String>) -> Self {
        Self::from_symbols(symbols)
    }
}

impl From<ArpabetTable> for Vec<String> {
    fn from(table: ArpabetTable) -> Self {
        table.symbols
    }
}

/// Read-only provider of phonetic tables.
///
/// Implementations must be immutable once constructed; the codec and
/// accessor only ever borrow them.
pub trait PhoneticResources {
    /// Table for `group`.
    fn table(&self, group: PhoneticGroup) -> &PhoneticTable;

    /// ARPABET symbol table.
    fn arpabet(&self) -> &ArpabetTable;

    /// Configured vector width for Indic scripts.
    ///
    /// The general table's declared width, even when it has no rows. The
    /// Tamil table and then [`DEFAULT_PHONETIC_VECTOR_LENGTH`] stand in only
    /// for tables declaring width 0.
    fn vector_width(&self) -> usize {
        [PhoneticGroup::General, PhoneticGroup::Tamil]
            .into_iter()
            .map(|g| self.table(g))
            .find(|t| t.vector_width() > 0)
            .map(PhoneticTable::vector_width)
            .unwrap_or(DEFAULT_PHONETIC_VECTOR_LENGTH)
    }
}

/// Errors raised while locating or parsing resource files.
#[derive(Debug, thiserror::Error)]
pub enum ResourceError {
    /// I/O error
    #[error("I/O error reading {path}")]
    Io {
        /// File being read
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },
    /// A required column is missing from the header
    #[error("{file}: missing column '{column}'")]
    MissingColumn {
        /// File or source name
        file: String,
        /// Column name
        column: String,
    },
    /// A row could not be parsed
    #[error("{file}:{line}: {message}")]
    Parse {
        /// File or source name
        file: String,
        /// 1-based line number
        line: usize,
        /// What went wrong
        message: String,
    },
    /// The resolved resource root is empty
    #[error(
        "resource path is not set or is empty; set {} or pass an explicit path",
        RESOURCES_PATH_ENV
    )]
    EmptyResourcePath,
}

/// Loaded phonetic catalog: one table per group plus the ARPABET list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serialization", derive(serde::Serialize, serde::Deserialize))]
pub struct ResourceBundle {
    general: PhoneticTable,
    tamil: PhoneticTable,
    english: PhoneticTable,
    arpabet: ArpabetTable,
}

impl ResourceBundle {
    /// Assemble a bundle from already-built tables.
    pub fn new(
        general: PhoneticTable,
        tamil: PhoneticTable,
        english: PhoneticTable,
        arpabet: ArpabetTable,
    ) -> Self {
        if general.row_count() > 0
            && tamil.row_count() > 0
            && general.vector_width() != tamil.vector_width()
        {
            tracing::warn!(
                general = general.vector_width(),
                tamil = tamil.vector_width(),
                "phonetic tables disagree on vector width"
            );
        }
        let bundle = Self {
            general,
            tamil,
            english,
            arpabet,
        };
        tracing::info!(
            general_rows = bundle.general.row_count(),
            tamil_rows = bundle.tamil.row_count(),
            english_rows = bundle.english.row_count(),
            phonemes = bundle.arpabet.len(),
            width = bundle.vector_width(),
            "phonetic resource bundle ready"
        );
        bundle
    }
}

impl PhoneticResources for ResourceBundle {
    fn table(&self, group: PhoneticGroup) -> &PhoneticTable {
        match group {
            PhoneticGroup::General => &self.general,
            PhoneticGroup::Tamil => &self.tamil,
            PhoneticGroup::English => &self.english,
        }
    }

    fn arpabet(&self) -> &ArpabetTable {
        &self.arpabet
    }
}

impl<R: PhoneticResources + ?Sized> PhoneticResources for &R {
    fn table(&self, group: PhoneticGroup) -> &PhoneticTable {
        (**self).table(group)
    }

    fn arpabet(&self) -> &ArpabetTable {
        (**self).arpabet()
    }

    fn vector_width(&self) -> usize {
        (**self).vector_width()
    }
}

impl<R: PhoneticResources + ?Sized> PhoneticResources for std::sync::Arc<R> {
    fn table(&self, group: PhoneticGroup) -> &PhoneticTable {
        (**self).table(group)
    }

    fn arpabet(&self) -> &ArpabetTable {
        (**self).arpabet()
    }

    fn vector_width(&self) -> usize {
        (**self).vector_width()
    }
}

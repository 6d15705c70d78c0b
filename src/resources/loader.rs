//! Columnar text loading for phonetic tables and the ARPABET list.
//!
//! # Table format
//!
//! ```text
//! Unicode,Relative Offset,Devanagari,ITRANS,Notes,Valid Vector Representation,is_vowel,...
//! 0x900,0,ऀ,,"candrabindu, vedic",0,0,0,...
//! ```
//!
//! Row `n` (after the header) describes structural offset `n`. The validity
//! flag is found by header name; the feature vector is every column from
//! [`PHONETIC_VECTOR_START_OFFSET`] onward. Fields may be double-quoted, and a
//! quoted field may span several lines.

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use super::config::{
    ResourceConfig, ALL_SCRIPT_PHONETIC_DATA, ENGLISH_ARPABET_LIST, ENGLISH_SCRIPT_PHONETIC_DATA,
    TAMIL_SCRIPT_PHONETIC_DATA,
};
use super::{ArpabetTable, PhoneticRow, PhoneticTable, ResourceBundle, ResourceError};
use crate::vector::PhoneticVector;

/// Column index where the feature vector starts.
pub const PHONETIC_VECTOR_START_OFFSET: usize = 6;

/// Header of the validity column.
pub const VALID_COLUMN: &str = "Valid Vector Representation";

impl ResourceBundle {
    /// Load all four resource files below `config`'s root.
    pub fn load(config: &ResourceConfig) -> Result<Self, ResourceError> {
        config.validate()?;
        let general = load_phonetic_table(&config.script_file(ALL_SCRIPT_PHONETIC_DATA))?;
        let tamil = load_phonetic_table(&config.script_file(TAMIL_SCRIPT_PHONETIC_DATA))?;
        let english = load_phonetic_table(&config.script_file(ENGLISH_SCRIPT_PHONETIC_DATA))?;
        let arpabet = load_arpabet_list(&config.script_file(ENGLISH_ARPABET_LIST))?;
        Ok(Self::new(general, tamil, english, arpabet))
    }
}

fn open(path: &Path) -> Result<File, ResourceError> {
    File::open(path).map_err(|source| ResourceError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Load a phonetic table from a file.
pub fn load_phonetic_table(path: &Path) -> Result<PhoneticTable, ResourceError> {
    let name = path.display().to_string();
    let table = parse_phonetic_table(open(path)?, &name).map_err(|e| match e {
        ResourceError::Io { source, .. } => ResourceError::Io {
            path: path.to_path_buf(),
            source,
        },
        other => other,
    })?;
    tracing::debug!(
        file = %name,
        rows = table.row_count(),
        width = table.vector_width(),
        "loaded phonetic table"
    );
    Ok(table)
}

/// Load the ARPABET symbol list from a file.
pub fn load_arpabet_list(path: &Path) -> Result<ArpabetTable, ResourceError> {
    let table = parse_arpabet_list(open(path)?).map_err(|e| match e {
        ResourceError::Io { source, .. } => ResourceError::Io {
            path: path.to_path_buf(),
            source,
        },
        other => other,
    })?;
    tracing::debug!(file = %path.display(), phonemes = table.len(), "loaded ARPABET list");
    Ok(table)
}

/// Parse a phonetic table; `source` names the input in error messages.
pub fn parse_phonetic_table<R: Read>(reader: R, source: &str) -> Result<PhoneticTable, ResourceError> {
    let mut lines = BufReader::new(reader).lines().enumerate();

    let header = match lines.next() {
        Some((_, line)) => split_fields(&line.map_err(io_err)?),
        None => {
            return Err(ResourceError::Parse {
                file: source.to_string(),
                line: 1,
                message: "missing header row".to_string(),
            })
        }
    };

    let valid_col = header
        .iter()
        .position(|h| h.trim() == VALID_COLUMN)
        .ok_or_else(|| ResourceError::MissingColumn {
            file: source.to_string(),
            column: VALID_COLUMN.to_string(),
        })?;

    if header.len() <= PHONETIC_VECTOR_START_OFFSET {
        return Err(ResourceError::Parse {
            file: source.to_string(),
            line: 1,
            message: format!(
                "expected feature columns after column {}, found {} columns",
                PHONETIC_VECTOR_START_OFFSET,
                header.len()
            ),
        });
    }
    let width = header.len() - PHONETIC_VECTOR_START_OFFSET;

    let mut rows = Vec::new();
    let mut record = String::new();
    let mut line_no = 0;
    for (idx, line) in lines {
        let line = line.map_err(io_err)?;
        if record.is_empty() {
            if line.trim().is_empty() {
                continue;
            }
            line_no = idx + 1;
            record = line;
        } else {
            // a quoted field spans the line break
            record.push('\n');
            record.push_str(&line);
        }
        if quote_open(&record) {
            continue;
        }
        let fields = split_fields(&std::mem::take(&mut record));
        if fields.len() != header.len() {
            return Err(ResourceError::Parse {
                file: source.to_string(),
                line: line_no,
                message: format!("expected {} fields, found {}", header.len(), fields.len()),
            });
        }

        let parse_flag = |field: &str| {
            parse_bit(field).ok_or_else(|| ResourceError::Parse {
                file: source.to_string(),
                line: line_no,
                message: format!("not a number: '{}'", field),
            })
        };

        let valid = parse_flag(fields[valid_col].as_str())?;
        let vector = fields[PHONETIC_VECTOR_START_OFFSET..]
            .iter()
            .map(|f| parse_flag(f.as_str()))
            .collect::<Result<PhoneticVector, _>>()?;
        rows.push(PhoneticRow::new(valid, vector));
    }

    if !record.is_empty() {
        return Err(ResourceError::Parse {
            file: source.to_string(),
            line: line_no,
            message: "unterminated quoted field".to_string(),
        });
    }

    Ok(PhoneticTable::new(width, rows))
}

/// Parse the ARPABET list: the line index is the phoneme ID.
pub fn parse_arpabet_list<R: Read>(reader: R) -> Result<ArpabetTable, ResourceError> {
    let symbols = BufReader::new(reader)
        .lines()
        .map(|line| line.map(|l| l.trim().to_string()))
        .collect::<Result<Vec<_>, _>>()
        .map_err(io_err)?;
    Ok(ArpabetTable::from_symbols(symbols))
}

fn io_err(source: std::io::Error) -> ResourceError {
    ResourceError::Io {
        path: Default::default(),
        source,
    }
}

/// Empty fields read as unset; any other number is set when non-zero.
fn parse_bit(field: &str) -> Option<bool> {
    let field = field.trim();
    if field.is_empty() {
        return Some(false);
    }
    field.parse::<f64>().ok().map(|n| n != 0.0)
}

/// Returns true while `record` ends inside a quoted field. A `""` escape
/// counts twice, so it never flips the state.
fn quote_open(record: &str) -> bool {
    record.matches('"').count() % 2 == 1
}

/// Split one record on commas, honouring double quotes and `""` escapes.
fn split_fields(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.trim_end_matches('\r').chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes && chars.peek() == Some(&'"') => {
                current.push('"');
                chars.next();
            }
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => fields.push(std::mem::take(&mut current)),
            _ => current.push(c),
        }
    }
    fields.push(current);
    fields
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::PhoneticResources;

    fn header(width: usize) -> String {
        let mut h = String::from("Unicode,Relative Offset,Devanagari,ITRANS,Notes,Valid Vector Representation");
        for i in 0..width {
            h.push_str(&format!(",f{}", i));
        }
        h
    }

    #[test]
    fn test_split_fields() {
        assert_eq!(split_fields("a,b,c"), vec!["a", "b", "c"]);
        assert_eq!(split_fields("a,\"b,c\",d"), vec!["a", "b,c", "d"]);
        assert_eq!(split_fields("\"say \"\"hi\"\"\",x"), vec!["say \"hi\"", "x"]);
        assert_eq!(split_fields("a,,b\r"), vec!["a", "", "b"]);
    }

    #[test]
    fn test_parse_bit() {
        assert_eq!(parse_bit("1"), Some(true));
        assert_eq!(parse_bit(" 0 "), Some(false));
        assert_eq!(parse_bit("1.0"), Some(true));
        assert_eq!(parse_bit(""), Some(false));
        assert_eq!(parse_bit("x"), None);
    }

    #[test]
    fn test_parse_table() {
        let input = format!(
            "{}\n0x900,0,x,,\"notes, with comma\",0,0,0,0\n0x901,1,y,,,1,1,0,1\n\n",
            header(3)
        );
        let table = parse_phonetic_table(input.as_bytes(), "test").unwrap();
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.vector_width(), 3);
        assert!(!table.is_valid_row(0));
        assert!(table.is_valid_row(1));
        assert_eq!(table.vector(1).unwrap().to_string(), "101");
    }

    #[test]
    fn test_parse_table_multiline_notes() {
        let input = format!(
            "{}\n0x900,0,x,,\"first line\nsecond, \"\"quoted\"\"\",1,1,0\n0x901,1,y,,,0,0,0\n",
            header(2)
        );
        let table = parse_phonetic_table(input.as_bytes(), "test").unwrap();
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.vector(0).unwrap().to_string(), "10");
        assert!(!table.is_valid_row(1));
    }

    #[test]
    fn test_parse_table_unterminated_quote() {
        let input = format!("{}\n0x900,0,x,,\"open,1,1,0\n0x901,1,y,,,0,0,0\n", header(2));
        match parse_phonetic_table(input.as_bytes(), "test") {
            Err(ResourceError::Parse { line, message, .. }) => {
                assert_eq!(line, 2);
                assert!(message.contains("unterminated"));
            }
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_table_missing_valid_column() {
        let input = "a,b,c,d,e,f,g\n1,2,3,4,5,6,7\n";
        assert!(matches!(
            parse_phonetic_table(input.as_bytes(), "test"),
            Err(ResourceError::MissingColumn { .. })
        ));
    }

    #[test]
    fn test_parse_table_bad_row() {
        let input = format!("{}\n0x900,0,x,,,1,1\n", header(2));
        match parse_phonetic_table(input.as_bytes(), "test") {
            Err(ResourceError::Parse { line, .. }) => assert_eq!(line, 2),
            other => panic!("expected parse error, got {:?}", other),
        }

        let input = format!("{}\n0x900,0,x,,,1,1,q\n", header(2));
        assert!(matches!(
            parse_phonetic_table(input.as_bytes(), "test"),
            Err(ResourceError::Parse { .. })
        ));
    }

    #[test]
    fn test_parse_table_empty() {
        assert!(matches!(
            parse_phonetic_table("".as_bytes(), "test"),
            Err(ResourceError::Parse { line: 1, .. })
        ));
        let table = parse_phonetic_table(header(4).as_bytes(), "test").unwrap();
        assert_eq!(table.row_count(), 0);
        assert_eq!(table.vector_width(), 4);
    }

    #[test]
    fn test_parse_arpabet() {
        let table = parse_arpabet_list("AA\nAE\n  AH \n".as_bytes()).unwrap();
        assert_eq!(table.len(), 3);
        assert_eq!(table.id("AH"), Some(2));
        assert_eq!(table.symbol(0), Some("AA"));
    }

    #[test]
    fn test_load_missing_file() {
        let config = ResourceConfig::new("/nonexistent/indic-phonetic");
        match ResourceBundle::load(&config) {
            Err(ResourceError::Io { path, .. }) => {
                assert!(path.ends_with("script/all_script_phonetic_data.csv"))
            }
            other => panic!("expected I/O error, got {:?}", other),
        }
    }

    #[test]
    fn test_load_bundle_from_dir() {
        let dir = tempfile::tempdir().unwrap();
        let script = dir.path().join("script");
        std::fs::create_dir_all(&script).unwrap();
        let table = format!("{}\n0,0,a,,,1,1,0\n1,1,b,,,1,0,1\n", header(2));
        std::fs::write(script.join(ALL_SCRIPT_PHONETIC_DATA), &table).unwrap();
        std::fs::write(script.join(TAMIL_SCRIPT_PHONETIC_DATA), &table).unwrap();
        std::fs::write(script.join(ENGLISH_SCRIPT_PHONETIC_DATA), &table).unwrap();
        std::fs::write(script.join(ENGLISH_ARPABET_LIST), "AA\nAE\n").unwrap();

        let bundle = ResourceBundle::load(&ResourceConfig::new(dir.path())).unwrap();
        assert_eq!(bundle.vector_width(), 2);
        assert_eq!(bundle.arpabet().id("AE"), Some(1));
    }
}

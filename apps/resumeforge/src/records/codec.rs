//! Line-record codec — turns human-typed delimited lines into fixed-arity field arrays.
//!
//! # Decode rules
//! - Lines are split on `\n`, trimmed, and dropped when empty. Order is preserved.
//! - Per line: a `|` anywhere selects pipe as the delimiter, otherwise comma.
//! - Fields are trimmed and the tail is padded with `""` up to the arity.
//! - Lines with more fields than the arity keep the excess; typed mapping ignores it.
//!
//! Decoding is total: any text produces a (possibly empty) list of records.
//!
//! # Encode rules
//! Fields in canonical order, trimmed, joined with `" | "`; records joined with `\n`.
//! Encoding always emits pipes, so `decode(encode(decode(t)))` equals `decode(t)`.

use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::records::kinds::LineRecord;

pub const PIPE: char = '|';
pub const COMMA: char = ',';
pub const FIELD_SEPARATOR: &str = " | ";

/// Number of fields a record kind always carries after decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub enum Arity {
    /// Experience and education.
    Five,
    /// Projects.
    Seven,
}

impl Arity {
    pub fn get(self) -> usize {
        match self {
            Arity::Five => 5,
            Arity::Seven => 7,
        }
    }
}

impl TryFrom<usize> for Arity {
    type Error = AppError;

    fn try_from(n: usize) -> Result<Self, Self::Error> {
        match n {
            5 => Ok(Arity::Five),
            7 => Ok(Arity::Seven),
            other => Err(AppError::InvalidArity(other)),
        }
    }
}

impl From<Arity> for usize {
    fn from(a: Arity) -> usize {
        a.get()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Decode
// ────────────────────────────────────────────────────────────────────────────

/// Splits multi-line text into trimmed, non-empty lines.
///
/// Also used directly for one-item-per-line fields such as skills.
pub fn split_lines(text: &str) -> Vec<String> {
    text.split('\n')
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(str::to_string)
        .collect()
}

/// Splits a single line into trimmed fields, padded to `arity`. Never truncates.
pub fn split_fields(line: &str, arity: usize) -> Vec<String> {
    let delimiter = if line.contains(PIPE) { PIPE } else { COMMA };
    let mut fields: Vec<String> = line
        .split(delimiter)
        .map(|f| f.trim().to_string())
        .collect();

    if fields.len() < arity {
        fields.resize(arity, String::new());
    }
    fields
}

/// Decodes text into raw field arrays, one per non-empty line.
///
/// Every array has at least `arity` entries; excess fields beyond the arity are kept.
pub fn decode_lines(text: &str, arity: Arity) -> Vec<Vec<String>> {
    split_lines(text)
        .iter()
        .map(|line| split_fields(line, arity.get()))
        .collect()
}

/// Decodes text into typed records of kind `R`.
pub fn decode_records<R: LineRecord>(text: &str) -> Vec<R> {
    decode_lines(text, R::KIND.arity())
        .into_iter()
        .map(R::from_fields)
        .collect()
}

// ────────────────────────────────────────────────────────────────────────────
// Encode
// ────────────────────────────────────────────────────────────────────────────

/// Joins one record's fields into a single pipe-delimited line.
pub fn encode_fields<S: AsRef<str>>(fields: &[S]) -> String {
    fields
        .iter()
        .map(|f| f.as_ref().trim())
        .collect::<Vec<_>>()
        .join(FIELD_SEPARATOR)
}

/// Encodes raw field arrays back into text, one line per record.
pub fn encode_lines<S: AsRef<str>>(rows: &[Vec<S>]) -> String {
    rows.iter()
        .map(|row| encode_fields(row))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Encodes typed records into text in canonical field order.
pub fn encode_records<R: LineRecord>(records: &[R]) -> String {
    records
        .iter()
        .map(|r| encode_fields(&r.fields()))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Inverse of [`split_lines`] for list fields.
pub fn join_lines<S: AsRef<str>>(items: &[S]) -> String {
    items
        .iter()
        .map(|s| s.as_ref().trim())
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::kinds::{Education, Experience, Project};

    #[test]
    fn test_split_lines_drops_blank_and_trims() {
        let lines = split_lines("  Rust \n\n   \nSQL\r\n Go");
        assert_eq!(lines, vec!["Rust", "SQL", "Go"]);
    }

    #[test]
    fn test_comma_line_splits_on_comma() {
        let fields = split_fields("A, B, C", 5);
        assert_eq!(fields, vec!["A", "B", "C", "", ""]);
    }

    #[test]
    fn test_pipe_wins_over_comma_on_same_line() {
        let fields = split_fields("A | B, C", 2);
        assert_eq!(fields, vec!["A", "B, C"]);
        let padded = split_fields("A | B, C", 5);
        assert_eq!(padded, vec!["A", "B, C", "", "", ""]);
    }

    #[test]
    fn test_delimiter_chosen_per_line_not_per_document() {
        let rows = decode_lines("a | b\nc, d", Arity::Five);
        assert_eq!(rows[0][..2], ["a", "b"]);
        assert_eq!(rows[1][..2], ["c", "d"]);
    }

    #[test]
    fn test_excess_fields_are_not_truncated() {
        let rows = decode_lines("1|2|3|4|5|6", Arity::Five);
        assert_eq!(rows[0].len(), 6, "raw decode keeps excess fields");
    }

    #[test]
    fn test_every_record_has_at_least_arity_fields() {
        let text = "x\n|\n,,,\n  lone  \n a|b|c|d|e|f|g";
        for arity in [Arity::Five, Arity::Seven] {
            for row in decode_lines(text, arity) {
                assert!(row.len() >= arity.get(), "row {row:?} shorter than {arity:?}");
            }
        }
    }

    #[test]
    fn test_empty_text_decodes_to_empty_list() {
        assert!(decode_lines("", Arity::Five).is_empty());
        assert!(decode_lines("\n \n\t\n", Arity::Seven).is_empty());
    }

    #[test]
    fn test_end_to_end_experience_scenario() {
        let text = "Engineer | Acme | 2020 | 2023 | Built things\nIntern | Acme";
        let records: Vec<Experience> = decode_records(text);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].description, "Built things");
        assert_eq!(
            records[1],
            Experience {
                job_title: "Intern".into(),
                company: "Acme".into(),
                start_date: String::new(),
                end_date: String::new(),
                description: String::new(),
            }
        );
    }

    #[test]
    fn test_encode_joins_with_spaced_pipe() {
        let records = vec![Education {
            degree: " BSc ".into(),
            institution: "MIT".into(),
            start_date: "2016".into(),
            end_date: "2020".into(),
            description: String::new(),
        }];
        assert_eq!(encode_records(&records), "BSc | MIT | 2016 | 2020 | ");
    }

    #[test]
    fn test_round_trip_is_stable_after_first_decode() {
        let text = "Engineer, Acme, 2020\n\n  Lead | Initech | 2021 | | Ran team, hired 4  \n|";
        let first: Vec<Experience> = decode_records(text);
        let second: Vec<Experience> = decode_records(&encode_records(&first));
        assert_eq!(first, second);
    }

    #[test]
    fn test_project_round_trip_keeps_commas_in_pipe_fields() {
        let text = "Site | Author | Rust, Wasm | 2022 | 2023 | Fast, small | https://x.dev";
        let first: Vec<Project> = decode_records(text);
        assert_eq!(first[0].technologies, "Rust, Wasm");
        let second: Vec<Project> = decode_records(&encode_records(&first));
        assert_eq!(first, second);
    }

    #[test]
    fn test_raw_lines_round_trip_for_both_arities() {
        let inputs = [
            "a | b | c | d | e | f | g | h",
            "|\n,,,\n  \n",
            "Dev, Acme, 2020\r\nLead | Initech\r\n",
            "Site, Rust | Wasm, 2022\nx,y,z,1,2,3,4,5,6",
        ];
        for arity in [Arity::Five, Arity::Seven] {
            for text in inputs {
                let first = decode_lines(text, arity);
                let second = decode_lines(&encode_lines(&first), arity);
                assert_eq!(first, second, "arity {} input {text:?}", arity.get());
            }
        }
    }

    #[test]
    fn test_encode_lines_keeps_excess_fields() {
        let rows = decode_lines("a|b|c|d|e|f", Arity::Five);
        assert_eq!(rows[0].len(), 6);
        assert_eq!(encode_lines(&rows), "a | b | c | d | e | f");
    }

    #[test]
    fn test_arity_try_from_rejects_other_sizes() {
        assert_eq!(Arity::try_from(5).unwrap(), Arity::Five);
        assert_eq!(Arity::try_from(7).unwrap(), Arity::Seven);
        assert!(matches!(Arity::try_from(6), Err(AppError::InvalidArity(6))));
    }

    #[test]
    fn test_join_lines_inverts_split_lines() {
        let skills = vec!["Rust".to_string(), " ".to_string(), "SQL".to_string()];
        let text = join_lines(&skills);
        assert_eq!(text, "Rust\nSQL");
        assert_eq!(split_lines(&text), vec!["Rust", "SQL"]);
    }
}

use crate::core::models::occupancy::{OccupancyRecord, Occupation};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Clone)]
pub enum OccupancyError {
    #[error("One or more orbital occupancies had an invalid input format:\n{}", .0.join("\n"))]
    MalformedLines(Vec<String>),
    #[error("One or more orbital indices are negative:\n{}", join_indices(.0))]
    NegativeIndices(Vec<i64>),
}

fn join_indices(indices: &[i64]) -> String {
    indices
        .iter()
        .map(i64::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

enum LineOutcome {
    Record(OccupancyRecord),
    NegativeIndex(i64),
    Malformed,
}

/// Parses the orbital occupation block.
///
/// Each non-blank line holds an orbital index followed by one (restricted) or two
/// (unrestricted) occupation numbers. Every malformed line is collected before
/// failing, so the error lists all of them at once. A negative index is itself a
/// format error; it is reported as such whenever another line is malformed too,
/// and on its own as [`OccupancyError::NegativeIndices`].
pub fn parse_occupancies(text: &str) -> Result<Vec<OccupancyRecord>, OccupancyError> {
    let mut records = Vec::new();
    let mut rejected = Vec::new();
    let mut negative = Vec::new();
    let mut any_malformed = false;

    for line in text.lines().map(str::trim).filter(|line| !line.is_empty()) {
        match parse_line(line) {
            LineOutcome::Record(record) => records.push(record),
            LineOutcome::NegativeIndex(index) => {
                negative.push(index);
                rejected.push(line.to_string());
            }
            LineOutcome::Malformed => {
                any_malformed = true;
                rejected.push(line.to_string());
            }
        }
    }

    if any_malformed {
        return Err(OccupancyError::MalformedLines(rejected));
    }
    if !negative.is_empty() {
        return Err(OccupancyError::NegativeIndices(negative));
    }
    Ok(records)
}

fn parse_line(line: &str) -> LineOutcome {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let (index, values) = match tokens.split_first() {
        Some((index, values)) if (1..=2).contains(&values.len()) => (*index, values),
        _ => return LineOutcome::Malformed,
    };

    let mut occupancy = [0.0; 2];
    for (slot, token) in occupancy.iter_mut().zip(values) {
        match is_decimal(token).then(|| token.parse::<f64>()) {
            Some(Ok(value)) => *slot = value,
            _ => return LineOutcome::Malformed,
        }
    }
    let occupancy = if values.len() == 1 {
        Occupation::Restricted([occupancy[0]])
    } else {
        Occupation::Unrestricted(occupancy)
    };

    if let Some(digits) = index.strip_prefix('-') {
        return match digits.parse::<i64>() {
            Ok(magnitude) if is_digits(digits) => LineOutcome::NegativeIndex(-magnitude),
            _ => LineOutcome::Malformed,
        };
    }
    match index.parse::<usize>() {
        Ok(orbital) if is_digits(index) => LineOutcome::Record(OccupancyRecord { orbital, occupancy }),
        _ => LineOutcome::Malformed,
    }
}

fn is_digits(token: &str) -> bool {
    !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit())
}

/// Matches `[+-]?(digits[.digits*] | .digits)`.
fn is_decimal(token: &str) -> bool {
    let unsigned = token.strip_prefix(['+', '-']).unwrap_or(token);
    match unsigned.split_once('.') {
        None => is_digits(unsigned),
        Some(("", fraction)) => is_digits(fraction),
        Some((whole, fraction)) => {
            is_digits(whole) && fraction.bytes().all(|b| b.is_ascii_digit())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn restricted_and_unrestricted_lines_keep_input_order() {
        let records = parse_occupancies("1 2.0\n2 1.0 0.0").unwrap();
        assert_eq!(
            records,
            vec![
                OccupancyRecord {
                    orbital: 1,
                    occupancy: Occupation::Restricted([2.0]),
                },
                OccupancyRecord {
                    orbital: 2,
                    occupancy: Occupation::Unrestricted([1.0, 0.0]),
                },
            ]
        );
    }

    #[test]
    fn blank_lines_and_surrounding_whitespace_are_ignored() {
        let records = parse_occupancies("\n   0   .5  \n\t\n 3 +1. -0.25\n").unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].occupancy, Occupation::Restricted([0.5]));
        assert_eq!(records[1].orbital, 3);
        assert_eq!(records[1].occupancy, Occupation::Unrestricted([1.0, -0.25]));
    }

    #[test]
    fn empty_text_yields_no_records() {
        assert_eq!(parse_occupancies(""), Ok(vec![]));
        assert_eq!(parse_occupancies("  \n \n"), Ok(vec![]));
    }

    #[test]
    fn every_malformed_line_is_reported() {
        let result = parse_occupancies("1 2.0\n2 one\n3\n4 1.0 1.0 1.0\n5 1e3\nx 1.0");
        assert_eq!(
            result,
            Err(OccupancyError::MalformedLines(vec![
                "2 one".to_string(),
                "3".to_string(),
                "4 1.0 1.0 1.0".to_string(),
                "5 1e3".to_string(),
                "x 1.0".to_string(),
            ]))
        );
    }

    #[test]
    fn single_malformed_line_fails_whole_block() {
        let err = parse_occupancies("1 2.0\n2 1.0 abc").unwrap_err();
        assert_eq!(
            err.to_string(),
            "One or more orbital occupancies had an invalid input format:\n2 1.0 abc"
        );
    }

    #[test]
    fn negative_indices_are_rejected_after_format_check() {
        assert_eq!(
            parse_occupancies("-1 2.0\n0 1.0\n-3 1.0 0.0"),
            Err(OccupancyError::NegativeIndices(vec![-1, -3]))
        );
    }

    #[test]
    fn negative_index_lines_join_the_malformed_batch_in_input_order() {
        assert_eq!(
            parse_occupancies("-1 2.0\n0 bad"),
            Err(OccupancyError::MalformedLines(vec![
                "-1 2.0".to_string(),
                "0 bad".to_string(),
            ]))
        );
        assert_eq!(
            parse_occupancies("0 x\n1 2.0\n-2 1.0 1.0\n3 1e3"),
            Err(OccupancyError::MalformedLines(vec![
                "0 x".to_string(),
                "-2 1.0 1.0".to_string(),
                "3 1e3".to_string(),
            ]))
        );
    }

    #[test]
    fn decimal_grammar_accepts_only_plain_decimals() {
        for token in ["2", "2.", "2.50", ".5", "+.5", "-0.0"] {
            assert!(is_decimal(token), "{}", token);
        }
        for token in ["", ".", "+", "1e3", "inf", "NaN", "1.2.3", "--1", "0x1"] {
            assert!(!is_decimal(token), "{}", token);
        }
    }
}

//! Move costs between named locations.

use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::scan::Scanner;

/// Cost of a move when no weights file is configured.
pub const DEFAULT_COST: u64 = 1;

/// Cost of the containment edge between a location and whatever it holds.
pub const CONTAINMENT_COST: u64 = 0;

/// Configured move costs.
///
/// `Uniform` means no weights file was supplied at all; every move then
/// costs [`DEFAULT_COST`]. `Table` holds explicit per-move costs, and a
/// missing entry is a configuration error rather than a silent default.
/// An empty `Table` is therefore not the same thing as `Uniform`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Weights {
    #[default]
    Uniform,
    Table(HashMap<String, HashMap<String, u64>>),
}

impl Weights {
    /// Parse weights lines of the form `source -> destination = weight`.
    ///
    /// Blank lines are skipped. Later lines overwrite earlier entries for
    /// the same move.
    pub fn parse<I, S>(lines: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut table: HashMap<String, HashMap<String, u64>> = HashMap::new();
        for line in lines {
            let line = line.as_ref();
            if line.trim().is_empty() {
                continue;
            }
            let (source, destination, cost) = parse_weight_line(line)?;
            table
                .entry(source.to_string())
                .or_default()
                .insert(destination.to_string(), cost);
        }
        Ok(Weights::Table(table))
    }

    /// Cost of moving from `source` to `destination`.
    pub fn cost(&self, source: &str, destination: &str) -> Result<u64> {
        match self {
            Weights::Uniform => Ok(DEFAULT_COST),
            Weights::Table(table) => table
                .get(source)
                .and_then(|targets| targets.get(destination))
                .copied()
                .ok_or_else(|| Error::MissingWeight {
                    source: source.to_string(),
                    destination: destination.to_string(),
                }),
        }
    }
}

/// Parse one `source -> destination = weight` line. The whole line must
/// match; trailing text after the weight is rejected.
fn parse_weight_line(line: &str) -> Result<(&str, &str, u64)> {
    let malformed = || Error::MalformedWeightLine {
        line: line.trim().to_string(),
    };

    let mut scanner = Scanner::new(line);
    scanner.skip_whitespace();
    let source = scanner.word().ok_or_else(malformed)?;
    scanner.skip_whitespace();
    if !scanner.literal("->") {
        return Err(malformed());
    }
    scanner.skip_whitespace();
    let destination = scanner.word().ok_or_else(malformed)?;
    scanner.skip_whitespace();
    if !scanner.literal("=") {
        return Err(malformed());
    }
    scanner.skip_whitespace();
    let digits = scanner.digits().ok_or_else(malformed)?;
    scanner.skip_whitespace();
    if !scanner.at_end() {
        return Err(malformed());
    }
    let cost = digits.parse().map_err(|_| malformed())?;
    Ok((source, destination, cost))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_around_separators_is_free() {
        for line in ["A->B=3", "  A  ->  B  =  3  ", "A -> B= 3"] {
            let weights = Weights::parse([line]).expect("line parses");
            assert_eq!(weights.cost("A", "B").expect("entry present"), 3);
        }
    }

    #[test]
    fn trailing_text_is_rejected() {
        let error = Weights::parse(["A -> B = 3 oops"]).expect_err("trailing text");
        assert!(matches!(
            error,
            Error::MalformedWeightLine { line } if line == "A -> B = 3 oops"
        ));
    }

    #[test]
    fn missing_arrow_is_rejected() {
        let error = Weights::parse(["A B = 3"]).expect_err("no arrow");
        assert!(matches!(error, Error::MalformedWeightLine { .. }));
    }

    #[test]
    fn negative_weights_are_rejected() {
        let error = Weights::parse(["A -> B = -3"]).expect_err("negative weight");
        assert!(matches!(error, Error::MalformedWeightLine { .. }));
    }
}

//! Region string parser
//!
//! Turns human-readable region strings such as `chr1:100-200` into a
//! structured [`ChromRange`]. The parser is purely syntactic: it does not
//! consult an assembly, so the chromosome key and the coordinates are not
//! checked against any length table.

use crate::core::{RegionParseError, RegionResult};
use regex::Regex;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

/// A parsed chromosome range
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ChromRange {
    pub chrom: String,
    pub start: u64,
    pub end: u64,
}

impl fmt::Display for ChromRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}-{}", self.chrom, self.start, self.end)
    }
}

impl FromStr for ChromRange {
    type Err = RegionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_chrom_range(s)
    }
}

/// Supported region string layouts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RangeFormat {
    /// UCSC browser style: `chrom:start-end`
    #[default]
    Ucsc,
}

impl FromStr for RangeFormat {
    type Err = RegionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ucsc" => Ok(RangeFormat::Ucsc),
            _ => Err(RegionParseError::UnsupportedFormat(s.to_string())),
        }
    }
}

fn ucsc_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        // ASCII classes only: `\w`/`\d` are Unicode-aware in `regex`
        Regex::new(r"^([A-Za-z0-9_]+):([0-9]+)-([0-9]+)$").expect("UCSC range pattern is valid")
    })
}

fn parse_position(input: &str, value: &str) -> RegionResult<u64> {
    value.parse().map_err(|_| RegionParseError::InvalidPosition {
        input: input.to_string(),
        value: value.to_string(),
    })
}

/// Parse a UCSC-style region string
///
/// Surrounding whitespace is ignored. `start` and `end` are taken as
/// written; `start > end` is not rejected.
///
/// # Examples
/// ```
/// use linear_genome::formats::region::{parse_chrom_range, ChromRange};
///
/// let range = parse_chrom_range("chr1:100-200").unwrap();
/// assert_eq!(range, ChromRange { chrom: "chr1".to_string(), start: 100, end: 200 });
/// assert!(parse_chrom_range("chr1-100-200").is_err());
/// ```
pub fn parse_chrom_range(range: &str) -> RegionResult<ChromRange> {
    parse_chrom_range_with(range, RangeFormat::Ucsc)
}

/// Parse a region string in the given format
pub fn parse_chrom_range_with(range: &str, format: RangeFormat) -> RegionResult<ChromRange> {
    let trimmed = range.trim();

    match format {
        RangeFormat::Ucsc => {
            let caps = ucsc_pattern()
                .captures(trimmed)
                .ok_or_else(|| RegionParseError::InvalidFormat(trimmed.to_string()))?;

            Ok(ChromRange {
                chrom: caps[1].to_string(),
                start: parse_position(trimmed, &caps[2])?,
                end: parse_position(trimmed, &caps[3])?,
            })
        }
    }
}

//! Text format adapters
//!
//! Parsers for human-readable genomic text (region strings).

pub mod region;

pub use region::{parse_chrom_range, parse_chrom_range_with, ChromRange, RangeFormat};

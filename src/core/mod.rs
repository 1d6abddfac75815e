//! Core coordinate mapping functionality
//!
//! This module contains the static assembly tables, the cumulative
//! interval index, and the relative/absolute conversion algorithms.

mod assembly;
mod convention;
mod converter;
mod error;
mod index;
mod table;

pub use assembly::{Assembly, CHROM_PREFIX};
pub use convention::Convention;
pub use converter::{CoordinateConverter, RelativePosition};
pub use error::{
    GenomeError, RegionParseError, RegionResult, Result, TickError, TickResult,
};
pub use index::{ChromEntry, ChromInterval, IntervalIndex};
pub use table::{AssemblyId, AssemblyTable};

//! Genome assembly instance
//!
//! Ties a length table, its interval index and a numbering convention
//! together. An `Assembly` is built once and is read-only afterwards, so a
//! single instance can be shared across threads (`&Assembly` or `Arc`).

use crate::core::convention::Convention;
use crate::core::converter::{CoordinateConverter, RelativePosition};
use crate::core::error::Result;
use crate::core::index::{ChromInterval, IntervalIndex};
use crate::core::table::{AssemblyId, AssemblyTable};
use log::debug;

/// Prefix carried by every chromosome key of the built-in assemblies
pub const CHROM_PREFIX: &str = "chr";

/// A genome assembly laid out on one linear axis
#[derive(Debug, Clone)]
pub struct Assembly {
    name: String,
    index: IntervalIndex,
    convention: Convention,
}

impl Assembly {
    /// Build a built-in assembly by name with the default convention
    ///
    /// # Example
    /// ```
    /// use linear_genome::Assembly;
    ///
    /// let hg38 = Assembly::new("GRCh38")?;
    /// assert_eq!(hg38.total_length(), 3_088_269_832);
    /// assert!(Assembly::new("hg19").is_err());
    /// # Ok::<(), linear_genome::GenomeError>(())
    /// ```
    pub fn new(assembly: &str) -> Result<Self> {
        Self::with_convention(assembly, Convention::default())
    }

    /// Build a built-in assembly by name with an explicit convention
    pub fn with_convention(assembly: &str, convention: Convention) -> Result<Self> {
        let id: AssemblyId = assembly.parse()?;
        Self::from_table(&id.table(), convention)
    }

    pub fn from_id(id: AssemblyId) -> Result<Self> {
        Self::from_table(&id.table(), Convention::default())
    }

    /// Build from an arbitrary length table
    pub fn from_table(table: &AssemblyTable, convention: Convention) -> Result<Self> {
        let index = IntervalIndex::from_table(table)?;
        debug!(
            "Built assembly {}: {} chromosomes, {} bp (origin {})",
            table.name,
            index.len(),
            index.total_length(),
            convention.origin()
        );

        Ok(Self {
            name: table.name.clone(),
            index,
            convention,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn convention(&self) -> Convention {
        self.convention
    }

    pub fn index(&self) -> &IntervalIndex {
        &self.index
    }

    /// Converter bound to this assembly's index and convention
    pub fn converter(&self) -> CoordinateConverter<'_> {
        CoordinateConverter::new(&self.index, self.convention)
    }

    /// Half-open offset interval of a chromosome
    ///
    /// chr1 of GRCh38 is `[0, 248956422)`: under the 1-based convention its
    /// first base is absolute position 1 and its last is 248956422.
    pub fn chrom_interval(&self, chrom: &str) -> Option<ChromInterval> {
        self.index.interval(chrom)
    }

    pub fn chrom_intervals(&self) -> impl Iterator<Item = (&str, ChromInterval)> {
        self.index.intervals()
    }

    pub fn total_length(&self) -> u64 {
        self.index.total_length()
    }

    pub fn chrom_keys(&self) -> impl Iterator<Item = &str> {
        self.index.chrom_keys()
    }

    pub fn chrom_length(&self, chrom: &str) -> Option<u64> {
        self.index.length(chrom)
    }

    pub fn chrom_lengths(&self) -> impl Iterator<Item = (&str, u64)> {
        self.index.lengths()
    }

    pub fn chrom_index(&self, chrom: &str) -> Option<usize> {
        self.index.chrom_index(chrom)
    }

    /// First and last valid absolute positions
    pub fn domain(&self) -> (u64, u64) {
        let bounds = self.convention.absolute_bounds(self.total_length());
        (*bounds.start(), *bounds.end())
    }

    /// Add the `chr` prefix to a bare chromosome name
    ///
    /// # Examples
    /// ```
    /// use linear_genome::Assembly;
    /// assert_eq!(Assembly::prefix_chrom_key("1"), "chr1");
    /// assert_eq!(Assembly::prefix_chrom_key("X"), "chrX");
    /// assert_eq!(Assembly::prefix_chrom_key("chrY"), "chrY");
    /// ```
    pub fn prefix_chrom_key(chrom: &str) -> String {
        if chrom.starts_with(CHROM_PREFIX) {
            chrom.to_string()
        } else {
            format!("{}{}", CHROM_PREFIX, chrom)
        }
    }

    /// See [`CoordinateConverter::relative_to_absolute`]
    pub fn relative_to_absolute(&self, chrom: &str, pos: u64) -> Result<u64> {
        self.converter().relative_to_absolute(chrom, pos)
    }

    /// See [`CoordinateConverter::absolute_to_relative`]
    pub fn absolute_to_relative(&self, pos: u64) -> Result<RelativePosition<'_>> {
        self.converter().absolute_to_relative(pos)
    }

    /// See [`CoordinateConverter::absolute_to_relative_batch`]
    pub fn absolute_to_relative_batch(&self, positions: &[u64]) -> Vec<Result<RelativePosition<'_>>> {
        self.converter().absolute_to_relative_batch(positions)
    }
}

//! Cumulative chromosome interval index
//!
//! Lays the chromosomes of an assembly end to end in canonical order. Each
//! chromosome gets a half-open interval `[start, end)` on a shared offset
//! axis starting at 0, built by a running prefix sum, so consecutive
//! intervals touch (`end(k_i) == start(k_i+1)`) and never overlap.

use crate::core::error::{GenomeError, Result};
use crate::core::table::AssemblyTable;
use std::cmp::Ordering;
use std::collections::HashMap;

/// Half-open interval of one chromosome on the offset axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChromInterval {
    pub start: u64,
    pub end: u64,
}

impl ChromInterval {
    pub fn new(start: u64, end: u64) -> Self {
        Self { start, end }
    }

    /// Number of bases covered
    pub fn len(&self) -> u64 {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Where `offset` lies relative to this interval
    ///
    /// `Less` when before `start`, `Greater` when at or past `end`,
    /// `Equal` when inside. This is the only containment test in the crate;
    /// the binary search and the bounds checks both use it.
    ///
    /// # Examples
    /// ```
    /// use linear_genome::core::ChromInterval;
    /// use std::cmp::Ordering;
    /// let iv = ChromInterval::new(10, 20);
    /// assert_eq!(iv.locate(9), Ordering::Less);
    /// assert_eq!(iv.locate(10), Ordering::Equal);
    /// assert_eq!(iv.locate(19), Ordering::Equal);
    /// assert_eq!(iv.locate(20), Ordering::Greater);
    /// ```
    #[inline]
    pub fn locate(&self, offset: u64) -> Ordering {
        if offset < self.start {
            Ordering::Less
        } else if offset >= self.end {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }

    #[inline]
    pub fn contains(&self, offset: u64) -> bool {
        self.locate(offset) == Ordering::Equal
    }
}

/// One chromosome of the index
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChromEntry {
    pub name: String,
    pub length: u64,
    pub interval: ChromInterval,
}

/// Interval table for one assembly
///
/// Built once from an [`AssemblyTable`] and immutable afterwards. All
/// lookups by key are O(1).
#[derive(Debug, Clone)]
pub struct IntervalIndex {
    /// Entries in canonical order
    entries: Vec<ChromEntry>,
    /// Chromosome key -> position in `entries`
    positions: HashMap<String, usize>,
    /// Sum of all lengths (end of the last interval)
    total_length: u64,
}

impl IntervalIndex {
    /// Build the index by prefix sum over the table's canonical order
    ///
    /// Fails on an empty table, a zero length, a duplicated key, or a total
    /// that does not fit in `u64`.
    pub fn from_table(table: &AssemblyTable) -> Result<Self> {
        let invalid = |message: String| GenomeError::InvalidTable {
            assembly: table.name.clone(),
            message,
        };

        if table.chroms.is_empty() {
            return Err(invalid("no chromosomes".to_string()));
        }

        let mut entries = Vec::with_capacity(table.chroms.len());
        let mut positions = HashMap::with_capacity(table.chroms.len());
        let mut cursor = 0u64;

        for (i, (chrom, length)) in table.chroms.iter().enumerate() {
            if *length == 0 {
                return Err(invalid(format!("chromosome {} has zero length", chrom)));
            }
            if positions.insert(chrom.clone(), i).is_some() {
                return Err(invalid(format!("chromosome {} listed twice", chrom)));
            }

            let end = cursor
                .checked_add(*length)
                .ok_or_else(|| invalid("total length overflows u64".to_string()))?;

            entries.push(ChromEntry {
                name: chrom.clone(),
                length: *length,
                interval: ChromInterval::new(cursor, end),
            });
            cursor = end;
        }

        Ok(Self {
            entries,
            positions,
            total_length: cursor,
        })
    }

    /// Interval of a chromosome
    pub fn interval(&self, chrom: &str) -> Option<ChromInterval> {
        self.entry(chrom).map(|e| e.interval)
    }

    /// All intervals in canonical order
    pub fn intervals(&self) -> impl Iterator<Item = (&str, ChromInterval)> {
        self.entries.iter().map(|e| (e.name.as_str(), e.interval))
    }

    /// Length of a chromosome
    pub fn length(&self, chrom: &str) -> Option<u64> {
        self.entry(chrom).map(|e| e.length)
    }

    /// All lengths in canonical order
    pub fn lengths(&self) -> impl Iterator<Item = (&str, u64)> {
        self.entries.iter().map(|e| (e.name.as_str(), e.length))
    }

    /// Chromosome keys in canonical order
    pub fn chrom_keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.name.as_str())
    }

    /// Position of a chromosome in canonical order
    pub fn chrom_index(&self, chrom: &str) -> Option<usize> {
        self.positions.get(chrom).copied()
    }

    pub fn total_length(&self) -> u64 {
        self.total_length
    }

    /// Entry by canonical position
    pub fn get(&self, i: usize) -> Option<&ChromEntry> {
        self.entries.get(i)
    }

    pub fn entries(&self) -> &[ChromEntry] {
        &self.entries
    }

    pub fn entry(&self, chrom: &str) -> Option<&ChromEntry> {
        self.chrom_index(chrom).map(|i| &self.entries[i])
    }

    /// Number of chromosomes
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_index() -> IntervalIndex {
        let table = AssemblyTable::new(
            "toy",
            vec![
                ("chrA".to_string(), 100),
                ("chrB".to_string(), 50),
                ("chrC".to_string(), 1),
            ],
        );
        IntervalIndex::from_table(&table).unwrap()
    }

    #[test]
    fn test_index_creation() {
        let index = create_test_index();

        assert_eq!(index.len(), 3);
        assert_eq!(index.total_length(), 151);
        assert_eq!(index.interval("chrA"), Some(ChromInterval::new(0, 100)));
        assert_eq!(index.interval("chrB"), Some(ChromInterval::new(100, 150)));
        assert_eq!(index.interval("chrC"), Some(ChromInterval::new(150, 151)));
    }

    #[test]
    fn test_unknown_chrom() {
        let index = create_test_index();

        assert_eq!(index.interval("chrD"), None);
        assert_eq!(index.length("chrD"), None);
        assert_eq!(index.chrom_index("chrD"), None);
    }

    #[test]
    fn test_canonical_order() {
        let index = create_test_index();

        let keys: Vec<&str> = index.chrom_keys().collect();
        assert_eq!(keys, vec!["chrA", "chrB", "chrC"]);

        for (i, key) in keys.iter().enumerate() {
            assert_eq!(index.chrom_index(key), Some(i));
            assert_eq!(index.get(i).map(|e| e.name.as_str()), Some(*key));
        }
    }

    #[test]
    fn test_lengths_match_intervals() {
        let index = create_test_index();

        for ((chrom, len), (_, iv)) in index.lengths().zip(index.intervals()) {
            assert_eq!(iv.len(), len, "length mismatch for {}", chrom);
        }
    }

    #[test]
    fn test_empty_table_rejected() {
        let table = AssemblyTable::new("empty", vec![]);
        assert!(matches!(
            IntervalIndex::from_table(&table),
            Err(GenomeError::InvalidTable { .. })
        ));
    }

    #[test]
    fn test_zero_length_rejected() {
        let table = AssemblyTable::new("bad", vec![("chr1".to_string(), 10), ("chr2".to_string(), 0)]);
        let err = IntervalIndex::from_table(&table).unwrap_err();
        assert!(err.to_string().contains("chr2"));
    }

    #[test]
    fn test_duplicate_key_rejected() {
        let table = AssemblyTable::new("dup", vec![("chr1".to_string(), 10), ("chr1".to_string(), 5)]);
        assert!(IntervalIndex::from_table(&table).is_err());
    }

    #[test]
    fn test_overflow_rejected() {
        let table = AssemblyTable::new(
            "huge",
            vec![("chr1".to_string(), u64::MAX), ("chr2".to_string(), 1)],
        );
        assert!(IntervalIndex::from_table(&table).is_err());
    }

    #[test]
    fn test_locate() {
        let iv = ChromInterval::new(100, 150);

        assert_eq!(iv.locate(0), Ordering::Less);
        assert_eq!(iv.locate(99), Ordering::Less);
        assert_eq!(iv.locate(100), Ordering::Equal);
        assert_eq!(iv.locate(149), Ordering::Equal);
        assert_eq!(iv.locate(150), Ordering::Greater);
        assert!(iv.contains(120));
        assert!(!iv.contains(150));
    }
}

#[cfg(test)]
mod integration_tests {
    use super::*;

    #[test]
    fn test_grch38_intervals() {
        let index = IntervalIndex::from_table(&AssemblyTable::grch38()).unwrap();

        assert_eq!(index.total_length(), 3_088_269_832);
        assert_eq!(index.interval("chr1"), Some(ChromInterval::new(0, 248_956_422)));
        assert_eq!(
            index.interval("chr2"),
            Some(ChromInterval::new(248_956_422, 491_149_951))
        );
        assert_eq!(
            index.interval("chrX"),
            Some(ChromInterval::new(2_875_001_522, 3_031_042_417))
        );
        assert_eq!(
            index.interval("chrY"),
            Some(ChromInterval::new(3_031_042_417, 3_088_269_832))
        );
    }
}

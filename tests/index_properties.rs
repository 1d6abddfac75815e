//! Property-based tests for IntervalIndex construction
//!
//! Partition property: intervals are contiguous, ordered and cover the
//! whole offset axis exactly once.

use linear_genome::core::{AssemblyTable, ChromInterval, GenomeError, IntervalIndex};
use proptest::prelude::*;

/// Generate a table of 1-30 chromosomes with positive lengths
fn arb_table() -> impl Strategy<Value = AssemblyTable> {
    prop::collection::vec(1u64..1_000_000_000, 1..30).prop_map(|lengths| {
        let chroms = lengths
            .into_iter()
            .enumerate()
            .map(|(i, len)| (format!("chr{}", i + 1), len))
            .collect();
        AssemblyTable::new("random", chroms)
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Consecutive intervals touch; first starts at 0; last ends at total
    #[test]
    fn prop_intervals_partition_axis(table in arb_table()) {
        let index = IntervalIndex::from_table(&table).unwrap();
        let intervals: Vec<ChromInterval> = index.intervals().map(|(_, iv)| iv).collect();

        prop_assert_eq!(intervals[0].start, 0);
        prop_assert_eq!(intervals[intervals.len() - 1].end, index.total_length());

        for pair in intervals.windows(2) {
            prop_assert_eq!(pair[0].end, pair[1].start);
            prop_assert!(pair[0].start < pair[0].end);
        }
    }

    /// Interval lengths equal the table lengths, in table order
    #[test]
    fn prop_intervals_match_lengths(table in arb_table()) {
        let index = IntervalIndex::from_table(&table).unwrap();

        let keys: Vec<&str> = index.chrom_keys().collect();
        let expected: Vec<&str> = table.chrom_keys().collect();
        prop_assert_eq!(keys, expected);

        for (chrom, len) in &table.chroms {
            prop_assert_eq!(index.length(chrom), Some(*len));
            prop_assert_eq!(index.interval(chrom).map(|iv| iv.len()), Some(*len));
        }

        let total: u64 = table.chroms.iter().map(|(_, len)| len).sum();
        prop_assert_eq!(index.total_length(), total);
    }

    /// Every offset on the axis belongs to exactly one chromosome
    #[test]
    fn prop_offsets_covered_once(table in arb_table(), frac in 0.0f64..1.0) {
        let index = IntervalIndex::from_table(&table).unwrap();
        let offset = ((index.total_length() as f64 * frac) as u64).min(index.total_length() - 1);

        let hits = index.intervals().filter(|(_, iv)| iv.contains(offset)).count();
        prop_assert_eq!(hits, 1);
    }

    /// Any zero length rejects the whole table
    #[test]
    fn prop_zero_length_rejected(table in arb_table(), slot in any::<prop::sample::Index>()) {
        let mut table = table;
        let i = slot.index(table.chroms.len());
        table.chroms[i].1 = 0;

        let is_invalid = matches!(
            IntervalIndex::from_table(&table),
            Err(GenomeError::InvalidTable { .. })
        );
        prop_assert!(is_invalid);
    }
}

#[test]
fn test_grch38_interval_table() {
    let index = IntervalIndex::from_table(&AssemblyTable::grch38()).unwrap();

    let expected: [(&str, u64, u64); 24] = [
        ("chr1", 0, 248956422),
        ("chr2", 248956422, 491149951),
        ("chr3", 491149951, 689445510),
        ("chr4", 689445510, 879660065),
        ("chr5", 879660065, 1061198324),
        ("chr6", 1061198324, 1232004303),
        ("chr7", 1232004303, 1391350276),
        ("chr8", 1391350276, 1536488912),
        ("chr9", 1536488912, 1674883629),
        ("chr10", 1674883629, 1808681051),
        ("chr11", 1808681051, 1943767673),
        ("chr12", 1943767673, 2077042982),
        ("chr13", 2077042982, 2191407310),
        ("chr14", 2191407310, 2298451028),
        ("chr15", 2298451028, 2400442217),
        ("chr16", 2400442217, 2490780562),
        ("chr17", 2490780562, 2574038003),
        ("chr18", 2574038003, 2654411288),
        ("chr19", 2654411288, 2713028904),
        ("chr20", 2713028904, 2777473071),
        ("chr21", 2777473071, 2824183054),
        ("chr22", 2824183054, 2875001522),
        ("chrX", 2875001522, 3031042417),
        ("chrY", 3031042417, 3088269832),
    ];

    let actual: Vec<(&str, u64, u64)> = index
        .intervals()
        .map(|(chrom, iv)| (chrom, iv.start, iv.end))
        .collect();
    assert_eq!(actual, expected.to_vec());
}

#[test]
fn test_grch38_lengths() {
    let index = IntervalIndex::from_table(&AssemblyTable::grch38()).unwrap();

    assert_eq!(index.length("chr1"), Some(248956422));
    assert_eq!(index.length("chr2"), Some(242193529));
    assert_eq!(index.length("chr19"), Some(58617616));
    assert_eq!(index.length("chr21"), Some(46709983));
    assert_eq!(index.length("chrX"), Some(156040895));
    assert_eq!(index.length("chrY"), Some(57227415));
    assert_eq!(index.length("chrM"), None);
}

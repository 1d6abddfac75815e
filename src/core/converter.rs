//! Relative <-> absolute coordinate conversion
//!
//! The conversion algorithm:
//! 1. Check the position against the convention's valid range
//! 2. Shift it onto the 0-based offset axis of the interval index
//! 3. Relative -> absolute: add the chromosome's interval start
//! 4. Absolute -> relative: binary search the canonical order for the
//!    interval containing the offset, then subtract its start

use crate::core::convention::Convention;
use crate::core::error::{GenomeError, Result};
use crate::core::index::IntervalIndex;
use rayon::prelude::*;
use std::cmp::Ordering;
use std::fmt;
use std::ops::RangeInclusive;

/// A position on one chromosome
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RelativePosition<'a> {
    pub chrom: &'a str,
    pub pos: u64,
}

impl fmt::Display for RelativePosition<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.chrom, self.pos)
    }
}

/// Read-only conversions against an interval index
#[derive(Debug, Clone, Copy)]
pub struct CoordinateConverter<'a> {
    index: &'a IntervalIndex,
    convention: Convention,
}

fn check_bounds(pos: u64, bounds: RangeInclusive<u64>) -> Result<()> {
    if bounds.contains(&pos) {
        Ok(())
    } else {
        Err(GenomeError::OutOfBounds {
            pos,
            min: *bounds.start(),
            max: *bounds.end(),
        })
    }
}

impl<'a> CoordinateConverter<'a> {
    pub fn new(index: &'a IntervalIndex, convention: Convention) -> Self {
        Self { index, convention }
    }

    pub fn convention(&self) -> Convention {
        self.convention
    }

    /// Chromosome position -> genome-wide position
    ///
    /// Unknown chromosomes and positions outside the chromosome fail.
    pub fn relative_to_absolute(&self, chrom: &str, pos: u64) -> Result<u64> {
        let entry = self
            .index
            .entry(chrom)
            .ok_or_else(|| GenomeError::UnknownChromosome(chrom.to_string()))?;

        check_bounds(pos, self.convention.relative_bounds(entry.length))?;

        Ok(entry.interval.start + pos)
    }

    /// Genome-wide position -> chromosome position
    pub fn absolute_to_relative(&self, pos: u64) -> Result<RelativePosition<'a>> {
        let bounds = self.convention.absolute_bounds(self.index.total_length());
        check_bounds(pos, bounds.clone())?;

        let offset = self.convention.to_offset(pos);
        let entries = self.index.entries();

        // Half-open [left, right) over canonical order; intervals are sorted
        // by start because they come from a prefix sum.
        let mut left = 0usize;
        let mut right = entries.len();

        while left < right {
            let mid = left + (right - left) / 2;
            let entry = &entries[mid];

            match entry.interval.locate(offset) {
                Ordering::Less => right = mid,
                Ordering::Greater => left = mid + 1,
                Ordering::Equal => {
                    return Ok(RelativePosition {
                        chrom: entry.name.as_str(),
                        pos: self.convention.from_offset(offset - entry.interval.start),
                    });
                }
            }
        }

        // Unreachable for a well-formed index
        Err(GenomeError::OutOfBounds {
            pos,
            min: *bounds.start(),
            max: *bounds.end(),
        })
    }

    /// Convert many absolute positions in parallel
    ///
    /// Results keep the input order.
    pub fn absolute_to_relative_batch(&self, positions: &[u64]) -> Vec<Result<RelativePosition<'a>>> {
        positions
            .par_iter()
            .map(|&pos| self.absolute_to_relative(pos))
            .collect()
    }
}

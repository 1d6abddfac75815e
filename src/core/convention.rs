//! Position numbering conventions
//!
//! Chromosome intervals are always stored half-open on an offset axis that
//! starts at 0. A convention only decides how user-facing positions are
//! numbered on top of that axis: position `origin()` is the first base.
//!
//! | convention  | relative range       | absolute range         |
//! |-------------|----------------------|------------------------|
//! | `OneBased`  | `1..=length`         | `1..=total`            |
//! | `ZeroBased` | `0..=length - 1`     | `0..=total - 1`        |
//!
//! Both conversion directions and every bounds check go through one
//! `Convention` value, so relative and absolute numbering always agree.

use std::ops::RangeInclusive;

/// Numbering convention for relative and absolute positions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Convention {
    /// 1-based, inclusive at both ends
    #[default]
    OneBased,
    /// 0-based, half-open
    ZeroBased,
}

impl Convention {
    /// Parse from string (for CLI argument)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "one-based" | "1" | "1-based" => Some(Convention::OneBased),
            "zero-based" | "0" | "0-based" => Some(Convention::ZeroBased),
            _ => None,
        }
    }

    /// Number given to the first base of a chromosome (and of the genome)
    pub fn origin(&self) -> u64 {
        match self {
            Convention::OneBased => 1,
            Convention::ZeroBased => 0,
        }
    }

    /// Valid positions on a chromosome of `len` bases
    ///
    /// # Examples
    /// ```
    /// use linear_genome::core::Convention;
    /// assert_eq!(Convention::OneBased.relative_bounds(10), 1..=10);
    /// assert_eq!(Convention::ZeroBased.relative_bounds(10), 0..=9);
    /// ```
    pub fn relative_bounds(&self, len: u64) -> RangeInclusive<u64> {
        self.span(len)
    }

    /// Valid absolute positions for a genome of `total` bases
    pub fn absolute_bounds(&self, total: u64) -> RangeInclusive<u64> {
        self.span(total)
    }

    /// Position -> offset on the 0-based interval axis
    ///
    /// Callers check bounds first; `pos` must be at least `origin()`.
    #[inline]
    pub fn to_offset(&self, pos: u64) -> u64 {
        pos - self.origin()
    }

    /// Offset on the 0-based interval axis -> position
    #[inline]
    pub fn from_offset(&self, offset: u64) -> u64 {
        offset + self.origin()
    }

    fn span(&self, len: u64) -> RangeInclusive<u64> {
        // origin is 0 or 1, so the last position never exceeds `len`
        self.origin()..=len.saturating_sub(1) + self.origin()
    }
}

//! LinearGenome - genome coordinates on a single linear axis
//!
//! Maps positions between per-chromosome ("relative") coordinates and one
//! genome-wide ("absolute") coordinate where the chromosomes of an assembly
//! are laid end to end in canonical order.
//!
//! # Features
//!
//! - Built-in GRCh38 chromosome table, custom tables by injection
//! - O(1) relative -> absolute, O(log C) absolute -> relative
//! - One numbering convention per instance (1-based by default)
//! - UCSC region string parsing and nice-number axis ticks
//!
//! # Example
//!
//! ```
//! use linear_genome::{Assembly, RelativePosition};
//!
//! let hg38 = Assembly::new("GRCh38")?;
//!
//! let abs = hg38.relative_to_absolute("chr2", 1)?;
//! assert_eq!(abs, 248_956_423);
//! assert_eq!(hg38.absolute_to_relative(abs)?, RelativePosition { chrom: "chr2", pos: 1 });
//! # Ok::<(), linear_genome::GenomeError>(())
//! ```

pub mod axis;
pub mod core;
pub mod formats;

// Re-export commonly used types
pub use crate::core::{
    Assembly, AssemblyId, AssemblyTable, ChromInterval, Convention, CoordinateConverter,
    GenomeError, IntervalIndex, RegionParseError, RelativePosition, TickError,
};
pub use formats::{parse_chrom_range, ChromRange, RangeFormat};

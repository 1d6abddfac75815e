//! Static chromosome length tables
//!
//! An assembly is described purely by data: an ordered list of chromosome
//! keys with their lengths in base pairs. Supporting a new assembly means
//! adding a table here, not new mapping logic.

use crate::core::error::GenomeError;
use std::fmt;
use std::str::FromStr;

/// GRCh38.p14 primary chromosome lengths in canonical order
const GRCH38_P14_LENGTHS: [(&str, u64); 24] = [
    ("chr1", 248_956_422),
    ("chr2", 242_193_529),
    ("chr3", 198_295_559),
    ("chr4", 190_214_555),
    ("chr5", 181_538_259),
    ("chr6", 170_805_979),
    ("chr7", 159_345_973),
    ("chr8", 145_138_636),
    ("chr9", 138_394_717),
    ("chr10", 133_797_422),
    ("chr11", 135_086_622),
    ("chr12", 133_275_309),
    ("chr13", 114_364_328),
    ("chr14", 107_043_718),
    ("chr15", 101_991_189),
    ("chr16", 90_338_345),
    ("chr17", 83_257_441),
    ("chr18", 80_373_285),
    ("chr19", 58_617_616),
    ("chr20", 64_444_167),
    ("chr21", 46_709_983),
    ("chr22", 50_818_468),
    ("chrX", 156_040_895),
    ("chrY", 57_227_415),
];

/// Built-in assembly identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AssemblyId {
    /// Human GRCh38 (hg38), primary chromosomes only
    #[default]
    Grch38,
}

impl AssemblyId {
    pub fn as_str(&self) -> &'static str {
        match self {
            AssemblyId::Grch38 => "GRCh38",
        }
    }

    /// Length table for this assembly
    pub fn table(&self) -> AssemblyTable {
        match self {
            AssemblyId::Grch38 => AssemblyTable::grch38(),
        }
    }
}

impl FromStr for AssemblyId {
    type Err = GenomeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "GRCh38" => Ok(AssemblyId::Grch38),
            _ => Err(GenomeError::UnsupportedAssembly(s.to_string())),
        }
    }
}

impl fmt::Display for AssemblyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered chromosome lengths for one assembly
///
/// The order of `chroms` is the canonical order: it decides which
/// chromosomes are adjacent on the absolute axis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssemblyTable {
    /// Assembly name (for diagnostics)
    pub name: String,
    /// `(key, length)` pairs in canonical order
    pub chroms: Vec<(String, u64)>,
}

impl AssemblyTable {
    pub fn new(name: impl Into<String>, chroms: Vec<(String, u64)>) -> Self {
        Self {
            name: name.into(),
            chroms,
        }
    }

    /// GRCh38.p14: chr1..chr22, chrX, chrY
    pub fn grch38() -> Self {
        let chroms = GRCH38_P14_LENGTHS
            .iter()
            .map(|&(chrom, len)| (chrom.to_string(), len))
            .collect();
        Self::new(AssemblyId::Grch38.as_str(), chroms)
    }

    /// Chromosome keys in canonical order
    pub fn chrom_keys(&self) -> impl Iterator<Item = &str> {
        self.chroms.iter().map(|(chrom, _)| chrom.as_str())
    }
}

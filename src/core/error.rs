//! Error types for LinearGenome
//!
//! Defines all error types used throughout the library.

use thiserror::Error;

/// Errors raised by assembly construction and coordinate conversion
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenomeError {
    /// Assembly identifier has no built-in table
    #[error("Unsupported assembly version: {0}")]
    UnsupportedAssembly(String),

    /// Chromosome key is not part of the assembly
    #[error("Chromosome not found in assembly: {0}")]
    UnknownChromosome(String),

    /// Position outside the valid range for the active convention
    #[error("Position out of bounds: {pos} (valid range {min}..={max})")]
    OutOfBounds { pos: u64, min: u64, max: u64 },

    /// Length table rejected at construction
    #[error("Invalid assembly table '{assembly}': {message}")]
    InvalidTable { assembly: String, message: String },
}

/// Errors that can occur while parsing a region string
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegionParseError {
    /// Input does not match the expected layout
    #[error("Range does not match UCSC format: '{0}'")]
    InvalidFormat(String),

    /// Coordinate digits do not fit in a position
    #[error("Invalid position '{value}' in range '{input}'")]
    InvalidPosition { input: String, value: String },

    /// Unknown region format name
    #[error("Unsupported range format: {0}")]
    UnsupportedFormat(String),
}

/// Errors that can occur during axis tick generation
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TickError {
    /// Too few ticks requested
    #[error("Tick count must be greater than 2, got {0}")]
    InvalidCount(usize),

    /// Domain start equals domain end
    #[error("Invalid domain: [{0}, {0}] is empty")]
    EmptyDomain(f64),

    /// Request would produce an unbounded number of ticks
    #[error("Too many ticks requested: {0}")]
    TooMany(f64),
}

/// Result type alias for assembly and conversion operations
pub type Result<T> = std::result::Result<T, GenomeError>;

/// Result type alias for region parsing
pub type RegionResult<T> = std::result::Result<T, RegionParseError>;

/// Result type alias for tick generation
pub type TickResult<T> = std::result::Result<T, TickError>;

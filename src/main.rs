//! LinearGenome CLI entry point
//!
//! Converts between chromosome and genome-wide coordinates from the shell.

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use linear_genome::axis;
use linear_genome::core::{Assembly, Convention};
use linear_genome::formats::parse_chrom_range;
use log::info;

/// Position numbering convention (CLI enum)
#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum ConventionArg {
    /// 1-based, inclusive at both ends
    #[default]
    #[value(name = "one-based")]
    OneBased,
    /// 0-based, half-open
    #[value(name = "zero-based")]
    ZeroBased,
}

impl From<ConventionArg> for Convention {
    fn from(arg: ConventionArg) -> Self {
        match arg {
            ConventionArg::OneBased => Convention::OneBased,
            ConventionArg::ZeroBased => Convention::ZeroBased,
        }
    }
}

#[derive(Parser)]
#[command(name = "linear-genome")]
#[command(about = "Genome coordinate conversion on a linear axis")]
#[command(version)]
#[command(author = "LinearGenome Contributors")]
struct Cli {
    /// Genome assembly
    #[arg(short = 'a', long, global = true, default_value = "GRCh38")]
    assembly: String,

    /// Position numbering convention
    #[arg(long, global = true, default_value = "one-based")]
    convention: ConventionArg,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a chromosome position to an absolute position
    ToAbsolute {
        /// Chromosome (e.g. chr1 or 1)
        chrom: String,
        /// Position on the chromosome
        pos: u64,
    },
    /// Convert absolute positions to chromosome positions
    ToRelative {
        /// Absolute positions
        #[arg(required = true)]
        positions: Vec<u64>,
    },
    /// Parse a region string (chrom:start-end)
    Parse {
        /// Region string
        region: String,
    },
    /// Print the chromosome interval table
    Intervals,
    /// Print nice axis ticks for a domain
    Ticks {
        /// Domain start
        start: f64,
        /// Domain end
        end: f64,
        /// Approximate number of ticks
        #[arg(short = 'n', long, default_value = "10")]
        count: usize,
    },
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let assembly = Assembly::with_convention(&cli.assembly, cli.convention.into())
        .with_context(|| format!("Failed to load assembly {}", cli.assembly))?;
    info!("Loaded assembly {} ({} bp)", assembly.name(), assembly.total_length());

    match cli.command {
        Commands::ToAbsolute { chrom, pos } => {
            let chrom = Assembly::prefix_chrom_key(&chrom);
            let abs = assembly
                .relative_to_absolute(&chrom, pos)
                .with_context(|| format!("Cannot convert {}:{}", chrom, pos))?;
            println!("{}", abs);
        }

        Commands::ToRelative { positions } => {
            for (pos, result) in positions.iter().zip(assembly.absolute_to_relative_batch(&positions)) {
                let rel = result.with_context(|| format!("Cannot convert {}", pos))?;
                println!("{}\t{}", pos, rel);
            }
        }

        Commands::Parse { region } => {
            let range = parse_chrom_range(&region)?;
            println!("chrom\t{}", range.chrom);
            println!("start\t{}", range.start);
            println!("end\t{}", range.end);

            // Absolute span only when the range fits the assembly
            let chrom = Assembly::prefix_chrom_key(&range.chrom);
            if let (Ok(start), Ok(end)) = (
                assembly.relative_to_absolute(&chrom, range.start),
                assembly.relative_to_absolute(&chrom, range.end),
            ) {
                println!("absolute\t{}-{}", start, end);
            }
        }

        Commands::Intervals => {
            println!("#chrom\tstart\tend\tlength");
            for (chrom, iv) in assembly.chrom_intervals() {
                println!("{}\t{}\t{}\t{}", chrom, iv.start, iv.end, iv.len());
            }
            println!("#total\t{}", assembly.total_length());
        }

        Commands::Ticks { start, end, count } => {
            for tick in axis::ticks((start, end), count)? {
                println!("{}", tick);
            }
        }
    }

    Ok(())
}

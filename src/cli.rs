use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::str::FromStr;

#[derive(Parser)]
#[command(name = "galois")]
#[command(author, version, about = "Build and inspect small finite fields")]
#[command(propagate_version = true)]
pub struct Cli {
    /// JSON file overriding the default size limits
    #[arg(long, global = true)]
    pub limits: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the tables of the prime field F_order
    Field {
        /// Field order (a prime)
        order: u64,
    },

    /// List the polynomials of one degree over F_order
    #[command(alias = "ls")]
    Polynomials {
        /// Field order (a prime)
        order: u64,

        /// Exact degree of the listed polynomials
        degree: usize,
    },

    /// Extend F_order by each generator in turn
    Extend {
        /// Field order (a prime)
        order: u64,

        /// Comma-separated coefficient indices of each generator, lowest
        /// degree first, e.g. `1,1,1`
        #[arg(required = true)]
        generators: Vec<Generator>,

        /// Print the tables of the last extension as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Coefficient indices of one generator polynomial.
#[derive(Clone, Debug, PartialEq)]
pub struct Generator(pub Vec<usize>);

impl FromStr for Generator {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.split(',')
            .map(|c| {
                c.trim()
                    .parse::<usize>()
                    .map_err(|e| format!("invalid coefficient '{}': {}", c, e))
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Generator)
    }
}

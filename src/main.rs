use anyhow::{bail, Context, Result};
use clap::Parser;
use galois::catalog::{list_polynomials, max_listed_degree};
use galois::{
    is_irreducible, FactorRing, FactorRingSnapshot, Field, IntegerRing, Limits, PolynomialRing,
    PrimeField, Ring,
};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod cli;

use cli::{Cli, Commands, Generator};

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cli = Cli::parse();

    let limits = match &cli.limits {
        Some(path) => Limits::from_path(path)
            .with_context(|| format!("failed to load limits from {}", path.display()))?,
        None => Limits::default(),
    };

    match cli.command {
        Commands::Field { order } => field(order, &limits),
        Commands::Polynomials { order, degree } => polynomials(order, degree, &limits),
        Commands::Extend {
            order,
            generators,
            json,
        } => extend(order, &generators, json, &limits),
    }
}

/// The prime field `F_order` as tables over the integers.
fn prime_tables(order: u64, limits: &Limits) -> Result<FactorRing<IntegerRing>> {
    if order < 2 {
        bail!("field order must be greater than 1, got {}", order);
    }
    let modulus = i64::try_from(order).context("field order does not fit an i64")?;
    Ok(FactorRing::with_limits(IntegerRing::new(), modulus, limits)?)
}

fn field(order: u64, limits: &Limits) -> Result<()> {
    let field = prime_tables(order, limits)?;

    println!("F_{}", order);
    print_table("+", field.addition_table());
    print_table("*", field.multiplication_table());

    println!("\nopposite:");
    for (i, opposite) in field.opposite_table().iter().enumerate() {
        println!("  -{} = {}", i, opposite);
    }

    println!("\ninverse:");
    for (i, inverse) in field.inverse_table().iter().enumerate() {
        match inverse {
            Some(inverse) => println!("  {}^-1 = {}", i, inverse),
            None => println!("  {}^-1 = -", i),
        }
    }
    Ok(())
}

fn polynomials(order: u64, degree: usize, limits: &Limits) -> Result<()> {
    let ring = PolynomialRing::new(PrimeField::new(order)?);

    let max_degree = max_listed_degree(ring.field().order(), limits);
    if degree > max_degree {
        bail!("degree {} exceeds the maximum of {} for F_{}", degree, max_degree, order);
    }

    let listing = list_polynomials(&ring, degree, limits)?;
    for entry in &listing.entries {
        let marker = if entry.irreducible { "*" } else { " " };
        println!("{} {:>6}  {}", marker, entry.index, entry.polynomial);
    }
    if listing.truncated {
        println!("  ...");
    }
    Ok(())
}

fn extend(order: u64, generators: &[Generator], json: bool, limits: &Limits) -> Result<()> {
    let mut field = FactorRingSnapshot::from_factor_ring(&prime_tables(order, limits)?);
    let mut name = format!("F_{}", order);

    for Generator(coefficients) in generators {
        if !field.is_field() {
            bail!("{} is not a field and cannot be extended", name);
        }
        if let Some(bad) = coefficients.iter().find(|&&c| c >= field.order()) {
            bail!("coefficient {} is not an element of {}", bad, name);
        }

        let ring = PolynomialRing::new(field);
        let generator = ring.polynom_from_indices(coefficients);
        let irreducible = is_irreducible(&ring, &generator)?;
        let extension = FactorRing::with_limits(ring, generator, limits)?;

        name = format!("{}[x]/({})", name, extension.generator());
        if !json {
            println!("{}", name);
            println!("order:       {}", extension.order());
            println!("irreducible: {}", irreducible);
            println!("field:       {}", extension.is_field());
            println!("null:        {}", render(&extension, Some(extension.null_element())));
            println!("one:         {}", render(&extension, extension.one_element()));
            println!();
        }
        field = FactorRingSnapshot::from_factor_ring(&extension);
    }

    if json {
        println!("{}", field.to_json()?);
    }
    Ok(())
}

fn render<R: Ring>(extension: &FactorRing<R>, index: Option<usize>) -> String {
    index
        .and_then(|i| extension.render_modulo(i))
        .unwrap_or_else(|| "-".to_string())
}

fn print_table(op: &str, table: &[Vec<usize>]) {
    let width = table.len().saturating_sub(1).to_string().len();

    println!();
    let header: Vec<String> = (0..table.len()).map(|j| format!("{:>width$}", j)).collect();
    println!("{:>width$} | {}", op, header.join(" "));
    println!("{}", "-".repeat((width + 1) * (table.len() + 1) + 1));
    for (i, row) in table.iter().enumerate() {
        let cells: Vec<String> = row.iter().map(|v| format!("{:>width$}", v)).collect();
        println!("{:>width$} | {}", i, cells.join(" "));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generator_parsing() {
        assert_eq!("1,1,1".parse::<Generator>(), Ok(Generator(vec![1, 1, 1])));
        assert_eq!(" 2, 0 ,1".parse::<Generator>(), Ok(Generator(vec![2, 0, 1])));
        assert!("1,,1".parse::<Generator>().is_err());
        assert!("x".parse::<Generator>().is_err());
    }

    #[test]
    fn test_prime_tables_rejects_small_orders() {
        let limits = Limits::default();
        assert!(prime_tables(0, &limits).is_err());
        assert!(prime_tables(1, &limits).is_err());
        assert_eq!(prime_tables(5, &limits).unwrap().order(), 5);
    }

    #[test]
    fn test_extend_tower() {
        let limits = Limits::default();
        let tower = [Generator(vec![1, 1, 1]), Generator(vec![2, 1, 1])];
        assert!(extend(2, &tower, true, &limits).is_ok());
        assert!(extend(2, &tower, false, &limits).is_ok());
    }

    #[test]
    fn test_extend_rejects_bad_input() {
        let limits = Limits::default();
        // index 2 is not an element of F_2
        assert!(extend(2, &[Generator(vec![2, 1])], false, &limits).is_err());
        // x^2 + 1 = (x + 1)^2 over F_2 gives a ring without inverses
        let past_non_field = [Generator(vec![1, 0, 1]), Generator(vec![1, 1])];
        assert!(extend(2, &past_non_field, false, &limits).is_err());
    }
}

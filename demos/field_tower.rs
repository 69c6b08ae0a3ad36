//! Example: Field Towers
//!
//! Builds F_2 -> F_4 -> F_16 by extending each field with an irreducible
//! quadratic found by the catalog, then prints the multiplication table of
//! F_4 and the powers of a generator of F_16's multiplicative group.

use galois::catalog::irreducibles;
use galois::{FactorRing, Field, Limits, PolynomialRing, PrimeField, Ring};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let limits = Limits::default();

    println!("F_2 -> F_4");
    let ring2 = PolynomialRing::new(PrimeField::new(2)?);
    let quadratics = irreducibles(&ring2, 2, &limits)?;
    let generator = quadratics[0].polynomial.clone();
    println!("  generator: {}", generator);

    let f4 = FactorRing::with_limits(ring2, generator, &limits)?;
    println!("  order {}, field: {}", f4.order(), f4.is_field());
    println!("  multiplication:");
    for a in 0..f4.order() {
        let row: Vec<String> = (0..f4.order())
            .filter_map(|b| f4.render(f4.mul(&a, &b)))
            .collect();
        println!("    {}", row.join("  "));
    }

    println!("\nF_4 -> F_16");
    let ring4 = PolynomialRing::new(f4);
    let quadratics = irreducibles(&ring4, 2, &limits)?;
    println!("  {} irreducible quadratics over F_4", quadratics.len());
    let generator = quadratics[0].polynomial.clone();
    println!("  generator: {}", generator);

    let f16 = FactorRing::with_limits(ring4, generator, &limits)?;
    println!("  order {}, field: {}", f16.order(), f16.is_field());

    let one = f16
        .one_element()
        .ok_or("extension has no one element")?;
    let primitive = (1..f16.order())
        .find(|&a| {
            let mut power = a;
            let mut period = 1;
            while power != one {
                power = f16.mul(&power, &a);
                period += 1;
            }
            period == f16.order() - 1
        })
        .ok_or("no primitive element")?;

    println!("  powers of {}:", primitive);
    let mut power = one;
    for k in 0..f16.order() - 1 {
        println!("    g^{:<2} = {}", k, f16.representative(power).map_or(String::new(), |p| p.to_string()));
        power = f16.mul(&power, &primitive);
    }

    Ok(())
}

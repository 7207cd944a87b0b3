use anyhow::Result;
use edukit::complex::ComplexNumber;

/// Chains addition, division, exponentiation and root extraction, printing
/// the rendered second square root of the result.
fn main() -> Result<()> {
    let c1 = ComplexNumber::new(2.0, 3.0);
    let c2 = ComplexNumber::parse("2.5-3i")?;
    let c3 = c1
        .add(&ComplexNumber::from_magnitude_and_angle(2.0, 1.57))
        .div(&c2)
        .power(3)?
        .root(2)?[1];

    println!("{c3}");
    Ok(())
}

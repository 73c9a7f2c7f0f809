// ============================================================================
// Basic Usage Example
// ============================================================================

use fixed_point_math::prelude::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Backend range-reduction edge cases are reported at TRACE level
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    println!("=== Fixed-Point Math Example ===\n");

    let low = Fixed18::from_integer(-1);
    let high = Fixed18::ONE;

    // Clipping
    println!("Clipping to [{}, {}]...", low, high);
    for input in ["0.25", "3", "-inf", "nan"] {
        let x: Fixed18 = input.parse()?;
        println!("  clip({}) = {}", x, clip(x, low, high)?);
    }

    // Extrema
    println!("\n=== Extrema ===");
    let values: Vec<Fixed18> = vec!["2.5".parse()?, Fixed18::INFINITY, "-7".parse()?];
    println!("  maximum = {}", maximum(&values)?);
    println!("  minimum = {}", minimum(&values)?);
    println!("  minimum (floats) = {}", minimum(&[1.0, 3.0, 0.5])?);

    let poisoned = [Fixed18::ONE, Fixed18::NAN, Fixed18::INFINITY];
    println!("  maximum with NaN = {}", maximum(&poisoned)?);

    // Tolerance comparison
    println!("\n=== isclose ===");
    let a: Fixed18 = "1.0".parse()?;
    let b: Fixed18 = "1.00001".parse()?;
    for tol in ["0.00001", "0.000001"] {
        let tol: Fixed18 = tol.parse()?;
        println!("  isclose({}, {}, {}) = {}", a, b, tol, isclose(a, b, tol)?);
    }

    // Elementary functions
    println!("\n=== exp / sqrt ===");
    println!("  exp(1) = {}", exp(Fixed18::ONE)?);
    println!("  exp(-50) = {}", exp(Fixed18::from_integer(-50))?);
    println!("  sqrt(5) = {}", sqrt(Fixed18::from_integer(5))?);
    println!("  sqrt(inf) = {}", sqrt(Fixed18::INFINITY)?);

    match sqrt(Fixed18::NEG_INFINITY) {
        Ok(x) => println!("  sqrt(-inf) = {}", x),
        Err(e) => println!("  sqrt(-inf) failed: {}", e),
    }
    match exp(Fixed18::from_integer(100)) {
        Ok(x) => println!("  exp(100) = {}", x),
        Err(e) => println!("  exp(100) failed: {}", e),
    }

    // Runtime-tagged values
    println!("\n=== Value ===");
    let mixed = [Value::<18>::Integer(1), Value::Float(2.0)];
    if let Err(e) = maximum(&mixed) {
        println!("  maximum(mixed) failed: {}", e);
    }
    println!("  sqrt(Value::Float(2.0)) = {}", sqrt(Value::<18>::Float(2.0))?);

    Ok(())
}

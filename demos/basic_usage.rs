// ============================================================================
// Basic Usage Example
// ============================================================================

use numeric_value::prelude::*;

fn main() -> Result<(), NumericError> {
    // Strict construction auto-detects the base.
    let hex = NumericValue::new("0xFF")?;
    let bin = NumericValue::new("0b1010")?;
    let oct = NumericValue::new("0123")?;
    println!("0xFF   -> {}", hex);
    println!("0b1010 -> {}", bin);
    println!("0123   -> {}", oct);

    // Scientific notation is always float-typed.
    let sci = NumericValue::new("1e3")?;
    println!("1e3    -> {} (integer-typed: {})", sci, sci.is_integer());

    // Lenient preview never fails; it passes the original through.
    println!("lenient \" 42\" -> {:?}", convert_value(" 42"));
    println!("lenient \"42\"  -> {:?}", convert_value("42"));

    // Arithmetic operands go through the same normalization funnel.
    let total = hex.add("0o17")?.multiply(2)?;
    println!("(0xFF + 0o17) * 2 = {}", total);
    println!("as hex: {}", total.to_hex()?);

    // Statistics over mixed element shapes.
    let m = stats::median([1i64, 2, 3, 4])?;
    println!("median([1,2,3,4]) = {}", m);

    // Formatting with explicit separators.
    let big = NumericValue::new("1234567.891")?;
    println!("formatted: {}", big.format(2, ".", ","));

    // Division by a normalized zero is a typed failure, never NaN.
    match hex.divide("0") {
        Err(err) => println!("divide by zero: {}", err),
        Ok(_) => unreachable!(),
    }

    Ok(())
}

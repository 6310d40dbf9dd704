// ============================================================================
// Basic Usage Example
// ============================================================================

use calc_engine::prelude::*;

fn main() {
    #[cfg(feature = "logging")]
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    println!("=== Calc Engine Example ===\n");

    // Direct primitive calls
    println!("add(2, 3)        = {}", add(2, 3));
    println!("subtract(0, 10)  = {}", subtract(0, 10));
    println!("multiply(-5, -3) = {}", multiply(-5, -3));
    match divide(6, 3) {
        Ok(q) => println!("divide(6, 3)     = {}", q),
        Err(e) => println!("divide(6, 3)     failed: {}", e),
    }

    // Dispatch by operation token
    println!("\n=== Dispatch by token ===");
    for op in Operation::ALL {
        match calculate(op.token(), 7, 2) {
            Ok(result) => println!("calculate({:?}, 7, 2) = {}", op.token(), result),
            Err(e) => println!("calculate({:?}, 7, 2) failed: {}", op.token(), e),
        }
    }

    // Error cases propagate to the caller
    println!("\n=== Error cases ===");
    if let Err(e) = calculate("divide", 5, 0) {
        println!("calculate(\"divide\", 5, 0): {}", e);
    }
    if let Err(e) = calculate("modulo", 5, 3) {
        println!("calculate(\"modulo\", 5, 3): {}", e);
    }
}

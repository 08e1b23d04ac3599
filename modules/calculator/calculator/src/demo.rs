//! Demonstration routine.
//!
//! Calls every operation once with the configured sample inputs and writes one
//! line per result. Rejected arguments are reported as `Error: <message>` lines
//! instead of being propagated.

use std::io::{self, Write};

use calculator_sdk::CalculatorApi;

use crate::config::DemoConfig;

/// Run the demonstration against `api`, writing the report to `out`.
///
/// Quotients always carry a fractional part (`2.0`, `0.25`).
///
/// # Errors
/// Returns an error only if writing to `out` fails.
#[allow(
    clippy::use_debug,
    reason = "f64 Debug keeps the trailing `.0` on whole quotients"
)]
pub fn run_demo<W: Write>(
    api: &dyn CalculatorApi,
    config: &DemoConfig,
    out: &mut W,
) -> io::Result<()> {
    let DemoConfig {
        a,
        b,
        fibonacci_index: n,
        ref name,
    } = *config;

    tracing::info!("running calculator demo");

    writeln!(out, "Calculator test running...")?;
    writeln!(out, "{a} + {b} = {}", api.add(a, b))?;
    writeln!(out, "{a} - {b} = {}", api.subtract(a, b))?;
    writeln!(out, "{a} * {b} = {}", api.multiply(a, b))?;
    match api.divide(a, b) {
        Ok(quotient) => writeln!(out, "{a} / {b} = {quotient:?}")?,
        Err(e) => writeln!(out, "Error: {e}")?,
    }
    writeln!(out, "{}", api.greet(name))?;
    match api.fibonacci(n) {
        Ok(value) => writeln!(out, "Fibonacci({n}) = {value}")?,
        Err(e) => writeln!(out, "Error: {e}")?,
    }

    Ok(())
}

//! Domain service for calculator
//!
//! Contains the core business logic for arithmetic operations.

use calculator_sdk::{CalculatorApi, CalculatorError};
use tracing::{debug, warn};

/// Domain service that performs arithmetic operations.
///
/// This is a stateless service: every operation is a pure function of its
/// arguments, so a single instance can be shared freely across threads.
#[derive(Clone, Copy, Debug, Default)]
pub struct Service;

impl Service {
    /// Create a new service.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl CalculatorApi for Service {
    fn add(&self, a: i32, b: i32) -> i32 {
        debug!(a, b, "performing addition");
        a.wrapping_add(b)
    }

    fn subtract(&self, a: i32, b: i32) -> i32 {
        debug!(a, b, "performing subtraction");
        a.wrapping_sub(b)
    }

    fn multiply(&self, a: i32, b: i32) -> i32 {
        debug!(a, b, "performing multiplication");
        a.wrapping_mul(b)
    }

    fn divide(&self, a: i32, b: i32) -> Result<f64, CalculatorError> {
        if b == 0 {
            warn!(a, "rejected division by zero");
            return Err(CalculatorError::division_by_zero());
        }
        debug!(a, b, "performing division");
        Ok(f64::from(a) / f64::from(b))
    }

    fn fibonacci(&self, n: i32) -> Result<i64, CalculatorError> {
        if n < 0 {
            warn!(n, "rejected negative fibonacci index");
            return Err(CalculatorError::negative_index());
        }
        debug!(n, "computing fibonacci number");

        // (F(i), F(i + 1)) after i steps
        let (mut current, mut next) = (0_i64, 1_i64);
        for _ in 0..n {
            let sum = current.wrapping_add(next);
            current = next;
            next = sum;
        }
        Ok(current)
    }

    fn greet(&self, name: &str) -> String {
        format!("Hello, {name}!")
    }
}

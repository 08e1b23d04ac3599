//! Calculator API trait and types
//!
//! Contract trait and error type for the calculator service.

/// Message carried by [`CalculatorError::InvalidArgument`] when dividing by zero.
pub const DIVIDE_BY_ZERO_MESSAGE: &str = "Cannot divide by zero";

/// Message carried by [`CalculatorError::InvalidArgument`] for a negative Fibonacci index.
pub const NEGATIVE_INDEX_MESSAGE: &str = "n must be non-negative";

/// Calculator API trait
///
/// Stateless arithmetic operations. Implementations must be pure: the same
/// inputs always produce the same output and no state is shared between calls.
/// Integer operations wrap on overflow.
pub trait CalculatorApi: Send + Sync {
    /// Add two numbers and return the sum.
    fn add(&self, a: i32, b: i32) -> i32;

    /// Subtract `b` from `a`.
    fn subtract(&self, a: i32, b: i32) -> i32;

    /// Multiply two numbers and return the product.
    fn multiply(&self, a: i32, b: i32) -> i32;

    /// Divide `a` by `b` in double precision.
    ///
    /// # Errors
    /// Returns [`CalculatorError::InvalidArgument`] when `b` is zero.
    fn divide(&self, a: i32, b: i32) -> Result<f64, CalculatorError>;

    /// Return the `n`-th Fibonacci number, with `fibonacci(0) == 0`.
    ///
    /// Indices above 92 do not fit in an `i64`; the result for them is unspecified.
    ///
    /// # Errors
    /// Returns [`CalculatorError::InvalidArgument`] when `n` is negative.
    fn fibonacci(&self, n: i32) -> Result<i64, CalculatorError>;

    /// Build the greeting `"Hello, <name>!"`.
    fn greet(&self, name: &str) -> String;
}

/// Error type for Calculator operations
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CalculatorError {
    #[error("{0}")]
    InvalidArgument(String),
}

impl CalculatorError {
    /// Error returned by `divide` for a zero divisor.
    #[must_use]
    pub fn division_by_zero() -> Self {
        Self::InvalidArgument(DIVIDE_BY_ZERO_MESSAGE.to_owned())
    }

    /// Error returned by `fibonacci` for a negative index.
    #[must_use]
    pub fn negative_index() -> Self {
        Self::InvalidArgument(NEGATIVE_INDEX_MESSAGE.to_owned())
    }
}

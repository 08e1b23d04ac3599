#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
//! Calculator SDK
//!
//! This crate provides the contract of the calculator module:
//! - API trait (`CalculatorApi`)
//! - Error type (`CalculatorError`)
//!
//! ## Usage
//!
//! ```ignore
//! use calculator_sdk::{CalculatorApi, CalculatorError};
//!
//! fn halve(api: &dyn CalculatorApi, value: i32) -> Result<f64, CalculatorError> {
//!     api.divide(value, 2)
//! }
//! ```

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]

// === API TRAIT AND TYPES ===
mod api;
pub use api::{CalculatorApi, CalculatorError, DIVIDE_BY_ZERO_MESSAGE, NEGATIVE_INDEX_MESSAGE};

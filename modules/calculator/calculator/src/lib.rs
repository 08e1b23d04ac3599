#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
//! Calculator Module
//!
//! A stateless arithmetic service plus a small demonstration binary.
//!
//! ## Architecture
//!
//! - `domain/service.rs` - Core business logic
//! - `demo.rs` - Demonstration routine that exercises every operation
//! - `cli.rs` - Command line surface of the `calculator-demo` binary
//! - `config.rs` - Layered demo configuration
//! - `logging.rs` - Subscriber setup for the binary
//!
//! External consumers should depend on `calculator-sdk` for the
//! `CalculatorApi` trait and error type.

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]

pub mod cli;
pub mod config;
pub mod demo;
pub mod logging;

// === INTERNAL MODULES ===
#[doc(hidden)]
pub mod domain;

pub use config::DemoConfig;
pub use domain::Service;

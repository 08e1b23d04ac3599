#![allow(clippy::unwrap_used, clippy::expect_used)]

//! Property-based tests for the arithmetic service.
//!
//! These tests use proptest to verify the algebraic laws of every operation
//! across the whole `i32` domain.

use calculator::Service;
use calculator_sdk::{CalculatorApi, CalculatorError};
use proptest::prelude::*;

fn non_zero() -> impl Strategy<Value = i32> {
    any::<i32>().prop_filter("divisor must be non-zero", |b| *b != 0)
}

proptest! {
    /// Property: addition is commutative
    #[test]
    fn add_is_commutative(a in any::<i32>(), b in any::<i32>()) {
        let service = Service::new();
        prop_assert_eq!(service.add(a, b), service.add(b, a));
    }

    /// Property: zero is the additive identity
    #[test]
    fn add_zero_is_identity(a in any::<i32>()) {
        prop_assert_eq!(Service::new().add(a, 0), a);
    }

    /// Property: swapping subtraction operands negates the result
    #[test]
    fn subtract_is_anti_commutative(a in any::<i32>(), b in any::<i32>()) {
        let service = Service::new();
        prop_assert_eq!(service.subtract(a, b), service.subtract(b, a).wrapping_neg());
    }

    /// Property: multiplication is commutative and annihilated by zero
    #[test]
    fn multiply_laws(a in any::<i32>(), b in any::<i32>()) {
        let service = Service::new();
        prop_assert_eq!(service.multiply(a, b), service.multiply(b, a));
        prop_assert_eq!(service.multiply(a, 0), 0);
    }

    /// Property: multiplying the quotient by the divisor restores the dividend
    #[test]
    fn divide_inverts_multiplication(a in any::<i32>(), b in non_zero()) {
        let quotient = Service::new().divide(a, b).unwrap();
        let restored = quotient * f64::from(b);
        prop_assert!((restored - f64::from(a)).abs() < 1e-4, "{restored} != {a}");
    }

    /// Property: a zero divisor is always rejected
    #[test]
    fn divide_by_zero_is_rejected(a in any::<i32>()) {
        prop_assert_eq!(
            Service::new().divide(a, 0),
            Err(CalculatorError::division_by_zero())
        );
    }

    /// Property: negative indices are always rejected
    #[test]
    fn fibonacci_negative_is_rejected(n in i32::MIN..0) {
        prop_assert_eq!(
            Service::new().fibonacci(n),
            Err(CalculatorError::negative_index())
        );
    }

    /// Property: the recurrence holds over the whole i64-representable range
    #[test]
    fn fibonacci_recurrence(n in 2_i32..=92) {
        let service = Service::new();
        let expected = service.fibonacci(n - 1).unwrap() + service.fibonacci(n - 2).unwrap();
        prop_assert_eq!(service.fibonacci(n).unwrap(), expected);
    }

    /// Property: greeting wraps any name unchanged
    #[test]
    fn greet_wraps_name(name in ".*") {
        let greeting = Service::new().greet(&name);
        prop_assert!(greeting.starts_with("Hello, "));
        prop_assert!(greeting.ends_with('!'));
        prop_assert_eq!(&greeting["Hello, ".len()..greeting.len() - 1], name.as_str());
    }

    /// Property: every operation returns identical output for identical input
    #[test]
    fn operations_are_idempotent(a in any::<i32>(), b in any::<i32>(), n in -10_i32..=92, name in "[a-zA-Z ]{0,16}") {
        let service = Service::new();
        prop_assert_eq!(service.add(a, b), service.add(a, b));
        prop_assert_eq!(service.subtract(a, b), service.subtract(a, b));
        prop_assert_eq!(service.multiply(a, b), service.multiply(a, b));
        prop_assert_eq!(
            service.divide(a, b).map(f64::to_bits),
            service.divide(a, b).map(f64::to_bits)
        );
        prop_assert_eq!(service.fibonacci(n), service.fibonacci(n));
        prop_assert_eq!(service.greet(&name), service.greet(&name));
    }
}

#[test]
fn fibonacci_known_values() {
    let service = Service::new();
    let known = [(0, 0), (1, 1), (2, 1), (5, 5), (10, 55), (15, 610)];
    for (n, expected) in known {
        assert_eq!(service.fibonacci(n), Ok(expected), "fibonacci({n})");
    }
}

#[test]
fn service_is_shareable_across_threads() {
    let service = Service::new();
    let handles: Vec<_> = (0..4)
        .map(|i| std::thread::spawn(move || service.fibonacci(10 + i).unwrap()))
        .collect();
    let results: Vec<i64> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(results, vec![55, 89, 144, 233]);
}

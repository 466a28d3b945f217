//! Unwrap helpers for test code.
//!
//! Use these instead of `unwrap()`/`expect()`: the panic message carries the
//! error value and `#[track_caller]` points at the failing test line.

use std::fmt::Debug;

/// Unwrap a `Result`, panicking with the error value.
///
/// ```rust
/// use padbridge_test_helpers::must;
///
/// let value = must(Ok::<_, &str>(42));
/// assert_eq!(value, 42);
/// ```
///
/// # Panics
///
/// Panics if the result is `Err`.
#[track_caller]
pub fn must<T, E: Debug>(result: Result<T, E>) -> T {
    match result {
        Ok(v) => v,
        Err(e) => panic!("must: unexpected Err: {e:?}"),
    }
}

/// Unwrap an `Option`, panicking with `msg` if `None`.
///
/// # Panics
///
/// Panics if the option is `None`.
#[track_caller]
pub fn must_some<T>(option: Option<T>, msg: &str) -> T {
    match option {
        Some(v) => v,
        None => panic!("must_some: {msg}"),
    }
}

/// Unwrap a `Result` with a context message.
///
/// # Panics
///
/// Panics if the result is `Err`, with the context and the error value.
#[track_caller]
pub fn must_with<T, E: Debug>(result: Result<T, E>, context: &str) -> T {
    match result {
        Ok(v) => v,
        Err(e) => panic!("must_with: {context}: {e:?}"),
    }
}

/// Assert that a `Result` is `Err` and return the error.
///
/// # Panics
///
/// Panics if the result is `Ok`.
#[track_caller]
pub fn must_err<T: Debug, E>(result: Result<T, E>) -> E {
    match result {
        Ok(v) => panic!("must_err: expected Err, got Ok({v:?})"),
        Err(e) => e,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_must_ok() {
        assert_eq!(must(Ok::<u8, &str>(7)), 7);
    }

    #[test]
    #[should_panic(expected = "must: unexpected Err")]
    fn test_must_err_panics() {
        let _value: u8 = must(Err::<u8, &str>("boom"));
    }

    #[test]
    fn test_must_some() {
        assert_eq!(must_some(Some(3), "value"), 3);
    }

    #[test]
    #[should_panic(expected = "must_some: missing")]
    fn test_must_some_none() {
        let _value: u8 = must_some(None, "missing");
    }

    #[test]
    #[should_panic(expected = "must_with: opening config")]
    fn test_must_with_context() {
        let _value: u8 = must_with(Err::<u8, &str>("nope"), "opening config");
    }

    #[test]
    fn test_must_err() {
        assert_eq!(must_err(Err::<u8, &str>("bad")), "bad");
    }
}

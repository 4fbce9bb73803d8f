//! Shorthand macros for fault construction and panic capture.
//!
//! - [`macro@crate::fault`] - constructs a [`Fault`](crate::types::Fault),
//!   with or without an explicit source.
//! - [`macro@crate::safe`] - wraps an expression in
//!   [`safe`](crate::catch::safe), saving the closure boilerplate.
//!
//! # Examples
//!
//! ```
//! use fault_rail::{fault, safe};
//!
//! let fault = fault!("RATE_LIMITED", 429u16);
//! assert_eq!(fault.label(), "RATE_LIMITED");
//!
//! let (fault, value) = safe!("PARSE_ERROR", "17".parse::<i32>().unwrap());
//! assert!(fault.is_none());
//! assert_eq!(value, Some(17));
//! ```

/// Constructs a [`Fault`](crate::types::Fault).
///
/// # Syntax
///
/// - `fault!(label)` - synthesized source, message equals the label
/// - `fault!(label, source)` - explicit source value
///
/// # Examples
///
/// ```
/// use fault_rail::fault;
///
/// let bare = fault!("NOT_FOUND");
/// assert_eq!(bare.message(), "NOT_FOUND");
///
/// let sourced = fault!("IO_ERROR", std::io::Error::other("disk offline"));
/// assert_eq!(sourced.source().to_string(), "disk offline");
/// ```
#[macro_export]
macro_rules! fault {
    ($label:expr $(,)?) => {
        $crate::types::Fault::labeled($label)
    };
    ($label:expr, $source:expr $(,)?) => {
        $crate::types::Fault::new($label, $source)
    };
}

/// Captures the panics of an expression into an outcome.
///
/// `safe!(label, expr)` is exactly `safe(|| expr, label)`.
///
/// # Examples
///
/// ```
/// use fault_rail::safe;
///
/// let (fault, _) = safe!("PARSE_ERROR", "nope".parse::<i32>().unwrap());
/// assert_eq!(fault.unwrap().label(), "PARSE_ERROR");
/// ```
#[macro_export]
macro_rules! safe {
    ($label:expr, $body:expr $(,)?) => {
        $crate::catch::safe(|| $body, $label)
    };
}

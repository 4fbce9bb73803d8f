//! Conversion helpers between [`Outcome`] and the std `Result`/`Option`
//! types.
//!
//! These adapters make it straightforward to adopt the outcome convention
//! incrementally: lift existing `Result`-returning code into labeled
//! outcomes at a boundary, or flatten outcomes back into core types when
//! handing data to external APIs.
//!
//! # Examples
//!
//! ```
//! use fault_rail::convert::*;
//!
//! let parsed: Result<i32, _> = "19".parse();
//! let outcome = from_result(parsed, "PARSE_ERROR");
//! assert_eq!(into_option(outcome), Some(19));
//! ```

use std::borrow::Cow;

use crate::traits::OutcomeExt;
use crate::types::{ok, Fault, Outcome, Panic};

/// Converts an outcome into a std `Result`, fault arm mapped to `Err`.
///
/// # Panics
///
/// Panics if neither slot is populated; the crate's constructors always
/// populate exactly one.
///
/// # Examples
///
/// ```
/// use fault_rail::convert::into_result;
/// use fault_rail::types::{err, Outcome};
///
/// let outcome: Outcome<(), &str> = err("DENIED", "bad token");
/// assert_eq!(into_result(outcome).unwrap_err().label(), "DENIED");
/// ```
#[inline]
pub fn into_result<T, S>(outcome: Outcome<T, S>) -> Result<T, Fault<S>> {
    outcome.into_std()
}

/// Lifts a std `Result` into an outcome, normalizing the error via
/// [`Fault::from_error`].
///
/// # Examples
///
/// ```
/// use fault_rail::convert::from_result;
///
/// let io: Result<(), std::io::Error> = Err(std::io::Error::other("disk offline"));
/// let (fault, _) = from_result(io, "IO_ERROR");
/// assert_eq!(fault.unwrap().message(), "disk offline");
/// ```
pub fn from_result<T, E, L>(result: Result<T, E>, label: L) -> Outcome<T, Panic>
where
    E: std::error::Error + Send + 'static,
    L: Into<Cow<'static, str>>,
{
    match result {
        Ok(value) => ok(value),
        Err(error) => Fault::from_error(error, label).result(),
    }
}

/// Extracts the value slot, discarding any fault.
#[inline]
pub fn into_option<T, S>(outcome: Outcome<T, S>) -> Option<T> {
    outcome.1
}

/// Lifts an `Option` into an outcome; `None` becomes a fault with a
/// synthesized source whose message equals the label.
///
/// # Examples
///
/// ```
/// use fault_rail::convert::from_option;
///
/// let (fault, _) = from_option(None::<u8>, "NOT_FOUND");
/// assert_eq!(fault.unwrap().message(), "NOT_FOUND");
/// ```
pub fn from_option<T, L>(option: Option<T>, label: L) -> Outcome<T, Panic>
where
    L: Into<Cow<'static, str>>,
{
    match option {
        Some(value) => ok(value),
        None => Fault::labeled(label).result(),
    }
}

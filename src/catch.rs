//! The synchronous bridge between panicking code and outcome-returning code.
//!
//! [`safe`] crosses in one direction: it runs a closure under
//! `catch_unwind` and turns any panic into a labeled fault. [`release`]
//! crosses back: it unwraps a value or re-raises the fault's source as the
//! original panic. The two compose to the identity - `release(safe(f, L))`
//! behaves exactly like `f()`, same return value on success, same panic
//! payload on failure.
//!
//! Every function here has a `_with` variant taking an
//! [`OnFault`](crate::traits::OnFault) hook that observes the fault before
//! it is returned or re-thrown.
//!
//! Catching requires unwinding panics; under `panic = "abort"` there is
//! nothing to catch.
//!
//! # Examples
//!
//! ```
//! use fault_rail::prelude::*;
//!
//! let (fault, value) = safe(
//!     || serde_json::from_str::<serde_json::Value>(r#"{"a":1}"#).unwrap(),
//!     "PARSE_ERROR",
//! );
//! assert!(fault.is_none());
//! assert_eq!(value.unwrap()["a"], 1);
//!
//! let (fault, value) = safe(
//!     || serde_json::from_str::<serde_json::Value>("not json").unwrap(),
//!     "PARSE_ERROR",
//! );
//! assert!(value.is_none());
//! assert_eq!(fault.unwrap().label(), "PARSE_ERROR");
//! ```

use std::borrow::Cow;
use std::panic::{catch_unwind, AssertUnwindSafe};

use crate::traits::{NoHook, OnFault, Throwable};
use crate::types::{ok, Fault, Outcome, Panic};

/// Runs `f`, converting a panic into a fault-carrying outcome.
///
/// A normal return produces `ok(value)`; any panic payload becomes the
/// source of a fault tagged `label`, normalized via
/// [`Fault::from_panic`]. Never re-panics.
///
/// # Examples
///
/// ```
/// use fault_rail::prelude::*;
///
/// let (fault, value) = safe(|| 6 * 7, "MATH_ERROR");
/// assert_eq!((fault.is_none(), value), (true, Some(42)));
///
/// let (fault, _): (_, Option<i32>) = safe(|| panic!("boom"), "TASK_ERROR");
/// assert_eq!(fault.unwrap().message(), "boom");
/// ```
pub fn safe<T, F, L>(f: F, label: L) -> Outcome<T, Panic>
where
    F: FnOnce() -> T,
    L: Into<Cow<'static, str>>,
{
    safe_with(f, label, &NoHook)
}

/// [`safe`], with a hook observing the fault before it is returned.
///
/// The hook is invoked synchronously with the fault; its invocation cannot
/// change the returned outcome.
pub fn safe_with<T, F, L, O>(f: F, label: L, hook: &O) -> Outcome<T, Panic>
where
    F: FnOnce() -> T,
    L: Into<Cow<'static, str>>,
    O: OnFault<Panic>,
{
    match catch_unwind(AssertUnwindSafe(f)) {
        Ok(value) => ok(value),
        Err(payload) => Fault::from_panic(payload, label).tap(hook).result(),
    }
}

/// Unwraps an outcome, re-raising the fault's source on the failure arm.
///
/// The *source* is thrown, not the fault wrapper, so downstream
/// `catch_unwind` callers see the failure in its original shape. For
/// outcomes produced by [`safe`] the panic payload is resumed by identity.
///
/// # Panics
///
/// Panics with the fault's source when the outcome carries a fault, and
/// with a contract message if neither slot is populated (only a hand-built
/// tuple can do that).
///
/// # Examples
///
/// ```
/// use fault_rail::prelude::*;
///
/// let value = release(safe(|| "ok", "TASK_ERROR"));
/// assert_eq!(value, "ok");
/// ```
pub fn release<T, S>(outcome: Outcome<T, S>) -> T
where
    S: Throwable,
{
    release_with(outcome, &NoHook)
}

/// [`release`], with a hook observing the fault before it is re-thrown.
pub fn release_with<T, S, O>(outcome: Outcome<T, S>, hook: &O) -> T
where
    S: Throwable,
    O: OnFault<S>,
{
    match outcome {
        (Some(fault), _) => {
            hook.notify(&fault);
            fault.into_source().throw()
        }
        (None, Some(value)) => value,
        (None, None) => panic!("outcome populated neither slot"),
    }
}

/// Wraps a panicking function into one that returns an outcome.
///
/// The wrapped function forwards its argument to `f` and reduces the call
/// through [`safe`]. Functions of more than one parameter take them as a
/// single tuple. Wrapping itself cannot fail.
///
/// # Examples
///
/// ```
/// use fault_rail::prelude::*;
///
/// let parse = from_panicking(|s: &str| s.parse::<i32>().unwrap(), "PARSE_ERROR");
///
/// assert_eq!(parse("42").1, Some(42));
/// assert_eq!(parse("nope").0.unwrap().label(), "PARSE_ERROR");
///
/// let div = from_panicking(|(a, b): (u32, u32)| a / b, "MATH_ERROR");
/// assert_eq!(div((6, 3)).1, Some(2));
/// assert!(div((1, 0)).0.is_some());
/// ```
pub fn from_panicking<A, T, F, L>(f: F, label: L) -> impl Fn(A) -> Outcome<T, Panic>
where
    F: Fn(A) -> T,
    L: Into<Cow<'static, str>>,
{
    let label = label.into();
    move |args| safe(|| f(args), label.clone())
}

/// [`from_panicking`], with a hook observing every fault the wrapped
/// function produces.
pub fn from_panicking_with<A, T, F, L, O>(f: F, label: L, hook: O) -> impl Fn(A) -> Outcome<T, Panic>
where
    F: Fn(A) -> T,
    L: Into<Cow<'static, str>>,
    O: OnFault<Panic>,
{
    let label = label.into();
    move |args| safe_with(|| f(args), label.clone(), &hook)
}

//! Method-style ergonomics for the positional [`Outcome`] tuple.

use crate::traits::OnFault;
use crate::types::{Fault, Outcome};

/// Extension methods on [`Outcome`].
///
/// The tuple stays the wire contract; this trait adds the conveniences a
/// Rust caller expects once positional destructuring is not the point.
///
/// # Examples
///
/// ```
/// use fault_rail::prelude::*;
///
/// let outcome = safe(|| "183".parse::<i32>().unwrap(), "PARSE_ERROR");
/// assert!(outcome.is_ok());
/// assert_eq!(outcome.into_std().unwrap(), 183);
/// ```
pub trait OutcomeExt<T, S> {
    /// `true` when the value slot is populated and the fault slot is not.
    fn is_ok(&self) -> bool;

    /// `true` when the fault slot is populated.
    fn is_fault(&self) -> bool;

    /// Consumes the outcome, returning the value slot.
    fn value(self) -> Option<T>;

    /// Consumes the outcome, returning the fault slot.
    fn fault(self) -> Option<Fault<S>>;

    /// Converts into a std `Result`, fault arm mapped to `Err`.
    ///
    /// # Panics
    ///
    /// Panics if neither slot is populated. The crate's constructors always
    /// populate exactly one; only a hand-built tuple can violate that.
    fn into_std(self) -> Result<T, Fault<S>>;

    /// Invokes `hook` with the fault, if one is present, and returns the
    /// outcome unchanged.
    fn inspect_fault<O>(self, hook: &O) -> Self
    where
        O: OnFault<S>;
}

impl<T, S> OutcomeExt<T, S> for Outcome<T, S> {
    #[inline]
    fn is_ok(&self) -> bool {
        self.0.is_none() && self.1.is_some()
    }

    #[inline]
    fn is_fault(&self) -> bool {
        self.0.is_some()
    }

    #[inline]
    fn value(self) -> Option<T> {
        self.1
    }

    #[inline]
    fn fault(self) -> Option<Fault<S>> {
        self.0
    }

    fn into_std(self) -> Result<T, Fault<S>> {
        match self {
            (Some(fault), _) => Err(fault),
            (None, Some(value)) => Ok(value),
            (None, None) => panic!("outcome populated neither slot"),
        }
    }

    #[inline]
    fn inspect_fault<O>(self, hook: &O) -> Self
    where
        O: OnFault<S>,
    {
        if let (Some(fault), _) = &self {
            hook.notify(fault);
        }
        self
    }
}

use std::borrow::Cow;

use crate::types::{Fault, Panic};

/// A discriminated two-slot outcome: fault first, value second.
///
/// The positional ordering is the consumer-facing contract; callers
/// destructure it directly:
///
/// ```
/// use fault_rail::prelude::*;
///
/// let (fault, value) = safe(|| 21 * 2, "MATH_ERROR");
/// assert!(fault.is_none());
/// assert_eq!(value, Some(42));
/// ```
///
/// The constructors in this module populate exactly one slot. Reading only
/// the value slot of a fault-carrying outcome observes `None`, not a panic;
/// that sharp edge is accepted in exchange for exhaustive, explicit
/// branching. Use [`OutcomeExt`](crate::traits::OutcomeExt) to convert into a
/// std `Result` when method-style handling is preferred.
pub type Outcome<T, S = Panic> = (Option<Fault<S>>, Option<T>);

/// Creates a successful outcome carrying `value`.
///
/// Total: never fails, for any value. The unit value stands in where there is
/// nothing meaningful to carry.
///
/// # Examples
///
/// ```
/// use fault_rail::types::{ok, Outcome};
///
/// let outcome: Outcome<i32> = ok(7);
/// assert!(matches!(outcome, (None, Some(7))));
///
/// let nothing: Outcome<()> = ok(());
/// assert!(nothing.0.is_none());
/// ```
#[inline]
pub fn ok<T, S>(value: T) -> Outcome<T, S> {
    (None, Some(value))
}

/// Creates a fault-carrying outcome from a fresh label and source.
///
/// To wrap an already-constructed [`Fault`], use [`Fault::result`] instead.
///
/// # Examples
///
/// ```
/// use fault_rail::types::{err, Outcome};
///
/// let outcome: Outcome<(), &str> = err("NOT_FOUND", "missing row");
/// let fault = outcome.0.unwrap();
/// assert_eq!(fault.label(), "NOT_FOUND");
/// assert_eq!(*fault.source(), "missing row");
/// ```
#[inline]
pub fn err<T, S, L>(label: L, source: S) -> Outcome<T, S>
where
    L: Into<Cow<'static, str>>,
{
    Fault::new(label, source).result()
}

/// Creates a fault-carrying outcome with a synthesized source.
///
/// The source slot is filled by a [`LabelError`](crate::types::LabelError)
/// whose message equals the label, so the source is never absent.
#[inline]
pub fn err_labeled<T, L>(label: L) -> Outcome<T, Panic>
where
    L: Into<Cow<'static, str>>,
{
    Fault::labeled(label).result()
}

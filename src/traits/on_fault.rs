//! Observation seam for fault construction.
//!
//! Everything that catches a failure in this crate funnels the resulting
//! [`Fault`] through an [`OnFault`] hook before handing it back. The hook is
//! strictly a side channel: it sees the fault read-only and cannot alter the
//! outcome being returned.

use crate::types::Fault;

/// A side-effecting observer of newly constructed faults.
///
/// Implementors receive each fault exactly once, synchronously, on the call
/// that constructs it. A slow hook delays fault construction itself; there is
/// no enforced timeout.
///
/// The crate ships three implementors:
///
/// - [`NoHook`] - does nothing, the default for the plain bridge functions
/// - [`Hook`] - adapts any `Fn(&Fault<S>)` closure
/// - [`Observer`](crate::observer::Observer) - a cloneable, settable handle
///   suitable for threading one callback through a whole subsystem
///
/// # Examples
///
/// ```
/// use fault_rail::prelude::*;
///
/// let (fault, _): (_, Option<i32>) = safe_with(
///     || panic!("boom"),
///     "TASK_ERROR",
///     &Hook(|fault: &Fault| eprintln!("observed: {fault}")),
/// );
/// assert!(fault.is_some());
/// ```
pub trait OnFault<S> {
    /// Called with the fault at its construction boundary.
    fn notify(&self, fault: &Fault<S>);
}

/// The do-nothing hook.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoHook;

impl<S> OnFault<S> for NoHook {
    #[inline]
    fn notify(&self, _fault: &Fault<S>) {}
}

/// Adapts a closure into an [`OnFault`] hook.
///
/// # Examples
///
/// ```
/// use std::cell::Cell;
/// use fault_rail::prelude::*;
///
/// let seen = Cell::new(0);
/// let hook = Hook(|_: &Fault| seen.set(seen.get() + 1));
///
/// let _: Outcome<i32> = safe_with(|| panic!("x"), "E", &hook);
/// assert_eq!(seen.get(), 1);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Hook<F>(pub F);

impl<S, F> OnFault<S> for Hook<F>
where
    F: Fn(&Fault<S>),
{
    #[inline]
    fn notify(&self, fault: &Fault<S>) {
        (self.0)(fault)
    }
}

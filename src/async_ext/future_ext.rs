//! Extension traits for capturing future failures into outcomes.
//!
//! Method-style counterparts of the free functions in
//! [`bridge`](crate::async_ext), mirroring the sync bridge's ergonomics.

use core::future::Future;
use std::borrow::Cow;

use crate::traits::{NoHook, OnFault};
use crate::types::Panic;

use super::catch_future::{Catch, CatchErr};

/// Adds `.safe(label)` to any future.
///
/// # Examples
///
/// ```
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// use fault_rail::prelude_async::*;
///
/// let (fault, _): (_, Option<u8>) = async { panic!("worker died") }
///     .safe("WORKER_ERROR")
///     .await;
/// assert_eq!(fault.unwrap().message(), "worker died");
/// # });
/// ```
pub trait SafeFutureExt: Future + Sized {
    /// Captures panics of this future into a fault tagged `label`.
    fn safe<L>(self, label: L) -> Catch<Self, NoHook>
    where
        L: Into<Cow<'static, str>>,
    {
        Catch::new(self, label.into(), NoHook)
    }

    /// [`safe`](SafeFutureExt::safe), with a hook observing the fault.
    fn safe_with<L, O>(self, label: L, hook: O) -> Catch<Self, O>
    where
        L: Into<Cow<'static, str>>,
        O: OnFault<Panic>,
    {
        Catch::new(self, label.into(), hook)
    }
}

impl<F: Future> SafeFutureExt for F {}

/// Adds `.safe_err(label)` to `Result`-resolving futures.
///
/// # Examples
///
/// ```
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// use fault_rail::prelude_async::*;
///
/// let (fault, _) = async { "nope".parse::<i32>() }
///     .safe_err("PARSE_ERROR")
///     .await;
/// assert_eq!(fault.unwrap().label(), "PARSE_ERROR");
/// # });
/// ```
pub trait SafeTryFutureExt<T, E>: Future<Output = Result<T, E>> + Sized {
    /// Lands `Err` resolutions and panics in the fault arm, tagged `label`.
    fn safe_err<L>(self, label: L) -> CatchErr<Self, NoHook>
    where
        L: Into<Cow<'static, str>>,
    {
        CatchErr::new(self, label.into(), NoHook)
    }

    /// [`safe_err`](SafeTryFutureExt::safe_err), with a hook observing the
    /// fault.
    fn safe_err_with<L, O>(self, label: L, hook: O) -> CatchErr<Self, O>
    where
        L: Into<Cow<'static, str>>,
        O: OnFault<Panic>,
    {
        CatchErr::new(self, label.into(), hook)
    }
}

impl<F, T, E> SafeTryFutureExt<T, E> for F where F: Future<Output = Result<T, E>> {}

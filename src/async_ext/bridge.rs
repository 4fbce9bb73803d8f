//! Free-function form of the asynchronous bridge.
//!
//! These mirror the sync bridge in [`catch`](crate::catch), operating on an
//! awaited future instead of a synchronous call. There is no cancellation
//! machinery here: once a wrapped future is in flight, dropping it is the
//! caller's business, exactly as with any other future.

use core::future::Future;
use std::borrow::Cow;

use crate::catch::{release, release_with};
use crate::traits::{NoHook, OnFault, Throwable};
use crate::types::{Outcome, Panic};

use super::catch_future::{Catch, CatchErr};

/// Awaits `future`, converting a panic into a fault-carrying outcome.
///
/// Resolution produces `ok(value)`; a panic at any poll becomes the source
/// of a fault tagged `label`, by the same normalization rule as
/// [`safe`](crate::catch::safe).
///
/// # Examples
///
/// ```
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// use fault_rail::async_ext::safe_async;
///
/// let (fault, value) = safe_async(async { 6 * 7 }, "TASK_ERROR").await;
/// assert!(fault.is_none());
/// assert_eq!(value, Some(42));
/// # });
/// ```
pub fn safe_async<T, F, L>(future: F, label: L) -> Catch<F, NoHook>
where
    F: Future<Output = T>,
    L: Into<Cow<'static, str>>,
{
    Catch::new(future, label.into(), NoHook)
}

/// [`safe_async`], with a hook observing the fault before resolution.
pub fn safe_async_with<T, F, L, O>(future: F, label: L, hook: O) -> Catch<F, O>
where
    F: Future<Output = T>,
    L: Into<Cow<'static, str>>,
    O: OnFault<Panic>,
{
    Catch::new(future, label.into(), hook)
}

/// Awaits a `Result`-resolving future, landing both `Err` resolutions and
/// panics in the fault arm.
///
/// This is the bridge for code that already reports failure as data; the
/// error is normalized via [`Fault::from_error`](crate::types::Fault::from_error)
/// so its message and source chain survive.
///
/// # Examples
///
/// ```
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// use fault_rail::async_ext::safe_try_async;
///
/// let refused = async { Err::<(), _>(std::io::Error::other("connection refused")) };
/// let (fault, _) = safe_try_async(refused, "NET_ERROR").await;
/// let fault = fault.unwrap();
/// assert_eq!(fault.label(), "NET_ERROR");
/// assert_eq!(fault.message(), "connection refused");
/// # });
/// ```
pub fn safe_try_async<T, E, F, L>(future: F, label: L) -> CatchErr<F, NoHook>
where
    F: Future<Output = Result<T, E>>,
    E: std::error::Error + Send + 'static,
    L: Into<Cow<'static, str>>,
{
    CatchErr::new(future, label.into(), NoHook)
}

/// [`safe_try_async`], with a hook observing the fault before resolution.
pub fn safe_try_async_with<T, E, F, L, O>(future: F, label: L, hook: O) -> CatchErr<F, O>
where
    F: Future<Output = Result<T, E>>,
    E: std::error::Error + Send + 'static,
    L: Into<Cow<'static, str>>,
    O: OnFault<Panic>,
{
    CatchErr::new(future, label.into(), hook)
}

/// Awaits an outcome-resolving future, then unwraps it by the same
/// rule as [`release`](crate::catch::release): the value on success, a
/// re-raise of the fault's source on failure.
///
/// # Panics
///
/// Panics with the fault's source when the awaited outcome carries one.
pub async fn release_async<T, S, F>(outcome: F) -> T
where
    S: Throwable,
    F: Future<Output = Outcome<T, S>>,
{
    release(outcome.await)
}

/// [`release_async`], with a hook observing the fault before the re-raise.
pub async fn release_async_with<T, S, F, O>(outcome: F, hook: &O) -> T
where
    S: Throwable,
    F: Future<Output = Outcome<T, S>>,
    O: OnFault<S>,
{
    release_with(outcome.await, hook)
}

/// Wraps an async function into one returning outcome-resolving futures.
///
/// The wrapped function forwards its argument to `f` and reduces the
/// returned future through [`safe_async`]. Functions of more than one
/// parameter take them as a single tuple. Wrapping itself cannot fail.
///
/// # Examples
///
/// ```
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// use fault_rail::async_ext::from_panicking_async;
///
/// let halve = from_panicking_async(
///     |n: u32| async move { if n % 2 == 0 { n / 2 } else { panic!("odd") } },
///     "MATH_ERROR",
/// );
///
/// assert_eq!(halve(10).await.1, Some(5));
/// assert_eq!(halve(7).await.0.unwrap().message(), "odd");
/// # });
/// ```
pub fn from_panicking_async<A, T, F, Fut, L>(f: F, label: L) -> impl Fn(A) -> Catch<Fut, NoHook>
where
    F: Fn(A) -> Fut,
    Fut: Future<Output = T>,
    L: Into<Cow<'static, str>>,
{
    let label = label.into();
    move |args| safe_async(f(args), label.clone())
}

/// [`from_panicking_async`], with a hook observing every fault the wrapped
/// function produces. The hook is cloned into each returned future.
pub fn from_panicking_async_with<A, T, F, Fut, L, O>(
    f: F,
    label: L,
    hook: O,
) -> impl Fn(A) -> Catch<Fut, O>
where
    F: Fn(A) -> Fut,
    Fut: Future<Output = T>,
    L: Into<Cow<'static, str>>,
    O: OnFault<Panic> + Clone,
{
    let label = label.into();
    move |args| safe_async_with(f(args), label.clone(), hook.clone())
}

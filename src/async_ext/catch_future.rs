//! Futures that capture failures into outcomes.
//!
//! [`Catch`] polls its inner future inside `catch_unwind`, so a panic at any
//! poll becomes a labeled fault instead of unwinding through the executor.
//! [`CatchErr`] does the same for futures that resolve to a `Result`,
//! additionally normalizing the `Err` arm through
//! [`Fault::from_error`].

use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll};
use std::borrow::Cow;
use std::panic::{catch_unwind, AssertUnwindSafe};

use pin_project_lite::pin_project;

use crate::traits::OnFault;
use crate::types::{ok, Fault, Outcome, Panic};

pin_project! {
    /// Future adapter that resolves to an [`Outcome`], catching panics.
    ///
    /// Created by [`safe_async`](crate::async_ext::safe_async) or
    /// [`SafeFutureExt::safe`](crate::async_ext::SafeFutureExt::safe).
    #[must_use = "futures do nothing unless polled"]
    pub struct Catch<F, O> {
        #[pin]
        inner: F,
        label: Option<Cow<'static, str>>,
        hook: O,
    }
}

impl<F, O> Catch<F, O> {
    pub(crate) fn new(inner: F, label: Cow<'static, str>, hook: O) -> Self {
        Self {
            inner,
            label: Some(label),
            hook,
        }
    }
}

impl<F, O> Future for Catch<F, O>
where
    F: Future,
    O: OnFault<Panic>,
{
    type Output = Outcome<F::Output, Panic>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.project();
        match catch_unwind(AssertUnwindSafe(|| this.inner.poll(cx))) {
            Ok(Poll::Ready(value)) => Poll::Ready(ok(value)),
            Ok(Poll::Pending) => Poll::Pending,
            Err(payload) => {
                let label = this.label.take().expect("future polled after completion");
                Poll::Ready(Fault::from_panic(payload, label).tap(this.hook).result())
            }
        }
    }
}

pin_project! {
    /// Future adapter for `Result`-resolving futures.
    ///
    /// An `Err` resolution and a panic both land in the fault arm of the
    /// outcome; the error is normalized with its diagnostics preserved.
    ///
    /// Created by [`safe_try_async`](crate::async_ext::safe_try_async) or
    /// [`SafeTryFutureExt::safe_err`](crate::async_ext::SafeTryFutureExt::safe_err).
    #[must_use = "futures do nothing unless polled"]
    pub struct CatchErr<F, O> {
        #[pin]
        inner: F,
        label: Option<Cow<'static, str>>,
        hook: O,
    }
}

impl<F, O> CatchErr<F, O> {
    pub(crate) fn new(inner: F, label: Cow<'static, str>, hook: O) -> Self {
        Self {
            inner,
            label: Some(label),
            hook,
        }
    }
}

impl<F, T, E, O> Future for CatchErr<F, O>
where
    F: Future<Output = Result<T, E>>,
    E: std::error::Error + Send + 'static,
    O: OnFault<Panic>,
{
    type Output = Outcome<T, Panic>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.project();
        match catch_unwind(AssertUnwindSafe(|| this.inner.poll(cx))) {
            Ok(Poll::Ready(Ok(value))) => Poll::Ready(ok(value)),
            Ok(Poll::Ready(Err(error))) => {
                let label = this.label.take().expect("future polled after completion");
                Poll::Ready(Fault::from_error(error, label).tap(this.hook).result())
            }
            Ok(Poll::Pending) => Poll::Pending,
            Err(payload) => {
                let label = this.label.take().expect("future polled after completion");
                Poll::Ready(Fault::from_panic(payload, label).tap(this.hook).result())
            }
        }
    }
}

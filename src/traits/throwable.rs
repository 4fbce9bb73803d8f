//! Re-throw seam for fault sources.
//!
//! [`release`](crate::catch::release) collapses a fault-carrying outcome back
//! into a panic. What exactly gets panicked with depends on the source type,
//! and this trait is that seam: a [`Panic`] payload is resumed by identity,
//! other sources are boxed into a fresh payload.

use std::panic::resume_unwind;

use crate::types::Panic;

/// A fault source that can be turned back into a panic.
///
/// The contract: `throw` never returns, and the panic payload it raises must
/// let a `catch_unwind` caller recover the original value (by identity for
/// [`Panic`], by downcast for the owned impls).
///
/// Implement this for custom source types that need to ride through
/// [`release`](crate::catch::release):
///
/// ```
/// use fault_rail::traits::Throwable;
///
/// #[derive(Debug)]
/// struct QuotaExceeded(u64);
///
/// impl Throwable for QuotaExceeded {
///     fn throw(self) -> ! {
///         std::panic::resume_unwind(Box::new(self))
///     }
/// }
/// ```
pub trait Throwable {
    /// Raises `self` as a panic. Never returns.
    fn throw(self) -> !;
}

impl Throwable for Panic {
    /// Resumes the captured panic with its payload untouched, so a
    /// catch/release round trip is observably identical to the original
    /// panic.
    #[inline]
    fn throw(self) -> ! {
        resume_unwind(self)
    }
}

impl Throwable for String {
    #[inline]
    fn throw(self) -> ! {
        resume_unwind(Box::new(self))
    }
}

impl Throwable for &'static str {
    #[inline]
    fn throw(self) -> ! {
        resume_unwind(Box::new(self))
    }
}

impl Throwable for Box<dyn std::error::Error + Send + Sync> {
    /// The payload is the boxed error itself; catchers downcast to
    /// `Box<dyn Error + Send + Sync>` to recover it.
    #[inline]
    fn throw(self) -> ! {
        resume_unwind(Box::new(self))
    }
}

//! An injectable, cloneable fault observer.
//!
//! A process often wants one place that sees every fault a subsystem
//! constructs, for logging or telemetry. Rather than a process-global
//! mutable callback, [`Observer`] is an explicit handle: construct it where
//! the process wires things up, clone it into whatever needs it, and pass it
//! to the `_with` bridge variants. A clone shares the callback installed at
//! the time of cloning, while `set` and `clear` act on their own handle
//! only. Nothing is process-global, which keeps tests free of hidden
//! cross-test coupling.
//!
//! # Examples
//!
//! ```
//! use std::sync::atomic::{AtomicUsize, Ordering};
//! use std::sync::Arc;
//! use fault_rail::prelude::*;
//!
//! let seen = Arc::new(AtomicUsize::new(0));
//! let counter = Arc::clone(&seen);
//! let observer = Observer::new(move |_| {
//!     counter.fetch_add(1, Ordering::SeqCst);
//! });
//!
//! let _: Outcome<()> = safe_with(|| panic!("boom"), "TASK_ERROR", &observer);
//! assert_eq!(seen.load(Ordering::SeqCst), 1);
//! ```

use core::fmt::{self, Debug};
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::Arc;

use crate::traits::OnFault;
use crate::types::{Fault, Panic};

type Callback = Arc<dyn Fn(&Fault<Panic>) + Send + Sync + 'static>;

/// A cloneable handle holding at most one fault callback.
///
/// Setting a new callback silently replaces any previous one (last write
/// wins); there is no queuing. The callback is invoked synchronously, in
/// line, on the thread that constructs the fault, and must treat the fault
/// as read-only. A panic inside the callback is caught and never propagated
/// to the caller; under the `tracing` feature it is logged at warn level.
#[derive(Clone, Default)]
pub struct Observer {
    callback: Option<Callback>,
}

impl Observer {
    /// Creates an observer with `callback` installed.
    pub fn new<F>(callback: F) -> Self
    where
        F: Fn(&Fault<Panic>) + Send + Sync + 'static,
    {
        Self {
            callback: Some(Arc::new(callback)),
        }
    }

    /// Creates an observer with no callback; `observe` is a no-op.
    #[inline]
    pub const fn disabled() -> Self {
        Self { callback: None }
    }

    /// Installs `callback`, replacing any previous one.
    pub fn set<F>(&mut self, callback: F)
    where
        F: Fn(&Fault<Panic>) + Send + Sync + 'static,
    {
        self.callback = Some(Arc::new(callback));
    }

    /// Removes the callback; subsequent faults go unobserved.
    #[inline]
    pub fn clear(&mut self) {
        self.callback = None;
    }

    /// `true` while a callback is installed.
    #[inline]
    pub fn is_active(&self) -> bool {
        self.callback.is_some()
    }

    /// Invokes the callback, if any, with `fault`.
    ///
    /// A panicking callback is contained here; fault construction always
    /// completes regardless of what the callback does.
    pub fn observe(&self, fault: &Fault<Panic>) {
        let Some(callback) = &self.callback else {
            return;
        };
        let contained = catch_unwind(AssertUnwindSafe(|| callback(fault)));
        #[cfg(feature = "tracing")]
        if contained.is_err() {
            tracing::warn!(label = %fault.label(), "fault observer panicked; suppressed");
        }
        #[cfg(not(feature = "tracing"))]
        let _ = contained;
    }

    /// An observer that logs every fault through `tracing` at error level.
    #[cfg(feature = "tracing")]
    pub fn traced() -> Self {
        Self::new(|fault| {
            tracing::error!(
                label = %fault.label(),
                message = %fault.message(),
                "fault constructed"
            );
        })
    }
}

impl Debug for Observer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observer")
            .field("active", &self.is_active())
            .finish()
    }
}

impl OnFault<Panic> for Observer {
    #[inline]
    fn notify(&self, fault: &Fault<Panic>) {
        self.observe(fault);
    }
}

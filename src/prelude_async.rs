//! Async prelude - the sync prelude plus the asynchronous bridge.
//!
//! ```
//! use fault_rail::prelude_async::*;
//! ```
//!
//! # Examples
//!
//! ```
//! # tokio::runtime::Runtime::new().unwrap().block_on(async {
//! use fault_rail::prelude_async::*;
//!
//! let outcome = async { 2 + 2 }.safe("MATH_ERROR").await;
//! assert_eq!(release(outcome), 4);
//! # });
//! ```

pub use crate::prelude::*;

pub use crate::async_ext::{
    from_panicking_async, from_panicking_async_with, release_async, release_async_with,
    safe_async, safe_async_with, safe_try_async, safe_try_async_with, Catch, CatchErr,
    SafeFutureExt, SafeTryFutureExt,
};

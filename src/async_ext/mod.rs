//! The asynchronous bridge: panic-capturing futures and their helpers.
//!
//! Mirrors the sync bridge in [`catch`](crate::catch) with the same
//! contracts, suspension happening only at the wrapped future's own await
//! points. Panics raised at any poll are captured into the fault arm
//! instead of unwinding through the executor.
//!
//! # Feature Flag
//!
//! Requires the `async` feature:
//!
//! ```toml
//! [dependencies]
//! fault-rail = { version = "0.3", features = ["async"] }
//! ```
//!
//! # Examples
//!
//! ```ignore
//! use fault_rail::prelude_async::*;
//!
//! async fn fetch_user(id: u64) -> Outcome<User> {
//!     fetch_from_db(id).safe("DB_ERROR").await
//! }
//! ```

mod bridge;
mod catch_future;
mod future_ext;

pub use bridge::{
    from_panicking_async, from_panicking_async_with, release_async, release_async_with,
    safe_async, safe_async_with, safe_try_async, safe_try_async_with,
};
pub use catch_future::{Catch, CatchErr};
pub use future_ext::{SafeFutureExt, SafeTryFutureExt};

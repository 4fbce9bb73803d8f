//! Labeled fault-or-value outcomes, plus bridges that convert panicking
//! code into outcome-returning code and back.
//!
//! An [`Outcome`] is a positional two-slot tuple: fault first, value second,
//! exactly one populated. A [`Fault`] is a structured failure record carrying
//! a caller-chosen classification label and the original causal value.
//! [`safe`] captures a panic into that shape; [`release`] restores it,
//! re-raising the original payload. Failures travel as plain data in
//! between.
//!
//! # Examples
//!
//! ## Capturing a panic
//!
//! ```
//! use fault_rail::prelude::*;
//!
//! let (fault, value) = safe(
//!     || serde_json::from_str::<serde_json::Value>(r#"{"a":1}"#).unwrap(),
//!     "PARSE_ERROR",
//! );
//! assert!(fault.is_none());
//! assert_eq!(value.unwrap()["a"], 1);
//! ```
//!
//! ## Branching on the fault arm
//!
//! ```
//! use fault_rail::prelude::*;
//!
//! let (fault, _): (_, Option<i32>) = safe(|| panic!("boom"), "TASK_ERROR");
//! match fault {
//!     Some(fault) => {
//!         assert_eq!(fault.label(), "TASK_ERROR");
//!         assert_eq!(fault.message(), "boom");
//!     }
//!     None => unreachable!(),
//! }
//! ```
//!
//! ## Wrapping a panicking function
//!
//! ```
//! use fault_rail::prelude::*;
//!
//! let parse = from_panicking(|s: &str| s.parse::<u16>().unwrap(), "PORT_ERROR");
//! assert_eq!(parse("8080").1, Some(8080));
//! assert!(parse("eighty").0.is_some());
//! ```
//!
//! The `async` feature adds the same bridge for futures; the `tracing`
//! feature adds a ready-made [`Observer`](observer::Observer) that logs
//! every fault.

/// The sync bridge: `safe`, `release`, `from_panicking`
pub mod catch;
/// Adapters between outcomes and std `Result`/`Option`
pub mod convert;
/// `fault!` and `safe!` shorthand macros
pub mod macros;
/// Injectable fault observer handle
pub mod observer;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Core traits: observation, re-throw, and outcome ergonomics
pub mod traits;
/// Fault and outcome data model
pub mod types;

/// The async bridge (requires the `async` feature)
#[cfg(feature = "async")]
pub mod async_ext;

/// Async prelude - all async utilities in one import (requires the `async`
/// feature)
#[cfg(feature = "async")]
pub mod prelude_async;

// Re-export the working surface at the root; the prelude remains the
// recommended import.
pub use catch::*;
pub use convert::*;
pub use observer::Observer;
pub use traits::*;
pub use types::{err, err_labeled, ok, Fault, LabelError, Outcome, Panic};

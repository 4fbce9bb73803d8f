//! Core traits at the crate's seams.
//!
//! - [`OnFault`]: side-effecting observation of newly constructed faults,
//!   with the [`NoHook`] and [`Hook`] adapters
//! - [`Throwable`]: how a fault source is raised back into a panic
//! - [`OutcomeExt`]: method-style ergonomics for the positional outcome tuple
//!
//! # Examples
//!
//! ```
//! use fault_rail::prelude::*;
//!
//! let outcome: Outcome<i32> = safe(|| panic!("boom"), "TASK_ERROR")
//!     .inspect_fault(&Hook(|fault: &Fault| eprintln!("{fault}")));
//! assert!(outcome.is_fault());
//! ```

pub mod on_fault;
pub mod outcome_ext;
pub mod throwable;

pub use on_fault::{Hook, NoHook, OnFault};
pub use outcome_ext::OutcomeExt;
pub use throwable::Throwable;

//! The fault and outcome data model.
//!
//! A [`Fault`] is a structured failure record: a caller-chosen label plus the
//! original causal value. An [`Outcome`] is the positional two-slot tuple
//! `(Option<Fault>, Option<T>)` that carries either a value or a fault,
//! never both.
//!
//! # Examples
//!
//! ```
//! use fault_rail::types::{err, ok, Outcome};
//!
//! let hit: Outcome<u32> = ok(200);
//! assert!(matches!(hit, (None, Some(200))));
//!
//! let miss: Outcome<u32, &str> = err("CACHE_MISS", "key expired");
//! assert_eq!(miss.0.unwrap().label(), "CACHE_MISS");
//! ```

pub mod fault;
pub mod outcome;

pub use fault::{Fault, LabelError, Panic};
pub use outcome::{err, err_labeled, ok, Outcome};

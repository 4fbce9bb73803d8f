//! Convenience re-exports for common usage patterns.
//!
//! Import everything with:
//!
//! ```
//! use fault_rail::prelude::*;
//! ```
//!
//! # What's Included
//!
//! - **Macros**: [`fault!`](crate::fault), [`safe!`](crate::safe)
//! - **Types**: [`Fault`], [`Outcome`], [`Panic`], [`LabelError`],
//!   [`Observer`]
//! - **Constructors**: [`ok`], [`err`], [`err_labeled`]
//! - **Bridges**: [`safe`], [`release`], [`from_panicking`] and their
//!   `_with` variants
//! - **Traits**: [`OnFault`] (with [`Hook`]/[`NoHook`]), [`OutcomeExt`],
//!   [`Throwable`]
//!
//! # Examples
//!
//! ```
//! use fault_rail::prelude::*;
//!
//! fn parse_port(raw: &str) -> Outcome<u16> {
//!     safe(|| raw.parse::<u16>().unwrap(), "PORT_ERROR")
//! }
//!
//! let (fault, port) = parse_port("8080");
//! assert!(fault.is_none());
//! assert_eq!(port, Some(8080));
//! ```

// Macros (the `safe` import also covers the function of the same name)
pub use crate::{fault, safe};

// Core types and constructors
pub use crate::observer::Observer;
pub use crate::types::{err, err_labeled, ok, Fault, LabelError, Outcome, Panic};

// Bridges
pub use crate::catch::{from_panicking, from_panicking_with, release, release_with, safe_with};

// Conversions
pub use crate::convert::{from_option, from_result, into_option, into_result};

// Traits
pub use crate::traits::{Hook, NoHook, OnFault, OutcomeExt, Throwable};

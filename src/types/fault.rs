use core::any::{type_name, Any};
use core::fmt::{self, Debug, Display};
use std::backtrace::{Backtrace, BacktraceStatus};
use std::borrow::Cow;

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use crate::traits::OnFault;
use crate::types::Outcome;

/// The payload carried by a caught panic.
///
/// This is the type `std::panic::catch_unwind` hands back and the type
/// `std::panic::resume_unwind` accepts, so a [`Fault<Panic>`] can re-throw
/// its source without altering the payload's identity.
pub type Panic = Box<dyn Any + Send + 'static>;

/// Synthesized source used when a fault is constructed without one.
///
/// Its display text is the fault's label, so `Fault::labeled("NOT_FOUND")`
/// carries a real error value whose message is `"NOT_FOUND"` rather than an
/// absent source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelError {
    label: Cow<'static, str>,
}

impl LabelError {
    #[inline]
    pub fn new<L: Into<Cow<'static, str>>>(label: L) -> Self {
        Self {
            label: label.into(),
        }
    }

    #[inline]
    pub fn label(&self) -> &str {
        &self.label
    }
}

impl Display for LabelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label)
    }
}

impl std::error::Error for LabelError {}

/// A structured failure record: a caller-chosen classification label plus the
/// original causal value.
///
/// The label is an open string taxonomy (`"PARSE_ERROR"`, `"NET_ERROR"`, ...)
/// chosen at the failure boundary; the source is whatever actually failed: a
/// native error, a panic payload, a string, or any other value. Diagnostic
/// fields (`message`, `cause`, `name`, `trace`) are mirrored from the source
/// at construction time so they survive even when the source itself is an
/// opaque `Box<dyn Any>`.
///
/// A fault is constructed exactly once, at the catch boundary, and is
/// immutable afterwards.
///
/// # Examples
///
/// ```
/// use fault_rail::types::Fault;
///
/// let io = std::io::Error::new(std::io::ErrorKind::NotFound, "no such table");
/// let fault = Fault::from_error(io, "DB_ERROR");
///
/// assert_eq!(fault.label(), "DB_ERROR");
/// assert_eq!(fault.message(), "no such table");
/// ```
pub struct Fault<S = Panic> {
    label: Cow<'static, str>,
    source: S,
    message: String,
    cause: Option<String>,
    name: Option<&'static str>,
    trace: Option<String>,
}

/// Renders the current backtrace, if capture is enabled via `RUST_BACKTRACE`.
fn captured_trace() -> Option<String> {
    let trace = Backtrace::capture();
    matches!(trace.status(), BacktraceStatus::Captured).then(|| trace.to_string())
}

impl<S> Fault<S> {
    /// Creates a fault from a label and an explicit source value.
    ///
    /// This is the plain constructor: no normalization is performed and no
    /// diagnostics are mirrored, the source is stored as given. Use
    /// [`Fault::from_error`], [`Fault::from_panic`] or [`Fault::from_value`]
    /// when the source should also populate the message fields.
    ///
    /// # Examples
    ///
    /// ```
    /// use fault_rail::types::Fault;
    ///
    /// let fault = Fault::new("TIMEOUT", 30u64);
    /// assert_eq!(fault.label(), "TIMEOUT");
    /// assert_eq!(*fault.source(), 30);
    /// ```
    #[inline]
    pub fn new<L: Into<Cow<'static, str>>>(label: L, source: S) -> Self {
        Self {
            label: label.into(),
            source,
            message: String::new(),
            cause: None,
            name: None,
            trace: None,
        }
    }

    /// The classification label chosen at the failure boundary.
    #[inline]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The message mirrored from the source, possibly empty.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The rendered source chain of a native-error source, if any.
    #[inline]
    pub fn cause(&self) -> Option<&str> {
        self.cause.as_deref()
    }

    /// The type name of the source, when it was known at construction.
    #[inline]
    pub fn name(&self) -> Option<&'static str> {
        self.name
    }

    /// The backtrace captured at construction, if `RUST_BACKTRACE` enabled it.
    #[inline]
    pub fn trace(&self) -> Option<&str> {
        self.trace.as_deref()
    }

    /// Borrows the original causal value.
    #[inline]
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Consumes the fault, returning the original causal value intact.
    #[inline]
    pub fn into_source(self) -> S {
        self.source
    }

    /// Maps the source to another type, keeping label and diagnostics.
    #[inline]
    pub fn map_source<F, U>(self, f: F) -> Fault<U>
    where
        F: FnOnce(S) -> U,
    {
        Fault {
            label: self.label,
            source: f(self.source),
            message: self.message,
            cause: self.cause,
            name: self.name,
            trace: self.trace,
        }
    }

    /// Invokes `hook` with this fault for side-effecting observation, then
    /// returns the fault unchanged.
    ///
    /// The hook sees the fault read-only; it cannot alter identity or fields.
    #[inline]
    pub fn tap<O>(self, hook: &O) -> Self
    where
        O: OnFault<S>,
    {
        hook.notify(&self);
        self
    }

    /// Wraps this fault into the fault arm of an [`Outcome`].
    ///
    /// # Examples
    ///
    /// ```
    /// use fault_rail::types::Fault;
    ///
    /// let (fault, value) = Fault::new("DENIED", "no credentials").result::<()>();
    /// assert_eq!(fault.unwrap().label(), "DENIED");
    /// assert!(value.is_none());
    /// ```
    #[inline]
    pub fn result<T>(self) -> Outcome<T, S> {
        (Some(self), None)
    }
}

impl Fault<Panic> {
    /// Creates a fault with a synthesized source.
    ///
    /// When the caller has no causal value, a [`LabelError`] whose message
    /// equals the label fills the source slot, so the source is never absent.
    ///
    /// # Examples
    ///
    /// ```
    /// use fault_rail::types::{Fault, LabelError};
    ///
    /// let fault = Fault::labeled("VALIDATION_ERROR");
    /// assert_eq!(fault.message(), "VALIDATION_ERROR");
    /// assert!(fault.source().downcast_ref::<LabelError>().is_some());
    /// ```
    pub fn labeled<L: Into<Cow<'static, str>>>(label: L) -> Self {
        let label = label.into();
        let source: Panic = Box::new(LabelError::new(label.clone()));
        Self {
            message: label.to_string(),
            source,
            cause: None,
            name: Some(type_name::<LabelError>()),
            trace: captured_trace(),
            label,
        }
    }

    /// Normalizes a native error into a fault, preserving its diagnostics.
    ///
    /// The error's display text becomes the message, its [`source`] chain head
    /// is rendered into `cause`, its concrete type name is recorded, and a
    /// backtrace is captured when enabled. The error value itself is retained
    /// intact as the fault's source and can be recovered by downcasting.
    ///
    /// [`source`]: std::error::Error::source
    pub fn from_error<E, L>(error: E, label: L) -> Self
    where
        E: std::error::Error + Send + 'static,
        L: Into<Cow<'static, str>>,
    {
        let message = error.to_string();
        let cause = std::error::Error::source(&error).map(ToString::to_string);
        Self {
            label: label.into(),
            source: Box::new(error),
            message,
            cause,
            name: Some(type_name::<E>()),
            trace: captured_trace(),
        }
    }

    /// Normalizes a caught panic payload into a fault.
    ///
    /// String payloads (`&str` from `panic!("...")`, `String` from a formatted
    /// panic) become the message; any other payload degrades to an empty
    /// message. The payload is retained intact either way, so nothing is lost.
    /// This constructor never panics itself.
    pub fn from_panic<L: Into<Cow<'static, str>>>(payload: Panic, label: L) -> Self {
        let message = if let Some(text) = payload.downcast_ref::<&'static str>() {
            (*text).to_string()
        } else if let Some(text) = payload.downcast_ref::<String>() {
            text.clone()
        } else {
            String::new()
        };
        Self {
            label: label.into(),
            source: payload,
            message,
            cause: None,
            name: None,
            trace: captured_trace(),
        }
    }

    /// Normalizes an arbitrary serializable value into a fault.
    ///
    /// The message is the value's JSON text. Serialization failure (a map
    /// with non-string keys, for instance) is caught and degrades to an empty
    /// message rather than propagating; the value is retained intact as the
    /// source either way.
    ///
    /// # Examples
    ///
    /// ```
    /// use fault_rail::types::Fault;
    ///
    /// let fault = Fault::from_value(serde_json::json!({"code": 42}), "API_ERROR");
    /// assert_eq!(fault.message(), r#"{"code":42}"#);
    ///
    /// let mut table = std::collections::BTreeMap::new();
    /// table.insert((1, 2), "diagonal");
    /// let fault = Fault::from_value(table, "TABLE_ERROR");
    /// assert_eq!(fault.message(), "");
    /// ```
    pub fn from_value<V, L>(value: V, label: L) -> Self
    where
        V: Serialize + Send + 'static,
        L: Into<Cow<'static, str>>,
    {
        let message = serde_json::to_string(&value).unwrap_or_default();
        Self {
            label: label.into(),
            source: Box::new(value),
            message,
            cause: None,
            name: Some(type_name::<V>()),
            trace: captured_trace(),
        }
    }
}

impl<S> Debug for Fault<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Fault")
            .field("label", &self.label)
            .field("message", &self.message)
            .field("cause", &self.cause)
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

impl<S> Display for Fault<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.message.is_empty() {
            write!(f, "{}", self.label)
        } else {
            write!(f, "{}: {}", self.label, self.message)
        }
    }
}

impl<S> std::error::Error for Fault<S> {}

impl<S> Serialize for Fault<S> {
    /// Serializes the diagnostic fields; the source is opaque and skipped.
    fn serialize<Ser>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error>
    where
        Ser: Serializer,
    {
        let mut state = serializer.serialize_struct("Fault", 5)?;
        state.serialize_field("label", &self.label)?;
        state.serialize_field("message", &self.message)?;
        state.serialize_field("cause", &self.cause)?;
        state.serialize_field("name", &self.name)?;
        state.serialize_field("trace", &self.trace)?;
        state.end()
    }
}

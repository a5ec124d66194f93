//! Error hierarchy for the Strata workspace.
//!
//! Every fallible Strata component constructs one of these types and
//! propagates it up through `Result` — this module only provides the
//! vocabulary; it never recovers, retries, or interprets anything.
//!
//! The hierarchy is nominal: handlers decide behavior by the concrete type
//! they accept, not by inspecting a discriminant. [`BaseError`] is the root
//! and [`Interrupted`] derives from it directly, bypassing [`Error`], so
//! code that deals in `Result<_, Error>` can never absorb a cancellation
//! signal. New error kinds are declared with [`make_error!`].

use core::fmt;

/// Default exit status attached to an error when the failure site does not
/// specify one. The ultimate caller maps `status` to a process exit code.
pub const DEFAULT_FAILURE_STATUS: u32 = 1;

/// Result alias for operations that fail with an ordinary [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

// ─── FormatOrString ─────────────────────────────────────────────────

/// Uniform constructor argument for error messages.
///
/// Holds a single rendered string. Failure sites pass a literal, an owned
/// `String`, or the value of `format_args!` — whichever is at hand — and
/// constructors accept `impl Into<FormatOrString>`, so messages never need
/// to be pre-rendered by the caller.
///
/// # Example
///
/// ```rust
/// use strata_common::error::Error;
///
/// let by_literal = Error::new("store is read-only");
/// let by_format = Error::new(format_args!("missing file: {}", "foo.txt"));
/// assert_eq!(by_format.message(), "missing file: foo.txt");
/// # assert_eq!(by_literal.message(), "store is read-only");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatOrString {
    s: String,
}

impl FormatOrString {
    /// The rendered text.
    pub fn as_str(&self) -> &str {
        &self.s
    }

    /// Consume into the rendered text.
    pub fn into_string(self) -> String {
        self.s
    }
}

impl From<String> for FormatOrString {
    fn from(s: String) -> Self {
        Self { s }
    }
}

impl From<&str> for FormatOrString {
    fn from(s: &str) -> Self {
        Self { s: s.to_owned() }
    }
}

impl From<fmt::Arguments<'_>> for FormatOrString {
    fn from(args: fmt::Arguments<'_>) -> Self {
        Self { s: args.to_string() }
    }
}

impl fmt::Display for FormatOrString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.s)
    }
}

// ─── BaseError ──────────────────────────────────────────────────────

/// Root of the error hierarchy.
///
/// Carries the rendered message, an accumulable context prefix, and an
/// advisory exit status. Handlers should generally deal in [`Error`]
/// instead — [`Interrupted`] also derives from `BaseError`, and accepting
/// the root type means intentionally including cancellation.
#[derive(Debug, Clone)]
pub struct BaseError {
    prefix: String,
    message: String,
    /// Advisory exit status. Travels with the error unmodified unless a
    /// handler explicitly overrides it.
    pub status: u32,
}

impl BaseError {
    /// Construct with [`DEFAULT_FAILURE_STATUS`].
    ///
    /// The message is rendered immediately; construction never fails.
    pub fn new(msg: impl Into<FormatOrString>) -> Self {
        Self::with_status(msg, DEFAULT_FAILURE_STATUS)
    }

    /// Construct with an explicit exit status.
    pub fn with_status(msg: impl Into<FormatOrString>, status: u32) -> Self {
        Self {
            prefix: String::new(),
            message: msg.into().into_string(),
            status,
        }
    }

    /// The fully rendered message: accumulated prefix, then the original
    /// message text. Suitable for direct display.
    pub fn message(&self) -> String {
        format!("{}{}", self.prefix, self.message)
    }

    /// The accumulated context prefix. Empty until [`add_prefix`] is called.
    ///
    /// [`add_prefix`]: BaseError::add_prefix
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Prepend context to the prefix and return the same error for
    /// chaining.
    ///
    /// Each caller on the propagation path attaches increasingly outer
    /// context, so the final message reads outermost-first:
    /// `"while building pkg: while fetching src: <original message>"`.
    /// Prefix strings carry their own trailing separator; accumulation is
    /// pure concatenation, with no depth limit.
    ///
    /// # Example
    ///
    /// ```rust
    /// use strata_common::error::Error;
    ///
    /// let mut e = Error::new("connection reset");
    /// e.add_prefix("while fetching src: ").add_prefix("while building pkg: ");
    /// assert_eq!(e.message(), "while building pkg: while fetching src: connection reset");
    /// ```
    pub fn add_prefix(&mut self, msg: impl Into<FormatOrString>) -> &mut Self {
        let mut prefix = msg.into().into_string();
        prefix.push_str(&self.prefix);
        self.prefix = prefix;
        self
    }
}

impl fmt::Display for BaseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.prefix, self.message)
    }
}

impl std::error::Error for BaseError {}

// ─── make_error! ────────────────────────────────────────────────────

/// Declare a new error kind deriving from `BaseError` or a descendant.
///
/// The generated type wraps its parent and forwards the uniform
/// `(message, status)` constructor contract to it unchanged, so every kind
/// in the hierarchy is constructed the same way. It also gets `Deref` to
/// the parent (making [`message`], [`prefix`], [`add_prefix`] and `status`
/// available everywhere), `Display`, `std::error::Error`, and upcast
/// `From` conversions into the parent and into [`BaseError`].
///
/// [`message`]: BaseError::message
/// [`prefix`]: BaseError::prefix
/// [`add_prefix`]: BaseError::add_prefix
///
/// # Example
///
/// ```rust
/// use strata_common::make_error;
/// use strata_common::error::{DEFAULT_FAILURE_STATUS, Error};
///
/// make_error! {
///     /// Failure while fetching a source artifact.
///     FetchError, Error
/// }
///
/// let e = FetchError::new("unexpected end of stream");
/// assert_eq!(e.status, DEFAULT_FAILURE_STATUS);
/// let upcast: Error = e.into();
/// assert_eq!(upcast.message(), "unexpected end of stream");
/// ```
#[macro_export]
macro_rules! make_error {
    ($(#[$attr:meta])* $name:ident, BaseError) => {
        $(#[$attr])*
        #[derive(Debug, Clone)]
        pub struct $name {
            base: $crate::error::BaseError,
        }

        impl $name {
            /// Construct with the default failure status.
            pub fn new(msg: impl ::core::convert::Into<$crate::error::FormatOrString>) -> Self {
                Self { base: $crate::error::BaseError::new(msg) }
            }

            /// Construct with an explicit exit status.
            pub fn with_status(
                msg: impl ::core::convert::Into<$crate::error::FormatOrString>,
                status: u32,
            ) -> Self {
                Self { base: $crate::error::BaseError::with_status(msg, status) }
            }
        }

        impl ::core::ops::Deref for $name {
            type Target = $crate::error::BaseError;
            fn deref(&self) -> &Self::Target {
                &self.base
            }
        }

        impl ::core::ops::DerefMut for $name {
            fn deref_mut(&mut self) -> &mut Self::Target {
                &mut self.base
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                ::core::fmt::Display::fmt(&self.base, f)
            }
        }

        impl ::std::error::Error for $name {}

        impl ::core::convert::From<$name> for $crate::error::BaseError {
            fn from(err: $name) -> Self {
                err.base
            }
        }
    };
    ($(#[$attr:meta])* $name:ident, $parent:ident) => {
        $(#[$attr])*
        #[derive(Debug, Clone)]
        pub struct $name {
            base: $parent,
        }

        impl $name {
            /// Construct with the default failure status.
            pub fn new(msg: impl ::core::convert::Into<$crate::error::FormatOrString>) -> Self {
                Self { base: <$parent>::new(msg) }
            }

            /// Construct with an explicit exit status.
            pub fn with_status(
                msg: impl ::core::convert::Into<$crate::error::FormatOrString>,
                status: u32,
            ) -> Self {
                Self { base: <$parent>::with_status(msg, status) }
            }
        }

        impl ::core::ops::Deref for $name {
            type Target = $parent;
            fn deref(&self) -> &Self::Target {
                &self.base
            }
        }

        impl ::core::ops::DerefMut for $name {
            fn deref_mut(&mut self) -> &mut Self::Target {
                &mut self.base
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                ::core::fmt::Display::fmt(&self.base, f)
            }
        }

        impl ::std::error::Error for $name {}

        impl ::core::convert::From<$name> for $parent {
            fn from(err: $name) -> Self {
                err.base
            }
        }

        impl ::core::convert::From<$name> for $crate::error::BaseError {
            fn from(err: $name) -> Self {
                ::core::convert::Into::into(err.base)
            }
        }
    };
}

make_error! {
    /// An ordinary, recoverable application failure.
    ///
    /// The conventional type for `Result` signatures across the workspace.
    /// Accepting `Error` never includes [`Interrupted`] — that signal
    /// derives from [`BaseError`] directly and has no conversion into
    /// `Error`.
    Error, BaseError
}

make_error! {
    /// Control-flow signal raised when the user interrupts an operation.
    ///
    /// A sibling of [`Error`] under [`BaseError`]: pipelines that deal in
    /// `Result<_, Error>` cannot intercept it. Handle it only at points
    /// that intentionally deal with cancellation.
    Interrupted, BaseError
}

// ─── SysError ───────────────────────────────────────────────────────

/// An operating-system-level failure.
///
/// Captures the current OS error code at construction time and folds its
/// textual description into the message, so `"opening '/etc/passwd'"`
/// renders as `"opening '/etc/passwd': Permission denied (os error 13)"`.
///
/// Construct it *immediately* after the failing call — the code is read
/// from the thread's last-OS-error state, which the next fallible
/// operation overwrites.
///
/// # Example
///
/// ```rust,no_run
/// use strata_common::error::SysError;
///
/// let fd = unsafe { libc::open(c"/no/such/file".as_ptr(), libc::O_RDONLY) };
/// if fd == -1 {
///     let err = SysError::new("opening '/no/such/file'");
///     assert_eq!(err.errno, libc::ENOENT);
/// }
/// ```
#[derive(Debug, Clone)]
pub struct SysError {
    base: Error,
    /// OS error code captured at construction time.
    pub errno: i32,
}

impl SysError {
    /// Construct from the current OS error state, with
    /// [`DEFAULT_FAILURE_STATUS`].
    ///
    /// Reading the OS error code is the first thing this does, before the
    /// message is rendered or anything allocates.
    pub fn new(msg: impl Into<FormatOrString>) -> Self {
        let os_err = std::io::Error::last_os_error();
        let errno = os_err.raw_os_error().unwrap_or(0);
        let msg = msg.into();
        Self {
            base: Error::new(format!("{}: {}", msg.as_str(), os_err)),
            errno,
        }
    }
}

impl core::ops::Deref for SysError {
    type Target = Error;
    fn deref(&self) -> &Self::Target {
        &self.base
    }
}

impl core::ops::DerefMut for SysError {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.base
    }
}

impl fmt::Display for SysError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.base, f)
    }
}

impl std::error::Error for SysError {}

impl From<SysError> for Error {
    fn from(err: SysError) -> Self {
        err.base
    }
}

impl From<SysError> for BaseError {
    fn from(err: SysError) -> Self {
        err.base.into()
    }
}

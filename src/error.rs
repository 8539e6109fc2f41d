use std::{path::Path, path::PathBuf, sync::Arc};

/// An error that can occur in this crate.
///
/// Errors here are purely diagnostic. The public lookup and resolution
/// surfaces never propagate them: a failed candidate is logged and the next
/// source is tried, terminating at the `GMT` fallback. The error type exists
/// so that the internal parsers can say precisely *why* a candidate was
/// rejected.
///
/// # Design
///
/// This crate follows the "One True God Error Type Pattern," where one error
/// type covers every fallible operation. Finer grained error types buy
/// nothing here since every failure is handled the same way: degrade to the
/// next candidate source.
#[derive(Clone, Debug)]
pub struct Error {
    /// The internal representation of an error.
    ///
    /// This is in an `Arc` to make an `Error` cloneable. It embeds a
    /// `std::io::Error`, which isn't cloneable. Clones are also cheap this
    /// way, and the size of `Error` stays at one word.
    inner: Arc<ErrorInner>,
}

#[derive(Debug)]
struct ErrorInner {
    kind: ErrorKind,
    /// The file path, if any, at which the error occurred.
    path: Option<PathBuf>,
}

#[derive(Debug)]
enum ErrorKind {
    /// An ad hoc error message.
    Adhoc(String),
    /// An error from the standard library's I/O routines.
    IO(std::io::Error),
}

impl Error {
    /// Creates a new error value from `core::fmt::Arguments`.
    ///
    /// It is expected to use [`format_args!`](format_args) from Rust's
    /// standard library to create a `core::fmt::Arguments`. Callers should
    /// reach for this through the `err!` macro.
    pub(crate) fn from_args<'a>(message: core::fmt::Arguments<'a>) -> Error {
        let message = match message.as_str() {
            Some(literal) => literal.to_string(),
            None => message.to_string(),
        };
        Error::from(ErrorKind::Adhoc(message))
    }

    /// Creates a new error from the given I/O error.
    pub(crate) fn io(err: std::io::Error) -> Error {
        Error::from(ErrorKind::IO(err))
    }

    /// Creates a new error from the given I/O error with a file path
    /// attached for diagnostic purposes.
    pub(crate) fn fs(path: impl AsRef<Path>, err: std::io::Error) -> Error {
        Error::io(err).path(path)
    }

    /// Attaches the given file path to this error.
    pub(crate) fn path(self, path: impl AsRef<Path>) -> Error {
        let inner = ErrorInner {
            kind: self.inner.kind.clone_or_adhoc(),
            path: Some(path.as_ref().to_path_buf()),
        };
        Error { inner: Arc::new(inner) }
    }
}

impl ErrorKind {
    /// A "clone" of this kind suitable for re-wrapping.
    ///
    /// `std::io::Error` isn't `Clone`, so an I/O kind degrades to an ad hoc
    /// rendering of itself. Fine for diagnostics, which is all this type is
    /// for.
    fn clone_or_adhoc(&self) -> ErrorKind {
        match *self {
            ErrorKind::Adhoc(ref msg) => ErrorKind::Adhoc(msg.clone()),
            ErrorKind::IO(ref err) => ErrorKind::Adhoc(err.to_string()),
        }
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Error {
        Error { inner: Arc::new(ErrorInner { kind, path: None }) }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self.inner.kind {
            ErrorKind::Adhoc(_) => None,
            ErrorKind::IO(ref err) => Some(err),
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        if let Some(ref path) = self.inner.path {
            write!(f, "{}: ", path.display())?;
        }
        match self.inner.kind {
            ErrorKind::Adhoc(ref msg) => write!(f, "{msg}"),
            ErrorKind::IO(ref err) => write!(f, "{err}"),
        }
    }
}

/// A simple macro for constructing an ad hoc [`Error`].
macro_rules! err {
    ($($tt:tt)*) => {{
        crate::error::Error::from_args(format_args!($($tt)*))
    }}
}

pub(crate) use err;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adhoc_message() {
        let err = err!("bad {thing}", thing = "magic");
        assert_eq!(err.to_string(), "bad magic");
    }

    #[test]
    fn path_context_prepends() {
        let err = err!("truncated").path("/etc/localtime");
        assert_eq!(err.to_string(), "/etc/localtime: truncated");
    }

    #[test]
    fn error_size() {
        assert_eq!(
            core::mem::size_of::<usize>(),
            core::mem::size_of::<Error>()
        );
    }
}

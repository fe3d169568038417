use thiserror::Error;

macro_rules! format_error {
    // Single string version
    ($msg:expr) => {
        crate::Error::InvalidFormat {
            message: $msg.to_string(),
        }
    };

    // Format string with arguments version
    ($fmt:expr, $($arg:tt)*) => {
        crate::Error::InvalidFormat {
            message: format!($fmt, $($arg)*),
        }
    };
}

/// The generic Error type, which provides coverage for all errors this library can potentially
/// return.
///
/// Only contract violations are errors. A canonical name that is well formed but designates
/// no member (or more than one) is an expected outcome and is reported as `None` by the
/// resolver, never through this type.
///
/// # Error Categories
///
/// ## Contract Violations
/// - [`Error::InvalidFormat`] - Malformed canonical name or invalid member universe
/// - [`Error::NullArgument`] - A required argument was absent
/// - [`Error::RecursionLimit`] - A signature nests deeper than the parser allows
///
/// ## I/O and External Errors
/// - [`Error::FileError`] - Filesystem I/O errors
/// - [`Error::Xml`] - Errors from the XML reader while loading documentation files
///
/// # Examples
///
/// ```rust
/// use docid::{names::parse, Error};
///
/// match parse("K:x") {
///     Ok(query) => println!("Parsed {}", query),
///     Err(Error::InvalidFormat { message }) => eprintln!("Bad name: {}", message),
///     Err(e) => eprintln!("Other error: {}", e),
/// }
/// ```
#[derive(Error, Debug)]
pub enum Error {
    /// The input does not follow the canonical name grammar, or a member universe was built
    /// from invalid module slots.
    ///
    /// The message names the violated rule and, where an input string is involved, echoes it
    /// verbatim.
    #[error("Invalid format - {message}")]
    InvalidFormat {
        /// The message to be printed for the InvalidFormat error
        message: String,
    },

    /// A required argument was absent.
    ///
    /// The associated value is the name of the parameter.
    #[error("Argument '{0}' cannot be null")]
    NullArgument(&'static str),

    /// Recursion limit reached.
    ///
    /// Nested generic arguments in a parameter signature are parsed recursively. To prevent
    /// stack exhaustion on hostile input, a maximum depth is enforced.
    ///
    /// The associated value shows the recursion limit that was reached.
    #[error("Reach the maximum recursion level allowed - {0}")]
    RecursionLimit(usize),

    /// File I/O error.
    #[error("{0}")]
    FileError(#[from] std::io::Error),

    /// Error from the XML reader while loading a documentation file.
    #[error("{0}")]
    Xml(#[from] quick_xml::Error),

    /// Generic error for miscellaneous failures.
    #[error("{0}")]
    Error(String),
}

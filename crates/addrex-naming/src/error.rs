use miette::Diagnostic;
use thiserror::Error;

/// Errors raised while deriving or decoding accessor names.
#[derive(Debug, Error, Diagnostic, Clone, PartialEq, Eq)]
pub enum NamingError {
    #[error("Qualified name `{0}` contains an empty segment")]
    #[diagnostic(code("NAME-001"), help("Qualified names look like `outer::inner::name`"))]
    EmptySegment(String),

    #[error("Segment `{segment}` of `{name}` cannot be used in an exported accessor name")]
    #[diagnostic(
        code("NAME-002"),
        help("Segments must be C identifiers that start with a letter, contain no `__` and do not end with `_`")
    )]
    InvalidSegment { segment: String, name: String },

    #[error("Target `{name}` with signature `{signature}` is listed more than once")]
    #[diagnostic(code("NAME-003"))]
    DuplicateTarget { name: String, signature: String },

    #[error("Accessor `{accessor}` would be exported for both `{first}` and `{second}`")]
    #[diagnostic(code("NAME-004"))]
    Collision {
        accessor: String,
        first: String,
        second: String,
    },

    #[error("`{0}` is not a well-formed accessor name")]
    #[diagnostic(code("NAME-005"), help("Accessor names look like `get_outer__inner__name_address`"))]
    MalformedAccessor(String),
}

pub type NamingResult<T> = Result<T, NamingError>;

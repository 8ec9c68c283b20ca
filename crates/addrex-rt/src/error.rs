use addrex_naming::NamingError;
use miette::Diagnostic;
use thiserror::Error;

/// Errors from looking up or validating bindings.
#[derive(Debug, Error, Diagnostic, Clone, PartialEq, Eq)]
pub enum ResolveError {
    #[error("No accessor named `{0}` is exported")]
    #[diagnostic(code("RT-001"))]
    UnknownAccessor(String),

    #[error("No binding exports `{0}`")]
    #[diagnostic(code("RT-002"))]
    UnknownTarget(String),

    #[error("Accessor `{0}` returned a null address")]
    #[diagnostic(code("RT-003"))]
    NullAddress(String),

    #[error("Binding for `{target}` is exported as `{accessor}` but its name derives to `{expected}`")]
    #[diagnostic(code("RT-004"), help("Rename the accessor to the derived name"))]
    Mismatch {
        target: String,
        accessor: String,
        expected: String,
    },

    #[error("Accessor `{0}` is exported more than once")]
    #[diagnostic(code("RT-005"))]
    DuplicateAccessor(String),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Naming(#[from] NamingError),
}

pub type ResolveResult<T> = Result<T, ResolveError>;

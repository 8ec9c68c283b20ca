use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum CodegenError {
    #[error("Cannot split signature `{0}` into return and parameter types")]
    #[diagnostic(code("CODEGEN-001"))]
    MalformedSignature(String),

    #[error("Type `{ty}` in `{signature}` has no ctypes equivalent")]
    #[diagnostic(
        code("CODEGEN-002"),
        help("Only scalar, fixed-width integer and pointer types can be declared on the Python side")
    )]
    UnsupportedType { ty: String, signature: String },

    #[error("Failed to write {path}")]
    #[diagnostic(code("CODEGEN-003"))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type CodegenResult<T> = Result<T, CodegenError>;

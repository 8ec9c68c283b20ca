use std::process::ExitStatus;

use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

/// Errors from reading clang output or running clang.
#[derive(Debug, Error, Diagnostic)]
pub enum ClangError {
    #[error("AST dump is empty")]
    #[diagnostic(code("CLANG-001"), help("Check that clang was given at least one header"))]
    Empty,

    #[error("Unexpected indentation on line {line}")]
    #[diagnostic(code("CLANG-002"))]
    Indentation {
        line: usize,
        #[source_code]
        src: String,
        #[label("node is nested deeper than its parent")]
        span: SourceSpan,
    },

    #[error("AST dump has more than one root node (line {line})")]
    #[diagnostic(code("CLANG-003"), help("Pass the output of a single translation unit"))]
    MultipleRoots { line: usize },

    #[error("Failed to run `{exe}`")]
    #[diagnostic(code("CLANG-004"), help("Install clang or point `--clang-exe` at it"))]
    Spawn {
        exe: String,
        #[source]
        source: std::io::Error,
    },

    #[error("`{command}` exited with {status}")]
    #[diagnostic(code("CLANG-005"))]
    Failed {
        command: String,
        status: ExitStatus,
        #[help]
        stderr: String,
    },
}

pub type ClangResult<T> = Result<T, ClangError>;

use std::path::PathBuf;

use addrex_clang::ClangError;
use addrex_codegen::CodegenError;
use addrex_naming::NamingError;
use miette::Diagnostic;
use thiserror::Error;

/// Errors surfaced by the `addrex` binary.
#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    #[error("I/O error while {operation} '{path}'")]
    #[diagnostic(code("CLI-001"))]
    IoError {
        path: PathBuf,
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid configuration in '{path}'")]
    #[diagnostic(code("CLI-002"), help("See the `[module]`, `[clang]` and `[naming]` tables"))]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("No headers to scan")]
    #[diagnostic(
        code("CLI-003"),
        help("Pass `.h`/`.hpp`/`.hxx` files, list them under `[module] headers` or use `--ast-dump`")
    )]
    NoHeaders,

    #[error("Cannot tell which module to generate")]
    #[diagnostic(code("CLI-004"), help("Pass `-m NAME` or set `[module] name`"))]
    MissingModuleName,

    #[error("{count} declaration(s) cannot be given an accessor name")]
    #[diagnostic(code("CLI-005"), help("Rename them or drop `--strict` to skip them"))]
    UnnameableTargets {
        count: usize,
        #[related]
        errors: Vec<NamingError>,
    },

    #[error(transparent)]
    #[diagnostic(transparent)]
    Naming(#[from] NamingError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Clang(#[from] ClangError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Codegen(#[from] CodegenError),
}

pub fn convert_io_error(error: std::io::Error, path: PathBuf, operation: &str) -> CliError {
    CliError::IoError {
        path,
        operation: operation.to_string(),
        source: error,
    }
}

//! Declaration discovery from clang AST dumps.
//!
//! The pipeline is [`parse_ast_dump`] -> [`cleanup`] -> [`collect_targets`];
//! [`discover`] runs all three. [`ClangDriver`] produces the dump from
//! headers and builds the generated shim.

pub mod cleanup;
pub mod driver;
pub mod error;
pub mod extract;
pub mod node;
pub mod parse;

pub use cleanup::{cleanup, CleanupOptions};
pub use driver::ClangDriver;
pub use error::{ClangError, ClangResult};
pub use extract::collect_targets;
pub use node::{Detail, Node, RecordTag};
pub use parse::parse_ast_dump;

use addrex_naming::Target;

/// Parses and cleans a dump, returning the cleaned tree (if anything
/// survived) and the targets found in it.
pub fn discover(dump: &str, options: &CleanupOptions) -> ClangResult<(Option<Node>, Vec<Target>)> {
    let root = parse_ast_dump(dump)?;
    log::debug!("Parsed AST dump with {} nodes", root.count());
    let cleaned = cleanup(root, options);
    let targets = cleaned.as_ref().map(collect_targets).unwrap_or_default();
    log::info!("Found {} exportable functions", targets.len());
    Ok((cleaned, targets))
}

use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::{ClangError, ClangResult};

pub const DEFAULT_EXE: &str = "clang++";
pub const DEFAULT_DUMP_FLAGS: &str = "-Xclang -ast-dump -fsyntax-only -fno-diagnostics-color";
pub const DEFAULT_BUILD_FLAGS: &str = "-shared -fPIC";

/// How clang is invoked for dumping declarations and building the shim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClangDriver {
    pub exe: String,
    pub dump_flags: String,
    pub build_flags: String,
    /// Appended to both dump and build invocations (include paths, `-std=`, ...).
    pub extra_flags: String,
}

impl Default for ClangDriver {
    fn default() -> Self {
        Self {
            exe: DEFAULT_EXE.to_string(),
            dump_flags: DEFAULT_DUMP_FLAGS.to_string(),
            build_flags: DEFAULT_BUILD_FLAGS.to_string(),
            extra_flags: String::new(),
        }
    }
}

impl ClangDriver {
    /// Argument list for the AST dump of `headers`.
    pub fn dump_args(&self, headers: &[PathBuf]) -> Vec<String> {
        let mut args = split_flags(&self.dump_flags);
        args.extend(split_flags(&self.extra_flags));
        args.extend(headers.iter().map(|h| h.display().to_string()));
        args
    }

    /// Argument list for compiling `sources` into the shared library `output`.
    pub fn build_args(&self, sources: &[PathBuf], output: &Path) -> Vec<String> {
        let mut args = split_flags(&self.build_flags);
        args.extend(split_flags(&self.extra_flags));
        args.extend(sources.iter().map(|s| s.display().to_string()));
        args.push("-o".to_string());
        args.push(output.display().to_string());
        args
    }

    /// Runs clang over `headers` and returns the textual AST dump.
    pub fn dump(&self, headers: &[PathBuf]) -> ClangResult<String> {
        let output = self.run(self.dump_args(headers))?;
        Ok(String::from_utf8_lossy(&output).into_owned())
    }

    /// Compiles `sources` (which should include the generated shim) into `output`.
    pub fn build(&self, sources: &[PathBuf], output: &Path) -> ClangResult<()> {
        self.run(self.build_args(sources, output)).map(|_| ())
    }

    fn run(&self, args: Vec<String>) -> ClangResult<Vec<u8>> {
        let command = format!("{} {}", self.exe, args.join(" "));
        log::debug!("Running {}", command);
        let output = Command::new(&self.exe)
            .args(&args)
            .output()
            .map_err(|source| ClangError::Spawn {
                exe: self.exe.clone(),
                source,
            })?;
        if !output.status.success() {
            return Err(ClangError::Failed {
                command,
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            });
        }
        Ok(output.stdout)
    }
}

fn split_flags(flags: &str) -> Vec<String> {
    flags.split_whitespace().map(str::to_string).collect()
}

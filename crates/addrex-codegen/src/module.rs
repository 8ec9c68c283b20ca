use std::fs;
use std::path::{Path, PathBuf};

use addrex_naming::BindingName;

use crate::cxx::emit_cpp;
use crate::error::{CodegenError, CodegenResult};
use crate::python::emit_python;

/// Prefix shared by the shim source and the shared library built from it.
pub const SHIM_PREFIX: &str = "addrex_";

/// What is being generated and which headers declare the targets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleSpec {
    /// Python module name, e.g. `libfoo`.
    pub name: String,
    /// Headers included by the shim, spelled as they should appear in `#include`.
    pub headers: Vec<String>,
}

impl ModuleSpec {
    pub fn new(name: impl Into<String>, headers: Vec<String>) -> Self {
        Self {
            name: name.into(),
            headers,
        }
    }

    /// Name of the shared library without platform prefix or extension.
    pub fn library_name(&self) -> String {
        format!("{}{}", SHIM_PREFIX, self.name)
    }

    pub fn cpp_file(&self) -> String {
        format!("{}{}.cpp", SHIM_PREFIX, self.name)
    }

    pub fn python_file(&self) -> String {
        format!("{}.py", self.name)
    }

    /// Platform file name of the shared library.
    pub fn library_file(&self) -> String {
        shared_library_file(&self.library_name())
    }
}

/// `lib<name>.so`, `lib<name>.dylib` or `<name>.dll` for the host.
pub fn shared_library_file(name: &str) -> String {
    if cfg!(target_os = "windows") {
        format!("{}.dll", name)
    } else if cfg!(target_os = "macos") {
        format!("lib{}.dylib", name)
    } else {
        format!("lib{}.so", name)
    }
}

/// Generated sources for one module.
#[derive(Debug, Clone)]
pub struct GeneratedModule {
    pub cpp_file: String,
    pub cpp_source: String,
    pub python_file: String,
    pub python_source: String,
    /// Symbols that have a C++ accessor but no Python wrapper.
    pub skipped: Vec<String>,
}

impl GeneratedModule {
    /// Writes both sources into `dir`, returning their paths.
    pub fn write_to(&self, dir: &Path) -> CodegenResult<(PathBuf, PathBuf)> {
        let cpp_path = dir.join(&self.cpp_file);
        let python_path = dir.join(&self.python_file);
        write_file(&cpp_path, &self.cpp_source)?;
        write_file(&python_path, &self.python_source)?;
        Ok((cpp_path, python_path))
    }
}

fn write_file(path: &Path, contents: &str) -> CodegenResult<()> {
    log::info!("Creating {}", path.display());
    fs::write(path, contents).map_err(|source| CodegenError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Emits the C++ shim and the Python module for `bindings`.
pub fn generate(module: &ModuleSpec, bindings: &[BindingName]) -> GeneratedModule {
    let cpp_source = emit_cpp(module, bindings);
    let (python_source, skipped) = emit_python(module, bindings);
    GeneratedModule {
        cpp_file: module.cpp_file(),
        cpp_source,
        python_file: module.python_file(),
        python_source,
        skipped,
    }
}

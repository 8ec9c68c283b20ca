//! Source emitters for exported function addresses.
//!
//! For each named binding two artifacts are produced: a C++ translation unit
//! whose `extern "C"` accessors return the target's address as `intptr_t`,
//! and a Python module that loads the built library, calls each accessor and
//! turns the address into a ctypes function object.

pub mod ctype;
pub mod cxx;
pub mod error;
pub mod module;
pub mod python;

pub use ctype::{function_pointer_type, split_signature, CType, FunctionType};
pub use cxx::emit_cpp;
pub use error::{CodegenError, CodegenResult};
pub use module::{generate, shared_library_file, GeneratedModule, ModuleSpec, SHIM_PREFIX};
pub use python::{emit_python, python_name};

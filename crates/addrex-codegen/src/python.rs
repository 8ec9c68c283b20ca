use std::fmt::Write;

use addrex_naming::BindingName;

use crate::ctype::FunctionType;
use crate::module::ModuleSpec;

const MODULE_HEADER: &str = r#"
# This Python module `{module}` is generated by addrex. Do not edit.
__all__ = []
import ctypes
import sys


def _load_library(name):
    if sys.platform.startswith('win'):
        return ctypes.cdll.LoadLibrary(f'{name}.dll')
    if sys.platform == 'darwin':
        return ctypes.cdll.LoadLibrary(f'lib{name}.dylib')
    return ctypes.cdll.LoadLibrary(f'lib{name}.so')


_lib = _load_library("{library}")
"#;

/// Python keywords plus the names the module header itself binds.
const RESERVED: &[&str] = &[
    "False", "None", "True", "and", "as", "assert", "async", "await", "break", "class",
    "continue", "def", "del", "elif", "else", "except", "finally", "for", "from", "global",
    "if", "import", "in", "is", "lambda", "nonlocal", "not", "or", "pass", "raise", "return",
    "try", "while", "with", "yield", "ctypes", "sys",
];

/// Python variable for a binding symbol. Reserved words get a trailing `_`,
/// which no symbol can end with.
pub fn python_name(symbol: &str) -> String {
    if RESERVED.contains(&symbol) {
        format!("{}_", symbol)
    } else {
        symbol.to_string()
    }
}

/// Emits the ctypes module that resolves each accessor, calls it and wraps
/// the returned address in a `CFUNCTYPE` of the declared signature.
///
/// Bindings whose types have no ctypes spelling are left out; their symbols
/// are returned alongside the source.
pub fn emit_python(module: &ModuleSpec, bindings: &[BindingName]) -> (String, Vec<String>) {
    let mut out = MODULE_HEADER
        .replace("{module}", &module.name)
        .replace("{library}", &module.library_name());
    let mut skipped = Vec::new();

    for binding in bindings {
        let signature = &binding.target.signature;
        let function_type = match FunctionType::parse(signature) {
            Ok(ty) => ty,
            Err(err) => {
                log::warn!("Not wrapping `{}` for Python: {}", binding.target.name, err);
                skipped.push(binding.symbol.clone());
                continue;
            }
        };
        let _ = write!(
            out,
            r#"

_lib.{accessor}.argtypes = ()
_lib.{accessor}.restype = ctypes.c_void_p
# {signature}
_{symbol}_signature = {cfunctype}
{symbol} = _{symbol}_signature(_lib.{accessor}())
__all__.append("{symbol}")
"#,
            accessor = binding.accessor,
            symbol = python_name(&binding.symbol),
            cfunctype = function_type.cfunctype(),
        );
    }
    (out, skipped)
}

use std::fmt::Write;

use addrex_naming::BindingName;

use crate::ctype::function_pointer_type;
use crate::module::ModuleSpec;

/// Emits the C++ translation unit defining one `extern "C"` accessor per binding.
///
/// Plain targets are taken with `std::addressof`, which needs no type
/// spelling; declaration text names types relative to their own scope and
/// does not compile at global scope. Overload group members need a
/// `static_cast` to their function-pointer type to pick one declaration.
pub fn emit_cpp(module: &ModuleSpec, bindings: &[BindingName]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "// Generated by addrex for module `{}`. Do not edit.", module.name);
    out.push_str("#include <memory>\n#include <cstdint>\n");
    for header in &module.headers {
        let _ = writeln!(out, "#include \"{}\"", header);
    }

    for binding in bindings {
        let path = binding.target.name.cpp_path();
        let signature = &binding.target.signature;
        let address = if binding.is_overload() {
            match function_pointer_type(signature) {
                Ok(pointer) => format!("static_cast<{}>(&{})", pointer, path),
                Err(err) => {
                    log::warn!("{}; taking the address of overloaded `{}` without a cast", err, path);
                    format!("std::addressof({})", path)
                }
            }
        } else {
            format!("std::addressof({})", path)
        };
        let _ = write!(
            out,
            "\nextern \"C\" intptr_t {accessor}() {{\n  /* {signature} */\n  return reinterpret_cast<intptr_t>({address});\n}}\n",
            accessor = binding.accessor,
        );
    }
    out
}

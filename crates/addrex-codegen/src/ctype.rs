//! Declaration signatures and their ctypes spelling.

use crate::error::{CodegenError, CodegenResult};

/// Structural split of `R (P1, P2) trailing`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignatureParts<'a> {
    pub ret: &'a str,
    pub params: Vec<&'a str>,
    /// Text after the parameter list, e.g. `noexcept`.
    pub trailing: &'a str,
}

/// Splits a declaration signature at its outermost parameter list.
pub fn split_signature(signature: &str) -> CodegenResult<SignatureParts<'_>> {
    let malformed = || CodegenError::MalformedSignature(signature.to_string());
    let close = signature.rfind(')').ok_or_else(malformed)?;

    let mut depth = 0i32;
    let mut open = None;
    for (i, c) in signature[..=close].char_indices().rev() {
        match c {
            ')' => depth += 1,
            '(' => {
                depth -= 1;
                if depth == 0 {
                    open = Some(i);
                    break;
                }
            }
            _ => {}
        }
    }
    let open = open.ok_or_else(malformed)?;
    let ret = signature[..open].trim();
    if ret.is_empty() {
        return Err(malformed());
    }

    let inner = signature[open + 1..close].trim();
    let params = if inner.is_empty() || inner == "void" {
        Vec::new()
    } else {
        split_top_level(inner)
    };

    Ok(SignatureParts {
        ret,
        params,
        trailing: signature[close + 1..].trim(),
    })
}

fn split_top_level(list: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0i32;
    let mut start = 0;
    for (i, c) in list.char_indices() {
        match c {
            '(' | '<' | '[' => depth += 1,
            ')' | '>' | ']' => depth -= 1,
            ',' if depth == 0 => {
                parts.push(list[start..i].trim());
                start = i + 1;
            }
            _ => {}
        }
    }
    parts.push(list[start..].trim());
    parts
}

/// `int (int)` -> `int (*)(int)`, the type a `static_cast` needs to pick
/// one overload.
pub fn function_pointer_type(signature: &str) -> CodegenResult<String> {
    let parts = split_signature(signature)?;
    let mut pointer = format!("{} (*)({})", parts.ret, parts.params.join(", "));
    if !parts.trailing.is_empty() {
        pointer.push(' ');
        pointer.push_str(parts.trailing);
    }
    Ok(pointer)
}

/// C types that can cross into ctypes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CType {
    Void,
    Bool,
    Char,
    SChar,
    UChar,
    Short,
    UShort,
    Int,
    UInt,
    Long,
    ULong,
    LongLong,
    ULongLong,
    Float,
    Double,
    LongDouble,
    Int8,
    Int16,
    Int32,
    Int64,
    UInt8,
    UInt16,
    UInt32,
    UInt64,
    Size,
    SSize,
    /// `char *` / `const char *`
    CString,
    /// Any other data pointer.
    Pointer,
}

impl CType {
    pub fn parse(text: &str) -> Option<CType> {
        let text = text.trim();
        if text.ends_with('&') || text == "..." {
            return None;
        }
        if let Some(pointee) = text.strip_suffix('*') {
            let pointee = strip_qualifiers(pointee);
            return Some(if pointee == "char" { CType::CString } else { CType::Pointer });
        }

        let base = strip_qualifiers(text);
        let base = base.strip_prefix("std::").unwrap_or(base.as_str());
        let ty = match base {
            "void" => CType::Void,
            "bool" | "_Bool" => CType::Bool,
            "char" => CType::Char,
            "signed char" => CType::SChar,
            "unsigned char" => CType::UChar,
            "short" | "short int" | "signed short" | "signed short int" => CType::Short,
            "unsigned short" | "unsigned short int" => CType::UShort,
            "int" | "signed" | "signed int" => CType::Int,
            "unsigned" | "unsigned int" => CType::UInt,
            "long" | "long int" | "signed long" | "signed long int" => CType::Long,
            "unsigned long" | "unsigned long int" => CType::ULong,
            "long long" | "long long int" | "signed long long" | "signed long long int" => CType::LongLong,
            "unsigned long long" | "unsigned long long int" => CType::ULongLong,
            "float" => CType::Float,
            "double" => CType::Double,
            "long double" => CType::LongDouble,
            "int8_t" => CType::Int8,
            "int16_t" => CType::Int16,
            "int32_t" => CType::Int32,
            "int64_t" => CType::Int64,
            "uint8_t" => CType::UInt8,
            "uint16_t" => CType::UInt16,
            "uint32_t" => CType::UInt32,
            "uint64_t" => CType::UInt64,
            "size_t" | "uintptr_t" => CType::Size,
            "ssize_t" | "ptrdiff_t" | "intptr_t" => CType::SSize,
            _ => return None,
        };
        Some(ty)
    }

    /// Python expression naming the ctypes type (`None` for void).
    pub fn ctypes(self) -> &'static str {
        match self {
            CType::Void => "None",
            CType::Bool => "ctypes.c_bool",
            CType::Char => "ctypes.c_char",
            CType::SChar => "ctypes.c_byte",
            CType::UChar => "ctypes.c_ubyte",
            CType::Short => "ctypes.c_short",
            CType::UShort => "ctypes.c_ushort",
            CType::Int => "ctypes.c_int",
            CType::UInt => "ctypes.c_uint",
            CType::Long => "ctypes.c_long",
            CType::ULong => "ctypes.c_ulong",
            CType::LongLong => "ctypes.c_longlong",
            CType::ULongLong => "ctypes.c_ulonglong",
            CType::Float => "ctypes.c_float",
            CType::Double => "ctypes.c_double",
            CType::LongDouble => "ctypes.c_longdouble",
            CType::Int8 => "ctypes.c_int8",
            CType::Int16 => "ctypes.c_int16",
            CType::Int32 => "ctypes.c_int32",
            CType::Int64 => "ctypes.c_int64",
            CType::UInt8 => "ctypes.c_uint8",
            CType::UInt16 => "ctypes.c_uint16",
            CType::UInt32 => "ctypes.c_uint32",
            CType::UInt64 => "ctypes.c_uint64",
            CType::Size => "ctypes.c_size_t",
            CType::SSize => "ctypes.c_ssize_t",
            CType::CString => "ctypes.c_char_p",
            CType::Pointer => "ctypes.c_void_p",
        }
    }
}

fn strip_qualifiers(text: &str) -> String {
    text.split_whitespace()
        .filter(|w| !matches!(*w, "const" | "volatile" | "struct" | "enum"))
        .collect::<Vec<_>>()
        .join(" ")
}

/// A signature whose every type has a ctypes spelling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionType {
    pub ret: CType,
    pub params: Vec<CType>,
}

impl FunctionType {
    pub fn parse(signature: &str) -> CodegenResult<Self> {
        let parts = split_signature(signature)?;
        let unsupported = |ty: &str| CodegenError::UnsupportedType {
            ty: ty.to_string(),
            signature: signature.to_string(),
        };
        let ret = CType::parse(parts.ret).ok_or_else(|| unsupported(parts.ret))?;
        let params = parts
            .params
            .iter()
            .map(|&p| match CType::parse(p) {
                Some(CType::Void) | None => Err(unsupported(p)),
                Some(ty) => Ok(ty),
            })
            .collect::<CodegenResult<Vec<_>>>()?;
        Ok(Self { ret, params })
    }

    /// `ctypes.CFUNCTYPE(...)` expression for this type.
    pub fn cfunctype(&self) -> String {
        let mut args = vec![self.ret.ctypes()];
        args.extend(self.params.iter().map(|p| p.ctypes()));
        format!("ctypes.CFUNCTYPE({})", args.join(", "))
    }
}

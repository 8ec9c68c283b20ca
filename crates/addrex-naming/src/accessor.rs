//! Accessor-name derivation.
//!
//! An accessor name is `get_` + the qualified name's segments joined with
//! `__` + `_address`. Overloaded targets additionally carry `___` and a
//! 16-digit hex tag of their signature before the suffix. A segment must
//! start with a letter, contain no `__` and not end with `_`, which keeps
//! every derived name splittable back into exactly one qualified name.

use std::hash::Hasher;

use rustc_hash::FxHasher;

use crate::error::{NamingError, NamingResult};
use crate::qualified::QualifiedName;

pub const ACCESSOR_PREFIX: &str = "get_";
pub const ACCESSOR_SUFFIX: &str = "_address";
pub const SEPARATOR: &str = "__";
pub const OVERLOAD_SEPARATOR: &str = "___";
const TAG_LEN: usize = 16;

/// Checks that `segment` can be joined with [`SEPARATOR`] without ambiguity.
pub fn validate_segment(segment: &str) -> NamingResult<()> {
    let invalid = || NamingError::InvalidSegment {
        segment: segment.to_string(),
        name: segment.to_string(),
    };
    let mut chars = segment.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() => {}
        _ => return Err(invalid()),
    }
    if !chars.all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Err(invalid());
    }
    if segment.contains(SEPARATOR) || segment.ends_with('_') {
        return Err(invalid());
    }
    Ok(())
}

/// `ns::ns2::bar` -> `get_ns__ns2__bar_address`.
pub fn accessor_name(name: &QualifiedName) -> NamingResult<String> {
    Ok(accessor_for_symbol(&name.mangled()?))
}

/// Wraps an already mangled (and possibly tagged) symbol in prefix and suffix.
pub fn accessor_for_symbol(symbol: &str) -> String {
    format!("{ACCESSOR_PREFIX}{symbol}{ACCESSOR_SUFFIX}")
}

/// Collapses whitespace runs so cosmetic differences in declaration text do
/// not change the tag.
pub fn normalize_signature(signature: &str) -> String {
    signature.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Deterministic tag distinguishing overloads of one qualified name.
pub fn overload_tag(signature: &str) -> String {
    let mut hasher = FxHasher::default();
    hasher.write(normalize_signature(signature).as_bytes());
    format!("{:016x}", hasher.finish())
}

/// Symbol for an overload: `ns__f___<tag>`.
pub fn tagged_symbol(name: &QualifiedName, signature: &str) -> NamingResult<String> {
    Ok(format!("{}{}{}", name.mangled()?, OVERLOAD_SEPARATOR, overload_tag(signature)))
}

/// Splits an accessor name back into its qualified name and optional overload tag.
pub fn decode_accessor(accessor: &str) -> NamingResult<(QualifiedName, Option<String>)> {
    let malformed = || NamingError::MalformedAccessor(accessor.to_string());
    let body = accessor
        .strip_prefix(ACCESSOR_PREFIX)
        .and_then(|rest| rest.strip_suffix(ACCESSOR_SUFFIX))
        .ok_or_else(malformed)?;

    let (mangled, tag) = match body.rsplit_once(OVERLOAD_SEPARATOR) {
        Some((mangled, tag)) => {
            if tag.len() != TAG_LEN || !tag.chars().all(|c| matches!(c, '0'..='9' | 'a'..='f')) {
                return Err(malformed());
            }
            (mangled, Some(tag.to_string()))
        }
        None => (body, None),
    };

    let segments: Vec<&str> = mangled.split(SEPARATOR).collect();
    for segment in &segments {
        validate_segment(segment).map_err(|_| malformed())?;
    }
    let name = QualifiedName::from_segments(segments).map_err(|_| malformed())?;
    Ok((name, tag))
}

//! Naming for exported function addresses.
//!
//! Every target callable is exposed through one parameterless accessor whose
//! name is derived from the target's qualified name. This crate owns that
//! derivation and the guarantees around it.

pub mod accessor;
pub mod assign;
pub mod error;
pub mod qualified;

pub use accessor::{
    accessor_for_symbol, accessor_name, decode_accessor, normalize_signature, overload_tag,
    validate_segment, ACCESSOR_PREFIX, ACCESSOR_SUFFIX, OVERLOAD_SEPARATOR, SEPARATOR,
};
pub use assign::{assign_names, check_unique, BindingName};
pub use error::{NamingError, NamingResult};
pub use qualified::{QualifiedName, Target, TargetKind, PATH_SEPARATOR};

//! Rust side of the address exporter.
//!
//! [`export_addresses!`] turns a list of `path : "signature"` entries into
//! `#[no_mangle] extern "C"` accessors plus a static [`BindingTable`]
//! describing them. A foreign runtime resolves an accessor
//! by name through its own dynamic loader, calls it, and invokes the target
//! through the returned address.

pub mod binding;
pub mod error;

pub use binding::{fn_from_address, Accessor, Binding, BindingTable};
pub use error::{ResolveError, ResolveResult};

#[doc(hidden)]
pub use paste::paste as __paste;

/// Defines one exported accessor per target and a static table listing them.
///
/// ```ignore
/// addrex_rt::export_addresses! {
///     pub static BINDINGS;
///     foo : "extern \"C\" fn(i32) -> i32";
///     ns::ns2::bar : "extern \"C\" fn(f64) -> f64";
/// }
/// ```
///
/// The accessor for `ns::ns2::bar` is `get_ns__ns2__bar_address`, built from
/// the path segments. [`BindingTable::validate`] additionally rejects
/// segments that would make the name ambiguous.
#[macro_export]
macro_rules! export_addresses {
    (
        $vis:vis static $table:ident;
        $( $first:ident $(:: $rest:ident)* : $signature:literal; )*
    ) => {
        $crate::__paste! {
            $(
                #[no_mangle]
                #[allow(non_snake_case)]
                pub extern "C" fn [<get_ $first $(__ $rest)* _address>]() -> isize {
                    $first $(:: $rest)* as *const () as isize
                }
            )*

            $vis static $table: $crate::BindingTable = {
                const ENTRIES: &[$crate::Binding] = &[
                    $(
                        $crate::Binding {
                            target: concat!(stringify!($first) $(, "::", stringify!($rest))*),
                            signature: $signature,
                            accessor: concat!("get_", stringify!($first) $(, "__", stringify!($rest))*, "_address"),
                            get: [<get_ $first $(__ $rest)* _address>],
                        },
                    )*
                ];
                $crate::BindingTable::new(ENTRIES)
            };
        }
    };
}

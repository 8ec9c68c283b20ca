//! Sample library whose functions are reachable from a foreign runtime
//! through exported address accessors.

pub mod ns;

/// `foo(int) -> int`
pub extern "C" fn foo(x: i32) -> i32 {
    x * x + 1
}

addrex_rt::export_addresses! {
    pub static BINDINGS;
    foo : "extern \"C\" fn(i32) -> i32";
    ns::ns2::bar : "extern \"C\" fn(f64) -> f64";
    ns::BarCls::fun : "extern \"C\" fn() -> i32";
}

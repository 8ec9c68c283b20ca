pub mod ns2 {
    pub extern "C" fn bar(x: f64) -> f64 {
        x / 2.0 + 0.25
    }
}

/// A type whose only exported member is an associated function.
pub struct BarCls;

impl BarCls {
    pub extern "C" fn fun() -> i32 {
        42
    }
}

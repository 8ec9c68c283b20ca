use std::thread;

use addrex_rt::{export_addresses, fn_from_address, BindingTable};

pub mod geometry {
    pub extern "C" fn square(x: f64) -> f64 {
        x * x
    }

    pub mod angles {
        pub extern "C" fn to_degrees(radians: f64) -> f64 {
            radians.to_degrees()
        }
    }
}

export_addresses! {
    pub static GEOMETRY;
    geometry::square : "extern \"C\" fn(f64) -> f64";
    geometry::angles::to_degrees : "extern \"C\" fn(f64) -> f64";
}

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn table() -> &'static BindingTable {
    &GEOMETRY
}

#[test]
fn repeated_calls_return_the_same_address() {
    init_logging();
    let first = get_geometry__square_address();
    for _ in 0..100 {
        assert_eq!(get_geometry__square_address(), first);
    }
}

#[test]
fn accessors_agree_across_threads() {
    init_logging();
    let expected: Vec<isize> = table().iter().map(|b| b.address()).collect();
    thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| scope.spawn(|| table().iter().map(|b| b.address()).collect::<Vec<_>>()))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}

#[test]
fn invoking_through_the_address_matches_direct_calls() {
    init_logging();
    for binding in table() {
        let f: extern "C" fn(f64) -> f64 = unsafe { fn_from_address(binding.address()) };
        let direct = match binding.target {
            "geometry::square" => geometry::square(1.5),
            "geometry::angles::to_degrees" => geometry::angles::to_degrees(1.5),
            other => panic!("unexpected target {}", other),
        };
        assert_eq!(f(1.5), direct);
    }
}

#[test]
fn table_is_consistent_with_naming() {
    init_logging();
    table().validate().unwrap();
    assert_eq!(
        table().by_target("geometry::angles::to_degrees").map(|b| b.accessor),
        Some("get_geometry__angles__to_degrees_address")
    );
}

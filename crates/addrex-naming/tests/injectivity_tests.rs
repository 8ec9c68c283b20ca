use std::collections::HashMap;

use addrex_naming::{accessor_name, assign_names, decode_accessor, QualifiedName, Target};

const SEGMENTS: &[&str] = &["a", "b", "a_b", "b_a", "ns", "ns2", "x1", "Bar_Cls"];

// Every qualified name of depth 1..=3 built from SEGMENTS.
fn all_names() -> Vec<QualifiedName> {
    let mut paths: Vec<Vec<&str>> = SEGMENTS.iter().map(|s| vec![*s]).collect();
    let mut frontier = paths.clone();
    for _ in 1..3 {
        let mut next = Vec::new();
        for path in &frontier {
            for segment in SEGMENTS {
                let mut longer = path.clone();
                longer.push(segment);
                next.push(longer);
            }
        }
        paths.extend(next.iter().cloned());
        frontier = next;
    }
    paths
        .into_iter()
        .map(|p| QualifiedName::from_segments(p).unwrap())
        .collect()
}

#[test]
fn derivation_is_injective_over_enumerated_names() {
    let names = all_names();
    let mut seen: HashMap<String, QualifiedName> = HashMap::new();
    for name in names {
        let accessor = accessor_name(&name).unwrap();
        if let Some(previous) = seen.insert(accessor.clone(), name.clone()) {
            panic!("`{}` and `{}` both map to `{}`", previous, name, accessor);
        }
    }
    assert_eq!(seen.len(), 8 + 8 * 8 + 8 * 8 * 8);
}

#[test]
fn decoding_inverts_derivation() {
    for name in all_names() {
        let accessor = accessor_name(&name).unwrap();
        let (decoded, tag) = decode_accessor(&accessor).unwrap();
        assert_eq!(decoded, name);
        assert!(tag.is_none());
    }
}

#[test]
fn overloaded_set_stays_injective() {
    let signatures = ["int (int)", "int (long)", "double (double)", "void ()"];
    let mut targets = Vec::new();
    for name in ["ns::f", "ns::g", "f"] {
        for signature in signatures {
            targets.push(Target::function(name, signature).unwrap());
        }
    }
    let names = assign_names(&targets).unwrap();
    assert_eq!(names.len(), targets.len());
    for binding in &names {
        let (decoded, tag) = decode_accessor(&binding.accessor).unwrap();
        assert_eq!(decoded, binding.target.name);
        assert!(tag.is_some());
    }
}

#[test]
fn documented_examples() {
    let foo = QualifiedName::parse("foo").unwrap();
    let bar = QualifiedName::parse("ns::ns2::bar").unwrap();
    assert_eq!(accessor_name(&foo).unwrap(), "get_foo_address");
    assert_eq!(accessor_name(&bar).unwrap(), "get_ns__ns2__bar_address");
}

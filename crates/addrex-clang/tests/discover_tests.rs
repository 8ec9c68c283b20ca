use addrex_clang::{discover, parse_ast_dump, CleanupOptions};
use addrex_naming::{assign_names, TargetKind};

const FOO_AST: &str = include_str!("fixtures/foo.ast");

#[test]
fn discovers_the_three_foo_targets() {
    let (cleaned, targets) = discover(FOO_AST, &CleanupOptions::default()).unwrap();
    assert!(cleaned.is_some());

    let found: Vec<_> = targets
        .iter()
        .map(|t| (t.name.cpp_path(), t.signature.as_str(), t.kind))
        .collect();
    assert_eq!(
        found,
        [
            ("foo".to_string(), "int (int)", TargetKind::Function),
            ("ns::ns2::bar".to_string(), "double (double)", TargetKind::Function),
            ("ns::BarCls::fun".to_string(), "int ()", TargetKind::StaticMethod),
        ]
    );
}

#[test]
fn discovered_targets_get_the_expected_accessors() {
    let (_, targets) = discover(FOO_AST, &CleanupOptions::default()).unwrap();
    let names = assign_names(&targets).unwrap();
    let accessors: Vec<_> = names.iter().map(|b| b.accessor.as_str()).collect();
    assert_eq!(
        accessors,
        ["get_foo_address", "get_ns__ns2__bar_address", "get_ns__BarCls__fun_address"]
    );
}

#[test]
fn render_shows_cleaned_declarations() {
    let (cleaned, _) = discover(FOO_AST, &CleanupOptions::default()).unwrap();
    let rendered = cleaned.unwrap().render();
    let expected = "\
TranslationUnitDecl:
  FunctionDecl:foo 'int (int)'
    ParmVarDecl:x 'int'
  NamespaceDecl:ns
    NamespaceDecl:ns2
      FunctionDecl:bar 'double (double)'
        ParmVarDecl:x 'double'
    CXXRecordDecl:class BarCls
      AccessSpecDecl:public
      CXXMethodDecl:fun 'int ()' static
      CXXMethodDecl:member 'int () const'
";
    assert_eq!(rendered, expected);
}

#[test]
fn project_headers_can_be_treated_as_system_headers() {
    let options = CleanupOptions {
        system_prefixes: vec!["foo.hpp".to_string()],
    };
    let (_, targets) = discover(FOO_AST, &options).unwrap();
    assert!(targets.is_empty());
}

#[test]
fn raw_tree_keeps_everything() {
    let root = parse_ast_dump(FOO_AST).unwrap();
    assert_eq!(root.children.len(), 6);
}

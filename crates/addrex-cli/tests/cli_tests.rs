use std::path::{Path, PathBuf};
use std::process::{Command, Output};

fn foo_ast() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../addrex-clang/tests/fixtures/foo.ast")
}

fn addrex(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_addrex"))
        .current_dir(dir)
        .args(args)
        .output()
        .expect("failed to run addrex")
}

fn stdout(output: &Output) -> String {
    assert!(
        output.status.success(),
        "addrex failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn names_lists_every_accessor() {
    let dir = tempfile::tempdir().unwrap();
    let ast = foo_ast();
    let out = stdout(&addrex(dir.path(), &["names", "--ast-dump", ast.to_str().unwrap()]));

    let accessors: Vec<_> = out.lines().filter_map(|l| l.split_whitespace().next()).collect();
    assert_eq!(
        accessors,
        ["get_foo_address", "get_ns__ns2__bar_address", "get_ns__BarCls__fun_address"]
    );
}

#[test]
fn dump_prints_the_cleaned_tree() {
    let dir = tempfile::tempdir().unwrap();
    let ast = foo_ast();
    let out = stdout(&addrex(dir.path(), &["dump", "--ast-dump", ast.to_str().unwrap()]));
    assert!(out.starts_with("TranslationUnitDecl:\n"));
    assert!(out.contains("    CXXRecordDecl:class BarCls\n"));
}

#[test]
fn gen_writes_shim_and_python_module() {
    let dir = tempfile::tempdir().unwrap();
    let ast = foo_ast();
    let out_dir = dir.path().join("out");
    let out = stdout(&addrex(
        dir.path(),
        &[
            "gen",
            "--ast-dump",
            ast.to_str().unwrap(),
            "-m",
            "libfoo",
            "-o",
            out_dir.to_str().unwrap(),
        ],
    ));
    assert!(out.contains(&format!("DONE. Try: LD_LIBRARY_PATH={}", out_dir.display())));

    let cpp = std::fs::read_to_string(out_dir.join("addrex_libfoo.cpp")).unwrap();
    let python = std::fs::read_to_string(out_dir.join("libfoo.py")).unwrap();
    for accessor in ["get_foo_address", "get_ns__ns2__bar_address", "get_ns__BarCls__fun_address"] {
        assert!(cpp.contains(accessor));
        assert!(python.contains(accessor));
    }
}

#[test]
fn gen_reads_module_name_from_config() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("addrex.toml"), "[module]\nname = \"geometry\"\n").unwrap();
    let ast = foo_ast();
    stdout(&addrex(dir.path(), &["gen", "--ast-dump", ast.to_str().unwrap()]));
    assert!(dir.path().join("addrex_geometry.cpp").is_file());
    assert!(dir.path().join("geometry.py").is_file());
}

#[test]
fn gen_without_inputs_fails() {
    let dir = tempfile::tempdir().unwrap();
    let output = addrex(dir.path(), &["gen"]);
    assert!(!output.status.success());
    assert!(!dir.path().join("addrex_lib.cpp").exists());
}

#[test]
fn broken_config_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("addrex.toml"), "[module\n").unwrap();
    let output = addrex(dir.path(), &["names", "--ast-dump", foo_ast().to_str().unwrap()]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("addrex.toml"));
}

#[test]
fn clang_flag_options_are_accepted() {
    let dir = tempfile::tempdir().unwrap();
    let ast = foo_ast();
    let out = stdout(&addrex(
        dir.path(),
        &[
            "names",
            "--ast-dump",
            ast.to_str().unwrap(),
            "--clang-ast-dump-flags",
            "-Xclang -ast-dump -fsyntax-only",
            "--clang-build-flags",
            "-shared -fPIC -O2",
        ],
    ));
    assert!(out.contains("get_foo_address"));
}

use std::path::{Path, PathBuf};

use addrex_codegen::{generate, ModuleSpec};

use crate::commands::Inputs;
use crate::error::CliError;
use crate::io::create_dir;

#[derive(Debug)]
pub struct GenOptions {
    pub module: Option<String>,
    pub output: PathBuf,
    pub build: bool,
    pub strict: bool,
}

pub fn handle_gen(inputs: Inputs, options: GenOptions) -> Result<(), CliError> {
    let name = module_name(&inputs, options.module.as_deref())?;
    let strict = options.strict || inputs.config.naming.strict;
    let bindings = inputs.bindings(strict)?;

    let headers = inputs
        .headers
        .iter()
        .map(|h| include_spelling(h, &options.output))
        .collect();
    let module = ModuleSpec::new(name, headers);
    let generated = generate(&module, &bindings);
    for symbol in &generated.skipped {
        log::warn!("`{}` has an accessor but no Python wrapper", symbol);
    }

    create_dir(&options.output)?;
    let (cpp_path, python_path) = generated.write_to(&options.output)?;
    println!("Generated {} accessor(s) for module `{}`", bindings.len(), module.name);
    println!("  {}", cpp_path.display());
    println!("  {}", python_path.display());

    if options.build {
        let library = options.output.join(module.library_file());
        let mut sources = inputs.sources.clone();
        sources.push(cpp_path);
        log::info!("Building {}", library.display());
        inputs.config.driver().build(&sources, &library)?;
        println!("  {}", library.display());
    }
    println!("{}", done_hint(&options.output, &module.name));
    Ok(())
}

/// Shell line importing the generated module from where it was written.
fn done_hint(output: &Path, module: &str) -> String {
    let import = format!("python -c \"import {} as m; print(m.__all__)\"", module);
    if output == Path::new(".") {
        format!("DONE. Try: LD_LIBRARY_PATH=. {}", import)
    } else {
        let dir = output.display();
        format!("DONE. Try: LD_LIBRARY_PATH={dir} PYTHONPATH={dir} {import}")
    }
}

/// `-m`, then `[module] name`, then `lib<stem>` of the first header or dump.
fn module_name(inputs: &Inputs, flag: Option<&str>) -> Result<String, CliError> {
    if let Some(name) = flag.or(inputs.config.module.name.as_deref()) {
        return Ok(name.to_string());
    }
    inputs
        .headers
        .first()
        .or(inputs.ast_dump.as_ref())
        .and_then(|p| p.file_stem())
        .and_then(|s| s.to_str())
        .map(|stem| format!("lib{}", stem))
        .ok_or(CliError::MissingModuleName)
}

/// How the shim written to `output` should `#include` `header`.
fn include_spelling(header: &Path, output: &Path) -> String {
    if header.is_absolute() || output == Path::new(".") {
        return header.display().to_string();
    }
    header
        .canonicalize()
        .unwrap_or_else(|_| header.to_path_buf())
        .display()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::InputArgs;
    use crate::config::AddrexConfig;

    fn inputs(files: &[&str], ast_dump: Option<&str>) -> Inputs {
        InputArgs {
            files: files.iter().map(PathBuf::from).collect(),
            ast_dump: ast_dump.map(PathBuf::from),
            ..InputArgs::default()
        }
        .resolve(AddrexConfig::default())
    }

    #[test]
    fn module_name_precedence() {
        let from_header = inputs(&["include/foo.hpp", "foo.cpp"], None);
        assert_eq!(module_name(&from_header, None).unwrap(), "libfoo");
        assert_eq!(module_name(&from_header, Some("geo")).unwrap(), "geo");

        let from_dump = inputs(&[], Some("saved/bar.ast"));
        assert_eq!(module_name(&from_dump, None).unwrap(), "libbar");

        let mut configured = inputs(&["foo.hpp"], None);
        configured.config.module.name = Some("custom".into());
        assert_eq!(module_name(&configured, None).unwrap(), "custom");

        assert!(matches!(
            module_name(&inputs(&[], None), None),
            Err(CliError::MissingModuleName)
        ));
    }

    #[test]
    fn hint_points_at_the_output_directory() {
        assert_eq!(
            done_hint(Path::new("."), "libfoo"),
            "DONE. Try: LD_LIBRARY_PATH=. python -c \"import libfoo as m; print(m.__all__)\""
        );
        assert_eq!(
            done_hint(Path::new("build/py"), "libfoo"),
            "DONE. Try: LD_LIBRARY_PATH=build/py PYTHONPATH=build/py python -c \"import libfoo as m; print(m.__all__)\""
        );
    }

    #[test]
    fn includes_stay_relative_for_the_current_directory() {
        assert_eq!(include_spelling(Path::new("foo.hpp"), Path::new(".")), "foo.hpp");
        assert_eq!(include_spelling(Path::new("/x/foo.hpp"), Path::new("out")), "/x/foo.hpp");
    }
}

pub mod dump;
pub mod gen;
pub mod names;

use std::path::{Path, PathBuf};

use addrex_clang::{discover, Node};
use addrex_naming::{assign_names, BindingName, NamingError, Target};

use crate::config::AddrexConfig;
use crate::error::CliError;
use crate::io::read_file;

const HEADER_EXTENSIONS: &[&str] = &["h", "hpp", "hxx"];

/// Where declarations come from. Shared by every subcommand.
#[derive(clap::Args, Debug, Default)]
pub struct InputArgs {
    /// Headers to scan (.h, .hpp, .hxx); other files are sources for `--build`
    #[arg(value_name = "FILES")]
    pub files: Vec<PathBuf>,
    /// Read a saved `clang -ast-dump` output instead of running clang
    #[arg(long, value_name = "PATH")]
    pub ast_dump: Option<PathBuf>,
    /// Clang executable
    #[arg(long, value_name = "EXE")]
    pub clang_exe: Option<String>,
    /// Flags producing the AST dump
    #[arg(long, value_name = "FLAGS", allow_hyphen_values = true)]
    pub clang_ast_dump_flags: Option<String>,
    /// Flags building the shared library
    #[arg(long, value_name = "FLAGS", allow_hyphen_values = true)]
    pub clang_build_flags: Option<String>,
    /// Flags passed to every clang invocation
    #[arg(long, value_name = "FLAGS", allow_hyphen_values = true)]
    pub clang_extra_flags: Option<String>,
}

/// Inputs after merging the command line over `addrex.toml`.
#[derive(Debug)]
pub struct Inputs {
    pub config: AddrexConfig,
    pub headers: Vec<PathBuf>,
    pub sources: Vec<PathBuf>,
    pub ast_dump: Option<PathBuf>,
}

pub fn is_header(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map_or(false, |ext| HEADER_EXTENSIONS.contains(&ext))
}

impl InputArgs {
    pub fn resolve(self, mut config: AddrexConfig) -> Inputs {
        if let Some(exe) = self.clang_exe {
            config.clang.exe = Some(exe);
        }
        if let Some(flags) = self.clang_ast_dump_flags {
            config.clang.dump_flags = Some(flags);
        }
        if let Some(flags) = self.clang_build_flags {
            config.clang.build_flags = Some(flags);
        }
        if let Some(flags) = self.clang_extra_flags {
            config.clang.extra_flags = Some(flags);
        }

        let (headers, sources) = if self.files.is_empty() {
            (config.module.headers.clone(), config.module.sources.clone())
        } else {
            self.files.into_iter().partition(|f| is_header(f))
        };

        Inputs {
            config,
            headers,
            sources,
            ast_dump: self.ast_dump,
        }
    }
}

impl Inputs {
    /// The textual AST dump, read from `--ast-dump` or produced by clang.
    pub fn ast_dump(&self) -> Result<String, CliError> {
        if let Some(path) = &self.ast_dump {
            log::info!("Reading AST dump from {}", path.display());
            return read_file(path);
        }
        if self.headers.is_empty() {
            return Err(CliError::NoHeaders);
        }
        log::info!("Dumping declarations of {} header(s)", self.headers.len());
        Ok(self.config.driver().dump(&self.headers)?)
    }

    pub fn discover(&self) -> Result<(Option<Node>, Vec<Target>), CliError> {
        let dump = self.ast_dump()?;
        Ok(discover(&dump, &self.config.cleanup_options())?)
    }

    /// Discovers targets and names them.
    ///
    /// Targets whose names cannot be mangled are skipped with a warning, or
    /// fail the whole run when `strict` is set.
    pub fn bindings(&self, strict: bool) -> Result<Vec<BindingName>, CliError> {
        let (_, targets) = self.discover()?;
        let targets = filter_nameable(targets, strict)?;
        Ok(assign_names(&targets)?)
    }
}

pub fn filter_nameable(targets: Vec<Target>, strict: bool) -> Result<Vec<Target>, CliError> {
    let mut kept = Vec::with_capacity(targets.len());
    let mut errors: Vec<NamingError> = Vec::new();
    for target in targets {
        match target.name.mangled() {
            Ok(_) => kept.push(target),
            Err(err) => {
                log::warn!("Skipping `{}`: {}", target.name, err);
                errors.push(err);
            }
        }
    }
    if strict && !errors.is_empty() {
        return Err(CliError::UnnameableTargets {
            count: errors.len(),
            errors,
        });
    }
    Ok(kept)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn files_are_split_by_extension() {
        let args = InputArgs {
            files: ["foo.hpp", "foo.cpp", "bar.h", "baz.hxx", "util.cc"]
                .iter()
                .map(PathBuf::from)
                .collect(),
            ..InputArgs::default()
        };
        let inputs = args.resolve(AddrexConfig::default());
        assert_eq!(inputs.headers, [PathBuf::from("foo.hpp"), "bar.h".into(), "baz.hxx".into()]);
        assert_eq!(inputs.sources, [PathBuf::from("foo.cpp"), "util.cc".into()]);
    }

    #[test]
    fn command_line_overrides_config() {
        let mut config = AddrexConfig::default();
        config.module.headers = vec!["from_config.hpp".into()];
        config.clang.exe = Some("clang++-15".into());

        let inherited = InputArgs::default().resolve(config.clone());
        assert_eq!(inherited.headers, [PathBuf::from("from_config.hpp")]);
        assert_eq!(inherited.config.driver().exe, "clang++-15");

        let overridden = InputArgs {
            files: vec!["cli.hpp".into()],
            clang_exe: Some("clang++".into()),
            ..InputArgs::default()
        }
        .resolve(config);
        assert_eq!(overridden.headers, [PathBuf::from("cli.hpp")]);
        assert_eq!(overridden.config.driver().exe, "clang++");
    }

    #[test]
    fn clang_flags_override_config() {
        let mut config = AddrexConfig::default();
        config.clang.dump_flags = Some("-Xclang -ast-dump".into());
        config.clang.build_flags = Some("-shared".into());

        let driver = InputArgs {
            clang_ast_dump_flags: Some("-Xclang -ast-dump -fsyntax-only -std=c++20".into()),
            clang_build_flags: Some("-shared -fPIC -O2".into()),
            ..InputArgs::default()
        }
        .resolve(config)
        .config
        .driver();
        assert_eq!(driver.dump_flags, "-Xclang -ast-dump -fsyntax-only -std=c++20");
        assert_eq!(driver.build_flags, "-shared -fPIC -O2");
    }

    #[test]
    fn no_headers_without_a_dump_is_an_error() {
        let inputs = InputArgs::default().resolve(AddrexConfig::default());
        assert!(matches!(inputs.ast_dump(), Err(CliError::NoHeaders)));
    }

    #[test]
    fn unnameable_targets_are_skipped_unless_strict() {
        let targets = vec![
            Target::function("ok", "void ()").unwrap(),
            Target::function("ns::bad__name", "void ()").unwrap(),
        ];
        let kept = filter_nameable(targets.clone(), false).unwrap();
        assert_eq!(kept, targets[..1]);

        match filter_nameable(targets, true) {
            Err(CliError::UnnameableTargets { count, .. }) => assert_eq!(count, 1),
            other => panic!("unexpected result: {:?}", other),
        }
    }
}

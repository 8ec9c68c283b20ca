use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_verbosity_flag::{Verbosity, WarnLevel};

mod commands;
mod config;
mod error;
mod io;

use commands::gen::GenOptions;
use commands::InputArgs;

#[derive(Parser, Debug)]
#[command(name = "addrex")]
#[command(about = "Export C++ function addresses through named accessors", long_about = None)]
struct Args {
    #[command(flatten)]
    verbose: Verbosity<WarnLevel>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate the C++ accessor shim and its Python module
    Gen {
        #[command(flatten)]
        inputs: InputArgs,
        /// Python module name (defaults to lib<first header stem>)
        #[arg(short, long, value_name = "NAME")]
        module: Option<String>,
        /// Directory the generated files are written to
        #[arg(short, long, value_name = "DIR", default_value = ".")]
        output: PathBuf,
        /// Compile the sources and the shim into a shared library
        #[arg(long)]
        build: bool,
        /// Fail on declarations that cannot be named instead of skipping them
        #[arg(long)]
        strict: bool,
    },

    /// List the accessor each declaration would get
    Names {
        #[command(flatten)]
        inputs: InputArgs,
    },

    /// Show the declaration tree left after cleanup
    Dump {
        #[command(flatten)]
        inputs: InputArgs,
    },
}

fn main() -> miette::Result<()> {
    let args = Args::parse();

    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .format_timestamp(None)
        .init();

    let config = config::load_config(&io::current_dir()?)?;

    match args.command {
        Command::Gen {
            inputs,
            module,
            output,
            build,
            strict,
        } => commands::gen::handle_gen(
            inputs.resolve(config),
            GenOptions {
                module,
                output,
                build,
                strict,
            },
        )?,
        Command::Names { inputs } => {
            let inputs = inputs.resolve(config);
            let strict = inputs.config.naming.strict;
            commands::names::handle_names(inputs, strict)?
        }
        Command::Dump { inputs } => commands::dump::handle_dump(inputs.resolve(config))?,
    }

    Ok(())
}

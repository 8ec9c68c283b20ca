use addrex_naming::{BindingName, TargetKind};

use crate::commands::Inputs;
use crate::error::CliError;

pub fn handle_names(inputs: Inputs, strict: bool) -> Result<(), CliError> {
    let bindings = inputs.bindings(strict)?;
    print!("{}", format_table(&bindings));
    Ok(())
}

/// One row per binding: accessor, kind, qualified target and signature.
pub fn format_table(bindings: &[BindingName]) -> String {
    let width = bindings.iter().map(|b| b.accessor.len()).max().unwrap_or(0);
    let mut out = String::new();
    for binding in bindings {
        let kind = match binding.target.kind {
            TargetKind::Function => "fn",
            TargetKind::StaticMethod => "static",
        };
        out.push_str(&format!(
            "{:<width$}  {:<6}  {} `{}`\n",
            binding.accessor,
            kind,
            binding.target.name,
            binding.target.signature,
            width = width
        ));
    }
    out
}

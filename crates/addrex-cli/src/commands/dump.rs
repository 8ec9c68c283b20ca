use crate::commands::Inputs;
use crate::error::CliError;

pub fn handle_dump(inputs: Inputs) -> Result<(), CliError> {
    match inputs.discover()? {
        (Some(root), targets) => {
            print!("{}", root.render());
            log::info!("{} exportable function(s)", targets.len());
        }
        (None, _) => log::warn!("Nothing left after cleanup"),
    }
    Ok(())
}

pub mod env;
pub mod handlers;

use crate::presentation::cli::{Cli, Commands};
use clap::Parser;
use clap::error::ErrorKind;
use flagbits_core::{FlagError, Result};
use tracing::debug;

pub fn run() -> Result<()> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => return usage_error(e),
    };
    match cli.command {
        Some(Commands::Types) => {
            debug!("dispatch: types");
            handlers::handle_types()
        }
        Some(Commands::Show) => {
            debug!("dispatch: show");
            handlers::handle_show()
        }
        None => handlers::handle_decode(cli.decode.value, cli.decode.type_name),
    }
}

/// Help and version go out as clap prints them; anything else becomes an
/// argument error for the caller to report.
fn usage_error(e: clap::Error) -> Result<()> {
    match e.kind() {
        ErrorKind::DisplayHelp
        | ErrorKind::DisplayVersion
        | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => {
            e.print()?;
            Ok(())
        }
        _ => {
            let rendered = e.render().to_string();
            let line = rendered.lines().next().unwrap_or_default();
            let msg = line.strip_prefix("error: ").unwrap_or(line);
            Err(FlagError::Argument(msg.to_owned()))
        }
    }
}

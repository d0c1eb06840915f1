use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Decode a 64-bit value into its set bits",
    long_about = None,
    args_conflicts_with_subcommands = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[command(flatten)]
    pub decode: DecodeArgs,
}

#[derive(Args)]
pub struct DecodeArgs {
    /// Value to decode, in hex (`0x` prefix optional)
    pub value: Option<String>,

    /// Table used to name set bits (`<storage>/<TYPE>.yml`)
    #[arg(value_name = "TYPE")]
    pub type_name: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the flag tables in the storage directory
    Types,

    /// Open the storage directory in the file browser
    #[command(visible_alias = "db")]
    Show,
}

use std::path::PathBuf;

use clap::Parser;

/// Folio: a personal portfolio site with a chat assistant.
#[derive(Parser, Debug)]
#[command(name = "folio", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Profile TOML path override.
    #[arg(long)]
    pub profile: Option<PathBuf>,

    /// Address to bind (overrides server.host).
    #[arg(long)]
    pub host: Option<String>,

    /// Port to listen on (overrides server.port).
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Log level override (debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Print the assistant's system instruction and exit.
    #[arg(long)]
    pub print_prompt: bool,
}

pub fn parse() -> Args {
    Args::parse()
}

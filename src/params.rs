use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "flyq-client", about = "Check a FlyQ client configuration")]
pub struct Params {
    /// TOML file to load; defaults are used when absent.
    #[arg(long, env = "FLYQ_CLIENT_CONFIG")]
    pub config: Option<PathBuf>,

    #[arg(long, env = "FLYQ_CLIENT_ID")]
    pub client_id: Option<String>,

    /// Print the effective configuration as JSON.
    #[arg(long)]
    pub print: bool,
}

mod params;

use anyhow::{Context, Result};
use clap::Parser;
use flyq_client::Config;
use tracing::info;

use crate::params::Params;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    let params = Params::parse();

    let mut config = Config::load_or_default(params.config.as_ref())?;
    if let Some(client_id) = params.client_id {
        config.client_id = client_id;
    }

    let config = config.validated()?;
    info!(client_id = %config.client_id, "configuration is valid");

    if params.print {
        let rendered = serde_json::to_string_pretty(&*config)
            .context("rendering configuration as JSON")?;
        println!("{}", rendered);
    }
    Ok(())
}

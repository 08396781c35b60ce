//! userdir Server - HTTP REST API for the user directory
//!
//! Configuration comes from an optional `server.{toml,yaml,json}` file and
//! `USERDIR_SERVER__*` environment variables.

use server::ServerConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::load()?;

    server::start_server(config).await?;

    Ok(())
}

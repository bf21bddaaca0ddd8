use clap::Parser;

use worktrack_cli::{config::parse_port, init_tracing, run_server, Config};

#[derive(Parser)]
#[command(name = "worktrack")]
#[command(about = "Worktrack - feature and task tracking service")]
#[command(version)]
struct Cli {
    /// Address to listen on (overrides HOST)
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on (overrides PORT)
    #[arg(long, value_parser = parse_port)]
    port: Option<u16>,

    /// SQLite connection URL (overrides DB_URL)
    #[arg(long)]
    database_url: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing();

    let mut config = Config::from_env()?;
    if let Some(host) = cli.host {
        config.host = host;
    }
    if let Some(port) = cli.port {
        config.port = port;
    }
    if let Some(database_url) = cli.database_url {
        config.database_url = database_url;
    }

    run_server(config).await
}

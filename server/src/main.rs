use clap::Parser;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

use todo_server::Config;

#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    let config = Config::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let listener = TcpListener::bind(config.addr()).await?;
    info!(addr = %listener.local_addr()?, "listening");
    todo_server::run(listener, &config).await
}

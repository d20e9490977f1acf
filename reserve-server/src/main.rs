use reserve_server::{Config, Server, ServerState, print_banner};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Environment (dotenv, logging)
    dotenv::dotenv().ok();
    let config = Config::from_env();
    reserve_server::init_logger_with_file(Some(&config.log_level), config.log_dir.as_deref());

    print_banner();

    tracing::info!("Reserve server starting...");

    // 2. Initialize state - fails fast if the reservation store is unreachable
    let state = ServerState::initialize(&config).await?;

    // 3. Run the HTTP server until shutdown
    let server = Server::with_state(config, state);
    server.run().await
}

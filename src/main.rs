use color_eyre::eyre::{Result, WrapErr};
use reactsrv::common::{DEFAULT_PORT, ReactiveServer, ServerConfig};
use reactsrv::server::Server;

use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter("reactsrv=info,tower_http=info")
        .init();

    let args: Vec<String> = std::env::args().collect();

    let port = match args.get(1) {
        None => DEFAULT_PORT,
        Some(arg) => match arg.parse::<u16>() {
            Ok(port) => port,
            Err(_) => {
                let program = args.first().map_or("reactsrv", String::as_str);
                eprintln!("Usage: {program} [port]");
                eprintln!("  port: Port to bind to on 127.0.0.1 (default: {DEFAULT_PORT})");
                eprintln!();
                eprintln!("Endpoints:");
                eprintln!("  GET  /hello_world          plain text greeting");
                eprintln!("  POST /user                 JSON user in, JSON user out");
                eprintln!("  GET  /sse/random_numbers   event stream, one random number per second");
                eprintln!("  GET  /echo                 WebSocket echo");
                std::process::exit(1);
            }
        },
    };

    let config = ServerConfig::on_port(port);

    info!(address = %config.bind_addr, max_sessions = config.max_sessions, "Starting reactive server");

    let server = Server::new(config);
    server.run().await.wrap_err("Failed to run reactive server")?;

    Ok(())
}

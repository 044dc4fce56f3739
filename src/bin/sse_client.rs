use color_eyre::eyre::{Result, WrapErr};
use reactsrv::client::{ClientConfig, SseClient};
use reactsrv::pipeline::format_batch;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter("reactsrv=info")
        .init();

    let mut client = SseClient::connect(&ClientConfig::default())?;

    // Blocks until the first full batch is in
    let batch = client
        .next_batch()
        .await
        .wrap_err("Failed to read random numbers")?;
    println!("{}", format_batch(&batch));

    Ok(())
}

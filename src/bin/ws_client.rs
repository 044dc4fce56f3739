use color_eyre::eyre::{Result, WrapErr};
use reactsrv::client::{ClientConfig, WsEchoClient};

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter("reactsrv=info")
        .init();

    let reply = WsEchoClient::echo_once(&ClientConfig::default(), "Hello")
        .await
        .wrap_err("Echo exchange failed")?;
    println!("{reply}");

    Ok(())
}

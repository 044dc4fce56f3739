use color_eyre::eyre::{Result, WrapErr};
use reactsrv::client::{ClientConfig, RestClient};
use reactsrv::model::User;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter("reactsrv=info")
        .init();

    let user = User::new("Test", "test@example.org");
    let client = RestClient::new(ClientConfig::default())?;

    let created = client
        .create_user(&user)
        .await
        .wrap_err("Failed to create user")?;
    println!("{created}");

    Ok(())
}

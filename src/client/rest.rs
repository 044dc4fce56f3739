use super::ClientConfig;
use crate::Result;
use crate::model::User;
use crate::server::routes::{HELLO_WORLD_PATH, USER_PATH};
use http::header::ACCEPT;
use tracing::debug;

/// Request/response client for the greeting and user endpoints
///
/// # Examples
///
/// ```no_run
/// use reactsrv::client::{ClientConfig, RestClient};
/// use reactsrv::model::User;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = RestClient::new(ClientConfig::default())?;
///     let created = client.create_user(&User::new("Test", "test@example.org")).await?;
///     println!("{created}");
///     Ok(())
/// }
/// ```
pub struct RestClient {
    http: reqwest::Client,
    config: ClientConfig,
}

impl RestClient {
    pub fn new(config: ClientConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder().connect_timeout(config.connect_timeout);
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            http: builder.build()?,
            config,
        })
    }

    /// Sends one user to `POST /user` and returns the user the server sent back
    pub async fn create_user(&self, user: &User) -> Result<User> {
        let url = self.config.http_url(USER_PATH);
        debug!(%url, name = %user.name, "Creating user");

        let created = self
            .http
            .post(&url)
            .header(ACCEPT, "application/json")
            .json(user)
            .send()
            .await?
            .error_for_status()?
            .json::<User>()
            .await?;
        Ok(created)
    }

    /// Fetches the constant greeting
    pub async fn hello_world(&self) -> Result<String> {
        let url = self.config.http_url(HELLO_WORLD_PATH);
        let body = self
            .http
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;
        Ok(body)
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }
}

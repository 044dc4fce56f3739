/// Body served by `GET /hello_world`
pub const GREETING: &str = "hello world";

/// Constant one-shot response
pub async fn hello_world() -> &'static str {
    GREETING
}

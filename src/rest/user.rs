use crate::model::User;
use axum::Json;
use tracing::info;
use uuid::Uuid;

/// Accepts a user and returns it with an identifier
///
/// A caller-supplied identifier is kept; otherwise a fresh UUID v4 is
/// assigned. Nothing is stored.
pub async fn create_user(Json(user): Json<User>) -> Json<User> {
    let user = assign_id(user);
    info!(id = user.id.as_deref().unwrap_or_default(), name = %user.name, "Created user");
    Json(user)
}

pub fn assign_id(mut user: User) -> User {
    user.id.get_or_insert_with(|| Uuid::new_v4().to_string());
    user
}

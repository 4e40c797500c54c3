use std::sync::Arc;

use axum::{
    extract::Path, response::IntoResponse, routing::get, Extension, Json, Router,
};
use uuid::Uuid;

use crate::{
    db::ProfileExt,
    dtos::{FilterProfileDto, ProfileResponseDto},
    error::{ErrorMessage, HttpError},
    middleware::JWTAuthMiddeware,
    AppState,
};

pub fn users_handler() -> Router {
    Router::new().route("/user/:id", get(get_user_details))
}

/// Any authenticated caller may look up any user id; the response carries the
/// profile snapshot only, never the password hash.
pub async fn get_user_details(
    Path(user_id): Path<Uuid>,
    Extension(app_state): Extension<Arc<AppState>>,
    Extension(_auth): Extension<JWTAuthMiddeware>,
) -> Result<impl IntoResponse, HttpError> {
    let details = app_state
        .db_client
        .get_profile_details(user_id)
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?
        .ok_or_else(|| HttpError::bad_request(ErrorMessage::UserDoesNotExist.to_string()))?;

    Ok(Json(ProfileResponseDto {
        status: "success".to_string(),
        data: FilterProfileDto::filter_profile(&details),
    }))
}

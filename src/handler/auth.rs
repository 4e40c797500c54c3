use std::sync::Arc;

use axum::{http::StatusCode, response::IntoResponse, routing::post, Extension, Json, Router};
use validator::Validate;

use crate::{
    db::{ProfileExt, UserExt},
    dtos::{RegisterResponseDto, RegisterUserDto},
    error::{ErrorMessage, HttpError},
    models::profilemodel::UserProfile,
    service::referral::generate_referral_code,
    utils::password,
    AppState,
};

pub fn auth_handler() -> Router {
    Router::new().route("/register", post(register))
}

pub async fn register(
    Extension(app_state): Extension<Arc<AppState>>,
    Json(body): Json<RegisterUserDto>,
) -> Result<impl IntoResponse, HttpError> {
    body.validate().map_err(HttpError::from_validation_errors)?;

    let existing_user = app_state
        .db_client
        .get_user(None, Some(&body.email))
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?;

    if existing_user.is_some() {
        return Err(HttpError::validation_error(
            "email",
            ErrorMessage::EmailExist.to_string(),
        ));
    }

    // A blank code is treated the same as an absent one.
    let supplied_code = body
        .referral_code
        .as_deref()
        .filter(|code| !code.is_empty());

    let mut referrer: Option<UserProfile> = None;
    if let Some(code) = supplied_code {
        referrer = Some(
            app_state
                .db_client
                .get_profile_by_referral_code(code)
                .await
                .map_err(|e| HttpError::server_error(e.to_string()))?
                .ok_or_else(|| {
                    HttpError::validation_error(
                        "referral_code",
                        ErrorMessage::InvalidReferralCode.to_string(),
                    )
                })?,
        );
    }

    let hashed_password =
        password::hash(&body.password).map_err(|e| HttpError::server_error(e.to_string()))?;

    let referral_code = generate_referral_code();

    let user = app_state
        .db_client
        .register_user(
            body.username,
            body.email,
            hashed_password,
            referral_code,
            referrer.as_ref(),
        )
        .await
        .map_err(|e| {
            // The caller sees the flattened message; the cause stays in logs.
            tracing::error!("user registration failed: {}", e);
            HttpError::bad_request(ErrorMessage::FailedToCreateUser.to_string())
        })?;

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponseDto {
            status: "success".to_string(),
            user_id: user.id,
            message: "User registered successfully.".to_string(),
        }),
    ))
}

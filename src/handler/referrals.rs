use std::sync::Arc;

use axum::{
    extract::Query, response::IntoResponse, routing::get, Extension, Json, Router,
};
use validator::Validate;

use crate::{
    db::{ProfileExt, ReferralExt},
    dtos::{PageQueryDto, ReferralListItemDto, ReferralListResponseDto},
    error::HttpError,
    middleware::JWTAuthMiddeware,
    AppState,
};

pub const REFERRALS_PAGE_SIZE: usize = 20;

pub fn referrals_handler() -> Router {
    Router::new().route("/referrals", get(list_referrals))
}

pub async fn list_referrals(
    Query(query_params): Query<PageQueryDto>,
    Extension(app_state): Extension<Arc<AppState>>,
    Extension(user): Extension<JWTAuthMiddeware>,
) -> Result<impl IntoResponse, HttpError> {
    query_params
        .validate()
        .map_err(|e| HttpError::bad_request(e.to_string()))?;

    let page = query_params.page.unwrap_or(1);

    let profile = app_state
        .db_client
        .get_profile(user.user.id)
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?
        .ok_or(HttpError::server_error("User profile not found"))?;

    let count = app_state
        .db_client
        .get_referral_count(profile.id)
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?;

    let referrals = app_state
        .db_client
        .get_referrals(profile.id, page, REFERRALS_PAGE_SIZE)
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?;

    let next = if (page as i64) * (REFERRALS_PAGE_SIZE as i64) < count {
        Some(page + 1)
    } else {
        None
    };
    let previous = if page > 1 { Some(page - 1) } else { None };

    Ok(Json(ReferralListResponseDto {
        status: "success".to_string(),
        count,
        next,
        previous,
        results: ReferralListItemDto::filter_referrals(&referrals),
    }))
}

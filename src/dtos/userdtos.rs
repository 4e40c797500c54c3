use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::profilemodel::ProfileDetails;

#[derive(Validate, Debug, Default, Clone, Serialize, Deserialize)]
pub struct RegisterUserDto {
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,

    #[validate(
        length(min = 1, message = "Email is required"),
        email(message = "Email is invalid")
    )]
    pub email: String,

    /// Write-only: accepted on input, never echoed back.
    #[validate(
        length(min = 1, message = "Password is required"),
        length(min = 6, message = "Password must be at least 6 characters")
    )]
    pub password: String,

    pub referral_code: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RegisterResponseDto {
    pub status: String,
    pub user_id: Uuid,
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct FilterProfileDto {
    pub username: String,
    pub email: String,
    pub referral_code: String,
    pub registration_date: DateTime<Utc>,
}

impl FilterProfileDto {
    pub fn filter_profile(details: &ProfileDetails) -> Self {
        FilterProfileDto {
            username: details.username.to_owned(),
            email: details.email.to_owned(),
            referral_code: details.referral_code.to_owned(),
            registration_date: details.registration_date,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ProfileResponseDto {
    pub status: String,
    pub data: FilterProfileDto,
}

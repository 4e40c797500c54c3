use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One row per user, created in the same transaction as the user itself.
#[derive(Debug, Deserialize, Serialize, sqlx::FromRow, Clone)]
pub struct UserProfile {
    pub id: Uuid,
    pub user_id: Uuid,
    pub referral_code: String,
    pub registration_date: DateTime<Utc>,
}

/// Profile joined with its owning user, as returned by the details lookup.
#[derive(Debug, Deserialize, Serialize, sqlx::FromRow)]
pub struct ProfileDetails {
    pub username: String,
    pub email: String,
    pub referral_code: String,
    pub registration_date: DateTime<Utc>,
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Deserialize, Serialize, sqlx::FromRow)]
pub struct Referral {
    pub id: Uuid,
    pub referrer_id: Uuid,
    pub referred_user_id: Uuid,
    pub registration_date: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Serialize, sqlx::FromRow)]
pub struct ReferralPoints {
    pub id: Uuid,
    pub user_id: Uuid,
    pub points: i32,
    pub updated_at: DateTime<Utc>,
}

/// Joined row for the referrer-scoped listing: the referred user's profile
/// snapshot plus the timestamp of the referral edge itself.
#[derive(Debug, Deserialize, Serialize, sqlx::FromRow)]
pub struct ReferredUser {
    pub username: String,
    pub email: String,
    pub referral_code: String,
    pub registration_date: DateTime<Utc>,
    pub referred_at: DateTime<Utc>,
}

use async_trait::async_trait;
use uuid::Uuid;

use super::DBClient;
use crate::models::profilemodel::{ProfileDetails, UserProfile};

#[async_trait]
pub trait ProfileExt {
    async fn get_profile(&self, user_id: Uuid) -> Result<Option<UserProfile>, sqlx::Error>;

    async fn get_profile_by_referral_code(
        &self,
        referral_code: &str,
    ) -> Result<Option<UserProfile>, sqlx::Error>;

    async fn get_profile_details(
        &self,
        user_id: Uuid,
    ) -> Result<Option<ProfileDetails>, sqlx::Error>;
}

#[async_trait]
impl ProfileExt for DBClient {
    async fn get_profile(&self, user_id: Uuid) -> Result<Option<UserProfile>, sqlx::Error> {
        sqlx::query_as::<_, UserProfile>(
            r#"
        SELECT id, user_id, referral_code, registration_date
        FROM user_profiles
        WHERE user_id = $1"#,
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
    }

    async fn get_profile_by_referral_code(
        &self,
        referral_code: &str,
    ) -> Result<Option<UserProfile>, sqlx::Error> {
        sqlx::query_as::<_, UserProfile>(
            r#"
        SELECT id, user_id, referral_code, registration_date
        FROM user_profiles
        WHERE referral_code = $1"#,
        )
        .bind(referral_code)
        .fetch_optional(&self.pool)
        .await
    }

    async fn get_profile_details(
        &self,
        user_id: Uuid,
    ) -> Result<Option<ProfileDetails>, sqlx::Error> {
        sqlx::query_as::<_, ProfileDetails>(
            r#"
        SELECT u.username, u.email, p.referral_code, p.registration_date
        FROM user_profiles p
        JOIN users u ON u.id = p.user_id
        WHERE p.user_id = $1"#,
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
    }
}

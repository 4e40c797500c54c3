use async_trait::async_trait;
use uuid::Uuid;

use super::DBClient;
use crate::models::referralmodel::{Referral, ReferralPoints, ReferredUser};

#[async_trait]
pub trait ReferralExt {
    /// Page-sliced referrals made by the given profile, oldest first, joined
    /// with each referred user's profile snapshot.
    async fn get_referrals(
        &self,
        referrer_id: Uuid,
        page: u32,
        limit: usize,
    ) -> Result<Vec<ReferredUser>, sqlx::Error>;

    async fn get_referral_count(&self, referrer_id: Uuid) -> Result<i64, sqlx::Error>;

    async fn get_referral_by_referred_user(
        &self,
        referred_user_id: Uuid,
    ) -> Result<Option<Referral>, sqlx::Error>;

    async fn get_referral_points(
        &self,
        user_id: Uuid,
    ) -> Result<Option<ReferralPoints>, sqlx::Error>;
}

#[async_trait]
impl ReferralExt for DBClient {
    async fn get_referrals(
        &self,
        referrer_id: Uuid,
        page: u32,
        limit: usize,
    ) -> Result<Vec<ReferredUser>, sqlx::Error> {
        let offset = (page.saturating_sub(1) as i64) * limit as i64;

        sqlx::query_as::<_, ReferredUser>(
            r#"
        SELECT
            u.username,
            u.email,
            p.referral_code,
            p.registration_date,
            r.registration_date AS referred_at
        FROM referrals r
        JOIN user_profiles p ON p.id = r.referred_user_id
        JOIN users u ON u.id = p.user_id
        WHERE r.referrer_id = $1
        ORDER BY r.registration_date, r.id
        LIMIT $2 OFFSET $3"#,
        )
        .bind(referrer_id)
        .bind(limit as i64)
        .bind(offset)
        .fetch_all(&self.pool)
        .await
    }

    async fn get_referral_count(&self, referrer_id: Uuid) -> Result<i64, sqlx::Error> {
        let count: i64 =
            sqlx::query_scalar(r#"SELECT COUNT(*) FROM referrals WHERE referrer_id = $1"#)
                .bind(referrer_id)
                .fetch_one(&self.pool)
                .await?;

        Ok(count)
    }

    async fn get_referral_by_referred_user(
        &self,
        referred_user_id: Uuid,
    ) -> Result<Option<Referral>, sqlx::Error> {
        sqlx::query_as::<_, Referral>(
            r#"
        SELECT id, referrer_id, referred_user_id, registration_date
        FROM referrals
        WHERE referred_user_id = $1"#,
        )
        .bind(referred_user_id)
        .fetch_optional(&self.pool)
        .await
    }

    async fn get_referral_points(
        &self,
        user_id: Uuid,
    ) -> Result<Option<ReferralPoints>, sqlx::Error> {
        sqlx::query_as::<_, ReferralPoints>(
            r#"
        SELECT id, user_id, points, updated_at
        FROM referral_points
        WHERE user_id = $1"#,
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
    }
}

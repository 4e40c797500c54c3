use async_trait::async_trait;
use uuid::Uuid;

use super::DBClient;
use crate::models::{profilemodel::UserProfile, usermodel::User};

#[async_trait]
pub trait UserExt {
    async fn get_user(
        &self,
        user_id: Option<Uuid>,
        email: Option<&str>,
    ) -> Result<Option<User>, sqlx::Error>;

    async fn get_user_count(&self) -> Result<i64, sqlx::Error>;

    /// Runs the whole registration chain in one transaction: insert the user,
    /// insert its profile with the given referral code, and, when a referrer
    /// is present, insert the referral edge and upsert-increment the
    /// referrer's points row. A failure anywhere rolls back everything.
    async fn register_user<T: Into<String> + Send>(
        &self,
        username: T,
        email: T,
        password: T,
        referral_code: String,
        referrer: Option<&UserProfile>,
    ) -> Result<User, sqlx::Error>;
}

#[async_trait]
impl UserExt for DBClient {
    async fn get_user(
        &self,
        user_id: Option<Uuid>,
        email: Option<&str>,
    ) -> Result<Option<User>, sqlx::Error> {
        let mut user: Option<User> = None;

        if let Some(user_id) = user_id {
            user = sqlx::query_as::<_, User>(
                r#"
            SELECT id, username, email, password, created_at, updated_at
            FROM users
            WHERE id = $1"#,
            )
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await?;
        } else if let Some(email) = email {
            user = sqlx::query_as::<_, User>(
                r#"
            SELECT id, username, email, password, created_at, updated_at
            FROM users
            WHERE email = $1"#,
            )
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;
        }

        Ok(user)
    }

    async fn get_user_count(&self) -> Result<i64, sqlx::Error> {
        let count: i64 = sqlx::query_scalar(r#"SELECT COUNT(*) FROM users"#)
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    async fn register_user<T: Into<String> + Send>(
        &self,
        username: T,
        email: T,
        password: T,
        referral_code: String,
        referrer: Option<&UserProfile>,
    ) -> Result<User, sqlx::Error> {
        let mut tx = self.pool.begin().await?;

        let user = sqlx::query_as::<_, User>(
            r#"
        INSERT INTO users (username, email, password)
        VALUES ($1, $2, $3)
        RETURNING id, username, email, password, created_at, updated_at"#,
        )
        .bind(username.into())
        .bind(email.into())
        .bind(password.into())
        .fetch_one(&mut *tx)
        .await?;

        let profile = sqlx::query_as::<_, UserProfile>(
            r#"
        INSERT INTO user_profiles (user_id, referral_code)
        VALUES ($1, $2)
        RETURNING id, user_id, referral_code, registration_date"#,
        )
        .bind(user.id)
        .bind(&referral_code)
        .fetch_one(&mut *tx)
        .await?;

        if let Some(referrer) = referrer {
            // Edge first, points after: an unrecordable referral must not
            // award points.
            sqlx::query(
                r#"
            INSERT INTO referrals (referrer_id, referred_user_id)
            VALUES ($1, $2)"#,
            )
            .bind(referrer.id)
            .bind(profile.id)
            .execute(&mut *tx)
            .await?;

            sqlx::query(
                r#"
            INSERT INTO referral_points (user_id, points)
            VALUES ($1, 1)
            ON CONFLICT (user_id)
            DO UPDATE SET points = referral_points.points + 1, updated_at = NOW()"#,
            )
            .bind(referrer.user_id)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        Ok(user)
    }
}

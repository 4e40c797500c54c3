use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::referralmodel::ReferredUser;

#[derive(Serialize, Deserialize, Validate)]
pub struct PageQueryDto {
    #[validate(range(min = 1))]
    pub page: Option<u32>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ReferredUserDto {
    pub username: String,
    pub email: String,
    pub referral_code: String,
    pub registration_date: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ReferralListItemDto {
    pub referred_user: ReferredUserDto,
    pub registration_date: DateTime<Utc>,
}

impl ReferralListItemDto {
    pub fn filter_referral(row: &ReferredUser) -> Self {
        ReferralListItemDto {
            referred_user: ReferredUserDto {
                username: row.username.to_owned(),
                email: row.email.to_owned(),
                referral_code: row.referral_code.to_owned(),
                registration_date: row.registration_date,
            },
            registration_date: row.referred_at,
        }
    }

    pub fn filter_referrals(rows: &[ReferredUser]) -> Vec<ReferralListItemDto> {
        rows.iter().map(ReferralListItemDto::filter_referral).collect()
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ReferralListResponseDto {
    pub status: String,
    pub count: i64,
    pub next: Option<u32>,
    pub previous: Option<u32>,
    pub results: Vec<ReferralListItemDto>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(username: &str) -> ReferredUser {
        ReferredUser {
            username: username.to_string(),
            email: format!("{}@example.com", username),
            referral_code: "Zz9Aa0".to_string(),
            registration_date: Utc::now(),
            referred_at: Utc::now(),
        }
    }

    #[test]
    fn filter_referral_nests_the_profile_snapshot() {
        let r = row("bob");
        let dto = ReferralListItemDto::filter_referral(&r);
        assert_eq!(dto.referred_user.username, "bob");
        assert_eq!(dto.referred_user.email, "bob@example.com");
        assert_eq!(dto.registration_date, r.referred_at);
    }

    #[test]
    fn filter_referrals_preserves_order() {
        let rows = vec![row("first"), row("second")];
        let dtos = ReferralListItemDto::filter_referrals(&rows);
        assert_eq!(dtos.len(), 2);
        assert_eq!(dtos[0].referred_user.username, "first");
        assert_eq!(dtos[1].referred_user.username, "second");
    }
}

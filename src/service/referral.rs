use rand::{distr::Alphanumeric, Rng};

/// Codes are drawn uniformly from [A-Za-z0-9]; uniqueness is enforced by the
/// storage-level unique constraint, not by retrying here.
pub const REFERRAL_CODE_LENGTH: usize = 6;

pub fn generate_referral_code() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(REFERRAL_CODE_LENGTH)
        .map(char::from)
        .collect()
}

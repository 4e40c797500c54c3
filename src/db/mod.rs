use sqlx::{Pool, Postgres};

pub mod profiledb;
pub mod referraldb;
pub mod userdb;

pub use profiledb::ProfileExt;
pub use referraldb::ReferralExt;
pub use userdb::UserExt;

#[derive(Debug, Clone)]
pub struct DBClient {
    pool: Pool<Postgres>,
}

impl DBClient {
    pub fn new(pool: Pool<Postgres>) -> Self {
        DBClient { pool }
    }
}

/// Department, good and sale keys are PostgreSQL BIGINT.
pub type DbId = i64;

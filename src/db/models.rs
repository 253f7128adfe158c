use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A persisted user account. Rows are created on signup and read on login;
/// this system never updates or deletes them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DbUser {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

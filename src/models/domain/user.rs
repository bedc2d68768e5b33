use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identity-only view of a user. Registration, credentials and sessions live
/// outside this service.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, Copy)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Host,
    Participant,
}

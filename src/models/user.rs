use serde::{Deserialize, Serialize};

fn default_role() -> String {
    "staff".to_string()
}

/// Operator account in the `users` collection. The username doubles as the
/// document `_id`; the password is hashed client-side before the write.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct User {
    pub username: String,
    pub password_hash: String,
    #[serde(default = "default_role")]
    pub role: String,
    /// RFC 3339 creation timestamp.
    pub created_at: String,
}

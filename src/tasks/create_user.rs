//! User provisioning: hash a password and merge-write an operator account
//! keyed by username. Last write wins; an existing document with the same
//! username is overwritten without warning.

use chrono::Utc;
use mongodb::bson::{self, doc, Document};

use crate::database::MongoDb;
use crate::models::User;
use crate::utils::AdminError;

const USERS_COLLECTION: &str = "users";

pub const DEFAULT_ROLE: &str = "staff";
/// Fixed bcrypt work factor.
pub const HASH_COST: u32 = 10;

/// Positional arguments: `username password [role]`.
pub fn parse_args(args: &[String]) -> Result<(String, String, String), AdminError> {
    match args {
        [username, password] => Ok((username.clone(), password.clone(), DEFAULT_ROLE.to_string())),
        [username, password, role] => Ok((username.clone(), password.clone(), role.clone())),
        _ => Err(AdminError::Usage(
            "expected: <username> <password> [role]".to_string(),
        )),
    }
}

pub async fn run(db: &MongoDb, username: &str, password: &str, role: &str) -> Result<(), String> {
    let user = provision(db, username, password, role).await?;
    println!("✅ user {:?} written with role {:?}", user.username, user.role);
    Ok(())
}

pub fn hash_password(plain: &str) -> Result<String, String> {
    bcrypt::hash(plain, HASH_COST).map_err(|e| format!("failed to hash password: {}", e))
}

/// Hash the password and upsert the user document keyed by username. No
/// uniqueness or collision check: repeated invocation replaces the stored
/// fields, including the hash.
pub async fn provision(
    db: &MongoDb,
    username: &str,
    password: &str,
    role: &str,
) -> Result<User, String> {
    let user = User {
        username: username.to_string(),
        password_hash: hash_password(password)?,
        role: role.to_string(),
        created_at: Utc::now().to_rfc3339(),
    };

    let fields = bson::to_document(&user)
        .map_err(|e| format!("failed to serialize user {}: {}", username, e))?;

    let collection = db.collection::<Document>(USERS_COLLECTION);
    collection
        .update_one(doc! { "_id": &user.username }, doc! { "$set": fields })
        .upsert(true)
        .await
        .map_err(|e| format!("failed to write user {}: {}", username, e))?;

    Ok(user)
}

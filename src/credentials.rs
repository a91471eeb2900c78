use serde::Deserialize;
use std::env;
use std::fs;

use crate::utils::AdminError;

/// Environment variable carrying the credential blob as inline JSON.
pub const CREDENTIALS_VAR: &str = "GYM_ADMIN_CREDENTIALS";
/// Environment variable carrying a path to a credential JSON file.
pub const CREDENTIALS_FILE_VAR: &str = "GYM_ADMIN_CREDENTIALS_FILE";

const DEFAULT_URI: &str = "mongodb://localhost:27017";
const DEFAULT_DATABASE: &str = "gym";

fn default_database() -> String {
    DEFAULT_DATABASE.to_string()
}

/// Connection credentials for the document store.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StoreCredentials {
    pub uri: String,
    #[serde(default = "default_database")]
    pub database: String,
}

impl StoreCredentials {
    /// Ambient/default platform credentials (local developer instance).
    pub fn ambient() -> Self {
        Self {
            uri: DEFAULT_URI.to_string(),
            database: DEFAULT_DATABASE.to_string(),
        }
    }
}

/// Resolve credentials from the process environment.
///
/// Precedence: inline JSON blob, then credential file path. A path that is
/// set but unreadable falls back to ambient credentials with a warning;
/// neither variable set is an error.
pub fn resolve() -> Result<StoreCredentials, AdminError> {
    resolve_from(
        env::var(CREDENTIALS_VAR).ok(),
        env::var(CREDENTIALS_FILE_VAR).ok(),
    )
}

/// Branch selection over captured environment values, separated from
/// [`resolve`] so the precedence rules are testable without touching the
/// process environment.
pub fn resolve_from(
    blob: Option<String>,
    path: Option<String>,
) -> Result<StoreCredentials, AdminError> {
    if let Some(raw) = blob {
        return parse_blob(&raw);
    }

    if let Some(path) = path {
        return match fs::read_to_string(&path) {
            Ok(raw) => parse_blob(&raw),
            Err(e) => {
                log::warn!(
                    "⚠️  Credential file {} unreadable ({}) — using ambient credentials",
                    path,
                    e
                );
                Ok(StoreCredentials::ambient())
            }
        };
    }

    Err(AdminError::MissingCredential)
}

fn parse_blob(raw: &str) -> Result<StoreCredentials, AdminError> {
    serde_json::from_str(raw)
        .map_err(|e| AdminError::Credential(format!("invalid credential JSON: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    const BLOB: &str = r#"{"uri": "mongodb://db.example:27017", "database": "gym_prod"}"#;

    #[test]
    fn inline_blob_wins() {
        let creds = resolve_from(Some(BLOB.to_string()), Some("/does/not/matter".into())).unwrap();
        assert_eq!(creds.uri, "mongodb://db.example:27017");
        assert_eq!(creds.database, "gym_prod");
    }

    #[test]
    fn blob_database_defaults_when_omitted() {
        let creds =
            resolve_from(Some(r#"{"uri": "mongodb://db.example:27017"}"#.into()), None).unwrap();
        assert_eq!(creds.database, "gym");
    }

    #[test]
    fn file_path_is_loaded_and_parsed() {
        let path = env::temp_dir().join("gym-admin-creds-test.json");
        fs::write(&path, BLOB).unwrap();

        let creds = resolve_from(None, Some(path.to_string_lossy().into_owned())).unwrap();
        assert_eq!(creds.database, "gym_prod");

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn unreadable_file_falls_back_to_ambient() {
        let creds = resolve_from(None, Some("/nonexistent/creds.json".into())).unwrap();
        assert_eq!(creds, StoreCredentials::ambient());
    }

    #[test]
    fn nothing_set_is_missing_credential() {
        let err = resolve_from(None, None).unwrap_err();
        assert!(matches!(err, AdminError::MissingCredential));
    }

    #[test]
    fn malformed_blob_is_a_credential_error() {
        let err = resolve_from(Some("not json".into()), None).unwrap_err();
        assert!(matches!(err, AdminError::Credential(_)));
    }
}

use std::fmt;

#[derive(Debug)]
pub enum AdminError {
    MissingCredential,
    Credential(String),
    Usage(String),
}

impl fmt::Display for AdminError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AdminError::MissingCredential => write!(
                f,
                "no credentials configured: set GYM_ADMIN_CREDENTIALS or GYM_ADMIN_CREDENTIALS_FILE"
            ),
            AdminError::Credential(msg) => write!(f, "Credential error: {}", msg),
            AdminError::Usage(msg) => write!(f, "Usage error: {}", msg),
        }
    }
}

impl std::error::Error for AdminError {}

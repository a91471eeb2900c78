use mongodb::{Client, Collection, Database};
use std::error::Error;

use crate::credentials::{self, StoreCredentials};

#[derive(Clone)]
pub struct MongoDb {
    db: Database,
}

impl MongoDb {
    /// Open a handle for the given credentials and verify connectivity.
    pub async fn connect(creds: &StoreCredentials) -> Result<Self, Box<dyn Error>> {
        let mut client_options = mongodb::options::ClientOptions::parse(&creds.uri).await?;

        // One-shot scripts: fail fast instead of hanging on a dead store.
        client_options.connect_timeout = Some(std::time::Duration::from_secs(5));
        client_options.server_selection_timeout = Some(std::time::Duration::from_secs(5));

        let client = Client::with_options(client_options)?;
        let db = client.database(&creds.database);

        // Test connection
        db.list_collection_names().await?;
        log::info!("✅ Connected to MongoDB database: {}", creds.database);

        Ok(Self { db })
    }

    /// Resolve credentials from the environment and connect. Every binary's
    /// entry point builds its handle through here and passes it down
    /// explicitly; there is no process-wide client.
    pub async fn from_env() -> Result<Self, Box<dyn Error>> {
        let creds = credentials::resolve()?;
        Self::connect(&creds).await
    }

    pub fn collection<T: Send + Sync>(&self, name: &str) -> Collection<T> {
        self.db.collection(name)
    }
}

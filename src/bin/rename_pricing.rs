//! Rename every pricing document whose display name matches the old literal.

use dotenv::dotenv;
use gym_admin_tasks::{database::MongoDb, tasks::rename_pricing};
use std::process;

#[tokio::main]
async fn main() {
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let db = match MongoDb::from_env().await {
        Ok(db) => db,
        Err(e) => {
            log::error!("❌ setup failed: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = rename_pricing::run(&db).await {
        log::error!("❌ {}", e);
        process::exit(2);
    }
}

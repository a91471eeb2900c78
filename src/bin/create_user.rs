//! Provision an operator account: `create_user <username> <password> [role]`.

use dotenv::dotenv;
use gym_admin_tasks::{database::MongoDb, tasks::create_user};
use std::env;
use std::process;

#[tokio::main]
async fn main() {
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let args: Vec<String> = env::args().skip(1).collect();
    let (username, password, role) = match create_user::parse_args(&args) {
        Ok(parsed) => parsed,
        Err(e) => {
            eprintln!("{}", e);
            eprintln!("Usage: create_user <username> <password> [role]");
            process::exit(1);
        }
    };

    let db = match MongoDb::from_env().await {
        Ok(db) => db,
        Err(e) => {
            log::error!("❌ setup failed: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = create_user::run(&db, &username, &password, &role).await {
        log::error!("❌ {}", e);
        process::exit(2);
    }
}

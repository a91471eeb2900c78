//! One-shot administrative tasks for the gym MongoDB database.
//!
//! Each binary under `src/bin/` resolves credentials from the environment,
//! opens one database handle, runs a single task from [`tasks`], and exits
//! with `0` (success, including "nothing found"), `1` (usage or setup
//! failure) or `2` (runtime failure).

pub mod credentials;
pub mod database;
pub mod models;
pub mod tasks;
pub mod utils;
